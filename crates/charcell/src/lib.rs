//! Character-cell display engine
//!
//! Re-exports the engine and the bundled terminal drivers so most users
//! need only this crate.

pub mod demo;

pub use charcell_backend::{AnsiDriver, CrosstermDriver, MemoryDriver};
pub use charcell_screen::{
    box_characters, center, draw_border, fill_box, fill_shadowed_box, Attribute, BoxChars,
    BoxStyle, Cell, Color, Direction, DriverError, Region, Screen, ScreenBuffer, ScreenError,
    ScreenGuard, TerminalDriver,
};
