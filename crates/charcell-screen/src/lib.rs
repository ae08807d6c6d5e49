//! Portable character-cell display engine
//!
//! Maintains a virtual screen buffer of (glyph, attribute) cells and
//! synchronizes it with a real terminal through an injected driver, using a
//! diff-based refresh that emits the minimal set of terminal commands.

pub mod attr;
pub mod boxes;
pub mod buffer;
pub mod cell;
pub mod drawing;
pub mod driver;
pub mod guard;
pub mod region;
pub mod screen;

pub use attr::{Attribute, Color};
pub use boxes::{box_characters, box_characters_ascii_only, BoxChars, BoxStyle};
pub use buffer::{Direction, ScreenBuffer};
pub use cell::Cell;
pub use drawing::{center, draw_border, fill_box, fill_shadowed_box};
pub use driver::{DriverError, TerminalDriver};
pub use guard::ScreenGuard;
pub use region::Region;
pub use screen::Screen;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScreenError {
    #[error("terminal driver error: {0}")]
    Driver(#[from] DriverError),

    #[error("terminal reported unusable geometry: {rows} rows x {columns} columns")]
    BadGeometry { rows: u16, columns: u16 },
}
