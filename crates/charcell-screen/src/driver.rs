//! The terminal driver contract
//!
//! The engine never talks to a terminal directly; it drives one of these.
//! A driver is chosen at construction time and injected into
//! [`Screen`](crate::screen::Screen).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DriverError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("terminal backend error: {0}")]
    Backend(String),
}

/// The primitive operations a terminal backend must provide.
///
/// Coordinates are 1-based (row, column), matching the engine. A driver
/// may buffer output; the engine calls [`flush`](TerminalDriver::flush)
/// after each refresh, redraw, or screen clear.
pub trait TerminalDriver {
    /// Acquire the terminal: raw mode, palette tables, glyph tables,
    /// whatever the backend needs. Called once per engine lifetime, on the
    /// first `initialize()`.
    fn open(&mut self) -> Result<(), DriverError>;

    /// Release everything `open` acquired.
    fn close(&mut self) -> Result<(), DriverError>;

    /// The terminal size as (rows, columns).
    fn geometry(&mut self) -> Result<(u16, u16), DriverError>;

    /// Whether the terminal can render color. A `false` here makes the
    /// engine convert every attribute for monochrome visibility.
    fn supports_color(&self) -> bool;

    fn move_cursor(&mut self, row: u16, column: u16) -> Result<(), DriverError>;

    fn set_attribute(&mut self, attribute: crate::attr::Attribute) -> Result<(), DriverError>;

    /// Emit one glyph at the current cursor position. The terminal cursor
    /// advances one column.
    fn write_glyph(&mut self, glyph: u8) -> Result<(), DriverError>;

    /// Erase the whole physical screen and home the cursor, using the
    /// backend's fast path.
    fn clear_screen(&mut self) -> Result<(), DriverError>;

    fn flush(&mut self) -> Result<(), DriverError>;

    /// The native character a backend renders for an 8-bit glyph code.
    ///
    /// Backends that hand glyphs to a terminal-control library remap the
    /// box-drawing codes here; the default covers plain ASCII only.
    fn glyph_for(&self, code: u8) -> char {
        if code.is_ascii() {
            code as char
        } else {
            '?'
        }
    }
}
