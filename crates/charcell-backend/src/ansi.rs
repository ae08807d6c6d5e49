//! Escape-sequence driver
//!
//! Emits raw ANSI control sequences to any writer. Useful over dumb
//! serial links or when output is being captured, and for asserting on
//! exact terminal traffic in tests. The terminal size cannot be queried
//! through a plain writer, so the geometry is fixed at construction.

use std::io::Write;

use charcell_screen::{Attribute, DriverError, TerminalDriver};

/// SGR foreground codes indexed by the 3-bit color value; backgrounds are
/// the same codes plus ten.
const SGR_FOREGROUND: [u8; 8] = [30, 34, 32, 36, 31, 35, 33, 37];

/// A [`TerminalDriver`] that writes ANSI escape sequences.
pub struct AnsiDriver<W: Write> {
    writer: W,
    rows: u16,
    columns: u16,
    color: bool,
}

impl<W: Write> AnsiDriver<W> {
    pub fn new(writer: W, rows: u16, columns: u16) -> Self {
        AnsiDriver {
            writer,
            rows,
            columns,
            color: true,
        }
    }

    /// A driver for a display that ignores color codes, so attributes are
    /// converted for monochrome visibility before they reach it.
    pub fn monochrome(writer: W, rows: u16, columns: u16) -> Self {
        AnsiDriver {
            color: false,
            ..AnsiDriver::new(writer, rows, columns)
        }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl<W: Write> TerminalDriver for AnsiDriver<W> {
    fn open(&mut self) -> Result<(), DriverError> {
        Ok(())
    }

    fn close(&mut self) -> Result<(), DriverError> {
        // Leave the terminal with its own default rendition.
        write!(self.writer, "\x1b[0m")?;
        self.writer.flush()?;
        Ok(())
    }

    fn geometry(&mut self) -> Result<(u16, u16), DriverError> {
        Ok((self.rows, self.columns))
    }

    fn supports_color(&self) -> bool {
        self.color
    }

    fn move_cursor(&mut self, row: u16, column: u16) -> Result<(), DriverError> {
        write!(self.writer, "\x1b[{};{}H", row, column)?;
        Ok(())
    }

    fn set_attribute(&mut self, attribute: Attribute) -> Result<(), DriverError> {
        // One combined SGR: reset, then effects, then both colors.
        write!(self.writer, "\x1b[0")?;
        if attribute.bright() {
            write!(self.writer, ";1")?;
        }
        if attribute.blink() {
            write!(self.writer, ";5")?;
        }
        let foreground = SGR_FOREGROUND[attribute.foreground().bits() as usize];
        let background = SGR_FOREGROUND[attribute.background().bits() as usize] + 10;
        write!(self.writer, ";{};{}m", foreground, background)?;
        Ok(())
    }

    fn write_glyph(&mut self, glyph: u8) -> Result<(), DriverError> {
        let mut encoded = [0u8; 4];
        let rendered = self.glyph_for(glyph).encode_utf8(&mut encoded);
        self.writer.write_all(rendered.as_bytes())?;
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<(), DriverError> {
        write!(self.writer, "\x1b[2J\x1b[H")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DriverError> {
        self.writer.flush()?;
        Ok(())
    }
}
