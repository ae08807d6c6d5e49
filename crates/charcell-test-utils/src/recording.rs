//! A driver that records every command it receives
//!
//! Tests assert on the exact command sequence a display update produced,
//! which is how the minimal-update guarantees are checked.

use charcell_screen::{Attribute, DriverError, TerminalDriver};

/// One call made against a [`RecordingDriver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverCommand {
    Open,
    Close,
    MoveCursor(u16, u16),
    SetAttribute(Attribute),
    WriteGlyph(u8),
    ClearScreen,
    Flush,
}

/// A [`TerminalDriver`] with fixed geometry that performs no I/O and
/// remembers the commands it was given.
pub struct RecordingDriver {
    rows: u16,
    columns: u16,
    color: bool,
    commands: Vec<DriverCommand>,
}

impl RecordingDriver {
    pub fn new(rows: u16, columns: u16) -> Self {
        RecordingDriver {
            rows,
            columns,
            color: true,
            commands: Vec::new(),
        }
    }

    /// Like [`new`](RecordingDriver::new) but reporting no color support,
    /// for exercising monochrome attribute conversion.
    pub fn monochrome(rows: u16, columns: u16) -> Self {
        RecordingDriver {
            rows,
            columns,
            color: false,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DriverCommand] {
        &self.commands
    }

    /// Return the recorded commands and reset the log, so tests can
    /// inspect one phase of a scenario at a time.
    pub fn take_commands(&mut self) -> Vec<DriverCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl TerminalDriver for RecordingDriver {
    fn open(&mut self) -> Result<(), DriverError> {
        self.commands.push(DriverCommand::Open);
        Ok(())
    }

    fn close(&mut self) -> Result<(), DriverError> {
        self.commands.push(DriverCommand::Close);
        Ok(())
    }

    fn geometry(&mut self) -> Result<(u16, u16), DriverError> {
        Ok((self.rows, self.columns))
    }

    fn supports_color(&self) -> bool {
        self.color
    }

    fn move_cursor(&mut self, row: u16, column: u16) -> Result<(), DriverError> {
        self.commands.push(DriverCommand::MoveCursor(row, column));
        Ok(())
    }

    fn set_attribute(&mut self, attribute: Attribute) -> Result<(), DriverError> {
        self.commands.push(DriverCommand::SetAttribute(attribute));
        Ok(())
    }

    fn write_glyph(&mut self, glyph: u8) -> Result<(), DriverError> {
        self.commands.push(DriverCommand::WriteGlyph(glyph));
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<(), DriverError> {
        self.commands.push(DriverCommand::ClearScreen);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DriverError> {
        self.commands.push(DriverCommand::Flush);
        Ok(())
    }
}
