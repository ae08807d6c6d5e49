//! Interactive terminal driver built on crossterm
//!
//! The driver owns stdout, switches the terminal into raw mode and the
//! alternate screen for the duration of a session, and restores both on
//! close. Glyph codes above ASCII are remapped to the equivalent Unicode
//! box-drawing and shading characters, and the packed attribute palette
//! is expanded through a precomputed 64-entry color-pair table.

use std::io::{self, Write};

use ::crossterm::style::Attribute as CtAttribute;
use ::crossterm::style::{Color as CtColor, Print, SetAttribute, SetBackgroundColor, SetForegroundColor};
use ::crossterm::terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use ::crossterm::{cursor, execute, queue};
use tracing::debug;

use charcell_screen::{Attribute, Color, DriverError, TerminalDriver};

fn dark_variant(color: Color) -> CtColor {
    match color.bits() {
        0 => CtColor::Black,
        1 => CtColor::DarkBlue,
        2 => CtColor::DarkGreen,
        3 => CtColor::DarkCyan,
        4 => CtColor::DarkRed,
        5 => CtColor::DarkMagenta,
        6 => CtColor::DarkYellow,
        _ => CtColor::Grey,
    }
}

fn bright_variant(color: Color) -> CtColor {
    match color.bits() {
        0 => CtColor::DarkGrey,
        1 => CtColor::Blue,
        2 => CtColor::Green,
        3 => CtColor::Cyan,
        4 => CtColor::Red,
        5 => CtColor::Magenta,
        6 => CtColor::Yellow,
        _ => CtColor::White,
    }
}

/// A [`TerminalDriver`] for the terminal the process is attached to.
pub struct CrosstermDriver {
    out: io::Stdout,
    /// (foreground, background) indexed by `(bg << 3) | fg`.
    pairs: Vec<(CtColor, CtColor)>,
    /// Rendered character for each 8-bit glyph code.
    glyphs: Vec<char>,
    raw_mode: bool,
}

impl CrosstermDriver {
    pub fn new() -> Self {
        let mut pairs = Vec::with_capacity(64);
        for background in 0..8u8 {
            for foreground in 0..8u8 {
                pairs.push((
                    dark_variant(Color::from_bits(foreground)),
                    dark_variant(Color::from_bits(background)),
                ));
            }
        }

        let mut glyphs: Vec<char> = (0u8..=255)
            .map(|code| if code.is_ascii() { code as char } else { '?' })
            .collect();
        for (code, rendered) in [
            (176u8, '░'),
            (177, '▒'),
            (179, '│'),
            (180, '┤'),
            (181, '╡'),
            (186, '║'),
            (187, '╗'),
            (188, '╝'),
            (191, '┐'),
            (192, '└'),
            (193, '┴'),
            (194, '┬'),
            (195, '├'),
            (196, '─'),
            (197, '┼'),
            (198, '╞'),
            (200, '╚'),
            (201, '╔'),
            (205, '═'),
            (206, '╬'),
            (208, '╨'),
            (210, '╥'),
            (217, '┘'),
            (218, '┌'),
            (219, '█'),
        ] {
            glyphs[code as usize] = rendered;
        }

        CrosstermDriver {
            out: io::stdout(),
            pairs,
            glyphs,
            raw_mode: false,
        }
    }
}

impl Default for CrosstermDriver {
    fn default() -> Self {
        CrosstermDriver::new()
    }
}

impl TerminalDriver for CrosstermDriver {
    fn open(&mut self) -> Result<(), DriverError> {
        terminal::enable_raw_mode()?;
        self.raw_mode = true;
        execute!(self.out, EnterAlternateScreen)?;
        debug!("terminal acquired");
        Ok(())
    }

    fn close(&mut self) -> Result<(), DriverError> {
        execute!(
            self.out,
            SetAttribute(CtAttribute::Reset),
            LeaveAlternateScreen
        )?;
        if self.raw_mode {
            terminal::disable_raw_mode()?;
            self.raw_mode = false;
        }
        debug!("terminal released");
        Ok(())
    }

    fn geometry(&mut self) -> Result<(u16, u16), DriverError> {
        let (columns, rows) = terminal::size()?;
        Ok((rows, columns))
    }

    fn supports_color(&self) -> bool {
        true
    }

    fn move_cursor(&mut self, row: u16, column: u16) -> Result<(), DriverError> {
        queue!(self.out, cursor::MoveTo(column - 1, row - 1))?;
        Ok(())
    }

    fn set_attribute(&mut self, attribute: Attribute) -> Result<(), DriverError> {
        let index = ((attribute.background().bits() << 3) | attribute.foreground().bits()) as usize;
        let (mut foreground, background) = self.pairs[index];
        if attribute.bright() {
            foreground = bright_variant(attribute.foreground());
        }
        queue!(
            self.out,
            SetAttribute(CtAttribute::Reset),
            SetForegroundColor(foreground),
            SetBackgroundColor(background)
        )?;
        if attribute.blink() {
            queue!(self.out, SetAttribute(CtAttribute::SlowBlink))?;
        }
        Ok(())
    }

    fn write_glyph(&mut self, glyph: u8) -> Result<(), DriverError> {
        queue!(self.out, Print(self.glyphs[glyph as usize]))?;
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<(), DriverError> {
        queue!(self.out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DriverError> {
        self.out.flush()?;
        Ok(())
    }

    fn glyph_for(&self, code: u8) -> char {
        self.glyphs[code as usize]
    }
}

impl Drop for CrosstermDriver {
    fn drop(&mut self) {
        if self.raw_mode {
            let _ = terminal::disable_raw_mode();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_color_combination_has_a_pair() {
        let driver = CrosstermDriver::new();
        assert_eq!(driver.pairs.len(), 64);

        let index = ((Color::BLUE.bits() << 3) | Color::WHITE.bits()) as usize;
        assert_eq!(driver.pairs[index], (CtColor::Grey, CtColor::DarkBlue));
    }

    #[test]
    fn box_glyphs_map_to_unicode_box_drawing() {
        let driver = CrosstermDriver::new();
        assert_eq!(driver.glyph_for(205), '═');
        assert_eq!(driver.glyph_for(186), '║');
        assert_eq!(driver.glyph_for(201), '╔');
        assert_eq!(driver.glyph_for(219), '█');
        assert_eq!(driver.glyph_for(177), '▒');
    }

    #[test]
    fn ascii_passes_through_unchanged() {
        let driver = CrosstermDriver::new();
        assert_eq!(driver.glyph_for(b'A'), 'A');
        assert_eq!(driver.glyph_for(b' '), ' ');
    }

    #[test]
    fn unmapped_high_codes_become_substitutes() {
        let driver = CrosstermDriver::new();
        assert_eq!(driver.glyph_for(0xFE), '?');
    }
}
