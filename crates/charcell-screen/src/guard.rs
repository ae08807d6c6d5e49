//! RAII screen ownership
//!
//! Construction initializes the screen, drop terminates it, so a panic or
//! early return still restores the terminal.

use std::ops::{Deref, DerefMut};

use crate::driver::TerminalDriver;
use crate::screen::Screen;
use crate::ScreenError;

/// A [`Screen`] that terminates itself when dropped.
pub struct ScreenGuard<D: TerminalDriver> {
    screen: Screen<D>,
}

impl<D: TerminalDriver> ScreenGuard<D> {
    /// Build a screen around the driver and initialize it.
    pub fn acquire(driver: D) -> Result<Self, ScreenError> {
        let mut screen = Screen::new(driver);
        screen.initialize()?;
        Ok(ScreenGuard { screen })
    }
}

impl<D: TerminalDriver> Deref for ScreenGuard<D> {
    type Target = Screen<D>;

    fn deref(&self) -> &Screen<D> {
        &self.screen
    }
}

impl<D: TerminalDriver> DerefMut for ScreenGuard<D> {
    fn deref_mut(&mut self) -> &mut Screen<D> {
        &mut self.screen
    }
}

impl<D: TerminalDriver> Drop for ScreenGuard<D> {
    fn drop(&mut self) {
        // Restoring the terminal is best-effort during drop.
        let _ = self.screen.terminate();
    }
}
