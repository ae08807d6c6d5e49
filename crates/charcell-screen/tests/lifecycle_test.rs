//! Nested initialize/terminate and failure handling.

use charcell_screen::{
    Attribute, DriverError, Screen, ScreenError, ScreenGuard, TerminalDriver,
};
use charcell_test_utils::{init_test_logging, DriverCommand, RecordingDriver};
use pretty_assertions::assert_eq;

#[test]
fn nested_initializes_open_the_driver_once() {
    init_test_logging();
    let mut screen = Screen::new(RecordingDriver::new(4, 4));

    screen.initialize().unwrap();
    screen.initialize().unwrap();
    screen.initialize().unwrap();

    let opens = screen
        .driver()
        .commands()
        .iter()
        .filter(|c| **c == DriverCommand::Open)
        .count();
    assert_eq!(opens, 1);
}

#[test]
fn only_the_matching_terminate_shuts_down() {
    init_test_logging();
    let mut screen = Screen::new(RecordingDriver::new(4, 4));
    screen.initialize().unwrap();
    screen.initialize().unwrap();

    screen.terminate().unwrap();

    assert!(screen.is_initialized());
    // Still fully usable between the inner terminate and the outer one.
    screen.print(1, 1, 4, Attribute::DEFAULT, "ok");
    screen.refresh().unwrap();
    assert!(!screen.driver().commands().contains(&DriverCommand::Close));

    screen.terminate().unwrap();
    assert!(!screen.is_initialized());
    assert!(screen.driver().commands().contains(&DriverCommand::Close));
}

#[test]
fn terminate_clears_the_terminal_before_closing() {
    init_test_logging();
    let mut screen = Screen::new(RecordingDriver::new(4, 4));
    screen.initialize().unwrap();
    screen.driver_mut().take_commands();

    screen.terminate().unwrap();

    assert_eq!(
        screen.driver().commands(),
        &[
            DriverCommand::ClearScreen,
            DriverCommand::MoveCursor(1, 1),
            DriverCommand::Flush,
            DriverCommand::Close,
        ]
    );
}

#[test]
fn terminate_without_initialize_is_a_no_op() {
    init_test_logging();
    let mut screen = Screen::new(RecordingDriver::new(4, 4));

    screen.terminate().unwrap();

    assert!(screen.driver().commands().is_empty());
}

#[test]
fn zero_geometry_fails_and_rolls_back() {
    init_test_logging();
    let mut screen = Screen::new(RecordingDriver::new(0, 80));

    let error = screen.initialize().unwrap_err();

    assert!(matches!(
        error,
        ScreenError::BadGeometry { rows: 0, columns: 80 }
    ));
    assert!(!screen.is_initialized());
    // The driver opened during the attempt must have been closed again.
    assert!(screen.driver().commands().contains(&DriverCommand::Close));
}

/// A driver whose open fails a configurable number of times.
struct FlakyDriver {
    inner: RecordingDriver,
    failures_left: u32,
}

impl TerminalDriver for FlakyDriver {
    fn open(&mut self) -> Result<(), DriverError> {
        if self.failures_left > 0 {
            self.failures_left -= 1;
            return Err(DriverError::Backend("terminal unavailable".into()));
        }
        self.inner.open()
    }

    fn close(&mut self) -> Result<(), DriverError> {
        self.inner.close()
    }

    fn geometry(&mut self) -> Result<(u16, u16), DriverError> {
        self.inner.geometry()
    }

    fn supports_color(&self) -> bool {
        self.inner.supports_color()
    }

    fn move_cursor(&mut self, row: u16, column: u16) -> Result<(), DriverError> {
        self.inner.move_cursor(row, column)
    }

    fn set_attribute(&mut self, attribute: Attribute) -> Result<(), DriverError> {
        self.inner.set_attribute(attribute)
    }

    fn write_glyph(&mut self, glyph: u8) -> Result<(), DriverError> {
        self.inner.write_glyph(glyph)
    }

    fn clear_screen(&mut self) -> Result<(), DriverError> {
        self.inner.clear_screen()
    }

    fn flush(&mut self) -> Result<(), DriverError> {
        self.inner.flush()
    }
}

#[test]
fn a_failed_initialize_can_be_retried() {
    init_test_logging();
    let driver = FlakyDriver {
        inner: RecordingDriver::new(4, 4),
        failures_left: 1,
    };
    let mut screen = Screen::new(driver);

    assert!(screen.initialize().is_err());
    assert!(!screen.is_initialized());

    screen.initialize().unwrap();
    assert!(screen.is_initialized());
    assert_eq!(screen.number_of_rows(), 4);
}

#[test]
fn guard_initializes_on_acquire_and_terminates_on_drop() {
    init_test_logging();
    let mut guard = ScreenGuard::acquire(RecordingDriver::new(3, 6)).unwrap();

    assert!(guard.is_initialized());
    assert_eq!(guard.number_of_columns(), 6);
    guard.print(1, 1, 6, Attribute::DEFAULT, "raii");
    guard.refresh().unwrap();
}
