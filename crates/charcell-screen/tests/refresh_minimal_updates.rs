//! Command-level tests of the display update algorithm.

use charcell_screen::{Attribute, Color, Region, Screen};
use charcell_test_utils::{init_test_logging, DriverCommand, RecordingDriver};
use pretty_assertions::assert_eq;

fn initialized(rows: u16, columns: u16) -> Screen<RecordingDriver> {
    init_test_logging();
    let mut screen = Screen::new(RecordingDriver::new(rows, columns));
    screen.initialize().unwrap();
    screen.driver_mut().take_commands();
    screen
}

#[test]
fn initialize_clears_and_homes_the_terminal() {
    init_test_logging();
    let mut screen = Screen::new(RecordingDriver::new(5, 10));
    screen.initialize().unwrap();

    assert_eq!(
        screen.driver().commands(),
        &[
            DriverCommand::Open,
            DriverCommand::ClearScreen,
            DriverCommand::MoveCursor(1, 1),
            DriverCommand::Flush,
        ]
    );
}

#[test]
fn adjacent_cells_need_one_cursor_motion_and_one_attribute() {
    let mut screen = initialized(5, 10);
    screen.print(2, 3, 10, Attribute::DEFAULT, "AB");

    screen.refresh().unwrap();

    assert_eq!(
        screen.driver_mut().take_commands(),
        vec![
            DriverCommand::MoveCursor(2, 3),
            DriverCommand::SetAttribute(Attribute::DEFAULT),
            DriverCommand::WriteGlyph(b'A'),
            DriverCommand::WriteGlyph(b'B'),
            DriverCommand::MoveCursor(1, 1),
            DriverCommand::Flush,
        ]
    );
}

#[test]
fn first_paint_at_home_needs_no_leading_motion() {
    let mut screen = initialized(5, 10);
    screen.print(1, 1, 10, Attribute::DEFAULT, "AB");

    screen.refresh().unwrap();

    // The tracked cursor already sits at (1,1) after initialize, so the
    // only motion is the final positioning back to the virtual cursor.
    assert_eq!(
        screen.driver_mut().take_commands(),
        vec![
            DriverCommand::SetAttribute(Attribute::DEFAULT),
            DriverCommand::WriteGlyph(b'A'),
            DriverCommand::WriteGlyph(b'B'),
            DriverCommand::MoveCursor(1, 1),
            DriverCommand::Flush,
        ]
    );
}

#[test]
fn a_second_refresh_emits_nothing() {
    let mut screen = initialized(5, 10);
    screen.print(1, 1, 10, Attribute::DEFAULT, "steady");
    screen.set_cursor_position(1, 7);
    screen.refresh().unwrap();
    screen.driver_mut().take_commands();

    screen.refresh().unwrap();

    assert!(screen.driver().commands().is_empty());
}

#[test]
fn attribute_changes_are_emitted_only_at_boundaries() {
    let mut screen = initialized(3, 10);
    let red = Attribute::new(Color::RED, Color::BLACK);
    let blue = Attribute::new(Color::BLUE, Color::BLACK);
    screen.print(1, 1, 10, red, "A");
    screen.print(1, 2, 10, blue, "B");

    screen.refresh().unwrap();

    assert_eq!(
        screen.driver_mut().take_commands(),
        vec![
            DriverCommand::MoveCursor(1, 1),
            DriverCommand::SetAttribute(red),
            DriverCommand::WriteGlyph(b'A'),
            DriverCommand::SetAttribute(blue),
            DriverCommand::WriteGlyph(b'B'),
            DriverCommand::MoveCursor(1, 1),
            DriverCommand::Flush,
        ]
    );
}

#[test]
fn clean_cells_between_dirty_ones_force_a_reposition() {
    let mut screen = initialized(3, 10);
    screen.print(1, 1, 10, Attribute::DEFAULT, "x");
    screen.print(1, 5, 10, Attribute::DEFAULT, "y");

    screen.refresh().unwrap();

    assert_eq!(
        screen.driver_mut().take_commands(),
        vec![
            DriverCommand::MoveCursor(1, 1),
            DriverCommand::SetAttribute(Attribute::DEFAULT),
            DriverCommand::WriteGlyph(b'x'),
            DriverCommand::MoveCursor(1, 5),
            DriverCommand::WriteGlyph(b'y'),
            DriverCommand::MoveCursor(1, 1),
            DriverCommand::Flush,
        ]
    );
}

#[test]
fn moving_only_the_cursor_emits_only_a_motion() {
    let mut screen = initialized(5, 10);
    screen.set_cursor_position(3, 4);

    screen.refresh().unwrap();

    assert_eq!(
        screen.driver_mut().take_commands(),
        vec![DriverCommand::MoveCursor(3, 4), DriverCommand::Flush]
    );
}

#[test]
fn redraw_repaints_every_row_unconditionally() {
    let mut screen = initialized(2, 3);
    screen.print(1, 1, 3, Attribute::DEFAULT, "ab");
    screen.refresh().unwrap();
    screen.driver_mut().take_commands();

    screen.redraw().unwrap();

    assert_eq!(
        screen.driver_mut().take_commands(),
        vec![
            DriverCommand::MoveCursor(1, 1),
            DriverCommand::SetAttribute(Attribute::DEFAULT),
            DriverCommand::WriteGlyph(b'a'),
            DriverCommand::WriteGlyph(b'b'),
            DriverCommand::WriteGlyph(b' '),
            DriverCommand::MoveCursor(2, 1),
            DriverCommand::SetAttribute(Attribute::DEFAULT),
            DriverCommand::WriteGlyph(b' '),
            DriverCommand::WriteGlyph(b' '),
            DriverCommand::WriteGlyph(b' '),
            DriverCommand::MoveCursor(1, 1),
            DriverCommand::Flush,
        ]
    );
}

#[test]
fn clear_screen_uses_the_fast_path_and_resets_the_diff() {
    let mut screen = initialized(4, 8);
    screen.print(2, 2, 8, Attribute::DEFAULT, "gone");
    screen.refresh().unwrap();
    screen.driver_mut().take_commands();

    screen.clear_screen().unwrap();

    assert_eq!(
        screen.driver_mut().take_commands(),
        vec![
            DriverCommand::ClearScreen,
            DriverCommand::MoveCursor(1, 1),
            DriverCommand::Flush,
        ]
    );

    // Both sides are blank again, so the next refresh has nothing to do.
    screen.refresh().unwrap();
    assert!(screen.driver().commands().is_empty());
}

#[test]
fn monochrome_drivers_see_converted_attributes() {
    init_test_logging();
    let mut screen = Screen::new(RecordingDriver::monochrome(3, 10));
    screen.initialize().unwrap();
    screen.driver_mut().take_commands();

    assert!(screen.is_monochrome());
    screen.print(1, 1, 10, Attribute::new(Color::WHITE, Color::BLUE), "m");
    screen.refresh().unwrap();

    let expected = Attribute::new(Color::BLACK, Color::WHITE);
    assert!(screen
        .driver()
        .commands()
        .contains(&DriverCommand::SetAttribute(expected)));
}

#[test]
fn overwriting_with_identical_cells_stays_clean() {
    let mut screen = initialized(3, 10);
    screen.print(2, 1, 10, Attribute::DEFAULT, "same");
    screen.refresh().unwrap();
    screen.driver_mut().take_commands();

    // Writing the same text again changes no cell.
    screen.print(2, 1, 10, Attribute::DEFAULT, "same");
    screen.refresh().unwrap();

    assert!(screen.driver().commands().is_empty());
}

#[test]
fn region_state_survives_a_read_write_round_trip() {
    let mut screen = initialized(4, 10);
    let loud = Attribute::new(Color::RED, Color::WHITE).with_bright(true);
    screen.print(2, 2, 10, loud, "saved");
    let region = Region::new(2, 2, 5, 1);
    let saved = screen.read(region);

    screen.clear(region, Attribute::DEFAULT);
    screen.write(region, &saved);

    assert_eq!(screen.read(region), saved);
    // Save and restore happened before any refresh, so the terminal never
    // needs to hear about it beyond the final contents.
    screen.refresh().unwrap();
    screen.driver_mut().take_commands();
    screen.refresh().unwrap();
    assert!(screen.driver().commands().is_empty());
}
