//! Interactive showcase run by the `charcell-demo` binary.

use std::io;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::debug;

use charcell_backend::CrosstermDriver;
use charcell_screen::{
    center, fill_box, fill_shadowed_box, Attribute, BoxStyle, Color, Direction, Region,
    ScreenGuard,
};

#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Draw with the charcell display engine")]
struct Args {
    /// Milliseconds to pause between scenes
    #[arg(long, default_value = "800")]
    delay: u64,

    /// Number of scroll steps in the scrolling scene
    #[arg(long, default_value = "5")]
    scroll_steps: u16,

    /// Log level (written to stderr)
    #[arg(long, value_enum, default_value = "warn")]
    log_level: LogLevel,
}

pub fn run() -> Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level {
        LogLevel::Trace => tracing::Level::TRACE,
        LogLevel::Debug => tracing::Level::DEBUG,
        LogLevel::Info => tracing::Level::INFO,
        LogLevel::Warn => tracing::Level::WARN,
        LogLevel::Error => tracing::Level::ERROR,
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .init();

    let pause = Duration::from_millis(args.delay);
    let mut screen = ScreenGuard::acquire(CrosstermDriver::new())?;
    let rows = screen.number_of_rows();
    let columns = screen.number_of_columns();
    debug!(rows, columns, "demo starting");

    // Scene one: a shadowed dialog with a centered title.
    let dialog = Region::new(3, 6, columns.saturating_sub(12).max(20), 8);
    let banner = Attribute::new(Color::BLACK, Color::CYAN);
    fill_shadowed_box(&mut screen, dialog, BoxStyle::DoubleLine, banner);
    center(
        &mut screen,
        dialog.row + 1,
        dialog.column + 1,
        dialog.width - 2,
        banner.with_bright(true),
        "charcell",
    );
    center(
        &mut screen,
        dialog.row + 3,
        dialog.column + 1,
        dialog.width - 2,
        banner,
        "a character-cell display engine",
    );
    screen.refresh()?;
    thread::sleep(pause);

    // Scene two: scroll the dialog interior while the frame stands still.
    let interior = Region::new(dialog.row + 1, dialog.column + 1, dialog.width - 2, 6);
    for step in 0..args.scroll_steps {
        screen.scroll(Direction::Up, interior, 1, banner);
        screen.print(
            interior.row + interior.height - 1,
            interior.column + 2,
            interior.width,
            banner,
            &format!("scrolled line {}", step + 1),
        );
        screen.refresh()?;
        thread::sleep(pause / 2);
    }

    // Scene three: every box style, side by side.
    screen.clear_screen()?;
    let styles = [
        BoxStyle::DoubleLine,
        BoxStyle::SingleLine,
        BoxStyle::DarkShading,
        BoxStyle::LightShading,
        BoxStyle::Solid,
        BoxStyle::Ascii,
    ];
    for (i, style) in styles.iter().enumerate() {
        let column = 2 + (i as u16) * 12;
        let swatch = Region::new(2, column, 10, 5);
        let tint = Attribute::new(Color::from_bits(i as u8 + 1), Color::BLACK);
        fill_box(&mut screen, swatch, *style, tint);
    }
    screen.set_cursor_position(8, 1);
    screen.refresh()?;
    thread::sleep(pause * 2);

    Ok(())
}
