//! Terminal drivers
//!
//! Three backends for the [`charcell_screen`] engine: a direct-memory
//! driver for embedding and tests, an escape-sequence driver that writes
//! ANSI control sequences to any [`std::io::Write`], and a crossterm
//! driver for real interactive terminals.

pub mod ansi;
pub mod crossterm;
pub mod memory;

pub use ansi::AnsiDriver;
pub use memory::MemoryDriver;
pub use self::crossterm::CrosstermDriver;
