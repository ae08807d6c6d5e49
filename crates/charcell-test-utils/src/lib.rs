pub mod recording;

pub use recording::{DriverCommand, RecordingDriver};

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

pub fn init_test_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("charcell=debug,charcell_screen=debug")),
            )
            .with_test_writer()
            .init();
    });
}
