fn main() -> anyhow::Result<()> {
    let result = charcell::demo::run();

    // Leave stdio flushed so error output lands after terminal restore.
    use std::io::{self, Write};
    let _ = io::stdout().flush();
    let _ = io::stderr().flush();

    result
}
