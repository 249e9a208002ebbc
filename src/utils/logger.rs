use std::io::IsTerminal;
use tracing::Level;

/// Logs go to stderr so stdout stays clean for JSON output.
pub fn init_logger(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
