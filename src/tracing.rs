//! Logging infrastructure
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=keychord::keymap=debug` - module-level filtering
//!
//! # Log Files
//!
//! When enabled, logs are written to `~/.config/keychord/logs/keychord.log`
//! with daily rotation. File logging uses debug level by default for more
//! verbose troubleshooting. Without it no directory is created.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize tracing subscriber with console and optional file logging
///
/// Console output goes to stderr so converted chords on stdout stay clean.
pub fn init(file_logging: bool) {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match file_logging.then(crate::config_paths::ensure_logs_dir) {
        None => None,
        Some(Ok(logs_dir)) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "keychord.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Some(Err(e)) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}
