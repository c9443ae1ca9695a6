//! Log setup.
//!
//! The screen is owned by the raw-mode frame, so log lines go to a file
//! instead of stderr.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Filter directive for this crate at the given level.
///
/// Unknown levels fall back to `info`.
pub fn filter_directive(level: &str) -> String {
    let level = match level.to_ascii_lowercase().as_str() {
        l @ ("trace" | "debug" | "info" | "warn" | "error") => l.to_string(),
        _ => "info".to_string(),
    };
    format!("largo_curator={}", level)
}

/// Install the global subscriber writing to the configured log file.
///
/// Returns false when the file cannot be opened or a subscriber is already
/// set; the session then runs without logs.
#[cfg(not(tarpaulin_include))]
pub fn init(config: &LoggingConfig) -> bool {
    let file = match OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.file)
    {
        Ok(file) => file,
        Err(_) => return false,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter_directive(&config.level)))
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .is_ok()
}
