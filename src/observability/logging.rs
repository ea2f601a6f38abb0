//! Tracing subscriber configuration.

use crate::config::Config;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Pick the filter directive: `--debug` wins, then `RUST_LOG`, then the
/// configured `LOG_LEVEL`.
pub fn filter_directive(config: &Config, debug: bool, rust_log: Option<&str>) -> String {
    if debug {
        return "debug".to_string();
    }
    match rust_log {
        Some(directive) if !directive.trim().is_empty() => directive.to_string(),
        _ => config.log_level.clone(),
    }
}

/// Install the global subscriber.
///
/// Writes human-readable records to stderr and plain (no ANSI) records to
/// `config.log_file`. If the log file cannot be opened, logging continues
/// on stderr only. Calling this twice is harmless; the second call is a
/// no-op.
pub fn init_logging(config: &Config, debug: bool) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let directive = filter_directive(config, debug, rust_log.as_deref());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(true);

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file);

    let (file_layer, open_error) = match file {
        Ok(file) => (
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .with_target(true),
            ),
            None,
        ),
        Err(e) => (None, Some(e)),
    };

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .is_ok();

    if let (true, Some(e)) = (installed, open_error) {
        tracing::warn!(
            path = %config.log_file.display(),
            error = %e,
            "Could not open log file, logging to stderr only"
        );
    }

    if let (true, Some(raw)) = (installed, &config.ignored_log_level) {
        tracing::warn!(value = %raw, "Unknown LOG_LEVEL, using info");
    }

    if installed && debug {
        tracing::debug!("Debug logging enabled");
    }
}
