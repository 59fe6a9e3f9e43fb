//! Logging setup for the `anthro` binary.
//!
//! Library crates only emit `tracing` events. This module installs the
//! subscriber that renders them.
//!
//! # Log Levels
//!
//! - `error`: fatal failures (missing reference data, unreadable files)
//! - `warn`: rejected indicators, skipped batch rows
//! - `info`: batch progress and summary counts
//! - `debug`: per-indicator results
//! - `trace`: interpolation detail
//!
//! Measurement values are child health data. They are only written to the
//! log when `--log-data` is given; see [`redact_value`].

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

static LOG_DATA_ENABLED: AtomicBool = AtomicBool::new(false);

/// Placeholder logged instead of a measurement value.
pub const REDACTED_VALUE: &str = "[REDACTED]";

/// Crates whose events follow the configured level. Everything else stays at warn.
const OWN_CRATES: [&str; 5] = [
    "anthro",
    "anthro_cli",
    "anthro_model",
    "anthro_standards",
    "anthro_zscore",
];

pub fn log_data_enabled() -> bool {
    LOG_DATA_ENABLED.load(Ordering::Relaxed)
}

/// Returns the value when data logging is enabled, otherwise [`REDACTED_VALUE`].
pub fn redact_value(value: &str) -> &str {
    if log_data_enabled() {
        value
    } else {
        REDACTED_VALUE
    }
}

/// Format an optional measurement for logging, honoring redaction.
pub fn redact_measurement(value: Option<f64>) -> String {
    match value {
        None => "-".to_string(),
        Some(_) if !log_data_enabled() => REDACTED_VALUE.to_string(),
        Some(value) => value.to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level_filter: LevelFilter,
    /// Let `RUST_LOG` override `level_filter`. Cleared when the level was
    /// chosen explicitly on the command line.
    pub use_env_filter: bool,
    pub with_target: bool,
    pub with_ansi: bool,
    pub format: LogFormat,
    /// Append to this file instead of writing to stderr.
    pub log_file: Option<PathBuf>,
    /// Whether measurement values may be logged.
    pub log_data: bool,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            with_target: false,
            with_ansi: true,
            format: LogFormat::default(),
            log_file: None,
            log_data: false,
        }
    }
}

/// Install the global subscriber. Call once at startup.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        init_logging_with_writer(config, SharedFileWriter::new(file));
    } else {
        init_logging_with_writer(config, io::stderr);
    }
    Ok(())
}

pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W)
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    LOG_DATA_ENABLED.store(config.log_data, Ordering::Release);
    let filter = build_env_filter(config);

    // try_init: a second initialization (tests) keeps the first subscriber.
    let _ = match config.format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_target(config.with_target),
            )
            .try_init(),
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .compact()
                    .without_time()
                    .with_writer(writer)
                    .with_ansi(config.with_ansi)
                    .with_target(config.with_target),
            )
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .without_time()
                    .with_writer(writer)
                    .with_ansi(config.with_ansi)
                    .with_target(config.with_target),
            )
            .try_init(),
    };
}

#[derive(Clone)]
struct SharedFileWriter {
    file: Arc<Mutex<File>>,
}

impl SharedFileWriter {
    fn new(file: File) -> Self {
        Self {
            file: Arc::new(Mutex::new(file)),
        }
    }
}

struct SharedFileGuard {
    file: Arc<Mutex<File>>,
}

impl Write for SharedFileGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        guard.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        guard.flush()
    }
}

impl<'a> MakeWriter<'a> for SharedFileWriter {
    type Writer = SharedFileGuard;

    fn make_writer(&'a self) -> Self::Writer {
        SharedFileGuard {
            file: Arc::clone(&self.file),
        }
    }
}

fn build_env_filter(config: &LogConfig) -> EnvFilter {
    if config.use_env_filter
        && let Ok(filter) = EnvFilter::try_from_default_env()
    {
        return filter;
    }
    EnvFilter::new(default_directives(config.level_filter))
}

/// `warn` for dependencies, `level` for the engine crates.
pub fn default_directives(level: LevelFilter) -> String {
    let level = level.to_string().to_lowercase();
    let mut directives = vec!["warn".to_string()];
    directives.extend(OWN_CRATES.iter().map(|name| format!("{name}={level}")));
    directives.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_cover_engine_crates() {
        let directives = default_directives(LevelFilter::DEBUG);
        assert!(directives.starts_with("warn,"));
        assert!(directives.contains("anthro_zscore=debug"));
        assert!(directives.contains("anthro=debug"));
    }

    #[test]
    fn values_are_redacted_by_default() {
        assert!(!log_data_enabled());
        assert_eq!(redact_value("12.5"), REDACTED_VALUE);
        assert_eq!(redact_measurement(Some(12.5)), REDACTED_VALUE);
        assert_eq!(redact_measurement(None), "-");
    }
}
