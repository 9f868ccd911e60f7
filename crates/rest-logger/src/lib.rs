// SPDX-License-Identifier: MIT OR Apache-2.0
//! rest-logger
#![deny(unsafe_code)]
#![warn(missing_docs)]
//!
//! A small logging capability with two operations, "log info" and "log an
//! error with its cause". Components take a [`Logger`] instead of reaching
//! for process-wide state, so tests can pass a [`MemoryLogger`].
//!
//! [`TracingLogger`] forwards to `tracing`; [`init`] installs the global JSON
//! subscriber described by a [`LogConfig`].

pub mod config;
pub mod memory;

pub use config::{ENV_LOG_LEVEL, ENV_LOG_OUTPUT, LogConfig, LogLevel, LogOutput};
pub use memory::{LogRecord, MemoryLogger};

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

/// `tracing` target used by [`TracingLogger`].
pub const LOG_TARGET: &str = "rest";

// ---------------------------------------------------------------------------
// Logger
// ---------------------------------------------------------------------------

/// Fire-and-forget logging capability.
pub trait Logger: Send + Sync {
    /// Log an informational message.
    fn info(&self, message: &str);

    /// Log an error message together with the failure that caused it.
    fn error(&self, message: &str, cause: &dyn std::error::Error);
}

impl<L: Logger + ?Sized> Logger for &L {
    fn info(&self, message: &str) {
        (**self).info(message);
    }

    fn error(&self, message: &str, cause: &dyn std::error::Error) {
        (**self).error(message, cause);
    }
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    fn info(&self, message: &str) {
        (**self).info(message);
    }

    fn error(&self, message: &str, cause: &dyn std::error::Error) {
        (**self).error(message, cause);
    }
}

/// Forwards to `tracing` events under [`LOG_TARGET`].
///
/// Error events carry the cause's `Display` output in an `error` field.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!(target: LOG_TARGET, "{message}");
    }

    fn error(&self, message: &str, cause: &dyn std::error::Error) {
        tracing::error!(target: LOG_TARGET, error = %cause, "{message}");
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn info(&self, _message: &str) {}

    fn error(&self, _message: &str, _cause: &dyn std::error::Error) {}
}

// ---------------------------------------------------------------------------
// Subscriber installation
// ---------------------------------------------------------------------------

/// Errors from [`init`].
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// The configured log file could not be opened for appending.
    #[error("cannot open log output {path}: {source}")]
    OpenOutput {
        /// Requested file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A global subscriber was already set.
    #[error("failed to install global logger: {0}")]
    Install(#[from] TryInitError),
}

/// Build the JSON subscriber used by [`init`], writing to `writer`.
///
/// Each event is one line with flattened fields: `timestamp`, `level`,
/// `message`, `target`, and `error` for error events.
pub fn json_subscriber<W>(
    level: LogLevel,
    writer: W,
) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .json()
        .flatten_event(true)
        .with_env_filter(env_filter(level))
        .with_writer(writer)
        .finish()
}

/// Filter admitting `level` and above for every target.
fn env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::new(level.as_str())
}

/// Install the process-wide subscriber described by `config`.
///
/// Fails instead of panicking when the file sink cannot be opened or when a
/// subscriber is already installed.
pub fn init(config: &LogConfig) -> Result<(), LoggerError> {
    let writer = make_writer(&config.output)?;
    json_subscriber(config.level, writer).try_init()?;
    Ok(())
}

fn make_writer(output: &LogOutput) -> Result<BoxMakeWriter, LoggerError> {
    let writer = match output {
        LogOutput::Stdout => BoxMakeWriter::new(std::io::stdout),
        LogOutput::Stderr => BoxMakeWriter::new(std::io::stderr),
        LogOutput::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| LoggerError::OpenOutput {
                    path: path.clone(),
                    source,
                })?;
            BoxMakeWriter::new(Mutex::new(file))
        }
    };
    Ok(writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    /// Shared buffer usable as a `MakeWriter`.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;
        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    impl CapturedLogs {
        fn lines(&self) -> Vec<serde_json::Value> {
            String::from_utf8_lossy(&self.0.lock().unwrap())
                .lines()
                .map(|l| serde_json::from_str(l).expect("json log line"))
                .collect()
        }
    }

    fn capture<F: FnOnce()>(level: LogLevel, f: F) -> Vec<serde_json::Value> {
        let logs = CapturedLogs::default();
        tracing::subscriber::with_default(json_subscriber(level, logs.clone()), f);
        logs.lines()
    }

    #[test]
    fn info_is_written_as_json() {
        let lines = capture(LogLevel::Info, || TracingLogger.info("service started"));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["level"], "INFO");
        assert_eq!(lines[0]["message"], "service started");
        assert_eq!(lines[0]["target"], LOG_TARGET);
        assert!(lines[0].get("timestamp").is_some());
    }

    #[test]
    fn error_carries_cause_field() {
        let cause = rest_error::RestError::internal_server_error(
            "save failed",
            Some(&io::Error::other("disk full")),
        );
        let lines = capture(LogLevel::Info, || {
            TracingLogger.error("request failed", &cause);
        });
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["level"], "ERROR");
        assert_eq!(lines[0]["message"], "request failed");
        assert_eq!(
            lines[0]["error"],
            "message: save failed - status: 500 - error: internal_server_error - causes: [disk full]"
        );
    }

    #[test]
    fn error_level_drops_info() {
        let lines = capture(LogLevel::Error, || {
            TracingLogger.info("hidden");
            TracingLogger.error("shown", &io::Error::other("x"));
        });
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["message"], "shown");
    }

    #[test]
    fn debug_level_lets_debug_through() {
        let lines = capture(LogLevel::Debug, || {
            tracing::debug!(target: LOG_TARGET, "verbose");
        });
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["level"], "DEBUG");
    }

    #[test]
    fn info_level_drops_debug() {
        let lines = capture(LogLevel::Info, || {
            tracing::debug!(target: LOG_TARGET, "verbose");
        });
        assert!(lines.is_empty());
    }

    #[test]
    fn level_applies_to_every_target() {
        let lines = capture(LogLevel::Error, || {
            tracing::info!(target: "other::module", "hidden");
            tracing::error!(target: "other::module", "shown");
        });
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["target"], "other::module");
    }

    #[test]
    fn debug_level_covers_other_targets() {
        let lines = capture(LogLevel::Debug, || {
            tracing::debug!(target: "other::module", "verbose");
            tracing::trace!(target: "other::module", "noise");
        });
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["level"], "DEBUG");
    }

    #[test]
    fn noop_logger_accepts_calls() {
        let logger = NoopLogger;
        logger.info("ignored");
        logger.error("ignored", &io::Error::other("x"));
    }

    fn log_through(logger: impl Logger) {
        logger.error("via ref", &io::Error::other("cause"));
    }

    #[test]
    fn injected_as_trait_object() {
        let memory = MemoryLogger::new();
        let shared: Arc<dyn Logger> = Arc::new(memory.clone());
        shared.info("via arc");
        log_through(&memory);
        assert_eq!(memory.len(), 2);
        assert_eq!(memory.records()[1].cause.as_deref(), Some("cause"));
    }

    #[test]
    fn unopenable_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-dir").join("app.log");
        let err = make_writer(&LogOutput::File(missing.clone())).err().expect("open fails");
        match err {
            LoggerError::OpenOutput { path, .. } => assert_eq!(path, missing),
            other => panic!("expected OpenOutput, got {other:?}"),
        }
    }
}
