// SPDX-License-Identifier: MIT OR Apache-2.0
//! Environment-driven logger settings.

use std::fmt;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

/// Variable selecting the minimum level (`debug`, `info`, `error`).
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";

/// Variable selecting the sink (`stdout`, `stderr`, or a file path).
pub const ENV_LOG_OUTPUT: &str = "LOG_OUTPUT";

// ---------------------------------------------------------------------------
// LogLevel
// ---------------------------------------------------------------------------

/// Minimum severity written by the installed subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Everything from `debug` up.
    Debug,
    /// Informational messages and errors.
    #[default]
    Info,
    /// Errors only.
    Error,
}

impl LogLevel {
    /// Parse a level name, trimmed and case-insensitive.
    ///
    /// Unrecognised input (including the empty string) maps to [`LogLevel::Info`].
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "debug" => Self::Debug,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }

    /// Lowercase level name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Error => "error",
        }
    }

    /// Equivalent `tracing` filter.
    pub fn level_filter(&self) -> LevelFilter {
        match self {
            Self::Debug => LevelFilter::DEBUG,
            Self::Info => LevelFilter::INFO,
            Self::Error => LevelFilter::ERROR,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// LogOutput
// ---------------------------------------------------------------------------

/// Where log lines are written.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogOutput {
    /// Standard output.
    #[default]
    Stdout,
    /// Standard error.
    Stderr,
    /// Append to a file, created if missing.
    File(PathBuf),
}

impl LogOutput {
    /// Parse an output target. Blank input selects [`LogOutput::Stdout`];
    /// anything other than `stdout`/`stderr` is treated as a file path.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "" | "stdout" => Self::Stdout,
            "stderr" => Self::Stderr,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

impl fmt::Display for LogOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("stdout"),
            Self::Stderr => f.write_str("stderr"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

// ---------------------------------------------------------------------------
// LogConfig
// ---------------------------------------------------------------------------

/// Level and sink for [`crate::init`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LogConfig {
    /// Minimum level.
    pub level: LogLevel,
    /// Sink.
    pub output: LogOutput,
}

impl LogConfig {
    /// Read [`ENV_LOG_LEVEL`] and [`ENV_LOG_OUTPUT`] from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup. Missing variables
    /// fall back to the defaults (`info`, `stdout`).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            level: lookup(ENV_LOG_LEVEL)
                .map(|v| LogLevel::parse_lenient(&v))
                .unwrap_or_default(),
            output: lookup(ENV_LOG_OUTPUT)
                .map(|v| LogOutput::parse(&v))
                .unwrap_or_default(),
        }
    }

    /// Replace the level.
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Replace the sink.
    pub fn with_output(mut self, output: LogOutput) -> Self {
        self.output = output;
        self
    }
}
