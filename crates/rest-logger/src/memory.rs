// SPDX-License-Identifier: MIT OR Apache-2.0
//! In-memory [`Logger`] for tests.

use crate::Logger;
use crate::config::LogLevel;
use std::sync::{Arc, Mutex};

/// One captured log call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// `Info` or `Error`.
    pub level: LogLevel,
    /// Message passed by the caller.
    pub message: String,
    /// Rendered cause for error records.
    pub cause: Option<String>,
}

/// Records every call instead of writing it anywhere.
///
/// Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryLogger {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl MemoryLogger {
    /// Create an empty logger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().expect("log lock poisoned").clone()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.lock().expect("log lock poisoned").len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all records.
    pub fn clear(&self) {
        self.records.lock().expect("log lock poisoned").clear();
    }

    fn push(&self, record: LogRecord) {
        self.records.lock().expect("log lock poisoned").push(record);
    }
}

impl Logger for MemoryLogger {
    fn info(&self, message: &str) {
        self.push(LogRecord {
            level: LogLevel::Info,
            message: message.to_string(),
            cause: None,
        });
    }

    fn error(&self, message: &str, cause: &dyn std::error::Error) {
        self.push(LogRecord {
            level: LogLevel::Error,
            message: message.to_string(),
            cause: Some(cause.to_string()),
        });
    }
}
