//! Main logger implementation

use super::{
    entry::{LogEntry, WriteOptions},
    error::{LoggerError, Result},
    priority::Priority,
    writer::LogWriter,
};
use chrono::Utc;
use parking_lot::RwLock;
use std::fmt;

/// Default strftime format used to stamp entries.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Synchronous fan-out logger.
///
/// Holds an ordered list of writers and a timestamp format. Each `log` call
/// builds one [`LogEntry`] and pushes it to every registered writer, in
/// registration order, blocking until all writers have returned.
pub struct Logger {
    writers: RwLock<Vec<Box<dyn LogWriter>>>,
    timestamp_format: RwLock<String>,
}

impl Logger {
    #[must_use]
    pub fn new() -> Self {
        Self {
            writers: RwLock::new(Vec::new()),
            timestamp_format: RwLock::new(DEFAULT_TIMESTAMP_FORMAT.to_string()),
        }
    }

    /// Builder-style convenience for registering a writer at construction.
    #[must_use]
    pub fn with_writer(self, writer: Box<dyn LogWriter>) -> Self {
        self.add_writer(writer);
        self
    }

    /// Append a writer to the fan-out list. Insertion order is preserved and
    /// writers are never de-duplicated or removed.
    pub fn add_writer(&self, writer: Box<dyn LogWriter>) -> &Self {
        self.writers.write().push(writer);
        self
    }

    pub fn writer_count(&self) -> usize {
        self.writers.read().len()
    }

    /// Set the strftime format used to stamp future entries. Entries already
    /// written are unaffected.
    pub fn set_timestamp_format(&self, format: impl Into<String>) -> &Self {
        *self.timestamp_format.write() = format.into();
        self
    }

    pub fn timestamp_format(&self) -> String {
        self.timestamp_format.read().clone()
    }

    /// Log one entry at the given priority.
    pub fn log(&self, priority: Priority, message: impl Into<String>) -> Result<&Self> {
        self.log_with(priority, message, &WriteOptions::default())
    }

    /// Log one entry, passing per-call overrides through to every writer.
    ///
    /// Every registered writer is attempted unconditionally; failures are
    /// collected and reported together as [`LoggerError::Fanout`] once the
    /// fan-out completes, so one failing side channel never suppresses
    /// another.
    pub fn log_with(
        &self,
        priority: Priority,
        message: impl Into<String>,
        options: &WriteOptions,
    ) -> Result<&Self> {
        let timestamp = {
            let format = self.timestamp_format.read();
            Utc::now().format(format.as_str()).to_string()
        };
        let entry = LogEntry::new(timestamp, priority, message.into());

        let mut writers = self.writers.write();
        let mut failures = Vec::new();
        for writer in writers.iter_mut() {
            if let Err(e) = writer.write_log(&entry, options) {
                failures.push((writer.name().to_string(), e));
            }
        }

        if failures.is_empty() {
            Ok(self)
        } else {
            Err(LoggerError::Fanout { failures })
        }
    }

    pub fn emerg(&self, message: impl Into<String>) -> Result<&Self> {
        self.log(Priority::Emerg, message)
    }

    pub fn alert(&self, message: impl Into<String>) -> Result<&Self> {
        self.log(Priority::Alert, message)
    }

    pub fn crit(&self, message: impl Into<String>) -> Result<&Self> {
        self.log(Priority::Crit, message)
    }

    pub fn err(&self, message: impl Into<String>) -> Result<&Self> {
        self.log(Priority::Err, message)
    }

    pub fn warn(&self, message: impl Into<String>) -> Result<&Self> {
        self.log(Priority::Warn, message)
    }

    pub fn notice(&self, message: impl Into<String>) -> Result<&Self> {
        self.log(Priority::Notice, message)
    }

    pub fn info(&self, message: impl Into<String>) -> Result<&Self> {
        self.log(Priority::Info, message)
    }

    pub fn debug(&self, message: impl Into<String>) -> Result<&Self> {
        self.log(Priority::Debug, message)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

// Writers are trait objects, so Debug is reported as a count.
impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("writers", &self.writer_count())
            .field("timestamp_format", &self.timestamp_format())
            .finish()
    }
}
