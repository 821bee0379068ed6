//! Log entry structure and per-call write options

use super::priority::Priority;

/// One structured log record, built once per `log` call and handed read-only
/// to every registered writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Timestamp, pre-formatted with the Logger's format string at emission.
    pub timestamp: String,
    pub priority: Priority,
    pub message: String,
}

impl LogEntry {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences so
    /// one entry is always one record in delimited output formats.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(timestamp: impl Into<String>, priority: Priority, message: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            priority,
            message: Self::sanitize_message(&message.into()),
        }
    }

    /// Canonical short name for this entry's priority.
    ///
    /// Derived from the priority itself, so the two can never disagree.
    pub fn name(&self) -> &'static str {
        self.priority.as_str()
    }
}

/// Per-call overrides passed through `Logger::log_with` to every writer.
///
/// Writers resolve the effective timestamp and priority name through these
/// before formatting; an empty `WriteOptions` leaves the entry untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteOptions {
    pub timestamp: Option<String>,
    pub name: Option<String>,
}

impl WriteOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Effective timestamp for one write.
    pub fn timestamp_for<'a>(&'a self, entry: &'a LogEntry) -> &'a str {
        self.timestamp.as_deref().unwrap_or(&entry.timestamp)
    }

    /// Effective priority name for one write.
    pub fn name_for<'a>(&'a self, entry: &'a LogEntry) -> &'a str {
        self.name.as_deref().unwrap_or_else(|| entry.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_sanitization() {
        let entry = LogEntry::new(
            "2026-08-23 10:30:45",
            Priority::Info,
            "line one\nline two\tcol",
        );
        assert_eq!(entry.message, "line one\\nline two\\tcol");
    }

    #[test]
    fn test_name_follows_priority() {
        for priority in Priority::ALL {
            let entry = LogEntry::new("ts", priority, "x");
            assert_eq!(entry.name(), priority.as_str());
        }
    }

    #[test]
    fn test_options_override_resolution() {
        let entry = LogEntry::new("2026-08-23 10:30:45", Priority::Notice, "x");

        let none = WriteOptions::new();
        assert_eq!(none.timestamp_for(&entry), "2026-08-23 10:30:45");
        assert_eq!(none.name_for(&entry), "NOTICE");

        let overridden = WriteOptions::new()
            .with_timestamp("2026-01-01 00:00:00")
            .with_name("AUDIT");
        assert_eq!(overridden.timestamp_for(&entry), "2026-01-01 00:00:00");
        assert_eq!(overridden.name_for(&entry), "AUDIT");
    }
}
