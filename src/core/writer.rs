//! Writer trait for log output destinations

use super::entry::{LogEntry, WriteOptions};
use super::error::Result;

pub trait LogWriter: Send + Sync {
    /// Persist or transmit one entry. `entry` is read-only; `options` carries
    /// per-call overrides.
    fn write_log(&mut self, entry: &LogEntry, options: &WriteOptions) -> Result<()>;

    /// Stable identifier used in fan-out failure reports.
    fn name(&self) -> &str;
}
