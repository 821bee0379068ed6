//! Core logger types and traits

pub mod entry;
pub mod error;
pub mod logger;
pub mod priority;
pub mod writer;

pub use entry::{LogEntry, WriteOptions};
pub use error::{LoggerError, Result};
pub use logger::{Logger, DEFAULT_TIMESTAMP_FORMAT};
pub use priority::Priority;
pub use writer::LogWriter;
