//! # Fanlog
//!
//! A minimal synchronous logging facade: a [`Logger`] stamps messages with
//! one of eight fixed severity levels and fans each entry out to an ordered
//! list of pluggable writers.
//!
//! ## Features
//!
//! - **Pluggable Writers**: File (CSV/TSV/XML/JSON), database, and mail back ends
//! - **Synchronous**: Every write is a single blocking, best-effort call
//! - **Thread Safe**: A shared `Logger` can be used from multiple threads
//! - **Independent Side Channels**: One failing writer never suppresses another
//!
//! ## Example
//!
//! ```no_run
//! use fanlog::{FileWriter, Logger};
//!
//! let logger = Logger::new()
//!     .with_writer(Box::new(FileWriter::open("app.json").unwrap()));
//!
//! logger.notice("service started").unwrap();
//! ```

pub mod core;
pub mod writers;

pub mod prelude {
    pub use crate::core::{
        LogEntry, LogWriter, Logger, LoggerError, Priority, Result, WriteOptions,
        DEFAULT_TIMESTAMP_FORMAT,
    };
    pub use crate::writers::{
        DbWriter, Dialect, FileFormat, FileWriter, MailOptions, MailTransport, MailWriter,
        PlaceholderStyle, Recipient, SqlConnection, SqlValue,
    };
}

pub use crate::core::{
    LogEntry, LogWriter, Logger, LoggerError, Priority, Result, WriteOptions,
    DEFAULT_TIMESTAMP_FORMAT,
};
pub use crate::writers::{
    DbWriter, Dialect, FileFormat, FileWriter, MailOptions, MailTransport, MailWriter,
    PlaceholderStyle, Recipient, SqlConnection, SqlValue,
};
