//! Writer implementations

pub mod db;
pub mod file;
pub mod mail;

pub use db::{DbWriter, Dialect, PlaceholderStyle, SqlConnection, SqlValue};
pub use file::{FileFormat, FileWriter};
pub use mail::{MailOptions, MailTransport, MailWriter, Recipient};

// Re-export the trait writers implement
pub use crate::core::LogWriter;
