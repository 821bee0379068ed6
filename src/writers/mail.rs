//! Mail writer implementation

use crate::core::{LogEntry, LogWriter, LoggerError, Result, WriteOptions};
use std::fmt;

/// A mail recipient, optionally with a display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    pub name: Option<String>,
    pub address: String,
}

impl Recipient {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            name: None,
            address: address.into(),
        }
    }

    pub fn named(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            address: address.into(),
        }
    }
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} <{}>", name, self.address),
            None => write!(f, "{}", self.address),
        }
    }
}

/// Mail-specific options: subject template and extra headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailOptions {
    /// Subject template; the entry's priority name and number are appended.
    pub subject: String,
    /// Extra header key/value pairs, passed through to the transport unchanged.
    pub headers: Vec<(String, String)>,
}

impl Default for MailOptions {
    fn default() -> Self {
        Self {
            subject: "Log Entry:".to_string(),
            headers: Vec::new(),
        }
    }
}

impl MailOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    #[must_use]
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }
}

/// Capability contract for the transport the writer sends through.
pub trait MailTransport: Send + Sync {
    fn send(
        &mut self,
        subject: &str,
        body: &str,
        recipients: &[Recipient],
        headers: &[(String, String)],
    ) -> Result<()>;
}

/// Delivers one entry per `write_log` call as one email, synchronously.
pub struct MailWriter<T: MailTransport> {
    transport: T,
    recipients: Vec<Recipient>,
    options: MailOptions,
}

impl<T: MailTransport> MailWriter<T> {
    /// At least one recipient is required.
    pub fn new(transport: T, recipients: Vec<Recipient>, options: MailOptions) -> Result<Self> {
        if recipients.is_empty() {
            return Err(LoggerError::config("MailWriter", "no recipients configured"));
        }
        Ok(Self {
            transport,
            recipients,
            options,
        })
    }

    pub fn recipients(&self) -> &[Recipient] {
        &self.recipients
    }
}

// The transport capability is opaque, so Debug reports the configuration only.
impl<T: MailTransport> fmt::Debug for MailWriter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailWriter")
            .field("recipients", &self.recipients)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<T: MailTransport> LogWriter for MailWriter<T> {
    fn write_log(&mut self, entry: &LogEntry, options: &WriteOptions) -> Result<()> {
        let name = options.name_for(entry);
        let subject = format!(
            "{} {} ({})",
            self.options.subject,
            name,
            entry.priority.value()
        );
        let body = format!(
            "{}\t{}\t{}\t{}\n",
            options.timestamp_for(entry),
            entry.priority.value(),
            name,
            entry.message
        );

        self.transport
            .send(&subject, &body, &self.recipients, &self.options.headers)
    }

    fn name(&self) -> &str {
        "mail"
    }
}
