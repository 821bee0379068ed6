//! Error types for the logging facade

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Priority outside the fixed 0-7 range
    #[error("Invalid priority value: {value} (expected 0-7)")]
    InvalidPriority { value: u8 },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// SQL capability error
    #[error("SQL error: {message}")]
    Sql { message: String },

    /// Mail transport error
    #[error("Mail transport error: {message}")]
    Transport { message: String },

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),

    /// One or more writers failed during fan-out.
    ///
    /// Every registered writer is still attempted; this collects the failures
    /// by writer name after the fan-out completes.
    #[error("Log fan-out failed for {} writer(s)", .failures.len())]
    Fanout { failures: Vec<(String, LoggerError)> },
}

impl LoggerError {
    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a SQL capability error
    pub fn sql(message: impl Into<String>) -> Self {
        LoggerError::Sql {
            message: message.into(),
        }
    }

    /// Create a mail transport error
    pub fn transport(message: impl Into<String>) -> Self {
        LoggerError::Transport {
            message: message.into(),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }
}
