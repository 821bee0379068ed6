//! Severity level definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The eight fixed severity levels, most severe first.
///
/// The numeric values and short names are part of the wire contract for any
/// consumer parsing log output and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    Emerg = 0,
    Alert = 1,
    Crit = 2,
    Err = 3,
    Warn = 4,
    Notice = 5,
    Info = 6,
    Debug = 7,
}

impl Priority {
    /// All levels in ascending numeric order.
    pub const ALL: [Priority; 8] = [
        Priority::Emerg,
        Priority::Alert,
        Priority::Crit,
        Priority::Err,
        Priority::Warn,
        Priority::Notice,
        Priority::Info,
        Priority::Debug,
    ];

    /// Canonical short name for this level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Emerg => "EMERG",
            Priority::Alert => "ALERT",
            Priority::Crit => "CRIT",
            Priority::Err => "ERR",
            Priority::Warn => "WARN",
            Priority::Notice => "NOTICE",
            Priority::Info => "INFO",
            Priority::Debug => "DEBUG",
        }
    }

    /// Numeric value (0 = EMERG .. 7 = DEBUG).
    pub fn value(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<u8> for Priority {
    type Error = LoggerError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Priority::Emerg),
            1 => Ok(Priority::Alert),
            2 => Ok(Priority::Crit),
            3 => Ok(Priority::Err),
            4 => Ok(Priority::Warn),
            5 => Ok(Priority::Notice),
            6 => Ok(Priority::Info),
            7 => Ok(Priority::Debug),
            _ => Err(LoggerError::InvalidPriority { value }),
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, <Self as FromStr>::Err> {
        match s.to_uppercase().as_str() {
            "EMERG" => Ok(Priority::Emerg),
            "ALERT" => Ok(Priority::Alert),
            "CRIT" => Ok(Priority::Crit),
            "ERR" | "ERROR" => Ok(Priority::Err),
            "WARN" | "WARNING" => Ok(Priority::Warn),
            "NOTICE" => Ok(Priority::Notice),
            "INFO" => Ok(Priority::Info),
            "DEBUG" => Ok(Priority::Debug),
            _ => Err(format!("Invalid priority: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_names() {
        let expected = [
            "EMERG", "ALERT", "CRIT", "ERR", "WARN", "NOTICE", "INFO", "DEBUG",
        ];
        for (priority, name) in Priority::ALL.iter().zip(expected) {
            assert_eq!(priority.as_str(), name);
            assert_eq!(priority.to_string(), name);
        }
    }

    #[test]
    fn test_numeric_values() {
        for (i, priority) in Priority::ALL.iter().enumerate() {
            assert_eq!(priority.value() as usize, i);
            assert_eq!(Priority::try_from(i as u8).unwrap(), *priority);
        }
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        for value in 8..=255u8 {
            assert!(matches!(
                Priority::try_from(value),
                Err(LoggerError::InvalidPriority { value: v }) if v == value
            ));
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("notice".parse::<Priority>().unwrap(), Priority::Notice);
        assert_eq!("WARNING".parse::<Priority>().unwrap(), Priority::Warn);
        assert_eq!("ERROR".parse::<Priority>().unwrap(), Priority::Err);
        assert!("VERBOSE".parse::<Priority>().is_err());
    }

    #[test]
    fn test_ordering() {
        assert!(Priority::Emerg < Priority::Debug);
        assert!(Priority::Err < Priority::Warn);
    }
}
