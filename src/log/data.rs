use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// Describes a message to be logged.
///
/// `scope` names the component that produced the message (`"list"`, `"net"`,
/// ...), so a single log file can be filtered per component.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct LogMessage {
    pub level: LogLevel,
    pub scope: &'static str,
    pub message: String,
}

impl Display for LogMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
        write!(
            f,
            "[{}] [{}] [{}] {}",
            timestamp, self.level, self.scope, self.message
        )
    }
}

/// Describes the log level of a message.
///
/// # Ordering
/// The levels are ordered by severity: `Info` < `Warning` < `Error`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[default]
    /// Regular operational messages, such as a page being fetched.
    Info,
    /// Something went wrong but the application can carry on.
    Warning,
    /// An operation failed. The failure is surfaced to the user elsewhere,
    /// the log keeps the full error chain.
    Error,
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warning => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            _ => Err(anyhow::anyhow!("Invalid log level: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Info < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
    }

    #[test]
    fn test_log_level_from_str() {
        assert_eq!(LogLevel::from_str("INFO").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("warn").unwrap(), LogLevel::Warning);
        assert_eq!(LogLevel::from_str("warning").unwrap(), LogLevel::Warning);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);
        assert!(LogLevel::from_str("loud").is_err());
    }

    #[test]
    fn test_log_message_display() {
        let msg = LogMessage {
            level: LogLevel::Error,
            scope: "list",
            message: "refresh failed".to_string(),
        };
        let output = msg.to_string();
        assert!(output.contains("[ERROR]"));
        assert!(output.contains("[list]"));
        assert!(output.ends_with("refresh failed"));
        assert_eq!(output.matches('[').count(), 3);
    }
}
