//! Error handling for tether-log

use thiserror::Error;

/// Result type for logging operations
pub type LogResult<T> = Result<T, LogError>;

/// Errors raised while setting up or reconfiguring the logger
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LogError {
    /// Filter directive could not be parsed
    #[error("Invalid filter: {0}")]
    Filter(String),

    /// A global subscriber is already installed
    #[error("Logger initialization failed: {0}")]
    Init(String),

    /// Configuration value rejected
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LogError {
    /// Create a filter error for `filter`
    pub fn filter(filter: &str, reason: impl std::fmt::Display) -> Self {
        Self::Filter(format!("{filter}: {reason}"))
    }

    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Filter(_) => "LOG:FILTER",
            Self::Init(_) => "LOG:INIT",
            Self::Config(_) => "LOG:CONFIG",
        }
    }
}
