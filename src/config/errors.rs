//! Configuration errors

use thiserror::Error;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read config: {0}")]
    Read(String),

    /// The configuration file is not valid JSON for this schema
    #[error("Invalid config JSON: {0}")]
    Parse(String),

    /// A field holds a value outside its allowed range
    #[error("Invalid config field '{field}': {reason}")]
    InvalidField { field: &'static str, reason: String },
}

impl ConfigError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::Read(_) => "REQL_CONFIG_READ",
            ConfigError::Parse(_) => "REQL_CONFIG_PARSE",
            ConfigError::InvalidField { .. } => "REQL_CONFIG_INVALID",
        }
    }

    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}
