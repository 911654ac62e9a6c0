//! CLI-specific error types
//!
//! CLI errors are fatal: `main` prints them and exits non-zero. Store
//! errors raised inside the interactive menu never become CLI errors; the
//! menu reports them and keeps running.

use std::fmt;
use std::io;

use crate::storage::StoreError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdin/stdout)
    IoError,
    /// Store operation failed in a one-shot command
    StoreError,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "OPAMP_CLI_CONFIG_ERROR",
            Self::IoError => "OPAMP_CLI_IO_ERROR",
            Self::StoreError => "OPAMP_CLI_STORE_ERROR",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::config_error(format!("Invalid config JSON: {}", e))
    }
}

impl From<StoreError> for CliError {
    fn from(e: StoreError) -> Self {
        Self::new(CliErrorCode::StoreError, format!("{} ({})", e, e.code()))
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code() {
        let err = CliError::config_error("bad log level");
        assert_eq!(err.to_string(), "OPAMP_CLI_CONFIG_ERROR: bad log level");
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
    }

    #[test]
    fn test_from_store_error() {
        let err: CliError = StoreError::corrupt("file declares 11 records").into();
        assert_eq!(err.code_str(), "OPAMP_CLI_STORE_ERROR");
        assert!(err.message().contains("OPAMP_CORRUPT_DATA"));
    }
}
