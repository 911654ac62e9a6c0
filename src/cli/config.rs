//! Configuration file
//!
//! ```json
//! { "database_file": "database.txt", "log_level": "warn" }
//! ```
//!
//! Every field is optional. Command line flags override file values.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::database::DATABASE_FILENAME;
use crate::observability::Severity;

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Database text file (optional, default "database.txt")
    #[serde(default = "default_database_file")]
    pub database_file: PathBuf,

    /// Lowest log severity written (optional, default "warn")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_database_file() -> PathBuf {
    PathBuf::from(DATABASE_FILENAME)
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_file: default_database_file(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        Self::from_json(&content)
    }

    /// Parse and validate configuration JSON
    pub fn from_json(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.database_file.as_os_str().is_empty() {
            return Err(CliError::config_error("database_file must not be empty"));
        }

        self.severity()?;

        Ok(())
    }

    /// Parsed log level
    pub fn severity(&self) -> CliResult<Severity> {
        self.log_level
            .parse()
            .map_err(|e: String| CliError::config_error(format!("Invalid log_level: {}", e)))
    }

    /// Applies command line overrides
    pub fn with_overrides(mut self, file: Option<PathBuf>, log_level: Option<Severity>) -> Self {
        if let Some(file) = file {
            self.database_file = file;
        }
        if let Some(level) = log_level {
            self.log_level = level.as_str().to_ascii_lowercase();
        }
        self
    }
}
