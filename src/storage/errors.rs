//! Store error types
//!
//! Error codes:
//! - OPAMP_CAPACITY_EXCEEDED (INFO severity)
//! - OPAMP_INVALID_RECORD (INFO severity)
//! - OPAMP_FILE_OPEN_FAILURE (ERROR severity)
//! - OPAMP_CORRUPT_DATA (ERROR severity)
//! - OPAMP_IO_ERROR (ERROR severity)
//!
//! None of these are fatal. Every failure is reported to the user and the
//! menu loop continues.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::observability::Severity;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by the record store and its text file codec
#[derive(Debug, Error)]
pub enum StoreError {
    /// Add on a store that already holds `capacity` records
    #[error("The database is full ({capacity} records)")]
    CapacityExceeded { capacity: usize },

    /// A field value was refused before it reached the store
    #[error("Invalid record: {reason}")]
    InvalidRecord { reason: String },

    /// The backing file could not be opened
    #[error("Could not open database file {}: {source}", .path.display())]
    FileOpenFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The backing file declares too many records or holds a bad field
    #[error("Corrupt database file: {reason}")]
    CorruptOrOversizedData { reason: String },

    /// Reading or writing failed after the file was opened
    #[error("I/O error on database file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    pub fn invalid_record(reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            reason: reason.into(),
        }
    }

    pub fn corrupt(reason: impl Into<String>) -> Self {
        Self::CorruptOrOversizedData {
            reason: reason.into(),
        }
    }

    pub fn file_open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileOpenFailure {
            path: path.into(),
            source,
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns the stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::CapacityExceeded { .. } => "OPAMP_CAPACITY_EXCEEDED",
            StoreError::InvalidRecord { .. } => "OPAMP_INVALID_RECORD",
            StoreError::FileOpenFailure { .. } => "OPAMP_FILE_OPEN_FAILURE",
            StoreError::CorruptOrOversizedData { .. } => "OPAMP_CORRUPT_DATA",
            StoreError::Io { .. } => "OPAMP_IO_ERROR",
        }
    }

    /// Returns the severity used when the error is logged
    pub fn severity(&self) -> Severity {
        match self {
            StoreError::CapacityExceeded { .. } | StoreError::InvalidRecord { .. } => {
                Severity::Info
            }
            StoreError::FileOpenFailure { .. }
            | StoreError::CorruptOrOversizedData { .. }
            | StoreError::Io { .. } => Severity::Error,
        }
    }
}
