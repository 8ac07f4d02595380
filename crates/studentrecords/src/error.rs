//! Error types for studentrecords.
//!
//! This module defines all error types used throughout the studentrecords crate,
//! providing detailed context for debugging and user-friendly error messages.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for studentrecords operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Backing File Errors ===
    /// The backing file contained a line that could not be parsed.
    ///
    /// When this is returned from a load, the table has been left empty.
    #[error("failed to load {path} (line {line}): {reason}")]
    Load {
        /// Path to the backing file.
        path: PathBuf,
        /// 1-based line number of the offending line.
        line: usize,
        /// Why the line was rejected.
        reason: String,
    },

    /// The backing file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path to the backing file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Writing the backing file failed.
    ///
    /// The in-memory table already reflects the mutation that triggered the save.
    #[error("failed to save {path}: {source}")]
    Save {
        /// Path to the backing file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A single serialized record could not be parsed.
    #[error("malformed record: {0}")]
    MalformedRecord(String),

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Terminal Errors ===
    /// Standard input reached end-of-file before the session was ended.
    #[error("input stream closed")]
    InputClosed,

    /// Reading from or writing to the terminal failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for studentrecords operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a new malformed record error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedRecord(message.into())
    }

    /// Check if this error came from writing the backing file.
    #[must_use]
    pub fn is_save_error(&self) -> bool {
        matches!(self, Self::Save { .. })
    }

    /// Check if this error came from reading or parsing the backing file.
    #[must_use]
    pub fn is_load_error(&self) -> bool {
        matches!(self, Self::Load { .. } | Self::Read { .. })
    }
}
