/*!
 * Error types for the glossed application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when reading or writing translation tables
#[derive(Error, Debug)]
pub enum TableError {
    /// A non-blank line that is not exactly one `source = target` pair
    #[error("Malformed table line {line_number} in {path:?}: {line:?}")]
    MalformedLine {
        /// Table file (or in-memory origin label)
        path: PathBuf,
        /// 1-based line number
        line_number: usize,
        /// The offending line, trimmed
        line: String,
    },

    /// Error reading or appending to a table file
    #[error("Table I/O error for {path:?}: {message}")]
    Io {
        path: PathBuf,
        message: String,
    },
}

/// Violations of the forward/reverse table symmetry
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConsistencyError {
    /// The reverse table names a source word the forward table does not know
    #[error("Reverse entry '{target_word} = {source_word}' has no forward entry for '{source_word}'")]
    MissingEntry {
        target_word: String,
        source_word: String,
    },

    /// The forward table maps the source word somewhere else
    #[error("Reverse entry '{target_word} = {source_word}' disagrees with forward entry '{source_word} = {found}'")]
    Mismatch {
        target_word: String,
        source_word: String,
        found: String,
    },
}

/// Errors that can occur when querying the external translation oracle
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The oracle could not be invoked at all
    #[error("Oracle request failed: {0}")]
    RequestFailed(String),

    /// The oracle did not answer in time
    #[error("Oracle timed out after {0} seconds")]
    Timeout(u64),

    /// The oracle process exited unsuccessfully
    #[error("Oracle command failed with status {status}: {stderr}")]
    CommandFailed {
        status: i32,
        stderr: String,
    },
}

/// Errors raised while adding new entries to a table pair
#[derive(Error, Debug, PartialEq, Eq)]
pub enum UpdateError {
    /// An empty candidate collides with an existing key and has no character to repeat
    #[error("Empty translation for '{word}' collides with an existing entry")]
    EmptyCandidate { word: String },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from table loading
    #[error("Table error: {0}")]
    Table(#[from] TableError),

    /// Tables failed the symmetry check
    #[error("Consistency error: {0}")]
    Consistency(#[from] ConsistencyError),

    /// Error from the oracle
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from a table update
    #[error("Update error: {0}")]
    Update(#[from] UpdateError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
