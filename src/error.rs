//! Error types for the minaret library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`MinaretError`] enum.
//!
//! # Examples
//!
//! ```
//! use minaret::error::{MinaretError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(MinaretError::invalid_query("empty search text"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for minaret operations.
///
/// Construction-time and assembly-time errors (`InvalidQuery`,
/// `InvalidOptions`) are surfaced immediately to the caller. Backend errors
/// (`Transport`) are operational: the executor absorbs them into the
/// outcome's error flag and they never cross `execute()`.
#[derive(Error, Debug)]
pub enum MinaretError {
    /// Empty or whitespace-only search text.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Out-of-range pagination or sizing parameters.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// Any failure from the backend call (network, malformed response,
    /// backend-side query error).
    #[error("Transport failure: {0}")]
    Transport(String),

    /// I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with MinaretError.
pub type Result<T> = std::result::Result<T, MinaretError>;

impl MinaretError {
    /// Create a new invalid query error.
    pub fn invalid_query<S: Into<String>>(msg: S) -> Self {
        MinaretError::InvalidQuery(msg.into())
    }

    /// Create a new invalid options error.
    pub fn invalid_options<S: Into<String>>(msg: S) -> Self {
        MinaretError::InvalidOptions(msg.into())
    }

    /// Create a new transport failure.
    pub fn transport<S: Into<String>>(msg: S) -> Self {
        MinaretError::Transport(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        MinaretError::Other(msg.into())
    }

    /// True for backend failures that the executor recovers into the
    /// outcome's error flag.
    pub fn is_transport(&self) -> bool {
        matches!(self, MinaretError::Transport(_))
    }
}
