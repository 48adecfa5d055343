//! Error types for the hanzi-extract library.
//!
//! Extraction itself never fails: every input produces a (possibly empty)
//! output. Errors only arise while loading extraction options from JSON
//! documents or files. All errors are represented by the [`HanziError`] enum.
//!
//! # Examples
//!
//! ```
//! use hanzi_extract::error::{HanziError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(HanziError::config("includeCharacters must be text"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for hanzi-extract operations.
#[derive(Error, Debug)]
pub enum HanziError {
    /// I/O errors (reading option files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with HanziError.
pub type Result<T> = std::result::Result<T, HanziError>;

impl HanziError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        HanziError::Config(msg.into())
    }

    /// Create a new error for an options file that could not be read.
    pub fn unreadable<S: Into<String>>(path: S, source: io::Error) -> Self {
        let context = format!("Failed to read options file '{}'", path.into());
        HanziError::Anyhow(anyhow::Error::from(source).context(context))
    }
}
