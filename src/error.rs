//! Error types for the wordperm library.
//!
//! All failures are represented by the [`WordpermError`] enum. The only error
//! a permutation call itself can produce is [`WordpermError::MultiWordInput`];
//! the remaining variants cover engine construction and generic wrapping.
//!
//! # Examples
//!
//! ```
//! use wordperm::error::{Result, WordpermError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(WordpermError::multi_word("two words"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use anyhow;
use thiserror::Error;

/// The main error type for wordperm operations.
///
/// Uses the `thiserror` crate for automatic `Error` trait implementation and
/// provides convenient constructor methods for the common variants.
#[derive(Error, Debug)]
pub enum WordpermError {
    /// Input contained whitespace, i.e. more than one word.
    ///
    /// Carries the offending input verbatim so callers can report it.
    #[error("multi-word input is not supported: {0:?}")]
    MultiWordInput(String),

    /// Engine construction was given an unusable configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with WordpermError.
pub type Result<T> = std::result::Result<T, WordpermError>;

impl WordpermError {
    /// Create a new multi-word input error carrying the rejected input.
    pub fn multi_word<S: Into<String>>(word: S) -> Self {
        WordpermError::MultiWordInput(word.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        WordpermError::InvalidConfig(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        WordpermError::Other(msg.into())
    }
}
