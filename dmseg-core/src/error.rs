//! Error types for tokenization sessions

use thiserror::Error;

/// Errors raised while configuring or running a tokenizer
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid tokenizer configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The input stream failed while filling the buffer
    #[error("Failed to read input stream: {0}")]
    Io(#[from] std::io::Error),

    /// The input stream is not valid UTF-8
    #[error("Invalid UTF-8 in input stream at byte {offset}")]
    InvalidUtf8 {
        /// Absolute byte offset of the first invalid byte
        offset: usize,
    },
}

/// Result type for tokenizer operations
pub type Result<T> = std::result::Result<T, Error>;
