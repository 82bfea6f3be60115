//! Error types for dictionary construction and loading

use thiserror::Error;

/// Dictionary errors
#[derive(Debug, Error)]
pub enum DictError {
    /// A word literal was empty or whitespace only
    #[error("cannot create a blank word")]
    BlankWord,

    /// Reading dictionary records failed
    #[error("failed to read dictionary records at line {line}: {source}")]
    Io {
        /// 1-based line number being read when the failure happened
        line: usize,
        /// The underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}

/// Result type for dictionary operations
pub type Result<T> = std::result::Result<T, DictError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(DictError::BlankWord.to_string(), "cannot create a blank word");

        let err = DictError::Io {
            line: 7,
            source: std::io::Error::new(std::io::ErrorKind::Other, "disk gone"),
        };
        assert_eq!(
            err.to_string(),
            "failed to read dictionary records at line 7: disk gone"
        );
    }
}
