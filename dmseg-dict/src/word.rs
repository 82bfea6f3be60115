//! Dictionary word: a literal value plus application-defined tags

use crate::error::{DictError, Result};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// A word stored in a dictionary.
///
/// Tags are free-form labels (part-of-speech markers, sources, ...) carried for
/// the application. They never influence matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Word {
    value: String,
    tags: BTreeSet<String>,
}

impl Word {
    /// Create a word without tags
    pub fn new(value: impl Into<String>) -> Result<Self> {
        Self::with_tags(value, std::iter::empty::<String>())
    }

    /// Create a word carrying the given tags
    pub fn with_tags<I, S>(value: impl Into<String>, tags: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DictError::BlankWord);
        }
        Ok(Self {
            value,
            tags: tags.into_iter().map(Into::into).collect(),
        })
    }

    /// Literal value of the word
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Length of the word in chars
    pub fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    /// Tags attached to the word
    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// Check whether the word carries a tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)?;
        for tag in &self.tags {
            write!(f, " [{tag}]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_word_rejected() {
        assert!(matches!(Word::new(""), Err(DictError::BlankWord)));
        assert!(matches!(Word::new("  \t"), Err(DictError::BlankWord)));
    }

    #[test]
    fn test_word_with_tags() {
        let word = Word::with_tags("北京", ["ns", "place"]).unwrap();
        assert_eq!(word.value(), "北京");
        assert_eq!(word.char_len(), 2);
        assert!(word.has_tag("ns"));
        assert!(!word.has_tag("v"));
        assert_eq!(word.tags().len(), 2);
    }

    #[test]
    fn test_duplicate_tags_collapse() {
        let word = Word::with_tags("test", ["v", "v", "n"]).unwrap();
        assert_eq!(word.tags().len(), 2);
    }

    #[test]
    fn test_display() {
        let word = Word::with_tags("test", ["v"]).unwrap();
        assert_eq!(word.to_string(), "test [v]");
        assert_eq!(Word::new("test").unwrap().to_string(), "test");
    }
}
