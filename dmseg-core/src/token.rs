//! Tokens produced by a segmentation session

use serde::Serialize;
use std::fmt;

/// Kind of unit a token represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TokenType {
    /// Dictionary word
    Word,
    /// Run of Latin letters and digits
    AlphaNum,
    /// Numeral literal (Arabic or Chinese)
    Decimal,
    /// Single Chinese char no dictionary claimed
    Cn,
    /// Any other char
    Unknown,
}

impl TokenType {
    /// Upper-case name used in output
    pub fn name(&self) -> &'static str {
        match self {
            TokenType::Word => "WORD",
            TokenType::AlphaNum => "ALPHANUM",
            TokenType::Decimal => "DECIMAL",
            TokenType::Cn => "CN",
            TokenType::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token over the char range `[start, end)` of the input stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Token kind
    #[serde(rename = "type")]
    pub kind: TokenType,
    /// Normalized text of the token
    pub value: String,
    /// Char offset of the first char
    pub start: usize,
    /// Char offset one past the last char
    pub end: usize,
    /// Distance in token slots from the previously emitted token (at least 1)
    pub position_increment: usize,
    /// Integer value of a numeral token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u64>,
}

impl Token {
    pub(crate) fn new(kind: TokenType, value: impl Into<String>, start: usize, end: usize) -> Self {
        debug_assert!(end > start, "token range must not be empty");
        Self {
            kind,
            value: value.into(),
            start,
            end,
            position_increment: 1,
            number: None,
        }
    }

    pub(crate) fn with_number(mut self, number: u64) -> Self {
        self.number = Some(number);
        self
    }

    /// Length of the token in chars
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the token covers no chars; never true for emitted tokens
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{},{}) {}", self.value, self.start, self.end, self.kind)
    }
}
