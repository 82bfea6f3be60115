//! Streaming word segmentation for mixed Chinese/Latin text
//!
//! This crate splits a byte stream into tokens for search indexing and query
//! interpretation. Input is read through a fixed-capacity char window; at
//! every position a chain of matchers proposes candidate tokens (Latin runs,
//! numerals, dictionary words, single chars) and a mode filter resolves the
//! overlaps.
//!
//! # Architecture
//!
//! - **Characters**: char classes, normalization and Chinese numerals
//! - **Matching**: the window buffer, the matcher chain and the mode filters
//! - **Sessions**: the pull-based [`Tokenizer`] and the [`Segmenter`] that
//!   shares dictionaries across sessions
//!
//! # Example
//!
//! ```rust
//! use dmseg_core::{Segmenter, TokenType};
//! use dmseg_dict::TrieDictionary;
//!
//! let segmenter = Segmenter::builder()
//!     .dictionary(TrieDictionary::from_words(["and", "ant", "but", "button"]))
//!     .build();
//!
//! let tokens: Vec<_> = segmenter.query_tokens("antbutton".as_bytes()).collect();
//! let words: Vec<&str> = tokens.iter().map(|t| t.value.as_str()).collect();
//! assert_eq!(words, ["ant", "button"]);
//! assert!(tokens.iter().all(|t| t.kind == TokenType::Word));
//! ```

#![warn(missing_docs)]

pub mod buffer;
pub mod chars;
pub mod config;
pub mod context;
pub mod error;
pub mod filter;
pub mod matcher;
pub mod numeral;
pub mod segmenter;
pub mod token;
pub mod tokenizer;

pub use config::{defaults, TokenizerConfig, TokenizerConfigBuilder, MIN_BUFFER_SIZE};
pub use context::SessionContext;
pub use error::{Error, Result};
pub use filter::Mode;
pub use matcher::{Matcher, Reach, Scan};
pub use numeral::{chinese_num_to_int, NumeralError};
pub use segmenter::{Segmenter, SegmenterBuilder, TokenStream};
pub use token::{Token, TokenType};
pub use tokenizer::{Tokenizer, TokenizerState};

pub use dmseg_dict;
