//! Trie dictionary for dmseg word segmentation
//!
//! Words are stored in a char-keyed prefix tree. Besides the usual
//! add/remove/contains operations the dictionary offers a streaming prefix
//! scan, [`TrieDictionary::dict_match`], which reports every stored word that
//! starts at the head of an input slice. The tokenizer in `dmseg-core` runs it
//! at each scan position.
//!
//! # Example
//!
//! ```rust
//! use dmseg_dict::TrieDictionary;
//!
//! let dict = TrieDictionary::from_words(["but", "button", "cute"]);
//! let input: Vec<char> = "buttonhole".chars().collect();
//!
//! let words: Vec<&str> = dict.dict_match(&input).iter().map(|w| w.value()).collect();
//! assert_eq!(words, ["but", "button"]);
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod path;
pub mod trie;
pub mod word;

pub use error::{DictError, Result};
pub use loader::LineFormat;
pub use path::{Iter, WordPath};
pub use trie::{NodeId, PrefixMatch, TrieDictionary, DEFAULT_LABEL};
pub use word::Word;
