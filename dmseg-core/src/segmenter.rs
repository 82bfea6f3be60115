//! High-level segmentation entry point

use crate::config::TokenizerConfig;
use crate::error::{Error, Result};
use crate::filter::Mode;
use crate::token::Token;
use crate::tokenizer::Tokenizer;
use dmseg_dict::{loader, LineFormat, TrieDictionary};
use log::{info, warn};
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

/// Dictionaries plus tokenizer settings, shared by many sessions.
///
/// Dictionaries are held behind [`Arc`] and never mutated by a session, so
/// one segmenter can serve any number of concurrent tokenizers.
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    dictionaries: Vec<Arc<TrieDictionary>>,
    config: TokenizerConfig,
}

impl Segmenter {
    /// Segmenter over `dictionaries` with the default configuration
    pub fn new(dictionaries: Vec<Arc<TrieDictionary>>) -> Self {
        Self {
            dictionaries,
            config: TokenizerConfig::default(),
        }
    }

    /// Create a segmenter builder
    pub fn builder() -> SegmenterBuilder {
        SegmenterBuilder::default()
    }

    /// Load dictionaries from files, skipping any that fail to load
    pub fn from_files<P: AsRef<Path>>(
        paths: &[P],
        format: LineFormat,
        config: TokenizerConfig,
    ) -> Self {
        let mut builder = Self::builder().config(config);
        for path in paths {
            let path = path.as_ref();
            match loader::load_file(path, format) {
                Ok(dict) => {
                    info!("loaded {} words from {}", dict.len(), path.display());
                    builder = builder.dictionary(dict);
                }
                Err(err) => warn!("skipping dictionary {}: {err}", path.display()),
            }
        }
        builder.build()
    }

    /// Attach another dictionary after the existing ones.
    ///
    /// Sessions already running keep the dictionaries they started with.
    pub fn append_dictionary(&mut self, dict: impl Into<Arc<TrieDictionary>>) {
        let dict = dict.into();
        info!("appending dictionary {:?} ({} words)", dict.label(), dict.len());
        self.dictionaries.push(dict);
    }

    /// Attached dictionaries, earliest matched first
    pub fn dictionaries(&self) -> &[Arc<TrieDictionary>] {
        &self.dictionaries
    }

    /// Tokenizer settings
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// A fresh tokenizer session over `reader`
    pub fn tokenizer<R: Read>(&self, mode: Mode, reader: R) -> Tokenizer<R> {
        Tokenizer::new(mode, reader, self.dictionaries.clone(), &self.config)
    }

    /// Token stream for search indexing
    pub fn index_tokens<R: Read>(&self, reader: R) -> TokenStream<R> {
        TokenStream::new(self.tokenizer(Mode::Index, reader))
    }

    /// Token stream for query interpretation
    pub fn query_tokens<R: Read>(&self, reader: R) -> TokenStream<R> {
        TokenStream::new(self.tokenizer(Mode::Query, reader))
    }

    /// Segment an in-memory string
    pub fn segment_str(&self, mode: Mode, text: &str) -> Vec<Token> {
        // Reading from a byte slice cannot fail
        TokenStream::new(self.tokenizer(mode, text.as_bytes())).collect()
    }
}

/// Fluent builder for [`Segmenter`]
#[derive(Debug, Default)]
pub struct SegmenterBuilder {
    dictionaries: Vec<Arc<TrieDictionary>>,
    config: Option<TokenizerConfig>,
}

impl SegmenterBuilder {
    /// Create a new segmenter builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a dictionary; earlier dictionaries are matched first
    pub fn dictionary(mut self, dict: impl Into<Arc<TrieDictionary>>) -> Self {
        self.dictionaries.push(dict.into());
        self
    }

    /// Append several dictionaries
    pub fn dictionaries<I, D>(mut self, dicts: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<Arc<TrieDictionary>>,
    {
        self.dictionaries.extend(dicts.into_iter().map(Into::into));
        self
    }

    /// Set the tokenizer configuration
    pub fn config(mut self, config: TokenizerConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the segmenter
    pub fn build(self) -> Segmenter {
        Segmenter {
            dictionaries: self.dictionaries,
            config: self.config.unwrap_or_default(),
        }
    }
}

/// Iterator over the tokens of one session.
///
/// A read failure ends the iteration. The error is logged and kept, see
/// [`TokenStream::error`] and [`TokenStream::finish`].
pub struct TokenStream<R> {
    tokenizer: Tokenizer<R>,
    error: Option<Error>,
}

impl<R: Read> TokenStream<R> {
    fn new(tokenizer: Tokenizer<R>) -> Self {
        Self {
            tokenizer,
            error: None,
        }
    }

    /// Emission policy of the underlying session
    pub fn mode(&self) -> Mode {
        self.tokenizer.mode()
    }

    /// The error that ended the stream, if any
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Consume the remaining tokens and report whether the stream ended cleanly
    pub fn finish(mut self) -> Result<()> {
        while self.next().is_some() {}
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl<R: Read> Iterator for TokenStream<R> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.error.is_some() {
            return None;
        }
        match self.tokenizer.next_token() {
            Ok(token) => token,
            Err(err) => {
                warn!("token stream ended early: {err}");
                self.error = Some(err);
                None
            }
        }
    }
}
