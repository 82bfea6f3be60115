//! Tokenizer configuration

use crate::chars::Normalizer;
use crate::error::{Error, Result};

/// Default configuration constants
pub mod defaults {
    /// Default window capacity in chars
    pub const BUFFER_SIZE: usize = 128;

    /// Smallest usable window: one scan position plus one char of lookahead
    pub const MIN_BUFFER_SIZE: usize = 2;

    /// Lowercase input by default
    pub const LOWERCASE: bool = true;

    /// Fold full-width forms by default
    pub const FULLWIDTH_TO_HALFWIDTH: bool = true;
}

pub use defaults::MIN_BUFFER_SIZE;

/// Settings shared by every tokenizer a segmenter creates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizerConfig {
    pub(crate) buffer_size: usize, // in chars
    pub(crate) lowercase: bool,
    pub(crate) fullwidth_to_halfwidth: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            buffer_size: defaults::BUFFER_SIZE,
            lowercase: defaults::LOWERCASE,
            fullwidth_to_halfwidth: defaults::FULLWIDTH_TO_HALFWIDTH,
        }
    }
}

impl TokenizerConfig {
    /// Create a configuration builder
    pub fn builder() -> TokenizerConfigBuilder {
        TokenizerConfigBuilder::default()
    }

    /// Window capacity in chars
    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    /// Whether input is lowercased
    pub fn lowercase(&self) -> bool {
        self.lowercase
    }

    /// Whether full-width forms are folded to half-width
    pub fn fullwidth_to_halfwidth(&self) -> bool {
        self.fullwidth_to_halfwidth
    }

    /// The per-char normalizer these settings describe
    pub fn normalizer(&self) -> Normalizer {
        Normalizer {
            fullwidth_to_halfwidth: self.fullwidth_to_halfwidth,
            lowercase: self.lowercase,
        }
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if self.buffer_size < MIN_BUFFER_SIZE {
            return Err(Error::Configuration(format!(
                "buffer_size must be at least {MIN_BUFFER_SIZE}, got {}",
                self.buffer_size
            )));
        }
        Ok(())
    }
}

/// Fluent builder for [`TokenizerConfig`]
#[derive(Debug, Default)]
pub struct TokenizerConfigBuilder {
    buffer_size: Option<usize>,
    lowercase: Option<bool>,
    fullwidth_to_halfwidth: Option<bool>,
}

impl TokenizerConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the window capacity in chars
    pub fn buffer_size(mut self, chars: usize) -> Self {
        self.buffer_size = Some(chars);
        self
    }

    /// Toggle lowercasing
    pub fn lowercase(mut self, enabled: bool) -> Self {
        self.lowercase = Some(enabled);
        self
    }

    /// Toggle full-width folding
    pub fn fullwidth_to_halfwidth(mut self, enabled: bool) -> Self {
        self.fullwidth_to_halfwidth = Some(enabled);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<TokenizerConfig> {
        let mut config = TokenizerConfig::default();

        if let Some(size) = self.buffer_size {
            config.buffer_size = size;
        }
        if let Some(enabled) = self.lowercase {
            config.lowercase = enabled;
        }
        if let Some(enabled) = self.fullwidth_to_halfwidth {
            config.fullwidth_to_halfwidth = enabled;
        }

        config.validate()?;
        Ok(config)
    }
}
