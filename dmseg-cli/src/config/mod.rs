//! Configuration module
//!
//! An optional TOML file supplies defaults for `dmseg segment`; flags given
//! on the command line take precedence.

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use dmseg_core::{defaults, Mode, TokenizerConfig};
use dmseg_dict::LineFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Segmentation settings
    #[serde(default)]
    pub segment: SegmentConfig,

    /// Dictionaries to load
    #[serde(default)]
    pub dictionary: DictionaryConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Segmentation-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SegmentConfig {
    /// Emission policy: "index" or "query"
    pub mode: Mode,

    /// Window capacity in chars
    pub buffer_size: usize,

    /// Lowercase input before matching
    pub lowercase: bool,

    /// Fold full-width forms to half-width before matching
    pub fullwidth_to_halfwidth: bool,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            buffer_size: defaults::BUFFER_SIZE,
            lowercase: defaults::LOWERCASE,
            fullwidth_to_halfwidth: defaults::FULLWIDTH_TO_HALFWIDTH,
        }
    }
}

/// Line format of dictionary files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DictionaryFormat {
    /// One word per line, extra fields ignored
    #[default]
    Simple,
    /// One word per line followed by its tags
    Tagged,
}

impl From<DictionaryFormat> for LineFormat {
    fn from(format: DictionaryFormat) -> Self {
        match format {
            DictionaryFormat::Simple => LineFormat::Simple,
            DictionaryFormat::Tagged => LineFormat::Tagged,
        }
    }
}

/// Dictionary-related configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Dictionary files, matched in order
    pub paths: Vec<PathBuf>,

    /// Line format shared by the files
    pub format: DictionaryFormat,
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Read a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Tokenizer settings described by the `[segment]` section
    pub fn tokenizer_config(&self) -> Result<TokenizerConfig> {
        TokenizerConfig::builder()
            .buffer_size(self.segment.buffer_size)
            .lowercase(self.segment.lowercase)
            .fullwidth_to_halfwidth(self.segment.fullwidth_to_halfwidth)
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }
}
