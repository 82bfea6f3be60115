//! Output formatting module

use anyhow::Result;
use dmseg_core::Token;
use serde::{Deserialize, Serialize};

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format the tokens of one input source
    fn format_tokens(&mut self, source: &str, tokens: &[Token]) -> Result<()>;

    /// Finalize output (e.g., close the JSON document)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One token per line: value, range and type
    #[default]
    Text,
    /// JSON array of sources with their tokens
    Json,
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
