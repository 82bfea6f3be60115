//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use dmseg_core::Token;
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs sources and their tokens as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    documents: Vec<DocumentData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct DocumentData {
    /// Input file, or `<stdin>`
    pub source: String,
    /// Tokens in emission order
    pub tokens: Vec<Token>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            documents: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_tokens(&mut self, source: &str, tokens: &[Token]) -> Result<()> {
        self.documents.push(DocumentData {
            source: source.to_string(),
            tokens: tokens.to_vec(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.documents)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
