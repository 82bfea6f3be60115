//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use dmseg_core::Token;
use std::io::{self, Write};

/// Plain text formatter - outputs one token per line
pub struct TextFormatter<W: Write> {
    writer: W,
    /// Print a `# source` header before each source
    headers: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            headers: false,
        }
    }

    /// Label each source's tokens with a header line
    pub fn with_headers(mut self, headers: bool) -> Self {
        self.headers = headers;
        self
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_tokens(&mut self, source: &str, tokens: &[Token]) -> Result<()> {
        if self.headers {
            writeln!(self.writer, "# {source}")?;
        }
        for token in tokens {
            write!(
                self.writer,
                "{}\t{}\t{}\t{}",
                token.value, token.start, token.end, token.kind
            )?;
            if let Some(number) = token.number {
                write!(self.writer, "\t{number}")?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
