//! Line-oriented dictionary loading
//!
//! One record per line. Surrounding whitespace is trimmed, blank lines are
//! skipped and the first whitespace-delimited field is the word literal.

use crate::error::{DictError, Result};
use crate::trie::TrieDictionary;
use crate::word::Word;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// How the fields after the word literal are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineFormat {
    /// Remaining fields are discarded
    #[default]
    Simple,
    /// Remaining fields become the word's tags
    Tagged,
}

/// Iterator over the word records of a line-oriented source
pub struct WordRecords<R> {
    reader: R,
    format: LineFormat,
    line: usize,
    buf: String,
    failed: bool,
}

impl<R: BufRead> WordRecords<R> {
    /// Wrap a buffered reader
    pub fn new(reader: R, format: LineFormat) -> Self {
        Self {
            reader,
            format,
            line: 0,
            buf: String::new(),
            failed: false,
        }
    }

    /// Number of lines consumed so far
    pub fn line(&self) -> usize {
        self.line
    }
}

impl<R: BufRead> Iterator for WordRecords<R> {
    type Item = Result<Word>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            self.buf.clear();
            self.line += 1;
            match self.reader.read_line(&mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(source) => {
                    self.failed = true;
                    return Some(Err(DictError::Io {
                        line: self.line,
                        source,
                    }));
                }
            }

            let mut fields = self.buf.split_whitespace();
            let Some(literal) = fields.next() else {
                continue;
            };
            let word = match self.format {
                LineFormat::Simple => Word::new(literal),
                LineFormat::Tagged => Word::with_tags(literal, fields),
            };
            return Some(word);
        }
    }
}

/// Read a fresh dictionary from `reader`
pub fn load<R: BufRead>(reader: R, format: LineFormat) -> Result<TrieDictionary> {
    let mut dict = TrieDictionary::new();
    apply(&mut dict, reader, format)?;
    Ok(dict)
}

/// Patch an existing dictionary with the records of `reader`.
///
/// Returns the number of records applied.
pub fn apply<R: BufRead>(
    dict: &mut TrieDictionary,
    reader: R,
    format: LineFormat,
) -> Result<usize> {
    let mut applied = 0;
    for record in WordRecords::new(reader, format) {
        if dict.add_word(record?) {
            applied += 1;
        }
    }
    log::info!(
        "applied {applied} records to dictionary {:?} ({} words)",
        dict.label(),
        dict.len()
    );
    Ok(applied)
}

/// Load a dictionary file, labeling the dictionary after the file stem
pub fn load_file(path: impl AsRef<Path>, format: LineFormat) -> Result<TrieDictionary> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DictError::Io { line: 0, source })?;
    let mut dict = load(BufReader::new(file), format)?;
    if let Some(stem) = path.file_stem() {
        dict.set_label(stem.to_string_lossy());
    }
    Ok(dict)
}
