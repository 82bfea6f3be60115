//! Dictionary inspection commands

use crate::error::CliError;
use anyhow::{Context, Result};
use clap::Args;
use dmseg_dict::{loader, LineFormat, TrieDictionary, Word};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Dictionaries to inspect
#[derive(Debug, Args)]
pub struct DictArgs {
    /// Dictionary files
    #[arg(short, long, value_name = "DICT", required = true)]
    pub dict: Vec<PathBuf>,

    /// Read tags after each word
    #[arg(long)]
    pub tagged: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Arguments for the lookup command
#[derive(Debug, Args)]
pub struct LookupArgs {
    #[command(flatten)]
    pub dictionaries: DictArgs,

    /// List the branches below each prefix instead of matching whole words
    #[arg(short, long)]
    pub prefix: bool,

    /// Words or prefixes to look up
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,
}

/// Load one dictionary file, failing on missing or unreadable files
pub fn load_dictionary(path: &Path, format: LineFormat) -> Result<TrieDictionary> {
    if !path.is_file() {
        return Err(CliError::FileNotFound(path.display().to_string()).into());
    }
    let dict = loader::load_file(path, format)
        .with_context(|| format!("Failed to load dictionary: {}", path.display()))?;
    log::info!("loaded {} words from {}", dict.len(), path.display());
    Ok(dict)
}

/// A word with its tags, in the tagged line format
fn describe(word: &Word) -> String {
    let mut line = word.value().to_string();
    for tag in word.tags() {
        line.push(' ');
        line.push_str(tag);
    }
    line
}

impl DictArgs {
    fn format(&self) -> LineFormat {
        if self.tagged {
            LineFormat::Tagged
        } else {
            LineFormat::Simple
        }
    }

    fn load(&self) -> Result<Vec<TrieDictionary>> {
        super::init_logging(self.verbose, false);
        self.dict
            .iter()
            .map(|path| load_dictionary(path, self.format()))
            .collect()
    }

    /// Execute the stats command
    pub fn stats(&self) -> Result<()> {
        let mut out = io::stdout().lock();
        for dict in self.load()? {
            writeln!(out, "{}", dict.label())?;
            writeln!(out, "  words:        {}", dict.len())?;
            writeln!(out, "  nodes:        {}", dict.node_count())?;
            writeln!(out, "  longest word: {}", dict.max_word_len())?;
        }
        Ok(())
    }

    /// Execute the dump command
    pub fn dump(&self) -> Result<()> {
        let mut out = io::stdout().lock();
        for dict in self.load()? {
            for word in dict.words() {
                writeln!(out, "{}", describe(word))?;
            }
        }
        Ok(())
    }
}

impl LookupArgs {
    /// Execute the lookup command
    pub fn execute(&self) -> Result<()> {
        let dictionaries = self.dictionaries.load()?;
        let mut out = io::stdout().lock();
        for text in &self.words {
            if self.prefix {
                write_branches(&mut out, text, &dictionaries)?;
            } else {
                write_matches(&mut out, text, &dictionaries)?;
            }
        }
        Ok(())
    }
}

fn write_matches(out: &mut impl Write, text: &str, dictionaries: &[TrieDictionary]) -> Result<()> {
    let mut found = false;
    for dict in dictionaries {
        if let Some(word) = dict.get(text) {
            writeln!(out, "{}: {}", dict.label(), describe(word))?;
            found = true;
        }
    }
    if !found {
        writeln!(out, "{text}: not found")?;
    }
    Ok(())
}

fn write_branches(out: &mut impl Write, text: &str, dictionaries: &[TrieDictionary]) -> Result<()> {
    let prefix: Vec<char> = text.chars().collect();
    for dict in dictionaries {
        match dict.with_prefix(&prefix) {
            None => writeln!(out, "{}: no path {text:?}", dict.label())?,
            Some(children) => {
                let forks: Vec<String> = children
                    .iter()
                    .map(|child| {
                        let marker = if child.is_terminal() { "*" } else { "" };
                        format!("{}{marker}", child.fork())
                    })
                    .collect();
                writeln!(out, "{}: {text:?} -> [{}]", dict.label(), forks.join(" "))?;
            }
        }
    }
    Ok(())
}
