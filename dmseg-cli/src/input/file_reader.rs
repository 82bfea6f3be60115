//! File reading utilities

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Opens inputs for streaming; decoding happens in the tokenizer
pub struct FileReader;

impl FileReader {
    /// Open a file for buffered reading
    pub fn open(path: &Path) -> Result<BufReader<File>> {
        let file = File::open(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        Ok(BufReader::new(file))
    }

    /// Get file size in bytes
    pub fn file_size(path: &Path) -> Result<u64> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to get metadata for: {}", path.display()))?;

        Ok(metadata.len())
    }

    /// Total size of `paths` in bytes
    pub fn total_size(paths: &[impl AsRef<Path>]) -> Result<u64> {
        paths
            .iter()
            .map(|path| Self::file_size(path.as_ref()))
            .sum()
    }
}
