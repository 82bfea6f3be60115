//! Input pattern expansion using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::collections::HashSet;
use std::path::PathBuf;

/// Expand input patterns to the files to segment.
///
/// Files keep the order of the patterns that name them and are sorted within
/// one pattern. A file named by several patterns is segmented once. Every
/// pattern must match at least one file.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for pattern in patterns {
        let matched = expand(pattern)?;
        if matched.is_empty() {
            return Err(CliError::FileNotFound(pattern.clone()).into());
        }
        log::debug!("pattern {pattern:?} matched {} files", matched.len());
        files.extend(matched.into_iter().filter(|path| seen.insert(path.clone())));
    }

    Ok(files)
}

/// Regular files matched by one pattern, sorted
fn expand(pattern: &str) -> Result<Vec<PathBuf>> {
    let entries =
        glob(pattern).map_err(|e| CliError::InvalidPattern(format!("{pattern}: {e}")))?;

    let mut matched = Vec::new();
    for entry in entries {
        let path = entry.with_context(|| format!("Error resolving pattern: {pattern}"))?;
        if path.is_file() {
            matched.push(path);
        }
    }
    matched.sort();
    Ok(matched)
}
