//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use dmseg_core::defaults;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        fs::write(&self.output, generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("Configuration template written to {}", self.output.display());
        println!("Use it with:");
        println!(
            "   dmseg segment -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }
}

/// Commented TOML template holding the built-in defaults
fn generate_template() -> String {
    format!(
        r#"# dmseg configuration
# Command-line flags override the values below.

[segment]
# "index" emits every candidate, "query" keeps the longest non-overlapping ones
mode = "index"

# Window capacity in chars; words longer than this are cut apart
buffer_size = {buffer_size}

# Normalization applied before matching
lowercase = {lowercase}
fullwidth_to_halfwidth = {fullwidth}

[dictionary]
# Dictionary files, matched in the order listed
paths = []

# "simple": one word per line; "tagged": word followed by its tags
format = "simple"

[output]
# "text" or "json"
format = "text"
pretty_json = true
"#,
        buffer_size = defaults::BUFFER_SIZE,
        lowercase = defaults::LOWERCASE,
        fullwidth = defaults::FULLWIDTH_TO_HALFWIDTH,
    )
}
