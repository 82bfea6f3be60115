//! dmseg command-line entry point

use clap::Parser;
use dmseg_cli::commands::Commands;

/// Streaming dictionary-driven word segmentation
#[derive(Debug, Parser)]
#[command(name = "dmseg", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
