//! CLI command implementations

use clap::Subcommand;

pub mod dict;
pub mod generate_config;
pub mod segment;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Segment files or stdin into tokens
    Segment(segment::SegmentArgs),

    /// Inspect dictionaries
    Dict {
        #[command(subcommand)]
        subcommand: DictCommands,
    },

    /// Write a configuration file with the default settings
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// Dictionary subcommands
#[derive(Debug, Subcommand)]
pub enum DictCommands {
    /// Show word and node counts
    Stats(dict::DictArgs),

    /// Look words or prefixes up
    Lookup(dict::LookupArgs),

    /// Print every word, one per line
    Dump(dict::DictArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Segment(args) => args.execute(),
            Commands::Dict { subcommand } => match subcommand {
                DictCommands::Stats(args) => args.stats(),
                DictCommands::Lookup(args) => args.execute(),
                DictCommands::Dump(args) => args.dump(),
            },
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A second initialization (e.g. from tests) keeps the first logger
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_commands_debug_format() {
        let cmd = Commands::Dict {
            subcommand: DictCommands::Stats(dict::DictArgs {
                dict: vec![PathBuf::from("words.dic")],
                tagged: false,
                verbose: 0,
            }),
        };

        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Dict"));
        assert!(debug_str.contains("Stats"));
        assert!(debug_str.contains("words.dic"));
    }

    #[test]
    fn test_logging_init_is_repeatable() {
        init_logging(2, false);
        init_logging(0, false);
        init_logging(0, true);
    }
}
