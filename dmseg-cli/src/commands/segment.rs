//! Segment command implementation

use super::dict::load_dictionary;
use crate::config::{CliConfig, DictionaryFormat};
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::Result;
use clap::Args;
use dmseg_core::{Mode, Segmenter, Token};
use rayon::prelude::*;
use std::io::{self, Read};
use std::path::PathBuf;

/// Arguments for the segment command
#[derive(Debug, Args)]
pub struct SegmentArgs {
    /// Input files or patterns (supports glob); reads stdin when omitted
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Dictionary files, matched in the order given
    #[arg(short, long, value_name = "DICT")]
    pub dict: Vec<PathBuf>,

    /// Emission policy: index or query
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<Mode>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Dictionary lines carry tags after the word
    #[arg(long)]
    pub tagged: bool,

    /// Window capacity in chars
    #[arg(short, long, value_name = "CHARS")]
    pub buffer: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl SegmentArgs {
    /// Execute the segment command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);
        log::debug!("Arguments: {self:?}");

        let config = self.resolve_config()?;
        let segmenter = build_segmenter(&config)?;
        let mode = config.segment.mode;
        log::info!(
            "Segmenting in {mode} mode with {} dictionaries",
            segmenter.dictionaries().len()
        );

        if self.input.is_empty() {
            let tokens = segment_reader(&segmenter, mode, io::stdin().lock(), "<stdin>")?;
            let mut formatter = formatter(&config, false);
            formatter.format_tokens("<stdin>", &tokens)?;
            return formatter.finish();
        }

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} files to segment", files.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_bytes(FileReader::total_size(&files)?);

        // Files are independent sessions over the shared dictionaries
        let results: Vec<Result<Vec<Token>>> = files
            .par_iter()
            .map(|path| {
                let source = path.display().to_string();
                let tokens = segment_reader(&segmenter, mode, FileReader::open(path)?, &source)?;
                progress.file_completed(&source, FileReader::file_size(path)?);
                Ok(tokens)
            })
            .collect();
        progress.finish();

        let mut formatter = formatter(&config, files.len() > 1);
        for (path, tokens) in files.iter().zip(results) {
            formatter.format_tokens(&path.display().to_string(), &tokens?)?;
        }
        formatter.finish()
    }

    /// Overlay command-line flags on the configuration file
    fn resolve_config(&self) -> Result<CliConfig> {
        let mut config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        if let Some(mode) = self.mode {
            config.segment.mode = mode;
        }
        if let Some(buffer) = self.buffer {
            config.segment.buffer_size = buffer;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if !self.dict.is_empty() {
            config.dictionary.paths = self.dict.clone();
        }
        if self.tagged {
            config.dictionary.format = DictionaryFormat::Tagged;
        }
        Ok(config)
    }
}

/// Output formatter selected by the `[output]` settings
fn formatter(config: &CliConfig, headers: bool) -> Box<dyn OutputFormatter> {
    match config.output.format {
        OutputFormat::Text => Box::new(TextFormatter::stdout().with_headers(headers)),
        OutputFormat::Json => Box::new(JsonFormatter::new(io::stdout(), config.output.pretty_json)),
    }
}

/// Build a segmenter from the `[segment]` and `[dictionary]` settings
fn build_segmenter(config: &CliConfig) -> Result<Segmenter> {
    let format = config.dictionary.format.into();
    let mut builder = Segmenter::builder().config(config.tokenizer_config()?);
    for path in &config.dictionary.paths {
        builder = builder.dictionary(load_dictionary(path, format)?);
    }
    if config.dictionary.paths.is_empty() {
        log::warn!("No dictionaries given, only rule-based tokens will be produced");
    }
    Ok(builder.build())
}

/// Tokenize one input source to completion
fn segment_reader<R: Read>(
    segmenter: &Segmenter,
    mode: Mode,
    reader: R,
    source: &str,
) -> Result<Vec<Token>> {
    let mut stream = match mode {
        Mode::Index => segmenter.index_tokens(reader),
        Mode::Query => segmenter.query_tokens(reader),
    };
    let tokens: Vec<Token> = stream.by_ref().collect();
    stream
        .finish()
        .map_err(|e| CliError::SegmentationError(format!("{source}: {e}")))?;
    log::info!("Segmented {source}: {} tokens", tokens.len());
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args() -> SegmentArgs {
        SegmentArgs {
            input: Vec::new(),
            dict: Vec::new(),
            mode: None,
            format: None,
            tagged: false,
            buffer: None,
            config: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_flags_override_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("dmseg.toml");
        fs::write(
            &config_path,
            "[segment]\nmode = \"query\"\nbuffer_size = 64\n\n[output]\nformat = \"json\"\n",
        )
        .unwrap();

        let mut args = args();
        args.config = Some(config_path);
        args.buffer = Some(32);
        args.tagged = true;

        let config = args.resolve_config().unwrap();
        assert_eq!(config.segment.mode, Mode::Query);
        assert_eq!(config.segment.buffer_size, 32);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.dictionary.format, DictionaryFormat::Tagged);
    }

    #[test]
    fn test_build_segmenter_loads_dictionaries_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let first = temp_dir.path().join("first.dic");
        let second = temp_dir.path().join("second.dic");
        fs::write(&first, "北京\n").unwrap();
        fs::write(&second, "大学\n").unwrap();

        let mut config = CliConfig::default();
        config.dictionary.paths = vec![first, second];
        let segmenter = build_segmenter(&config).unwrap();
        let labels: Vec<&str> = segmenter.dictionaries().iter().map(|d| d.label()).collect();
        assert_eq!(labels, ["first", "second"]);
    }

    #[test]
    fn test_segment_reader_reports_bad_input() {
        let segmenter = Segmenter::default();
        let err = segment_reader(&segmenter, Mode::Index, &[0x61, 0xFF][..], "bad.txt").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::SegmentationError(msg)) if msg.starts_with("bad.txt")
        ));
    }

    #[test]
    fn test_invalid_buffer_is_a_config_error() {
        let mut args = args();
        args.buffer = Some(0);
        let config = args.resolve_config().unwrap();
        assert!(build_segmenter(&config).is_err());
    }
}
