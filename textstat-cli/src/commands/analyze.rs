//! Analyze command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::resolve_inputs;
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use textstat_core::{Config, Input, TextAnalyzer};

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Input files or patterns (supports glob, `-` reads stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Lines per chunk for the chunked analyzer [default: 10]
    #[arg(short, long, value_name = "LINES", env = "TEXTSTAT_CHUNK_SIZE")]
    pub chunk_size: Option<usize>,

    /// Number of worker threads (default: one per CPU)
    #[arg(short, long, value_name = "COUNT")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned table per document
    Text,
    /// JSON array with one report per document
    Json,
    /// Markdown table per document
    Markdown,
}

impl OutputFormat {
    /// One-line description used by `list formats`
    pub fn description(self) -> &'static str {
        match self {
            OutputFormat::Text => "Aligned table comparing both analyzers per document",
            OutputFormat::Json => "JSON array with records and timings per document",
            OutputFormat::Markdown => "Markdown table per document",
        }
    }

    /// Name as accepted on the command line
    pub fn name(self) -> String {
        self.to_possible_value()
            .map(|value| value.get_name().to_string())
            .unwrap_or_default()
    }

    fn parse(name: &str) -> Result<Self> {
        <Self as ValueEnum>::from_str(name, true).map_err(|_| {
            anyhow::Error::from(CliError::ConfigError(format!(
                "unknown output format '{name}'"
            )))
        })
    }
}

/// Settings after merging the config file with command-line flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSettings {
    pub chunk_size: usize,
    pub threads: Option<usize>,
    pub format: OutputFormat,
    pub pretty_json: bool,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting text analysis");
        log::debug!("Arguments: {:?}", self);

        let settings = self.resolve_settings()?;
        log::debug!("Resolved settings: {:?}", settings);

        let config = Config::builder()
            .chunk_size(settings.chunk_size)
            .threads(settings.threads)
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        let analyzer = TextAnalyzer::with_config(config)?;

        let sources = resolve_inputs(&self.input)?;
        log::info!("Analyzing {} document(s)", sources.len());

        let mut formatter = self.create_formatter(&settings)?;
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(sources.len() as u64);

        for source in &sources {
            let name = source.to_string();
            let text = source.read_text()?;

            let comparison = analyzer
                .compare(Input::from_text(text))
                .map_err(|e| CliError::AnalysisError(format!("{name}: {e}")))?;
            log::info!(
                "{name}: sequential {}us, concurrent {}us, paragraph divergence {}",
                comparison.sequential.elapsed_micros(),
                comparison.concurrent.elapsed_micros(),
                comparison.paragraph_divergence()
            );

            formatter.format_comparison(&name, &comparison)?;
            progress.file_completed(&name);
        }

        progress.finish();
        formatter.finish()?;

        Ok(())
    }

    /// Merge the optional config file with command-line flags
    pub fn resolve_settings(&self) -> Result<ResolvedSettings> {
        let file_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::parse(&file_config.output.format)?,
        };

        Ok(ResolvedSettings {
            chunk_size: self.chunk_size.unwrap_or(file_config.analysis.chunk_size),
            threads: self.threads.or_else(|| file_config.analysis.thread_limit()),
            format,
            pretty_json: file_config.output.pretty_json,
        })
    }

    fn create_formatter(&self, settings: &ResolvedSettings) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => {
                let file = File::create(path).with_context(|| {
                    format!("Failed to create output file: {}", path.display())
                })?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };

        let formatter: Box<dyn OutputFormatter> = match settings.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, settings.pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };
        Ok(formatter)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when run from tests
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}
