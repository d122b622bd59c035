//! CLI command implementations

use anyhow::Result;
use clap::{Subcommand, ValueEnum};

pub mod analyze;
pub mod generate_config;

use analyze::OutputFormat;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Count paragraphs, lines, words and characters with both analyzers
    Analyze(analyze::AnalyzeArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Analyze(args) => args.execute(),
            Commands::List { subcommand } => {
                println!("{}", subcommand.render());
                Ok(())
            }
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Text printed for the list subcommand
    pub fn render(&self) -> String {
        match self {
            ListCommands::Formats => {
                let mut out = String::from("Available output formats:");
                for format in OutputFormat::value_variants() {
                    out.push_str(&format!("\n  {:<10} {}", format.name(), format.description()));
                }
                out
            }
        }
    }
}
