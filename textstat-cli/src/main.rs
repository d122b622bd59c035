//! textstat command-line entry point

use clap::Parser;
use textstat_cli::commands::Commands;
use textstat_cli::CliResult;

/// Document statistics with sequential and chunked parallel analyzers
#[derive(Debug, Parser)]
#[command(name = "textstat", version, long_about = None)]
#[command(arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
