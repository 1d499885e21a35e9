//! `osc-text` command-line entry point

use clap::Parser;
use osc_text_cli::commands::Commands;
use osc_text_cli::CliResult;

/// Streaming sentence splitting and annotation reordering for TTS front ends
#[derive(Debug, Parser)]
#[command(name = "osc-text", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
