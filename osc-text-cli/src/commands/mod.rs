//! CLI command implementations

use anyhow::{Context, Result};
use clap::Subcommand;
use osc_text_core::OrderTable;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::output::OutputFormat;

pub mod generate_config;
pub mod reorder;
pub mod split;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split streaming text into sentences
    Split(split::SplitArgs),

    /// Reorder annotated tagger output into canonical field order
    Reorder(reorder::ReorderArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a default configuration file
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Validate a configuration file
    Validate(validate::ValidateArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List canonical order tables
    Tables,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Split(args) => args.execute(),
            Commands::Reorder(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute(&mut io::stdout().lock())?;
                Ok(())
            }
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Print the listing to `out`
    pub fn execute(&self, out: &mut dyn Write) -> io::Result<()> {
        match self {
            ListCommands::Tables => {
                writeln!(out, "Order tables:")?;
                for table in OrderTable::ALL {
                    writeln!(out, "  {:<8} {}", table.code(), table.description())?;
                    for (type_name, fields) in table.entries() {
                        writeln!(out, "    {:<10} {}", type_name, fields.join(" "))?;
                    }
                }
            }
            ListCommands::Formats => {
                writeln!(out, "Output formats:")?;
                for format in OutputFormat::ALL {
                    writeln!(out, "  {:<9} {}", format.name(), format.description())?;
                }
            }
        }
        Ok(())
    }
}

/// Initialize logging based on verbosity level
pub fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let log_level = if quiet { "error" } else { log_level };

    // a second initialization in the same process is a no-op
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}

/// Open the output destination; stdout when `path` is `None`
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write + Send>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}
