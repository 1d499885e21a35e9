//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::config::CliConfig;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match CliConfig::load(&self.config) {
            Ok(config) => {
                let sentencizer = &config.sentencizer;
                println!("✓ Configuration is valid!");
                println!(
                    "  Thresholds: min {} / level 2 {} / level 3 {}",
                    sentencizer.min_sentence_length,
                    sentencizer.use_level2_threshold,
                    sentencizer.use_level3_threshold
                );
                println!(
                    "  Boundaries: {} | {} | {}",
                    sentencizer.level1_ends.concat(),
                    sentencizer.level2_ends.concat(),
                    sentencizer.level3_ends.concat()
                );
                println!("  Reorder table: {}", config.reorder.table);
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {:#}", e))
            }
        }
    }
}
