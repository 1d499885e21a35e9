//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::config::CliConfig;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let template = Self::generate_template()?;

        let Some(path) = &self.output else {
            print!("{template}");
            return Ok(());
        };

        if path.exists() && !self.force {
            anyhow::bail!(
                "{} already exists; pass --force to overwrite",
                path.display()
            );
        }
        std::fs::write(path, template)
            .with_context(|| format!("Failed to write to {}", path.display()))?;

        println!("✓ Configuration written to {}", path.display());
        println!();
        println!("Next steps:");
        println!("1. Edit the thresholds and boundary sets");
        println!("2. Validate your configuration:");
        println!("   osc-text validate -c {}", path.display());
        println!("3. Use it for splitting:");
        println!("   osc-text split -i input.txt -c {}", path.display());

        Ok(())
    }

    /// Default configuration rendered as commented TOML
    pub fn generate_template() -> Result<String> {
        let body = CliConfig::default().to_toml_string()?;
        Ok(format!(
            "# osc-text configuration\n\
             #\n\
             # [sentencizer] lengths count characters. Boundary entries must be\n\
             # single characters. min_length_policy is \"exempt_level1\" or \"all_levels\".\n\
             # [reorder] table is one of: zh-tn, zh-itn, en-tn.\n\n\
             {body}"
        ))
    }
}
