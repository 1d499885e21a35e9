//! Split command implementation

use anyhow::{Context, Result};
use clap::Args;
use osc_text_core::sentencizer::ReaderSentences;
use osc_text_core::{MinLengthPolicy, SentencizerConfig, TextStreamSentencizer};
use std::path::PathBuf;

use super::{init_logging, open_output};
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_inputs, InputSource};
use crate::output::{create_formatter, OutputFormat, OutputFormatter};
use crate::progress::ProgressReporter;

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Input files or patterns (supports glob); stdin when omitted or `-`
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "OSC_TEXT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Minimum sentence length in characters
    #[arg(long, value_name = "CHARS")]
    pub min_length: Option<usize>,

    /// Pending length before clause separators are used
    #[arg(long, value_name = "CHARS")]
    pub level2_threshold: Option<usize>,

    /// Pending length before colons are used
    #[arg(long, value_name = "CHARS")]
    pub level3_threshold: Option<usize>,

    /// Sentence-final boundary characters, given as one string
    #[arg(long, value_name = "CHARS")]
    pub level1_ends: Option<String>,

    /// Clause separator characters, given as one string
    #[arg(long, value_name = "CHARS")]
    pub level2_ends: Option<String>,

    /// Colon-like boundary characters, given as one string
    #[arg(long, value_name = "CHARS")]
    pub level3_ends: Option<String>,

    /// Which boundary levels the minimum length applies to
    #[arg(long, value_enum)]
    pub min_length_policy: Option<PolicyArg>,

    /// Strip emojis before splitting
    #[arg(long)]
    pub remove_emoji: bool,

    /// Read size in KB
    #[arg(long, value_name = "KB")]
    pub chunk_kb: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Command-line spelling of [`MinLengthPolicy`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PolicyArg {
    /// Sentence-final punctuation always splits
    ExemptLevel1,
    /// The minimum length gates every level
    AllLevels,
}

impl From<PolicyArg> for MinLengthPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::ExemptLevel1 => MinLengthPolicy::ExemptLevel1,
            PolicyArg::AllLevels => MinLengthPolicy::AllLevels,
        }
    }
}

fn char_entries(chars: &str) -> Vec<String> {
    chars.chars().map(String::from).collect()
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting sentence splitting");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let sentencizer = TextStreamSentencizer::with_config(self.sentencizer_config(&config))
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_name(&config.output.default_format)
                .unwrap_or(OutputFormat::Text),
        };
        let chunk_size = self.chunk_kb.unwrap_or(config.output.chunk_size_kb).max(1) * 1024;

        let inputs = resolve_inputs(&self.input)?;
        let writer = open_output(self.output.as_deref())?;
        let mut formatter = create_formatter(format, writer, config.output.pretty_json);

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(inputs.len() as u64);

        let mut total = 0;
        for input in &inputs {
            total += split_source(input, sentencizer.clone(), chunk_size, formatter.as_mut())?;
            progress.file_completed(&input.name());
        }
        formatter.finish()?;
        progress.finish();

        log::info!("Emitted {} sentences from {} inputs", total, inputs.len());
        Ok(())
    }

    /// Merge command-line overrides into the configured sentencizer settings
    pub fn sentencizer_config(&self, config: &CliConfig) -> SentencizerConfig {
        let mut settings = config.sentencizer.clone();

        if let Some(length) = self.min_length {
            settings.min_sentence_length = length;
        }
        if let Some(threshold) = self.level2_threshold {
            settings.use_level2_threshold = threshold;
        }
        if let Some(threshold) = self.level3_threshold {
            settings.use_level3_threshold = threshold;
        }
        if let Some(chars) = &self.level1_ends {
            settings.level1_ends = char_entries(chars);
        }
        if let Some(chars) = &self.level2_ends {
            settings.level2_ends = char_entries(chars);
        }
        if let Some(chars) = &self.level3_ends {
            settings.level3_ends = char_entries(chars);
        }
        if let Some(policy) = self.min_length_policy {
            settings.min_length_policy = policy.into();
        }
        if self.remove_emoji {
            settings.remove_emoji = true;
        }

        settings
    }
}

/// Stream one input through a fresh sentencizer; returns the sentence count
fn split_source(
    input: &InputSource,
    sentencizer: TextStreamSentencizer,
    chunk_size: usize,
    formatter: &mut dyn OutputFormatter,
) -> Result<usize> {
    let name = input.name();
    log::debug!("Splitting {name}");

    let mut offset = 0;
    let mut count = 0;
    for sentence in ReaderSentences::new(input.open()?, sentencizer, chunk_size) {
        let sentence = sentence.with_context(|| format!("Failed to read {name}"))?;
        let length = sentence.chars().count();
        // whitespace between sentences still advances the offset
        if !sentence.trim().is_empty() {
            formatter.format_sentence(&sentence, offset)?;
            count += 1;
        }
        offset += length;
    }

    log::debug!("{name}: {count} sentences");
    Ok(count)
}
