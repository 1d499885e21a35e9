//! Reorder command implementation

use anyhow::{Context, Result};
use clap::Args;
use osc_text_core::{OrderTable, ParseError, TokenParser};
use rayon::prelude::*;
use std::io::Write;
use std::path::PathBuf;

use super::{init_logging, open_output};
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_inputs, InputSource};
use crate::progress::ProgressReporter;

/// Arguments for the reorder command
#[derive(Debug, Args)]
pub struct ReorderArgs {
    /// Annotated input files or patterns (supports glob); stdin when omitted or `-`
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Order table code: zh-tn, zh-itn or en-tn (default: from config, else zh-tn)
    #[arg(short, long, value_name = "CODE")]
    pub table: Option<String>,

    /// Pass malformed lines through unchanged instead of failing
    #[arg(long)]
    pub skip_invalid: bool,

    /// Process input files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads for --parallel (default: CPU count)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "OSC_TEXT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ReorderArgs {
    /// Execute the reorder command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting annotation reordering");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let table = match &self.table {
            Some(code) => code
                .parse::<OrderTable>()
                .map_err(|e| CliError::ConfigError(e.to_string()))?,
            None => config.reorder.order_table()?,
        };
        let skip_invalid = self.skip_invalid || config.reorder.skip_invalid;
        let parser = TokenParser::new(table);

        let inputs = resolve_inputs(&self.input)?;
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(inputs.len() as u64);

        let outputs = if self.parallel && inputs.len() > 1 {
            let threads = match self.threads.unwrap_or(config.reorder.worker_threads) {
                0 => num_cpus::get(),
                n => n,
            };
            log::info!("Reordering {} inputs on {} threads", inputs.len(), threads);

            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to build thread pool")?;
            pool.install(|| {
                inputs
                    .par_iter()
                    .map(|input| {
                        let lines = reorder_source(input, &parser, skip_invalid);
                        progress.file_completed(&input.name());
                        lines
                    })
                    .collect::<Vec<_>>()
            })
        } else {
            inputs
                .iter()
                .map(|input| {
                    let lines = reorder_source(input, &parser, skip_invalid);
                    progress.file_completed(&input.name());
                    lines
                })
                .collect()
        };
        progress.finish();

        let mut writer = open_output(self.output.as_deref())?;
        for lines in outputs {
            for line in lines? {
                writeln!(writer, "{line}")?;
            }
        }
        writer.flush()?;

        log::info!("Reordered {} inputs with table {}", inputs.len(), table);
        Ok(())
    }
}

/// Reorder every line of one input; blank lines pass through
pub fn reorder_source(
    input: &InputSource,
    parser: &TokenParser,
    skip_invalid: bool,
) -> Result<Vec<String>> {
    let name = input.name();
    let lines = input.read_lines()?;
    let results = parser.reorder_batch(&lines);

    let mut output = Vec::with_capacity(lines.len());
    for (number, (line, result)) in lines.iter().zip(results).enumerate() {
        match result {
            Ok(reordered) => output.push(reordered),
            Err(ParseError::EmptyInput) => output.push(String::new()),
            Err(e) if skip_invalid => {
                log::warn!("{}:{}: {}; line kept as is", name, number + 1, e);
                output.push(line.clone());
            }
            Err(e) => {
                return Err(CliError::InvalidAnnotation {
                    source_name: name,
                    line: number + 1,
                    message: e.to_string(),
                }
                .into())
            }
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_input(dir: &TempDir, content: &str) -> InputSource {
        let path = dir.path().join("tagged.txt");
        fs::write(&path, content).unwrap();
        InputSource::File(path)
    }

    #[test]
    fn test_reorder_source_per_line() {
        let dir = TempDir::new().unwrap();
        let input = write_input(
            &dir,
            "date { day: \"1\" month: \"5\" year: \"2023\" }\n\nchar { value: \"好\" }\n",
        );
        let lines =
            reorder_source(&input, &TokenParser::new(OrderTable::ZhNormalization), false).unwrap();
        assert_eq!(
            lines,
            vec![
                r#"date { year: "2023" month: "5" day: "1" }"#,
                "",
                r#"char { value: "好" }"#,
            ]
        );
    }

    #[test]
    fn test_invalid_line_reports_position() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "char { value: \"a\" }\ndate { year: \"2023\"\n");
        let err = reorder_source(&input, &TokenParser::default(), false).unwrap_err();

        match err.downcast_ref::<CliError>() {
            Some(CliError::InvalidAnnotation { line, .. }) => assert_eq!(*line, 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_skip_invalid_keeps_line() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "oops\nmoney { currency: \"元\" value: \"5\" }\n");
        let lines = reorder_source(&input, &TokenParser::default(), true).unwrap();
        assert_eq!(lines, vec!["oops", r#"money { value: "5" currency: "元" }"#]);
    }
}
