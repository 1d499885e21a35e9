//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs sentences as JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    sentences: Vec<SentenceData>,
    pretty: bool,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SentenceData {
    /// The sentence text
    pub text: String,
    /// Starting char offset in the input stream
    pub offset: usize,
    /// Length of the sentence in chars
    pub length: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sentences: Vec::new(),
            pretty: true,
        }
    }

    /// Toggle pretty printing
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl<W: Write + Send> OutputFormatter for JsonFormatter<W> {
    fn format_sentence(&mut self, sentence: &str, offset: usize) -> Result<()> {
        // offset and length describe the trimmed text
        let text = sentence.trim();
        let leading = sentence.len() - sentence.trim_start().len();
        self.sentences.push(SentenceData {
            text: text.to_string(),
            offset: offset + sentence[..leading].chars().count(),
            length: text.chars().count(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.sentences)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.sentences)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
