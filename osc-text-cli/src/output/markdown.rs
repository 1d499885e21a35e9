//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs sentences as a markdown list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    sentence_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sentence_count: 0,
        }
    }
}

impl<W: Write + Send> OutputFormatter for MarkdownFormatter<W> {
    fn format_sentence(&mut self, sentence: &str, _offset: usize) -> Result<()> {
        self.sentence_count += 1;
        writeln!(self.writer, "{}. {}", self.sentence_count, sentence.trim())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total sentences: {}*", self.sentence_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_list_with_count() {
        let mut out = Vec::new();
        {
            let mut formatter = MarkdownFormatter::new(&mut out);
            formatter.format_sentence("你好！", 0).unwrap();
            formatter.format_sentence("\n再见。", 3).unwrap();
            formatter.finish().unwrap();
        }
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1. 你好！\n2. 再见。\n\n---\n*Total sentences: 2*\n"
        );
    }

    #[test]
    fn test_empty_input_reports_zero() {
        let mut out = Vec::new();
        MarkdownFormatter::new(&mut out).finish().unwrap();
        assert_eq!(out, b"\n---\n*Total sentences: 0*\n");
    }
}
