//! File reading utilities

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

/// File reader helpers
pub struct FileReader;

impl FileReader {
    /// Open a file for buffered streaming
    pub fn open(path: &Path) -> Result<BufReader<File>> {
        let file = File::open(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        Ok(BufReader::new(file))
    }

    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }
}

/// Where a command reads its text from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl InputSource {
    /// Name used in messages and progress output
    pub fn name(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }

    /// Open the source as a byte stream
    pub fn open(&self) -> Result<Box<dyn Read + Send>> {
        match self {
            InputSource::Stdin => Ok(Box::new(io::stdin())),
            InputSource::File(path) => Ok(Box::new(FileReader::open(path)?)),
        }
    }

    /// Read the whole source as lines
    pub fn read_lines(&self) -> Result<Vec<String>> {
        match self {
            InputSource::Stdin => io::stdin()
                .lock()
                .lines()
                .collect::<io::Result<_>>()
                .context("Failed to read stdin"),
            InputSource::File(path) => Ok(FileReader::read_text(path)?
                .lines()
                .map(str::to_string)
                .collect()),
        }
    }
}
