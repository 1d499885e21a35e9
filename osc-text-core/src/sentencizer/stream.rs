//! Sentence iteration over byte readers

use std::collections::VecDeque;
use std::io::{self, Read};

use super::splitter::TextStreamSentencizer;

/// Default read size in bytes
pub const DEFAULT_CHUNK_SIZE: usize = 8 * 1024;

/// Iterator of sentences read incrementally from a reader.
///
/// Bytes are decoded as UTF-8; a multi-byte sequence cut by a read boundary
/// is carried over to the next read. Pending text is flushed at end of
/// input. Invalid UTF-8 yields the sentences decoded before it, then one
/// `InvalidData` error, then ends the iteration.
pub struct ReaderSentences<R> {
    reader: R,
    sentencizer: TextStreamSentencizer,
    chunk: Vec<u8>,
    carry: Vec<u8>,
    ready: VecDeque<String>,
    error: Option<io::Error>,
    finished: bool,
}

impl<R: Read> ReaderSentences<R> {
    /// Wrap `reader`, feeding `sentencizer` in reads of `chunk_size` bytes
    pub fn new(reader: R, sentencizer: TextStreamSentencizer, chunk_size: usize) -> Self {
        Self {
            reader,
            sentencizer,
            chunk: vec![0; chunk_size.max(1)],
            carry: Vec::new(),
            ready: VecDeque::new(),
            error: None,
            finished: false,
        }
    }

    /// Give back the sentencizer, e.g. to inspect pending text after an error
    pub fn into_sentencizer(self) -> TextStreamSentencizer {
        self.sentencizer
    }

    /// Read one chunk and queue the sentences it completes
    fn fill(&mut self) {
        let read = loop {
            match self.reader.read(&mut self.chunk) {
                Ok(n) => break n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.fail(e);
                    return;
                }
            }
        };

        if read == 0 {
            if self.carry.is_empty() {
                self.finished = true;
                self.ready.extend(self.sentencizer.flush());
            } else {
                self.fail(io::Error::new(
                    io::ErrorKind::InvalidData,
                    "stream ended inside a UTF-8 sequence",
                ));
            }
            return;
        }

        self.carry.extend_from_slice(&self.chunk[..read]);
        let (valid, invalid) = match std::str::from_utf8(&self.carry) {
            Ok(_) => (self.carry.len(), None),
            Err(e) => (e.valid_up_to(), e.error_len().map(|_| e)),
        };

        // the prefix was just validated, so this never substitutes
        let text = String::from_utf8_lossy(&self.carry[..valid]);
        let sentences = self.sentencizer.push(&text);
        drop(text);
        self.carry.drain(..valid);
        self.ready.extend(sentences);

        if let Some(e) = invalid {
            self.fail(io::Error::new(io::ErrorKind::InvalidData, e));
        }
    }

    fn fail(&mut self, error: io::Error) {
        self.finished = true;
        self.error = Some(error);
    }
}

impl<R: Read> Iterator for ReaderSentences<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(sentence) = self.ready.pop_front() {
                return Some(Ok(sentence));
            }
            if let Some(error) = self.error.take() {
                return Some(Err(error));
            }
            if self.finished {
                return None;
            }
            self.fill();
        }
    }
}

impl TextStreamSentencizer {
    /// Consume the sentencizer into an iterator over `reader`
    pub fn sentences_from_reader<R: Read>(self, reader: R) -> ReaderSentences<R> {
        ReaderSentences::new(reader, self, DEFAULT_CHUNK_SIZE)
    }
}
