//! Streaming sentence segmentation for incrementally arriving text
//!
//! [`TextStreamSentencizer`] buffers characters until a sentence boundary is
//! confirmed. Boundaries come in three levels: sentence-final punctuation
//! splits at once, while clause separators and colons are only used once the
//! pending text has grown past a threshold. See the [`splitter`] docs for the
//! exact policy.

mod boundary;
mod config;
pub mod splitter;
mod stream;

pub use boundary::BoundarySet;
pub use config::{defaults, MinLengthPolicy, SentencizerConfig, SentencizerConfigBuilder};
pub use splitter::TextStreamSentencizer;
pub use stream::{ReaderSentences, DEFAULT_CHUNK_SIZE};
