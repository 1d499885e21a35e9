//! Text-normalization support for speech front ends
//!
//! Two independent components:
//!
//! - [`annotation`]: parses the annotated output of a finite-state tagger
//!   (`date { day: "1" year: "2023" month: "5" }`) and re-emits every token
//!   with its fields in the canonical order its verbalizer expects.
//! - [`sentencizer`]: segments an incrementally arriving character stream
//!   into sentences using three tiers of boundary characters.
//!
//! [`normalize`] wires the reorder engine between an external tagger and
//! verbalizer, and [`text`] carries small character-level helpers.
//!
//! # Example
//!
//! ```rust
//! use osc_text_core::{reorder, OrderTable, TextStreamSentencizer};
//!
//! let out = reorder(r#"date { day: "1" year: "2023" month: "5" }"#, OrderTable::ZhNormalization)
//!     .unwrap();
//! assert_eq!(out, r#"date { year: "2023" month: "5" day: "1" }"#);
//!
//! let mut sentencizer = TextStreamSentencizer::new();
//! let mut sentences = sentencizer.push("今天天气很好！我们去公园");
//! sentences.extend(sentencizer.flush());
//! assert_eq!(sentences, vec!["今天天气很好！", "我们去公园"]);
//! ```

pub mod annotation;
pub mod error;
pub mod normalize;
pub mod sentencizer;
pub mod text;

pub use annotation::{reorder, OrderTable, Token, TokenParser};
pub use error::{ConfigError, Error, ParseError, Result, Stage, TransducerError};
pub use normalize::{
    Direction, Locale, NormalizerConfig, TextNormalizer, Transducer, TransducerLoader,
};
pub use sentencizer::{MinLengthPolicy, ReaderSentences, SentencizerConfig, TextStreamSentencizer};
