//! Layered error types
//!
//! Syntax errors from the annotation scanner, validation errors from the
//! configuration builders and failures reported by external transducers are
//! kept apart so callers can tell "bad input" from "bad setup" from
//! "collaborator broke".

use std::path::PathBuf;
use thiserror::Error;

/// Annotation syntax errors. Positions are character indices into the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The reorder entry point was handed an empty string
    #[error("annotated input must not be empty")]
    EmptyInput,

    /// Input ended while a token was still open
    #[error("unexpected end of input at position {position} while reading {context}")]
    UnexpectedEnd {
        /// Character position of the end-of-stream
        position: usize,
        /// What the scanner was in the middle of
        context: &'static str,
    },

    /// A quoted value was never closed
    #[error("unterminated quoted value starting at position {start}")]
    UnterminatedValue {
        /// Character position of the opening quote
        start: usize,
    },

    /// A type or field name was required but none was present
    #[error("expected identifier at position {position}, found {found:?}")]
    ExpectedIdentifier {
        /// Character position of the offending character
        position: usize,
        /// The character found instead
        found: char,
    },

    /// A structural character (`{`, `}`, `:`, `"`) was missing
    #[error("expected {expected:?} at position {position}, found {found:?}")]
    UnexpectedChar {
        /// Character position of the offending character
        position: usize,
        /// The character the grammar requires here
        expected: char,
        /// The character found instead
        found: char,
    },
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A boundary set entry is not exactly one character
    #[error("level {level} boundary entry {entry:?} must be exactly one character")]
    InvalidBoundary {
        /// Boundary tier (1, 2 or 3)
        level: u8,
        /// The rejected entry
        entry: String,
    },

    /// Locale/direction/variant combination without a transducer set
    #[error("unsupported normalizer configuration: {0}")]
    Unsupported(String),

    /// Unknown locale, direction or table code
    #[error("unknown {kind} code: {code}")]
    UnknownCode {
        /// What kind of code was being parsed
        kind: &'static str,
        /// The rejected code
        code: String,
    },

    /// Malformed TOML configuration
    #[error("invalid configuration file: {0}")]
    Toml(String),
}

/// Pipeline stage a transducer failure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Tagging (text → annotated text)
    Tag,
    /// Verbalizing (annotated text → text)
    Verbalize,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Tag => write!(f, "tagger"),
            Stage::Verbalize => write!(f, "verbalizer"),
        }
    }
}

/// Failures reported by external transducer collaborators
#[derive(Debug, Error)]
pub enum TransducerError {
    /// Resource file does not exist
    #[error("transducer resource not found: {}", .0.display())]
    MissingResource(PathBuf),

    /// Resource exists but could not be loaded
    #[error("malformed transducer resource {}: {reason}", .path.display())]
    MalformedResource {
        /// The resource path
        path: PathBuf,
        /// Loader-specific explanation
        reason: String,
    },

    /// The transducer rejected its input
    #[error("transduction failed: {0}")]
    Failed(String),

    /// I/O error while loading or running the transducer
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Umbrella error for the crate
#[derive(Debug, Error)]
pub enum Error {
    /// Annotation syntax error
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Invalid configuration
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// External collaborator failure
    #[error("{stage} failed: {source}")]
    Transducer {
        /// Which stage failed
        stage: Stage,
        /// The collaborator's error
        #[source]
        source: TransducerError,
    },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Toml(err.to_string())
    }
}

/// Result type for crate operations
pub type Result<T> = std::result::Result<T, Error>;
