//! osc-text CLI library
//!
//! Command-line front end for the streaming sentencizer and the annotation
//! reorder engine in `osc-text-core`.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
