//! Annotation reorder engine
//!
//! A finite-state tagger emits annotations such as
//! `date { day: "1" year: "2023" month: "5" }`; the matching verbalizer
//! expects each type's fields in a fixed order. This module parses the
//! tagger output into [`Token`]s and writes them back in the order given by
//! an [`OrderTable`].

mod order;
mod parser;
mod scanner;
mod token;

pub use order::OrderTable;
pub use parser::{reorder, TokenParser};
pub use scanner::Scanner;
pub use token::{Token, PRESERVE_ORDER};
