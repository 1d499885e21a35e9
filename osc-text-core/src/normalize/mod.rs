//! Text normalization pipeline
//!
//! `tag → reorder → verbalize`. Tagging and verbalizing are performed by
//! external transducers handed in through [`Transducer`] or loaded through a
//! [`TransducerLoader`]; this module selects their resources and the order
//! table, and sequences the three calls.

mod config;
mod language;
mod pipeline;
mod transducer;

pub use config::{defaults, NormalizerConfig, NormalizerConfigBuilder};
pub use language::{Direction, Locale};
pub use pipeline::TextNormalizer;
pub use transducer::{CheckedLoader, SharedTransducer, Transducer, TransducerLoader};
