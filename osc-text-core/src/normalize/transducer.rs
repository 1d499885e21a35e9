//! Collaborator seams for the tagger and verbalizer
//!
//! The finite-state transducers themselves live outside this crate. The
//! pipeline only needs something that maps a string to a string and a way to
//! obtain one from a resource path.

use std::path::Path;
use std::sync::Arc;

use crate::error::TransducerError;

/// A text-to-text transducer (tagger or verbalizer)
pub trait Transducer: Send + Sync {
    /// Transform `input`
    fn transduce(&self, input: &str) -> Result<String, TransducerError>;
}

impl<F> Transducer for F
where
    F: Fn(&str) -> Result<String, TransducerError> + Send + Sync,
{
    fn transduce(&self, input: &str) -> Result<String, TransducerError> {
        self(input)
    }
}

/// Shared transducer handle
pub type SharedTransducer = Arc<dyn Transducer>;

/// Builds transducers from compiled resource files
pub trait TransducerLoader {
    /// Load the transducer stored at `path`
    fn load(&self, path: &Path) -> Result<SharedTransducer, TransducerError>;
}

impl<F> TransducerLoader for F
where
    F: Fn(&Path) -> Result<SharedTransducer, TransducerError>,
{
    fn load(&self, path: &Path) -> Result<SharedTransducer, TransducerError> {
        self(path)
    }
}

/// Loader adapter that reports absent or non-file resources before
/// delegating to the wrapped loader
#[derive(Debug, Clone)]
pub struct CheckedLoader<L> {
    inner: L,
}

impl<L: TransducerLoader> CheckedLoader<L> {
    /// Wrap `inner`
    pub fn new(inner: L) -> Self {
        Self { inner }
    }
}

impl<L: TransducerLoader> TransducerLoader for CheckedLoader<L> {
    fn load(&self, path: &Path) -> Result<SharedTransducer, TransducerError> {
        if !path.exists() {
            return Err(TransducerError::MissingResource(path.to_path_buf()));
        }
        if !path.is_file() {
            return Err(TransducerError::MalformedResource {
                path: path.to_path_buf(),
                reason: "not a regular file".to_string(),
            });
        }
        tracing::debug!("loading transducer from {}", path.display());
        self.inner.load(path)
    }
}
