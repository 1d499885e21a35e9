//! Tag → reorder → verbalize orchestration

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use super::config::NormalizerConfig;
use super::transducer::{SharedTransducer, Transducer, TransducerLoader};
use crate::annotation::TokenParser;
use crate::error::{Error, Result, Stage};

/// Text normalizer over an injected tagger/verbalizer pair.
///
/// The reorder table follows the configured locale and direction. The
/// normalizer is immutable after construction and can be shared across
/// threads.
#[derive(Clone)]
pub struct TextNormalizer {
    config: NormalizerConfig,
    tagger: SharedTransducer,
    parser: TokenParser,
    verbalizer: SharedTransducer,
}

impl fmt::Debug for TextNormalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextNormalizer")
            .field("config", &self.config)
            .field("table", &self.parser.table())
            .finish_non_exhaustive()
    }
}

impl TextNormalizer {
    /// Build a normalizer from already constructed collaborators
    pub fn new<T, V>(config: NormalizerConfig, tagger: T, verbalizer: V) -> Result<Self>
    where
        T: Transducer + 'static,
        V: Transducer + 'static,
    {
        Self::with_shared(config, Arc::new(tagger), Arc::new(verbalizer))
    }

    /// Build a normalizer from shared collaborator handles
    pub fn with_shared(
        config: NormalizerConfig,
        tagger: SharedTransducer,
        verbalizer: SharedTransducer,
    ) -> Result<Self> {
        config.validate()?;
        let parser = TokenParser::new(config.order_table());
        Ok(Self {
            config,
            tagger,
            parser,
            verbalizer,
        })
    }

    /// Load the tagger and verbalizer selected by `config` through `loader`
    pub fn from_config<L: TransducerLoader>(config: NormalizerConfig, loader: &L) -> Result<Self> {
        config.validate()?;

        let tagger = loader
            .load(&config.tagger_path())
            .map_err(|source| Error::Transducer {
                stage: Stage::Tag,
                source,
            })?;
        let verbalizer = loader
            .load(&config.verbalizer_path())
            .map_err(|source| Error::Transducer {
                stage: Stage::Verbalize,
                source,
            })?;

        debug!(
            locale = config.locale().code(),
            direction = config.direction().code(),
            "normalizer ready"
        );
        Self::with_shared(config, tagger, verbalizer)
    }

    /// The active configuration
    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Run `text` through tagger, reorder engine and verbalizer
    pub fn normalize(&self, text: &str) -> Result<String> {
        if text.is_empty() {
            return Ok(String::new());
        }

        let tagged = self.run(Stage::Tag, &*self.tagger, text)?;
        if tagged.trim_matches(' ').is_empty() {
            debug!("tagger produced no tokens");
            return Ok(String::new());
        }
        trace!(%tagged, "tagged");

        let reordered = self.parser.reorder(&tagged)?;
        trace!(%reordered, "reordered");

        self.run(Stage::Verbalize, &*self.verbalizer, &reordered)
    }

    fn run(&self, stage: Stage, transducer: &dyn Transducer, input: &str) -> Result<String> {
        transducer
            .transduce(input)
            .map_err(|source| Error::Transducer { stage, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, ParseError, TransducerError};
    use crate::normalize::Locale;
    use std::path::{Path, PathBuf};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Tagger that annotates the one input it knows
    fn date_tagger(input: &str) -> std::result::Result<String, TransducerError> {
        match input {
            "2023年5月1日" => Ok(r#"date { day: "1" year: "2023" month: "5" }"#.to_string()),
            other => Ok(format!(r#"char {{ value: "{other}" }}"#)),
        }
    }

    /// Verbalizer that echoes its input so the reorder result is visible
    fn echo(input: &str) -> std::result::Result<String, TransducerError> {
        Ok(format!("[{input}]"))
    }

    #[test]
    fn test_normalize_reorders_between_stages() {
        let normalizer =
            TextNormalizer::new(NormalizerConfig::default(), date_tagger, echo).unwrap();
        let out = normalizer.normalize("2023年5月1日").unwrap();
        assert_eq!(out, r#"[date { year: "2023" month: "5" day: "1" }]"#);
    }

    #[test]
    fn test_table_follows_direction() {
        let config = NormalizerConfig::builder().direction("itn").unwrap().build().unwrap();
        let tagger = |_: &str| -> std::result::Result<String, TransducerError> {
            Ok(r#"money { value: "5" currency: "元" }"#.to_string())
        };
        let normalizer = TextNormalizer::new(config, tagger, echo).unwrap();
        assert_eq!(
            normalizer.normalize("五元").unwrap(),
            r#"[money { currency: "元" value: "5" }]"#
        );
    }

    #[test]
    fn test_empty_text_skips_collaborators() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counted = Arc::clone(&calls);
        let tagger = move |s: &str| -> std::result::Result<String, TransducerError> {
            counted.fetch_add(1, Ordering::SeqCst);
            Ok(s.to_string())
        };
        let normalizer = TextNormalizer::new(NormalizerConfig::default(), tagger, echo).unwrap();
        assert_eq!(normalizer.normalize("").unwrap(), "");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_stage_failures_are_tagged() {
        let failing = |_: &str| -> std::result::Result<String, TransducerError> {
            Err(TransducerError::Failed("bad arc".into()))
        };

        let normalizer = TextNormalizer::new(NormalizerConfig::default(), failing, echo).unwrap();
        let err = normalizer.normalize("x").unwrap_err();
        assert!(matches!(err, Error::Transducer { stage: Stage::Tag, .. }));

        let normalizer =
            TextNormalizer::new(NormalizerConfig::default(), date_tagger, failing).unwrap();
        let err = normalizer.normalize("x").unwrap_err();
        assert!(matches!(err, Error::Transducer { stage: Stage::Verbalize, .. }));
    }

    #[test]
    fn test_malformed_tagger_output_is_parse_error() {
        let broken = |_: &str| -> std::result::Result<String, TransducerError> {
            Ok(r#"date { year: "2023""#.to_string())
        };
        let normalizer = TextNormalizer::new(NormalizerConfig::default(), broken, echo).unwrap();
        let err = normalizer.normalize("x").unwrap_err();
        assert!(matches!(err, Error::Parse(ParseError::UnexpectedEnd { .. })));
    }

    #[test]
    fn test_from_config_loads_selected_resources() {
        let requested = Mutex::new(Vec::<PathBuf>::new());
        let loader = |path: &Path| -> std::result::Result<SharedTransducer, TransducerError> {
            requested.lock().unwrap().push(path.to_path_buf());
            Ok(Arc::new(echo))
        };

        let config = NormalizerConfig::builder()
            .remove_erhua(true)
            .resource_dir("res")
            .build()
            .unwrap();
        TextNormalizer::from_config(config, &loader).unwrap();

        let requested = requested.into_inner().unwrap();
        assert_eq!(
            requested,
            vec![
                PathBuf::from("res/zh/tn/tagger.fst"),
                PathBuf::from("res/zh/tn/verbalizer_remove_erhua.fst"),
            ]
        );
    }

    #[test]
    fn test_from_config_missing_resource() {
        let loader = |path: &Path| -> std::result::Result<SharedTransducer, TransducerError> {
            Err(TransducerError::MissingResource(path.to_path_buf()))
        };
        let err = TextNormalizer::from_config(NormalizerConfig::default(), &loader).unwrap_err();
        assert!(matches!(
            err,
            Error::Transducer {
                stage: Stage::Tag,
                source: TransducerError::MissingResource(_)
            }
        ));
    }

    #[test]
    fn test_unsupported_config_rejected_at_construction() {
        let config = NormalizerConfig {
            locale: Locale::En,
            direction: crate::normalize::Direction::InverseNormalization,
            ..NormalizerConfig::default()
        };
        let err = TextNormalizer::new(config, echo, echo).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Unsupported(_))));
    }
}
