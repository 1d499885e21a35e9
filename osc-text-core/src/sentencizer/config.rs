//! Configuration for the stream sentencizer

use serde::{Deserialize, Serialize};

use super::boundary::BoundarySet;
use crate::error::ConfigError;

/// Default configuration constants
pub mod defaults {
    /// Shortest sentence that may be emitted at a gated boundary
    pub const MIN_SENTENCE_LENGTH: usize = 10;

    /// Pending length at which level-2 boundaries become eligible
    pub const LEVEL2_THRESHOLD: usize = 50;

    /// Pending length at which level-3 boundaries become eligible
    pub const LEVEL3_THRESHOLD: usize = 100;

    /// Sentence-final punctuation
    pub const LEVEL1_ENDS: [char; 7] = ['!', '?', '。', '？', '！', '；', ';'];

    /// Clause separators
    pub const LEVEL2_ENDS: [char; 3] = ['、', ',', '，'];

    /// Colons
    pub const LEVEL3_ENDS: [char; 2] = [':', '：'];
}

/// Which boundary levels the minimum sentence length applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MinLengthPolicy {
    /// Level-1 boundaries always split; the floor gates levels 2 and 3
    #[default]
    ExemptLevel1,
    /// The floor gates every level, level 1 included
    AllLevels,
}

impl MinLengthPolicy {
    /// Whether the floor applies to boundaries of `level` (1-based)
    pub fn applies_to(&self, level: u8) -> bool {
        match self {
            MinLengthPolicy::ExemptLevel1 => level > 1,
            MinLengthPolicy::AllLevels => true,
        }
    }
}

fn strings(chars: &[char]) -> Vec<String> {
    chars.iter().map(|c| c.to_string()).collect()
}

/// Sentencizer configuration.
///
/// Boundary entries are kept as strings so that a multi-character entry is
/// reported by [`validate`](Self::validate) instead of being silently split.
/// Lengths and thresholds count characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentencizerConfig {
    /// Minimum sentence length in characters
    pub min_sentence_length: usize,
    /// Pending length before level-2 boundaries are used
    pub use_level2_threshold: usize,
    /// Pending length before level-3 boundaries are used
    pub use_level3_threshold: usize,
    /// Highest priority boundaries
    pub level1_ends: Vec<String>,
    /// Level-2 boundaries
    pub level2_ends: Vec<String>,
    /// Level-3 boundaries
    pub level3_ends: Vec<String>,
    /// Strip emojis from pushed text
    pub remove_emoji: bool,
    /// Scope of `min_sentence_length`
    pub min_length_policy: MinLengthPolicy,
}

impl Default for SentencizerConfig {
    fn default() -> Self {
        Self {
            min_sentence_length: defaults::MIN_SENTENCE_LENGTH,
            use_level2_threshold: defaults::LEVEL2_THRESHOLD,
            use_level3_threshold: defaults::LEVEL3_THRESHOLD,
            level1_ends: strings(&defaults::LEVEL1_ENDS),
            level2_ends: strings(&defaults::LEVEL2_ENDS),
            level3_ends: strings(&defaults::LEVEL3_ENDS),
            remove_emoji: false,
            min_length_policy: MinLengthPolicy::default(),
        }
    }
}

impl SentencizerConfig {
    /// Create a configuration builder
    pub fn builder() -> SentencizerConfigBuilder {
        SentencizerConfigBuilder::default()
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: SentencizerConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every boundary entry
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.boundary_sets().map(|_| ())
    }

    /// Compile the three boundary sets
    pub(crate) fn boundary_sets(&self) -> Result<[BoundarySet; 3], ConfigError> {
        Ok([
            BoundarySet::parse(1, &self.level1_ends)?,
            BoundarySet::parse(2, &self.level2_ends)?,
            BoundarySet::parse(3, &self.level3_ends)?,
        ])
    }
}

/// Fluent builder for [`SentencizerConfig`]
#[derive(Debug, Default)]
pub struct SentencizerConfigBuilder {
    min_sentence_length: Option<usize>,
    use_level2_threshold: Option<usize>,
    use_level3_threshold: Option<usize>,
    level1_ends: Option<Vec<String>>,
    level2_ends: Option<Vec<String>>,
    level3_ends: Option<Vec<String>>,
    remove_emoji: Option<bool>,
    min_length_policy: Option<MinLengthPolicy>,
}

fn collect<I, S>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    entries.into_iter().map(Into::into).collect()
}

impl SentencizerConfigBuilder {
    /// Set the minimum sentence length
    pub fn min_sentence_length(mut self, length: usize) -> Self {
        self.min_sentence_length = Some(length);
        self
    }

    /// Set the level-2 threshold
    pub fn use_level2_threshold(mut self, threshold: usize) -> Self {
        self.use_level2_threshold = Some(threshold);
        self
    }

    /// Set the level-3 threshold
    pub fn use_level3_threshold(mut self, threshold: usize) -> Self {
        self.use_level3_threshold = Some(threshold);
        self
    }

    /// Replace the level-1 boundaries
    pub fn level1_ends<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.level1_ends = Some(collect(entries));
        self
    }

    /// Replace the level-2 boundaries
    pub fn level2_ends<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.level2_ends = Some(collect(entries));
        self
    }

    /// Replace the level-3 boundaries
    pub fn level3_ends<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.level3_ends = Some(collect(entries));
        self
    }

    /// Strip emojis from pushed text
    pub fn remove_emoji(mut self, enabled: bool) -> Self {
        self.remove_emoji = Some(enabled);
        self
    }

    /// Choose which levels the minimum length applies to
    pub fn min_length_policy(mut self, policy: MinLengthPolicy) -> Self {
        self.min_length_policy = Some(policy);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<SentencizerConfig, ConfigError> {
        let defaults = SentencizerConfig::default();
        let config = SentencizerConfig {
            min_sentence_length: self
                .min_sentence_length
                .unwrap_or(defaults.min_sentence_length),
            use_level2_threshold: self
                .use_level2_threshold
                .unwrap_or(defaults.use_level2_threshold),
            use_level3_threshold: self
                .use_level3_threshold
                .unwrap_or(defaults.use_level3_threshold),
            level1_ends: self.level1_ends.unwrap_or(defaults.level1_ends),
            level2_ends: self.level2_ends.unwrap_or(defaults.level2_ends),
            level3_ends: self.level3_ends.unwrap_or(defaults.level3_ends),
            remove_emoji: self.remove_emoji.unwrap_or(defaults.remove_emoji),
            min_length_policy: self.min_length_policy.unwrap_or(defaults.min_length_policy),
        };

        config.validate()?;
        Ok(config)
    }
}
