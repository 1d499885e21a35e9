//! Incremental sentence splitter
//!
//! Text is fed in with [`TextStreamSentencizer::push`]; every character is
//! appended to a pending buffer and the boundary policy is re-evaluated, so
//! the emitted sentences do not depend on how the stream was chunked.
//!
//! Boundary candidates are tracked per level as offsets into the pending
//! buffer. On each step one level is active:
//!
//! 1. level 1 whenever a level-1 candidate is pending that could be cut,
//!    meaning it clears the length floor when the policy gates level 1;
//! 2. otherwise level 2 once the pending length reaches
//!    `use_level2_threshold` and a level-2 candidate exists;
//! 3. otherwise level 3 under the same length condition once the pending
//!    length also reaches `use_level3_threshold`.
//!
//! A level-1 candidate held back by the floor does not block the lower
//! levels, so pending text cannot grow without bound under
//! [`MinLengthPolicy::AllLevels`].
//!
//! Candidates of the active level are cut left to right. A cut that would
//! yield a sentence shorter than `min_sentence_length` is skipped when the
//! [`MinLengthPolicy`] covers that level, and the text merges into the next
//! sentence.

use std::borrow::Cow;

use tracing::trace;

use super::boundary::BoundarySet;
use super::config::{MinLengthPolicy, SentencizerConfig};
use crate::error::ConfigError;
use crate::text::remove_emojis;

/// End of a boundary character inside the pending buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    byte_end: usize,
    char_end: usize,
}

/// Streaming sentence splitter for one text stream
#[derive(Debug, Clone)]
pub struct TextStreamSentencizer {
    config: SentencizerConfig,
    levels: [BoundarySet; 3],
    buffer: String,
    char_len: usize,
    candidates: [Vec<Candidate>; 3],
}

impl Default for TextStreamSentencizer {
    fn default() -> Self {
        use super::config::defaults;

        Self::from_parts(
            SentencizerConfig::default(),
            [
                BoundarySet::from_chars(&defaults::LEVEL1_ENDS),
                BoundarySet::from_chars(&defaults::LEVEL2_ENDS),
                BoundarySet::from_chars(&defaults::LEVEL3_ENDS),
            ],
        )
    }
}

impl TextStreamSentencizer {
    /// Create a sentencizer with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sentencizer from a configuration, validating it
    pub fn with_config(config: SentencizerConfig) -> Result<Self, ConfigError> {
        let levels = config.boundary_sets()?;
        Ok(Self::from_parts(config, levels))
    }

    fn from_parts(config: SentencizerConfig, levels: [BoundarySet; 3]) -> Self {
        Self {
            config,
            levels,
            buffer: String::new(),
            char_len: 0,
            candidates: Default::default(),
        }
    }

    /// Append `text` and return every sentence completed by it
    pub fn push(&mut self, text: &str) -> Vec<String> {
        let text = if self.config.remove_emoji {
            Cow::Owned(remove_emojis(text))
        } else {
            Cow::Borrowed(text)
        };

        let mut sentences = Vec::new();
        for ch in text.chars() {
            self.append(ch);
            self.split_ready(&mut sentences);
        }
        sentences
    }

    /// Emit whatever is pending as a final sentence and clear the buffer
    pub fn flush(&mut self) -> Vec<String> {
        if self.buffer.is_empty() {
            return Vec::new();
        }
        let rest = std::mem::take(&mut self.buffer);
        self.reset();
        trace!(chars = rest.chars().count(), "flushed pending text");
        vec![rest]
    }

    /// Drop pending text without emitting it
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.char_len = 0;
        for list in &mut self.candidates {
            list.clear();
        }
    }

    /// Text received but not yet emitted
    pub fn pending(&self) -> &str {
        &self.buffer
    }

    /// Current configuration
    pub fn config(&self) -> &SentencizerConfig {
        &self.config
    }

    /// Minimum sentence length
    pub fn min_sentence_length(&self) -> usize {
        self.config.min_sentence_length
    }

    /// Set the minimum sentence length for future decisions
    pub fn set_min_sentence_length(&mut self, length: usize) {
        self.config.min_sentence_length = length;
    }

    /// Level-2 threshold
    pub fn use_level2_threshold(&self) -> usize {
        self.config.use_level2_threshold
    }

    /// Set the level-2 threshold for future decisions
    pub fn set_use_level2_threshold(&mut self, threshold: usize) {
        self.config.use_level2_threshold = threshold;
    }

    /// Level-3 threshold
    pub fn use_level3_threshold(&self) -> usize {
        self.config.use_level3_threshold
    }

    /// Set the level-3 threshold for future decisions
    ///
    /// Level 3 is only consulted once the level-2 threshold is also reached,
    /// so a value below [`use_level2_threshold`](Self::use_level2_threshold)
    /// behaves like the level-2 threshold.
    pub fn set_use_level3_threshold(&mut self, threshold: usize) {
        self.config.use_level3_threshold = threshold;
    }

    /// Level-1 boundaries
    pub fn level1_ends(&self) -> &BoundarySet {
        &self.levels[0]
    }

    /// Level-2 boundaries
    pub fn level2_ends(&self) -> &BoundarySet {
        &self.levels[1]
    }

    /// Level-3 boundaries
    pub fn level3_ends(&self) -> &BoundarySet {
        &self.levels[2]
    }

    /// Replace the level-1 boundaries
    pub fn set_level1_ends<S: AsRef<str>>(&mut self, entries: &[S]) -> Result<(), ConfigError> {
        self.set_level(1, entries)
    }

    /// Replace the level-2 boundaries
    pub fn set_level2_ends<S: AsRef<str>>(&mut self, entries: &[S]) -> Result<(), ConfigError> {
        self.set_level(2, entries)
    }

    /// Replace the level-3 boundaries
    pub fn set_level3_ends<S: AsRef<str>>(&mut self, entries: &[S]) -> Result<(), ConfigError> {
        self.set_level(3, entries)
    }

    /// Scope of the minimum length
    pub fn min_length_policy(&self) -> MinLengthPolicy {
        self.config.min_length_policy
    }

    /// Change the scope of the minimum length
    pub fn set_min_length_policy(&mut self, policy: MinLengthPolicy) {
        self.config.min_length_policy = policy;
    }

    /// Whether emojis are stripped from pushed text
    pub fn remove_emoji(&self) -> bool {
        self.config.remove_emoji
    }

    /// Toggle emoji stripping for future pushes
    pub fn set_remove_emoji(&mut self, enabled: bool) {
        self.config.remove_emoji = enabled;
    }

    fn set_level<S: AsRef<str>>(&mut self, level: u8, entries: &[S]) -> Result<(), ConfigError> {
        let set = BoundarySet::parse(level, entries)?;
        let index = usize::from(level - 1);
        let strings = set.to_strings();
        match level {
            1 => self.config.level1_ends = strings,
            2 => self.config.level2_ends = strings,
            _ => self.config.level3_ends = strings,
        }
        self.levels[index] = set;
        self.reindex(index);
        Ok(())
    }

    /// Rebuild one level's candidates over the pending text
    fn reindex(&mut self, index: usize) {
        let set = &self.levels[index];
        let list = &mut self.candidates[index];
        list.clear();
        for (char_index, (byte_index, ch)) in self.buffer.char_indices().enumerate() {
            if set.contains(ch) {
                list.push(Candidate {
                    byte_end: byte_index + ch.len_utf8(),
                    char_end: char_index + 1,
                });
            }
        }
    }

    fn append(&mut self, ch: char) {
        self.buffer.push(ch);
        self.char_len += 1;

        let candidate = Candidate {
            byte_end: self.buffer.len(),
            char_end: self.char_len,
        };
        for (set, list) in self.levels.iter().zip(self.candidates.iter_mut()) {
            if set.contains(ch) {
                list.push(candidate);
            }
        }
    }

    /// Level (0-based) whose candidates may cut right now
    fn active_level(&self) -> Option<usize> {
        if self.can_cut(0) {
            return Some(0);
        }
        if self.char_len < self.config.use_level2_threshold {
            return None;
        }
        if !self.candidates[1].is_empty() {
            return Some(1);
        }
        if self.char_len >= self.config.use_level3_threshold && !self.candidates[2].is_empty() {
            return Some(2);
        }
        None
    }

    /// Whether some candidate of `index` would survive the length floor
    fn can_cut(&self, index: usize) -> bool {
        let Some(last) = self.candidates[index].last() else {
            return false;
        };
        // cuts run left to right from the buffer start, so the last
        // candidate is the longest possible first sentence
        !self.config.min_length_policy.applies_to(index as u8 + 1)
            || last.char_end >= self.config.min_sentence_length
    }

    fn split_ready(&mut self, sentences: &mut Vec<String>) {
        let Some(index) = self.active_level() else {
            return;
        };
        let gated = self.config.min_length_policy.applies_to(index as u8 + 1);
        let floor = self.config.min_sentence_length;

        let mut start = Candidate {
            byte_end: 0,
            char_end: 0,
        };
        for &candidate in &self.candidates[index] {
            let length = candidate.char_end - start.char_end;
            if gated && length < floor {
                continue;
            }
            sentences.push(self.buffer[start.byte_end..candidate.byte_end].to_string());
            trace!(level = index + 1, chars = length, "emitted sentence");
            start = candidate;
        }

        if start.byte_end > 0 {
            self.consume(start);
        }
    }

    /// Remove an emitted prefix and shift the remaining candidates
    fn consume(&mut self, prefix: Candidate) {
        self.buffer.drain(..prefix.byte_end);
        self.char_len -= prefix.char_end;
        for list in &mut self.candidates {
            list.retain(|c| c.byte_end > prefix.byte_end);
            for c in list.iter_mut() {
                c.byte_end -= prefix.byte_end;
                c.char_end -= prefix.char_end;
            }
        }
    }
}
