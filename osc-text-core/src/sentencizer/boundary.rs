//! Boundary character sets

use std::collections::HashSet;

use crate::error::ConfigError;

/// Set of single-character sentence boundaries for one tier
#[derive(Debug, Clone)]
pub struct BoundarySet {
    /// Characters in configured order
    chars: Vec<char>,
    /// Non-ASCII members
    wide: HashSet<char>,
    /// ASCII lookup table
    ascii_lookup: [bool; 128],
}

impl BoundarySet {
    /// Build from characters known to be valid
    pub fn from_chars(chars: &[char]) -> Self {
        let mut set = Self {
            chars: Vec::with_capacity(chars.len()),
            wide: HashSet::new(),
            ascii_lookup: [false; 128],
        };
        for &ch in chars {
            set.insert(ch);
        }
        set
    }

    /// Build from string entries, each of which must be exactly one character
    pub fn parse<S: AsRef<str>>(level: u8, entries: &[S]) -> Result<Self, ConfigError> {
        let mut set = Self::from_chars(&[]);
        for entry in entries {
            let entry = entry.as_ref();
            let mut chars = entry.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => set.insert(ch),
                _ => {
                    return Err(ConfigError::InvalidBoundary {
                        level,
                        entry: entry.to_string(),
                    })
                }
            }
        }
        Ok(set)
    }

    fn insert(&mut self, ch: char) {
        if self.contains(ch) {
            return;
        }
        if ch.is_ascii() {
            self.ascii_lookup[ch as usize] = true;
        } else {
            self.wide.insert(ch);
        }
        self.chars.push(ch);
    }

    /// Check membership
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii_lookup[ch as usize]
        } else {
            self.wide.contains(&ch)
        }
    }

    /// Members in configured order
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Members as one-character strings
    pub fn to_strings(&self) -> Vec<String> {
        self.chars.iter().map(|c| c.to_string()).collect()
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the set has no members
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}
