//! Locale and direction selectors for the normalization pipeline

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Supported text locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// Mandarin Chinese
    #[default]
    Zh,
    /// English
    En,
}

impl Locale {
    /// Get the locale code
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Zh => "zh",
            Locale::En => "en",
        }
    }

    /// Get the full language name
    pub fn name(&self) -> &'static str {
        match self {
            Locale::Zh => "Chinese",
            Locale::En => "English",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zh" | "zho" | "chinese" | "mandarin" => Ok(Locale::Zh),
            "en" | "eng" | "english" => Ok(Locale::En),
            _ => Err(ConfigError::UnknownCode {
                kind: "locale",
                code: s.to_string(),
            }),
        }
    }
}

/// Direction of the normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Written form to spoken form (`2023年` → `二零二三年`)
    #[default]
    Normalization,
    /// Spoken form back to written form
    InverseNormalization,
}

impl Direction {
    /// Short code, also the resource directory name
    pub fn code(&self) -> &'static str {
        match self {
            Direction::Normalization => "tn",
            Direction::InverseNormalization => "itn",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Direction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tn" | "normalization" | "normalize" => Ok(Direction::Normalization),
            "itn" | "inverse" | "inverse-normalization" => Ok(Direction::InverseNormalization),
            _ => Err(ConfigError::UnknownCode {
                kind: "direction",
                code: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_codes() {
        assert_eq!("ZH".parse::<Locale>().unwrap(), Locale::Zh);
        assert_eq!("english".parse::<Locale>().unwrap(), Locale::En);
        assert!("ja".parse::<Locale>().is_err());
        assert_eq!(Locale::En.code(), "en");
        assert_eq!(Locale::Zh.to_string(), "Chinese");
    }

    #[test]
    fn test_direction_codes() {
        assert_eq!("itn".parse::<Direction>().unwrap(), Direction::InverseNormalization);
        assert_eq!(Direction::Normalization.to_string(), "tn");
        assert!("sideways".parse::<Direction>().is_err());
    }
}
