//! Canonical field-order tables.
//!
//! Each table maps a token type to the field order its verbalizer expects.
//! Types missing from a table keep the order they were tagged in.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

type Entry = (&'static str, &'static [&'static str]);

const ZH_TN: &[Entry] = &[
    ("date", &["year", "month", "day"]),
    ("fraction", &["denominator", "numerator"]),
    ("measure", &["denominator", "numerator", "value"]),
    ("money", &["value", "currency"]),
    ("time", &["noon", "hour", "minute", "second"]),
];

const ZH_ITN: &[Entry] = &[
    ("date", &["year", "month", "day"]),
    ("fraction", &["sign", "numerator", "denominator"]),
    ("measure", &["numerator", "denominator", "value"]),
    ("money", &["currency", "value", "decimal"]),
    ("time", &["hour", "minute", "second", "noon"]),
];

const EN_TN: &[Entry] = &[
    ("date", &["preserve_order", "text", "day", "month", "year"]),
    (
        "money",
        &["integer_part", "fractional_part", "quantity", "currency_maj"],
    ),
];

/// Supported canonical order tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderTable {
    /// Mandarin text normalization
    #[default]
    ZhNormalization,
    /// Mandarin inverse text normalization
    ZhInverseNormalization,
    /// English text normalization
    EnNormalization,
}

impl OrderTable {
    /// Every table, in listing order
    pub const ALL: [OrderTable; 3] = [
        OrderTable::ZhNormalization,
        OrderTable::ZhInverseNormalization,
        OrderTable::EnNormalization,
    ];

    /// Short code used on the command line and in config files
    pub fn code(&self) -> &'static str {
        match self {
            OrderTable::ZhNormalization => "zh-tn",
            OrderTable::ZhInverseNormalization => "zh-itn",
            OrderTable::EnNormalization => "en-tn",
        }
    }

    /// Human readable description
    pub fn description(&self) -> &'static str {
        match self {
            OrderTable::ZhNormalization => "Mandarin text normalization",
            OrderTable::ZhInverseNormalization => "Mandarin inverse text normalization",
            OrderTable::EnNormalization => "English text normalization",
        }
    }

    /// All `(type, order)` entries of the table
    pub fn entries(&self) -> &'static [Entry] {
        match self {
            OrderTable::ZhNormalization => ZH_TN,
            OrderTable::ZhInverseNormalization => ZH_ITN,
            OrderTable::EnNormalization => EN_TN,
        }
    }

    /// Canonical order for `type_name`, exact match only
    pub fn order_for(&self, type_name: &str) -> Option<&'static [&'static str]> {
        self.entries()
            .iter()
            .find(|(name, _)| *name == type_name)
            .map(|(_, order)| *order)
    }
}

impl fmt::Display for OrderTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for OrderTable {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zh-tn" | "zh_tn" | "tn" => Ok(OrderTable::ZhNormalization),
            "zh-itn" | "zh_itn" | "itn" => Ok(OrderTable::ZhInverseNormalization),
            "en-tn" | "en_tn" => Ok(OrderTable::EnNormalization),
            _ => Err(ConfigError::UnknownCode {
                kind: "order table",
                code: s.to_string(),
            }),
        }
    }
}
