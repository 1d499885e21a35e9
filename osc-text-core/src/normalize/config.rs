//! Configuration for the normalization pipeline

use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::language::{Direction, Locale};
use crate::annotation::OrderTable;
use crate::error::ConfigError;

/// Default configuration constants
pub mod defaults {
    /// Directory searched for compiled transducers
    pub const RESOURCE_DIR: &str = "assets/text";

    /// Tagger resource name
    pub const TAGGER: &str = "tagger.fst";

    /// Tagger resource name with digit-by-digit handling of 0-9
    pub const TAGGER_ENABLE_0_TO_9: &str = "tagger_enable_0_to_9.fst";

    /// Verbalizer resource name
    pub const VERBALIZER: &str = "verbalizer.fst";

    /// Verbalizer resource name with erhua removal
    pub const VERBALIZER_REMOVE_ERHUA: &str = "verbalizer_remove_erhua.fst";
}

/// Validated normalization settings.
///
/// Resources live under `<resource_dir>/<locale>/<direction>/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizerConfig {
    pub(crate) locale: Locale,
    pub(crate) direction: Direction,
    pub(crate) remove_erhua: bool,
    pub(crate) enable_0_to_9: bool,
    pub(crate) resource_dir: PathBuf,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            direction: Direction::default(),
            remove_erhua: false,
            enable_0_to_9: false,
            resource_dir: PathBuf::from(defaults::RESOURCE_DIR),
        }
    }
}

impl NormalizerConfig {
    /// Create a configuration builder
    pub fn builder() -> NormalizerConfigBuilder {
        NormalizerConfigBuilder::default()
    }

    /// Reject combinations no transducer set exists for
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        match (self.locale, self.direction) {
            (Locale::Zh, Direction::Normalization) if self.enable_0_to_9 => {
                Err(ConfigError::Unsupported(
                    "enable_0_to_9 only applies to inverse normalization".into(),
                ))
            }
            (Locale::Zh, Direction::InverseNormalization) if self.remove_erhua => Err(
                ConfigError::Unsupported("remove_erhua only applies to normalization".into()),
            ),
            (Locale::Zh, _) => Ok(()),
            (Locale::En, Direction::Normalization) if self.remove_erhua || self.enable_0_to_9 => {
                Err(ConfigError::Unsupported(
                    "English normalization has no variant flags".into(),
                ))
            }
            (Locale::En, Direction::Normalization) => Ok(()),
            (Locale::En, Direction::InverseNormalization) => Err(ConfigError::Unsupported(
                "English inverse normalization is not available".into(),
            )),
        }
    }

    /// Locale
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Direction
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether the verbalizer drops erhua
    pub fn remove_erhua(&self) -> bool {
        self.remove_erhua
    }

    /// Whether the tagger converts isolated digits
    pub fn enable_0_to_9(&self) -> bool {
        self.enable_0_to_9
    }

    /// Root resource directory
    pub fn resource_dir(&self) -> &Path {
        &self.resource_dir
    }

    /// Order table matching the tagger/verbalizer pair
    pub fn order_table(&self) -> OrderTable {
        match (self.locale, self.direction) {
            (Locale::Zh, Direction::Normalization) => OrderTable::ZhNormalization,
            (Locale::Zh, Direction::InverseNormalization) => OrderTable::ZhInverseNormalization,
            // validation rules out en/itn
            (Locale::En, _) => OrderTable::EnNormalization,
        }
    }

    fn resource(&self, file: &str) -> PathBuf {
        self.resource_dir
            .join(self.locale.code())
            .join(self.direction.code())
            .join(file)
    }

    /// Path of the tagger resource
    pub fn tagger_path(&self) -> PathBuf {
        if self.enable_0_to_9 {
            self.resource(defaults::TAGGER_ENABLE_0_TO_9)
        } else {
            self.resource(defaults::TAGGER)
        }
    }

    /// Path of the verbalizer resource
    pub fn verbalizer_path(&self) -> PathBuf {
        if self.remove_erhua {
            self.resource(defaults::VERBALIZER_REMOVE_ERHUA)
        } else {
            self.resource(defaults::VERBALIZER)
        }
    }
}

/// Fluent builder for [`NormalizerConfig`]
#[derive(Debug, Default)]
pub struct NormalizerConfigBuilder {
    locale: Option<Locale>,
    direction: Option<Direction>,
    remove_erhua: bool,
    enable_0_to_9: bool,
    resource_dir: Option<PathBuf>,
}

impl NormalizerConfigBuilder {
    /// Set the locale by code
    pub fn locale(mut self, code: &str) -> Result<Self, ConfigError> {
        self.locale = Some(Locale::from_str(code)?);
        Ok(self)
    }

    /// Set the direction by code (`tn` / `itn`)
    pub fn direction(mut self, code: &str) -> Result<Self, ConfigError> {
        self.direction = Some(Direction::from_str(code)?);
        Ok(self)
    }

    /// Set the locale
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Set the direction
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Drop erhua in the verbalizer
    pub fn remove_erhua(mut self, enabled: bool) -> Self {
        self.remove_erhua = enabled;
        self
    }

    /// Convert isolated digits 0-9 in the tagger
    pub fn enable_0_to_9(mut self, enabled: bool) -> Self {
        self.enable_0_to_9 = enabled;
        self
    }

    /// Set the resource directory
    pub fn resource_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.resource_dir = Some(dir.into());
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<NormalizerConfig, ConfigError> {
        let mut config = NormalizerConfig::default();

        if let Some(locale) = self.locale {
            config.locale = locale;
        }
        if let Some(direction) = self.direction {
            config.direction = direction;
        }
        if let Some(dir) = self.resource_dir {
            config.resource_dir = dir;
        }
        config.remove_erhua = self.remove_erhua;
        config.enable_0_to_9 = self.enable_0_to_9;

        config.validate()?;
        Ok(config)
    }
}
