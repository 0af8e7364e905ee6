//! Loading rules from TOML.
//!
//! ```toml
//! [economy]
//! victim_share = 0.75
//! move_trickle = 0.1
//!
//! [egg_threshold]
//! kind = "material"
//! ```
//!
//! Every field is optional; missing ones take the standard values.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Economy, FixedThreshold, MaterialThreshold, Rules};

/// Errors that can occur when loading or validating a rules file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the rules file from disk.
    #[error("failed to read rules file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the rules file as valid TOML.
    #[error("failed to parse rules: {0}")]
    ParseError(#[from] toml::de::Error),
    /// A value is out of range.
    #[error("invalid rules: {0}")]
    Invalid(String),
}

/// Which egg threshold strategy to use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EggThresholdConfig {
    /// A constant threshold.
    Fixed {
        #[serde(default = "default_egg_threshold")]
        value: f64,
    },
    /// The material-scaled threshold.
    Material,
}

fn default_egg_threshold() -> f64 {
    1.0
}

impl Default for EggThresholdConfig {
    fn default() -> Self {
        EggThresholdConfig::Fixed {
            value: default_egg_threshold(),
        }
    }
}

/// Rules as written in a TOML file.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RulesConfig {
    #[serde(default)]
    pub economy: Economy,
    #[serde(default)]
    pub egg_threshold: EggThresholdConfig,
}

impl RulesConfig {
    /// Parses rules from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: RulesConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads rules from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Checks that every credit and the threshold are finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let e = &self.economy;
        let fields = [
            ("victim_share", e.victim_share),
            ("captor_share", e.captor_share),
            ("move_trickle", e.move_trickle),
            ("checker_bonus", e.checker_bonus),
            ("checked_bonus", e.checked_bonus),
            ("promotion_refund", e.promotion_refund),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "economy.{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        if let EggThresholdConfig::Fixed { value } = self.egg_threshold {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "egg_threshold.value must be a non-negative number, got {}",
                    value
                )));
            }
        }
        Ok(())
    }

    /// Builds the [`Rules`] this configuration describes.
    pub fn into_rules(self) -> Rules {
        match self.egg_threshold {
            EggThresholdConfig::Fixed { value } => Rules::new(self.economy, FixedThreshold(value)),
            EggThresholdConfig::Material => Rules::new(self.economy, MaterialThreshold),
        }
    }
}
