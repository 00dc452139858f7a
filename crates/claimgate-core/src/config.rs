//! Validator configuration.
//!
//! Every field has a default, so an empty document yields the standard
//! policy: fail mode, ceilings DIRECT 1.0 / PARTIAL 0.7 / CONTEXT 0.5,
//! and per-back-edge cycle reporting.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::claim::SourceType;

/// Errors that can occur when loading a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Ceiling for {source_type} must be within [0, 1], got {value}")]
    InvalidCeiling { source_type: SourceType, value: f64 },
}

/// How the verdict reacts to ERROR issues.
///
/// Any mode string other than `"fail"` selects [`Mode::Advisory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// `ok` is false when at least one ERROR is reported
    #[default]
    Fail,
    /// `ok` is always true; issues are still reported in full
    Advisory,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Fail => "fail",
            Mode::Advisory => "advisory",
        }
    }

    pub fn fails_on_error(&self) -> bool {
        matches!(self, Mode::Fail)
    }
}

impl From<&str> for Mode {
    fn from(value: &str) -> Self {
        if value == "fail" {
            Mode::Fail
        } else {
            Mode::Advisory
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Mode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Mode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Mode::from(raw.as_str()))
    }
}

/// Maximum declared confidence per source type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CeilingPolicy {
    pub direct: f64,
    pub partial: f64,
    pub context: f64,
}

impl Default for CeilingPolicy {
    fn default() -> Self {
        Self {
            direct: 1.0,
            partial: 0.7,
            context: 0.5,
        }
    }
}

impl CeilingPolicy {
    /// Ceiling for a recognised source type.
    pub fn ceiling(&self, source_type: SourceType) -> f64 {
        match source_type {
            SourceType::Direct => self.direct,
            SourceType::Partial => self.partial,
            SourceType::Context => self.context,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for source_type in [SourceType::Direct, SourceType::Partial, SourceType::Context] {
            let value = self.ceiling(source_type);
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidCeiling { source_type, value });
            }
        }
        Ok(())
    }
}

/// Configuration for one validation run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Verdict mode
    pub mode: Mode,

    /// Confidence ceilings per source type
    pub ceilings: CeilingPolicy,
}

impl ValidatorConfig {
    /// Default policy with the given mode.
    pub fn with_mode(mode: Mode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Warn-only run: issues reported, verdict always ok.
    pub fn advisory() -> Self {
        Self::with_mode(Mode::Advisory)
    }

    /// Parse a configuration from YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: ValidatorConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration from JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ValidatorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file; `.json` is parsed as JSON, anything else as YAML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&contents),
            _ => Self::from_yaml(&contents),
        }
    }

    /// Check the configuration for values the validator cannot use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ceilings.validate()
    }
}
