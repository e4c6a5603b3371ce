//! # Validator Configuration
//!
//! The autorepair policy and collection initialization switch for one
//! validation run. Both are plain fields threaded through the rule
//! context, never process-wide state, so independent runs can use
//! different settings side by side.
//!
//! | autorepair | collection_initialization | absent collection |
//! |---|---|---|
//! | on  | on  | materialized empty, INFO finding |
//! | off | on  | left absent, ERROR finding |
//! | any | off | left absent, no finding |
//!
//! Configuration can be embedded in YAML or JSON documents. Missing keys
//! take their defaults and unknown keys are rejected.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use gedval_core::GedvalError;

/// Error loading a [`ValidatorConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Malformed YAML configuration.
    #[error("invalid YAML validator configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Malformed JSON configuration.
    #[error("invalid JSON validator configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ConfigError> for GedvalError {
    fn from(err: ConfigError) -> Self {
        GedvalError::Config(err.to_string())
    }
}

/// Settings for one validation run. Fixed for the run's duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Repair recoverable defects and report them as INFO instead of ERROR.
    pub autorepair: bool,
    /// Whether absent child collections may be materialized at all. When
    /// off, absent collections are skipped silently.
    pub collection_initialization: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            autorepair: true,
            collection_initialization: true,
        }
    }
}

impl ValidatorConfig {
    /// Report every defect, repair nothing.
    pub fn strict() -> Self {
        Self {
            autorepair: false,
            ..Self::default()
        }
    }

    /// Set the autorepair policy.
    pub fn with_autorepair(mut self, autorepair: bool) -> Self {
        self.autorepair = autorepair;
        self
    }

    /// Set the collection initialization switch.
    pub fn with_collection_initialization(mut self, enabled: bool) -> Self {
        self.collection_initialization = enabled;
        self
    }

    /// Parse from a YAML document.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Parse from a JSON document.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }
}
