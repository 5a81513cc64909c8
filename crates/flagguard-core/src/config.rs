//! # Validator Configuration
//!
//! Settings shared by the input and datafile validators, loaded from YAML.
//! Every field has a default, so an empty document is a valid configuration.
//!
//! ```yaml
//! diagnostic_level: warn     # or null to silence generic-field diagnostics
//! error_policy: raise        # swallow | raise
//! schema_version: v4         # v2 | v4
//! ```

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error_handler::{ErrorHandler, NoOpErrorHandler, RaiseErrorHandler};
use crate::level::LogLevel;

/// Error loading a [`ValidatorConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("cannot read config '{path}': {source}")]
    Io {
        /// Path that failed to load.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration was not valid YAML for this schema.
    #[error("invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// What happens to error signals raised during input validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Signals are dropped after logging.
    #[default]
    Swallow,
    /// Signals are returned to the caller as errors.
    Raise,
}

impl ErrorPolicy {
    /// The error handler implementing this policy.
    pub fn handler(&self) -> Arc<dyn ErrorHandler> {
        match self {
            Self::Swallow => Arc::new(NoOpErrorHandler),
            Self::Raise => Arc::new(RaiseErrorHandler),
        }
    }
}

/// Version of the datafile schema documents are checked against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatafileSchemaVersion {
    /// Experiments, events, groups, audiences and attributes.
    #[default]
    V2,
    /// V2 plus feature flags and rollouts.
    V4,
}

/// Validator settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Level for per-field diagnostics; `None` silences generic-field logging.
    pub diagnostic_level: Option<LogLevel>,
    /// Fate of structured-field error signals.
    pub error_policy: ErrorPolicy,
    /// Datafile schema version.
    pub schema_version: DatafileSchemaVersion,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            diagnostic_level: Some(LogLevel::Error),
            error_policy: ErrorPolicy::default(),
            schema_version: DatafileSchemaVersion::default(),
        }
    }
}

impl ValidatorConfig {
    /// Parse a configuration from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    /// Load a configuration from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_yaml_str(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded validator config");
        Ok(config)
    }
}
