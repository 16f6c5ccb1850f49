//! Runtime configuration file parsing.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Which built-in groups a new realm receives.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuiltinsConfig {
    /// Install the `Math` object.
    pub math: bool,
    /// Install `NaN`, `Infinity`, `undefined`, `isNaN` and `isFinite`.
    pub globals: bool,
}

impl Default for BuiltinsConfig {
    fn default() -> Self {
        BuiltinsConfig {
            math: true,
            globals: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RandomConfig {
    /// Reseeds the process-wide random source when present.
    pub seed: Option<u64>,
}

/// Complete runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeConfig {
    pub builtins: BuiltinsConfig,
    pub random: RandomConfig,
}

impl RuntimeConfig {
    /// Load configuration from a TOML file.
    ///
    /// Expected format:
    /// ```toml
    /// [builtins]
    /// math = true
    /// globals = true
    ///
    /// [random]
    /// seed = 42
    /// ```
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        log::debug!("loading runtime config from {}", path.display());
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string. Absent keys take their defaults.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: RuntimeConfig = toml::from_str(content)?;
        log::debug!("parsed runtime config: {:?}", config);
        Ok(config)
    }
}
