//! Configuration management for Marionette.
//!
//! Layered loading via figment: built-in defaults, then `marionette.toml`
//! next to the plugin, then `RIG_*` environment variables (double
//! underscore as section separator, e.g. `RIG_LOGGING__LEVEL=debug`).
//! Later layers win. Loaded once at plugin startup before anything logs.

pub mod logging;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use rig_foundation::{RigError, RigResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default config file name, looked up in the plugin's data directory.
pub const CONFIG_FILE: &str = "marionette.toml";

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "RIG_";

/// Log output format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

/// Logging section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Host detection section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Pin the revision tag instead of trusting host detection. Escape
    /// hatch for snapshot builds that report unstable tags.
    pub version_override: Option<String>,
}

/// Optional-extension section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompatConfig {
    /// Extension names whose bridges are never probed or started.
    pub disabled: Vec<String>,
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub host: HostConfig,
    pub compat: CompatConfig,
}

impl AppConfig {
    /// Load configuration from defaults, an optional TOML file and the
    /// environment.
    ///
    /// A missing file is fine (defaults apply); a malformed file or an
    /// unknown enum value (e.g. `logging.format = "xml"`) is a fatal
    /// [`RigError::Config`].
    pub fn load(file: Option<&Path>) -> RigResult<Self> {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
        figment = match file {
            Some(path) => figment.merge(Toml::file(path)),
            None => figment.merge(Toml::file(CONFIG_FILE)),
        };
        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(|error| RigError::config(error.to_string()))
    }

    /// Whether a bridge for `extension` may be probed at all.
    pub fn is_extension_enabled(&self, extension: &str) -> bool {
        !self
            .compat
            .disabled
            .iter()
            .any(|disabled| disabled == extension)
    }
}
