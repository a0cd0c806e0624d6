//! Configuration loading and environment overrides.
//!
//! # Design
//! - File first, environment second: override values win over the document.
//! - Boolean overrides are strict: only the literals `true` and `false` are
//!   accepted; anything else is a configuration error, never a coercion.
//! - Override application is a pure function over captured values so it can
//!   be tested without touching process environment.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult};
use crate::model::{AppConfig, ContentfulConfig};

/// Environment variable naming the configuration file path.
pub const CONFIG_PATH_ENV: &str = "NORDEN_CONFIG";

/// Configuration file consulted when no path override is present.
pub const DEFAULT_CONFIG_PATH: &str = "norden.yaml";

const ENV_API_KEY: &str = "CONTENTFUL_API_KEY";
const ENV_SPACE_ID: &str = "CONTENTFUL_SPACE_ID";
const ENV_ENVIRONMENT_ID: &str = "CONTENTFUL_ENVIRONMENT_ID";
const ENV_PREVIEW: &str = "CONTENTFUL_PREVIEW";
const ENV_DEFAULT_LOCALE: &str = "CONTENTFUL_DEFAULT_LOCALE";
const ENV_LOW_MEMORY_RESOURCE_POOL: &str = "CONTENTFUL_LOW_MEMORY_RESOURCE_POOL";

/// Raw environment override values captured for the `contentful` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    /// Override for `contentful.api_key`.
    pub api_key: Option<String>,
    /// Override for `contentful.space_id`.
    pub space_id: Option<String>,
    /// Override for `contentful.environment_id`.
    pub environment_id: Option<String>,
    /// Override for `contentful.preview` (unparsed).
    pub preview: Option<String>,
    /// Override for `contentful.default_locale`.
    pub default_locale: Option<String>,
    /// Override for `contentful.low_memory_resource_pool` (unparsed).
    pub low_memory_resource_pool: Option<String>,
}

impl EnvOverrides {
    /// Capture override values from the process environment.
    #[must_use]
    pub fn from_process() -> Self {
        Self {
            api_key: std::env::var(ENV_API_KEY).ok(),
            space_id: std::env::var(ENV_SPACE_ID).ok(),
            environment_id: std::env::var(ENV_ENVIRONMENT_ID).ok(),
            preview: std::env::var(ENV_PREVIEW).ok(),
            default_locale: std::env::var(ENV_DEFAULT_LOCALE).ok(),
            low_memory_resource_pool: std::env::var(ENV_LOW_MEMORY_RESOURCE_POOL).ok(),
        }
    }

    /// Apply the captured overrides on top of a loaded section.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] when a boolean override is not
    /// the literal `true` or `false`.
    pub fn apply(&self, config: &mut ContentfulConfig) -> ConfigResult<()> {
        if let Some(value) = &self.api_key {
            config.api_key.clone_from(value);
        }
        if let Some(value) = &self.space_id {
            config.space_id.clone_from(value);
        }
        if let Some(value) = &self.environment_id {
            config.environment_id.clone_from(value);
        }
        if let Some(value) = &self.preview {
            config.preview = parse_strict_bool("preview", value)?;
        }
        if let Some(value) = &self.default_locale {
            config.default_locale = Some(value.clone());
        }
        if let Some(value) = &self.low_memory_resource_pool {
            config.low_memory_resource_pool =
                parse_strict_bool("low_memory_resource_pool", value)?;
        }
        Ok(())
    }
}

/// Load the configuration document and apply environment overrides.
///
/// The file path comes from [`CONFIG_PATH_ENV`], falling back to
/// [`DEFAULT_CONFIG_PATH`]; a missing file yields the default document,
/// since the environment may carry the whole configuration.
///
/// # Errors
///
/// Returns an error when the file exists but cannot be read or parsed, or
/// when an environment override carries an invalid boolean literal.
pub fn load() -> ConfigResult<AppConfig> {
    let path = std::env::var(CONFIG_PATH_ENV)
        .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    let mut config = if path.is_file() {
        load_from_path(&path)?
    } else {
        AppConfig::default()
    };
    EnvOverrides::from_process().apply(&mut config.contentful)?;
    Ok(config)
}

/// Load the configuration document from an explicit path.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] when the file cannot be read and
/// [`ConfigError::Parse`] when the document is not valid YAML.
pub fn load_from_path(path: &Path) -> ConfigResult<AppConfig> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        operation: "read_config",
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_strict_bool(field: &'static str, value: &str) -> ConfigResult<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(ConfigError::InvalidField {
            section: "contentful",
            field,
            value: Some(other.to_string()),
            reason: "must_be_literal_true_or_false",
        }),
    }
}
