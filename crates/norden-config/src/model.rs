//! Typed configuration sections.
//!
//! # Design
//! - Pure data carriers; loading and overrides live in `loader.rs`.
//! - Every field has a serde default so partial documents load; required
//!   keys fail later, at client construction.

use serde::{Deserialize, Serialize};

/// Full application configuration document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Content-delivery integration settings.
    pub contentful: ContentfulConfig,
    /// Structured logging settings.
    pub logging: LoggingSettings,
}

/// Settings for the `contentful` configuration section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ContentfulConfig {
    /// Delivery API access token. Required; empty means absent.
    pub api_key: String,
    /// Space identifier. Required; empty means absent.
    pub space_id: String,
    /// Environment identifier within the space. Required; empty means absent.
    pub environment_id: String,
    /// Serve draft content through the preview API.
    pub preview: bool,
    /// Locale applied when a request does not specify one.
    pub default_locale: Option<String>,
    /// Select the low-memory resource pool.
    pub low_memory_resource_pool: bool,
}

/// Settings for the `logging` configuration section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level applied when `RUST_LOG` is not provided.
    pub level: String,
    /// Output format name (`json` or `pretty`); absent infers from the build.
    pub format: Option<String>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: None,
        }
    }
}
