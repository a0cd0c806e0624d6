//! Client options controlling how the delivery client is constructed.
//!
//! # Design
//! - Value object with built-in defaults: delivery API, no locale override,
//!   standard resource pool.
//! - Builder methods mirror the delivery SDK vocabulary so configuration
//!   translation reads the same as the upstream client.

/// Host serving published content.
pub const DELIVERY_API_HOST: &str = "cdn.contentful.com";

/// Host serving draft content through the preview API.
pub const PREVIEW_API_HOST: &str = "preview.contentful.com";

/// Optional behavior toggles applied when constructing a [`crate::DeliveryClient`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientOptions {
    preview: bool,
    default_locale: Option<String>,
    low_memory_resource_pool: bool,
}

impl ClientOptions {
    /// Options with every toggle at its built-in default.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            preview: false,
            default_locale: None,
            low_memory_resource_pool: false,
        }
    }

    /// Target the preview API host serving unpublished content.
    #[must_use]
    pub fn using_preview_api(mut self) -> Self {
        self.preview = true;
        self
    }

    /// Override the locale applied when a request does not specify one.
    #[must_use]
    pub fn with_default_locale(mut self, code: impl Into<String>) -> Self {
        self.default_locale = Some(code.into());
        self
    }

    /// Trade resource-pool memory for repeated fetches.
    #[must_use]
    pub fn with_low_memory_resource_pool(mut self) -> Self {
        self.low_memory_resource_pool = true;
        self
    }

    /// Whether the preview API was selected.
    #[must_use]
    pub const fn preview(&self) -> bool {
        self.preview
    }

    /// Configured default locale override, if any.
    #[must_use]
    pub fn default_locale(&self) -> Option<&str> {
        self.default_locale.as_deref()
    }

    /// Whether the low-memory resource pool was selected.
    #[must_use]
    pub const fn low_memory_resource_pool(&self) -> bool {
        self.low_memory_resource_pool
    }

    /// API host derived from the preview toggle.
    #[must_use]
    pub const fn host(&self) -> &'static str {
        if self.preview {
            PREVIEW_API_HOST
        } else {
            DELIVERY_API_HOST
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_the_delivery_api() {
        let options = ClientOptions::new();
        assert!(!options.preview());
        assert!(options.default_locale().is_none());
        assert!(!options.low_memory_resource_pool());
        assert_eq!(options.host(), DELIVERY_API_HOST);
        assert_eq!(options, ClientOptions::default());
    }

    #[test]
    fn preview_toggle_switches_the_host() {
        let options = ClientOptions::new().using_preview_api();
        assert!(options.preview());
        assert_eq!(options.host(), PREVIEW_API_HOST);
    }

    #[test]
    fn builder_methods_compose() {
        let options = ClientOptions::new()
            .using_preview_api()
            .with_default_locale("en-US")
            .with_low_memory_resource_pool();
        assert!(options.preview());
        assert_eq!(options.default_locale(), Some("en-US"));
        assert!(options.low_memory_resource_pool());
    }
}
