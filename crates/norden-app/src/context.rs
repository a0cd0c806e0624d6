//! Application context and content-delivery provisioning.
//!
//! # Design
//! - Registration records factory inputs only; nothing is constructed and
//!   no IO happens until the first resolution.
//! - One client per application lifetime: the first successful resolution
//!   is cached and every later resolution returns the same `Arc`.
//! - A failed construction is not cached; a later resolution retries.

use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::error::{AppError, AppResult};
use norden_config::{AppConfig, ContentfulConfig};
use norden_content_core::ContentDelivery;
use norden_contentful::{ClientOptions, DeliveryClient};

/// Lazy provider for the process-wide content-delivery client.
pub struct ContentfulProvider {
    config: ContentfulConfig,
    client: OnceCell<Arc<DeliveryClient>>,
}

impl ContentfulProvider {
    /// Register the factory inputs; no client is constructed yet.
    #[must_use]
    pub const fn new(config: ContentfulConfig) -> Self {
        Self {
            config,
            client: OnceCell::new(),
        }
    }

    /// Resolve the concrete client singleton, constructing it on first use.
    ///
    /// # Errors
    ///
    /// Propagates the client constructor's failure unchanged; required keys
    /// that are absent or empty surface here as missing-credential errors.
    pub fn resolve(&self) -> AppResult<Arc<DeliveryClient>> {
        self.client
            .get_or_try_init(|| {
                let options = build_client_options(&self.config);
                let client = DeliveryClient::new(
                    self.config.api_key.as_str(),
                    self.config.space_id.as_str(),
                    self.config.environment_id.as_str(),
                    options,
                )
                .map_err(|source| AppError::delivery("client.new", source))?;
                Ok(Arc::new(client))
            })
            .map(Arc::clone)
    }

    /// Resolve the same singleton behind the abstract delivery contract.
    ///
    /// # Errors
    ///
    /// Fails exactly when [`Self::resolve`] fails.
    pub fn delivery(&self) -> AppResult<Arc<dyn ContentDelivery>> {
        let client: Arc<dyn ContentDelivery> = self.resolve()?;
        Ok(client)
    }

    /// Configuration the provider was registered with.
    #[must_use]
    pub const fn config(&self) -> &ContentfulConfig {
        &self.config
    }
}

/// Context object handed to components that need provisioned services.
pub struct AppContext {
    contentful: ContentfulProvider,
}

impl AppContext {
    /// Build the context from a loaded configuration document.
    #[must_use]
    pub fn from_config(config: AppConfig) -> Self {
        Self {
            contentful: ContentfulProvider::new(config.contentful),
        }
    }

    /// Provider for the content-delivery client.
    #[must_use]
    pub const fn contentful(&self) -> &ContentfulProvider {
        &self.contentful
    }
}

/// Translate the configuration section into client options.
///
/// Deterministic and pure: toggles are applied only for literal `true`
/// values and the locale override only when one is present; everything
/// else stays at the options' built-in defaults.
#[must_use]
pub fn build_client_options(config: &ContentfulConfig) -> ClientOptions {
    let mut options = ClientOptions::new();
    if config.preview {
        options = options.using_preview_api();
    }
    if let Some(code) = &config.default_locale {
        options = options.with_default_locale(code);
    }
    if config.low_memory_resource_pool {
        options = options.with_low_memory_resource_pool();
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use norden_contentful::{DeliveryError, PREVIEW_API_HOST, ResourcePoolMode};

    fn sample_config() -> ContentfulConfig {
        ContentfulConfig {
            api_key: "k1".to_string(),
            space_id: "s1".to_string(),
            environment_id: "e1".to_string(),
            preview: true,
            default_locale: Some("en-US".to_string()),
            low_memory_resource_pool: true,
        }
    }

    #[test]
    fn options_default_when_toggles_are_absent() {
        let config = ContentfulConfig {
            api_key: "k1".to_string(),
            space_id: "s1".to_string(),
            environment_id: "e1".to_string(),
            ..ContentfulConfig::default()
        };
        let options = build_client_options(&config);
        assert_eq!(options, ClientOptions::new());
        assert!(!options.preview());
        assert!(options.default_locale().is_none());
        assert!(!options.low_memory_resource_pool());
    }

    #[test]
    fn options_enable_preview_only_for_true() {
        let mut config = sample_config();
        config.preview = false;
        assert!(!build_client_options(&config).preview());

        config.preview = true;
        assert!(build_client_options(&config).preview());
    }

    #[test]
    fn options_carry_the_locale_override_exactly() {
        let mut config = sample_config();
        config.default_locale = Some("sv-FI".to_string());
        assert_eq!(
            build_client_options(&config).default_locale(),
            Some("sv-FI")
        );

        config.default_locale = None;
        assert!(build_client_options(&config).default_locale().is_none());
    }

    #[test]
    fn resolving_twice_returns_the_identical_singleton() -> AppResult<()> {
        let provider = ContentfulProvider::new(sample_config());
        let first = provider.resolve()?;
        let second = provider.resolve()?;
        assert!(Arc::ptr_eq(&first, &second));
        Ok(())
    }

    #[test]
    fn contract_and_concrete_views_share_one_instance() -> AppResult<()> {
        let provider = ContentfulProvider::new(sample_config());
        let concrete = provider.resolve()?;
        let contract = provider.delivery()?;
        assert!(std::ptr::eq(
            Arc::as_ptr(&contract).cast::<u8>(),
            Arc::as_ptr(&concrete).cast::<u8>()
        ));
        Ok(())
    }

    #[test]
    fn sample_config_shapes_the_constructed_client() -> AppResult<()> {
        let provider = ContentfulProvider::new(sample_config());
        let client = provider.resolve()?;
        assert!(client.preview());
        assert!(client.base_url().contains(PREVIEW_API_HOST));
        assert_eq!(client.default_locale(), Some("en-US"));
        assert_eq!(client.resource_pool_mode(), ResourcePoolMode::LowMemory);
        assert_eq!(client.space_id(), "s1");
        assert_eq!(client.environment_id(), "e1");
        Ok(())
    }

    #[test]
    fn missing_space_id_fails_resolution() {
        let mut config = sample_config();
        config.space_id = String::new();
        let provider = ContentfulProvider::new(config);

        let result = provider.resolve();
        assert!(matches!(
            result,
            Err(AppError::Delivery {
                operation: "client.new",
                source: DeliveryError::MissingCredential { field: "space_id" },
            })
        ));
    }
}
