//! HTTP delivery client implementing the content contract.
//!
//! # Design
//! - Construction validates credentials and wires the HTTP client but
//!   performs no network IO; the first request happens on the first fetch.
//! - Responses stay opaque `serde_json` documents apart from the envelope
//!   fields the core DTOs name.
//! - No retry and no pagination driving; one request per operation.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::debug;

use crate::error::{DeliveryError, DeliveryResult};
use crate::options::ClientOptions;
use crate::pool::{ResourcePool, ResourcePoolMode};
use norden_content_core::{
    ContentDelivery, ContentError, EntriesQuery, Locale, Resource, ResourcePage,
};

/// Configured client for one space environment of the delivery API.
#[derive(Debug)]
pub struct DeliveryClient {
    http: reqwest::Client,
    base_url: String,
    space_id: String,
    environment_id: String,
    options: ClientOptions,
    pool: ResourcePool,
}

impl DeliveryClient {
    /// Construct a client for the given space environment.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::MissingCredential`] when `api_key`,
    /// `space_id` or `environment_id` is absent or empty,
    /// [`DeliveryError::InvalidCredential`] when the API key cannot be used
    /// as an authorization header, and [`DeliveryError::ClientBuild`] when
    /// the HTTP client cannot be assembled.
    pub fn new(
        api_key: impl Into<String>,
        space_id: impl Into<String>,
        environment_id: impl Into<String>,
        options: ClientOptions,
    ) -> DeliveryResult<Self> {
        let api_key = api_key.into();
        let space_id = space_id.into();
        let environment_id = environment_id.into();
        require_credential("api_key", &api_key)?;
        require_credential("space_id", &space_id)?;
        require_credential("environment_id", &environment_id)?;

        let mut auth = HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|_| {
            DeliveryError::InvalidCredential {
                field: "api_key",
                reason: "not_a_valid_header_value",
            }
        })?;
        auth.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|source| DeliveryError::ClientBuild { source })?;

        let base_url = format!(
            "https://{}/spaces/{space_id}/environments/{environment_id}",
            options.host()
        );
        let pool_mode = if options.low_memory_resource_pool() {
            ResourcePoolMode::LowMemory
        } else {
            ResourcePoolMode::Standard
        };

        Ok(Self {
            http,
            base_url,
            space_id,
            environment_id,
            options,
            pool: ResourcePool::new(pool_mode),
        })
    }

    /// Identifier of the configured space.
    #[must_use]
    pub fn space_id(&self) -> &str {
        &self.space_id
    }

    /// Identifier of the configured environment.
    #[must_use]
    pub fn environment_id(&self) -> &str {
        &self.environment_id
    }

    /// Root URL every request is derived from.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether the client targets the preview API.
    #[must_use]
    pub const fn preview(&self) -> bool {
        self.options.preview()
    }

    /// Locale applied when a request does not specify one.
    #[must_use]
    pub fn default_locale(&self) -> Option<&str> {
        self.options.default_locale()
    }

    /// Retention strategy selected for the resource pool.
    #[must_use]
    pub const fn resource_pool_mode(&self) -> ResourcePoolMode {
        self.pool.mode()
    }

    async fn fetch(
        &self,
        operation: &'static str,
        path: &str,
        params: &[(&str, String)],
    ) -> DeliveryResult<Value> {
        let url = format!("{}/{path}", self.base_url);
        debug!(operation, url = %url, "fetching delivery resource");
        let response = self
            .http
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|source| DeliveryError::Http {
                operation,
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DeliveryError::Status {
                operation,
                url,
                status: status.as_u16(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|source| DeliveryError::Decode {
                operation,
                url,
                source,
            })
    }

    async fn single(
        &self,
        operation: &'static str,
        collection: &'static str,
        id: &str,
    ) -> Result<Resource, ContentError> {
        if let Some(pooled) = self.pool.get(collection, id) {
            return Ok(pooled);
        }

        let params = self.single_params();
        let raw = self
            .fetch(operation, &format!("{collection}/{id}"), &params)
            .await
            .map_err(|err| match err {
                DeliveryError::Status { status: 404, .. } => ContentError::NotFound {
                    resource_id: id.to_string(),
                },
                other => ContentError::OperationFailed {
                    operation,
                    resource_id: Some(id.to_string()),
                    source: Box::new(other),
                },
            })?;

        let resource = Resource::from_raw(raw)?;
        self.pool.store(collection, id, &resource);
        Ok(resource)
    }

    async fn page(
        &self,
        operation: &'static str,
        collection: &'static str,
        query: EntriesQuery,
    ) -> Result<ResourcePage, ContentError> {
        let params = self.page_params(query);
        let raw = self
            .fetch(operation, collection, &params)
            .await
            .map_err(|source| ContentError::OperationFailed {
                operation,
                resource_id: None,
                source: Box::new(source),
            })?;
        ResourcePage::from_raw(&raw)
    }

    fn single_params(&self) -> Vec<(&'static str, String)> {
        self.options
            .default_locale()
            .map(|code| ("locale", code.to_string()))
            .into_iter()
            .collect()
    }

    fn page_params(&self, query: EntriesQuery) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(content_type) = query.content_type {
            params.push(("content_type", content_type));
        }
        let locale = query
            .locale
            .or_else(|| self.options.default_locale().map(str::to_string));
        if let Some(code) = locale {
            params.push(("locale", code));
        }
        if let Some(limit) = query.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(skip) = query.skip {
            params.push(("skip", skip.to_string()));
        }
        params
    }
}

#[async_trait]
impl ContentDelivery for DeliveryClient {
    async fn entry(&self, id: &str) -> anyhow::Result<Resource> {
        Ok(self.single("entry", "entries", id).await?)
    }

    async fn entries(&self, query: EntriesQuery) -> anyhow::Result<ResourcePage> {
        Ok(self.page("entries", "entries", query).await?)
    }

    async fn asset(&self, id: &str) -> anyhow::Result<Resource> {
        Ok(self.single("asset", "assets", id).await?)
    }

    async fn assets(&self, query: EntriesQuery) -> anyhow::Result<ResourcePage> {
        Ok(self.page("assets", "assets", query).await?)
    }

    async fn locales(&self) -> anyhow::Result<Vec<Locale>> {
        let raw = self
            .fetch("locales", "locales", &[])
            .await
            .map_err(|source| ContentError::OperationFailed {
                operation: "locales",
                resource_id: None,
                source: Box::new(source),
            })?;

        let items = raw
            .get("items")
            .and_then(Value::as_array)
            .ok_or_else(|| ContentError::MalformedResource {
                detail: "locales payload is missing the items array".to_string(),
            })?;
        let locales = items
            .iter()
            .cloned()
            .map(serde_json::from_value::<Locale>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| ContentError::MalformedResource {
                detail: format!("invalid locale payload: {err}"),
            })?;
        Ok(locales)
    }
}

fn require_credential(field: &'static str, value: &str) -> DeliveryResult<()> {
    if value.trim().is_empty() {
        return Err(DeliveryError::MissingCredential { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{DELIVERY_API_HOST, PREVIEW_API_HOST};
    use serde_json::json;

    fn client(options: ClientOptions) -> DeliveryResult<DeliveryClient> {
        DeliveryClient::new("key-1", "space-1", "master", options)
    }

    #[test]
    fn construction_rejects_missing_credentials() {
        let missing_key = DeliveryClient::new("", "space-1", "master", ClientOptions::new());
        assert!(matches!(
            missing_key,
            Err(DeliveryError::MissingCredential { field: "api_key" })
        ));

        let missing_space = DeliveryClient::new("key-1", "  ", "master", ClientOptions::new());
        assert!(matches!(
            missing_space,
            Err(DeliveryError::MissingCredential { field: "space_id" })
        ));

        let missing_environment = DeliveryClient::new("key-1", "space-1", "", ClientOptions::new());
        assert!(matches!(
            missing_environment,
            Err(DeliveryError::MissingCredential {
                field: "environment_id"
            })
        ));
    }

    #[test]
    fn construction_rejects_unprintable_api_key() {
        let result = DeliveryClient::new("key\nwith-newline", "space-1", "master", ClientOptions::new());
        assert!(matches!(
            result,
            Err(DeliveryError::InvalidCredential {
                field: "api_key",
                ..
            })
        ));
    }

    #[test]
    fn defaults_target_published_content() -> DeliveryResult<()> {
        let client = client(ClientOptions::new())?;
        assert_eq!(
            client.base_url(),
            format!("https://{DELIVERY_API_HOST}/spaces/space-1/environments/master")
        );
        assert!(!client.preview());
        assert!(client.default_locale().is_none());
        assert_eq!(client.resource_pool_mode(), ResourcePoolMode::Standard);
        Ok(())
    }

    #[test]
    fn options_shape_the_constructed_client() -> DeliveryResult<()> {
        let client = client(
            ClientOptions::new()
                .using_preview_api()
                .with_default_locale("en-US")
                .with_low_memory_resource_pool(),
        )?;
        assert_eq!(
            client.base_url(),
            format!("https://{PREVIEW_API_HOST}/spaces/space-1/environments/master")
        );
        assert!(client.preview());
        assert_eq!(client.default_locale(), Some("en-US"));
        assert_eq!(client.resource_pool_mode(), ResourcePoolMode::LowMemory);
        assert_eq!(client.space_id(), "space-1");
        assert_eq!(client.environment_id(), "master");
        Ok(())
    }

    #[test]
    fn default_locale_is_applied_when_requests_do_not_name_one() -> DeliveryResult<()> {
        let client = client(ClientOptions::new().with_default_locale("en-US"))?;
        assert_eq!(
            client.single_params(),
            vec![("locale", "en-US".to_string())]
        );

        let fallback = client.page_params(EntriesQuery::default());
        assert_eq!(fallback, vec![("locale", "en-US".to_string())]);

        let explicit = client.page_params(EntriesQuery {
            locale: Some("sv-FI".to_string()),
            ..EntriesQuery::default()
        });
        assert_eq!(explicit, vec![("locale", "sv-FI".to_string())]);
        Ok(())
    }

    #[test]
    fn page_params_forward_every_filter() -> DeliveryResult<()> {
        let client = client(ClientOptions::new())?;
        assert!(client.single_params().is_empty());

        let params = client.page_params(EntriesQuery {
            content_type: Some("article".to_string()),
            locale: None,
            limit: Some(25),
            skip: Some(50),
        });
        assert_eq!(
            params,
            vec![
                ("content_type", "article".to_string()),
                ("limit", "25".to_string()),
                ("skip", "50".to_string()),
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn entry_is_served_from_the_pool() -> anyhow::Result<()> {
        let client = client(ClientOptions::new())?;
        let resource = Resource::from_raw(json!({ "sys": { "id": "welcome" } }))?;
        client.pool.store("entries", "welcome", &resource);

        let fetched = client.entry("welcome").await?;
        assert_eq!(fetched, resource);
        Ok(())
    }
}
