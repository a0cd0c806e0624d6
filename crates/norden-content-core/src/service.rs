//! Capability trait implemented by content-delivery clients.

use async_trait::async_trait;

use crate::model::{EntriesQuery, Locale, Resource, ResourcePage};

/// Minimal content-delivery surface consumed by the application.
///
/// Implementations are constructed once during bootstrap and shared behind
/// an `Arc`; every method must therefore be safe for concurrent use.
#[async_trait]
pub trait ContentDelivery: Send + Sync {
    /// Fetch a single entry by identifier.
    async fn entry(&self, id: &str) -> anyhow::Result<Resource>;

    /// Fetch a page of entries matching the query.
    async fn entries(&self, query: EntriesQuery) -> anyhow::Result<ResourcePage>;

    /// Fetch a single asset by identifier.
    async fn asset(&self, id: &str) -> anyhow::Result<Resource>;

    /// Fetch a page of assets matching the query.
    async fn assets(&self, query: EntriesQuery) -> anyhow::Result<ResourcePage>;

    /// Fetch the locales published for the configured environment.
    async fn locales(&self) -> anyhow::Result<Vec<Locale>>;
}
