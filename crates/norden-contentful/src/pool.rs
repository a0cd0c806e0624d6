//! In-process resource pool backing single-resource fetches.
//!
//! # Design
//! - Standard mode memoizes fetched resources by collection and id.
//! - Low-memory mode retains nothing; every fetch goes to the wire.
//! - A poisoned lock degrades to pool misses rather than failing fetches.

use std::collections::HashMap;
use std::sync::Mutex;

use norden_content_core::Resource;

/// Resource retention strategy selected at client construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourcePoolMode {
    /// Retain fetched resources for the lifetime of the client.
    Standard,
    /// Retain nothing between fetches.
    LowMemory,
}

/// Mode-aware resource store shared by the client's fetch paths.
#[derive(Debug)]
pub(crate) struct ResourcePool {
    mode: ResourcePoolMode,
    resources: Mutex<HashMap<String, Resource>>,
}

impl ResourcePool {
    pub(crate) fn new(mode: ResourcePoolMode) -> Self {
        Self {
            mode,
            resources: Mutex::new(HashMap::new()),
        }
    }

    pub(crate) const fn mode(&self) -> ResourcePoolMode {
        self.mode
    }

    pub(crate) fn get(&self, collection: &str, id: &str) -> Option<Resource> {
        if self.mode == ResourcePoolMode::LowMemory {
            return None;
        }
        let guard = self.resources.lock().ok()?;
        guard.get(&pool_key(collection, id)).cloned()
    }

    pub(crate) fn store(&self, collection: &str, id: &str, resource: &Resource) {
        if self.mode == ResourcePoolMode::LowMemory {
            return;
        }
        if let Ok(mut guard) = self.resources.lock() {
            guard.insert(pool_key(collection, id), resource.clone());
        }
    }

    #[cfg(test)]
    pub(crate) fn retained(&self) -> usize {
        self.resources.lock().map(|guard| guard.len()).unwrap_or(0)
    }
}

fn pool_key(collection: &str, id: &str) -> String {
    format!("{collection}:{id}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use norden_content_core::ContentResult;
    use serde_json::json;

    fn sample(id: &str) -> ContentResult<Resource> {
        Resource::from_raw(json!({ "sys": { "id": id } }))
    }

    #[test]
    fn standard_pool_memoizes_by_collection_and_id() -> ContentResult<()> {
        let pool = ResourcePool::new(ResourcePoolMode::Standard);
        let resource = sample("nyan")?;
        pool.store("entries", "nyan", &resource);

        assert_eq!(pool.get("entries", "nyan"), Some(resource));
        assert!(pool.get("assets", "nyan").is_none());
        assert_eq!(pool.retained(), 1);
        Ok(())
    }

    #[test]
    fn low_memory_pool_retains_nothing() -> ContentResult<()> {
        let pool = ResourcePool::new(ResourcePoolMode::LowMemory);
        let resource = sample("nyan")?;
        pool.store("entries", "nyan", &resource);

        assert!(pool.get("entries", "nyan").is_none());
        assert_eq!(pool.retained(), 0);
        assert_eq!(pool.mode(), ResourcePoolMode::LowMemory);
        Ok(())
    }
}
