//! Opaque resource envelopes and query payloads.
//!
//! # Design
//! - Content payloads are never interpreted beyond the `sys.id` envelope;
//!   field access stays with the consuming application.
//! - Collection counters mirror the delivery API envelope verbatim.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ContentError, ContentResult};

/// A single content resource (entry or asset) with its raw payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resource {
    /// Resource identifier taken from the `sys.id` envelope field.
    pub id: String,
    /// Unparsed resource document as returned by the delivery API.
    pub raw: Value,
}

impl Resource {
    /// Wrap a raw delivery payload, extracting the envelope identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::MalformedResource`] when the payload carries
    /// no `sys.id` string.
    pub fn from_raw(raw: Value) -> ContentResult<Self> {
        let id = raw
            .get("sys")
            .and_then(|sys| sys.get("id"))
            .and_then(Value::as_str)
            .ok_or_else(|| ContentError::MalformedResource {
                detail: "payload is missing the sys.id envelope field".to_string(),
            })?
            .to_string();
        Ok(Self { id, raw })
    }
}

/// One page of a resource collection with its envelope counters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResourcePage {
    /// Total number of resources matching the query.
    pub total: u64,
    /// Number of resources skipped before this page.
    pub skip: u64,
    /// Page size requested from the delivery API.
    pub limit: u64,
    /// Resources contained in this page.
    pub items: Vec<Resource>,
}

impl ResourcePage {
    /// Wrap a raw collection payload, extracting counters and items.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::MalformedResource`] when the payload carries
    /// no `items` array or an item lacks its envelope identifier.
    pub fn from_raw(raw: &Value) -> ContentResult<Self> {
        let items = raw
            .get("items")
            .and_then(Value::as_array)
            .ok_or_else(|| ContentError::MalformedResource {
                detail: "collection payload is missing the items array".to_string(),
            })?
            .iter()
            .cloned()
            .map(Resource::from_raw)
            .collect::<ContentResult<Vec<_>>>()?;

        Ok(Self {
            total: envelope_counter(raw, "total"),
            skip: envelope_counter(raw, "skip"),
            limit: envelope_counter(raw, "limit"),
            items,
        })
    }
}

fn envelope_counter(raw: &Value, field: &str) -> u64 {
    raw.get(field).and_then(Value::as_u64).unwrap_or_default()
}

/// Locale metadata published for a space environment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Locale {
    /// Locale code (for example `en-US`).
    pub code: String,
    /// Human-readable locale name.
    pub name: String,
    /// Whether this locale is the space default.
    #[serde(default)]
    pub default: bool,
    /// Locale code consulted when a field has no value in this locale.
    #[serde(default)]
    pub fallback_code: Option<String>,
}

/// Passthrough filter for collection queries; all fields optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntriesQuery {
    /// Restrict results to a single content type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Locale requested for localized fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Page size forwarded to the delivery API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Number of resources to skip before the page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
}
