//! Error types for content-delivery operations.

use std::error::Error;

use thiserror::Error;

/// Primary error type for content-delivery operations.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Payload did not carry the minimal resource envelope.
    #[error("malformed resource payload")]
    MalformedResource {
        /// Description of the missing or invalid envelope field.
        detail: String,
    },
    /// Requested resource does not exist in the space/environment.
    #[error("resource not found")]
    NotFound {
        /// Identifier of the missing resource.
        resource_id: String,
    },
    /// Operation failed in the underlying delivery client.
    #[error("content operation failed")]
    OperationFailed {
        /// Operation identifier.
        operation: &'static str,
        /// Resource identifier when available.
        resource_id: Option<String>,
        /// Underlying failure.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}

/// Convenience alias for content operation results.
pub type ContentResult<T> = Result<T, ContentError>;
