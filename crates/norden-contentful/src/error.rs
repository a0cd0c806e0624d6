//! Error types for the delivery client.

use thiserror::Error;

/// Primary error type for delivery-client operations.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// A required client credential was absent or empty.
    #[error("missing client credential")]
    MissingCredential {
        /// Name of the absent credential field.
        field: &'static str,
    },
    /// A client credential was present but unusable.
    #[error("invalid client credential")]
    InvalidCredential {
        /// Name of the rejected credential field.
        field: &'static str,
        /// Machine-readable reason for the rejection.
        reason: &'static str,
    },
    /// The underlying HTTP client could not be constructed.
    #[error("failed to build http client")]
    ClientBuild {
        /// Source HTTP client error.
        source: reqwest::Error,
    },
    /// An HTTP request failed before a response was received.
    #[error("http request failed")]
    Http {
        /// Operation identifier.
        operation: &'static str,
        /// URL used for the request.
        url: String,
        /// Source HTTP client error.
        source: reqwest::Error,
    },
    /// The delivery API returned a non-success status.
    #[error("http response status error")]
    Status {
        /// Operation identifier.
        operation: &'static str,
        /// URL used for the request.
        url: String,
        /// HTTP status code returned by the server.
        status: u16,
    },
    /// The response body could not be decoded as JSON.
    #[error("failed to decode response body")]
    Decode {
        /// Operation identifier.
        operation: &'static str,
        /// URL used for the request.
        url: String,
        /// Source decoding error.
        source: reqwest::Error,
    },
}

/// Convenience alias for delivery-client results.
pub type DeliveryResult<T> = Result<T, DeliveryError>;
