//! # Design
//!
//! - Centralize application-level errors for bootstrap and provisioning.
//! - Keep error messages constant while carrying context fields for
//!   debugging.
//! - Preserve source errors without re-logging at call sites.

use thiserror::Error;

/// Result alias for application operations.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration operations failed.
    #[error("configuration operation failed")]
    Config {
        /// Operation identifier.
        operation: &'static str,
        /// Source configuration error.
        source: norden_config::ConfigError,
    },
    /// Telemetry operations failed.
    #[error("telemetry operation failed")]
    Telemetry {
        /// Operation identifier.
        operation: &'static str,
        /// Source telemetry error.
        source: anyhow::Error,
    },
    /// Delivery-client operations failed.
    #[error("delivery client operation failed")]
    Delivery {
        /// Operation identifier.
        operation: &'static str,
        /// Source delivery-client error.
        source: norden_contentful::DeliveryError,
    },
}

impl AppError {
    pub(crate) const fn config(
        operation: &'static str,
        source: norden_config::ConfigError,
    ) -> Self {
        Self::Config { operation, source }
    }

    pub(crate) const fn telemetry(operation: &'static str, source: anyhow::Error) -> Self {
        Self::Telemetry { operation, source }
    }

    pub(crate) const fn delivery(
        operation: &'static str,
        source: norden_contentful::DeliveryError,
    ) -> Self {
        Self::Delivery { operation, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use norden_config::ConfigError;
    use norden_contentful::DeliveryError;

    #[test]
    fn app_error_helpers_build_variants() {
        let config = AppError::config(
            "load",
            ConfigError::InvalidField {
                section: "contentful",
                field: "preview",
                value: Some("maybe".to_string()),
                reason: "must_be_literal_true_or_false",
            },
        );
        assert!(matches!(config, AppError::Config { .. }));

        let telemetry = AppError::telemetry("init", anyhow::anyhow!("subscriber already set"));
        assert!(matches!(telemetry, AppError::Telemetry { .. }));

        let delivery = AppError::delivery(
            "client.new",
            DeliveryError::MissingCredential { field: "api_key" },
        );
        assert!(matches!(delivery, AppError::Delivery { .. }));
    }
}
