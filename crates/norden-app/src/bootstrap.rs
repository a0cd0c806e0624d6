//! Application boot sequence.
//!
//! Control flow: load configuration, install the tracing subscriber, build
//! the application context, resolve the provider once so a misconfigured
//! integration fails the startup path instead of the first request. The
//! resolution constructs the client but performs no network IO.

use tracing::info;

use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use norden_config::AppConfig;
use norden_telemetry::{LogFormat, LoggingConfig};

/// Dependencies required to bootstrap the Norden application.
pub(crate) struct BootstrapDependencies {
    config: AppConfig,
}

impl BootstrapDependencies {
    /// Construct production dependencies from the environment for the
    /// binary entrypoint.
    pub(crate) fn from_env() -> AppResult<Self> {
        let config = norden_config::load().map_err(|err| AppError::config("config.load", err))?;
        Ok(Self { config })
    }
}

/// Entry point for the Norden application boot sequence.
///
/// # Errors
///
/// Returns an error if configuration loading, telemetry installation, or
/// client provisioning fails; every failure aborts startup.
pub fn run_app() -> AppResult<AppContext> {
    run_app_with(BootstrapDependencies::from_env()?)
}

/// Boot sequence that relies entirely on injected dependencies to simplify
/// testing.
pub(crate) fn run_app_with(dependencies: BootstrapDependencies) -> AppResult<AppContext> {
    let BootstrapDependencies { config } = dependencies;

    let logging = LoggingConfig {
        level: &config.logging.level,
        format: LogFormat::from_name(config.logging.format.as_deref()),
        build_sha: norden_telemetry::build_sha(),
    };
    norden_telemetry::init_logging(&logging)
        .map_err(|err| AppError::telemetry("telemetry.init", err))?;

    info!("Norden application bootstrap starting");

    let context = AppContext::from_config(config);
    let client = context.contentful().resolve()?;
    info!(
        space_id = client.space_id(),
        environment_id = client.environment_id(),
        base_url = client.base_url(),
        preview = client.preview(),
        default_locale = client.default_locale().unwrap_or("sdk-default"),
        resource_pool = ?client.resource_pool_mode(),
        "content delivery client ready"
    );

    Ok(context)
}
