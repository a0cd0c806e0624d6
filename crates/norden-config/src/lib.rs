#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! File- and environment-backed application configuration.
//!
//! Layout: `model.rs` (typed configuration sections), `loader.rs` (YAML
//! loading and environment overrides), `error.rs` (typed errors).
//!
//! The `contentful` section is loaded once during bootstrap and never
//! re-applied; required keys are deliberately NOT validated here — their
//! absence surfaces from the delivery-client constructor.

pub mod error;
pub mod loader;
pub mod model;

pub use error::{ConfigError, ConfigResult};
pub use loader::{CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH, EnvOverrides, load, load_from_path};
pub use model::{AppConfig, ContentfulConfig, LoggingSettings};
