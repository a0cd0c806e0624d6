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

//! Norden application bootstrap wiring.
//!
//! Layout: `bootstrap.rs` (boot sequence), `context.rs` (application
//! context and the content-delivery provider), `error.rs` (typed errors).

/// Application bootstrap and environment loading.
pub mod bootstrap;
/// Application context and content-delivery provisioning.
pub mod context;
/// Application-level error types.
pub mod error;

pub use bootstrap::run_app;
pub use context::{AppContext, ContentfulProvider, build_client_options};
pub use error::{AppError, AppResult};
