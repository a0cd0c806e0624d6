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

//! Contentful content-delivery client.
//!
//! Layout: `options.rs` (client options and API host selection),
//! `client.rs` (the HTTP client implementing the delivery contract),
//! `pool.rs` (the in-process resource pool), `error.rs` (typed errors).

pub mod client;
pub mod error;
pub mod options;
pub mod pool;

pub use client::DeliveryClient;
pub use error::{DeliveryError, DeliveryResult};
pub use options::{ClientOptions, DELIVERY_API_HOST, PREVIEW_API_HOST};
pub use pool::ResourcePoolMode;
