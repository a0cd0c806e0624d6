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

//! Delivery-agnostic content interfaces and DTOs.
//!
//! Layout: `model.rs` (opaque resource envelopes and query payloads),
//! `service.rs` (the capability trait implemented by delivery clients),
//! `error.rs` (typed content errors).

pub mod error;
pub mod model;
pub mod service;

pub use error::{ContentError, ContentResult};
pub use model::{EntriesQuery, Locale, Resource, ResourcePage};
pub use service::ContentDelivery;
