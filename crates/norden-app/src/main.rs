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
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Binary entrypoint that provisions the content-delivery client and
//! reports readiness.

use norden_app::{AppResult, run_app};

/// Bootstraps the Norden application; the provisioned context is handed to
/// the hosting process for its own lifetime management.
fn main() -> AppResult<()> {
    run_app().map(|_context| ())
}
