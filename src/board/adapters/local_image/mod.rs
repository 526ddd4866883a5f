//! Filesystem-backed image host.
//!
//! Uploads are written into a single capability-scoped directory and served
//! by whatever static file server fronts that directory.

mod host;

pub use host::LocalImageHost;
