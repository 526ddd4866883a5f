//! In-memory adapters used by tests and single-process embedding.

mod image_host;
mod preference;
mod task;

pub use image_host::InMemoryImageHost;
pub use preference::InMemoryColumnPreferenceRepository;
pub use task::InMemoryTaskRepository;
