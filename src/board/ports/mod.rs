//! Port contracts for the task board.
//!
//! Ports define infrastructure-agnostic interfaces used by board services:
//! the task store, the column preference store and the image host.

pub mod filter;
pub mod image_host;
pub mod preference;
pub mod repository;

pub use filter::{IndexRange, IndexShift, TaskFilter};
pub use image_host::{HostedImage, ImageHost, ImageHostError, ImageHostResult, ImageUpload};
pub use preference::{
    ColumnPreferenceRepository, ColumnPreferenceRepositoryError, ColumnPreferenceRepositoryResult,
};
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
