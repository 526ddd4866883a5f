//! Image host port for task attachments.

use crate::board::domain::ImageUrl;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for image host operations.
pub type ImageHostResult<T> = Result<T, ImageHostError>;

/// Binary image content submitted with a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    bytes: Vec<u8>,
    content_type: String,
}

impl ImageUpload {
    /// Creates an upload from raw bytes and their MIME type.
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>, content_type: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            content_type: content_type.into(),
        }
    }

    /// Returns the image bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the MIME type as supplied by the client.
    #[must_use]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Returns whether the MIME type names an image.
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.content_type
            .trim()
            .to_ascii_lowercase()
            .starts_with("image/")
    }
}

/// Location of an uploaded image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostedImage {
    /// Public URL the image is served from.
    pub url: ImageUrl,
}

/// Image hosting contract.
#[async_trait]
pub trait ImageHost: Send + Sync {
    /// Uploads `image` and returns where it is served from.
    ///
    /// # Errors
    ///
    /// Returns [`ImageHostError`] when the content is not an image or the
    /// host refuses or fails the upload.
    async fn upload(&self, image: &ImageUpload) -> ImageHostResult<HostedImage>;
}

/// Errors returned by image host adapters.
#[derive(Debug, Clone, Error)]
pub enum ImageHostError {
    /// The upload is not `image/*` content.
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),

    /// The host answered with a non-success status.
    #[error("image host rejected upload with status {status}")]
    Rejected {
        /// Status reported by the host.
        status: u16,
    },

    /// Storage failure inside the host.
    #[error("image host I/O error: {0}")]
    Io(Arc<dyn std::error::Error + Send + Sync>),
}

impl ImageHostError {
    /// Wraps a storage error.
    pub fn io(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Io(Arc::new(err))
    }
}
