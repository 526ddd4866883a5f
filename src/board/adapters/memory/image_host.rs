//! In-memory image host that records uploads.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};
use url::Url;

use crate::board::{
    domain::ImageUrl,
    ports::{HostedImage, ImageHost, ImageHostError, ImageHostResult, ImageUpload},
};

/// Image host keeping uploads in memory and serving them from
/// `memory://images/<n>`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryImageHost {
    state: Arc<RwLock<InMemoryImageState>>,
}

#[derive(Debug, Default)]
struct InMemoryImageState {
    uploads: Vec<ImageUpload>,
    rejection: Option<u16>,
}

impl InMemoryImageHost {
    /// Creates an empty host that accepts every image.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a host that answers every upload with `status`.
    #[must_use]
    pub fn rejecting(status: u16) -> Self {
        let host = Self::new();
        host.set_rejection(Some(status));
        host
    }

    /// Switches the host between accepting (`None`) and rejecting uploads.
    pub fn set_rejection(&self, status: Option<u16>) {
        let mut state = self
            .state
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        state.rejection = status;
    }

    /// Returns the uploads accepted so far.
    #[must_use]
    pub fn uploads(&self) -> Vec<ImageUpload> {
        self.state
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .uploads
            .clone()
    }
}

#[async_trait]
impl ImageHost for InMemoryImageHost {
    async fn upload(&self, image: &ImageUpload) -> ImageHostResult<HostedImage> {
        if !image.is_image() {
            return Err(ImageHostError::UnsupportedContentType(
                image.content_type().to_owned(),
            ));
        }

        let mut state = self
            .state
            .write()
            .map_err(|err| ImageHostError::io(std::io::Error::other(err.to_string())))?;
        if let Some(status) = state.rejection {
            return Err(ImageHostError::Rejected { status });
        }

        state.uploads.push(image.clone());
        let location = format!("memory://images/{}", state.uploads.len());
        let url = Url::parse(&location).map_err(ImageHostError::io)?;
        Ok(HostedImage {
            url: ImageUrl::from_url(url),
        })
    }
}
