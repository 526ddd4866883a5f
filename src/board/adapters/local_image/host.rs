//! Content-addressed image storage in a local directory.

use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use sha2::{Digest, Sha256};
use std::sync::Arc;
use url::Url;

use crate::board::{
    domain::ImageUrl,
    ports::{HostedImage, ImageHost, ImageHostError, ImageHostResult, ImageUpload},
};

/// Image host writing uploads to `<root>/<sha256>.<ext>` and serving them
/// under a public base URL.
///
/// Identical uploads map to the same file and URL.
#[derive(Debug, Clone)]
pub struct LocalImageHost {
    root: Arc<Dir>,
    public_base_url: Url,
}

impl LocalImageHost {
    /// Opens `root` (which must exist) as the image directory.
    ///
    /// `public_base_url` should end with `/` so that file names are appended
    /// rather than replacing the last path segment.
    ///
    /// # Errors
    ///
    /// Returns [`ImageHostError::Io`] when the directory cannot be opened.
    pub fn open(root: &Utf8Path, public_base_url: Url) -> ImageHostResult<Self> {
        let dir = Dir::open_ambient_dir(root, ambient_authority()).map_err(ImageHostError::io)?;
        Ok(Self::from_dir(dir, public_base_url))
    }

    /// Wraps an already opened directory.
    #[must_use]
    pub fn from_dir(root: Dir, public_base_url: Url) -> Self {
        Self {
            root: Arc::new(root),
            public_base_url,
        }
    }

    /// Returns the base URL uploads are served under.
    #[must_use]
    pub const fn public_base_url(&self) -> &Url {
        &self.public_base_url
    }
}

/// Derives the stored file name from the content digest and MIME subtype.
fn file_name_for(image: &ImageUpload) -> String {
    let digest = Sha256::digest(image.bytes());
    let mut name: String = digest.iter().map(|byte| format!("{byte:02x}")).collect();
    name.push('.');
    name.push_str(&extension_for(image.content_type()));
    name
}

fn extension_for(content_type: &str) -> String {
    let subtype = content_type
        .trim()
        .split_once('/')
        .map(|(_, subtype)| subtype)
        .unwrap_or_default();
    let base_subtype = subtype.split(['+', ';']).next().unwrap_or_default();
    match base_subtype.to_ascii_lowercase().as_str() {
        "jpeg" | "pjpeg" => "jpg".to_owned(),
        other if !other.is_empty() && other.chars().all(|c| c.is_ascii_alphanumeric()) => {
            other.to_owned()
        }
        _ => "bin".to_owned(),
    }
}

#[async_trait]
impl ImageHost for LocalImageHost {
    async fn upload(&self, image: &ImageUpload) -> ImageHostResult<HostedImage> {
        if !image.is_image() {
            return Err(ImageHostError::UnsupportedContentType(
                image.content_type().to_owned(),
            ));
        }

        let file_name = file_name_for(image);
        let url = self
            .public_base_url
            .join(&file_name)
            .map_err(ImageHostError::io)?;

        let root = Arc::clone(&self.root);
        let bytes = image.bytes().to_vec();
        let stored_name = file_name.clone();
        tokio::task::spawn_blocking(move || root.write(stored_name, bytes))
            .await
            .map_err(ImageHostError::io)?
            .map_err(ImageHostError::io)?;

        tracing::debug!(file = %file_name, url = %url, "stored uploaded image");
        Ok(HostedImage {
            url: ImageUrl::from_url(url),
        })
    }
}
