use std::collections::HashMap;

use crate::{
    foundation::error::{PhotolabError, PhotolabResult},
    raster::buffer::PixelBuffer,
};

/// Mapping from image name to the current buffer under that name.
///
/// Keys are unique and the last write wins; an overwritten buffer is dropped.
#[derive(Clone, Debug, Default)]
pub struct ImageStore {
    images: HashMap<String, PixelBuffer>,
}

impl ImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&PixelBuffer> {
        self.images.get(name)
    }

    /// Like [`ImageStore::get`] but reports a missing name as an error.
    pub fn require(&self, name: &str) -> PhotolabResult<&PixelBuffer> {
        self.images
            .get(name)
            .ok_or_else(|| PhotolabError::missing_image(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.images.contains_key(name)
    }

    /// Store `image` under `name`, returning the buffer it replaced.
    pub fn put(&mut self, name: impl Into<String>, image: PixelBuffer) -> Option<PixelBuffer> {
        let name = name.into();
        tracing::debug!(
            name = %name,
            width = image.width(),
            height = image.height(),
            "store image"
        );
        self.images.insert(name, image)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Stored names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.images.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/store.rs"]
mod tests;
