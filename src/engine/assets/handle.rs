// Shared handles to assets that may still be loading

use image::RgbaImage;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Unique identifier for an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetId(pub(crate) u64);

impl AssetId {
    /// Create a new asset ID from a string path
    pub fn from_path(path: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        path.hash(&mut hasher);
        Self(hasher.finish())
    }
}

/// Handle to an image that is decoded in the background
///
/// Cloning is cheap; every clone observes the same write-once slot. Until the
/// decode finishes `is_ready()` is false and `pixels()` is `None`, and callers
/// are expected to skip drawing rather than wait.
#[derive(Clone)]
pub struct ImageHandle {
    id: AssetId,
    slot: Arc<OnceLock<RgbaImage>>,
}

impl ImageHandle {
    /// A handle whose pixels have not arrived yet
    pub fn pending(name: &str) -> Self {
        Self {
            id: AssetId::from_path(name),
            slot: Arc::new(OnceLock::new()),
        }
    }

    /// A handle that is ready immediately
    #[cfg(test)]
    pub(crate) fn from_image(name: &str, image: RgbaImage) -> Self {
        let handle = Self::pending(name);
        handle.fulfil(image);
        handle
    }

    /// Store the decoded pixels; returns false if the slot was already filled
    pub(crate) fn fulfil(&self, image: RgbaImage) -> bool {
        self.slot.set(image).is_ok()
    }

    #[cfg(test)]
    pub(crate) fn id(&self) -> AssetId {
        self.id
    }

    pub fn is_ready(&self) -> bool {
        self.slot.get().is_some()
    }

    /// `(width, height)` in pixels once loaded
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.slot.get().map(|image| image.dimensions())
    }

    pub fn pixels(&self) -> Option<&RgbaImage> {
        self.slot.get()
    }
}

impl fmt::Debug for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageHandle")
            .field("id", &self.id)
            .field("dimensions", &self.dimensions())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_id_from_path() {
        let id1 = AssetId::from_path("textures/player.png");
        let id2 = AssetId::from_path("textures/player.png");
        let id3 = AssetId::from_path("textures/enemy.png");

        assert_eq!(id1, id2, "Same paths should produce same IDs");
        assert_ne!(id1, id3, "Different paths should produce different IDs");
    }

    #[test]
    fn test_pending_handle_is_not_ready() {
        let handle = ImageHandle::pending("Idle.png");
        assert!(!handle.is_ready());
        assert_eq!(handle.dimensions(), None);
        assert!(handle.pixels().is_none());
    }

    #[test]
    fn test_clones_observe_fulfilment() {
        let handle = ImageHandle::pending("Idle.png");
        let observer = handle.clone();

        assert!(handle.fulfil(RgbaImage::new(800, 200)));
        assert!(observer.is_ready());
        assert_eq!(observer.dimensions(), Some((800, 200)));
    }

    #[test]
    fn test_fulfil_is_write_once() {
        let handle = ImageHandle::from_image("Run.png", RgbaImage::new(16, 16));
        assert!(!handle.fulfil(RgbaImage::new(32, 32)));
        assert_eq!(handle.dimensions(), Some((16, 16)));
    }
}
