// Central asset management system

use super::{AssetError, AssetId, AssetLoader, AssetType, ImageHandle};
use ab_glyph::FontArc;
use image::RgbaImage;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::path::Path;

/// Central asset manager for the game
///
/// Images are decoded on a background thread and handed back through
/// `ImageHandle`; the frame loop only ever polls their readiness.
pub struct AssetManager {
    /// Asset loader
    loader: AssetLoader,

    /// Images requested so far, keyed by path
    images: HashMap<AssetId, ImageHandle>,
}

impl AssetManager {
    /// Create a new asset manager
    pub fn new<P: AsRef<Path>>(asset_path: P) -> Self {
        Self {
            loader: AssetLoader::new(asset_path),
            images: HashMap::new(),
        }
    }

    /// Request an image; returns immediately with a handle that becomes ready later
    ///
    /// Requesting the same path twice returns the same handle. A failed load is
    /// logged and the handle simply never becomes ready.
    pub fn load_image(&mut self, name: &str) -> ImageHandle {
        let id = AssetId::from_path(name);
        if let Some(handle) = self.images.get(&id) {
            return handle.clone();
        }

        let handle = ImageHandle::pending(name);
        self.images.insert(id, handle.clone());

        let loader = self.loader.clone();
        let slot = handle.clone();
        let name = name.to_string();
        let spawned = std::thread::Builder::new()
            .name(format!("asset:{}", name))
            .spawn(move || {
                match loader
                    .load_bytes(AssetType::Texture, &name)
                    .and_then(|bytes| decode_image(&bytes))
                {
                    Ok(image) => {
                        debug!("Loaded image {} ({}x{})", name, image.width(), image.height());
                        slot.fulfil(image);
                    }
                    Err(e) => warn!("Image {} will not be drawn: {}", name, e),
                }
            });

        if let Err(e) = spawned {
            warn!("Could not start loader thread: {}", e);
        }

        handle
    }

    /// Load the first font found in the fonts directory
    ///
    /// Returns `Ok(None)` when no font file is present.
    pub fn load_font(&self) -> Result<Option<FontArc>, AssetError> {
        let Some(name) = self.loader.list_assets(AssetType::Font)?.into_iter().next() else {
            return Ok(None);
        };

        let bytes = self.loader.load_bytes(AssetType::Font, &name)?;
        let font = FontArc::try_from_vec(bytes)?;
        info!("Loaded font {}", name);
        Ok(Some(font))
    }

    /// Get statistics about requested assets
    pub fn stats(&self) -> AssetStats {
        AssetStats {
            image_count: self.images.len(),
            ready_count: self.images.values().filter(|h| h.is_ready()).count(),
        }
    }

    /// Get the asset loader
    pub fn loader(&self) -> &AssetLoader {
        &self.loader
    }
}

/// Decode encoded image bytes into RGBA pixels
pub fn decode_image(bytes: &[u8]) -> Result<RgbaImage, AssetError> {
    Ok(image::load_from_memory(bytes)?.to_rgba8())
}

/// Statistics about requested assets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetStats {
    pub image_count: usize,
    pub ready_count: usize,
}

impl AssetStats {
    pub fn all_ready(&self) -> bool {
        self.ready_count == self.image_count
    }
}
