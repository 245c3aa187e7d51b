// Asset management system
//
// Images decode on background threads and are observed through ready flags;
// nothing in the frame loop ever blocks on an asset.

mod handle;
mod loader;
mod manager;

pub use handle::{AssetId, ImageHandle};
pub use loader::{AssetLoader, AssetType};
pub use manager::{decode_image, AssetManager, AssetStats};

/// Asset loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Failed to load asset: {0}")]
    LoadError(String),

    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Invalid font data")]
    Font(#[from] ab_glyph::InvalidFont),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
