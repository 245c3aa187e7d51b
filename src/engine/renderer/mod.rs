// Rendering: a 2D drawing-sink abstraction, a software canvas behind it,
// and a wgpu presenter that puts the canvas on screen

mod canvas;
mod presenter;
#[cfg(test)]
pub mod recording;
mod texture;
mod vertex;

pub use canvas::Canvas;
pub use presenter::Presenter;

use crate::core::math::{lerp, Rect};
use crate::engine::assets::ImageHandle;

/// RGBA colour with components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Build from 8-bit channels, e.g. `#ff4d4d`
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Component-wise interpolation towards `other`
    pub fn lerp(self, other: Color, t: f32) -> Self {
        Self {
            r: lerp(self.r, other.r, t),
            g: lerp(self.g, other.g, t),
            b: lerp(self.b, other.b, t),
            a: lerp(self.a, other.a, t),
        }
    }

    pub fn to_rgba8(self) -> [u8; 4] {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [channel(self.r), channel(self.g), channel(self.b), channel(self.a)]
    }
}

/// Font parameters for text drawing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Pixel height of the font
    pub size: f32,
}

impl TextStyle {
    pub const fn new(size: f32) -> Self {
        Self { size }
    }
}

/// Primitive 2D drawing operations the game renders through
///
/// Coordinates are canvas pixels with a top-left origin. Text `y` is the
/// baseline. Implementations must treat drawing a not-yet-loaded image as a
/// no-op rather than an error.
pub trait DrawingSink {
    /// Fill the whole surface
    fn clear(&mut self, color: Color);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Outline `rect` with a line centred on its edges
    fn stroke_rect(&mut self, rect: Rect, line_width: f32, color: Color);

    /// Copy `src` (image pixels) into `dst` (canvas pixels), optionally mirrored
    fn draw_image_region(&mut self, image: &ImageHandle, src: Rect, dst: Rect, flip_x: bool);

    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: TextStyle, color: Color);

    /// Advance width of `text`; zero when no font is available
    fn measure_text_width(&self, text: &str, style: TextStyle) -> f32;
}
