// Software canvas: rasterises drawing commands into an RGBA frame

use ab_glyph::{point, Font, FontArc, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};

use super::{Color, DrawingSink, TextStyle};
use crate::core::math::Rect;
use crate::engine::assets::ImageHandle;

/// CPU-side drawing surface with source-over alpha blending
///
/// Sprites are sampled nearest-neighbour so pixel art stays crisp when scaled.
pub struct Canvas {
    frame: RgbaImage,
    font: Option<FontArc>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            frame: RgbaImage::new(width, height),
            font: None,
        }
    }

    /// Attach the font used for text; without one, text is skipped
    pub fn with_font(mut self, font: Option<FontArc>) -> Self {
        self.font = font;
        self
    }

    #[cfg(test)]
    pub(crate) fn has_font(&self) -> bool {
        self.font.is_some()
    }

    pub fn width(&self) -> u32 {
        self.frame.width()
    }

    pub fn height(&self) -> u32 {
        self.frame.height()
    }

    /// The rendered frame
    pub fn frame(&self) -> &RgbaImage {
        &self.frame
    }

    /// Clip a rectangle to whole pixel spans inside the frame
    fn pixel_span(&self, rect: Rect) -> Option<(u32, u32, u32, u32)> {
        if rect.is_empty() {
            return None;
        }
        let x0 = rect.x.round().max(0.0) as u32;
        let y0 = rect.y.round().max(0.0) as u32;
        let x1 = (rect.right().round().max(0.0) as u32).min(self.frame.width());
        let y1 = (rect.bottom().round().max(0.0) as u32).min(self.frame.height());
        (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
    }
}

/// Blend `src` over the pixel at (x, y), scaled by `coverage`
fn blend(frame: &mut RgbaImage, x: i64, y: i64, src: [u8; 4], coverage: f32) {
    if x < 0 || y < 0 || x >= frame.width() as i64 || y >= frame.height() as i64 {
        return;
    }
    let alpha = (src[3] as f32 / 255.0) * coverage.clamp(0.0, 1.0);
    if alpha <= 0.0 {
        return;
    }

    let dst = frame.get_pixel_mut(x as u32, y as u32);
    let inv = 1.0 - alpha;
    let dst_alpha = dst[3] as f32 / 255.0;
    let mix = |s: u8, d: u8| (s as f32 * alpha + d as f32 * inv).round() as u8;
    *dst = Rgba([
        mix(src[0], dst[0]),
        mix(src[1], dst[1]),
        mix(src[2], dst[2]),
        ((alpha + dst_alpha * inv) * 255.0).round() as u8,
    ]);
}

impl DrawingSink for Canvas {
    fn clear(&mut self, color: Color) {
        let pixel = Rgba(color.to_rgba8());
        for p in self.frame.pixels_mut() {
            *p = pixel;
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some((x0, y0, x1, y1)) = self.pixel_span(rect) else {
            return;
        };
        let src = color.to_rgba8();
        for y in y0..y1 {
            for x in x0..x1 {
                blend(&mut self.frame, x as i64, y as i64, src, 1.0);
            }
        }
    }

    fn stroke_rect(&mut self, rect: Rect, line_width: f32, color: Color) {
        let half = line_width / 2.0;
        let outer_w = rect.width + line_width;
        let inner_h = rect.height - line_width;

        self.fill_rect(Rect::new(rect.x - half, rect.y - half, outer_w, line_width), color);
        self.fill_rect(
            Rect::new(rect.x - half, rect.bottom() - half, outer_w, line_width),
            color,
        );
        self.fill_rect(Rect::new(rect.x - half, rect.y + half, line_width, inner_h), color);
        self.fill_rect(
            Rect::new(rect.right() - half, rect.y + half, line_width, inner_h),
            color,
        );
    }

    fn draw_image_region(&mut self, image: &ImageHandle, src: Rect, dst: Rect, flip_x: bool) {
        let Some(pixels) = image.pixels() else {
            return;
        };
        if src.is_empty() {
            return;
        }
        let Some((x0, y0, x1, y1)) = self.pixel_span(dst) else {
            return;
        };

        for y in y0..y1 {
            let v = (y as f32 + 0.5 - dst.y) / dst.height;
            let sy = (src.y + v * src.height).floor();
            if sy < 0.0 || sy >= pixels.height() as f32 {
                continue;
            }
            for x in x0..x1 {
                let mut u = (x as f32 + 0.5 - dst.x) / dst.width;
                if flip_x {
                    u = 1.0 - u;
                }
                let sx = (src.x + u * src.width).floor();
                if sx < 0.0 || sx >= pixels.width() as f32 {
                    continue;
                }
                let texel = pixels.get_pixel(sx as u32, sy as u32).0;
                blend(&mut self.frame, x as i64, y as i64, texel, 1.0);
            }
        }
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: TextStyle, color: Color) {
        let Some(font) = self.font.as_ref() else {
            return;
        };
        let scale = PxScale::from(style.size);
        let scaled = font.as_scaled(scale);
        let src = color.to_rgba8();

        let mut pen_x = x;
        let mut prev = None;
        for ch in text.chars() {
            let id = font.glyph_id(ch);
            if let Some(prev) = prev {
                pen_x += scaled.kern(prev, id);
            }
            let glyph = id.with_scale_and_position(scale, point(pen_x, y));
            if let Some(outline) = font.outline_glyph(glyph) {
                let bounds = outline.px_bounds();
                let left = bounds.min.x.floor() as i64;
                let top = bounds.min.y.floor() as i64;
                let frame = &mut self.frame;
                outline.draw(|gx, gy, coverage| {
                    blend(frame, left + gx as i64, top + gy as i64, src, coverage);
                });
            }
            pen_x += scaled.h_advance(id);
            prev = Some(id);
        }
    }

    fn measure_text_width(&self, text: &str, style: TextStyle) -> f32 {
        let Some(font) = self.font.as_ref() else {
            return 0.0;
        };
        let scaled = font.as_scaled(PxScale::from(style.size));

        let mut width = 0.0;
        let mut prev = None;
        for ch in text.chars() {
            let id = font.glyph_id(ch);
            if let Some(prev) = prev {
                width += scaled.kern(prev, id);
            }
            width += scaled.h_advance(id);
            prev = Some(id);
        }
        width
    }
}
