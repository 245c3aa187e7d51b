// Drawing sink that records commands instead of rasterising them

use super::{Color, DrawingSink, TextStyle};
use crate::core::math::Rect;
use crate::engine::assets::{AssetId, ImageHandle};

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        line_width: f32,
        color: Color,
    },
    Image {
        image: AssetId,
        src: Rect,
        dst: Rect,
        flip_x: bool,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        color: Color,
    },
}

/// Records every call; text is measured as a fixed half-em per character
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn images(&self) -> Vec<(AssetId, Rect, Rect, bool)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Image {
                    image,
                    src,
                    dst,
                    flip_x,
                } => Some((*image, *src, *dst, *flip_x)),
                _ => None,
            })
            .collect()
    }

    pub fn strokes(&self) -> Vec<Rect> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::StrokeRect { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect()
    }

    pub fn fills(&self) -> Vec<(Rect, Color)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillRect { rect, color } => Some((*rect, *color)),
                _ => None,
            })
            .collect()
    }
}

impl DrawingSink for RecordingSink {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, line_width: f32, color: Color) {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            line_width,
            color,
        });
    }

    fn draw_image_region(&mut self, image: &ImageHandle, src: Rect, dst: Rect, flip_x: bool) {
        self.commands.push(DrawCommand::Image {
            image: image.id(),
            src,
            dst,
            flip_x,
        });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: TextStyle, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            size: style.size,
            color,
        });
    }

    fn measure_text_width(&self, text: &str, style: TextStyle) -> f32 {
        text.chars().count() as f32 * style.size * 0.5
    }
}
