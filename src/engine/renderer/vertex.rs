// Vertex structure for the full-window frame quad

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Vertex in normalised device coordinates
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    /// Position in NDC (-1..1, y up)
    pub position: [f32; 2],
    /// Texture coordinates (UV, v down)
    pub tex_coords: [f32; 2],
}

impl Vertex {
    pub fn new(position: Vec2, tex_coords: Vec2) -> Self {
        Self {
            position: position.to_array(),
            tex_coords: tex_coords.to_array(),
        }
    }

    /// Get the vertex buffer layout descriptor
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // Position
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                // Tex Coords
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// Corner vertices of a quad that fits `content` inside `surface` keeping its aspect ratio
///
/// The unused margin (letterbox or pillarbox) is left to the clear colour.
pub fn letterboxed_quad(content: Vec2, surface: Vec2) -> [Vertex; 4] {
    let scale = (surface.x / content.x).min(surface.y / content.y);
    let half = Vec2::new(
        content.x * scale / surface.x,
        content.y * scale / surface.y,
    );

    [
        Vertex::new(Vec2::new(-half.x, -half.y), Vec2::new(0.0, 1.0)),
        Vertex::new(Vec2::new(half.x, -half.y), Vec2::new(1.0, 1.0)),
        Vertex::new(Vec2::new(half.x, half.y), Vec2::new(1.0, 0.0)),
        Vertex::new(Vec2::new(-half.x, half.y), Vec2::new(0.0, 0.0)),
    ]
}

/// Two counter-clockwise triangles over the quad corners
pub const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];
