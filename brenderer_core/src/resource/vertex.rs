/// Per-vertex layout shared by every model and every shader

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

/// Interleaved vertex as uploaded to the GPU
///
/// Shaders bind their attributes against this exact layout.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub tangent: Vec3,
    pub bitangent: Vec3,
    pub tex_coord: Vec2,
}

impl Vertex {
    /// Vertex with only position and texture coordinate set
    pub fn new(position: Vec3, tex_coord: Vec2) -> Self {
        Self {
            position,
            tex_coord,
            ..Self::default()
        }
    }

    /// Size of one vertex in bytes
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}
