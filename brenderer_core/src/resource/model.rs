/// Resource-level model type (meshes and sprites).
///
/// A Model is a list of geometry groups, each drawn with one Material.
/// Sprites are models too: a single textured quad. Both live in the same
/// registry collection, so a sprite and a mesh cannot share a name.

use std::sync::{Arc, Mutex};
use glam::{Vec2, Vec3};
use crate::resource::material::{Material, MaterialData};
use crate::resource::properties::Properties;
use crate::resource::shader::Shader;
use crate::resource::shader_source::{LightingOptions, ShaderStrategy};
use crate::resource::vertex::Vertex;

// ===== LOADER DATA =====

/// One group of parsed geometry and the material it references
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryGroup {
    pub name: String,
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    /// Material content for this group; its `name` is the material identifier
    pub material: MaterialData,
}

/// Parsed model geometry as returned by the model loader
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelData {
    pub groups: Vec<GeometryGroup>,
}

// ===== CONSTRUCTION SOURCES =====

/// How a model's groups obtain their materials
#[derive(Clone)]
pub enum ModelSource {
    /// One material per group, built from the group's material data
    Shader(ShaderStrategy),
    /// Every group uses this material
    Material(Arc<Material>),
}

/// How a sprite obtains its material
#[derive(Clone)]
pub enum SpriteSource {
    /// Use this material as is
    Material(Arc<Material>),
    /// Texture file bound as diffuse map of the given shader
    Texture {
        path: String,
        shader: Option<Arc<Shader>>,
    },
    /// Texture file plus a generated shader
    GeneratedTexture {
        path: String,
        lighting: LightingOptions,
    },
}

// ===== MODEL =====

/// Whether a model was built from geometry or as a sprite quad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    Mesh,
    Sprite,
}

/// A drawable group: geometry plus material
pub struct ModelGroup {
    name: String,
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
    material: Arc<Material>,
}

impl ModelGroup {
    pub(crate) fn new(name: &str, vertices: Vec<Vertex>, indices: Vec<u32>, material: Arc<Material>) -> Self {
        Self {
            name: name.to_string(),
            vertices,
            indices,
            material,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Vertex data as uploaded to a vertex buffer
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index data as uploaded to an index buffer
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    pub fn material(&self) -> &Arc<Material> {
        &self.material
    }
}

/// Model resource
pub struct Model {
    name: String,
    kind: ModelKind,
    groups: Vec<ModelGroup>,
    properties: Option<Arc<Mutex<Properties>>>,
}

impl Model {
    /// Create model from resolved groups (internal use by ResourceManager)
    pub(crate) fn new(
        name: &str,
        kind: ModelKind,
        groups: Vec<ModelGroup>,
        properties: Option<Arc<Mutex<Properties>>>,
    ) -> Self {
        Self {
            name: name.to_string(),
            kind,
            groups,
            properties,
        }
    }

    /// Sprite quad drawn with `material` (internal use by ResourceManager)
    pub(crate) fn sprite(name: &str, material: Arc<Material>, properties: Option<Arc<Mutex<Properties>>>) -> Self {
        let (vertices, indices) = sprite_quad();
        let group = ModelGroup::new(name, vertices, indices, material);
        Self::new(name, ModelKind::Sprite, vec![group], properties)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ModelKind {
        self.kind
    }

    pub fn groups(&self) -> &[ModelGroup] {
        &self.groups
    }

    pub fn group(&self, name: &str) -> Option<&ModelGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Per-model properties shared with the caller
    pub fn properties(&self) -> Option<&Arc<Mutex<Properties>>> {
        self.properties.as_ref()
    }
}

/// Unit quad in the XY plane facing +Z, texture V pointing up
pub fn sprite_quad() -> (Vec<Vertex>, Vec<u32>) {
    let corner = |x: f32, y: f32, u: f32, v: f32| Vertex {
        position: Vec3::new(x, y, 0.0),
        normal: Vec3::Z,
        tangent: Vec3::X,
        bitangent: Vec3::Y,
        tex_coord: Vec2::new(u, v),
    };

    let vertices = vec![
        corner(-1.0, -1.0, 0.0, 0.0),
        corner(1.0, -1.0, 1.0, 0.0),
        corner(1.0, 1.0, 1.0, 1.0),
        corner(-1.0, 1.0, 0.0, 1.0),
    ];
    let indices = vec![0, 1, 2, 2, 3, 0];
    (vertices, indices)
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
