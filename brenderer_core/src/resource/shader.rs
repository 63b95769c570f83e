/// Resource-level shader type.
///
/// Wraps a compiled backend program together with the features it was built
/// for and the vertex attributes it reads. Every shader the registry hands
/// out has the five default attributes registered against `Vertex`.

use std::mem::offset_of;
use std::sync::Arc;
use glam::Vec3;
use crate::backend::ShaderProgram;
use crate::resource::shader_source::{ShaderFeatures, ShaderSource};
use crate::resource::vertex::Vertex;

// ===== ATTRIBUTE NAMES =====

pub const ATTRIBUTE_POSITION: &str = "Position";
pub const ATTRIBUTE_NORMAL: &str = "Normal";
pub const ATTRIBUTE_TANGENT: &str = "Tangent";
pub const ATTRIBUTE_BITANGENT: &str = "Bitangent";
pub const ATTRIBUTE_TEXCOORD: &str = "TexCoord";

// ===== VERTEX ATTRIBUTE =====

/// Component type of a vertex attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    Float,
}

/// A named attribute bound to a byte range of each vertex
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexAttribute {
    pub name: String,
    pub components: u32,
    pub component_type: AttributeType,
    pub stride: usize,
    pub offset: usize,
}

// ===== SHADER =====

/// Shader resource
pub struct Shader {
    name: String,
    program: Arc<dyn ShaderProgram>,
    max_lights: u32,
    features: ShaderFeatures,
    ambient_color: Vec3,
    attributes: Vec<VertexAttribute>,
}

impl Shader {
    /// Wrap a compiled program (internal use by ResourceManager)
    pub(crate) fn new(name: &str, program: Arc<dyn ShaderProgram>, source: &ShaderSource) -> Self {
        Self {
            name: name.to_string(),
            program,
            max_lights: source.max_lights(),
            features: source.features(),
            ambient_color: source.ambient_color(),
            attributes: Vec::new(),
        }
    }

    /// Register the default attribute set against the `Vertex` layout
    pub(crate) fn register_default_attributes(&mut self) {
        let stride = Vertex::STRIDE;
        self.register_attribute(ATTRIBUTE_POSITION, 3, stride, offset_of!(Vertex, position));
        self.register_attribute(ATTRIBUTE_NORMAL, 3, stride, offset_of!(Vertex, normal));
        self.register_attribute(ATTRIBUTE_TANGENT, 3, stride, offset_of!(Vertex, tangent));
        self.register_attribute(ATTRIBUTE_BITANGENT, 3, stride, offset_of!(Vertex, bitangent));
        self.register_attribute(ATTRIBUTE_TEXCOORD, 2, stride, offset_of!(Vertex, tex_coord));
    }

    /// Register (or re-register) a float attribute
    pub fn register_attribute(&mut self, name: &str, components: u32, stride: usize, offset: usize) {
        let attribute = VertexAttribute {
            name: name.to_string(),
            components,
            component_type: AttributeType::Float,
            stride,
            offset,
        };
        match self.attributes.iter_mut().find(|a| a.name == name) {
            Some(existing) => *existing = attribute,
            None => self.attributes.push(attribute),
        }
    }

    // ===== ACCESSORS =====

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Compiled backend program
    pub fn program(&self) -> &Arc<dyn ShaderProgram> {
        &self.program
    }

    pub fn max_lights(&self) -> u32 {
        self.max_lights
    }

    pub fn features(&self) -> ShaderFeatures {
        self.features
    }

    /// Ambient color the shader was built with
    pub fn ambient_color(&self) -> Vec3 {
        self.ambient_color
    }

    pub fn attributes(&self) -> &[VertexAttribute] {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&VertexAttribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Whether material content named `uniform` has somewhere to go
    pub fn accepts_uniform(&self, uniform: &str) -> bool {
        self.program.has_uniform(uniform)
    }
}

impl std::fmt::Debug for Shader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shader")
            .field("name", &self.name)
            .field("max_lights", &self.max_lights)
            .field("features", &self.features)
            .field("attributes", &self.attributes.len())
            .finish()
    }
}
