/// Resource-level material type.
///
/// A Material ties surface content (colors, scalars, texture maps) to the
/// shader that consumes it. Content is described by `MaterialData`, keyed by
/// the well-known names below, which are also the generated shaders' uniform
/// names.
///
/// Construction goes through `ResourceManager`, which resolves the shader
/// (per `ShaderStrategy`) and every bound texture before building the Material.

use std::sync::Arc;
use glam::Vec3;
use rustc_hash::FxHashMap;
use crate::resource::shader::Shader;
use crate::resource::texture::Texture;

// ===== WELL-KNOWN CONTENT KEYS =====

pub const MATERIAL_AMBIENT_COLOR: &str = "ambientColor";
pub const MATERIAL_DIFFUSE_COLOR: &str = "diffuseColor";
pub const MATERIAL_SPECULAR_COLOR: &str = "specularColor";
pub const MATERIAL_SPECULAR_EXPONENT: &str = "specularExponent";
pub const MATERIAL_TRANSPARENCY_VALUE: &str = "transparencyValue";
pub const MATERIAL_DIFFUSE_MAP: &str = "diffuseMap";
pub const MATERIAL_NORMAL_MAP: &str = "normalMap";
pub const MATERIAL_SPECULAR_MAP: &str = "specularMap";

// ===== MATERIAL DATA =====

/// Material content as parsed from a material library or built in code
///
/// Texture entries hold source file paths; they become `Texture` resources
/// when the material is constructed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaterialData {
    pub name: String,
    pub vectors: FxHashMap<String, Vec3>,
    pub scalars: FxHashMap<String, f32>,
    pub textures: FxHashMap<String, String>,
}

impl MaterialData {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_vector(mut self, key: &str, value: Vec3) -> Self {
        self.vectors.insert(key.to_string(), value);
        self
    }

    pub fn with_scalar(mut self, key: &str, value: f32) -> Self {
        self.scalars.insert(key.to_string(), value);
        self
    }

    pub fn with_texture(mut self, key: &str, path: impl Into<String>) -> Self {
        self.textures.insert(key.to_string(), path.into());
        self
    }

    pub fn has_vector(&self, key: &str) -> bool {
        self.vectors.contains_key(key)
    }

    pub fn has_scalar(&self, key: &str) -> bool {
        self.scalars.contains_key(key)
    }

    pub fn has_texture(&self, key: &str) -> bool {
        self.textures.contains_key(key)
    }
}

// ===== MATERIAL =====

/// Material resource: shader plus the content bound to its inputs
pub struct Material {
    name: String,
    shader: Option<Arc<Shader>>,
    vectors: FxHashMap<String, Vec3>,
    scalars: FxHashMap<String, f32>,
    textures: FxHashMap<String, Arc<Texture>>,
}

impl Material {
    /// Material with no content (internal use by ResourceManager)
    pub(crate) fn new(name: &str, shader: Option<Arc<Shader>>) -> Self {
        Self {
            name: name.to_string(),
            shader,
            vectors: FxHashMap::default(),
            scalars: FxHashMap::default(),
            textures: FxHashMap::default(),
        }
    }

    /// Material bound to `data` (internal use by ResourceManager)
    ///
    /// `textures` are the already-resolved texture entries. Vectors and scalars
    /// the shader does not declare are dropped.
    pub(crate) fn from_data(
        name: &str,
        data: &MaterialData,
        textures: FxHashMap<String, Arc<Texture>>,
        shader: Option<Arc<Shader>>,
    ) -> Self {
        let vectors = data
            .vectors
            .iter()
            .filter(|(key, _)| binds(shader.as_ref(), key))
            .map(|(key, value)| (key.clone(), *value))
            .collect();
        let scalars = data
            .scalars
            .iter()
            .filter(|(key, _)| binds(shader.as_ref(), key))
            .map(|(key, value)| (key.clone(), *value))
            .collect();

        Self {
            name: name.to_string(),
            shader,
            vectors,
            scalars,
            textures,
        }
    }

    // ===== ACCESSORS =====

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `None` when shader resolution failed; such materials are not drawable
    pub fn shader(&self) -> Option<&Arc<Shader>> {
        self.shader.as_ref()
    }

    pub fn vector(&self, key: &str) -> Option<Vec3> {
        self.vectors.get(key).copied()
    }

    pub fn scalar(&self, key: &str) -> Option<f32> {
        self.scalars.get(key).copied()
    }

    pub fn texture(&self, key: &str) -> Option<&Arc<Texture>> {
        self.textures.get(key)
    }

    pub fn vector_count(&self) -> usize {
        self.vectors.len()
    }

    pub fn scalar_count(&self) -> usize {
        self.scalars.len()
    }

    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }
}

/// Whether content named `key` is bound for `shader` (everything binds without one)
pub(crate) fn binds(shader: Option<&Arc<Shader>>, key: &str) -> bool {
    shader.map_or(true, |shader| shader.accepts_uniform(key))
}

#[cfg(test)]
#[path = "material_tests.rs"]
mod tests;
