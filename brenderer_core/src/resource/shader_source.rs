/// Shader feature flags, selection strategies and source descriptors.
///
/// A `ShaderSource` is the value handed to the shader compiler. It is built
/// either from a `.vert`/`.frag` file pair or procedurally from feature flags,
/// and carries both configured version lines so the compiler can pick the one
/// matching its platform.

use std::sync::Arc;
use bitflags::bitflags;
use glam::Vec3;
use crate::backend::FileSystem;
use crate::error::{Error, Result};
use crate::resource::config::RegistryConfig;
use crate::resource::material::{
    MaterialData, MATERIAL_AMBIENT_COLOR, MATERIAL_DIFFUSE_COLOR, MATERIAL_DIFFUSE_MAP,
    MATERIAL_NORMAL_MAP, MATERIAL_SPECULAR_COLOR, MATERIAL_SPECULAR_EXPONENT,
    MATERIAL_SPECULAR_MAP, MATERIAL_TRANSPARENCY_VALUE,
};
use crate::resource::shader::Shader;
use crate::resource::shader_generator;

// ===== FEATURE FLAGS =====

bitflags! {
    /// Lighting terms and material channels a shader supports
    ///
    /// Flag names double as the `#define`s emitted into shader sources.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ShaderFeatures: u32 {
        const AMBIENT_LIGHTING     = 1 << 0;
        const DIFFUSE_LIGHTING     = 1 << 1;
        const SPECULAR_LIGHTING    = 1 << 2;
        const AMBIENT_COLOR        = 1 << 3;
        const DIFFUSE_COLOR        = 1 << 4;
        const SPECULAR_COLOR       = 1 << 5;
        const DIFFUSE_MAP          = 1 << 6;
        const NORMAL_MAP           = 1 << 7;
        const SPECULAR_MAP         = 1 << 8;
        const TRANSPARENCY         = 1 << 9;
        const VARIABLE_LIGHT_COUNT = 1 << 10;
    }
}

impl ShaderFeatures {
    /// The three lighting terms
    pub const LIGHTING: Self = Self::AMBIENT_LIGHTING
        .union(Self::DIFFUSE_LIGHTING)
        .union(Self::SPECULAR_LIGHTING);
}

// ===== DESCRIPTORS =====

/// Lighting options every shader strategy takes from the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightingOptions {
    pub max_lights: u32,
    pub variable_light_count: bool,
    pub ambient_lighting: bool,
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            max_lights: 4,
            variable_light_count: false,
            ambient_lighting: true,
        }
    }
}

/// What a shader must support: light budget plus feature flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShaderDesc {
    pub max_lights: u32,
    pub features: ShaderFeatures,
}

impl ShaderDesc {
    pub fn new(max_lights: u32, features: ShaderFeatures) -> Self {
        Self { max_lights, features }
    }

    /// Lighting-only request for a file shader, derived from material content
    ///
    /// Diffuse lighting follows a diffuse color or map. Specular lighting needs
    /// a specular exponent and at least one light. Ambient lighting is the
    /// caller's choice.
    pub fn for_material_file(material: &MaterialData, options: LightingOptions) -> Self {
        let mut features = ShaderFeatures::empty();
        features.set(ShaderFeatures::AMBIENT_LIGHTING, options.ambient_lighting);
        features.set(
            ShaderFeatures::DIFFUSE_LIGHTING,
            material.has_vector(MATERIAL_DIFFUSE_COLOR) || material.has_texture(MATERIAL_DIFFUSE_MAP),
        );
        features.set(
            ShaderFeatures::SPECULAR_LIGHTING,
            options.max_lights > 0 && material.has_scalar(MATERIAL_SPECULAR_EXPONENT),
        );
        features.set(ShaderFeatures::VARIABLE_LIGHT_COUNT, options.variable_light_count);
        Self::new(options.max_lights, features)
    }

    /// Full feature summary of a material, for procedural generation
    pub fn for_material(material: &MaterialData, options: LightingOptions) -> Self {
        let mut desc = Self::for_material_file(material, options);
        let features = &mut desc.features;
        features.set(ShaderFeatures::AMBIENT_COLOR, material.has_vector(MATERIAL_AMBIENT_COLOR));
        features.set(ShaderFeatures::DIFFUSE_COLOR, material.has_vector(MATERIAL_DIFFUSE_COLOR));
        features.set(ShaderFeatures::SPECULAR_COLOR, material.has_vector(MATERIAL_SPECULAR_COLOR));
        features.set(ShaderFeatures::DIFFUSE_MAP, material.has_texture(MATERIAL_DIFFUSE_MAP));
        features.set(ShaderFeatures::NORMAL_MAP, material.has_texture(MATERIAL_NORMAL_MAP));
        features.set(ShaderFeatures::SPECULAR_MAP, material.has_texture(MATERIAL_SPECULAR_MAP));
        features.set(ShaderFeatures::TRANSPARENCY, material.has_scalar(MATERIAL_TRANSPARENCY_VALUE));
        desc
    }
}

/// How a material (or model) obtains its shader
#[derive(Clone)]
pub enum ShaderStrategy {
    /// Load `<material name>.vert/.frag`, lighting derived from the material
    FromFile(LightingOptions),
    /// Generate from the material's feature summary
    Generated(LightingOptions),
    /// Use this shader; `None` builds a material without one
    Resolved(Option<Arc<Shader>>),
}

// ===== SHADER SOURCE =====

/// Platform a version line targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderTarget {
    Desktop,
    Es,
}

/// Where a shader source came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShaderOrigin {
    File {
        vertex_path: String,
        fragment_path: String,
    },
    Generated,
}

/// Compiler input: both stages, both version lines, and the request that produced them
#[derive(Debug, Clone)]
pub struct ShaderSource {
    origin: ShaderOrigin,
    vertex: String,
    fragment: String,
    version_desktop: String,
    version_es: String,
    max_lights: u32,
    features: ShaderFeatures,
    ambient_color: Vec3,
    load_error: Option<String>,
}

impl ShaderSource {
    /// Read `<base>.vert` and `<base>.frag` and prepend the feature prelude
    ///
    /// Read failures do not error here; they make the source invalid.
    pub fn from_files(fs: &dyn FileSystem, base_path: &str, desc: &ShaderDesc, config: &RegistryConfig) -> Self {
        let vertex_path = format!("{}.vert", base_path);
        let fragment_path = format!("{}.frag", base_path);

        let mut load_error = None;
        let mut read_stage = |path: &str| match fs.read_to_string(path) {
            Ok(text) => {
                let body = strip_version_line(&text);
                if body.trim().is_empty() && load_error.is_none() {
                    load_error = Some(format!("'{}' is empty", path));
                }
                body.to_string()
            }
            Err(err) => {
                if load_error.is_none() {
                    load_error = Some(err.to_string());
                }
                String::new()
            }
        };
        let vertex_body = read_stage(&vertex_path);
        let fragment_body = read_stage(&fragment_path);

        let prelude = feature_prelude(desc);
        Self {
            origin: ShaderOrigin::File { vertex_path, fragment_path },
            vertex: format!("{}{}", prelude, vertex_body),
            fragment: format!("{}{}", prelude, fragment_body),
            version_desktop: config.shader_version_desktop.clone(),
            version_es: config.shader_version_es.clone(),
            max_lights: desc.max_lights,
            features: desc.features,
            ambient_color: config.ambient_color,
            load_error,
        }
    }

    /// Generate both stages from feature flags alone
    pub fn generate(desc: &ShaderDesc, config: &RegistryConfig) -> Self {
        let prelude = feature_prelude(desc);
        Self {
            origin: ShaderOrigin::Generated,
            vertex: format!("{}{}", prelude, shader_generator::vertex_shader(desc)),
            fragment: format!(
                "{}{}",
                prelude,
                shader_generator::fragment_shader(desc, config.ambient_color)
            ),
            version_desktop: config.shader_version_desktop.clone(),
            version_es: config.shader_version_es.clone(),
            max_lights: desc.max_lights,
            features: desc.features,
            ambient_color: config.ambient_color,
            load_error: None,
        }
    }

    /// Reject sources that cannot produce a working shader
    pub fn validate(&self) -> Result<()> {
        if let Some(reason) = &self.load_error {
            return Err(Error::InvalidResource(reason.clone()));
        }
        if self.features.contains(ShaderFeatures::SPECULAR_LIGHTING) && self.max_lights == 0 {
            return Err(Error::InvalidResource(
                "specular lighting requires at least one light".to_string(),
            ));
        }
        if self.features.contains(ShaderFeatures::NORMAL_MAP)
            && !self.features.intersects(ShaderFeatures::DIFFUSE_LIGHTING | ShaderFeatures::SPECULAR_LIGHTING)
        {
            return Err(Error::InvalidResource(
                "normal map requires diffuse or specular lighting".to_string(),
            ));
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    // ===== ACCESSORS =====

    pub fn origin(&self) -> &ShaderOrigin {
        &self.origin
    }

    pub fn version(&self, target: ShaderTarget) -> &str {
        match target {
            ShaderTarget::Desktop => &self.version_desktop,
            ShaderTarget::Es => &self.version_es,
        }
    }

    /// Vertex stage without version line
    pub fn vertex_body(&self) -> &str {
        &self.vertex
    }

    /// Fragment stage without version line
    pub fn fragment_body(&self) -> &str {
        &self.fragment
    }

    /// Complete vertex stage for `target`
    pub fn vertex_source(&self, target: ShaderTarget) -> String {
        format!("{}\n{}", self.version(target), self.vertex)
    }

    /// Complete fragment stage for `target`
    pub fn fragment_source(&self, target: ShaderTarget) -> String {
        format!("{}\n{}", self.version(target), self.fragment)
    }

    pub fn max_lights(&self) -> u32 {
        self.max_lights
    }

    pub fn features(&self) -> ShaderFeatures {
        self.features
    }

    pub fn ambient_color(&self) -> Vec3 {
        self.ambient_color
    }
}

/// `#define` block shared by file and generated sources
fn feature_prelude(desc: &ShaderDesc) -> String {
    let mut prelude = format!("#define MAX_LIGHTS {}\n", desc.max_lights);
    for (name, _) in desc.features.iter_names() {
        prelude.push_str("#define ");
        prelude.push_str(name);
        prelude.push('\n');
    }
    prelude
}

/// Drop a leading `#version` line; the configured one is used instead
fn strip_version_line(text: &str) -> &str {
    let trimmed = text.trim_start();
    if !trimmed.starts_with("#version") {
        return text;
    }
    match trimmed.find('\n') {
        Some(index) => &trimmed[index + 1..],
        None => "",
    }
}

#[cfg(test)]
#[path = "shader_source_tests.rs"]
mod tests;
