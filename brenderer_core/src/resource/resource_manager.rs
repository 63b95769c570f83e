/// Central resource registry.
///
/// Holds one named collection per resource kind and runs the construction
/// pipeline of a kind the first time a name is requested. Every `create_*` /
/// `load_*` call is create-or-get: when the name is already registered the
/// cached instance is returned and the construction arguments are ignored.
///
/// Pipelines call back into the registry for their dependencies
/// (model → material → shader, material → texture, sprite → texture).
/// Failed constructions insert nothing, so the next request retries.

use std::sync::{Arc, Mutex};
use glam::Vec3;
use rustc_hash::FxHashMap;
use crate::backend::Backend;
use crate::error::{Error, Result};
use crate::resource::collection::ResourceCollection;
use crate::resource::config::RegistryConfig;
use crate::resource::kind::{ConstructionStack, ResourceKind};
use crate::resource::raw_name::{raw_name, strip_extension};
use crate::resource::shader::Shader;
use crate::resource::shader_source::{ShaderDesc, ShaderSource, ShaderStrategy};
use crate::resource::texture::{Texture, TextureSource};
use crate::resource::material::{
    self, Material, MaterialData, MATERIAL_DIFFUSE_MAP, MATERIAL_TRANSPARENCY_VALUE,
};
use crate::resource::model::{Model, ModelData, ModelGroup, ModelKind, ModelSource, SpriteSource};
use crate::resource::camera::{Camera, CameraDesc};
use crate::resource::light::{Light, LightDesc};
use crate::resource::matrix_stack::MatrixStack;
use crate::resource::framebuffer::{Framebuffer, FramebufferDesc};
use crate::resource::properties::Properties;
use crate::{engine_debug, engine_info, engine_trace, engine_warn};

const SOURCE: &str = "brenderer::ResourceManager";

/// Central resource manager
pub struct ResourceManager {
    backend: Backend,
    config: RegistryConfig,
    shaders: ResourceCollection<Arc<Shader>>,
    textures: ResourceCollection<Arc<Texture>>,
    materials: ResourceCollection<Arc<Material>>,
    properties: ResourceCollection<Arc<Mutex<Properties>>>,
    models: ResourceCollection<Arc<Model>>,
    cameras: ResourceCollection<Arc<Mutex<Camera>>>,
    matrix_stacks: ResourceCollection<Arc<Mutex<MatrixStack>>>,
    lights: ResourceCollection<Arc<Mutex<Light>>>,
    framebuffers: ResourceCollection<Arc<Mutex<Framebuffer>>>,
    constructing: ConstructionStack,
}

impl ResourceManager {
    /// Create an empty resource manager with default configuration
    pub fn new(backend: Backend) -> Self {
        Self::with_config(backend, RegistryConfig::default())
    }

    /// Create an empty resource manager with the given configuration
    pub fn with_config(backend: Backend, config: RegistryConfig) -> Self {
        Self {
            backend,
            config,
            shaders: ResourceCollection::new(),
            textures: ResourceCollection::new(),
            materials: ResourceCollection::new(),
            properties: ResourceCollection::new(),
            models: ResourceCollection::new(),
            cameras: ResourceCollection::new(),
            matrix_stacks: ResourceCollection::new(),
            lights: ResourceCollection::new(),
            framebuffers: ResourceCollection::new(),
            constructing: ConstructionStack::default(),
        }
    }

    /// Collaborator services
    pub fn backend(&self) -> &Backend {
        &self.backend
    }

    // ===== CONFIGURATION =====

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    pub fn set_ambient_color(&mut self, color: Vec3) {
        self.config.ambient_color = color;
    }

    pub fn ambient_color(&self) -> Vec3 {
        self.config.ambient_color
    }

    pub fn set_shader_version_desktop(&mut self, version: impl Into<String>) {
        self.config.shader_version_desktop = version.into();
    }

    pub fn shader_version_desktop(&self) -> &str {
        &self.config.shader_version_desktop
    }

    pub fn set_shader_version_es(&mut self, version: impl Into<String>) {
        self.config.shader_version_es = version.into();
    }

    pub fn shader_version_es(&self) -> &str {
        &self.config.shader_version_es
    }

    // ===== SHADER MANAGEMENT =====

    /// Load `<path>.vert` / `<path>.frag`, registered under the raw name of `path`
    ///
    /// Returns `None` (and logs) when the files are missing, the request is
    /// invalid or compilation fails.
    pub fn load_shader_file(&mut self, path: &str, desc: ShaderDesc) -> Option<Arc<Shader>> {
        let name = raw_name(path).name;
        if let Some(shader) = cached(&self.shaders, ResourceKind::Shader, &name) {
            return Some(shader);
        }

        let source = ShaderSource::from_files(
            self.backend.file_system.as_ref(),
            strip_extension(path),
            &desc,
            &self.config,
        );
        let shader = self.create_shader(&name, source);
        if shader.is_none() {
            engine_info!(SOURCE, "Couldn't load shader '{}'.", name);
        }
        shader
    }

    /// Generate a shader from feature flags, registered under the raw name of `name`
    pub fn generate_shader(&mut self, name: &str, desc: ShaderDesc) -> Option<Arc<Shader>> {
        let name = raw_name(name).name;
        if let Some(shader) = cached(&self.shaders, ResourceKind::Shader, &name) {
            return Some(shader);
        }

        let source = ShaderSource::generate(&desc, &self.config);
        self.create_shader(&name, source)
    }

    /// Validate and compile `source`, then register the default vertex attributes
    pub fn create_shader(&mut self, name: &str, source: ShaderSource) -> Option<Arc<Shader>> {
        if let Some(shader) = cached(&self.shaders, ResourceKind::Shader, name) {
            return Some(shader);
        }
        self.construct(ResourceKind::Shader, |rm| rm.build_shader(name, &source))
    }

    fn build_shader(&mut self, name: &str, source: &ShaderSource) -> Option<Arc<Shader>> {
        if let Err(err) = source.validate() {
            engine_info!(SOURCE, "Shader '{}' rejected: {}", name, err);
            return None;
        }

        let program = match self.backend.shader_compiler.compile(source) {
            Ok(program) => program,
            Err(err) => {
                engine_info!(SOURCE, "Shader '{}' failed to compile: {}", name, err);
                return None;
            }
        };

        let mut shader = Shader::new(name, program, source);
        shader.register_default_attributes();

        engine_info!(SOURCE, "Created shader '{}'.", name);
        Some(self.shaders.insert(name, Arc::new(shader)))
    }

    pub fn shader(&self, name: &str) -> Option<Arc<Shader>> {
        self.shaders.get(name)
    }

    pub fn remove_shader(&mut self, name: &str) -> bool {
        self.shaders.remove(name)
    }

    pub fn shader_count(&self) -> usize {
        self.shaders.len()
    }

    // ===== TEXTURE MANAGEMENT =====

    /// Load an image file, registered under its raw name
    pub fn load_texture(&mut self, path: &str) -> Result<Arc<Texture>> {
        let name = raw_name(path).name;
        self.create_texture(&name, TextureSource::File(path.to_string()))
    }

    pub fn create_texture(&mut self, name: &str, source: TextureSource) -> Result<Arc<Texture>> {
        if let Some(texture) = cached(&self.textures, ResourceKind::Texture, name) {
            return Ok(texture);
        }
        self.construct(ResourceKind::Texture, |rm| rm.build_texture(name, source))
    }

    fn build_texture(&mut self, name: &str, source: TextureSource) -> Result<Arc<Texture>> {
        let pixels = match source {
            TextureSource::File(path) => {
                let bytes = self.backend.file_system.read_bytes(&path)
                    .map_err(|err| construction_failed(ResourceKind::Texture, name, err))?;
                self.backend.image_decoder.decode_image(&bytes)
                    .map_err(|err| construction_failed(ResourceKind::Texture, name, err))?
            }
            TextureSource::Pixels(pixels) => pixels,
        };

        let texture = Texture::from_pixels(name, pixels)?;
        engine_debug!(SOURCE, "Created texture '{}' ({}x{})", name, texture.width(), texture.height());
        Ok(self.textures.insert(name, Arc::new(texture)))
    }

    pub fn texture(&self, name: &str) -> Option<Arc<Texture>> {
        self.textures.get(name)
    }

    pub fn remove_texture(&mut self, name: &str) -> bool {
        self.textures.remove(name)
    }

    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    // ===== MATERIAL MANAGEMENT =====

    /// Material without content, bound to `shader`
    pub fn create_material(&mut self, name: &str, shader: Option<Arc<Shader>>) -> Arc<Material> {
        if let Some(material) = cached(&self.materials, ResourceKind::Material, name) {
            return material;
        }
        self.construct(ResourceKind::Material, |rm| {
            engine_debug!(SOURCE, "Created material '{}'", name);
            rm.materials.insert(name, Arc::new(Material::new(name, shader)))
        })
    }

    /// Material bound to `data`, with its shader obtained per `strategy`
    ///
    /// File and generated shaders are registered under the material's name.
    /// A shader that cannot be built leaves the material without one.
    pub fn create_material_with_data(
        &mut self,
        name: &str,
        data: &MaterialData,
        strategy: ShaderStrategy,
    ) -> Result<Arc<Material>> {
        if let Some(material) = cached(&self.materials, ResourceKind::Material, name) {
            return Ok(material);
        }
        self.construct(ResourceKind::Material, |rm| rm.build_material(name, data, strategy))
    }

    /// Load one material from a material library through the model loader
    pub fn load_obj_material(
        &mut self,
        path: &str,
        material_name: &str,
        strategy: ShaderStrategy,
    ) -> Result<Arc<Material>> {
        if let Some(material) = cached(&self.materials, ResourceKind::Material, material_name) {
            return Ok(material);
        }
        engine_info!(SOURCE, "Loading material '{}' from '{}'", material_name, path);

        let data = self.backend.model_loader.load_material_data(path, material_name)
            .map_err(|err| construction_failed(ResourceKind::Material, material_name, err))?;
        self.create_material_with_data(material_name, &data, strategy)
    }

    fn build_material(&mut self, name: &str, data: &MaterialData, strategy: ShaderStrategy) -> Result<Arc<Material>> {
        let shader = self.resolve_shader(name, data, strategy);
        if shader.is_none() {
            engine_warn!(SOURCE, "Material '{}' has no shader", name);
        }

        let mut textures = FxHashMap::default();
        for (key, path) in &data.textures {
            if !material::binds(shader.as_ref(), key) {
                continue;
            }
            let texture = self.load_texture(path)?;
            textures.insert(key.clone(), texture);
        }

        let material = Material::from_data(name, data, textures, shader);
        engine_debug!(SOURCE, "Created material '{}'", name);
        Ok(self.materials.insert(name, Arc::new(material)))
    }

    fn resolve_shader(&mut self, name: &str, data: &MaterialData, strategy: ShaderStrategy) -> Option<Arc<Shader>> {
        match strategy {
            ShaderStrategy::FromFile(options) => {
                self.load_shader_file(name, ShaderDesc::for_material_file(data, options))
            }
            ShaderStrategy::Generated(options) => {
                self.generate_shader(name, ShaderDesc::for_material(data, options))
            }
            ShaderStrategy::Resolved(shader) => shader,
        }
    }

    pub fn material(&self, name: &str) -> Option<Arc<Material>> {
        self.materials.get(name)
    }

    pub fn remove_material(&mut self, name: &str) -> bool {
        self.materials.remove(name)
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    // ===== PROPERTIES MANAGEMENT =====

    pub fn create_properties(&mut self, name: &str) -> Arc<Mutex<Properties>> {
        get_or_create(&mut self.properties, ResourceKind::Properties, name, || Properties::new(name))
    }

    pub fn properties(&self, name: &str) -> Option<Arc<Mutex<Properties>>> {
        self.properties.get(name)
    }

    pub fn remove_properties(&mut self, name: &str) -> bool {
        self.properties.remove(name)
    }

    pub fn properties_count(&self) -> usize {
        self.properties.len()
    }

    // ===== MODEL MANAGEMENT =====

    /// Load a model file through the model loader, registered under its raw name
    pub fn load_obj_model(
        &mut self,
        path: &str,
        flip_t: bool,
        flip_z: bool,
        source: ModelSource,
        properties: Option<Arc<Mutex<Properties>>>,
    ) -> Result<Arc<Model>> {
        engine_info!(SOURCE, "Loading model '{}'", path);
        let name = raw_name(path).name;
        if let Some(model) = cached(&self.models, ResourceKind::Model, &name) {
            return Ok(model);
        }

        let data = self.backend.model_loader.load_model_data(path, flip_t, flip_z)
            .map_err(|err| construction_failed(ResourceKind::Model, &name, err))?;
        self.create_model(&name, &data, source, properties)
    }

    /// Model from parsed geometry
    pub fn create_model(
        &mut self,
        name: &str,
        data: &ModelData,
        source: ModelSource,
        properties: Option<Arc<Mutex<Properties>>>,
    ) -> Result<Arc<Model>> {
        if let Some(model) = cached(&self.models, ResourceKind::Model, name) {
            return Ok(model);
        }
        self.construct(ResourceKind::Model, |rm| rm.build_model(name, data, source, properties))
    }

    fn build_model(
        &mut self,
        name: &str,
        data: &ModelData,
        source: ModelSource,
        properties: Option<Arc<Mutex<Properties>>>,
    ) -> Result<Arc<Model>> {
        let mut groups = Vec::with_capacity(data.groups.len());
        for group in &data.groups {
            let material = match &source {
                ModelSource::Material(material) => material.clone(),
                ModelSource::Shader(strategy) => {
                    let material_name = if group.material.name.is_empty() {
                        group.name.as_str()
                    } else {
                        group.material.name.as_str()
                    };
                    self.create_material_with_data(material_name, &group.material, strategy.clone())?
                }
            };
            groups.push(ModelGroup::new(&group.name, group.vertices.clone(), group.indices.clone(), material));
        }

        engine_debug!(SOURCE, "Created model '{}' with {} group(s)", name, groups.len());
        let model = Model::new(name, ModelKind::Mesh, groups, properties);
        Ok(self.models.insert(name, Arc::new(model)))
    }

    /// Sprite quad, registered in the model collection
    pub fn create_sprite(
        &mut self,
        name: &str,
        source: SpriteSource,
        properties: Option<Arc<Mutex<Properties>>>,
    ) -> Result<Arc<Model>> {
        if let Some(model) = cached(&self.models, ResourceKind::Model, name) {
            return Ok(model);
        }
        self.construct(ResourceKind::Model, |rm| rm.build_sprite(name, source, properties))
    }

    fn build_sprite(
        &mut self,
        name: &str,
        source: SpriteSource,
        properties: Option<Arc<Mutex<Properties>>>,
    ) -> Result<Arc<Model>> {
        let material = match source {
            SpriteSource::Material(material) => material,
            SpriteSource::Texture { path, shader } => {
                let data = MaterialData::new(name).with_texture(MATERIAL_DIFFUSE_MAP, path);
                self.create_material_with_data(name, &data, ShaderStrategy::Resolved(shader))?
            }
            SpriteSource::GeneratedTexture { path, lighting } => {
                let data = MaterialData::new(name)
                    .with_texture(MATERIAL_DIFFUSE_MAP, path)
                    .with_scalar(MATERIAL_TRANSPARENCY_VALUE, 1.0);
                let desc = ShaderDesc::for_material(&data, lighting);
                let shader = self.generate_shader(name, desc);
                self.create_material_with_data(name, &data, ShaderStrategy::Resolved(shader))?
            }
        };

        engine_debug!(SOURCE, "Created sprite '{}'", name);
        Ok(self.models.insert(name, Arc::new(Model::sprite(name, material, properties))))
    }

    pub fn model(&self, name: &str) -> Option<Arc<Model>> {
        self.models.get(name)
    }

    pub fn remove_model(&mut self, name: &str) -> bool {
        self.models.remove(name)
    }

    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    // ===== CAMERA MANAGEMENT =====

    pub fn create_camera(&mut self, name: &str, desc: CameraDesc) -> Arc<Mutex<Camera>> {
        get_or_create(&mut self.cameras, ResourceKind::Camera, name, || Camera::from_desc(desc))
    }

    pub fn camera(&self, name: &str) -> Option<Arc<Mutex<Camera>>> {
        self.cameras.get(name)
    }

    pub fn remove_camera(&mut self, name: &str) -> bool {
        self.cameras.remove(name)
    }

    pub fn camera_count(&self) -> usize {
        self.cameras.len()
    }

    // ===== MATRIX STACK MANAGEMENT =====

    pub fn create_matrix_stack(&mut self, name: &str) -> Arc<Mutex<MatrixStack>> {
        get_or_create(&mut self.matrix_stacks, ResourceKind::MatrixStack, name, MatrixStack::new)
    }

    pub fn matrix_stack(&self, name: &str) -> Option<Arc<Mutex<MatrixStack>>> {
        self.matrix_stacks.get(name)
    }

    pub fn remove_matrix_stack(&mut self, name: &str) -> bool {
        self.matrix_stacks.remove(name)
    }

    pub fn matrix_stack_count(&self) -> usize {
        self.matrix_stacks.len()
    }

    // ===== LIGHT MANAGEMENT =====

    pub fn create_light(&mut self, name: &str, desc: LightDesc) -> Arc<Mutex<Light>> {
        get_or_create(&mut self.lights, ResourceKind::Light, name, || Light::from_desc(desc))
    }

    pub fn light(&self, name: &str) -> Option<Arc<Mutex<Light>>> {
        self.lights.get(name)
    }

    pub fn remove_light(&mut self, name: &str) -> bool {
        self.lights.remove(name)
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    // ===== FRAMEBUFFER MANAGEMENT =====

    pub fn create_framebuffer(&mut self, name: &str, desc: FramebufferDesc) -> Arc<Mutex<Framebuffer>> {
        get_or_create(&mut self.framebuffers, ResourceKind::Framebuffer, name, || Framebuffer::from_desc(desc))
    }

    pub fn framebuffer(&self, name: &str) -> Option<Arc<Mutex<Framebuffer>>> {
        self.framebuffers.get(name)
    }

    pub fn remove_framebuffer(&mut self, name: &str) -> bool {
        self.framebuffers.remove(name)
    }

    pub fn framebuffer_count(&self) -> usize {
        self.framebuffers.len()
    }

    // ===== WHOLE REGISTRY =====

    /// Number of entries of one kind
    pub fn count(&self, kind: ResourceKind) -> usize {
        match kind {
            ResourceKind::Shader => self.shaders.len(),
            ResourceKind::Texture => self.textures.len(),
            ResourceKind::Material => self.materials.len(),
            ResourceKind::Model => self.models.len(),
            ResourceKind::Camera => self.cameras.len(),
            ResourceKind::Light => self.lights.len(),
            ResourceKind::MatrixStack => self.matrix_stacks.len(),
            ResourceKind::Framebuffer => self.framebuffers.len(),
            ResourceKind::Properties => self.properties.len(),
        }
    }

    /// Whether `name` is registered for `kind`
    pub fn contains(&self, kind: ResourceKind, name: &str) -> bool {
        match kind {
            ResourceKind::Shader => self.shaders.contains(name),
            ResourceKind::Texture => self.textures.contains(name),
            ResourceKind::Material => self.materials.contains(name),
            ResourceKind::Model => self.models.contains(name),
            ResourceKind::Camera => self.cameras.contains(name),
            ResourceKind::Light => self.lights.contains(name),
            ResourceKind::MatrixStack => self.matrix_stacks.contains(name),
            ResourceKind::Framebuffer => self.framebuffers.contains(name),
            ResourceKind::Properties => self.properties.contains(name),
        }
    }

    /// Registered names of one kind, sorted
    pub fn names(&self, kind: ResourceKind) -> Vec<String> {
        let mut names: Vec<String> = match kind {
            ResourceKind::Shader => self.shaders.names().map(str::to_string).collect(),
            ResourceKind::Texture => self.textures.names().map(str::to_string).collect(),
            ResourceKind::Material => self.materials.names().map(str::to_string).collect(),
            ResourceKind::Model => self.models.names().map(str::to_string).collect(),
            ResourceKind::Camera => self.cameras.names().map(str::to_string).collect(),
            ResourceKind::Light => self.lights.names().map(str::to_string).collect(),
            ResourceKind::MatrixStack => self.matrix_stacks.names().map(str::to_string).collect(),
            ResourceKind::Framebuffer => self.framebuffers.names().map(str::to_string).collect(),
            ResourceKind::Properties => self.properties.names().map(str::to_string).collect(),
        };
        names.sort();
        names
    }

    /// Drop every entry of every kind and restore the default configuration
    ///
    /// Instances still held by callers stay alive until those handles drop.
    pub fn clear(&mut self) {
        self.shaders.clear();
        self.textures.clear();
        self.materials.clear();
        self.properties.clear();
        self.models.clear();
        self.cameras.clear();
        self.matrix_stacks.clear();
        self.lights.clear();
        self.framebuffers.clear();

        self.config = RegistryConfig::default();
        engine_debug!(SOURCE, "Cleared all resources");
    }

    // ===== INTERNAL =====

    /// Run a construction pipeline for `kind`, tracking nesting
    fn construct<T>(&mut self, kind: ResourceKind, build: impl FnOnce(&mut Self) -> T) -> T {
        self.constructing.enter(kind);
        let built = build(self);
        self.constructing.leave(kind);
        built
    }
}

/// Cache lookup shared by every create-or-get entry point
fn cached<T: Clone>(collection: &ResourceCollection<T>, kind: ResourceKind, name: &str) -> Option<T> {
    let found = collection.get(name);
    if found.is_some() {
        engine_trace!(SOURCE, "{} '{}' already exists, returning cached instance", kind, name);
    }
    found
}

/// Create-or-get for kinds without dependencies
fn get_or_create<T>(
    collection: &mut ResourceCollection<Arc<Mutex<T>>>,
    kind: ResourceKind,
    name: &str,
    build: impl FnOnce() -> T,
) -> Arc<Mutex<T>> {
    if let Some(existing) = cached(collection, kind, name) {
        return existing;
    }
    engine_debug!(SOURCE, "Created {} '{}'", kind, name);
    collection.insert(name, Arc::new(Mutex::new(build())))
}

/// Log a collaborator failure during construction and pass the error on
fn construction_failed(kind: ResourceKind, name: &str, err: Error) -> Error {
    engine_warn!(SOURCE, "Couldn't create {} '{}': {}", kind, name, err);
    err
}

#[cfg(test)]
#[path = "resource_manager_tests.rs"]
mod tests;
