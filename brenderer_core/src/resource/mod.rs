//! Resource management module
//!
//! Provides the registry that creates, deduplicates and hands out named
//! engine resources, plus the resource types themselves.

mod collection;
mod resource_manager;
pub mod config;
pub mod kind;
pub mod raw_name;
pub mod vertex;
pub mod shader;
pub mod shader_source;
pub mod shader_generator;
pub mod texture;
pub mod material;
pub mod model;
pub mod camera;
pub mod light;
pub mod matrix_stack;
pub mod framebuffer;
pub mod properties;

pub use resource_manager::ResourceManager;
pub use config::RegistryConfig;
pub use kind::ResourceKind;
pub use raw_name::{raw_name, strip_extension, RawName};
pub use vertex::Vertex;
pub use shader::{Shader, VertexAttribute, AttributeType};
pub use shader_source::{
    ShaderFeatures, ShaderDesc, ShaderStrategy, LightingOptions,
    ShaderSource, ShaderTarget, ShaderOrigin,
};
pub use texture::{Texture, TextureSource};
pub use material::{Material, MaterialData};
pub use model::{
    Model, ModelGroup, ModelKind, ModelData, GeometryGroup,
    ModelSource, SpriteSource,
};
pub use camera::{Camera, CameraDesc};
pub use light::{Light, LightDesc};
pub use matrix_stack::MatrixStack;
pub use framebuffer::{Framebuffer, FramebufferDesc};
pub use properties::{Properties, PropertyValue};
