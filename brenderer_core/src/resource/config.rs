/// Registry-wide configuration read by shader construction

use glam::Vec3;

/// Version line prepended to desktop GLSL sources
pub const DEFAULT_SHADER_VERSION_DESKTOP: &str = "#version 120";

/// Version line prepended to OpenGL ES GLSL sources
pub const DEFAULT_SHADER_VERSION_ES: &str = "#version 100";

/// Ambient color baked into generated shaders
pub const DEFAULT_AMBIENT_COLOR: Vec3 = Vec3::ZERO;

/// Configuration owned by one `ResourceManager`
///
/// `ResourceManager::clear()` restores `RegistryConfig::default()`.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistryConfig {
    pub shader_version_desktop: String,
    pub shader_version_es: String,
    pub ambient_color: Vec3,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            shader_version_desktop: DEFAULT_SHADER_VERSION_DESKTOP.to_string(),
            shader_version_es: DEFAULT_SHADER_VERSION_ES.to_string(),
            ambient_color: DEFAULT_AMBIENT_COLOR,
        }
    }
}
