//! Backend module - collaborator services consumed by the resource manager
//!
//! The resource manager never touches the disk, decodes images or compiles
//! shader programs itself. It delegates to these services, supplied by the
//! application (or by the mock backend in tests).

// Module declarations
pub mod file_system;
pub mod image_decoder;
pub mod model_loader;
pub mod shader_compiler;

// Re-exports
pub use file_system::*;
pub use image_decoder::*;
pub use model_loader::*;
pub use shader_compiler::*;

use std::sync::Arc;

// Mock backend for tests (no files, no GPU required)
#[cfg(test)]
pub mod mock_backend;

/// Bundle of collaborator services handed to a `ResourceManager`
///
/// Cloning is cheap; every service is shared.
#[derive(Clone)]
pub struct Backend {
    /// Reads shader sources, images and model files
    pub file_system: Arc<dyn FileSystem>,
    /// Decodes encoded image bytes into pixel data
    pub image_decoder: Arc<dyn ImageDecoder>,
    /// Parses model geometry and material libraries
    pub model_loader: Arc<dyn ModelLoader>,
    /// Compiles shader sources into programs
    pub shader_compiler: Arc<dyn ShaderCompiler>,
}

impl Backend {
    /// Bundle the four collaborator services
    pub fn new(
        file_system: Arc<dyn FileSystem>,
        image_decoder: Arc<dyn ImageDecoder>,
        model_loader: Arc<dyn ModelLoader>,
        shader_compiler: Arc<dyn ShaderCompiler>,
    ) -> Self {
        Self {
            file_system,
            image_decoder,
            model_loader,
            shader_compiler,
        }
    }
}
