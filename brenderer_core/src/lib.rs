/*!
# bRenderer Core

Resource management for the bRenderer rendering framework.

This crate provides the registry that creates, deduplicates and hands out the
named resources a frame is built from. Loading files, decoding images and
compiling shader programs are delegated to backend services supplied by the
application.

## Architecture

- **ResourceManager**: Named create-or-get collections for every resource kind
- **Backend**: Collaborator traits (file system, image decoder, model loader, shader compiler)
- **Shader / ShaderSource**: Shader selection, procedural generation and attribute bindings
- **Material / Model**: Cross-kind construction pipelines (model → material → shader, texture)
- **Engine**: Process-wide registry singleton and logging hub
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod backend;
pub mod resource;

// Main brenderer namespace module
pub mod brenderer {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Backend collaborator sub-module
    pub mod backend {
        pub use crate::backend::*;
    }

    // Resource sub-module
    pub mod resource {
        pub use crate::resource::*;
    }
}

// Re-export math library at crate root
pub use glam;
