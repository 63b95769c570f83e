/// Shader compilation collaborator

use std::sync::Arc;
use crate::error::Result;
use crate::resource::ShaderSource;

/// Compiled, linked shader program
///
/// Implemented by the graphics backend. The program is released when dropped.
pub trait ShaderProgram: Send + Sync {
    /// Whether the program declares a uniform with this name
    ///
    /// Materials only bind content the program actually consumes.
    fn has_uniform(&self, _name: &str) -> bool {
        true
    }
}

/// Compiles and links a vertex/fragment source pair
pub trait ShaderCompiler: Send + Sync {
    fn compile(&self, source: &ShaderSource) -> Result<Arc<dyn ShaderProgram>>;
}
