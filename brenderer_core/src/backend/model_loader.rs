/// Model and material file parsing collaborator

use crate::error::Result;
use crate::resource::{MaterialData, ModelData};

/// Parses model geometry and material libraries (e.g. Wavefront OBJ/MTL)
pub trait ModelLoader: Send + Sync {
    /// Load geometry groups (and the material data each group references)
    ///
    /// `flip_t` flips the V texture coordinate, `flip_z` mirrors the Z axis.
    fn load_model_data(&self, path: &str, flip_t: bool, flip_z: bool) -> Result<ModelData>;

    /// Load a single named material from a material library file
    fn load_material_data(&self, path: &str, material_name: &str) -> Result<MaterialData>;
}
