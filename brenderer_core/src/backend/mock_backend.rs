/// Mock backend services for unit tests (no files, no GPU required)
///
/// Every service is in-memory and observable, so tests can count compiles,
/// inject failures and inspect what the resource manager asked for.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use rustc_hash::{FxHashMap, FxHashSet};
use crate::backend::{
    Backend, FileSystem, ImageDecoder, ModelLoader, PixelBuffer, PixelFormat,
    ShaderCompiler, ShaderProgram,
};
use crate::error::{Error, Result};
use crate::resource::{MaterialData, ModelData, ShaderSource};

// ============================================================================
// Mock File System
// ============================================================================

#[derive(Default)]
pub struct MockFileSystem {
    files: Mutex<FxHashMap<String, Vec<u8>>>,
    reads: AtomicUsize,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, path: &str, contents: impl Into<Vec<u8>>) {
        self.files.lock().unwrap().insert(path.to_string(), contents.into());
    }

    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl FileSystem for MockFileSystem {
    fn read_bytes(&self, path: &str) -> Result<Vec<u8>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| Error::NotFound(path.to_string()))
    }
}

// ============================================================================
// Mock Image Decoder
// ============================================================================

/// Decodes `width: u32 LE, height: u32 LE` followed by raw RGBA8 pixels
#[derive(Default)]
pub struct MockImageDecoder {
    decodes: AtomicUsize,
}

impl MockImageDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode a solid-color image in the mock format
    pub fn encode(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(8 + (width * height * 4) as usize);
        bytes.extend_from_slice(&width.to_le_bytes());
        bytes.extend_from_slice(&height.to_le_bytes());
        for _ in 0..width * height {
            bytes.extend_from_slice(&rgba);
        }
        bytes
    }

    pub fn decode_count(&self) -> usize {
        self.decodes.load(Ordering::SeqCst)
    }
}

impl ImageDecoder for MockImageDecoder {
    fn decode_image(&self, bytes: &[u8]) -> Result<PixelBuffer> {
        self.decodes.fetch_add(1, Ordering::SeqCst);
        if bytes.len() < 8 {
            return Err(Error::InvalidResource("image header truncated".to_string()));
        }
        let width = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        let height = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
        Ok(PixelBuffer::new(width, height, PixelFormat::Rgba8, bytes[8..].to_vec()))
    }
}

// ============================================================================
// Mock Model Loader
// ============================================================================

#[derive(Default)]
pub struct MockModelLoader {
    models: Mutex<FxHashMap<String, ModelData>>,
    materials: Mutex<FxHashMap<(String, String), MaterialData>>,
    /// (path, flip_t, flip_z) of every model request
    requests: Mutex<Vec<(String, bool, bool)>>,
}

impl MockModelLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_model(&self, path: &str, data: ModelData) {
        self.models.lock().unwrap().insert(path.to_string(), data);
    }

    pub fn insert_material(&self, path: &str, data: MaterialData) {
        self.materials
            .lock()
            .unwrap()
            .insert((path.to_string(), data.name.clone()), data);
    }

    pub fn model_requests(&self) -> Vec<(String, bool, bool)> {
        self.requests.lock().unwrap().clone()
    }
}

impl ModelLoader for MockModelLoader {
    fn load_model_data(&self, path: &str, flip_t: bool, flip_z: bool) -> Result<ModelData> {
        self.requests.lock().unwrap().push((path.to_string(), flip_t, flip_z));
        self.models
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| Error::NotFound(path.to_string()))
    }

    fn load_material_data(&self, path: &str, material_name: &str) -> Result<MaterialData> {
        self.materials
            .lock()
            .unwrap()
            .get(&(path.to_string(), material_name.to_string()))
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("{} in {}", material_name, path)))
    }
}

// ============================================================================
// Mock Shader Compiler
// ============================================================================

/// Program exposing the uniforms declared in its source
#[derive(Debug)]
pub struct MockProgram {
    pub uniforms: FxHashSet<String>,
}

impl MockProgram {
    fn from_source(source: &ShaderSource) -> Self {
        let uniforms = source
            .vertex_body()
            .lines()
            .chain(source.fragment_body().lines())
            .filter_map(declared_uniform)
            .collect();
        Self { uniforms }
    }
}

impl ShaderProgram for MockProgram {
    fn has_uniform(&self, name: &str) -> bool {
        self.uniforms.contains(name)
    }
}

/// Name declared by a `uniform <type> <name>[...];` line
fn declared_uniform(line: &str) -> Option<String> {
    let mut words = line.trim().strip_prefix("uniform ")?.split_whitespace();
    let _ty = words.next()?;
    let name = words.next()?;
    let end = name.find(|c: char| c == '[' || c == ';').unwrap_or(name.len());
    Some(name[..end].to_string())
}

#[derive(Default)]
pub struct MockShaderCompiler {
    compiles: AtomicUsize,
    /// Fragment substrings that make compilation fail
    rejected: Mutex<Vec<String>>,
    sources: Mutex<Vec<ShaderSource>>,
}

impl MockShaderCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every compile whose fragment stage contains `marker`
    pub fn reject_containing(&self, marker: &str) {
        self.rejected.lock().unwrap().push(marker.to_string());
    }

    pub fn compile_count(&self) -> usize {
        self.compiles.load(Ordering::SeqCst)
    }

    pub fn last_source(&self) -> Option<ShaderSource> {
        self.sources.lock().unwrap().last().cloned()
    }
}

impl ShaderCompiler for MockShaderCompiler {
    fn compile(&self, source: &ShaderSource) -> Result<Arc<dyn ShaderProgram>> {
        self.compiles.fetch_add(1, Ordering::SeqCst);
        self.sources.lock().unwrap().push(source.clone());

        let rejected = self.rejected.lock().unwrap();
        if let Some(marker) = rejected.iter().find(|m| source.fragment_body().contains(m.as_str())) {
            return Err(Error::BackendError(format!("mock compile error near '{}'", marker)));
        }
        Ok(Arc::new(MockProgram::from_source(source)))
    }
}

// ============================================================================
// Mock Backend bundle
// ============================================================================

/// All four mock services, kept typed so tests can reach their counters
#[derive(Clone, Default)]
pub struct MockBackend {
    pub file_system: Arc<MockFileSystem>,
    pub image_decoder: Arc<MockImageDecoder>,
    pub model_loader: Arc<MockModelLoader>,
    pub shader_compiler: Arc<MockShaderCompiler>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Type-erased bundle for `ResourceManager::new`
    pub fn backend(&self) -> Backend {
        Backend::new(
            self.file_system.clone(),
            self.image_decoder.clone(),
            self.model_loader.clone(),
            self.shader_compiler.clone(),
        )
    }

    /// Register a solid-color image at `path`
    pub fn add_image(&self, path: &str, width: u32, height: u32) {
        self.file_system.insert(path, MockImageDecoder::encode(width, height, [255, 255, 255, 255]));
    }

    /// Register a `.vert`/`.frag` pair at `base`
    pub fn add_shader_files(&self, base: &str, vertex: &str, fragment: &str) {
        self.file_system.insert(&format!("{}.vert", base), vertex);
        self.file_system.insert(&format!("{}.frag", base), fragment);
    }
}
