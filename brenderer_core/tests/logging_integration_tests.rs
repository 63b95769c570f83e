//! Integration tests for the logging emitted by resource construction
//!
//! Every test swaps the global logger, so all of them are #[serial].
//!
//! Run with: cargo test --test logging_integration_tests

use brenderer_core::brenderer::backend::{
    Backend, FileSystem, ImageDecoder, ModelLoader, PixelBuffer, PixelFormat, ShaderCompiler, ShaderProgram,
};
use brenderer_core::brenderer::log::{LogEntry, LogSeverity, Logger};
use brenderer_core::brenderer::resource::{
    CameraDesc, MaterialData, ModelData, ResourceManager, ShaderDesc, ShaderFeatures, ShaderSource,
    TextureSource,
};
use brenderer_core::brenderer::{Engine, Error, Result};
use serial_test::serial;
use std::sync::{Arc, Mutex};

// ============================================================================
// TEST LOGGER AND SERVICES
// ============================================================================

/// Captures full entries so source and location can be checked
struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl CaptureLogger {
    fn install() -> Arc<Mutex<Vec<LogEntry>>> {
        let entries = Arc::new(Mutex::new(Vec::new()));
        Engine::set_logger(Self { entries: entries.clone() });
        entries
    }
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

struct EmptyFileSystem;

impl FileSystem for EmptyFileSystem {
    fn read_bytes(&self, path: &str) -> Result<Vec<u8>> {
        Err(Error::NotFound(path.to_string()))
    }
}

struct NoDecoder;

impl ImageDecoder for NoDecoder {
    fn decode_image(&self, _bytes: &[u8]) -> Result<PixelBuffer> {
        Err(Error::BackendError("decoder unavailable".to_string()))
    }
}

struct NoLoader;

impl ModelLoader for NoLoader {
    fn load_model_data(&self, path: &str, _flip_t: bool, _flip_z: bool) -> Result<ModelData> {
        Err(Error::NotFound(path.to_string()))
    }

    fn load_material_data(&self, path: &str, _material_name: &str) -> Result<MaterialData> {
        Err(Error::NotFound(path.to_string()))
    }
}

struct Compiler;

struct Program;

impl ShaderProgram for Program {}

impl ShaderCompiler for Compiler {
    fn compile(&self, _source: &ShaderSource) -> Result<Arc<dyn ShaderProgram>> {
        Ok(Arc::new(Program))
    }
}

fn manager() -> ResourceManager {
    ResourceManager::new(Backend::new(
        Arc::new(EmptyFileSystem),
        Arc::new(NoDecoder),
        Arc::new(NoLoader),
        Arc::new(Compiler),
    ))
}

fn messages(entries: &[LogEntry], severity: LogSeverity) -> Vec<String> {
    entries
        .iter()
        .filter(|e| e.severity == severity)
        .map(|e| e.message.clone())
        .collect()
}

// ============================================================================
// LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_shader_creation_logged_once() {
    let entries = CaptureLogger::install();
    let mut rm = manager();

    let desc = ShaderDesc::new(1, ShaderFeatures::DIFFUSE_LIGHTING);
    rm.generate_shader("lit", desc);
    rm.generate_shader("lit", desc);
    Engine::reset_logger();

    let entries = entries.lock().unwrap();
    let infos = messages(&entries, LogSeverity::Info);
    assert_eq!(infos.iter().filter(|m| *m == "Created shader 'lit'.").count(), 1);
    assert_eq!(messages(&entries, LogSeverity::Trace).len(), 1);
    assert!(entries.iter().all(|e| e.source == "brenderer::ResourceManager"));
}

#[test]
#[serial]
fn test_integration_missing_shader_logged_per_attempt() {
    let entries = CaptureLogger::install();
    let mut rm = manager();

    let desc = ShaderDesc::new(1, ShaderFeatures::empty());
    assert!(rm.load_shader_file("shaders/absent", desc).is_none());
    assert!(rm.load_shader_file("shaders/absent", desc).is_none());
    Engine::reset_logger();

    let infos = messages(&entries.lock().unwrap(), LogSeverity::Info);
    assert_eq!(infos.iter().filter(|m| *m == "Couldn't load shader 'absent'.").count(), 2);
}

#[test]
#[serial]
fn test_integration_invalid_texture_logged_with_location() {
    let entries = CaptureLogger::install();
    let mut rm = manager();

    let pixels = PixelBuffer::new(0, 0, PixelFormat::Rgba8, Vec::new());
    assert!(rm.create_texture("void", TextureSource::Pixels(pixels)).is_err());
    Engine::reset_logger();

    let entries = entries.lock().unwrap();
    let error = entries.iter().find(|e| e.severity == LogSeverity::Error).unwrap();
    assert_eq!(error.source, "brenderer::Texture");
    assert!(error.message.contains("'void'"));
    assert!(error.file.is_some());
    assert!(error.line.is_some());
}

#[test]
#[serial]
fn test_integration_collaborator_failure_logged_as_warning() {
    let entries = CaptureLogger::install();
    let mut rm = manager();

    assert!(rm.load_texture("textures/nothing.png").is_err());
    Engine::reset_logger();

    let warnings = messages(&entries.lock().unwrap(), LogSeverity::Warn);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].starts_with("Couldn't create Texture 'nothing'"));
}

#[test]
#[serial]
fn test_integration_logger_reset_stops_capture() {
    let entries = CaptureLogger::install();
    let mut rm = manager();

    rm.create_camera("before_reset", CameraDesc::default());
    Engine::reset_logger();
    let captured = entries.lock().unwrap().len();

    rm.create_camera("after_reset", CameraDesc::default());
    assert_eq!(entries.lock().unwrap().len(), captured);
    assert!(captured > 0);
}
