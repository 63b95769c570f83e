/// Resource-level texture type.
///
/// CPU-side pixel data with its dimensions and format. A texture is built
/// either from a file (read through the file system, decoded by the image
/// decoder) or from pixel data supplied by the caller.

use crate::backend::{PixelBuffer, PixelFormat};
use crate::error::Result;
use crate::engine_bail;

/// Where texture pixels come from
#[derive(Debug, Clone, PartialEq)]
pub enum TextureSource {
    /// Encoded image file, decoded by the backend
    File(String),
    /// Raw pixels
    Pixels(PixelBuffer),
}

/// Texture resource
#[derive(Debug)]
pub struct Texture {
    name: String,
    width: u32,
    height: u32,
    format: PixelFormat,
    data: Vec<u8>,
}

impl Texture {
    /// Create texture from decoded pixels (internal use by ResourceManager)
    pub(crate) fn from_pixels(name: &str, pixels: PixelBuffer) -> Result<Self> {
        if pixels.width == 0 || pixels.height == 0 {
            engine_bail!("brenderer::Texture",
                "Texture '{}' has zero size ({}x{})", name, pixels.width, pixels.height);
        }
        let Some(expected) = pixels.expected_len() else {
            engine_bail!("brenderer::Texture",
                "Texture '{}' is too large ({}x{} {:?})",
                name, pixels.width, pixels.height, pixels.format);
        };
        if pixels.data.len() != expected {
            engine_bail!("brenderer::Texture",
                "Texture '{}': {} bytes of pixel data, expected {} for {}x{} {:?}",
                name, pixels.data.len(), expected,
                pixels.width, pixels.height, pixels.format);
        }

        Ok(Self {
            name: name.to_string(),
            width: pixels.width,
            height: pixels.height,
            format: pixels.format,
            data: pixels.data,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
#[path = "texture_tests.rs"]
mod tests;
