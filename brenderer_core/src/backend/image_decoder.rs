/// Image decoding collaborator and decoded pixel data

use crate::error::Result;

/// Pixel layout of decoded image data (8 bits per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    R8,
    Rg8,
    Rgb8,
    Rgba8,
}

impl PixelFormat {
    /// Size of one pixel in bytes
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::R8 => 1,
            PixelFormat::Rg8 => 2,
            PixelFormat::Rgb8 => 3,
            PixelFormat::Rgba8 => 4,
        }
    }
}

/// Decoded image: dimensions, format and tightly packed rows
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    pub data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32, format: PixelFormat, data: Vec<u8>) -> Self {
        Self { width, height, format, data }
    }

    /// Number of bytes `data` must hold for these dimensions and format,
    /// `None` if that size does not fit in `usize`
    pub fn expected_len(&self) -> Option<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)?
            .checked_mul(self.format.bytes_per_pixel())
    }
}

/// Decodes encoded image files (PNG, JPEG, ...) into pixel data
pub trait ImageDecoder: Send + Sync {
    fn decode_image(&self, bytes: &[u8]) -> Result<PixelBuffer>;
}
