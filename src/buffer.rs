use image::RgbaImage;

use crate::error::Error;

/// Owned RGBA8 pixel data for one decoded image, row-major, four bytes per
/// pixel. Extraction borrows it read-only and never retains it.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Wraps a raw buffer, rejecting any length that disagrees with the
    /// declared dimensions rather than risking out-of-bounds reads later.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, Error> {
        let expected = (width as usize) * (height as usize) * 4;
        if pixels.len() != expected {
            return Err(Error::InvalidBuffer {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn from_image(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            pixels: image.into_raw(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// True for zero-area images (width or height of 0).
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}
