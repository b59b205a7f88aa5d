use crate::error::DecodeError;
use crate::palette::Color;

/// Decoded RGB image, row-major, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl SourceImage {
    pub fn new(width: usize, height: usize, pixels: Vec<Color>) -> Result<Self, DecodeError> {
        if width == 0 || height == 0 || width.checked_mul(height) != Some(pixels.len()) {
            return Err(DecodeError::Dimensions {
                width,
                height,
                len: pixels.len() * 3,
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Builds an image from packed `RGBRGB...` bytes.
    pub fn from_rgb_bytes(width: usize, height: usize, bytes: &[u8]) -> Result<Self, DecodeError> {
        if bytes.len() % 3 != 0 {
            return Err(DecodeError::Dimensions {
                width,
                height,
                len: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(3)
            .map(|px| Color::new(px[0], px[1], px[2]))
            .collect();
        Self::new(width, height, pixels)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn row(&self, y: usize) -> &[Color] {
        &self.pixels[y * self.width..(y + 1) * self.width]
    }
}
