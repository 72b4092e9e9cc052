//! CPU raster image storage.
//!
//! [`RasterImage`] is a frozen RGBA8 pixel snapshot, the one-shot product of
//! the SVG rasterization pipeline. It is backed by [`image::RgbaImage`] so
//! callers can hand it to the wider `image` ecosystem (encoding, resizing)
//! without a copy.

use image::RgbaImage;

use crate::error::{RenderError, RenderResult};
use crate::types::Color;

/// A frozen RGBA8 raster image.
#[derive(Debug, Clone)]
pub struct RasterImage {
    buffer: RgbaImage,
}

impl RasterImage {
    /// Create an image from raw RGBA8 pixel data.
    ///
    /// `data` must contain exactly `width * height * 4` bytes.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> RenderResult<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height });
        }
        let buffer = RgbaImage::from_raw(width, height, data)
            .ok_or(RenderError::InvalidDimensions { width, height })?;
        Ok(Self { buffer })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// Read the color of a single pixel.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        let p = self.buffer.get_pixel(x, y).0;
        Color::from_rgba8(p[0], p[1], p[2], p[3])
    }

    /// Borrow the underlying `image` buffer.
    pub fn as_rgba_image(&self) -> &RgbaImage {
        &self.buffer
    }

    /// Consume into the underlying `image` buffer.
    pub fn into_rgba_image(self) -> RgbaImage {
        self.buffer
    }
}

impl From<RgbaImage> for RasterImage {
    fn from(buffer: RgbaImage) -> Self {
        Self { buffer }
    }
}
