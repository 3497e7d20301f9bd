//! Utilities for working with images returned by the imagery service.

use std::path::Path;

use image::{GenericImageView, ImageBuffer, Rgba};

use crate::error::PathmapError;

/// An image that has been loaded into memory.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    bytes: Vec<u8>,
    dimensions: (u32, u32),
}

impl DecodedImage {
    /// Decode an image from a byte slice.
    ///
    /// Attempts to guess the format of the image from the data. Non-RGBA images will be
    /// converted to RGBA.
    pub fn decode(bytes: &[u8]) -> Result<Self, PathmapError> {
        let decoded = image::load_from_memory(bytes)?;
        let dimensions = decoded.dimensions();
        let bytes = decoded.to_rgba8().into_vec();

        Ok(Self { bytes, dimensions })
    }

    /// Width of the image in pixels.
    pub fn width(&self) -> u32 {
        self.dimensions.0
    }

    /// Height of the image in pixels.
    pub fn height(&self) -> u32 {
        self.dimensions.1
    }

    /// Raw bytes of the image, in RGBA order.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Saves the image to a PNG file at the given path.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), PathmapError> {
        let buffer = ImageBuffer::<Rgba<u8>, _>::from_raw(
            self.width(),
            self.height(),
            self.bytes.as_slice(),
        )
        .ok_or_else(|| PathmapError::Generic("image buffer size mismatch".into()))?;

        buffer.save(path.as_ref())?;

        Ok(())
    }
}
