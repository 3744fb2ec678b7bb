//! PNG decoding through the `png` crate.

use png::{BitDepth, ColorType, Decoder};

use crate::error::MiddlewareError;

/// First frame of a decoded PNG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub color_type: ColorType,
    pub bit_depth: BitDepth,
    /// Row-major pixel data, no row padding.
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    /// Bytes per pixel for 8-bit images.
    pub fn bytes_per_pixel(&self) -> usize {
        self.color_type.samples()
    }

    /// Bytes of the pixel at (x, y).
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let bpp = self.bytes_per_pixel();
        let start = (y as usize * self.width as usize + x as usize) * bpp;
        self.pixels.get(start..start + bpp)
    }
}

/// Decode the first frame of a PNG without any color transformations.
pub fn decode_png(data: &[u8]) -> Result<DecodedImage, MiddlewareError> {
    let decoder = Decoder::new(data);
    let mut reader = decoder.read_info()?;
    let mut pixels = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut pixels)?;
    pixels.truncate(info.buffer_size());

    tracing::debug!(
        width = info.width,
        height = info.height,
        bytes = pixels.len(),
        "Decoded PNG frame"
    );

    Ok(DecodedImage {
        width: info.width,
        height: info.height,
        color_type: info.color_type,
        bit_depth: info.bit_depth,
        pixels,
    })
}
