use std::io::Cursor;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

use crate::foundation::error::{IcopackError, IcopackResult};

/// Compression codec that turns a square RGBA canvas into an embeddable
/// payload.
///
/// Implementations must produce a self-describing image format that decodes
/// back to exactly the canvas dimensions, keep full alpha fidelity, and be
/// byte-deterministic for identical input.
pub trait FrameCodec: Sync {
    /// Compress `canvas` into payload bytes.
    fn encode(&self, canvas: &RgbaImage) -> IcopackResult<Vec<u8>>;
}

/// PNG codec used for production containers: maximum compression, straight
/// RGBA8, fixed filter strategy.
#[derive(Clone, Copy, Debug, Default)]
pub struct PngCodec;

impl FrameCodec for PngCodec {
    fn encode(&self, canvas: &RgbaImage) -> IcopackResult<Vec<u8>> {
        let mut payload = Vec::new();
        let encoder = PngEncoder::new_with_quality(
            Cursor::new(&mut payload),
            CompressionType::Best,
            FilterType::Adaptive,
        );
        encoder
            .write_image(
                canvas.as_raw(),
                canvas.width(),
                canvas.height(),
                ExtendedColorType::Rgba8,
            )
            .map_err(|e| IcopackError::encode(e.to_string()))?;
        Ok(payload)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/codec.rs"]
mod tests;
