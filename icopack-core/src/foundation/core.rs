use image::RgbaImage;

use crate::foundation::error::{IcopackError, IcopackResult};

/// Largest edge length representable by the container's single-byte
/// width/height fields (stored as 0 by format convention).
pub const MAX_EDGE: u32 = 256;

/// A validated icon edge length in `1..=256`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct IconSize(u16);

impl IconSize {
    /// Validate `edge` and wrap it.
    ///
    /// Values outside `1..=256` fail with [`IcopackError::InvalidSize`]
    /// before any frame work happens.
    pub fn new(edge: u32) -> IcopackResult<Self> {
        if edge == 0 || edge > MAX_EDGE {
            return Err(IcopackError::InvalidSize(edge));
        }
        Ok(Self(edge as u16))
    }

    /// The edge length in pixels.
    pub fn edge(self) -> u32 {
        u32::from(self.0)
    }

    /// The single-byte directory encoding (256 is stored as 0).
    pub fn encoded_byte(self) -> u8 {
        if self.edge() == MAX_EDGE { 0 } else { self.0 as u8 }
    }
}

/// An immutable straight-alpha RGBA8 source raster.
///
/// Read-only for the whole pipeline; per-size frame builds only borrow it,
/// so it can be shared freely across worker threads.
#[derive(Clone, Debug)]
pub struct SourceImage {
    rgba: RgbaImage,
}

impl SourceImage {
    /// Wrap a decoded raster. Zero-sized images are rejected.
    pub fn new(rgba: RgbaImage) -> IcopackResult<Self> {
        if rgba.width() == 0 || rgba.height() == 0 {
            return Err(IcopackError::source(
                "source image has zero width or height",
            ));
        }
        Ok(Self { rgba })
    }

    /// Build from a raw RGBA8 buffer (row-major, tightly packed).
    pub fn from_rgba8(width: u32, height: u32, rgba8: Vec<u8>) -> IcopackResult<Self> {
        let raster = RgbaImage::from_raw(width, height, rgba8).ok_or_else(|| {
            IcopackError::source(format!("rgba buffer does not match {width}x{height}"))
        })?;
        Self::new(raster)
    }

    /// Source width in pixels (always positive).
    pub fn width(&self) -> u32 {
        self.rgba.width()
    }

    /// Source height in pixels (always positive).
    pub fn height(&self) -> u32 {
        self.rgba.height()
    }

    /// Borrow the underlying raster.
    pub fn raster(&self) -> &RgbaImage {
        &self.rgba
    }
}

/// One compressed frame, ready for the container writer.
///
/// Created by [`crate::build_frame`], consumed exactly once by
/// [`crate::write_container`], never mutated in between.
#[derive(Clone, Debug)]
pub struct FrameArtifact {
    /// Square side length of the decoded payload.
    pub size: IconSize,
    /// Self-describing compressed image bytes (opaque to the writer).
    pub payload: Vec<u8>,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
