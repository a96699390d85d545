use image::RgbaImage;
use image::imageops::{self, FilterType};

use crate::encode::codec::FrameCodec;
use crate::foundation::core::{FrameArtifact, IconSize, SourceImage};
use crate::foundation::error::IcopackResult;

/// Compute the scaled dimensions that fit `width x height` inside an
/// `edge x edge` square while preserving aspect ratio.
///
/// The limiting axis maps to exactly `edge`; the other axis rounds to
/// nearest and is clamped to `1..=edge`.
pub fn fit_dimensions(width: u32, height: u32, edge: u32) -> (u32, u32) {
    let scale = f64::from(edge) / f64::from(width.max(height));
    let scaled_w = (f64::from(width) * scale).round().clamp(1.0, f64::from(edge)) as u32;
    let scaled_h = (f64::from(height) * scale).round().clamp(1.0, f64::from(edge)) as u32;
    (scaled_w, scaled_h)
}

/// Build one compressed icon frame for `size`.
///
/// The source is resampled with a Lanczos3 kernel, placed centered on a
/// fully transparent `edge x edge` canvas (direct overwrite, no blending),
/// and handed to `codec` for compression. Pure per size apart from the codec
/// call, so builds for different sizes can run on independent workers.
pub fn build_frame(
    source: &SourceImage,
    size: IconSize,
    codec: &dyn FrameCodec,
) -> IcopackResult<FrameArtifact> {
    let edge = size.edge();
    let (scaled_w, scaled_h) = fit_dimensions(source.width(), source.height(), edge);

    let scaled = if (scaled_w, scaled_h) == (source.width(), source.height()) {
        source.raster().clone()
    } else {
        imageops::resize(source.raster(), scaled_w, scaled_h, FilterType::Lanczos3)
    };

    let mut canvas = RgbaImage::new(edge, edge);
    let offset_x = i64::from((edge - scaled_w) / 2);
    let offset_y = i64::from((edge - scaled_h) / 2);
    imageops::replace(&mut canvas, &scaled, offset_x, offset_y);

    let payload = codec.encode(&canvas)?;
    Ok(FrameArtifact { size, payload })
}

#[cfg(test)]
#[path = "../../tests/unit/frame/build.rs"]
mod tests;
