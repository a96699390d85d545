use std::path::Path;

use crate::foundation::core::SourceImage;
use crate::foundation::error::{IcopackError, IcopackResult};

/// Minimum long-edge raster resolution for SVG sources, so small intrinsic
/// sizes still downscale cleanly to every icon frame.
const SVG_MIN_LONG_EDGE: u32 = 512;

/// Cap on rasterized SVG dimensions to avoid pathological allocations.
const SVG_MAX_DIM: u32 = 16_384;

/// Decode encoded source bytes into a straight-alpha RGBA8 [`SourceImage`].
///
/// SVG content is detected and rasterized; everything else goes through the
/// `image` crate's format sniffing. Alpha is kept straight (no
/// premultiplication) so frame payloads lose no channel precision.
pub fn decode_source(bytes: &[u8]) -> IcopackResult<SourceImage> {
    if looks_like_svg(bytes) {
        return rasterize_svg(bytes);
    }
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| IcopackError::source(format!("decode image from memory: {e}")))?;
    SourceImage::new(dyn_img.to_rgba8())
}

/// Read and decode a source image from `path`.
pub fn decode_source_path(path: &Path) -> IcopackResult<SourceImage> {
    let bytes = std::fs::read(path)
        .map_err(|e| IcopackError::source(format!("read '{}': {e}", path.display())))?;
    if path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
    {
        return rasterize_svg(&bytes);
    }
    decode_source(&bytes)
}

fn looks_like_svg(bytes: &[u8]) -> bool {
    let head: Vec<u8> = bytes.iter().take(512).copied().collect();
    let text = String::from_utf8_lossy(&head);
    let trimmed = text.trim_start();
    trimmed.starts_with("<?xml") || trimmed.starts_with("<svg") || trimmed.starts_with("<!DOCTYPE svg")
}

fn rasterize_svg(bytes: &[u8]) -> IcopackResult<SourceImage> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(bytes, &opts)
        .map_err(|e| IcopackError::source(format!("parse svg tree: {e}")))?;

    let (width, height) = svg_raster_size(&tree)?;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| IcopackError::source("failed to allocate svg pixmap"))?;

    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);
    resvg::render(&tree, xform, &mut pixmap.as_mut());

    // tiny-skia pixels are premultiplied; icon frames keep straight alpha.
    let mut rgba8 = Vec::with_capacity((width as usize) * (height as usize) * 4);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        rgba8.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    SourceImage::from_rgba8(width, height, rgba8)
}

fn svg_raster_size(tree: &usvg::Tree) -> IcopackResult<(u32, u32)> {
    fn to_px(v: f32) -> IcopackResult<u32> {
        if !v.is_finite() || v <= 0.0 {
            return Err(IcopackError::source("svg has invalid width/height"));
        }
        Ok((v.ceil() as u32).max(1))
    }

    let size = tree.size();
    let base_w = to_px(size.width())?;
    let base_h = to_px(size.height())?;

    let long_edge = base_w.max(base_h);
    let scale = if long_edge < SVG_MIN_LONG_EDGE {
        f64::from(SVG_MIN_LONG_EDGE) / f64::from(long_edge)
    } else {
        1.0
    };
    let w = (f64::from(base_w) * scale).round().max(1.0) as u32;
    let h = (f64::from(base_h) * scale).round().max(1.0) as u32;

    if w > SVG_MAX_DIM || h > SVG_MAX_DIM {
        return Err(IcopackError::source(format!(
            "svg raster size too large: {w}x{h} (max {SVG_MAX_DIM}x{SVG_MAX_DIM})"
        )));
    }
    Ok((w, h))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
