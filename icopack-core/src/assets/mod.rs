//! Source decoding front door (raster formats and SVG).

/// Decode encoded bytes or files into a [`crate::SourceImage`].
pub mod decode;
