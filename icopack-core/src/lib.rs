//! icopack assembles multi-resolution Windows icon (`.ico`) containers.
//!
//! The pipeline turns one source image into a set of square, PNG-compressed
//! frames and serializes them behind the container's directory table:
//!
//! 1. **Decode**: encoded bytes (raster formats or SVG) -> [`SourceImage`]
//!    (straight RGBA8)
//! 2. **Frame build**: aspect-preserving resample onto a transparent
//!    `edge x edge` canvas, centered, then codec-compressed ([`build_frame`])
//! 3. **Container write**: 6-byte header, one 16-byte directory entry per
//!    frame, concatenated payloads; offsets patched into the reserved
//!    directory once every payload length is known ([`write_container`])
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: identical inputs produce byte-identical
//!   containers (fixed codec settings, ascending-size frame order).
//! - **No partial output**: the container is assembled fully in memory and
//!   persisted with a single write; a failed run never touches the
//!   destination.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod encode;
mod foundation;
mod frame;
mod pipeline;

pub use assets::decode::{decode_source, decode_source_path};
pub use encode::codec::{FrameCodec, PngCodec};
pub use encode::container::{CONTAINER_HEADER_LEN, DIRECTORY_ENTRY_LEN, write_container};
pub use foundation::core::{FrameArtifact, IconSize, MAX_EDGE, SourceImage};
pub use foundation::error::{IcopackError, IcopackResult};
pub use frame::build::{build_frame, fit_dimensions};
pub use pipeline::{
    BundleOpts, DEFAULT_SIZES, bundle_icon, bundle_icon_to_path, ensure_parent_dir,
    normalize_sizes,
};
