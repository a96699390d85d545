use std::path::Path;

use rayon::prelude::*;
use tracing::debug;

use crate::encode::codec::FrameCodec;
use crate::encode::container::write_container;
use crate::foundation::core::{FrameArtifact, IconSize, SourceImage};
use crate::foundation::error::{IcopackError, IcopackResult};
use crate::frame::build::build_frame;

/// Edge lengths bundled when the caller does not ask for specific sizes.
pub const DEFAULT_SIZES: [u32; 7] = [16, 24, 32, 48, 64, 128, 256];

/// Per-run knobs for the bundling pipeline.
#[derive(Clone, Debug, Default)]
pub struct BundleOpts {
    /// Build frames for different sizes on a rayon pool.
    pub parallel: bool,
    /// Override rayon worker threads (parallel mode only).
    pub threads: Option<usize>,
}

/// Validate, sort, and dedup a requested size list.
///
/// Any out-of-range edge aborts the whole run rather than being skipped; an
/// empty request is an error since the container must hold at least one
/// frame.
pub fn normalize_sizes(sizes: &[u32]) -> IcopackResult<Vec<IconSize>> {
    if sizes.is_empty() {
        return Err(IcopackError::EmptyContainer);
    }
    let mut normalized = sizes
        .iter()
        .map(|&edge| IconSize::new(edge))
        .collect::<IcopackResult<Vec<_>>>()?;
    normalized.sort_unstable();
    normalized.dedup();
    Ok(normalized)
}

/// Assemble a complete icon container for `source` at the requested sizes.
///
/// Output frames are ordered by ascending edge length regardless of request
/// order or threading mode, so identical inputs produce identical bytes.
#[tracing::instrument(skip(source, codec, opts))]
pub fn bundle_icon(
    source: &SourceImage,
    sizes: &[u32],
    codec: &dyn FrameCodec,
    opts: &BundleOpts,
) -> IcopackResult<Vec<u8>> {
    let normalized = normalize_sizes(sizes)?;
    let frames = build_frames(source, &normalized, codec, opts)?;
    let bytes = write_container(&frames)?;
    debug!(
        frames = frames.len(),
        bytes = bytes.len(),
        "assembled icon container"
    );
    Ok(bytes)
}

/// Assemble a container and persist it at `out_path`.
///
/// The byte stream is built fully in memory and written in one call, so a
/// failed run never leaves a partially written file at the destination.
pub fn bundle_icon_to_path(
    source: &SourceImage,
    sizes: &[u32],
    codec: &dyn FrameCodec,
    opts: &BundleOpts,
    out_path: &Path,
) -> IcopackResult<()> {
    let bytes = bundle_icon(source, sizes, codec, opts)?;
    ensure_parent_dir(out_path)?;
    std::fs::write(out_path, &bytes)
        .map_err(|e| IcopackError::destination(format!("write '{}': {e}", out_path.display())))
}

/// Create the missing parent directories of `path`, if any.
pub fn ensure_parent_dir(path: &Path) -> IcopackResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                IcopackError::destination(format!(
                    "create output dir '{}': {e}",
                    parent.display()
                ))
            })?;
        }
    }
    Ok(())
}

fn build_frames(
    source: &SourceImage,
    sizes: &[IconSize],
    codec: &dyn FrameCodec,
    opts: &BundleOpts,
) -> IcopackResult<Vec<FrameArtifact>> {
    if !opts.parallel || sizes.len() < 2 {
        let mut frames = Vec::with_capacity(sizes.len());
        for &size in sizes {
            frames.push(build_frame(source, size, codec)?);
        }
        return Ok(frames);
    }

    let pool = build_thread_pool(opts.threads)?;
    let built = pool.install(|| {
        sizes
            .par_iter()
            .map(|&size| build_frame(source, size, codec))
            .collect::<Vec<_>>()
    });

    // Indexed collect keeps results in input order, so frames stay ascending.
    let mut frames = Vec::with_capacity(built.len());
    for item in built {
        frames.push(item?);
    }
    Ok(frames)
}

fn build_thread_pool(threads: Option<usize>) -> IcopackResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder.build().map_err(|e| {
        IcopackError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}"))
    })
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
