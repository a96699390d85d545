//! Per-size square frame construction.

/// Build one centered, codec-compressed frame per requested size.
pub mod build;
