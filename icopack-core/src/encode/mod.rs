//! Frame compression and container serialization.

/// Frame codec seam and the production PNG codec.
pub mod codec;
/// Icon container byte-stream writer.
pub mod container;
