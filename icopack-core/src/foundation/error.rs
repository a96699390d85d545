/// Convenience result type used across icopack.
pub type IcopackResult<T> = Result<T, IcopackError>;

/// Top-level error taxonomy used by the icon pipeline.
///
/// Every variant is terminal for the current invocation; nothing is retried
/// internally.
#[derive(thiserror::Error, Debug)]
pub enum IcopackError {
    /// Requested edge length outside the container's representable `1..=256`.
    #[error("invalid icon size {0}: edge must be within 1..=256")]
    InvalidSize(u32),

    /// The frame codec could not produce a compressed payload.
    #[error("frame encode failed: {0}")]
    Encode(String),

    /// The container writer was handed an empty frame set.
    #[error("icon container requires at least one frame")]
    EmptyContainer,

    /// More frames than the 16-bit directory count field can hold.
    #[error("too many icon frames: {0} (directory count field is 16-bit)")]
    TooManyFrames(usize),

    /// A payload offset or length does not fit the 32-bit directory fields.
    #[error("container field overflow: {0}")]
    SizeOverflow(String),

    /// The source image could not be read or decoded.
    #[error("source image unavailable: {0}")]
    Source(String),

    /// The assembled container could not be persisted.
    #[error("destination unwritable: {0}")]
    Destination(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IcopackError {
    /// Build an [`IcopackError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build an [`IcopackError::SizeOverflow`] value.
    pub fn size_overflow(msg: impl Into<String>) -> Self {
        Self::SizeOverflow(msg.into())
    }

    /// Build an [`IcopackError::Source`] value.
    pub fn source(msg: impl Into<String>) -> Self {
        Self::Source(msg.into())
    }

    /// Build an [`IcopackError::Destination`] value.
    pub fn destination(msg: impl Into<String>) -> Self {
        Self::Destination(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
