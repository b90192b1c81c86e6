//! Error types for the packet crate.

/// Errors from packet encoding and decoding.
#[derive(Debug, thiserror::Error)]
pub enum PacketError {
    /// Transport encoding failed.
    #[error("packet encoding failed: {0}")]
    Encode(String),

    /// Transport decoding failed (truncated or corrupt payload).
    #[error("packet decoding failed: {0}")]
    Decode(String),
}

/// Convenience alias for packet results.
pub type PacketResult<T> = Result<T, PacketError>;
