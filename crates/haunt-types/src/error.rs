//! Error types for the `haunt-types` crate.

/// Errors raised when decoding raw evidence or ghost discriminants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvidenceError {
    /// The raw index does not name one of the four evidence classes.
    #[error("invalid evidence class index: {0}")]
    InvalidClass(u8),

    /// The raw index does not name one of the four ghost classes.
    #[error("invalid ghost class index: {0}")]
    InvalidGhost(u8),
}
