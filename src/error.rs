use thiserror::Error;

/// Error type shared by every fallible operation in the crate.
#[derive(Debug, Error)]
pub enum NnError {
    /// A size that must be strictly positive was zero, or consecutive layers
    /// do not chain.
    #[error("invalid dimensions: {0}")]
    InvalidDimension(String),

    /// Vector or matrix lengths disagree at call time.
    #[error("dimension mismatch in {context}: expected {expected}, got {got}")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        got: usize,
    },

    /// An activation or loss selector outside its enumerated range.
    #[error("unknown {kind}: {id}")]
    InvalidSelector { kind: &'static str, id: usize },

    /// Split ratio outside the open interval (0, 1).
    #[error("invalid ratio: {0} (must lie strictly between 0 and 1)")]
    InvalidRatio(f64),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NnError>;

/// Fails with `DimensionMismatch` unless `got == expected`.
pub(crate) fn ensure_len(context: &'static str, expected: usize, got: usize) -> Result<()> {
    if expected == got {
        Ok(())
    } else {
        Err(NnError::DimensionMismatch { context, expected, got })
    }
}
