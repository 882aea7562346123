//! Error types for blend and composite operations.

use thiserror::Error;

/// Error type for blend and composite operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpsError {
    /// Background and foreground sizes differ.
    #[error("dimension mismatch: background {background:?}, foreground {foreground:?}")]
    DimensionMismatch {
        /// Background (width, height).
        background: (u32, u32),
        /// Foreground (width, height).
        foreground: (u32, u32),
    },

    /// Caller-provided output buffer does not match the input size.
    #[error("output size mismatch: expected {expected:?}, got {output:?}")]
    OutputMismatch {
        /// Shared input (width, height).
        expected: (u32, u32),
        /// Output buffer (width, height).
        output: (u32, u32),
    },

    /// A blend mode name did not match any known mode.
    #[error("unknown blend mode: {0}")]
    UnknownBlendMode(String),
}

/// Result type for blend and composite operations.
pub type OpsResult<T> = Result<T, OpsError>;
