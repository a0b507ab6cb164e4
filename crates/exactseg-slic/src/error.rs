//! Error types for exactseg-slic

use thiserror::Error;

/// Errors that can occur during superpixel generation
#[derive(Debug, Error)]
pub enum SlicError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] exactseg_core::Error),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Empty image
    #[error("empty image: no pixels to process")]
    EmptyImage,
}

/// Result type for SLIC operations
pub type SlicResult<T> = Result<T, SlicError>;
