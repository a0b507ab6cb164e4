//! Error types for exactseg-region

use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] exactseg_core::Error),

    /// Morphology error
    #[error("morphology error: {0}")]
    Morph(#[from] exactseg_morph::MorphError),

    /// The requested label is not present in the label map
    #[error("label {0} not present in label map")]
    LabelNotFound(u32),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
