//! Error types for exactseg-count

use thiserror::Error;

/// Errors that can occur while computing an exact-count segmentation
#[derive(Debug, Error)]
pub enum SegmentError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] exactseg_core::Error),

    /// Region processing error
    #[error("region error: {0}")]
    Region(#[from] exactseg_region::RegionError),

    /// Morphology error
    #[error("morphology error: {0}")]
    Morph(#[from] exactseg_morph::MorphError),

    /// Superpixel generator error
    #[error("generator error: {0}")]
    Slic(#[from] exactseg_slic::SlicError),

    /// Inputs violate the entry point's preconditions
    #[error("precondition violated: {0}")]
    Precondition(String),

    /// The smallest region has no adjacent region to merge into
    #[error("region {label} (area {area}) has no neighbors to merge into")]
    IsolatedRegion { label: u32, area: u32 },

    /// The generator never produced enough regions
    #[error(
        "generator reached {achieved} of {desired} regions after {attempts} attempts (last request {n_segments})"
    )]
    Convergence {
        attempts: u32,
        n_segments: u32,
        achieved: usize,
        desired: usize,
    },

    /// The generator returned a label map of the wrong size
    #[error("generator returned {}x{} labels for a {}x{} image", .actual.0, .actual.1, .expected.0, .expected.1)]
    ShapeMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Invalid options
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for exact-count segmentation
pub type SegmentResult<T> = Result<T, SegmentError>;
