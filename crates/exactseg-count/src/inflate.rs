//! Count inflation
//!
//! The generator only approximates the number of segments it is asked for.
//! Inflation asks for somewhat more than the desired count and keeps raising
//! the request until the generator delivers at least the desired number of
//! regions. Any excess is removed afterwards by region reduction.

use crate::generator::SegmentationGenerator;
use crate::{SegmentError, SegmentResult};
use exactseg_core::{Image, LabelMap};
use log::{debug, warn};

// =============================================================================
// Constants
// =============================================================================

/// Initial request as a multiple of the desired count
pub const DEFAULT_INITIAL_FACTOR: f64 = 1.15;

/// Factor by which the request grows after a shortfall
pub const DEFAULT_GROWTH_FACTOR: f64 = 1.1;

/// Maximum generator calls before giving up
pub const DEFAULT_MAX_ATTEMPTS: u32 = 20;

// =============================================================================
// Options
// =============================================================================

/// Options for count inflation
#[derive(Debug, Clone, PartialEq)]
pub struct InflateOptions {
    /// First request is `floor(desired * initial_factor)`
    pub initial_factor: f64,
    /// Each retry requests `floor(previous * growth_factor)`, at least one more
    pub growth_factor: f64,
    /// Maximum number of generator calls
    pub max_attempts: u32,
}

impl Default for InflateOptions {
    fn default() -> Self {
        Self {
            initial_factor: DEFAULT_INITIAL_FACTOR,
            growth_factor: DEFAULT_GROWTH_FACTOR,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl InflateOptions {
    /// Check that every option is in range
    pub fn validate(&self) -> SegmentResult<()> {
        if !(self.initial_factor >= 1.0 && self.initial_factor.is_finite()) {
            return Err(SegmentError::InvalidParameters(format!(
                "initial_factor must be at least 1, got {}",
                self.initial_factor
            )));
        }
        if !(self.growth_factor > 1.0 && self.growth_factor.is_finite()) {
            return Err(SegmentError::InvalidParameters(format!(
                "growth_factor must be greater than 1, got {}",
                self.growth_factor
            )));
        }
        if self.max_attempts == 0 {
            return Err(SegmentError::InvalidParameters(
                "max_attempts must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Result of a successful inflation
#[derive(Debug, Clone)]
pub struct InflateOutcome {
    /// Label map with at least the desired number of regions
    pub labels: LabelMap,
    /// Number of distinct labels in `labels`
    pub count: usize,
    /// The request that produced `labels`
    pub n_segments: u32,
    /// Number of generator calls made
    pub attempts: u32,
}

// =============================================================================
// Main API
// =============================================================================

/// Call the generator until it yields at least `desired` regions
///
/// # Arguments
///
/// * `image` - Input image, passed unchanged to the generator
/// * `desired` - Minimum number of regions required
/// * `generator` - Superpixel generator
/// * `options` - Growth schedule and attempt cap
///
/// # Errors
///
/// Returns [`SegmentError::Convergence`] when the attempt cap is exhausted,
/// or as soon as a request clamped to the pixel count falls short (larger
/// requests cannot help). Generator errors and wrongly shaped label maps
/// are propagated.
pub fn inflate_count<G>(
    image: &Image,
    desired: usize,
    generator: &G,
    options: &InflateOptions,
) -> SegmentResult<InflateOutcome>
where
    G: SegmentationGenerator + ?Sized,
{
    options.validate()?;
    if desired == 0 {
        return Err(SegmentError::Precondition(
            "desired count must be at least 1".into(),
        ));
    }

    let ceiling = u32::try_from(image.pixel_count()).unwrap_or(u32::MAX);
    let mut n_segments = clamp_request(desired as f64 * options.initial_factor, ceiling);
    let mut achieved = 0;

    for attempt in 1..=options.max_attempts {
        let labels = generator.generate(image, n_segments)?;
        if labels.dimensions() != image.dimensions() {
            return Err(SegmentError::ShapeMismatch {
                expected: image.dimensions(),
                actual: labels.dimensions(),
            });
        }

        achieved = labels.num_labels();
        debug!(
            "inflate attempt {}: requested {}, got {} of {} regions",
            attempt, n_segments, achieved, desired
        );

        if achieved >= desired {
            return Ok(InflateOutcome {
                labels,
                count: achieved,
                n_segments,
                attempts: attempt,
            });
        }

        if n_segments >= ceiling {
            warn!(
                "inflate: request already at pixel count {} but only {} regions",
                ceiling, achieved
            );
            return Err(SegmentError::Convergence {
                attempts: attempt,
                n_segments,
                achieved,
                desired,
            });
        }

        let grown = clamp_request(n_segments as f64 * options.growth_factor, ceiling);
        n_segments = grown.max(n_segments + 1).min(ceiling);
    }

    Err(SegmentError::Convergence {
        attempts: options.max_attempts,
        n_segments,
        achieved,
        desired,
    })
}

/// Floor a request and keep it in `1..=ceiling`
fn clamp_request(value: f64, ceiling: u32) -> u32 {
    (value.floor() as u64).clamp(1, ceiling.max(1) as u64) as u32
}
