//! Superpixel generator seam
//!
//! The count correction treats the generator as a black box: it is asked for
//! a number of segments and returns a label map whose region count is only
//! expected to grow, on average, with the request. Tuning parameters travel
//! inside the generator value.

use crate::SegmentResult;
use exactseg_core::{Image, LabelMap};
use exactseg_slic::Slic;

/// Produces an approximate superpixel segmentation
pub trait SegmentationGenerator {
    /// Segment `image` into approximately `n_segments` regions
    fn generate(&self, image: &Image, n_segments: u32) -> SegmentResult<LabelMap>;
}

impl SegmentationGenerator for Slic {
    fn generate(&self, image: &Image, n_segments: u32) -> SegmentResult<LabelMap> {
        Ok(self.segment(image, n_segments)?)
    }
}

/// Any closure with the generator signature is a generator
impl<F> SegmentationGenerator for F
where
    F: Fn(&Image, u32) -> SegmentResult<LabelMap>,
{
    fn generate(&self, image: &Image, n_segments: u32) -> SegmentResult<LabelMap> {
        self(image, n_segments)
    }
}
