//! exactseg-count - Exact-count superpixel segmentation
//!
//! Superpixel generators such as SLIC only approximate the number of
//! segments they are asked for. This crate turns any such generator into one
//! that returns exactly the requested number of regions:
//!
//! - **Count inflation** - ask the generator for more segments than needed,
//!   growing the request until enough regions come back
//! - **Region reduction** - merge the smallest region into its smallest
//!   neighbor until the count is exact
//!
//! # Examples
//!
//! ```
//! use exactseg_core::{Image, LabelMap};
//! use exactseg_count::{ExactSegmentOptions, SegmentResult, compute_exact_segmentation};
//!
//! // A generator that always over-segments into one label per column
//! let columns = |image: &Image, _n: u32| -> SegmentResult<LabelMap> {
//!     let data = (0..image.pixel_count() as u32).map(|i| i % image.width()).collect();
//!     Ok(LabelMap::from_data(image.width(), image.height(), data)?)
//! };
//!
//! let image = Image::new(12, 4, 1).unwrap();
//! let labels =
//!     compute_exact_segmentation(&image, 5, &columns, &ExactSegmentOptions::default()).unwrap();
//! assert_eq!(labels.num_labels(), 5);
//! ```

mod error;
pub mod exact;
pub mod generator;
pub mod inflate;
pub mod reduce;

pub use error::{SegmentError, SegmentResult};
pub use exact::{
    ExactSegmentOptions, ExactSegmentation, compute_exact_segmentation,
    compute_exact_segmentation_with_report, exact_num_superpixels,
};
pub use generator::SegmentationGenerator;
pub use inflate::{InflateOptions, InflateOutcome, inflate_count};
pub use reduce::{MergeStep, reduce_to_count};
