//! exactseg - Superpixels with an exact region count
//!
//! Superpixel algorithms such as SLIC return roughly the number of segments
//! they are asked for. exactseg wraps a generator so that the result has
//! exactly the requested number of regions: the generator is asked for
//! more segments than needed, and the surplus is merged away by repeatedly
//! folding the smallest region into its smallest neighbor.
//!
//! # Overview
//!
//! - [`count`] - exact-count entry points, inflation and region reduction
//! - [`slic`] - the built-in SLIC generator
//! - [`region`] - region properties, adjacency and connectivity
//! - [`morph`] - structuring elements and binary dilation
//!
//! # Example
//!
//! ```
//! use exactseg::Image;
//! use exactseg::count::exact_num_superpixels;
//!
//! let samples: Vec<u8> = (0..16 * 16)
//!     .flat_map(|i| if i % 16 < 8 { [30, 30, 30] } else { [200, 60, 60] })
//!     .collect();
//! let image = Image::from_rgb8(16, 16, &samples).unwrap();
//!
//! let labels = exact_num_superpixels(&image, 5, 10.0, 0.0).unwrap();
//! assert_eq!(labels.num_labels(), 5);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use exactseg_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use exactseg_count as count;
pub use exactseg_morph as morph;
pub use exactseg_region as region;
pub use exactseg_slic as slic;

// The main entry points at the top level
pub use exactseg_count::{
    ExactSegmentOptions, SegmentError, SegmentResult, SegmentationGenerator,
    compute_exact_segmentation,
};
