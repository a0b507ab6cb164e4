//! exactseg-slic - SLIC superpixel generation
//!
//! This crate provides the default superpixel generator used by exactseg:
//!
//! - **SLIC clustering** - k-means over color and position in local windows
//! - **Color conversion** - sRGB to CIELAB for perceptual color distances
//! - **Pre-smoothing** - separable Gaussian blur
//! - **Connectivity enforcement** - one connected region per label
//!
//! Like every SLIC implementation, the generator hits the requested number
//! of superpixels only approximately.
//!
//! # Examples
//!
//! ```
//! use exactseg_core::Image;
//! use exactseg_slic::{Slic, SlicOptions};
//!
//! let image = Image::from_rgb8(8, 8, &[128u8; 8 * 8 * 3]).unwrap();
//! let slic = Slic::new(SlicOptions::with_tuning(10.0, 1.0)).unwrap();
//! let labels = slic.segment(&image, 4).unwrap();
//! assert!(labels.num_labels() >= 1);
//! ```

pub mod colorspace;
pub mod connectivity;
mod error;
pub mod slic;
pub mod smooth;

pub use error::{SlicError, SlicResult};
pub use slic::{Slic, SlicOptions, slic};
