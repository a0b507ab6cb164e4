//! exactseg-morph - Morphological operations for exactseg
//!
//! This crate provides:
//!
//! - Structuring elements (SEL) defining operation neighborhoods
//! - Binary dilation of [`Mask`](exactseg_core::Mask) rasters
//!
//! # Examples
//!
//! ```
//! use exactseg_core::Mask;
//! use exactseg_morph::{Sel, dilate};
//!
//! let mut mask = Mask::new(5, 5).unwrap();
//! mask.set(2, 2, true).unwrap();
//!
//! // One 8-connected ring around a single pixel
//! let grown = dilate(&mask, &Sel::create_square(3).unwrap()).unwrap();
//! assert_eq!(grown.count(), 9);
//! ```

pub mod binary;
mod error;
pub mod sel;

pub use binary::{dilate, dilate_brick};
pub use error::{MorphError, MorphResult};
pub use sel::{Sel, SelElement};
