//! exactseg-core - Basic raster types for exact-count segmentation
//!
//! This crate provides the data structures shared by every other crate in
//! the workspace:
//!
//! - [`Image`] - Read-only multi-channel `f32` input raster
//! - [`LabelMap`] - Per-pixel `u32` region labels (the mutable artifact)
//! - [`Mask`] - Binary raster used by morphology
//! - [`Box`] - Rectangle regions

pub mod box_;
pub mod error;
pub mod image;
pub mod label_map;
pub mod mask;

pub use box_::Box;
pub use error::{Error, Result};
pub use image::Image;
pub use label_map::LabelMap;
pub use mask::Mask;
