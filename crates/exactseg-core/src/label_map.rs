//! LabelMap - Per-pixel region labels
//!
//! A `LabelMap` assigns a `u32` label to every pixel of an image. The set of
//! labels is not required to be contiguous: after merges a label map can be
//! sparse, and label 0 is an ordinary label like any other.
//!
//! # Memory Layout
//!
//! Data is stored in row-major order with no padding. The label of pixel
//! (x, y) is at index `y * width + x`.
//!
//! # Examples
//!
//! ```
//! use exactseg_core::LabelMap;
//!
//! let mut labels = LabelMap::from_rows(&[&[1, 1, 2], &[3, 3, 2]]).unwrap();
//! assert_eq!(labels.num_labels(), 3);
//!
//! let changed = labels.relabel(3, 1);
//! assert_eq!(changed, 2);
//! assert_eq!(labels.distinct_labels(), vec![1, 2]);
//! ```

use crate::error::{Error, Result};
use std::collections::HashSet;

/// Two-dimensional array of region labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMap {
    width: u32,
    height: u32,
    data: Vec<u32>,
}

impl LabelMap {
    /// Create a label map with every pixel set to `label`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32, label: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(LabelMap {
            width,
            height,
            data: vec![label; width as usize * height as usize],
        })
    }

    /// Create a label map from row-major labels
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is 0 or the data length does not
    /// match `width * height`.
    pub fn from_data(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if data.len() != width as usize * height as usize {
            return Err(Error::DataLength {
                len: data.len(),
                width,
                height,
                channels: 1,
            });
        }
        Ok(LabelMap {
            width,
            height,
            data,
        })
    }

    /// Create a label map from a slice of equally long rows
    pub fn from_rows(rows: &[&[u32]]) -> Result<Self> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.len()) as u32;
        if rows.iter().any(|r| r.len() != width as usize) {
            return Err(Error::InvalidParameter(
                "all rows must have the same length".into(),
            ));
        }
        let data = rows.iter().flat_map(|r| r.iter().copied()).collect();
        Self::from_data(width, height, data)
    }

    /// Get the width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the dimensions as (width, height)
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Total number of pixels
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.data.len()
    }

    /// Raw row-major labels
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    /// Consume the map and return its labels
    pub fn into_data(self) -> Vec<u32> {
        self.data
    }

    /// Get the label at (x, y), or `None` when out of bounds
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y as usize * self.width as usize + x as usize])
    }

    /// Get the label at (x, y) without bounds checking against the width
    ///
    /// # Panics
    ///
    /// Panics if the computed index is past the end of the data.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> u32 {
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Set the label at (x, y)
    pub fn set(&mut self, x: u32, y: u32, label: u32) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.data[y as usize * self.width as usize + x as usize] = label;
        Ok(())
    }

    /// Distinct labels in the order they are first met in a raster scan
    pub fn distinct_labels(&self) -> Vec<u32> {
        let mut seen = HashSet::new();
        self.data
            .iter()
            .copied()
            .filter(|&label| seen.insert(label))
            .collect()
    }

    /// Number of distinct labels
    pub fn num_labels(&self) -> usize {
        self.data.iter().collect::<HashSet<_>>().len()
    }

    /// Whether any pixel carries `label`
    pub fn contains_label(&self, label: u32) -> bool {
        self.data.contains(&label)
    }

    /// Replace every occurrence of `from` with `to`
    ///
    /// Returns the number of pixels changed.
    pub fn relabel(&mut self, from: u32, to: u32) -> usize {
        if from == to {
            return 0;
        }
        let mut changed = 0;
        for label in self.data.iter_mut().filter(|l| **l == from) {
            *label = to;
            changed += 1;
        }
        changed
    }

    /// Apply a label mapping to every pixel
    pub fn map_labels<F>(&mut self, mut f: F)
    where
        F: FnMut(u32) -> u32,
    {
        for label in self.data.iter_mut() {
            *label = f(*label);
        }
    }

    /// Check that this map has the given dimensions
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] when the shapes differ.
    pub fn check_dimensions(&self, width: u32, height: u32) -> Result<()> {
        if self.width != width || self.height != height {
            return Err(Error::DimensionMismatch {
                expected: (width, height),
                actual: (self.width, self.height),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty() {
        assert!(LabelMap::new(0, 3, 0).is_err());
        assert!(LabelMap::new(3, 0, 0).is_err());
        let labels = LabelMap::new(3, 2, 7).unwrap();
        assert_eq!(labels.num_labels(), 1);
        assert_eq!(labels.get(2, 1), Some(7));
        assert_eq!(labels.get(3, 1), None);
    }

    #[test]
    fn test_from_rows_ragged() {
        assert!(LabelMap::from_rows(&[&[1, 2], &[3]]).is_err());
        assert!(LabelMap::from_rows(&[]).is_err());
    }

    #[test]
    fn test_distinct_labels_first_appearance_order() {
        let labels = LabelMap::from_rows(&[&[5, 5, 2], &[9, 2, 5]]).unwrap();
        assert_eq!(labels.distinct_labels(), vec![5, 2, 9]);
        assert_eq!(labels.num_labels(), 3);
    }

    #[test]
    fn test_relabel() {
        let mut labels = LabelMap::from_rows(&[&[1, 2], &[2, 2]]).unwrap();
        assert_eq!(labels.relabel(2, 1), 3);
        assert_eq!(labels.data(), &[1, 1, 1, 1]);
        assert_eq!(labels.relabel(1, 1), 0);
        assert!(!labels.contains_label(2));
    }

    #[test]
    fn test_map_labels() {
        let mut labels = LabelMap::from_rows(&[&[1, 2, 3]]).unwrap();
        labels.map_labels(|l| l * 10);
        assert_eq!(labels.data(), &[10, 20, 30]);
    }

    #[test]
    fn test_check_dimensions() {
        let labels = LabelMap::new(4, 3, 0).unwrap();
        assert!(labels.check_dimensions(4, 3).is_ok());
        assert!(matches!(
            labels.check_dimensions(3, 4),
            Err(Error::DimensionMismatch { .. })
        ));
    }
}
