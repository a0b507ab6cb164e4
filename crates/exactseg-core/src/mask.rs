//! Mask - Binary raster
//!
//! One `bool` per pixel, row-major. Masks are the operands of the binary
//! morphology in `exactseg-morph` and are typically built over a window of a
//! larger label map.

use crate::error::{Error, Result};

/// Binary image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    data: Vec<bool>,
}

impl Mask {
    /// Create an all-clear mask
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Mask {
            width,
            height,
            data: vec![false; width as usize * height as usize],
        })
    }

    /// Create a mask whose pixel (x, y) is `f(x, y)`
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> bool,
    {
        let mut mask = Self::new(width, height)?;
        for y in 0..height {
            for x in 0..width {
                mask.data[y as usize * width as usize + x as usize] = f(x, y);
            }
        }
        Ok(mask)
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

    /// Get the pixel at (x, y); out-of-bounds reads are clear
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.data[self.index(x, y)]
    }

    /// Set the pixel at (x, y)
    pub fn set(&mut self, x: u32, y: u32, value: bool) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let idx = self.index(x, y);
        self.data[idx] = value;
        Ok(())
    }

    /// Number of set pixels
    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }

    /// Whether no pixel is set
    pub fn is_clear(&self) -> bool {
        !self.data.iter().any(|&v| v)
    }

    /// Pixels set in `self` and clear in `other`
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the masks differ in size.
    pub fn subtract(&self, other: &Mask) -> Result<Mask> {
        if self.width != other.width || self.height != other.height {
            return Err(Error::DimensionMismatch {
                expected: (self.width, self.height),
                actual: (other.width, other.height),
            });
        }
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| a && !b)
            .collect();
        Ok(Mask {
            width: self.width,
            height: self.height,
            data,
        })
    }

    /// Iterate over the coordinates of set pixels in raster order
    pub fn iter_set(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let width = self.width as usize;
        self.data
            .iter()
            .enumerate()
            .filter(|(_, v)| **v)
            .map(move |(idx, _)| ((idx % width) as u32, (idx / width) as u32))
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}
