//! Image - Multi-channel floating-point raster
//!
//! `Image` is the read-only input of a segmentation run. It stores one or
//! more `f32` channels per pixel, interleaved, in row-major order with no
//! padding. The sample for channel `c` of pixel (x, y) lives at
//! `(y * width + x) * channels + c`.
//!
//! Unlike the label map, an image may have a zero width or height. Such an
//! image is representable so that callers can reject it with their own
//! error instead of failing at construction time.
//!
//! # Examples
//!
//! ```
//! use exactseg_core::Image;
//!
//! let gray = Image::from_gray8(2, 2, &[0, 64, 128, 255]).unwrap();
//! assert_eq!(gray.channels(), 1);
//! assert_eq!(gray.get(1, 1, 0), Some(1.0));
//! ```

use crate::error::{Error, Result};

/// Multi-channel floating-point image
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    width: u32,
    height: u32,
    channels: u32,
    data: Vec<f32>,
}

impl Image {
    /// Create a new image with every sample set to zero
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChannels`] if `channels` is 0.
    pub fn new(width: u32, height: u32, channels: u32) -> Result<Self> {
        if channels == 0 {
            return Err(Error::InvalidChannels(channels));
        }
        let size = width as usize * height as usize * channels as usize;
        Ok(Image {
            width,
            height,
            channels,
            data: vec![0.0; size],
        })
    }

    /// Create an image from interleaved samples
    ///
    /// # Errors
    ///
    /// Returns an error if `channels` is 0 or `data` does not hold exactly
    /// `width * height * channels` samples.
    pub fn from_data(width: u32, height: u32, channels: u32, data: Vec<f32>) -> Result<Self> {
        if channels == 0 {
            return Err(Error::InvalidChannels(channels));
        }
        let expected = width as usize * height as usize * channels as usize;
        if data.len() != expected {
            return Err(Error::DataLength {
                len: data.len(),
                width,
                height,
                channels,
            });
        }
        Ok(Image {
            width,
            height,
            channels,
            data,
        })
    }

    /// Create a single-channel image from 8-bit gray samples, scaled to `[0, 1]`
    pub fn from_gray8(width: u32, height: u32, samples: &[u8]) -> Result<Self> {
        let data = samples.iter().map(|&v| v as f32 / 255.0).collect();
        Self::from_data(width, height, 1, data)
    }

    /// Create a 3-channel image from packed 8-bit RGB samples, scaled to `[0, 1]`
    pub fn from_rgb8(width: u32, height: u32, samples: &[u8]) -> Result<Self> {
        let data = samples.iter().map(|&v| v as f32 / 255.0).collect();
        Self::from_data(width, height, 3, data)
    }

    /// Get the image width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the image dimensions as (width, height)
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the number of channels per pixel
    #[inline]
    pub fn channels(&self) -> u32 {
        self.channels
    }

    /// Total number of pixels (not samples)
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// True when the image has no pixels
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Raw interleaved samples
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Consume the image and return its samples
    pub fn into_data(self) -> Vec<f32> {
        self.data
    }

    /// Get one sample, or `None` when out of bounds
    pub fn get(&self, x: u32, y: u32, channel: u32) -> Option<f32> {
        if x >= self.width || y >= self.height || channel >= self.channels {
            return None;
        }
        Some(self.data[self.offset(x, y) + channel as usize])
    }

    /// Get every channel of a pixel, or `None` when out of bounds
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[f32]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = self.offset(x, y);
        Some(&self.data[start..start + self.channels as usize])
    }

    /// Set one sample
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] for coordinates outside the image and
    /// [`Error::InvalidChannels`] for a channel index that does not exist.
    pub fn set(&mut self, x: u32, y: u32, channel: u32, value: f32) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        if channel >= self.channels {
            return Err(Error::InvalidChannels(channel));
        }
        let idx = self.offset(x, y) + channel as usize;
        self.data[idx] = value;
        Ok(())
    }

    /// Largest sample over all channels, `None` for an empty image
    pub fn max_value(&self) -> Option<f32> {
        self.data.iter().copied().reduce(f32::max)
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * self.channels as usize
    }
}
