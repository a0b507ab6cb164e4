//! Gaussian pre-smoothing
//!
//! Separable Gaussian blur applied independently to each channel of an
//! interleaved buffer. The kernel is truncated at four standard deviations
//! and borders replicate the nearest edge sample.

use crate::{SlicError, SlicResult};

const TRUNCATE: f32 = 4.0;

/// Build a normalized 1-D Gaussian kernel
///
/// # Errors
///
/// Returns [`SlicError::InvalidParameters`] if `sigma` is not positive.
pub fn gaussian_kernel(sigma: f32) -> SlicResult<Vec<f32>> {
    if sigma <= 0.0 || !sigma.is_finite() {
        return Err(SlicError::InvalidParameters(format!(
            "sigma must be positive and finite, got {}",
            sigma
        )));
    }
    let radius = (TRUNCATE * sigma + 0.5) as i32;
    let denom = 2.0 * sigma * sigma;
    let mut kernel: Vec<f32> = (-radius..=radius)
        .map(|i| (-((i * i) as f32) / denom).exp())
        .collect();
    let sum: f32 = kernel.iter().sum();
    for k in kernel.iter_mut() {
        *k /= sum;
    }
    Ok(kernel)
}

/// Blur an interleaved `width x height x channels` buffer
pub fn gaussian_smooth(
    data: &[f32],
    width: u32,
    height: u32,
    channels: u32,
    sigma: f32,
) -> SlicResult<Vec<f32>> {
    let kernel = gaussian_kernel(sigma)?;
    let radius = (kernel.len() / 2) as i64;
    let (w, h, c) = (width as i64, height as i64, channels as usize);

    // Horizontal pass
    let mut tmp = vec![0.0f32; data.len()];
    for y in 0..h {
        for x in 0..w {
            for ch in 0..c {
                let mut acc = 0.0;
                for (k, &weight) in kernel.iter().enumerate() {
                    let sx = (x + k as i64 - radius).clamp(0, w - 1);
                    acc += weight * data[((y * w + sx) as usize) * c + ch];
                }
                tmp[((y * w + x) as usize) * c + ch] = acc;
            }
        }
    }

    // Vertical pass
    let mut out = vec![0.0f32; data.len()];
    for y in 0..h {
        for x in 0..w {
            for ch in 0..c {
                let mut acc = 0.0;
                for (k, &weight) in kernel.iter().enumerate() {
                    let sy = (y + k as i64 - radius).clamp(0, h - 1);
                    acc += weight * tmp[((sy * w + x) as usize) * c + ch];
                }
                out[((y * w + x) as usize) * c + ch] = acc;
            }
        }
    }

    Ok(out)
}
