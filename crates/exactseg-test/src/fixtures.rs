//! Synthetic images and label maps
//!
//! Every randomized fixture takes an explicit seed so regressions are
//! reproducible run to run.

use crate::error::{TestError, TestResult};
use exactseg_core::{Image, LabelMap};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform noise in `[0, 1)` on every channel
pub fn noise_image(width: u32, height: u32, channels: u32, seed: u64) -> TestResult<Image> {
    let mut rng = StdRng::seed_from_u64(seed);
    let len = width as usize * height as usize * channels as usize;
    let data = (0..len).map(|_| rng.random::<f32>()).collect();
    Ok(Image::from_data(width, height, channels, data)?)
}

/// Gray image made of `block x block` tiles of random intensity
///
/// A little per-pixel jitter (at most `jitter`) is added on top of each
/// tile so that the image is not perfectly flat.
pub fn blocks_image(width: u32, height: u32, block: u32, jitter: f32, seed: u64) -> TestResult<Image> {
    if block == 0 {
        return Err(TestError::Fixture {
            name: "blocks_image".into(),
            message: "block size must be positive".into(),
        });
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let bw = width.div_ceil(block) as usize;
    let bh = height.div_ceil(block) as usize;
    let levels: Vec<f32> = (0..bw * bh).map(|_| rng.random::<f32>()).collect();

    let mut data = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in 0..width {
            let tile = (y / block) as usize * bw + (x / block) as usize;
            let noise = if jitter > 0.0 {
                rng.random_range(-jitter..jitter)
            } else {
                0.0
            };
            data.push((levels[tile] + noise).clamp(0.0, 1.0));
        }
    }
    Ok(Image::from_data(width, height, 1, data)?)
}

/// Single-channel horizontal ramp from 0 at the left edge to 1 at the right
pub fn gradient_image(width: u32, height: u32) -> TestResult<Image> {
    let denom = width.saturating_sub(1).max(1) as f32;
    let data = (0..height)
        .flat_map(|_| (0..width).map(move |x| x as f32 / denom))
        .collect();
    Ok(Image::from_data(width, height, 1, data)?)
}

/// Label map made of full-width horizontal bands
///
/// `bands` lists `(label, rows)` from top to bottom; the map height is the
/// sum of the rows.
pub fn stripes_label_map(width: u32, bands: &[(u32, u32)]) -> TestResult<LabelMap> {
    let height: u32 = bands.iter().map(|&(_, rows)| rows).sum();
    let mut data = Vec::with_capacity(width as usize * height as usize);
    for &(label, rows) in bands {
        data.extend(std::iter::repeat_n(label, width as usize * rows as usize));
    }
    Ok(LabelMap::from_data(width, height, data)?)
}

/// Label map of `cell x cell` tiles numbered from 1 in raster order
pub fn grid_label_map(width: u32, height: u32, cell: u32) -> TestResult<LabelMap> {
    if cell == 0 {
        return Err(TestError::Fixture {
            name: "grid_label_map".into(),
            message: "cell size must be positive".into(),
        });
    }
    let cols = width.div_ceil(cell);
    let mut data = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in 0..width {
            data.push((y / cell) * cols + x / cell + 1);
        }
    }
    Ok(LabelMap::from_data(width, height, data)?)
}
