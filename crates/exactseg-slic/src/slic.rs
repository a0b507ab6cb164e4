//! SLIC superpixels
//!
//! Simple Linear Iterative Clustering: k-means over (color, position) with
//! each center restricted to a local search window.
//!
//! The algorithm proceeds in 4 phases:
//! 1. **Prepare**: optional CIELAB conversion and Gaussian smoothing
//! 2. **Seed**: place centers on a regular grid
//! 3. **Cluster**: alternate assignment and center update
//! 4. **Connect**: split disconnected clusters and absorb tiny fragments
//!
//! The number of superpixels produced only approximates the number
//! requested: the grid is integral, and the connectivity pass can both
//! add and remove regions.

use crate::colorspace::image_to_lab;
use crate::connectivity::enforce_connectivity;
use crate::smooth::gaussian_smooth;
use crate::{SlicError, SlicResult};
use exactseg_core::{Image, LabelMap};
use log::{debug, trace};

const UNASSIGNED: u32 = u32::MAX;

// =============================================================================
// Options
// =============================================================================

/// Options for SLIC segmentation
///
/// The defaults follow the common scikit-image settings, so `compactness`
/// is calibrated for CIELAB input.
#[derive(Debug, Clone, PartialEq)]
pub struct SlicOptions {
    /// Balance between color and spatial proximity
    ///
    /// Higher values give more compact, grid-like superpixels.
    pub compactness: f32,

    /// Standard deviation of the Gaussian pre-smoothing; 0 disables it
    pub sigma: f32,

    /// Maximum number of assignment/update rounds
    pub max_iterations: u32,

    /// Convert 3-channel input from sRGB to CIELAB before clustering
    ///
    /// Ignored for images that do not have exactly three channels.
    pub convert_to_lab: bool,

    /// Split disconnected clusters and absorb small fragments
    pub enforce_connectivity: bool,

    /// Fragments smaller than this fraction of the average superpixel size
    /// are absorbed by a neighbor
    pub min_size_factor: f32,
}

impl Default for SlicOptions {
    fn default() -> Self {
        Self {
            compactness: 10.0,
            sigma: 0.0,
            max_iterations: 10,
            convert_to_lab: true,
            enforce_connectivity: true,
            min_size_factor: 0.5,
        }
    }
}

impl SlicOptions {
    /// Options with the given compactness and smoothing, defaults otherwise
    pub fn with_tuning(compactness: f32, sigma: f32) -> Self {
        Self {
            compactness,
            sigma,
            ..Self::default()
        }
    }

    /// Check that every option is in range
    pub fn validate(&self) -> SlicResult<()> {
        if self.compactness <= 0.0 || !self.compactness.is_finite() {
            return Err(SlicError::InvalidParameters(format!(
                "compactness must be positive, got {}",
                self.compactness
            )));
        }
        if self.sigma < 0.0 || !self.sigma.is_finite() {
            return Err(SlicError::InvalidParameters(format!(
                "sigma must be non-negative, got {}",
                self.sigma
            )));
        }
        if self.max_iterations == 0 {
            return Err(SlicError::InvalidParameters(
                "max_iterations must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.min_size_factor) {
            return Err(SlicError::InvalidParameters(format!(
                "min_size_factor must be in [0, 1], got {}",
                self.min_size_factor
            )));
        }
        Ok(())
    }
}

// =============================================================================
// Main API
// =============================================================================

/// SLIC superpixel generator carrying its tuning options
#[derive(Debug, Clone, Default)]
pub struct Slic {
    options: SlicOptions,
}

impl Slic {
    /// Create a generator, validating the options
    pub fn new(options: SlicOptions) -> SlicResult<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// The tuning options
    pub fn options(&self) -> &SlicOptions {
        &self.options
    }

    /// Segment an image into approximately `n_segments` superpixels
    pub fn segment(&self, image: &Image, n_segments: u32) -> SlicResult<LabelMap> {
        slic(image, n_segments, &self.options)
    }
}

/// Segment an image into approximately `n_segments` superpixels
///
/// # Arguments
///
/// * `image` - Input image with any number of channels
/// * `n_segments` - Requested number of superpixels
/// * `options` - Tuning parameters
///
/// # Returns
///
/// A label map of the image's size. Labels start at 1; with
/// `enforce_connectivity` they are contiguous and each is one 4-connected
/// region.
///
/// # Example
///
/// ```
/// use exactseg_core::Image;
/// use exactseg_slic::{SlicOptions, slic};
///
/// let image = Image::new(20, 20, 1).unwrap();
/// let labels = slic(&image, 4, &SlicOptions::default()).unwrap();
/// assert_eq!(labels.dimensions(), (20, 20));
/// ```
pub fn slic(image: &Image, n_segments: u32, options: &SlicOptions) -> SlicResult<LabelMap> {
    options.validate()?;
    if image.is_empty() {
        return Err(SlicError::EmptyImage);
    }
    if n_segments == 0 {
        return Err(SlicError::InvalidParameters(
            "n_segments must be at least 1".into(),
        ));
    }

    let (width, height) = image.dimensions();
    let channels = image.channels() as usize;

    // Phase 1: features
    let mut features = feature_vectors(image, options);
    if options.sigma > 0.0 {
        features = gaussian_smooth(&features, width, height, channels as u32, options.sigma)?;
    }

    // Phase 2: seeds
    let grid = Grid::new(width, height, n_segments);
    let mut centers = grid.seed_centers(&features, width, channels);
    debug!(
        "slic: requested {} segments, seeded {} centers (step {}x{})",
        n_segments,
        centers.len(),
        grid.step_x,
        grid.step_y
    );

    // Phase 3: clustering
    let clusters = cluster(&features, width, height, channels, &mut centers, &grid, options);

    // Phase 4: connectivity
    let labels = if options.enforce_connectivity {
        let segment_size = (width as f32 * height as f32) / centers.len() as f32;
        let min_size = (options.min_size_factor * segment_size) as usize;
        enforce_connectivity(&clusters, width, height, min_size)
    } else {
        clusters.into_iter().map(|c| c + 1).collect()
    };

    Ok(LabelMap::from_data(width, height, labels)?)
}

// =============================================================================
// Internal Implementation
// =============================================================================

/// Regular seeding grid
#[derive(Debug, Clone, Copy)]
struct Grid {
    step_x: u32,
    step_y: u32,
}

impl Grid {
    /// Choose integral steps so that roughly `n_segments` cells tile the image
    fn new(width: u32, height: u32, n_segments: u32) -> Self {
        let total = width as f64 * height as f64;
        let n = n_segments as f64;
        let step = (total / n).sqrt();

        let (mut sx, mut sy) = (step, step);
        if sx > width as f64 {
            sx = width as f64;
            sy = total / (n * width as f64);
        }
        if sy > height as f64 {
            sy = height as f64;
            sx = (total / (n * height as f64)).min(width as f64);
        }

        Grid {
            step_x: (sx.floor() as u32).clamp(1, width),
            step_y: (sy.floor() as u32).clamp(1, height),
        }
    }

    /// Spatial normalization used in the distance
    fn spacing(&self) -> f32 {
        self.step_x.max(self.step_y) as f32
    }

    fn seed_centers(&self, features: &[f32], width: u32, channels: usize) -> Vec<Center> {
        let height = (features.len() / channels) as u32 / width;
        let xs: Vec<u32> = (self.step_x / 2..width).step_by(self.step_x as usize).collect();
        let ys: Vec<u32> = (self.step_y / 2..height).step_by(self.step_y as usize).collect();

        let mut centers = Vec::with_capacity(xs.len() * ys.len());
        for &y in &ys {
            for &x in &xs {
                let start = (y as usize * width as usize + x as usize) * channels;
                centers.push(Center {
                    x: x as f32,
                    y: y as f32,
                    color: features[start..start + channels].to_vec(),
                });
            }
        }
        centers
    }
}

/// Cluster center in (color, position) space
#[derive(Debug, Clone)]
struct Center {
    x: f32,
    y: f32,
    color: Vec<f32>,
}

/// Per-pixel feature vectors: Lab for RGB input when requested, raw values otherwise.
fn feature_vectors(image: &Image, options: &SlicOptions) -> Vec<f32> {
    if !options.convert_to_lab {
        return image.data().to_vec();
    }
    image_to_lab(image).unwrap_or_else(|| image.data().to_vec())
}

fn cluster(
    features: &[f32],
    width: u32,
    height: u32,
    channels: usize,
    centers: &mut [Center],
    grid: &Grid,
    options: &SlicOptions,
) -> Vec<u32> {
    let n_pixels = width as usize * height as usize;
    let spacing = grid.spacing();
    let spatial_weight = (options.compactness / spacing).powi(2);
    let reach = 2.0 * spacing;

    let mut assignment = vec![UNASSIGNED; n_pixels];
    let mut distance = vec![f32::INFINITY; n_pixels];

    for iteration in 0..options.max_iterations {
        distance.fill(f32::INFINITY);
        let mut changed = 0usize;

        for (k, center) in centers.iter().enumerate() {
            let x0 = (center.x - reach).floor().max(0.0) as u32;
            let y0 = (center.y - reach).floor().max(0.0) as u32;
            let x1 = ((center.x + reach).ceil() as u32).min(width - 1);
            let y1 = ((center.y + reach).ceil() as u32).min(height - 1);

            for y in y0..=y1 {
                for x in x0..=x1 {
                    let idx = y as usize * width as usize + x as usize;
                    let pixel = &features[idx * channels..(idx + 1) * channels];
                    let color_sq: f32 = pixel
                        .iter()
                        .zip(&center.color)
                        .map(|(a, b)| (a - b) * (a - b))
                        .sum();
                    let dx = x as f32 - center.x;
                    let dy = y as f32 - center.y;
                    let d = color_sq + (dx * dx + dy * dy) * spatial_weight;
                    if d < distance[idx] {
                        distance[idx] = d;
                        if assignment[idx] != k as u32 {
                            assignment[idx] = k as u32;
                            changed += 1;
                        }
                    }
                }
            }
        }

        assign_orphans(&mut assignment, width, centers);
        update_centers(features, width, channels, &assignment, centers);
        trace!("slic iteration {}: {} assignments changed", iteration, changed);

        if changed == 0 {
            break;
        }
    }

    assignment
}

/// Give pixels outside every search window to the spatially nearest center
fn assign_orphans(assignment: &mut [u32], width: u32, centers: &[Center]) {
    for (idx, slot) in assignment.iter_mut().enumerate() {
        if *slot != UNASSIGNED {
            continue;
        }
        let x = (idx % width as usize) as f32;
        let y = (idx / width as usize) as f32;
        let nearest = centers
            .iter()
            .enumerate()
            .map(|(k, c)| (k, (c.x - x).powi(2) + (c.y - y).powi(2)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map_or(0, |(k, _)| k);
        *slot = nearest as u32;
    }
}

fn update_centers(
    features: &[f32],
    width: u32,
    channels: usize,
    assignment: &[u32],
    centers: &mut [Center],
) {
    let k = centers.len();
    let mut counts = vec![0usize; k];
    let mut sum_x = vec![0.0f64; k];
    let mut sum_y = vec![0.0f64; k];
    let mut sum_color = vec![0.0f64; k * channels];

    for (idx, &c) in assignment.iter().enumerate() {
        let c = c as usize;
        counts[c] += 1;
        sum_x[c] += (idx % width as usize) as f64;
        sum_y[c] += (idx / width as usize) as f64;
        for ch in 0..channels {
            sum_color[c * channels + ch] += features[idx * channels + ch] as f64;
        }
    }

    for (c, center) in centers.iter_mut().enumerate() {
        if counts[c] == 0 {
            continue;
        }
        let n = counts[c] as f64;
        center.x = (sum_x[c] / n) as f32;
        center.y = (sum_y[c] / n) as f32;
        for ch in 0..channels {
            center.color[ch] = (sum_color[c * channels + ch] / n) as f32;
        }
    }
}
