//! Exact-count segmentation entry points

use crate::generator::SegmentationGenerator;
use crate::inflate::{InflateOptions, inflate_count};
use crate::reduce::{MergeStep, reduce_to_count};
use crate::{SegmentError, SegmentResult};
use exactseg_core::{Image, LabelMap};
use exactseg_region::{ConnectivityType, relabel_sequential};
use exactseg_slic::{Slic, SlicOptions};
use log::debug;

/// Options for [`compute_exact_segmentation`]
#[derive(Debug, Clone, PartialEq)]
pub struct ExactSegmentOptions {
    /// Count inflation schedule
    pub inflate: InflateOptions,
    /// Adjacency used when merging regions
    pub connectivity: ConnectivityType,
    /// Renumber the final labels as 1..=desired
    pub relabel_sequential: bool,
}

impl Default for ExactSegmentOptions {
    fn default() -> Self {
        Self {
            inflate: InflateOptions::default(),
            connectivity: ConnectivityType::EightWay,
            relabel_sequential: false,
        }
    }
}

impl ExactSegmentOptions {
    /// Default options with a different cap on generator calls
    pub fn with_max_attempts(max_attempts: u32) -> Self {
        Self {
            inflate: InflateOptions {
                max_attempts,
                ..InflateOptions::default()
            },
            ..Self::default()
        }
    }
}

/// Exact-count segmentation together with how it was reached
#[derive(Debug, Clone)]
pub struct ExactSegmentation {
    /// Label map with exactly the desired number of regions
    pub labels: LabelMap,
    /// Generator calls made during inflation
    pub attempts: u32,
    /// Segment count requested from the generator on the last call
    pub n_segments: u32,
    /// Regions produced by the generator before reduction
    pub inflated_count: usize,
    /// Merges applied during reduction
    pub merges: Vec<MergeStep>,
}

/// Segment an image into exactly `desired` regions
///
/// The generator is asked for an inflated number of segments until it
/// returns at least `desired` regions; the surplus is then merged away,
/// smallest region first.
///
/// # Errors
///
/// * [`SegmentError::Precondition`] if `desired` is 0, exceeds the pixel
///   count, or the image is empty. Checked before the generator is called.
/// * [`SegmentError::Convergence`] if the generator never yields enough
///   regions
/// * [`SegmentError::IsolatedRegion`] if a region cannot be merged
pub fn compute_exact_segmentation<G>(
    image: &Image,
    desired: usize,
    generator: &G,
    options: &ExactSegmentOptions,
) -> SegmentResult<LabelMap>
where
    G: SegmentationGenerator + ?Sized,
{
    Ok(compute_exact_segmentation_with_report(image, desired, generator, options)?.labels)
}

/// Like [`compute_exact_segmentation`], also reporting the inflation and
/// merge history
pub fn compute_exact_segmentation_with_report<G>(
    image: &Image,
    desired: usize,
    generator: &G,
    options: &ExactSegmentOptions,
) -> SegmentResult<ExactSegmentation>
where
    G: SegmentationGenerator + ?Sized,
{
    check_preconditions(image, desired)?;
    options.inflate.validate()?;

    let inflated = inflate_count(image, desired, generator, &options.inflate)?;
    let mut labels = inflated.labels;
    let merges = reduce_to_count(&mut labels, inflated.count, desired, options.connectivity)?;

    if options.relabel_sequential {
        relabel_sequential(&mut labels, 1)?;
    }

    debug!(
        "exact segmentation: {} regions after {} attempts (request {}, inflated to {})",
        desired, inflated.attempts, inflated.n_segments, inflated.count
    );

    Ok(ExactSegmentation {
        labels,
        attempts: inflated.attempts,
        n_segments: inflated.n_segments,
        inflated_count: inflated.count,
        merges,
    })
}

/// Exact-count SLIC superpixels
///
/// Uses [`Slic`] with the given tuning and default options for everything
/// else.
pub fn exact_num_superpixels(
    image: &Image,
    desired: usize,
    compactness: f32,
    sigma: f32,
) -> SegmentResult<LabelMap> {
    let slic = Slic::new(SlicOptions::with_tuning(compactness, sigma))?;
    compute_exact_segmentation(image, desired, &slic, &ExactSegmentOptions::default())
}

fn check_preconditions(image: &Image, desired: usize) -> SegmentResult<()> {
    if image.is_empty() {
        return Err(SegmentError::Precondition(format!(
            "image is empty ({}x{})",
            image.width(),
            image.height()
        )));
    }
    if desired == 0 {
        return Err(SegmentError::Precondition(
            "desired count must be at least 1".into(),
        ));
    }
    if desired > image.pixel_count() {
        return Err(SegmentError::Precondition(format!(
            "desired count {} exceeds pixel count {}",
            desired,
            image.pixel_count()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Each request yields `n + 3` one-pixel-wide vertical stripes
    fn surplus_generator(image: &Image, n: u32) -> SegmentResult<LabelMap> {
        let regions = (n + 3).min(image.width());
        let data = (0..image.height())
            .flat_map(|_| (0..image.width()).map(move |x| 100 + x.min(regions - 1)))
            .collect();
        Ok(LabelMap::from_data(image.width(), image.height(), data)?)
    }

    #[test]
    fn test_exact_count() {
        let image = Image::new(30, 2, 1).unwrap();
        for desired in [1, 2, 5, 13] {
            let labels = compute_exact_segmentation(
                &image,
                desired,
                &surplus_generator,
                &ExactSegmentOptions::default(),
            )
            .unwrap();
            assert_eq!(labels.num_labels(), desired);
            assert_eq!(labels.dimensions(), (30, 2));
        }
    }

    #[test]
    fn test_report() {
        let image = Image::new(30, 2, 1).unwrap();
        let report = compute_exact_segmentation_with_report(
            &image,
            10,
            &surplus_generator,
            &ExactSegmentOptions::default(),
        )
        .unwrap();
        assert_eq!(report.attempts, 1);
        assert_eq!(report.n_segments, 11);
        assert_eq!(report.inflated_count, 14);
        assert_eq!(report.merges.len(), 4);
        assert_eq!(report.merges.last().map(|m| m.remaining), Some(10));
    }

    #[test]
    fn test_relabel_sequential_option() {
        let image = Image::new(30, 2, 1).unwrap();
        let options = ExactSegmentOptions {
            relabel_sequential: true,
            ..ExactSegmentOptions::default()
        };
        let labels = compute_exact_segmentation(&image, 4, &surplus_generator, &options).unwrap();
        let mut distinct = labels.distinct_labels();
        distinct.sort_unstable();
        assert_eq!(distinct, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_preconditions_before_generator() {
        let calls = Cell::new(0);
        let generator = |image: &Image, n: u32| -> SegmentResult<LabelMap> {
            calls.set(calls.get() + 1);
            surplus_generator(image, n)
        };
        let image = Image::new(3, 3, 1).unwrap();
        let options = ExactSegmentOptions::default();

        for desired in [0, 10] {
            assert!(matches!(
                compute_exact_segmentation(&image, desired, &generator, &options),
                Err(SegmentError::Precondition(_))
            ));
        }
        let empty = Image::new(0, 3, 1).unwrap();
        assert!(matches!(
            compute_exact_segmentation(&empty, 1, &generator, &options),
            Err(SegmentError::Precondition(_))
        ));
        assert_eq!(calls.get(), 0);

        // desired == pixel count passes the checks; this generator then
        // cannot deliver more than three stripes
        assert!(matches!(
            compute_exact_segmentation(&image, 9, &generator, &options),
            Err(SegmentError::Convergence { attempts: 1, .. })
        ));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_with_max_attempts() {
        let options = ExactSegmentOptions::with_max_attempts(3);
        assert_eq!(options.inflate.max_attempts, 3);
        assert_eq!(options.connectivity, ConnectivityType::EightWay);
        assert!(!options.relabel_sequential);
    }

    #[test]
    fn test_exact_num_superpixels() {
        let samples: Vec<u8> = (0..16 * 16)
            .flat_map(|i| {
                let v = if (i % 16) < 8 { 20 } else { 220 };
                [v, v, v]
            })
            .collect();
        let image = Image::from_rgb8(16, 16, &samples).unwrap();
        let labels = exact_num_superpixels(&image, 4, 10.0, 0.0).unwrap();
        assert_eq!(labels.num_labels(), 4);
    }
}
