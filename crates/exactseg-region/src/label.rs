//! Region property extraction
//!
//! This module measures every region of a label map in one raster pass.
//! Regions are reported in the order their first pixel is met in a raster
//! scan, which is the order used for deterministic tie-breaking by callers.

use crate::error::{RegionError, RegionResult};
use exactseg_core::{Box, LabelMap};
use std::collections::HashMap;

/// Properties of one region
#[derive(Debug, Clone, PartialEq)]
pub struct RegionProps {
    /// Region label
    pub label: u32,
    /// Number of pixels
    pub area: u32,
    /// Bounding box
    pub bounds: Box,
    /// Centroid X coordinate
    pub centroid_x: f64,
    /// Centroid Y coordinate
    pub centroid_y: f64,
}

/// Measure every region of a label map
///
/// # Returns
///
/// One [`RegionProps`] per distinct label, in first-appearance order.
pub fn region_props(labels: &LabelMap) -> Vec<RegionProps> {
    struct Accum {
        label: u32,
        count: u32,
        sum_x: u64,
        sum_y: u64,
        min_x: u32,
        min_y: u32,
        max_x: u32,
        max_y: u32,
    }

    let width = labels.width();
    let mut index: HashMap<u32, usize> = HashMap::new();
    let mut accums: Vec<Accum> = Vec::new();

    for (i, &label) in labels.data().iter().enumerate() {
        let x = (i % width as usize) as u32;
        let y = (i / width as usize) as u32;
        let slot = *index.entry(label).or_insert_with(|| {
            accums.push(Accum {
                label,
                count: 0,
                sum_x: 0,
                sum_y: 0,
                min_x: x,
                min_y: y,
                max_x: x,
                max_y: y,
            });
            accums.len() - 1
        });

        let acc = &mut accums[slot];
        acc.count += 1;
        acc.sum_x += x as u64;
        acc.sum_y += y as u64;
        acc.min_x = acc.min_x.min(x);
        acc.min_y = acc.min_y.min(y);
        acc.max_x = acc.max_x.max(x);
        acc.max_y = acc.max_y.max(y);
    }

    accums
        .into_iter()
        .map(|acc| RegionProps {
            label: acc.label,
            area: acc.count,
            bounds: Box::from_extent(
                acc.min_x as i32,
                acc.min_y as i32,
                acc.max_x as i32,
                acc.max_y as i32,
            ),
            centroid_x: acc.sum_x as f64 / acc.count as f64,
            centroid_y: acc.sum_y as f64 / acc.count as f64,
        })
        .collect()
}

/// Pixel count of every label
pub fn label_areas(labels: &LabelMap) -> HashMap<u32, u32> {
    let mut areas = HashMap::new();
    for &label in labels.data() {
        *areas.entry(label).or_insert(0) += 1;
    }
    areas
}

/// Number of distinct labels
pub fn count_labels(labels: &LabelMap) -> usize {
    labels.num_labels()
}

/// Relabel so that labels run contiguously from `start`
///
/// Labels are renumbered in first-appearance order. Returns the number of
/// distinct labels.
///
/// # Errors
///
/// Returns [`RegionError::InvalidParameters`] if the new labels would not fit
/// in a `u32`.
pub fn relabel_sequential(labels: &mut LabelMap, start: u32) -> RegionResult<usize> {
    let order = labels.distinct_labels();
    let count = order.len();
    if start as u64 + count as u64 > u32::MAX as u64 + 1 {
        return Err(RegionError::InvalidParameters(format!(
            "{} labels starting at {} overflow u32",
            count, start
        )));
    }

    let mapping: HashMap<u32, u32> = order
        .into_iter()
        .enumerate()
        .map(|(i, label)| (label, start + i as u32))
        .collect();
    labels.map_labels(|label| mapping[&label]);
    Ok(count)
}
