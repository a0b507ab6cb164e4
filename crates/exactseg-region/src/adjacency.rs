//! Region adjacency
//!
//! Neighbors of a region are found morphologically: the region's mask is
//! dilated by a 3x3 structuring element, the region itself is removed, and
//! the labels under the remaining one-pixel ring are collected. The work is
//! confined to the region's bounding box grown by one pixel.

use crate::conncomp::ConnectivityType;
use crate::error::{RegionError, RegionResult};
use crate::label::RegionProps;
use exactseg_core::{Box, LabelMap, Mask};
use exactseg_morph::dilate;
use std::collections::HashSet;

/// Mask of the pixels carrying `label` inside `window`
///
/// Mask coordinates are relative to the window origin.
pub fn region_window_mask(labels: &LabelMap, label: u32, window: Box) -> RegionResult<Mask> {
    if window.x < 0
        || window.y < 0
        || window.w <= 0
        || window.h <= 0
        || window.right() > labels.width() as i32
        || window.bottom() > labels.height() as i32
    {
        return Err(RegionError::InvalidParameters(format!(
            "window {:?} not inside {}x{} label map",
            window,
            labels.width(),
            labels.height()
        )));
    }
    let (x0, y0) = (window.x as u32, window.y as u32);
    Ok(Mask::from_fn(window.w as u32, window.h as u32, |x, y| {
        labels.get_unchecked(x0 + x, y0 + y) == label
    })?)
}

/// Labels adjacent to a region
///
/// `region` must describe the current state of `labels` (its bounding box is
/// used to crop the search). Neighbor labels are returned in the raster
/// order of their first pixel on the ring around the region; the region's
/// own label is never included.
pub fn find_neighbor_labels(
    labels: &LabelMap,
    region: &RegionProps,
    connectivity: ConnectivityType,
) -> RegionResult<Vec<u32>> {
    let window = region
        .bounds
        .expand_clipped(1, labels.width(), labels.height());
    let mask = region_window_mask(labels, region.label, window)?;
    let dilated = dilate(&mask, &connectivity.sel()?)?;
    let ring = dilated.subtract(&mask)?;

    let (x0, y0) = (window.x as u32, window.y as u32);
    let mut seen = HashSet::new();
    let neighbors = ring
        .iter_set()
        .map(|(x, y)| labels.get_unchecked(x0 + x, y0 + y))
        .filter(|&label| seen.insert(label))
        .collect();
    Ok(neighbors)
}

/// Labels adjacent to `label`, measuring the region first
///
/// # Errors
///
/// Returns [`RegionError::LabelNotFound`] if no pixel carries `label`.
pub fn neighbor_labels_of(
    labels: &LabelMap,
    label: u32,
    connectivity: ConnectivityType,
) -> RegionResult<Vec<u32>> {
    let region = measure_label(labels, label)?;
    find_neighbor_labels(labels, &region, connectivity)
}

/// Whether regions `a` and `b` touch under the given connectivity
pub fn are_adjacent(
    labels: &LabelMap,
    a: u32,
    b: u32,
    connectivity: ConnectivityType,
) -> RegionResult<bool> {
    if !labels.contains_label(b) {
        return Err(RegionError::LabelNotFound(b));
    }
    Ok(neighbor_labels_of(labels, a, connectivity)?.contains(&b))
}

fn measure_label(labels: &LabelMap, label: u32) -> RegionResult<RegionProps> {
    let width = labels.width() as usize;
    let mut area = 0u32;
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (u32::MAX, u32::MAX, 0, 0);
    let (mut sum_x, mut sum_y) = (0u64, 0u64);

    for (i, _) in labels.data().iter().enumerate().filter(|(_, l)| **l == label) {
        let x = (i % width) as u32;
        let y = (i / width) as u32;
        area += 1;
        sum_x += x as u64;
        sum_y += y as u64;
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }

    if area == 0 {
        return Err(RegionError::LabelNotFound(label));
    }

    Ok(RegionProps {
        label,
        area,
        bounds: Box::from_extent(min_x as i32, min_y as i32, max_x as i32, max_y as i32),
        centroid_x: sum_x as f64 / area as f64,
        centroid_y: sum_y as f64 / area as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::region_props;

    fn props_for(labels: &LabelMap, label: u32) -> RegionProps {
        region_props(labels)
            .into_iter()
            .find(|p| p.label == label)
            .unwrap()
    }

    #[test]
    fn test_neighbors_center_region() {
        let labels = LabelMap::from_rows(&[
            &[1, 2, 3], //
            &[4, 5, 6],
            &[7, 8, 9],
        ])
        .unwrap();
        let center = props_for(&labels, 5);

        let eight = find_neighbor_labels(&labels, &center, ConnectivityType::EightWay).unwrap();
        assert_eq!(eight, vec![1, 2, 3, 4, 6, 7, 8, 9]);

        let four = find_neighbor_labels(&labels, &center, ConnectivityType::FourWay).unwrap();
        assert_eq!(four, vec![2, 4, 6, 8]);
    }

    #[test]
    fn test_neighbors_exclude_distant_regions() {
        let labels = LabelMap::from_rows(&[
            &[1, 1, 2, 3], //
            &[1, 1, 2, 3],
        ])
        .unwrap();
        let one = props_for(&labels, 1);
        let neighbors = find_neighbor_labels(&labels, &one, ConnectivityType::EightWay).unwrap();
        assert_eq!(neighbors, vec![2]);
    }

    #[test]
    fn test_whole_image_region_has_no_neighbors() {
        let labels = LabelMap::new(4, 3, 1).unwrap();
        let neighbors = neighbor_labels_of(&labels, 1, ConnectivityType::EightWay).unwrap();
        assert!(neighbors.is_empty());
    }

    #[test]
    fn test_are_adjacent_diagonal() {
        let labels = LabelMap::from_rows(&[&[1, 2], &[3, 1]]).unwrap();
        assert!(are_adjacent(&labels, 2, 3, ConnectivityType::EightWay).unwrap());
        assert!(!are_adjacent(&labels, 2, 3, ConnectivityType::FourWay).unwrap());
        assert!(matches!(
            are_adjacent(&labels, 2, 42, ConnectivityType::EightWay),
            Err(RegionError::LabelNotFound(42))
        ));
        assert!(matches!(
            neighbor_labels_of(&labels, 42, ConnectivityType::EightWay),
            Err(RegionError::LabelNotFound(42))
        ));
    }

    #[test]
    fn test_region_window_mask_bounds() {
        let labels = LabelMap::new(3, 3, 0).unwrap();
        assert!(region_window_mask(&labels, 0, Box::new_unchecked(1, 1, 3, 1)).is_err());
        let mask = region_window_mask(&labels, 0, Box::new_unchecked(1, 1, 2, 2)).unwrap();
        assert_eq!(mask.count(), 4);
    }
}
