//! Region reduction
//!
//! Brings an over-segmented label map down to an exact region count by
//! repeatedly merging the smallest region into its smallest adjacent region.
//!
//! Each iteration measures the whole map again, so the choice of victim and
//! target always reflects the areas produced by earlier merges.

use crate::{SegmentError, SegmentResult};
use exactseg_core::LabelMap;
use exactseg_region::{ConnectivityType, RegionProps, find_neighbor_labels, region_props};
use log::{debug, trace};
use std::collections::HashMap;

/// One merge performed by [`reduce_to_count`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeStep {
    /// Label that disappeared
    pub victim: u32,
    /// Area of the victim before the merge
    pub victim_area: u32,
    /// Label that absorbed the victim
    pub target: u32,
    /// Area of the target before the merge
    pub target_area: u32,
    /// Region count after the merge
    pub remaining: usize,
}

/// Merge regions until exactly `desired` remain
///
/// `current_count` must be the number of distinct labels in `labels`. It is
/// checked against the measured regions before any pixel changes. The
/// smallest region (first in raster order on ties) is
/// merged into the adjacent region with the smallest area (first met on the
/// ring around the victim on ties).
///
/// # Arguments
///
/// * `labels` - Label map, modified in place
/// * `current_count` - Number of regions in `labels`
/// * `desired` - Target number of regions
/// * `connectivity` - Which pixels around a region count as adjacent
///
/// # Returns
///
/// The merges in the order they were applied. Empty if `current_count`
/// already equals `desired`.
///
/// # Errors
///
/// * [`SegmentError::Precondition`] if `desired` is 0 or above `current_count`,
///   or if `labels` does not hold `current_count` regions
/// * [`SegmentError::IsolatedRegion`] if the smallest region has no neighbor
pub fn reduce_to_count(
    labels: &mut LabelMap,
    current_count: usize,
    desired: usize,
    connectivity: ConnectivityType,
) -> SegmentResult<Vec<MergeStep>> {
    if desired == 0 {
        return Err(SegmentError::Precondition(
            "desired count must be at least 1".into(),
        ));
    }
    if current_count < desired {
        return Err(SegmentError::Precondition(format!(
            "cannot reduce {} regions to {}",
            current_count, desired
        )));
    }

    let mut remaining = current_count;
    let mut merges = Vec::with_capacity(current_count - desired);

    while remaining > desired {
        let props = region_props(labels);
        let step = merge_smallest(labels, &props, connectivity, remaining)?;
        trace!(
            "merged region {} ({} px) into {} ({} px)",
            step.victim, step.victim_area, step.target, step.target_area
        );
        merges.push(step);
        remaining -= 1;
    }

    if merges.is_empty() && labels.num_labels() != current_count {
        return Err(count_mismatch(current_count, labels.num_labels()));
    }

    debug!(
        "reduced {} regions to {} with {} merges",
        current_count,
        desired,
        merges.len()
    );
    Ok(merges)
}

/// Merge the smallest region of `props` into its smallest neighbor
///
/// `count` is the number of regions `labels` is expected to hold.
fn merge_smallest(
    labels: &mut LabelMap,
    props: &[RegionProps],
    connectivity: ConnectivityType,
    count: usize,
) -> SegmentResult<MergeStep> {
    // min_by_key keeps the first of equal minima
    let victim = props
        .iter()
        .min_by_key(|p| p.area)
        .ok_or_else(|| SegmentError::Precondition("label map has no regions".into()))?;

    let areas: HashMap<u32, u32> = props.iter().map(|p| (p.label, p.area)).collect();
    let neighbors = find_neighbor_labels(labels, victim, connectivity)?;

    let (target, target_area) = neighbors
        .iter()
        .filter_map(|label| areas.get(label).map(|&area| (*label, area)))
        .min_by_key(|&(_, area)| area)
        .ok_or(SegmentError::IsolatedRegion {
            label: victim.label,
            area: victim.area,
        })?;

    // checked after the neighbor lookup so a lone region reports isolation
    if props.len() != count {
        return Err(count_mismatch(count, props.len()));
    }
    labels.relabel(victim.label, target);

    Ok(MergeStep {
        victim: victim.label,
        victim_area: victim.area,
        target,
        target_area,
        remaining: count - 1,
    })
}

fn count_mismatch(claimed: usize, actual: usize) -> SegmentError {
    SegmentError::Precondition(format!(
        "label map holds {} regions, not the {} claimed",
        actual, claimed
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use exactseg_region::label_areas;

    #[test]
    fn test_stripes_smallest_first() {
        let mut labels = LabelMap::from_rows(&[
            &[1, 1, 1, 1], //
            &[1, 1, 1, 1],
            &[2, 2, 2, 2],
            &[3, 3, 3, 3],
        ])
        .unwrap();

        let merges = reduce_to_count(&mut labels, 3, 2, ConnectivityType::EightWay).unwrap();
        assert_eq!(
            merges,
            vec![MergeStep {
                victim: 2,
                victim_area: 4,
                target: 3,
                target_area: 4,
                remaining: 2,
            }]
        );
        assert_eq!(label_areas(&labels)[&3], 8);
        assert_eq!(labels.num_labels(), 2);
    }

    #[test]
    fn test_target_is_smallest_neighbor() {
        // 9 is smallest and touches 1 (area 5), 5 (area 2) and 7 (area 4)
        let mut labels = LabelMap::from_rows(&[
            &[1, 1, 1, 5], //
            &[1, 1, 9, 5],
            &[7, 7, 7, 7],
        ])
        .unwrap();

        let merges = reduce_to_count(&mut labels, 4, 3, ConnectivityType::EightWay).unwrap();
        assert_eq!(merges[0].victim, 9);
        assert_eq!(merges[0].target, 5);
        assert_eq!(merges[0].target_area, 2);
        assert_eq!(labels.get(2, 1), Some(5));
    }

    #[test]
    fn test_ties_follow_raster_order() {
        let mut labels = LabelMap::from_rows(&[&[4, 8, 6]]).unwrap();
        let merges = reduce_to_count(&mut labels, 3, 2, ConnectivityType::EightWay).unwrap();
        assert_eq!((merges[0].victim, merges[0].target), (4, 8));

        let mut labels = LabelMap::from_rows(&[&[8, 4, 6]]).unwrap();
        let merges = reduce_to_count(&mut labels, 3, 2, ConnectivityType::EightWay).unwrap();
        assert_eq!((merges[0].victim, merges[0].target), (8, 4));

        // equal-area neighbors: first on the ring wins
        let mut labels = LabelMap::from_rows(&[&[2, 2, 1, 3, 3]]).unwrap();
        let merges = reduce_to_count(&mut labels, 3, 2, ConnectivityType::EightWay).unwrap();
        assert_eq!((merges[0].victim, merges[0].target), (1, 2));

        let mut labels = LabelMap::from_rows(&[&[3, 3, 1, 2, 2]]).unwrap();
        let merges = reduce_to_count(&mut labels, 3, 2, ConnectivityType::EightWay).unwrap();
        assert_eq!((merges[0].victim, merges[0].target), (1, 3));
    }

    #[test]
    fn test_diagonal_neighbor_depends_on_connectivity() {
        let rows: &[&[u32]] = &[
            &[9, 2, 2], //
            &[2, 5, 2],
            &[2, 2, 2],
        ];

        let mut eight = LabelMap::from_rows(rows).unwrap();
        let merges = reduce_to_count(&mut eight, 3, 2, ConnectivityType::EightWay).unwrap();
        assert_eq!((merges[0].victim, merges[0].target), (9, 5));

        let mut four = LabelMap::from_rows(rows).unwrap();
        let merges = reduce_to_count(&mut four, 3, 2, ConnectivityType::FourWay).unwrap();
        assert_eq!((merges[0].victim, merges[0].target), (9, 2));
    }

    #[test]
    fn test_exact_match_is_noop() {
        let mut labels = LabelMap::from_rows(&[&[1, 2], &[3, 4]]).unwrap();
        let before = labels.clone();
        let merges = reduce_to_count(&mut labels, 4, 4, ConnectivityType::EightWay).unwrap();
        assert!(merges.is_empty());
        assert_eq!(labels, before);
    }

    #[test]
    fn test_reduce_to_one() {
        let mut labels = LabelMap::from_rows(&[&[1, 2, 3], &[4, 5, 6]]).unwrap();
        let merges = reduce_to_count(&mut labels, 6, 1, ConnectivityType::EightWay).unwrap();
        let remaining: Vec<usize> = merges.iter().map(|m| m.remaining).collect();
        assert_eq!(remaining, vec![5, 4, 3, 2, 1]);
        assert_eq!(labels.num_labels(), 1);
    }

    #[test]
    fn test_preconditions() {
        let mut labels = LabelMap::new(2, 2, 1).unwrap();
        assert!(matches!(
            reduce_to_count(&mut labels, 1, 0, ConnectivityType::EightWay),
            Err(SegmentError::Precondition(_))
        ));
        assert!(matches!(
            reduce_to_count(&mut labels, 1, 2, ConnectivityType::EightWay),
            Err(SegmentError::Precondition(_))
        ));
    }

    #[test]
    fn test_wrong_count_rejected() {
        // three regions claimed as four
        let mut labels = LabelMap::from_rows(&[&[1, 1, 2, 2, 3, 3]]).unwrap();
        let before = labels.clone();
        assert!(matches!(
            reduce_to_count(&mut labels, 4, 3, ConnectivityType::EightWay),
            Err(SegmentError::Precondition(_))
        ));
        assert_eq!(labels, before);

        // five regions claimed as three, nothing to merge
        let mut labels = LabelMap::from_rows(&[&[1, 2, 3, 4, 5]]).unwrap();
        assert!(matches!(
            reduce_to_count(&mut labels, 3, 3, ConnectivityType::EightWay),
            Err(SegmentError::Precondition(_))
        ));

        // five regions claimed as three, with merges requested
        let mut labels = LabelMap::from_rows(&[&[1, 2, 3, 4, 5]]).unwrap();
        assert!(matches!(
            reduce_to_count(&mut labels, 3, 2, ConnectivityType::EightWay),
            Err(SegmentError::Precondition(_))
        ));
    }

    #[test]
    fn test_isolated_region() {
        let mut labels = LabelMap::new(3, 3, 7).unwrap();
        let err = reduce_to_count(&mut labels, 2, 1, ConnectivityType::EightWay).unwrap_err();
        assert!(matches!(
            err,
            SegmentError::IsolatedRegion { label: 7, area: 9 }
        ));
    }
}
