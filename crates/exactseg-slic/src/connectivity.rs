//! Connectivity enforcement
//!
//! k-means style clustering can leave a cluster split into several pieces,
//! or leave tiny orphan fragments. This pass relabels each 4-connected
//! piece separately and folds pieces below a minimum size into the region
//! that touches their first pixel from above or from the left.

use std::collections::VecDeque;

const UNASSIGNED: u32 = u32::MAX;

/// Relabel clusters into connected superpixels
///
/// # Arguments
///
/// * `clusters` - Row-major cluster index per pixel
/// * `width`, `height` - Raster size
/// * `min_size` - Pieces with fewer pixels are absorbed by a neighbor
///
/// # Returns
///
/// Row-major labels numbered contiguously from 1. Every label is a single
/// 4-connected region.
pub fn enforce_connectivity(clusters: &[u32], width: u32, height: u32, min_size: usize) -> Vec<u32> {
    let w = width as usize;
    let h = height as usize;
    let mut out = vec![UNASSIGNED; clusters.len()];
    let mut next_label = 1u32;
    let mut segment = Vec::new();
    let mut queue = VecDeque::new();

    for start in 0..clusters.len() {
        if out[start] != UNASSIGNED {
            continue;
        }
        let (sx, sy) = (start % w, start / w);

        // Label of an already-visited neighbor of the first pixel
        let adjacent = [
            (sy > 0).then(|| start - w),
            (sx > 0).then(|| start - 1),
        ]
        .into_iter()
        .flatten()
        .map(|idx| out[idx])
        .find(|&label| label != UNASSIGNED);

        let cluster = clusters[start];
        segment.clear();
        out[start] = next_label;
        queue.push_back(start);

        while let Some(idx) = queue.pop_front() {
            segment.push(idx);
            let (x, y) = (idx % w, idx / w);
            let neighbors = [
                (y > 0).then(|| idx - w),
                (x > 0).then(|| idx - 1),
                (x + 1 < w).then(|| idx + 1),
                (y + 1 < h).then(|| idx + w),
            ];
            for nidx in neighbors.into_iter().flatten() {
                if out[nidx] == UNASSIGNED && clusters[nidx] == cluster {
                    out[nidx] = next_label;
                    queue.push_back(nidx);
                }
            }
        }

        match adjacent {
            Some(label) if segment.len() < min_size => {
                for &idx in &segment {
                    out[idx] = label;
                }
            }
            _ => next_label += 1,
        }
    }

    out
}
