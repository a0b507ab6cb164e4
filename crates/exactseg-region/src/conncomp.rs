//! Connected component analysis
//!
//! Components here are maximal sets of pixels that carry the same label and
//! are connected under the chosen adjacency. A label map whose every label
//! forms exactly one component is a valid superpixel segmentation.

use crate::error::{RegionError, RegionResult};
use exactseg_core::{Box, LabelMap};
use exactseg_morph::{MorphResult, Sel};
use log::trace;
use std::collections::VecDeque;

const FOUR_WAY: [(i32, i32); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

const EIGHT_WAY: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Connectivity type for component analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityType {
    /// 4-way connectivity (up, down, left, right)
    FourWay,
    /// 8-way connectivity (includes diagonals)
    #[default]
    EightWay,
}

impl ConnectivityType {
    /// Neighbor offsets, excluding the center
    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            ConnectivityType::FourWay => &FOUR_WAY,
            ConnectivityType::EightWay => &EIGHT_WAY,
        }
    }

    /// The 3x3 structuring element whose dilation adds one ring of neighbors
    pub fn sel(self) -> MorphResult<Sel> {
        match self {
            ConnectivityType::FourWay => Sel::create_cross(3),
            ConnectivityType::EightWay => Sel::create_square(3),
        }
    }
}

/// A connected component of a label map
#[derive(Debug, Clone)]
pub struct ConnectedComponent {
    /// Component id, numbered from 1 in raster order
    pub id: u32,
    /// Label shared by every pixel of the component
    pub label: u32,
    /// Number of pixels in this component
    pub pixel_count: u32,
    /// Bounding box of this component
    pub bounds: Box,
}

/// Label all connected components of a label map
///
/// Returns a map of the same size where each pixel holds its component id.
/// Ids start at 1 and follow the raster order of each component's first
/// pixel.
pub fn label_connected_components(
    labels: &LabelMap,
    connectivity: ConnectivityType,
) -> RegionResult<LabelMap> {
    let (components, ids) = flood_components(labels, connectivity);
    trace!("labeled {} connected components", components.len());
    Ok(LabelMap::from_data(labels.width(), labels.height(), ids)?)
}

/// Find all connected components of a label map
pub fn find_connected_components(
    labels: &LabelMap,
    connectivity: ConnectivityType,
) -> Vec<ConnectedComponent> {
    flood_components(labels, connectivity).0
}

/// Check that every pixel carrying `label` forms a single component
///
/// # Errors
///
/// Returns [`RegionError::LabelNotFound`] if no pixel carries `label`.
pub fn is_region_connected(
    labels: &LabelMap,
    label: u32,
    connectivity: ConnectivityType,
) -> RegionResult<bool> {
    let width = labels.width();
    let start = labels
        .data()
        .iter()
        .position(|&l| l == label)
        .ok_or(RegionError::LabelNotFound(label))?;
    let area = labels.data().iter().filter(|&&l| l == label).count();

    let mut visited = vec![false; labels.pixel_count()];
    let start_xy = ((start % width as usize) as u32, (start / width as usize) as u32);
    let reached = flood(labels, start_xy, connectivity, &mut visited).len();

    Ok(reached == area)
}

/// Check that every label of the map forms a single component
pub fn all_regions_connected(labels: &LabelMap, connectivity: ConnectivityType) -> bool {
    find_connected_components(labels, connectivity).len() == labels.num_labels()
}

fn flood_components(
    labels: &LabelMap,
    connectivity: ConnectivityType,
) -> (Vec<ConnectedComponent>, Vec<u32>) {
    let width = labels.width();
    let mut visited = vec![false; labels.pixel_count()];
    let mut ids = vec![0u32; labels.pixel_count()];
    let mut components = Vec::new();

    for idx in 0..labels.pixel_count() {
        if visited[idx] {
            continue;
        }
        let x = (idx % width as usize) as u32;
        let y = (idx / width as usize) as u32;
        let id = components.len() as u32 + 1;
        let pixels = flood(labels, (x, y), connectivity, &mut visited);

        let (mut min_x, mut min_y, mut max_x, mut max_y) = (x, y, x, y);
        for &(px, py) in &pixels {
            ids[py as usize * width as usize + px as usize] = id;
            min_x = min_x.min(px);
            min_y = min_y.min(py);
            max_x = max_x.max(px);
            max_y = max_y.max(py);
        }

        components.push(ConnectedComponent {
            id,
            label: labels.get_unchecked(x, y),
            pixel_count: pixels.len() as u32,
            bounds: Box::from_extent(min_x as i32, min_y as i32, max_x as i32, max_y as i32),
        });
    }

    (components, ids)
}

/// Breadth-first flood over same-label pixels, marking `visited`
fn flood(
    labels: &LabelMap,
    start: (u32, u32),
    connectivity: ConnectivityType,
    visited: &mut [bool],
) -> Vec<(u32, u32)> {
    let width = labels.width() as i32;
    let height = labels.height() as i32;
    let target = labels.get_unchecked(start.0, start.1);

    let mut pixels = Vec::new();
    let mut queue = VecDeque::new();
    visited[start.1 as usize * width as usize + start.0 as usize] = true;
    queue.push_back(start);

    while let Some((x, y)) = queue.pop_front() {
        pixels.push((x, y));
        for &(dx, dy) in connectivity.offsets() {
            let nx = x as i32 + dx;
            let ny = y as i32 + dy;
            if nx < 0 || ny < 0 || nx >= width || ny >= height {
                continue;
            }
            let nidx = ny as usize * width as usize + nx as usize;
            if !visited[nidx] && labels.data()[nidx] == target {
                visited[nidx] = true;
                queue.push_back((nx as u32, ny as u32));
            }
        }
    }

    pixels
}
