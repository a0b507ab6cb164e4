//! exactseg-region - Region processing for label maps
//!
//! This crate provides region processing functionality including:
//!
//! - **Region properties** - Area, bounding box and centroid of every label
//! - **Adjacency** - Neighbor labels of a region via a dilated ring
//! - **Connected components** - Checking that regions are spatially connected
//! - **Relabeling** - Making sparse label sets contiguous
//!
//! # Examples
//!
//! ```
//! use exactseg_core::LabelMap;
//! use exactseg_region::{ConnectivityType, find_neighbor_labels, region_props};
//!
//! let labels = LabelMap::from_rows(&[&[1, 1, 2], &[1, 3, 2]]).unwrap();
//! let props = region_props(&labels);
//! let smallest = props.iter().min_by_key(|p| p.area).unwrap();
//! assert_eq!(smallest.label, 3);
//!
//! let neighbors = find_neighbor_labels(&labels, smallest, ConnectivityType::EightWay).unwrap();
//! assert_eq!(neighbors, vec![1, 2]);
//! ```

pub mod adjacency;
pub mod conncomp;
pub mod error;
pub mod label;

// Re-export core types
pub use exactseg_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

pub use adjacency::{are_adjacent, find_neighbor_labels, neighbor_labels_of, region_window_mask};
pub use conncomp::{
    ConnectedComponent, ConnectivityType, all_regions_connected, find_connected_components,
    is_region_connected, label_connected_components,
};
pub use label::{RegionProps, count_labels, label_areas, region_props, relabel_sequential};
