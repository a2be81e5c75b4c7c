//! ndlabel Core - Basic data structures for N-dimensional region labeling
//!
//! This crate provides the building blocks shared by the region algorithms:
//!
//! - [`StructuringElement`] - Boolean neighborhood mask with an explicit center
//! - [`BoundaryMode`] - Policy for neighbors that fall outside the array
//! - [`NeighborIterator`] - Row-major cursor resolving each position's neighbors
//! - [`Foreground`] / [`LabelValue`] - Element traits the algorithms are generic over
//!
//! # Example
//!
//! ```
//! use ndlabel_core::{BoundaryMode, NeighborIterator, StructuringElement};
//!
//! let se = StructuringElement::cross(2);
//! let mut iter = NeighborIterator::new(&[3, 3], &se, BoundaryMode::Constant).unwrap();
//! iter.seek(4); // center of the 3x3 array
//! let neighbors: Vec<usize> = iter.neighbors().collect();
//! assert_eq!(neighbors, vec![1, 3, 5, 7]);
//! ```

pub mod boundary;
pub mod element;
pub mod error;
pub mod neighbor;
pub mod strel;

pub use boundary::BoundaryMode;
pub use element::{Foreground, LabelValue};
pub use error::{Error, Result};
pub use neighbor::NeighborIterator;
pub use strel::StructuringElement;

// Re-export the array crate so downstream users build inputs with the same version
pub use ndarray;
