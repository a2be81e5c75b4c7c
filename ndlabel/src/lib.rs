//! ndlabel - N-dimensional region labeling for Rust
//!
//! Connected component labeling and per-region analysis for
//! [`ndarray`](https://docs.rs/ndarray) arrays of any rank, with adjacency
//! given by an arbitrary structuring element.
//!
//! # Overview
//!
//! - Labeling connected regions and canonical relabeling
//! - Removing selected regions
//! - Border detection between differing values or between two given values
//! - Per-region sum, maximum and minimum of a companion array
//!
//! # Example
//!
//! ```
//! use ndarray::arr2;
//! use ndlabel::StructuringElement;
//! use ndlabel::region::{borders, label};
//! use ndlabel::BoundaryMode;
//!
//! let mut a = arr2(&[[1, 1, 0], [0, 1, 0], [0, 0, 1]]);
//! assert_eq!(label(&mut a, &StructuringElement::cross(2)).unwrap(), 2);
//!
//! let edges = borders(&a, &StructuringElement::cross(2), BoundaryMode::Nearest).unwrap();
//! assert!(edges[[0, 1]]);
//! assert!(!edges[[2, 0]]);
//! ```

// Re-export core types (used by every operation)
pub use ndlabel_core::*;

// Re-export the region crate as a module to keep its namespace
pub use ndlabel_region as region;
