//! ndlabel-region - Region processing for ndlabel
//!
//! This crate provides region processing functionality for arrays of any
//! rank:
//!
//! - **Connected component labeling** - Finding and numbering connected regions
//! - **Relabeling** - Canonical first-appearance renumbering of any labeling
//! - **Region removal** - Deleting selected regions
//! - **Border detection** - Marking elements next to a different value
//! - **Labeled reductions** - Per-region sum, maximum and minimum
//!
//! # Examples
//!
//! ## Labeling connected components
//!
//! ```
//! use ndarray::arr2;
//! use ndlabel_core::StructuringElement;
//! use ndlabel_region::label;
//!
//! let mut a = arr2(&[[1, 1, 0], [0, 0, 0], [0, 1, 1]]);
//! let count = label(&mut a, &StructuringElement::cross(2)).unwrap();
//! assert_eq!(count, 2);
//! assert_eq!(a, arr2(&[[1, 1, 0], [0, 0, 0], [0, 2, 2]]));
//! ```
//!
//! ## Measuring and filtering regions
//!
//! ```
//! use ndarray::arr1;
//! use ndlabel_core::StructuringElement;
//! use ndlabel_region::{label, labeled_sum, remove_regions};
//!
//! let mut a = arr1(&[1, 1, 0, 1, 1, 1, 0, 1]);
//! let count = label(&mut a, &StructuringElement::cross(1)).unwrap();
//!
//! // region sizes, slot 0 is the background
//! let ones = a.mapv(|_| 1);
//! let sizes = labeled_sum(&ones, &a, count + 1).unwrap();
//! assert_eq!(sizes.to_vec(), vec![2, 2, 3, 1]);
//!
//! // drop the single-element region
//! remove_regions(&mut a, &[3]);
//! assert_eq!(a, arr1(&[1, 1, 0, 2, 2, 2, 0, 0]));
//! ```

pub mod border;
pub mod disjoint;
pub mod error;
pub mod label;
mod layout;
pub mod reduce;
pub mod relabel;
pub mod select;

// Re-export core types
pub use ndlabel_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export union-find
pub use disjoint::DisjointSet;

// Re-export labeling functions
pub use label::{label, label_from};
pub use relabel::{Canonicalizer, relabel};
pub use select::{remove_regions, remove_regions_unsorted};

// Re-export border types and functions
pub use border::{
    BorderOptions, DEFAULT_MIN_PARALLEL_LEN, border, border_into, borders, borders_into,
};

// Re-export reduction types and functions
pub use reduce::{
    Extremum, Reducible, labeled_fold_into, labeled_max, labeled_max_into, labeled_max_min,
    labeled_max_min_into, labeled_min, labeled_min_into, labeled_sum, labeled_sum_into,
};
