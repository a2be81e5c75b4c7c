//! ndlabel-test - Regression test framework for ndlabel
//!
//! Regression tests record every comparison in a [`RegParams`] and report the
//! overall result at the end, supporting two modes:
//!
//! - **Compare**: Compare results with the expected values (default)
//! - **Display**: Also print the compared arrays for visual inspection
//!
//! # Usage
//!
//! ```ignore
//! use ndlabel_test::{RegParams, parse_grid};
//!
//! let mut rp = RegParams::new("label");
//! rp.compare_values(3.0, count as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod error;
mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use fixtures::{parse_grid, random_binary, same_partition};
pub use params::{RegParams, RegTestMode};
