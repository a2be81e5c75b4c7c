//! Structuring element
//!
//! A structuring element defines the neighborhood used by labeling and border
//! detection. It is a boolean mask of arbitrary rank with an explicit center;
//! its active cells, minus the center, are the neighbor offsets.

use ndarray::{ArrayBase, Data, Dimension};

use crate::element::Foreground;
use crate::error::{Error, Result};

/// N-dimensional structuring element.
///
/// The mask is stored in row-major order together with its shape and
/// center index. Shape and center are fixed once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuringElement {
    shape: Vec<usize>,
    center: Vec<usize>,
    mask: Vec<bool>,
}

impl StructuringElement {
    /// Create a structuring element from a boolean mask and a center index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStructuringElement`] if any extent is zero, or
    /// if `center` does not have one in-range coordinate per axis.
    pub fn new<S, D>(mask: &ArrayBase<S, D>, center: &[usize]) -> Result<Self>
    where
        S: Data<Elem = bool>,
        D: Dimension,
    {
        Self::from_parts(
            mask.shape().to_vec(),
            center.to_vec(),
            mask.iter().copied().collect(),
        )
    }

    /// Create a structuring element centered at `shape[a] / 2` on every axis.
    pub fn centered<S, D>(mask: &ArrayBase<S, D>) -> Result<Self>
    where
        S: Data<Elem = bool>,
        D: Dimension,
    {
        let center: Vec<usize> = mask.shape().iter().map(|&n| n / 2).collect();
        Self::new(mask, &center)
    }

    /// Create a centered structuring element from any array, treating
    /// non-zero elements as active.
    pub fn from_nonzero<S, D, T>(array: &ArrayBase<S, D>) -> Result<Self>
    where
        S: Data<Elem = T>,
        D: Dimension,
        T: Foreground,
    {
        let shape = array.shape().to_vec();
        let center = shape.iter().map(|&n| n / 2).collect();
        let mask = array.iter().map(Foreground::is_foreground).collect();
        Self::from_parts(shape, center, mask)
    }

    /// Cross-shaped element of extent 3 on every axis: the center plus its
    /// two immediate neighbors along each axis.
    pub fn cross(ndim: usize) -> Self {
        let shape = vec![3; ndim];
        let center = vec![1; ndim];
        let total = 3usize.pow(ndim as u32);
        let mid = total / 2;
        let mut mask = vec![false; total];
        mask[mid] = true;
        for axis in 0..ndim {
            let stride = 3usize.pow((ndim - 1 - axis) as u32);
            mask[mid - stride] = true;
            mask[mid + stride] = true;
        }
        Self {
            shape,
            center,
            mask,
        }
    }

    /// Fully connected element of extent 3 on every axis (diagonals included).
    pub fn full(ndim: usize) -> Self {
        Self {
            shape: vec![3; ndim],
            center: vec![1; ndim],
            mask: vec![true; 3usize.pow(ndim as u32)],
        }
    }

    fn from_parts(shape: Vec<usize>, center: Vec<usize>, mask: Vec<bool>) -> Result<Self> {
        if let Some(axis) = shape.iter().position(|&n| n == 0) {
            return Err(Error::InvalidStructuringElement(format!(
                "axis {} has zero extent",
                axis
            )));
        }
        if center.len() != shape.len() {
            return Err(Error::InvalidStructuringElement(format!(
                "center has {} coordinates for a rank {} mask",
                center.len(),
                shape.len()
            )));
        }
        if let Some(axis) = (0..shape.len()).find(|&a| center[a] >= shape[a]) {
            return Err(Error::InvalidStructuringElement(format!(
                "center coordinate {} is outside axis {} of extent {}",
                center[axis], axis, shape[axis]
            )));
        }
        Ok(Self {
            shape,
            center,
            mask,
        })
    }

    /// Rank of the element
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Extent per axis
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Center index
    #[inline]
    pub fn center(&self) -> &[usize] {
        &self.center
    }

    /// Whether the cell at `index` is active. Out-of-range indices are not.
    pub fn is_active(&self, index: &[usize]) -> bool {
        if index.len() != self.ndim() || index.iter().zip(&self.shape).any(|(&i, &n)| i >= n) {
            return false;
        }
        let flat = index
            .iter()
            .zip(&self.shape)
            .fold(0, |acc, (&i, &n)| acc * n + i);
        self.mask[flat]
    }

    /// Offsets of the active cells relative to the center, center excluded,
    /// in row-major order of the mask.
    pub fn offsets(&self) -> Vec<Vec<isize>> {
        let ndim = self.ndim();
        let mut offsets = Vec::new();
        let mut index = vec![0usize; ndim];

        for &active in &self.mask {
            if active && index != self.center {
                offsets.push(
                    index
                        .iter()
                        .zip(&self.center)
                        .map(|(&i, &c)| i as isize - c as isize)
                        .collect(),
                );
            }
            for axis in (0..ndim).rev() {
                index[axis] += 1;
                if index[axis] < self.shape[axis] {
                    break;
                }
                index[axis] = 0;
            }
        }

        offsets
    }

    /// Number of neighbor offsets (active cells other than the center)
    pub fn neighbor_count(&self) -> usize {
        let active = self.mask.iter().filter(|&&on| on).count();
        if self.is_active(&self.center) {
            active - 1
        } else {
            active
        }
    }
}
