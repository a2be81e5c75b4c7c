//! Neighborhood cursor
//!
//! [`NeighborIterator`] walks an array of a given shape in row-major order and,
//! at each position, resolves the neighbors selected by a
//! [`StructuringElement`] under a [`BoundaryMode`]. It only deals in flat
//! indices, so the same cursor can probe any number of arrays sharing that
//! shape (a labeled array and its value array, for example).
//!
//! Positions far enough from every edge take a fast path that adds
//! precomputed flat deltas; positions near an edge resolve each axis through
//! the boundary mode.

use crate::boundary::BoundaryMode;
use crate::error::{Error, Result};
use crate::strel::StructuringElement;

/// Cursor over the neighbors of each position of an N-D array
#[derive(Debug, Clone)]
pub struct NeighborIterator {
    shape: Vec<usize>,
    strides: Vec<usize>,
    size: usize,
    mode: BoundaryMode,
    /// Per-neighbor, per-axis offsets
    offsets: Vec<Vec<isize>>,
    /// Per-neighbor flat offsets, valid for interior positions
    flat_offsets: Vec<isize>,
    /// Per-axis reach of the neighborhood below and above the center
    reach_below: Vec<usize>,
    reach_above: Vec<usize>,
    position: Vec<usize>,
    index: usize,
    interior: bool,
}

impl NeighborIterator {
    /// Create a cursor for an array of `shape`, positioned at flat index 0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the structuring element's rank
    /// differs from the array's.
    pub fn new(shape: &[usize], se: &StructuringElement, mode: BoundaryMode) -> Result<Self> {
        let ndim = shape.len();
        if se.ndim() != ndim {
            return Err(Error::DimensionMismatch {
                expected: ndim,
                actual: se.ndim(),
            });
        }

        let mut strides = vec![1usize; ndim];
        for axis in (0..ndim.saturating_sub(1)).rev() {
            strides[axis] = strides[axis + 1] * shape[axis + 1];
        }

        let offsets = se.offsets();
        let flat_offsets = offsets
            .iter()
            .map(|offset| {
                offset
                    .iter()
                    .zip(&strides)
                    .map(|(&d, &s)| d * s as isize)
                    .sum()
            })
            .collect();

        let mut reach_below = vec![0usize; ndim];
        let mut reach_above = vec![0usize; ndim];
        for offset in &offsets {
            for (axis, &d) in offset.iter().enumerate() {
                if d < 0 {
                    reach_below[axis] = reach_below[axis].max(d.unsigned_abs());
                } else {
                    reach_above[axis] = reach_above[axis].max(d as usize);
                }
            }
        }

        let mut iter = Self {
            shape: shape.to_vec(),
            strides,
            size: shape.iter().product(),
            mode,
            offsets,
            flat_offsets,
            reach_below,
            reach_above,
            position: vec![0; ndim],
            index: 0,
            interior: false,
        };
        iter.interior = iter.compute_interior();
        Ok(iter)
    }

    /// Number of neighbor offsets
    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether the neighborhood has no offsets at all
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Number of elements in the walked array
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Boundary mode used for out-of-range neighbors
    #[inline]
    pub fn mode(&self) -> BoundaryMode {
        self.mode
    }

    /// Current flat (row-major) index
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Current multi-dimensional position
    #[inline]
    pub fn position(&self) -> &[usize] {
        &self.position
    }

    /// Move to the next flat index.
    pub fn advance(&mut self) {
        self.index += 1;
        for axis in (0..self.shape.len()).rev() {
            self.position[axis] += 1;
            if self.position[axis] < self.shape[axis] {
                break;
            }
            self.position[axis] = 0;
        }
        self.interior = self.compute_interior();
    }

    /// Jump to an arbitrary flat index.
    pub fn seek(&mut self, index: usize) {
        self.index = index;
        if self.size == 0 {
            return;
        }
        let mut rest = index;
        for axis in 0..self.shape.len() {
            self.position[axis] = rest / self.strides[axis];
            rest %= self.strides[axis];
        }
        self.interior = self.compute_interior();
    }

    /// Whether the k-th neighbor of the current position lies inside the
    /// array without any boundary extension.
    pub fn in_bounds(&self, k: usize) -> bool {
        self.interior
            || self.offsets[k]
                .iter()
                .zip(&self.position)
                .zip(&self.shape)
                .all(|((&d, &p), &n)| (0..n as isize).contains(&(p as isize + d)))
    }

    /// Flat index of the k-th neighbor of the current position.
    ///
    /// Returns `None` when the neighbor falls outside the array under
    /// [`BoundaryMode::Constant`]; callers treat that as "no such neighbor".
    pub fn neighbor(&self, k: usize) -> Option<usize> {
        if self.interior {
            return Some((self.index as isize + self.flat_offsets[k]) as usize);
        }
        let mut flat = 0;
        for (axis, &d) in self.offsets[k].iter().enumerate() {
            let coord = self
                .mode
                .resolve(self.position[axis] as isize + d, self.shape[axis])?;
            flat += coord * self.strides[axis];
        }
        Some(flat)
    }

    /// Value of the k-th neighbor in `data`, a row-major buffer with the
    /// cursor's shape.
    #[inline]
    pub fn retrieve<T: Copy>(&self, data: &[T], k: usize) -> Option<T> {
        self.neighbor(k).map(|j| data[j])
    }

    /// Flat indices of all retrievable neighbors of the current position.
    pub fn neighbors(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len()).filter_map(move |k| self.neighbor(k))
    }

    fn compute_interior(&self) -> bool {
        self.position
            .iter()
            .zip(&self.shape)
            .zip(self.reach_below.iter().zip(&self.reach_above))
            .all(|((&p, &n), (&below, &above))| p >= below && p + above < n)
    }
}
