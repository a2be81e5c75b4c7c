//! Border detection
//!
//! Flags elements that touch, through the structuring element's
//! neighborhood, an element with a different value:
//!
//! - [`borders`] marks every element with at least one differing neighbor
//! - [`border`] marks only the elements on the frontier between two given
//!   values
//!
//! Each output element depends only on its own neighborhood, so large arrays
//! are split into chunks and scanned with rayon; the result is identical to
//! the sequential scan.

use ndarray::{Array, ArrayBase, Data, DataMut, Dimension};
use ndlabel_core::{BoundaryMode, NeighborIterator, StructuringElement};
use rayon::prelude::*;

use crate::error::{RegionResult, check_same_shape};
use crate::layout::{row_major, with_row_major_mut};

/// Arrays smaller than this are always scanned sequentially by default
pub const DEFAULT_MIN_PARALLEL_LEN: usize = 1 << 16;

/// Options for border detection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderOptions {
    /// Boundary mode for neighbors outside the array (ignored by [`border`],
    /// which always uses [`BoundaryMode::Constant`])
    pub mode: BoundaryMode,
    /// Allow splitting the scan across the rayon thread pool
    pub parallel: bool,
    /// Minimum number of elements before the scan is split
    pub min_parallel_len: usize,
}

impl Default for BorderOptions {
    fn default() -> Self {
        Self {
            mode: BoundaryMode::Constant,
            parallel: true,
            min_parallel_len: DEFAULT_MIN_PARALLEL_LEN,
        }
    }
}

impl BorderOptions {
    /// Create options with the specified boundary mode
    pub fn new(mode: BoundaryMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Enable or disable parallel scanning
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the minimum array size for parallel scanning
    pub fn with_min_parallel_len(mut self, len: usize) -> Self {
        self.min_parallel_len = len;
        self
    }
}

/// Run `scan` over `out`, either in one piece or in parallel chunks.
///
/// `scan` receives a cursor positioned at the first element of its chunk and
/// returns whether it marked anything.
fn scan_chunks<F>(
    out: &mut [bool],
    cursor: &NeighborIterator,
    options: &BorderOptions,
    scan: F,
) -> bool
where
    F: Fn(&mut NeighborIterator, &mut [bool]) -> bool + Sync,
{
    let n = out.len();
    if !options.parallel || n < options.min_parallel_len.max(2) {
        let mut cursor = cursor.clone();
        return scan(&mut cursor, out);
    }

    let chunk_len = n.div_ceil(rayon::current_num_threads() * 4).max(1);
    log::trace!("border scan: {} elements in chunks of {}", n, chunk_len);
    out.par_chunks_mut(chunk_len)
        .enumerate()
        .map(|(c, chunk)| {
            let mut cursor = cursor.clone();
            cursor.seek(c * chunk_len);
            scan(&mut cursor, chunk)
        })
        .reduce(|| false, |a, b| a || b)
}

/// Mark elements that have a neighbor with a different value, writing into
/// a caller-supplied mask.
///
/// `out[p]` is set to `true` iff some neighbor of `p` retrievable under
/// `options.mode` differs from `array[p]`, and to `false` otherwise. The
/// neighbor search for a position stops at the first difference.
///
/// # Returns
///
/// Whether any element was marked.
///
/// # Errors
///
/// - [`RegionError::ShapeMismatch`](crate::RegionError::ShapeMismatch) if
///   `out` and `array` differ in shape
/// - wrapped [`ndlabel_core::Error::DimensionMismatch`] if `se` and `array`
///   differ in rank
pub fn borders_into<S, S2, D, D2, T>(
    array: &ArrayBase<S, D>,
    se: &StructuringElement,
    out: &mut ArrayBase<S2, D2>,
    options: &BorderOptions,
) -> RegionResult<bool>
where
    S: Data<Elem = T>,
    S2: DataMut<Elem = bool>,
    D: Dimension,
    D2: Dimension,
    T: Copy + PartialEq + Send + Sync,
{
    check_same_shape(array.shape(), out.shape())?;
    let cursor = NeighborIterator::new(array.shape(), se, options.mode)?;
    let data = row_major(array);
    let data: &[T] = &data;

    let any = with_row_major_mut(out, |mask| {
        scan_chunks(mask, &cursor, options, |cursor, chunk| {
            let mut any = false;
            for slot in chunk.iter_mut() {
                let cur = data[cursor.index()];
                *slot = (0..cursor.len())
                    .any(|k| cursor.retrieve(data, k).is_some_and(|v| v != cur));
                any |= *slot;
                cursor.advance();
            }
            any
        })
    });

    log::debug!(
        "borders: shape {:?}, mode {}, any = {}",
        array.shape(),
        options.mode,
        any
    );
    Ok(any)
}

/// Mark elements that have a neighbor with a different value.
///
/// See [`borders_into`]; this variant allocates the mask and uses default
/// options with the given boundary mode.
///
/// # Example
///
/// ```
/// use ndarray::arr1;
/// use ndlabel_core::{BoundaryMode, StructuringElement};
/// use ndlabel_region::borders;
///
/// let labeled = arr1(&[1, 1, 2, 2]);
/// let mask = borders(&labeled, &StructuringElement::cross(1), BoundaryMode::Constant).unwrap();
/// assert_eq!(mask, arr1(&[false, true, true, false]));
/// ```
pub fn borders<S, D, T>(
    array: &ArrayBase<S, D>,
    se: &StructuringElement,
    mode: BoundaryMode,
) -> RegionResult<Array<bool, D>>
where
    S: Data<Elem = T>,
    D: Dimension,
    T: Copy + PartialEq + Send + Sync,
{
    let mut out = Array::from_elem(array.raw_dim(), false);
    borders_into(array, se, &mut out, &BorderOptions::new(mode))?;
    Ok(out)
}

/// Mark the frontier between values `i` and `j`, writing into a
/// caller-supplied mask.
///
/// `out` is first reset to `false`. Then every element equal to `i` is marked
/// if one of its neighbors equals `j`, and every element equal to `j` is
/// marked if one of its neighbors equals `i`. Elements with any other value
/// are never marked. Neighbors outside the array are never retrieved
/// (`options.mode` is ignored). All neighbors of a position are examined even
/// after the first hit.
///
/// # Returns
///
/// Whether any element was marked.
///
/// # Errors
///
/// Same as [`borders_into`].
pub fn border_into<S, S2, D, D2, T>(
    array: &ArrayBase<S, D>,
    se: &StructuringElement,
    out: &mut ArrayBase<S2, D2>,
    i: T,
    j: T,
    options: &BorderOptions,
) -> RegionResult<bool>
where
    S: Data<Elem = T>,
    S2: DataMut<Elem = bool>,
    D: Dimension,
    D2: Dimension,
    T: Copy + PartialEq + Send + Sync,
{
    check_same_shape(array.shape(), out.shape())?;
    let cursor = NeighborIterator::new(array.shape(), se, BoundaryMode::Constant)?;
    let data = row_major(array);
    let data: &[T] = &data;

    let any = with_row_major_mut(out, |mask| {
        mask.fill(false);
        scan_chunks(mask, &cursor, options, |cursor, chunk| {
            let mut any = false;
            for slot in chunk.iter_mut() {
                let cur = data[cursor.index()];
                let other = if cur == i {
                    Some(j)
                } else if cur == j {
                    Some(i)
                } else {
                    None
                };
                if let Some(other) = other {
                    for k in 0..cursor.len() {
                        if cursor.retrieve(data, k) == Some(other) {
                            *slot = true;
                            any = true;
                        }
                    }
                }
                cursor.advance();
            }
            any
        })
    });

    log::debug!("border: shape {:?}, any = {}", array.shape(), any);
    Ok(any)
}

/// Mark the frontier between values `i` and `j`.
///
/// See [`border_into`]. Returns `None` when no element was marked, unless
/// `always_return` is set, in which case the (all-false) mask is returned.
pub fn border<S, D, T>(
    array: &ArrayBase<S, D>,
    se: &StructuringElement,
    i: T,
    j: T,
    always_return: bool,
) -> RegionResult<Option<Array<bool, D>>>
where
    S: Data<Elem = T>,
    D: Dimension,
    T: Copy + PartialEq + Send + Sync,
{
    let mut out = Array::from_elem(array.raw_dim(), false);
    let any = border_into(array, se, &mut out, i, j, &BorderOptions::default())?;
    Ok((any || always_return).then_some(out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegionError;
    use ndarray::{Array2, arr1, arr2};

    #[test]
    fn test_borders_1d_modes() {
        let a = arr1(&[1, 1, 2, 2]);
        let se = StructuringElement::cross(1);
        assert_eq!(
            borders(&a, &se, BoundaryMode::Constant).unwrap(),
            arr1(&[false, true, true, false])
        );
        // wrap brings the opposite end into the neighborhood
        assert_eq!(
            borders(&a, &se, BoundaryMode::Wrap).unwrap(),
            arr1(&[true, true, true, true])
        );
        assert_eq!(
            borders(&a, &se, BoundaryMode::Nearest).unwrap(),
            arr1(&[false, true, true, false])
        );
    }

    #[test]
    fn test_borders_2d() {
        let a = arr2(&[[1, 1, 1], [1, 2, 1], [1, 1, 1]]);
        let cross = borders(&a, &StructuringElement::cross(2), BoundaryMode::Constant).unwrap();
        assert_eq!(
            cross,
            arr2(&[
                [false, true, false],
                [true, true, true],
                [false, true, false]
            ])
        );
        let full = borders(&a, &StructuringElement::full(2), BoundaryMode::Constant).unwrap();
        assert!(full.iter().all(|&b| b));
    }

    #[test]
    fn test_borders_without_neighbors() {
        let a = arr1(&[1, 2, 3, 4]);
        let se = StructuringElement::centered(&arr1(&[false, true, false])).unwrap();
        for mode in BoundaryMode::ALL {
            assert!(borders(&a, &se, mode).unwrap().iter().all(|&b| !b));
        }
    }

    #[test]
    fn test_borders_into_overwrites() {
        let a = arr1(&[3, 3, 3]);
        let mut out = arr1(&[true, true, true]);
        let se = StructuringElement::cross(1);
        let any = borders_into(&a, &se, &mut out, &BorderOptions::default()).unwrap();
        assert!(!any);
        assert_eq!(out, arr1(&[false, false, false]));
    }

    #[test]
    fn test_borders_shape_mismatch() {
        let a = arr1(&[1, 2, 3]);
        let mut out = arr1(&[false, false]);
        assert!(matches!(
            borders_into(&a, &StructuringElement::cross(1), &mut out, &BorderOptions::default()),
            Err(RegionError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_border_pair() {
        let a = arr2(&[[1, 1, 2], [1, 3, 2], [3, 3, 2]]);
        let se = StructuringElement::cross(2);
        let mask = border(&a, &se, 1, 2, false).unwrap().unwrap();
        assert_eq!(
            mask,
            arr2(&[
                [false, true, true],
                [false, false, false],
                [false, false, false]
            ])
        );
    }

    #[test]
    fn test_border_symmetric() {
        let a = arr2(&[[1, 1, 2], [1, 3, 2], [3, 3, 2]]);
        let se = StructuringElement::full(2);
        for (i, j) in [(1, 2), (1, 3), (2, 3)] {
            assert_eq!(
                border(&a, &se, i, j, true).unwrap(),
                border(&a, &se, j, i, true).unwrap()
            );
        }
    }

    #[test]
    fn test_border_not_found() {
        let a = arr1(&[1, 0, 2]);
        let se = StructuringElement::cross(1);
        assert_eq!(border(&a, &se, 1, 2, false).unwrap(), None);
        let mask = border(&a, &se, 1, 2, true).unwrap().unwrap();
        assert!(mask.iter().all(|&b| !b));
    }

    #[test]
    fn test_border_ignores_mode_and_resets_output() {
        let a = arr1(&[1, 0, 0, 2]);
        let mut out = arr1(&[true, true, true, true]);
        let options = BorderOptions::new(BoundaryMode::Wrap);
        let any = border_into(&a, &StructuringElement::cross(1), &mut out, 1, 2, &options).unwrap();
        assert!(!any);
        assert_eq!(out, arr1(&[false, false, false, false]));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let a = Array2::from_shape_fn((37, 53), |(r, c)| ((r * 7 + c * 3) / 11) % 4);
        let se = StructuringElement::full(2);
        let sequential = BorderOptions::new(BoundaryMode::Reflect).with_parallel(false);
        let parallel = BorderOptions::new(BoundaryMode::Reflect)
            .with_parallel(true)
            .with_min_parallel_len(1);

        let mut seq = Array2::from_elem(a.raw_dim(), false);
        let mut par = Array2::from_elem(a.raw_dim(), false);
        borders_into(&a, &se, &mut seq, &sequential).unwrap();
        borders_into(&a, &se, &mut par, &parallel).unwrap();
        assert_eq!(seq, par);

        let seq_any = border_into(&a, &se, &mut seq, 1, 2, &sequential).unwrap();
        let par_any = border_into(&a, &se, &mut par, 1, 2, &parallel).unwrap();
        assert_eq!(seq_any, par_any);
        assert_eq!(seq, par);
    }
}
