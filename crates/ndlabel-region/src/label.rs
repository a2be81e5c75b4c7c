//! Connected component labeling
//!
//! Assigns each connected group of non-zero elements a unique label, with
//! adjacency defined by a [`StructuringElement`] of any rank.
//!
//! The algorithm is a single union-find pass in row-major order, followed by
//! path compression and a first-encounter canonicalization of the roots. Both
//! passes run in fixed scan order, so the numbering is deterministic: region 1
//! is the region containing the first foreground element, region 2 the next
//! region to appear, and so on.

use ndarray::{Array, ArrayBase, Data, DataMut, Dimension};
use ndlabel_core::{BoundaryMode, Foreground, LabelValue, NeighborIterator, StructuringElement};

use crate::disjoint::DisjointSet;
use crate::error::RegionResult;
use crate::layout::{row_major, with_row_major_mut};
use crate::relabel::{Canonicalizer, label_limit};

/// Label the connected components of a flat row-major foreground mask.
///
/// Returns one label per element (0 for background) and the region count.
fn label_flat(
    foreground: &[bool],
    shape: &[usize],
    se: &StructuringElement,
) -> RegionResult<(Vec<usize>, usize)> {
    let mut iter = NeighborIterator::new(shape, se, BoundaryMode::Constant)?;
    let n = foreground.len();
    let mut sets = DisjointSet::new(n);

    for i in 0..n {
        if foreground[i] {
            for k in 0..iter.len() {
                if let Some(j) = iter.neighbor(k)
                    && foreground[j]
                {
                    sets.union(i, j);
                }
            }
        }
        iter.advance();
    }

    for i in 0..n {
        if foreground[i] {
            sets.compress(i);
        }
    }

    let mut table = Canonicalizer::new(None);
    let mut labels = sets.into_parents();
    for (i, slot) in labels.iter_mut().enumerate() {
        let root = foreground[i].then_some(*slot);
        *slot = table.assign(root);
    }

    Ok((labels, table.count()))
}

/// Label connected components in place.
///
/// Every non-zero element of `array` is foreground. On return each element
/// holds its region label (consecutive from 1, in order of first appearance
/// in row-major order) and background elements hold 0.
///
/// Neighbors are the active offsets of `se`; offsets falling outside the
/// array have no neighbor.
///
/// # Returns
///
/// The number of regions.
///
/// # Errors
///
/// - [`ndlabel_core::Error::DimensionMismatch`] (wrapped) if `se` and `array`
///   differ in rank
/// - [`RegionError::LabelOverflow`](crate::RegionError::LabelOverflow) if the
///   region count does not fit in `L`; the array is left untouched
pub fn label<S, D, L>(array: &mut ArrayBase<S, D>, se: &StructuringElement) -> RegionResult<usize>
where
    S: DataMut<Elem = L>,
    D: Dimension,
    L: LabelValue,
{
    let foreground: Vec<bool> = row_major(array).iter().map(Foreground::is_foreground).collect();
    let shape = array.shape().to_vec();
    let (labels, count) = label_flat(&foreground, &shape, se)?;
    label_limit::<L>(count)?;

    with_row_major_mut(array, |data| {
        for (dst, &label) in data.iter_mut().zip(&labels) {
            *dst = L::from_usize(label).unwrap_or_else(L::zero);
        }
    });

    log::debug!(
        "label: shape {:?}, {} neighbors, {} regions",
        shape,
        se.neighbor_count(),
        count
    );
    Ok(count)
}

/// Label connected components of any array into a new label array.
///
/// Like [`label`], but the input may be of any [`Foreground`] element type
/// (booleans, unsigned integers, floats) and is not modified.
///
/// # Returns
///
/// The label array, with the same shape as `input`, and the number of
/// regions.
pub fn label_from<S, D, T, L>(
    input: &ArrayBase<S, D>,
    se: &StructuringElement,
) -> RegionResult<(Array<L, D>, usize)>
where
    S: Data<Elem = T>,
    D: Dimension,
    T: Foreground,
    L: LabelValue,
{
    let foreground: Vec<bool> = input.iter().map(Foreground::is_foreground).collect();
    let (labels, count) = label_flat(&foreground, input.shape(), se)?;
    label_limit::<L>(count)?;

    let mut out = Array::from_elem(input.raw_dim(), L::zero());
    with_row_major_mut(&mut out, |data| {
        for (dst, &label) in data.iter_mut().zip(&labels) {
            *dst = L::from_usize(label).unwrap_or_else(L::zero);
        }
    });

    log::debug!(
        "label_from: shape {:?}, {} regions",
        input.shape(),
        count
    );
    Ok((out, count))
}
