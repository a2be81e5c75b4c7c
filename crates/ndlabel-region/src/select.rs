//! Region selection
//!
//! Deleting chosen regions from a labeled array.

use ndarray::{ArrayBase, DataMut, Dimension};
use ndlabel_core::LabelValue;

use crate::layout::with_row_major_mut;

/// Set every element whose label appears in `regions` to 0 (background).
///
/// Membership is tested by binary search, so `regions` must be sorted in
/// ascending order. The order is not checked; an unsorted slice gives
/// unspecified (but memory-safe) results. Use [`remove_regions_unsorted`]
/// when the order cannot be guaranteed.
///
/// # Returns
///
/// The number of elements that were cleared.
pub fn remove_regions<S, D, L>(labeled: &mut ArrayBase<S, D>, regions: &[L]) -> usize
where
    S: DataMut<Elem = L>,
    D: Dimension,
    L: LabelValue,
{
    if regions.is_empty() {
        return 0;
    }

    let removed = with_row_major_mut(labeled, |data| {
        let mut removed = 0;
        for value in data.iter_mut() {
            if !value.is_zero() && regions.binary_search(value).is_ok() {
                *value = L::zero();
                removed += 1;
            }
        }
        removed
    });

    log::debug!(
        "remove_regions: {} labels requested, {} elements cleared",
        regions.len(),
        removed
    );
    removed
}

/// Like [`remove_regions`], for a `regions` list in any order, possibly with
/// duplicates.
pub fn remove_regions_unsorted<S, D, L>(labeled: &mut ArrayBase<S, D>, regions: &[L]) -> usize
where
    S: DataMut<Elem = L>,
    D: Dimension,
    L: LabelValue,
{
    let mut sorted = regions.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    remove_regions(labeled, &sorted)
}
