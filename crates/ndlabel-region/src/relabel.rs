//! Label canonicalization
//!
//! Renumbers arbitrary label values into consecutive integers starting at 1,
//! in order of first appearance in a row-major scan. The same scheme is the
//! final pass of [`label`](crate::label::label).

use std::collections::HashMap;
use std::hash::Hash;

use ndarray::{ArrayBase, DataMut, Dimension};
use ndlabel_core::LabelValue;

use crate::error::{RegionError, RegionResult};
use crate::layout::with_row_major_mut;

/// First-encounter renumbering table.
///
/// The background key always maps to 0; every other key gets the next free
/// label, starting at 1, the first time it is seen.
#[derive(Debug, Clone)]
pub struct Canonicalizer<K> {
    seen: HashMap<K, usize>,
    next: usize,
}

impl<K: Hash + Eq> Canonicalizer<K> {
    /// Create a table with `background` mapped to 0
    pub fn new(background: K) -> Self {
        let mut seen = HashMap::new();
        seen.insert(background, 0);
        Self { seen, next: 1 }
    }

    /// Label for `key`, assigning the next free one on first encounter
    pub fn assign(&mut self, key: K) -> usize {
        let next = &mut self.next;
        *self.seen.entry(key).or_insert_with(|| {
            let label = *next;
            *next += 1;
            label
        })
    }

    /// Label previously assigned to `key`, if any
    pub fn get(&self, key: &K) -> Option<usize> {
        self.seen.get(key).copied()
    }

    /// Number of labels assigned, background excluded
    pub fn count(&self) -> usize {
        self.next - 1
    }
}

/// Check that a label count fits in the label element type
pub(crate) fn label_limit<L: LabelValue>(count: usize) -> RegionResult<()> {
    match L::from_usize(count) {
        Some(_) => Ok(()),
        None => Err(RegionError::LabelOverflow {
            count,
            max: L::max_value().to_u128().unwrap_or(u128::MAX),
        }),
    }
}

/// Renumber a labeled array in place.
///
/// `0` stays background; every other value is replaced by its rank of first
/// appearance in row-major order (1, 2, ...). Works on any labeling, not only
/// on output of [`label`](crate::label::label); negative values are treated
/// as ordinary labels.
///
/// # Returns
///
/// The number of distinct non-zero labels.
///
/// # Errors
///
/// Returns [`RegionError::LabelOverflow`] if the number of distinct labels
/// does not fit in `L`. The array is left untouched in that case.
pub fn relabel<S, D, L>(labeled: &mut ArrayBase<S, D>) -> RegionResult<usize>
where
    S: DataMut<Elem = L>,
    D: Dimension,
    L: LabelValue,
{
    let mut table = Canonicalizer::new(L::zero());
    for &value in labeled.iter() {
        table.assign(value);
    }
    let count = table.count();
    label_limit::<L>(count)?;

    with_row_major_mut(labeled, |data| {
        for value in data.iter_mut() {
            if let Some(label) = table.get(value).and_then(L::from_usize) {
                *value = label;
            }
        }
    });

    log::debug!("relabel: {} distinct labels", count);
    Ok(count)
}
