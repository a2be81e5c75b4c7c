//! Per-label reductions
//!
//! Folds a value array into one accumulator slot per label, using a parallel
//! label array of the same shape. Slot `l` receives every value whose label
//! is `l`; labels outside `0..maxlabel` (including negative ones) are
//! skipped. Slot 0 collects the background like any other label.
//!
//! The fold runs in row-major order, so floating-point sums are reproducible.

use ndarray::{Array1, ArrayBase, Data, DataMut, Dimension, Ix1};
use ndlabel_core::LabelValue;
use num_traits::{Bounded, WrappingAdd, Zero};

use crate::error::{RegionResult, check_same_shape};
use crate::layout::row_major;

/// Element type that supports the built-in reductions
pub trait Reducible: Copy + PartialOrd {
    /// Start value of a sum
    fn sum_identity() -> Self;
    /// Combine a value into a running sum
    fn sum(value: Self, acc: Self) -> Self;
    /// Smallest representable value (start of a max)
    fn lowest() -> Self;
    /// Largest representable value (start of a min)
    fn highest() -> Self;
}

macro_rules! impl_reducible_int {
    ($($t:ty),*) => {
        $(
            impl Reducible for $t {
                #[inline]
                fn sum_identity() -> Self {
                    <$t as Zero>::zero()
                }
                #[inline]
                fn sum(value: Self, acc: Self) -> Self {
                    WrappingAdd::wrapping_add(&value, &acc)
                }
                #[inline]
                fn lowest() -> Self {
                    <$t as Bounded>::min_value()
                }
                #[inline]
                fn highest() -> Self {
                    <$t as Bounded>::max_value()
                }
            }
        )*
    };
}

impl_reducible_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! impl_reducible_float {
    ($($t:ty),*) => {
        $(
            impl Reducible for $t {
                #[inline]
                fn sum_identity() -> Self {
                    0.0
                }
                #[inline]
                fn sum(value: Self, acc: Self) -> Self {
                    value + acc
                }
                #[inline]
                fn lowest() -> Self {
                    <$t>::MIN
                }
                #[inline]
                fn highest() -> Self {
                    <$t>::MAX
                }
            }
        )*
    };
}

impl_reducible_float!(f32, f64);

/// Summing booleans means "any true"
impl Reducible for bool {
    #[inline]
    fn sum_identity() -> Self {
        false
    }
    #[inline]
    fn sum(value: Self, acc: Self) -> Self {
        value || acc
    }
    #[inline]
    fn lowest() -> Self {
        false
    }
    #[inline]
    fn highest() -> Self {
        true
    }
}

/// Which extremum [`labeled_max_min`] computes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    Max,
    Min,
}

#[inline]
fn max_fold<T: PartialOrd>(value: T, acc: T) -> T {
    if value < acc { acc } else { value }
}

#[inline]
fn min_fold<T: PartialOrd>(value: T, acc: T) -> T {
    if acc < value { acc } else { value }
}

/// Fold `values` per label into `out`.
///
/// Every slot of `out` is reset to `start`; then, in row-major order, each
/// position whose label `l` lies in `0..out.len()` updates
/// `out[l] = fold(value, out[l])`.
///
/// # Errors
///
/// Returns [`RegionError::ShapeMismatch`](crate::RegionError::ShapeMismatch)
/// if `values` and `labels` differ in shape.
pub fn labeled_fold_into<S, SL, SO, D, T, L, F>(
    values: &ArrayBase<S, D>,
    labels: &ArrayBase<SL, D>,
    out: &mut ArrayBase<SO, Ix1>,
    start: T,
    fold: F,
) -> RegionResult<()>
where
    S: Data<Elem = T>,
    SL: Data<Elem = L>,
    SO: DataMut<Elem = T>,
    D: Dimension,
    T: Copy,
    L: LabelValue,
    F: Fn(T, T) -> T,
{
    check_same_shape(values.shape(), labels.shape())?;
    out.fill(start);
    let maxlabel = out.len();

    let values = row_major(values);
    let labels = row_major(labels);
    for (&value, label) in values.iter().zip(labels.iter()) {
        if let Some(l) = label.to_usize()
            && l < maxlabel
        {
            out[l] = fold(value, out[l]);
        }
    }

    log::debug!("labeled fold: {} elements into {} slots", values.len(), maxlabel);
    Ok(())
}

/// Sum of `values` per label, into `out` (logical-or for booleans)
pub fn labeled_sum_into<S, SL, SO, D, T, L>(
    values: &ArrayBase<S, D>,
    labels: &ArrayBase<SL, D>,
    out: &mut ArrayBase<SO, Ix1>,
) -> RegionResult<()>
where
    S: Data<Elem = T>,
    SL: Data<Elem = L>,
    SO: DataMut<Elem = T>,
    D: Dimension,
    T: Reducible,
    L: LabelValue,
{
    labeled_fold_into(values, labels, out, T::sum_identity(), T::sum)
}

/// Maximum or minimum of `values` per label, into `out`.
///
/// Slots with no element hold the type's lowest (for max) or highest (for
/// min) representable value. NaN is not treated specially.
pub fn labeled_max_min_into<S, SL, SO, D, T, L>(
    values: &ArrayBase<S, D>,
    labels: &ArrayBase<SL, D>,
    out: &mut ArrayBase<SO, Ix1>,
    extremum: Extremum,
) -> RegionResult<()>
where
    S: Data<Elem = T>,
    SL: Data<Elem = L>,
    SO: DataMut<Elem = T>,
    D: Dimension,
    T: Reducible,
    L: LabelValue,
{
    match extremum {
        Extremum::Max => labeled_fold_into(values, labels, out, T::lowest(), max_fold),
        Extremum::Min => labeled_fold_into(values, labels, out, T::highest(), min_fold),
    }
}

/// Maximum of `values` per label, into `out`
pub fn labeled_max_into<S, SL, SO, D, T, L>(
    values: &ArrayBase<S, D>,
    labels: &ArrayBase<SL, D>,
    out: &mut ArrayBase<SO, Ix1>,
) -> RegionResult<()>
where
    S: Data<Elem = T>,
    SL: Data<Elem = L>,
    SO: DataMut<Elem = T>,
    D: Dimension,
    T: Reducible,
    L: LabelValue,
{
    labeled_max_min_into(values, labels, out, Extremum::Max)
}

/// Minimum of `values` per label, into `out`
pub fn labeled_min_into<S, SL, SO, D, T, L>(
    values: &ArrayBase<S, D>,
    labels: &ArrayBase<SL, D>,
    out: &mut ArrayBase<SO, Ix1>,
) -> RegionResult<()>
where
    S: Data<Elem = T>,
    SL: Data<Elem = L>,
    SO: DataMut<Elem = T>,
    D: Dimension,
    T: Reducible,
    L: LabelValue,
{
    labeled_max_min_into(values, labels, out, Extremum::Min)
}

/// Sum of `values` per label for labels `0..maxlabel`.
///
/// # Example
///
/// ```
/// use ndarray::arr1;
/// use ndlabel_region::labeled_sum;
///
/// let values = arr1(&[5, 5, 0, 2, 2, 2, 0, 9]);
/// let labels = arr1(&[1, 1, 0, 2, 2, 2, 0, 3]);
/// let sums = labeled_sum(&values, &labels, 4).unwrap();
/// assert_eq!(sums, arr1(&[0, 10, 6, 9]));
/// ```
pub fn labeled_sum<S, SL, D, T, L>(
    values: &ArrayBase<S, D>,
    labels: &ArrayBase<SL, D>,
    maxlabel: usize,
) -> RegionResult<Array1<T>>
where
    S: Data<Elem = T>,
    SL: Data<Elem = L>,
    D: Dimension,
    T: Reducible,
    L: LabelValue,
{
    let mut out = Array1::from_elem(maxlabel, T::sum_identity());
    labeled_sum_into(values, labels, &mut out)?;
    Ok(out)
}

/// Maximum or minimum of `values` per label for labels `0..maxlabel`
pub fn labeled_max_min<S, SL, D, T, L>(
    values: &ArrayBase<S, D>,
    labels: &ArrayBase<SL, D>,
    maxlabel: usize,
    extremum: Extremum,
) -> RegionResult<Array1<T>>
where
    S: Data<Elem = T>,
    SL: Data<Elem = L>,
    D: Dimension,
    T: Reducible,
    L: LabelValue,
{
    let mut out = Array1::from_elem(maxlabel, T::sum_identity());
    labeled_max_min_into(values, labels, &mut out, extremum)?;
    Ok(out)
}

/// Maximum of `values` per label for labels `0..maxlabel`
pub fn labeled_max<S, SL, D, T, L>(
    values: &ArrayBase<S, D>,
    labels: &ArrayBase<SL, D>,
    maxlabel: usize,
) -> RegionResult<Array1<T>>
where
    S: Data<Elem = T>,
    SL: Data<Elem = L>,
    D: Dimension,
    T: Reducible,
    L: LabelValue,
{
    labeled_max_min(values, labels, maxlabel, Extremum::Max)
}

/// Minimum of `values` per label for labels `0..maxlabel`
pub fn labeled_min<S, SL, D, T, L>(
    values: &ArrayBase<S, D>,
    labels: &ArrayBase<SL, D>,
    maxlabel: usize,
) -> RegionResult<Array1<T>>
where
    S: Data<Elem = T>,
    SL: Data<Elem = L>,
    D: Dimension,
    T: Reducible,
    L: LabelValue,
{
    labeled_max_min(values, labels, maxlabel, Extremum::Min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegionError;
    use ndarray::{arr1, arr2};

    #[test]
    fn test_labeled_sum_scenario() {
        let values = arr1(&[5, 5, 0, 2, 2, 2, 0, 9]);
        let labels = arr1(&[1, 1, 0, 2, 2, 2, 0, 3]);
        assert_eq!(
            labeled_sum(&values, &labels, 4).unwrap(),
            arr1(&[0, 10, 6, 9])
        );
    }

    #[test]
    fn test_labeled_sum_uniform() {
        let labels = arr2(&[[1, 1, 2], [1, 0, 2], [1, 3, 3]]);
        let values = labels.mapv(|_| 2.5f64);
        let sums = labeled_sum(&values, &labels, 4).unwrap();
        assert_eq!(sums, arr1(&[2.5, 10.0, 5.0, 5.0]));
    }

    #[test]
    fn test_labeled_sum_bool_is_any() {
        let values = arr1(&[false, true, false, false, true]);
        let labels = arr1(&[1, 1, 2, 2, 0]);
        assert_eq!(
            labeled_sum(&values, &labels, 3).unwrap(),
            arr1(&[true, true, false])
        );
    }

    #[test]
    fn test_labeled_sum_wraps_integers() {
        let values = arr1(&[200u8, 100]);
        let labels = arr1(&[0, 0]);
        assert_eq!(labeled_sum(&values, &labels, 1).unwrap(), arr1(&[44u8]));
    }

    #[test]
    fn test_out_of_range_labels_skipped() {
        let values = arr1(&[1, 2, 4, 8]);
        let labels = arr1(&[-1i64, 0, 5, 1]);
        assert_eq!(labeled_sum(&values, &labels, 2).unwrap(), arr1(&[2, 8]));
        assert_eq!(labeled_sum(&values, &labels, 0).unwrap().len(), 0);
    }

    #[test]
    fn test_labeled_max_min() {
        let values = arr1(&[3, -7, 4, 1, 9]);
        let labels = arr1(&[1, 1, 2, 1, 4]);
        assert_eq!(
            labeled_max(&values, &labels, 4).unwrap(),
            arr1(&[i32::MIN, 3, 4, i32::MIN])
        );
        assert_eq!(
            labeled_min(&values, &labels, 4).unwrap(),
            arr1(&[i32::MAX, -7, 4, i32::MAX])
        );
    }

    #[test]
    fn test_labeled_max_float_negative() {
        let values = arr1(&[-3.0f32, -1.5]);
        let labels = arr1(&[1, 1]);
        let max = labeled_max_min(&values, &labels, 2, Extremum::Max).unwrap();
        assert_eq!(max, arr1(&[f32::MIN, -1.5]));
    }

    #[test]
    fn test_labeled_max_nan_follows_comparison() {
        // NaN as a later value replaces the accumulator; as the accumulator
        // it is replaced by the next value
        let values = arr1(&[1.0, f64::NAN, 2.0]);
        let labels = arr1(&[0, 0, 0]);
        let max = labeled_max(&values, &labels, 1).unwrap();
        assert_eq!(max[0], 2.0);
    }

    #[test]
    fn test_labeled_fold_custom() {
        let values = arr1(&[1, 2, 3, 4]);
        let labels = arr1(&[0, 1, 0, 1]);
        let mut out = arr1(&[0, 0]);
        labeled_fold_into(&values, &labels, &mut out, 1, |v, acc| v * acc).unwrap();
        assert_eq!(out, arr1(&[3, 8]));
    }

    #[test]
    fn test_into_resets_output() {
        let values = arr1(&[1, 1]);
        let labels = arr1(&[0, 0]);
        let mut out = arr1(&[100, 100, 100]);
        labeled_sum_into(&values, &labels, &mut out).unwrap();
        assert_eq!(out, arr1(&[2, 0, 0]));
    }

    #[test]
    fn test_shape_mismatch() {
        let values = arr1(&[1, 2, 3]);
        let labels = arr1(&[0, 1]);
        assert!(matches!(
            labeled_sum(&values, &labels, 2),
            Err(RegionError::ShapeMismatch { .. })
        ));
    }
}
