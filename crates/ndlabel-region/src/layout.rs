//! Row-major access to arrays of any memory layout
//!
//! The scanning algorithms work on flat row-major buffers. Standard-layout
//! arrays are used directly; anything else goes through a logical-order copy.

use std::borrow::Cow;

use ndarray::{ArrayBase, Data, DataMut, Dimension};

/// Row-major contents of `array`, borrowed when the layout allows it.
pub(crate) fn row_major<S, D, T>(array: &ArrayBase<S, D>) -> Cow<'_, [T]>
where
    S: Data<Elem = T>,
    D: Dimension,
    T: Clone,
{
    match array.as_slice() {
        Some(slice) => Cow::Borrowed(slice),
        None => Cow::Owned(array.iter().cloned().collect()),
    }
}

/// Run `f` on the row-major contents of `array`, writing any changes back.
pub(crate) fn with_row_major_mut<S, D, T, R>(
    array: &mut ArrayBase<S, D>,
    f: impl FnOnce(&mut [T]) -> R,
) -> R
where
    S: DataMut<Elem = T>,
    D: Dimension,
    T: Clone,
{
    if let Some(slice) = array.as_slice_mut() {
        return f(slice);
    }

    let mut flat: Vec<T> = array.iter().cloned().collect();
    let result = f(&mut flat);
    for (dst, src) in array.iter_mut().zip(flat) {
        *dst = src;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    #[test]
    fn test_row_major_borrows_standard_layout() {
        let a = arr2(&[[1, 2], [3, 4]]);
        assert!(matches!(row_major(&a), Cow::Borrowed(_)));
        assert_eq!(&*row_major(&a), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_row_major_copies_transposed() {
        let a = arr2(&[[1, 2], [3, 4]]);
        let t = a.t();
        assert!(matches!(row_major(&t), Cow::Owned(_)));
        assert_eq!(&*row_major(&t), &[1, 3, 2, 4]);
    }

    #[test]
    fn test_with_row_major_mut_writes_back() {
        let mut a = arr2(&[[1, 2], [3, 4]]);
        let mut t = a.view_mut().reversed_axes();
        with_row_major_mut(&mut t, |flat| {
            assert_eq!(flat, &[1, 3, 2, 4]);
            flat[1] = 30;
        });
        assert_eq!(a, arr2(&[[1, 2], [30, 4]]));
    }
}
