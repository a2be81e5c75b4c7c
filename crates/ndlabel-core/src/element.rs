//! Element type traits
//!
//! The algorithms are written once, generic over the array element type.
//! [`Foreground`] answers the only question the labeler asks of an input
//! element (zero or not); [`LabelValue`] bundles what a label array needs.

use std::fmt::Debug;
use std::hash::Hash;

use num_traits::{FromPrimitive, PrimInt, Signed, ToPrimitive};

/// Element that can be tested for "non-zero"
pub trait Foreground: Copy {
    /// `true` for any non-zero value (`true` for booleans)
    fn is_foreground(&self) -> bool;
}

macro_rules! impl_foreground_int {
    ($($t:ty),*) => {
        $(
            impl Foreground for $t {
                #[inline]
                fn is_foreground(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_foreground_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Foreground for f32 {
    #[inline]
    fn is_foreground(&self) -> bool {
        *self != 0.0
    }
}

impl Foreground for f64 {
    #[inline]
    fn is_foreground(&self) -> bool {
        *self != 0.0
    }
}

impl Foreground for bool {
    #[inline]
    fn is_foreground(&self) -> bool {
        *self
    }
}

/// Fixed-width signed integer usable as a region label.
///
/// `0` is background; positive values are regions. Implemented for every
/// primitive signed integer.
pub trait LabelValue:
    PrimInt + Signed + FromPrimitive + ToPrimitive + Hash + Debug + Foreground + Send + Sync
{
}

impl<T> LabelValue for T where
    T: PrimInt + Signed + FromPrimitive + ToPrimitive + Hash + Debug + Foreground + Send + Sync
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foreground() {
        assert!(3u8.is_foreground());
        assert!(!0i64.is_foreground());
        assert!((-0.5f32).is_foreground());
        assert!(!0.0f64.is_foreground());
        assert!(true.is_foreground());
        assert!(!false.is_foreground());
    }

    fn max_label<L: LabelValue>() -> Option<usize> {
        L::max_value().to_usize()
    }

    #[test]
    fn test_label_value_bounds() {
        assert_eq!(max_label::<i8>(), Some(127));
        assert_eq!(max_label::<i16>(), Some(i16::MAX as usize));
        assert_eq!(i32::from_usize(5), Some(5));
        assert_eq!((-1i32).to_usize(), None);
    }
}
