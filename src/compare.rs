//! The ordering predicate consumed by the sort engine.

use alloc::string::String;
use core::cmp::Ordering;

use crate::Result;

/// Sort direction used by [`SingleList::select_sort`] and
/// [`SingleList::quick_sort`].
///
/// [`SingleList::select_sort`]: crate::SingleList::select_sort
/// [`SingleList::quick_sort`]: crate::SingleList::quick_sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortMode {
    /// Smallest value first.
    #[default]
    Ascending,
    /// Largest value first.
    Descending,
}

impl SortMode {
    /// Returns `true` if a value ordered `ordering` against another belongs
    /// strictly in front of it under this mode.
    pub(crate) fn goes_before(self, ordering: Ordering) -> bool {
        match self {
            SortMode::Ascending => ordering == Ordering::Less,
            SortMode::Descending => ordering == Ordering::Greater,
        }
    }
}

/// A fallible total order.
///
/// This is the single ordering authority of the crate. Implementations must
/// be free of side effects and return the same answer for the same pair of
/// values every time. Values that cannot be ordered against each other
/// report [`ListError::UnsupportedType`](crate::ListError::UnsupportedType).
///
/// The primitive integers, `f32`/`f64` (by IEEE total order), `str` and
/// `String` never fail. [`Value`](crate::Value) fails on mixed or
/// unorderable kinds.
///
/// # Examples
///
/// ```
/// use core::cmp::Ordering;
///
/// use chain_list::Comparable;
/// use chain_list::Value;
///
/// assert_eq!(3u8.compare(&7), Ok(Ordering::Less));
/// assert_eq!("pear".compare("apple"), Ok(Ordering::Greater));
/// assert!(Value::from(1).compare(&Value::from("1")).is_err());
/// ```
pub trait Comparable {
    /// Orders `self` against `other`.
    fn compare(&self, other: &Self) -> Result<Ordering>;
}

macro_rules! impl_comparable_ord {
    ($($t:ty),* $(,)?) => {
        $(
            impl Comparable for $t {
                #[inline]
                fn compare(&self, other: &Self) -> Result<Ordering> {
                    Ok(Ord::cmp(self, other))
                }
            }
        )*
    };
}

impl_comparable_ord!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, str, String,
);

impl Comparable for f32 {
    #[inline]
    fn compare(&self, other: &Self) -> Result<Ordering> {
        Ok(self.total_cmp(other))
    }
}

impl Comparable for f64 {
    #[inline]
    fn compare(&self, other: &Self) -> Result<Ordering> {
        Ok(self.total_cmp(other))
    }
}

impl<T: Comparable + ?Sized> Comparable for &T {
    #[inline]
    fn compare(&self, other: &Self) -> Result<Ordering> {
        (**self).compare(*other)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn test_goes_before() {
        assert!(SortMode::Ascending.goes_before(Ordering::Less));
        assert!(!SortMode::Ascending.goes_before(Ordering::Equal));
        assert!(!SortMode::Ascending.goes_before(Ordering::Greater));
        assert!(SortMode::Descending.goes_before(Ordering::Greater));
        assert!(!SortMode::Descending.goes_before(Ordering::Equal));
        assert!(!SortMode::Descending.goes_before(Ordering::Less));
    }

    #[test]
    fn test_default_mode() {
        assert_eq!(SortMode::default(), SortMode::Ascending);
    }

    #[test]
    fn test_integers() {
        assert_eq!((-4i64).compare(&2), Ok(Ordering::Less));
        assert_eq!(9u16.compare(&9), Ok(Ordering::Equal));
        assert_eq!(u128::MAX.compare(&0), Ok(Ordering::Greater));
    }

    #[test]
    fn test_floats_are_totally_ordered() {
        assert_eq!(1.5f64.compare(&2.5), Ok(Ordering::Less));
        assert_eq!((-0.0f64).compare(&0.0), Ok(Ordering::Less));
        assert_eq!(f64::NAN.compare(&f64::INFINITY), Ok(Ordering::Greater));
        assert_eq!(f32::NAN.compare(&f32::NAN), Ok(Ordering::Equal));
    }

    #[test]
    fn test_strings_are_lexicographic() {
        assert_eq!("abc".compare("abd"), Ok(Ordering::Less));
        assert_eq!("b".to_string().compare(&"abc".to_string()), Ok(Ordering::Greater));
        assert_eq!((&"same").compare(&"same"), Ok(Ordering::Equal));
    }
}
