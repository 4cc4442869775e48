use core::iter::FusedIterator;

use crate::Ptr;
use crate::arena::Arena;

#[derive(Debug, Clone)]
/// An iterator over the values of a `SingleList`, head first.
///
/// This struct is created by the [`iter`] method on [`SingleList`]. See its
/// documentation for more.
///
/// [`iter`]: crate::SingleList::iter
/// [`SingleList`]: crate::SingleList
///
/// # Examples
///
/// ```
/// use chain_list::SingleList;
///
/// let list: SingleList<_> = [1, 2, 3].into_iter().collect();
/// let doubled: Vec<_> = list.iter().map(|v| v * 2).collect();
/// assert_eq!(doubled, [2, 4, 6]);
/// ```
pub struct Iter<'a, T> {
    pub(crate) ptr: Ptr,
    pub(crate) remaining: usize,
    pub(crate) nodes: &'a Arena<T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.nodes.links(self.ptr);
        let value = slot.value()?;
        self.ptr = slot.next();
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

#[derive(Debug)]
/// An owning iterator over the values of a `SingleList`, head first.
///
/// This struct is created by the [`into_iter`] method on [`SingleList`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
/// [`SingleList`]: crate::SingleList
///
/// # Examples
///
/// ```
/// use chain_list::SingleList;
///
/// let list: SingleList<_> = ["a".to_string(), "b".to_string()].into_iter().collect();
/// let owned: Vec<String> = list.into_iter().collect();
/// assert_eq!(owned, ["a", "b"]);
/// ```
pub struct IntoIter<T> {
    pub(crate) ptr: Ptr,
    pub(crate) remaining: usize,
    pub(crate) nodes: Arena<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.nodes.free(self.ptr);
        self.ptr = slot.next();
        self.remaining -= 1;
        slot.into_value()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
