#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

mod arena;
mod compare;
mod error;
pub mod single_list;
mod value;

extern crate alloc;

use core::num::NonZeroU32;

pub use compare::Comparable;
pub use compare::SortMode;
pub use error::ListError;
pub use error::Result;
pub use single_list::IntoIter;
pub use single_list::Iter;
pub use single_list::SingleList;
pub use value::Value;
pub use value::ValueKind;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
/// A handle identifying one node of a [`SingleList`].
///
/// Handles are cheap to copy and give direct access to a node without
/// walking the chain. A handle stays attached to the same node across
/// insertions, deletions elsewhere, reversal and sorting; sorting exchanges
/// *values* between nodes, so the value seen through a handle may change.
///
/// Handles are **non-generational**: once a node is removed its slot may be
/// re-used for a node created later.
///
/// # Examples
///
/// ```
/// use chain_list::SingleList;
///
/// let mut list = SingleList::new();
/// let first = list.add_node("a");
/// list.add_node("b");
///
/// assert_eq!(list.value(first), Ok(Some(&"a")));
/// assert_eq!(list.head_ptr(), first);
/// ```
pub struct Ptr(Option<NonZeroU32>);

impl core::fmt::Debug for Ptr {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.0 {
            Some(index) => write!(f, "Ptr({})", index.get() - 1),
            None => write!(f, "Ptr(null)"),
        }
    }
}

#[cold]
#[inline(never)]
fn assert_non_null() -> ! {
    panic!("Attempted to dereference a null node handle");
}

impl Ptr {
    pub(crate) const fn null() -> Self {
        Ptr(None)
    }

    pub(crate) fn is_null(self) -> bool {
        self.0.is_none()
    }

    pub(crate) fn optional(self) -> Option<Ptr> {
        if self.is_null() { None } else { Some(self) }
    }

    pub(crate) fn or(self, other: Ptr) -> Ptr {
        if self.is_null() { other } else { self }
    }

    pub(crate) fn unchecked_from(index: usize) -> Self {
        debug_assert!(
            index < u32::MAX as usize,
            "Index too large to fit in Ptr: {index}"
        );
        Ptr(NonZeroU32::new((index as u32).saturating_add(1)))
    }

    pub(crate) fn unchecked_get(self) -> usize {
        match self.0 {
            Some(index) => index.get() as usize - 1,
            None => assert_non_null(),
        }
    }
}
