//! Singly linked list implementation.
//!
//! This module provides the core [`SingleList`] type. Nodes live in an arena
//! and are addressed by [`Ptr`] handles; every chain, including the empty
//! one, ends in exactly one terminator node that carries no value.
//!
//! # Examples
//!
//! ```
//! use chain_list::single_list::SingleList;
//!
//! let mut list = SingleList::new();
//! list.add_node(10);
//! list.add_node(30);
//! list.insert_after(0, 20).unwrap();
//!
//! let values: Vec<_> = list.iter().copied().collect();
//! assert_eq!(values, [10, 20, 30]);
//! ```

mod iter;
mod sort;

use core::fmt;

pub use iter::IntoIter;
pub use iter::Iter;

use crate::ListError;
use crate::Ptr;
use crate::Result;
use crate::arena::Arena;

/// A singly linked list closed by a terminator node.
///
/// The head handle is stable: it only changes when the chain is
/// [reversed](SingleList::reverse) or [cleared](SingleList::clear). Appending
/// to an empty list fills the terminator in place, and deleting position 0
/// pulls the successor's contents into the head node.
///
/// # Examples
///
/// ```
/// use chain_list::SingleList;
///
/// let mut list: SingleList<i32> = SingleList::new();
/// assert!(list.is_empty());
///
/// list.extend([3, 1, 2]);
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.find(1), Ok(&1));
/// ```
#[derive(Clone)]
pub struct SingleList<T> {
    head: Ptr,
    terminator: Ptr,
    len: usize,
    nodes: Arena<T>,
}

impl<T> Default for SingleList<T> {
    fn default() -> Self {
        SingleList::with_capacity(0)
    }
}

impl<T> SingleList<T> {
    /// Creates an empty list: a single terminator node.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::SingleList;
    ///
    /// let list: SingleList<&str> = SingleList::new();
    /// assert!(list.is_empty());
    /// assert_eq!(list.head_ptr(), list.terminator_ptr());
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with room for `capacity` values before the
    /// arena reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Arena::with_capacity(capacity.saturating_add(1));
        let terminator = nodes.alloc(None, Ptr::null());
        SingleList {
            head: terminator,
            terminator,
            len: 0,
            nodes,
        }
    }

    /// Returns `true` if the head is the terminator.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_terminator(self.head)
    }

    /// Returns the number of data-bearing nodes. The terminator is never
    /// counted.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Counts the data-bearing nodes reachable from `ptr`, stopping before
    /// the terminator.
    ///
    /// Any node of the chain can serve as the head of the sub-chain that
    /// follows it; the terminator itself has length 0.
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidChain`] if `ptr` is not a live node.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::SingleList;
    ///
    /// let mut list = SingleList::new();
    /// list.add_node('a');
    /// let b = list.add_node('b');
    /// list.add_node('c');
    ///
    /// assert_eq!(list.len_from(b), Ok(2));
    /// assert_eq!(list.len_from(list.terminator_ptr()), Ok(0));
    /// ```
    pub fn len_from(&self, ptr: Ptr) -> Result<usize> {
        self.check_live(ptr)?;
        let mut length = 0;
        let mut cursor = ptr;
        while !self.nodes.is_terminator(cursor) {
            length += 1;
            cursor = self.nodes.links(cursor).next();
        }
        Ok(length)
    }

    /// Handle of the first node. Equal to [`terminator_ptr`] when the list
    /// is empty.
    ///
    /// [`terminator_ptr`]: SingleList::terminator_ptr
    pub fn head_ptr(&self) -> Ptr {
        self.head
    }

    /// Handle of the terminator node closing the chain.
    pub fn terminator_ptr(&self) -> Ptr {
        self.terminator
    }

    /// Returns the value stored at `ptr`, or `None` for the terminator.
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidChain`] if `ptr` is not a live node.
    pub fn value(&self, ptr: Ptr) -> Result<Option<&T>> {
        self.check_live(ptr)?;
        Ok(self.nodes[ptr].as_ref())
    }

    /// Returns the handle linked after `ptr`, or `None` for the terminator.
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidChain`] if `ptr` is not a live node.
    pub fn next_ptr(&self, ptr: Ptr) -> Result<Option<Ptr>> {
        self.check_live(ptr)?;
        Ok(self.nodes.links(ptr).next().optional())
    }

    /// Appends `value` to the end of the chain and returns the handle of the
    /// node now holding it.
    ///
    /// The current terminator receives the value and a fresh terminator is
    /// linked after it, so the returned handle is the former terminator.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::SingleList;
    ///
    /// let mut list = SingleList::new();
    /// let old_terminator = list.terminator_ptr();
    /// let ptr = list.add_node(5);
    ///
    /// assert_eq!(ptr, old_terminator);
    /// assert_ne!(list.terminator_ptr(), old_terminator);
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn add_node(&mut self, value: T) -> Ptr {
        let filled = self.terminator;
        let terminator = self.nodes.alloc(None, Ptr::null());
        let slot = self.nodes.links_mut(filled);
        *slot.value_mut() = Some(value);
        *slot.next_mut() = terminator;
        self.terminator = terminator;
        self.len += 1;
        log::trace!("appended node {filled:?}, length now {}", self.len);
        filled
    }

    /// Returns a reference to the value at position `pos`.
    ///
    /// # Errors
    ///
    /// [`ListError::PositionOutOfRange`] if `pos >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::ListError;
    /// use chain_list::SingleList;
    ///
    /// let list: SingleList<_> = ["x", "y"].into_iter().collect();
    /// assert_eq!(list.find(1), Ok(&"y"));
    /// assert_eq!(list.find(2), Err(ListError::PositionOutOfRange { pos: 2, len: 2 }));
    /// ```
    pub fn find(&self, pos: usize) -> Result<&T> {
        let ptr = self.ptr_at(pos)?;
        Ok(self.nodes.data(ptr))
    }

    /// Returns a mutable reference to the value at position `pos`.
    ///
    /// # Errors
    ///
    /// [`ListError::PositionOutOfRange`] if `pos >= len()`.
    pub fn find_mut(&mut self, pos: usize) -> Result<&mut T> {
        let ptr = self.ptr_at(pos)?;
        let len = self.len;
        self.nodes[ptr]
            .as_mut()
            .ok_or(ListError::PositionOutOfRange { pos, len })
    }

    /// Returns the handle of the node at position `pos`.
    ///
    /// # Errors
    ///
    /// [`ListError::PositionOutOfRange`] if `pos >= len()`.
    pub fn ptr_at(&self, pos: usize) -> Result<Ptr> {
        self.check_position(pos)?;
        Ok(self.walk(pos))
    }

    /// Returns the position of the first value equal to `value`, or `None`
    /// if no node holds such a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::SingleList;
    ///
    /// let list: SingleList<_> = [4, 8, 8].into_iter().collect();
    /// assert_eq!(list.find_matched_value(&8), Some(1));
    /// assert_eq!(list.find_matched_value(&5), None);
    /// ```
    pub fn find_matched_value(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|candidate| candidate == value)
    }

    /// Splices a node holding `value` in directly after position `pos` and
    /// returns its handle. The new value ends up at position `pos + 1`.
    ///
    /// # Errors
    ///
    /// [`ListError::PositionOutOfRange`] if `pos >= len()`. The chain is left
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::SingleList;
    ///
    /// let mut list: SingleList<_> = (0..5).collect();
    /// list.insert_after(3, 20).unwrap();
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3, 20, 4]);
    /// ```
    pub fn insert_after(&mut self, pos: usize, value: T) -> Result<Ptr> {
        let anchor = self.ptr_at(pos)?;
        let inserted = self.splice_after(anchor, value);
        log::trace!("inserted node {inserted:?} after position {pos}");
        Ok(inserted)
    }

    /// Splices a node holding `value` in front of position `pos` and returns
    /// the handle of the node holding it. The new value ends up at position
    /// `pos`; the previous occupant moves to `pos + 1`.
    ///
    /// Only positions that have a successor are accepted, that is
    /// `pos + 1 < len()`. Inserting in front of the head keeps the head
    /// handle stable: the head node takes the new value and its old contents
    /// move into a fresh node right behind it.
    ///
    /// # Errors
    ///
    /// [`ListError::PositionOutOfRange`] if `pos + 1 >= len()`. The chain is
    /// left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::SingleList;
    ///
    /// let mut list: SingleList<_> = ['a', 'c', 'd'].into_iter().collect();
    /// list.insert_before(1, 'b').unwrap();
    /// assert_eq!(list.iter().collect::<String>(), "abcd");
    /// assert!(list.insert_before(3, 'x').is_err());
    /// ```
    pub fn insert_before(&mut self, pos: usize, value: T) -> Result<Ptr> {
        if pos.checked_add(1).is_none_or(|next| next >= self.len) {
            return Err(ListError::PositionOutOfRange { pos, len: self.len });
        }

        let inserted = if pos == 0 {
            let head = self.head;
            let displaced = self.nodes[head].replace(value);
            let next = self.nodes.links(head).next();
            let moved = self.nodes.alloc(displaced, next);
            *self.nodes.links_mut(head).next_mut() = moved;
            self.len += 1;
            head
        } else {
            let anchor = self.walk(pos - 1);
            self.splice_after(anchor, value)
        };
        log::trace!("inserted node {inserted:?} before position {pos}");
        Ok(inserted)
    }

    /// Unlinks the node at position `pos` and returns its value.
    ///
    /// Deleting the head keeps the head handle stable. When it is the only
    /// data node, the head becomes the terminator and the list is empty.
    ///
    /// # Errors
    ///
    /// [`ListError::PositionOutOfRange`] if `pos >= len()`. The chain is left
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::SingleList;
    ///
    /// let mut list: SingleList<_> = [1, 2, 3].into_iter().collect();
    /// assert_eq!(list.delete(2), Ok(3));
    /// assert!(list.find(2).is_err());
    ///
    /// let head = list.head_ptr();
    /// assert_eq!(list.delete(0), Ok(1));
    /// assert_eq!(list.head_ptr(), head);
    /// assert_eq!(list.find(0), Ok(&2));
    /// ```
    pub fn delete(&mut self, pos: usize) -> Result<T> {
        self.check_position(pos)?;

        let removed = if pos == 0 {
            let head = self.head;
            let successor = self.nodes.links(head).next();
            let slot = self.nodes.free(successor);
            if self.terminator == successor {
                self.terminator = head;
            }
            *self.nodes.links_mut(head).next_mut() = slot.next();
            core::mem::replace(&mut self.nodes[head], slot.into_value())
        } else {
            let prev = self.walk(pos - 1);
            let target = self.nodes.links(prev).next();
            let slot = self.nodes.free(target);
            *self.nodes.links_mut(prev).next_mut() = slot.next();
            slot.into_value()
        };
        let len = self.len;
        self.len -= 1;
        log::trace!("deleted position {pos}, length now {}", self.len);

        removed.ok_or(ListError::PositionOutOfRange { pos, len })
    }

    /// Reverses the direction of every link and returns the new head handle.
    ///
    /// The former head becomes the last data node, still followed by the
    /// same terminator. Empty and single-node chains are left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::SingleList;
    ///
    /// let mut list: SingleList<_> = [1, 2, 3].into_iter().collect();
    /// let old_head = list.head_ptr();
    /// let new_head = list.reverse();
    ///
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
    /// assert_eq!(list.value(new_head), Ok(Some(&3)));
    /// assert_eq!(list.next_ptr(old_head), Ok(Some(list.terminator_ptr())));
    /// ```
    pub fn reverse(&mut self) -> Ptr {
        if self.len <= 1 {
            return self.head;
        }

        let mut prev = self.terminator;
        let mut cursor = self.head;
        while cursor != self.terminator {
            let slot = self.nodes.links_mut(cursor);
            let next = core::mem::replace(slot.next_mut(), prev);
            prev = cursor;
            cursor = next;
        }
        self.head = prev;
        log::debug!("reversed chain of {} nodes, new head {:?}", self.len, self.head);
        self.head
    }

    /// Removes every value, leaving a fresh empty chain.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.terminator = self.nodes.alloc(None, Ptr::null());
        self.head = self.terminator;
        self.len = 0;
    }

    /// Returns an iterator over the values from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            ptr: self.head,
            remaining: self.len,
            nodes: &self.nodes,
        }
    }

    /// Writes every value on its own line, head first.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::SingleList;
    ///
    /// let list: SingleList<_> = [20, 3, 0].into_iter().collect();
    /// let mut out = String::new();
    /// list.dump(&mut out).unwrap();
    /// assert_eq!(out, "20\n3\n0\n");
    /// ```
    pub fn dump<W: fmt::Write>(&self, out: &mut W) -> fmt::Result
    where
        T: fmt::Display,
    {
        for value in self.iter() {
            writeln!(out, "{value}")?;
        }
        Ok(())
    }

    fn splice_after(&mut self, anchor: Ptr, value: T) -> Ptr {
        let next = self.nodes.links(anchor).next();
        let inserted = self.nodes.alloc(Some(value), next);
        *self.nodes.links_mut(anchor).next_mut() = inserted;
        self.len += 1;
        inserted
    }

    fn walk(&self, pos: usize) -> Ptr {
        let mut cursor = self.head;
        for _ in 0..pos {
            cursor = self.nodes.links(cursor).next();
        }
        cursor
    }

    fn check_position(&self, pos: usize) -> Result<()> {
        if pos >= self.len {
            return Err(ListError::PositionOutOfRange { pos, len: self.len });
        }
        Ok(())
    }

    fn check_live(&self, ptr: Ptr) -> Result<()> {
        if self.nodes.is_occupied(ptr) {
            Ok(())
        } else {
            Err(ListError::InvalidChain(ptr))
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SingleList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for SingleList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SingleList<T> {}

impl<T> FromIterator<T> for SingleList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = SingleList::with_capacity(iter.size_hint().0);
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SingleList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add_node(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a SingleList<T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for SingleList<T> {
    type IntoIter = IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            ptr: self.head,
            remaining: self.len,
            nodes: self.nodes,
        }
    }
}
