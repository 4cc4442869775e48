//! In-place sorting by value exchange.
//!
//! Both algorithms leave every link where it is and only move values
//! between nodes, so a [`Ptr`] keeps its position in the chain but may see a
//! different value afterwards.

use alloc::vec::Vec;

use crate::Comparable;
use crate::ListError;
use crate::Ptr;
use crate::Result;
use crate::SingleList;
use crate::SortMode;

impl<T: Comparable> SingleList<T> {
    /// Sorts the chain with selection sort.
    ///
    /// Each position, head first, receives the smallest (ascending) or
    /// largest (descending) value of the remainder. Equal values are never
    /// exchanged with each other.
    ///
    /// # Errors
    ///
    /// [`ListError::UnsupportedType`] as soon as two values cannot be
    /// ordered. The values are then in an unspecified order but none is lost.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::SingleList;
    /// use chain_list::SortMode;
    ///
    /// let mut list: SingleList<_> = [3, 2, 2, 1].into_iter().collect();
    /// list.select_sort(SortMode::Ascending).unwrap();
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 2, 3]);
    /// ```
    pub fn select_sort(&mut self, mode: SortMode) -> Result<()> {
        let result = self.select_sort_inner(mode);
        match &result {
            Ok(()) => log::debug!("selection sort of {} nodes ({mode:?}) done", self.len),
            Err(err) => log::warn!("selection sort aborted: {err}"),
        }
        result
    }

    /// Sorts the whole chain with a quicksort-style partition.
    ///
    /// # Errors
    ///
    /// [`ListError::UnsupportedType`] as soon as two values cannot be
    /// ordered. The values are then in an unspecified order but none is lost.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::SingleList;
    /// use chain_list::SortMode;
    ///
    /// let mut list: SingleList<_> = [20, 3, 2, 1, 0].into_iter().collect();
    /// list.quick_sort(SortMode::Ascending).unwrap();
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3, 20]);
    /// ```
    pub fn quick_sort(&mut self, mode: SortMode) -> Result<()> {
        self.quick_sort_range(self.head, self.terminator, mode)
    }

    /// Sorts the nodes from `start` up to, but not including, `end`.
    ///
    /// Pass [`terminator_ptr`] as `end` to sort through the last value.
    /// Nodes outside the range are not touched.
    ///
    /// Each pass takes the first value of its range as the key, moves every
    /// value that belongs in front of the key to a boundary that advances
    /// behind the key, then drops the key at the boundary. The two sides of
    /// the boundary are queued as new ranges on an explicit stack, so long
    /// or already-sorted chains do not grow the call stack.
    ///
    /// # Errors
    ///
    /// - [`ListError::InvalidChain`] if `start` is not a live node or `end`
    ///   cannot be reached from `start`. Nothing is moved in that case.
    /// - [`ListError::UnsupportedType`] as soon as two values cannot be
    ///   ordered. The values are then in an unspecified order but none is
    ///   lost.
    ///
    /// [`terminator_ptr`]: SingleList::terminator_ptr
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::SingleList;
    /// use chain_list::SortMode;
    ///
    /// let mut list: SingleList<_> = [5, 1, 4, 9, 0].into_iter().collect();
    /// let end = list.ptr_at(3).unwrap();
    /// list.quick_sort_range(list.head_ptr(), end, SortMode::Descending).unwrap();
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [5, 4, 1, 9, 0]);
    /// ```
    pub fn quick_sort_range(&mut self, start: Ptr, end: Ptr, mode: SortMode) -> Result<()> {
        self.check_range(start, end)?;
        let result = self.quick_sort_inner(start, end, mode);
        match &result {
            Ok(partitions) => log::debug!(
                "quick sort ({mode:?}) from {start:?} to {end:?} done in {partitions} partitions"
            ),
            Err(err) => log::warn!("quick sort aborted: {err}"),
        }
        result.map(|_| ())
    }

    fn select_sort_inner(&mut self, mode: SortMode) -> Result<()> {
        let mut current = self.head;
        while !self.nodes.is_terminator(current) {
            let mut chosen = current;
            let mut scan = self.nodes.links(current).next();
            while !self.nodes.is_terminator(scan) {
                let ordering = self.nodes.data(scan).compare(self.nodes.data(chosen))?;
                if mode.goes_before(ordering) {
                    chosen = scan;
                }
                scan = self.nodes.links(scan).next();
            }
            self.nodes.swap_values(current, chosen);
            current = self.nodes.links(current).next();
        }
        Ok(())
    }

    /// Returns the number of partitions performed.
    fn quick_sort_inner(&mut self, start: Ptr, end: Ptr, mode: SortMode) -> Result<usize> {
        let mut pending = Vec::new();
        pending.push((start, end));
        let mut partitions = 0;

        while let Some((low, high)) = pending.pop() {
            if low == high || self.nodes.is_terminator(low) {
                continue;
            }
            let after_low = self.nodes.links(low).next();
            if after_low == high || self.nodes.is_terminator(after_low) {
                continue;
            }

            let boundary = self.partition(low, high, mode)?;
            partitions += 1;
            log::trace!("partitioned {low:?}..{high:?} at {boundary:?}");

            pending.push((self.nodes.links(boundary).next(), high));
            pending.push((low, boundary));
        }
        Ok(partitions)
    }

    /// Partitions `[low, high)` around the value at `low` and returns the node
    /// the key ends up in.
    fn partition(&mut self, low: Ptr, high: Ptr, mode: SortMode) -> Result<Ptr> {
        let mut boundary = low;
        let mut scan = self.nodes.links(low).next();
        while scan != high && !self.nodes.is_terminator(scan) {
            let ordering = self.nodes.data(scan).compare(self.nodes.data(low))?;
            if mode.goes_before(ordering) {
                boundary = self.nodes.links(boundary).next();
                self.nodes.swap_values(boundary, scan);
            }
            scan = self.nodes.links(scan).next();
        }
        self.nodes.swap_values(low, boundary);
        Ok(boundary)
    }

    fn check_range(&self, start: Ptr, end: Ptr) -> Result<()> {
        self.check_live(start)?;
        let mut cursor = start;
        while cursor != end {
            if self.nodes.is_terminator(cursor) {
                return Err(ListError::InvalidChain(end));
            }
            cursor = self.nodes.links(cursor).next();
        }
        Ok(())
    }
}
