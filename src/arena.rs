use alloc::vec::Vec;
use core::ops::Index;
use core::ops::IndexMut;

use crate::Ptr;

#[cold]
#[inline(never)]
fn assert_free() -> ! {
    panic!("Attempted to access data of free slot");
}

#[cold]
#[inline(never)]
fn assert_data() -> ! {
    panic!("Attempted to read the value of a terminator node");
}

/// Contents of an occupied slot. `None` marks the terminator.
#[derive(Debug, Clone)]
enum NodeOrFree<T> {
    Free,
    Node(Option<T>),
}

#[derive(Debug, Clone)]
pub(crate) struct Slot<T> {
    next: Ptr,
    data: NodeOrFree<T>,
}

impl<T> Slot<T> {
    pub(crate) fn next(&self) -> Ptr {
        self.next
    }

    pub(crate) fn next_mut(&mut self) -> &mut Ptr {
        &mut self.next
    }

    pub(crate) fn value(&self) -> Option<&T> {
        match &self.data {
            NodeOrFree::Node(value) => value.as_ref(),
            NodeOrFree::Free => assert_free(),
        }
    }

    pub(crate) fn value_mut(&mut self) -> &mut Option<T> {
        match &mut self.data {
            NodeOrFree::Node(value) => value,
            NodeOrFree::Free => assert_free(),
        }
    }

    pub(crate) fn into_value(self) -> Option<T> {
        match self.data {
            NodeOrFree::Node(value) => value,
            NodeOrFree::Free => assert_free(),
        }
    }
}

/// Backing storage for every node of one chain.
///
/// Freed slots are threaded onto an intrusive free list through their `next`
/// field and handed out again by [`Arena::alloc`].
#[derive(Debug, Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free_head: Ptr,
}

impl<T> Arena<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Arena {
            slots: Vec::with_capacity(capacity),
            free_head: Ptr::null(),
        }
    }

    pub(crate) fn links(&self, ptr: Ptr) -> &Slot<T> {
        &self.slots[ptr.unchecked_get()]
    }

    pub(crate) fn links_mut(&mut self, ptr: Ptr) -> &mut Slot<T> {
        &mut self.slots[ptr.unchecked_get()]
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = Ptr::null();
    }

    pub(crate) fn alloc(&mut self, value: Option<T>, next: Ptr) -> Ptr {
        let ptr = self.free_head.or(Ptr::unchecked_from(self.slots.len()));
        let slot = Slot {
            next,
            data: NodeOrFree::Node(value),
        };
        if self.free_head.is_null() {
            self.slots.push(slot);
        } else {
            let old = core::mem::replace(&mut self.slots[ptr.unchecked_get()], slot);
            self.free_head = old.next;
        }
        ptr
    }

    pub(crate) fn is_occupied(&self, ptr: Ptr) -> bool {
        if ptr.is_null() {
            return false;
        }
        matches!(
            self.slots.get(ptr.unchecked_get()),
            Some(Slot {
                data: NodeOrFree::Node(_),
                ..
            })
        )
    }

    pub(crate) fn is_terminator(&self, ptr: Ptr) -> bool {
        self.links(ptr).value().is_none()
    }

    pub(crate) fn free(&mut self, ptr: Ptr) -> Slot<T> {
        assert!(self.is_occupied(ptr), "Pointer to free must be occupied");
        let result = core::mem::replace(
            &mut self.slots[ptr.unchecked_get()],
            Slot {
                next: self.free_head,
                data: NodeOrFree::Free,
            },
        );
        self.free_head = ptr;

        result
    }

    /// Reads the value of a data node. Panics on a terminator.
    pub(crate) fn data(&self, ptr: Ptr) -> &T {
        match self.links(ptr).value() {
            Some(value) => value,
            None => assert_data(),
        }
    }

    /// Exchanges the values of two nodes, leaving their links untouched.
    pub(crate) fn swap_values(&mut self, a: Ptr, b: Ptr) {
        if a == b {
            return;
        }
        let taken = self.links_mut(a).value_mut().take();
        let displaced = core::mem::replace(self.links_mut(b).value_mut(), taken);
        *self.links_mut(a).value_mut() = displaced;
    }
}

impl<T> Index<Ptr> for Arena<T> {
    type Output = Option<T>;

    fn index(&self, index: Ptr) -> &Self::Output {
        match &self.slots[index.unchecked_get()].data {
            NodeOrFree::Node(value) => value,
            NodeOrFree::Free => assert_free(),
        }
    }
}

impl<T> IndexMut<Ptr> for Arena<T> {
    fn index_mut(&mut self, index: Ptr) -> &mut Self::Output {
        self.slots[index.unchecked_get()].value_mut()
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::String;
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn test_ptr_null() {
        let null_ptr = Ptr::null();
        assert!(null_ptr.is_null());
        assert_eq!(null_ptr.optional(), None);
    }

    #[test]
    fn test_ptr_non_null() {
        let ptr = Ptr::unchecked_from(42);
        assert!(!ptr.is_null());
        assert_eq!(ptr.optional(), Some(ptr));
        assert_eq!(ptr.unchecked_get(), 42);
    }

    #[test]
    fn test_ptr_or() {
        let null_ptr = Ptr::null();
        let some_ptr = Ptr::unchecked_from(10);
        let other_ptr = Ptr::unchecked_from(20);

        assert_eq!(null_ptr.or(some_ptr), some_ptr);
        assert_eq!(some_ptr.or(other_ptr), some_ptr);
    }

    #[test]
    fn test_ptr_debug() {
        assert_eq!(format!("{:?}", Ptr::null()), "Ptr(null)");
        assert_eq!(format!("{:?}", Ptr::unchecked_from(42)), "Ptr(42)");
    }

    #[test]
    fn test_ptr_default_is_null() {
        let default_ptr: Ptr = Default::default();
        assert!(default_ptr.is_null());
    }

    #[test]
    fn test_alloc_terminator_and_data() {
        let mut arena: Arena<String> = Arena::with_capacity(4);
        let terminator = arena.alloc(None, Ptr::null());
        let data = arena.alloc(Some("one".to_string()), terminator);

        assert!(arena.is_terminator(terminator));
        assert!(!arena.is_terminator(data));
        assert_eq!(arena.links(data).next(), terminator);
        assert!(arena.links(terminator).next().is_null());
        assert_eq!(arena.data(data), "one");
    }

    #[test]
    fn test_free_and_reuse() {
        let mut arena = Arena::with_capacity(0);
        let ptr1 = arena.alloc(Some(1), Ptr::null());
        let ptr2 = arena.alloc(Some(2), Ptr::null());

        let slot = arena.free(ptr1);
        assert_eq!(slot.into_value(), Some(1));
        assert!(!arena.is_occupied(ptr1));
        assert!(arena.is_occupied(ptr2));

        let ptr3 = arena.alloc(Some(3), Ptr::null());
        assert_eq!(ptr3, ptr1);
        assert_eq!(arena[ptr3], Some(3));
    }

    #[test]
    fn test_free_list_is_lifo() {
        let mut arena = Arena::with_capacity(0);
        let a = arena.alloc(Some('a'), Ptr::null());
        let b = arena.alloc(Some('b'), Ptr::null());
        arena.free(a);
        arena.free(b);

        assert_eq!(arena.alloc(Some('c'), Ptr::null()), b);
        assert_eq!(arena.alloc(Some('d'), Ptr::null()), a);
        assert_eq!(arena.alloc(Some('e'), Ptr::null()), Ptr::unchecked_from(2));
    }

    #[test]
    fn test_swap_values_keeps_links() {
        let mut arena = Arena::with_capacity(0);
        let terminator = arena.alloc(None, Ptr::null());
        let b = arena.alloc(Some("b"), terminator);
        let a = arena.alloc(Some("a"), b);

        arena.swap_values(a, b);

        assert_eq!(arena[a], Some("b"));
        assert_eq!(arena[b], Some("a"));
        assert_eq!(arena.links(a).next(), b);
        assert_eq!(arena.links(b).next(), terminator);

        arena.swap_values(a, a);
        assert_eq!(arena[a], Some("b"));
    }

    #[test]
    fn test_index_mut() {
        let mut arena = Arena::with_capacity(0);
        let ptr = arena.alloc(Some(5), Ptr::null());
        arena[ptr] = Some(6);
        assert_eq!(arena.data(ptr), &6);
    }

    #[test]
    fn test_clear() {
        let mut arena = Arena::with_capacity(0);
        let ptr = arena.alloc(Some(1), Ptr::null());
        arena.free(ptr);
        arena.clear();

        assert!(arena.free_head.is_null());
        assert!(!arena.is_occupied(ptr));
    }

    #[test]
    fn test_is_occupied_out_of_bounds() {
        let arena: Arena<i32> = Arena::with_capacity(0);
        assert!(!arena.is_occupied(Ptr::unchecked_from(3)));
        assert!(!arena.is_occupied(Ptr::null()));
    }

    #[test]
    #[should_panic]
    fn test_index_free_slot() {
        let mut arena = Arena::with_capacity(0);
        let ptr = arena.alloc(Some(1), Ptr::null());
        arena.free(ptr);
        let _ = &arena[ptr];
    }

    #[test]
    #[should_panic]
    fn test_double_free() {
        let mut arena = Arena::with_capacity(0);
        let ptr = arena.alloc(Some(1), Ptr::null());
        arena.free(ptr);
        arena.free(ptr);
    }

    #[test]
    #[should_panic]
    fn test_data_of_terminator() {
        let mut arena: Arena<i32> = Arena::with_capacity(0);
        let ptr = arena.alloc(None, Ptr::null());
        let _ = arena.data(ptr);
    }

    #[test]
    fn test_niche_optimization() {
        use core::mem::size_of;
        assert_eq!(size_of::<Ptr>(), size_of::<u32>());
        assert_eq!(size_of::<Option<Ptr>>(), size_of::<Ptr>() * 2);
    }
}
