use alloc::vec::Vec;

use super::handle::Handle;

/// Slot storage for tree nodes.
///
/// Nodes are never removed one at a time, so there is no free list: a slot is
/// only vacated by [`take`](Arena::take) while the owning tree is being drained,
/// and the arena is [`clear`](Arena::clear)ed right after.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn alloc(&mut self, element: T) -> Handle {
        // The index of the new slot must still fit in a handle.
        assert!(
            self.slots.len() <= Handle::MAX,
            "`Arena::alloc()` - arena is at maximum capacity ({})",
            Handle::MAX + 1
        );
        self.slots.push(Some(element));
        Handle::from_index(self.slots.len() - 1)
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        self.slots[handle.to_index()].as_ref().expect("`Arena::get()` - `handle` is invalid!")
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        self.slots[handle.to_index()].as_mut().expect("`Arena::get_mut()` - `handle` is invalid!")
    }

    pub(crate) fn take(&mut self, handle: Handle) -> T {
        self.slots[handle.to_index()].take().expect("`Arena::take()` - `handle` is invalid!")
    }

    /// Mutable access to every occupied slot, indexed like the handles.
    pub(crate) fn slots_mut(&mut self) -> impl Iterator<Item = Option<&mut T>> {
        self.slots.iter_mut().map(Option::as_mut)
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn arena_capacity() {
        let arena: Arena<u32> = Arena::with_capacity(10);
        assert!(arena.capacity() >= 10);
        assert_eq!(arena.len(), 0);
    }

    #[test]
    #[should_panic(expected = "`Arena::get()` - `handle` is invalid!")]
    fn taken_slot_is_invalid() {
        let mut arena = Arena::new();
        let handle = arena.alloc(7_u32);
        assert_eq!(arena.take(handle), 7);
        let _ = arena.get(handle);
    }

    #[test]
    #[should_panic(expected = "`Arena::alloc()` - arena is at maximum capacity")]
    fn alloc_past_handle_range_panics() {
        let mut arena = Arena::new();
        for value in 0..=Handle::MAX + 1 {
            arena.alloc(value);
        }
    }

    proptest! {
        #[test]
        fn handles_address_their_elements(values in prop::collection::vec(any::<u32>(), 0..256), edits in prop::collection::vec((any::<usize>(), any::<u32>()), 0..64)) {
            let mut arena = Arena::new();
            let mut model: Vec<(Handle, u32)> = values.iter().map(|&value| (arena.alloc(value), value)).collect();

            for (which, value) in edits {
                if model.is_empty() {
                    break;
                }
                let index = which % model.len();
                *arena.get_mut(model[index].0) = value;
                model[index].1 = value;
            }

            prop_assert_eq!(arena.len(), model.len());
            for &(handle, value) in &model {
                prop_assert_eq!(*arena.get(handle), value);
            }

            let occupied = arena.slots_mut().filter(Option::is_some).count();
            prop_assert_eq!(occupied, model.len());

            arena.clear();
            prop_assert_eq!(arena.len(), 0);
        }
    }
}
