//! Node arena with stable indices.
//!
//! The arena owns every node in a skip list and addresses them by index
//! instead of pointer, so unlinking a node can never leave a dangling
//! reference behind. Slots freed by removal are reused by later insertions;
//! an index stays valid until its slot is explicitly removed.

use core::marker::PhantomData;

use slab::Slab;

use crate::Index;

/// Growable slot storage with stable indices.
///
/// A thin layer over [`slab::Slab`] that hands out indices of the caller's
/// chosen [`Index`] type. Capacity given at construction is a pre-allocation
/// hint, not a cap: insertion past it grows the underlying slab.
///
/// # Example
///
/// ```
/// use skipdict::Arena;
///
/// let mut arena: Arena<&str> = Arena::with_capacity(8);
/// let idx = arena.insert("node");
/// assert_eq!(arena.get(idx), Some(&"node"));
/// assert_eq!(arena.remove(idx), Some("node"));
/// assert_eq!(arena.get(idx), None);
/// ```
#[derive(Debug)]
pub struct Arena<T, Idx: Index = u32> {
    slots: Slab<T>,
    _marker: PhantomData<Idx>,
}

impl<T, Idx: Index> Arena<T, Idx> {
    /// Creates an arena with room for `capacity` slots before regrowing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Slab::with_capacity(capacity),
            _marker: PhantomData,
        }
    }

    /// Inserts a value, returning its stable index.
    ///
    /// # Panics
    ///
    /// Panics if the assigned slot number cannot be represented in `Idx`
    /// (`Idx::NONE` is reserved and never handed out).
    pub fn insert(&mut self, value: T) -> Idx {
        let slot = self.slots.insert(value);
        assert!(
            slot < Idx::NONE.as_usize(),
            "arena exceeds index type maximum"
        );
        Idx::from_usize(slot)
    }

    /// Removes and returns the value at `index`, if the slot is occupied.
    ///
    /// The slot becomes available for reuse by a later insert.
    pub fn remove(&mut self, index: Idx) -> Option<T> {
        self.slots.try_remove(index.as_usize())
    }

    /// Returns a reference to the value at `index`, if the slot is occupied.
    #[inline]
    pub fn get(&self, index: Idx) -> Option<&T> {
        self.slots.get(index.as_usize())
    }

    /// Returns a mutable reference to the value at `index`, if the slot is occupied.
    #[inline]
    pub fn get_mut(&mut self, index: Idx) -> Option<&mut T> {
        self.slots.get_mut(index.as_usize())
    }

    /// Returns a reference without checking occupancy.
    ///
    /// # Safety
    ///
    /// `index` must refer to an occupied slot.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: Idx) -> &T {
        unsafe { self.slots.get_unchecked(index.as_usize()) }
    }

    /// Returns a mutable reference without checking occupancy.
    ///
    /// # Safety
    ///
    /// `index` must refer to an occupied slot.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: Idx) -> &mut T {
        unsafe { self.slots.get_unchecked_mut(index.as_usize()) }
    }

    /// Returns the number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no slots are occupied.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the number of slots the arena can hold without regrowing.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }
}
