//! Fixed-capacity slot storage
//!
//! [`FixedCapacityStore`] is the raw backing of a
//! [`GrowableArray`](crate::dynamic_array::GrowableArray): a boxed slice of
//! optional slots whose length is fixed at construction. Growing or shrinking
//! means building a new store and moving the live prefix across with
//! [`FixedCapacityStore::transfer`]; the old store is dropped.
//!
//! Empty slots hold `None`, so a store never needs `T: Default` and never
//! exposes uninitialized memory.

use crate::traits::CollectionError;

/// A fixed-length array of optional slots with bounds-checked access
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedCapacityStore<T> {
    slots: Box<[Option<T>]>,
}

impl<T> FixedCapacityStore<T> {
    /// Creates a store of `capacity` empty slots
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
        }
    }

    /// Returns the fixed number of slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the slot at `index`, `None` if it is empty
    ///
    /// # Errors
    /// `IndexOutOfBounds` when `index >= capacity`.
    pub fn get(&self, index: usize) -> Result<Option<&T>, CollectionError> {
        self.slots
            .get(index)
            .map(Option::as_ref)
            .ok_or(CollectionError::IndexOutOfBounds {
                index,
                len: self.slots.len(),
            })
    }

    /// Stores `value` at `index`, returning what the slot held before
    ///
    /// # Errors
    /// `IndexOutOfBounds` when `index >= capacity`; the store is unchanged.
    pub fn set(&mut self, index: usize, value: T) -> Result<Option<T>, CollectionError> {
        let len = self.slots.len();
        self.slots
            .get_mut(index)
            .map(|slot| slot.replace(value))
            .ok_or(CollectionError::IndexOutOfBounds { index, len })
    }

    /// Moves the first `live` slots into a new store of `capacity` slots
    ///
    /// Slots past `capacity` are dropped, so callers keep `live <= capacity`.
    pub(crate) fn transfer(self, live: usize, capacity: usize) -> Self {
        Self {
            slots: self
                .slots
                .into_vec()
                .into_iter()
                .take(live)
                .chain(std::iter::repeat_with(|| None))
                .take(capacity)
                .collect(),
        }
    }

    // Unchecked helpers below index the slice directly. Callers only pass
    // indices below the owning array's size, which never exceeds capacity.

    pub(crate) fn slot(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub(crate) fn slot_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    pub(crate) fn take(&mut self, index: usize) -> Option<T> {
        self.slots[index].take()
    }

    pub(crate) fn swap_slots(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
    }

    /// Shifts `[from, to)` one slot up; the slot at `to` must be empty
    /// and ends up at `from`
    pub(crate) fn shift_up(&mut self, from: usize, to: usize) {
        self.slots[from..=to].rotate_right(1);
    }

    /// Shifts `(from, to)` one slot down; the slot at `from` must be empty
    /// and ends up at `to - 1`
    pub(crate) fn shift_down(&mut self, from: usize, to: usize) {
        self.slots[from..to].rotate_left(1);
    }

    pub(crate) fn live_mut(&mut self, live: usize) -> &mut [Option<T>] {
        &mut self.slots[..live]
    }

    pub(crate) fn into_slots(self) -> Vec<Option<T>> {
        self.slots.into_vec()
    }
}
