//! Growable array with an explicit capacity policy
//!
//! [`GrowableArray`] owns a [`FixedCapacityStore`] and tracks how many of its
//! leading slots are live. The store is replaced wholesale whenever the
//! capacity changes:
//!
//! - an append or insert into a full array multiplies the capacity by the
//!   policy's growth factor (2 by default), so `n` appends cost O(n) in total
//! - a removal that leaves the array less than a quarter full shrinks it to
//!   `max(len * 2, 10)`, but a store of 10 slots or fewer is never shrunk
//!
//! # Time Complexity
//!
//! | Operation   | Complexity       |
//! |-------------|------------------|
//! | `get`/`set` | O(1)             |
//! | `append`    | O(1) amortized   |
//! | `insert_at` | O(n)             |
//! | `remove_at` | O(n)             |
//! | `resize`    | O(n)             |
//! | `slice`     | O(count)         |
//!
//! # Example
//!
//! ```rust
//! use rust_growable_heaps::dynamic_array::GrowableArray;
//!
//! let mut array = GrowableArray::new();
//! for value in 1..=5 {
//!     array.append(value);
//! }
//! assert_eq!(array.len(), 5);
//! assert_eq!(array.capacity(), 8);
//!
//! array.insert_at(0, 0).unwrap();
//! assert_eq!(array.get(0), Ok(&0));
//! assert_eq!(array.remove_at(5), Ok(5));
//!
//! let evens = array.filter(|v| v % 2 == 0);
//! assert_eq!(evens.to_string(), "DYN_ARR Size/Cap: 3/4 [0, 2, 4]");
//! ```

use std::fmt;

use tracing::debug;

use crate::policy::GrowthPolicy;
use crate::store::FixedCapacityStore;
use crate::traits::CollectionError;

/// A growable array backed by a fixed-capacity store
///
/// Every container returned by [`slice`](Self::slice), [`map`](Self::map),
/// [`filter`](Self::filter) or `clone` owns its own store; mutating it never
/// affects the source and vice versa.
#[derive(Clone)]
pub struct GrowableArray<T> {
    /// Number of live elements, all stored in slots `[0, size)`
    size: usize,
    store: FixedCapacityStore<T>,
    policy: GrowthPolicy,
}

impl<T> GrowableArray<T> {
    /// Creates an empty array with the default [`GrowthPolicy`]
    pub fn new() -> Self {
        Self::from_policy(GrowthPolicy::default())
    }

    /// Creates an empty array with a custom capacity policy
    ///
    /// # Errors
    /// `InvalidPolicy` if [`GrowthPolicy::validate`] rejects `policy`.
    pub fn with_policy(policy: GrowthPolicy) -> Result<Self, CollectionError> {
        policy.validate()?;
        Ok(Self::from_policy(policy))
    }

    fn from_policy(policy: GrowthPolicy) -> Self {
        Self {
            size: 0,
            store: FixedCapacityStore::new(policy.initial_capacity),
            policy,
        }
    }

    /// An empty array sharing this array's (already validated) policy
    pub(crate) fn empty_like<U>(&self) -> GrowableArray<U> {
        GrowableArray::from_policy(self.policy)
    }

    /// Returns the capacity policy
    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// Returns the number of live elements
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns the number of allocated slots
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Returns true if the array holds no elements
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    fn out_of_bounds(&self, index: usize) -> CollectionError {
        CollectionError::IndexOutOfBounds {
            index,
            len: self.size,
        }
    }

    /// Returns a reference to the element at `index`
    ///
    /// # Errors
    /// `IndexOutOfBounds` unless `index < len()`.
    pub fn get(&self, index: usize) -> Result<&T, CollectionError> {
        if index >= self.size {
            return Err(self.out_of_bounds(index));
        }
        self.store
            .slot(index)
            .ok_or(CollectionError::IndexOutOfBounds {
                index,
                len: self.size,
            })
    }

    /// Returns a mutable reference to the element at `index`
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, CollectionError> {
        let len = self.size;
        if index >= len {
            return Err(self.out_of_bounds(index));
        }
        self.store
            .slot_mut(index)
            .ok_or(CollectionError::IndexOutOfBounds { index, len })
    }

    /// Overwrites the element at `index`
    ///
    /// # Errors
    /// `IndexOutOfBounds` unless `index < len()`.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), CollectionError> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Swaps the elements at `a` and `b`
    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), CollectionError> {
        for index in [a, b] {
            if index >= self.size {
                return Err(self.out_of_bounds(index));
            }
        }
        self.store.swap_slots(a, b);
        Ok(())
    }

    /// Swap for indices the caller has already bounded by `len()`
    pub(crate) fn swap_live(&mut self, a: usize, b: usize) {
        debug_assert!(a < self.size && b < self.size);
        self.store.swap_slots(a, b);
    }

    /// Replaces the backing store with one of `new_capacity` slots
    ///
    /// The live elements keep their positions. A request for zero slots or for
    /// fewer slots than `len()` is ignored.
    pub fn resize(&mut self, new_capacity: usize) {
        if new_capacity == 0 || new_capacity < self.size {
            debug!(
                requested = new_capacity,
                len = self.size,
                "ignoring resize below the live length"
            );
            return;
        }
        debug!(
            from = self.store.capacity(),
            to = new_capacity,
            len = self.size,
            "resizing backing store"
        );
        let old = std::mem::replace(&mut self.store, FixedCapacityStore::new(0));
        self.store = old.transfer(self.size, new_capacity);
    }

    fn grow_if_full(&mut self) {
        if self.size == self.store.capacity() {
            self.resize(self.policy.grown(self.store.capacity()));
        }
    }

    /// Appends `value` after the last element, growing the store when full
    ///
    /// # Time Complexity
    /// O(1) amortized: each doubling is paid for by the appends since the last one.
    pub fn append(&mut self, value: T) {
        self.grow_if_full();
        let previous = self.store.set(self.size, value);
        debug_assert!(matches!(previous, Ok(None)), "append past the live prefix");
        self.size += 1;
    }

    /// Inserts `value` at `index`, shifting `[index, len)` one slot up
    ///
    /// `index == len()` appends.
    ///
    /// # Errors
    /// `IndexOutOfBounds` if `index > len()`; nothing is shifted or grown.
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<(), CollectionError> {
        if index > self.size {
            return Err(self.out_of_bounds(index));
        }
        self.grow_if_full();
        self.store.shift_up(index, self.size);
        self.store.set(index, value)?;
        self.size += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting `(index, len)` down
    ///
    /// Afterwards the store shrinks if the policy says it is too sparse.
    ///
    /// # Errors
    /// `IndexOutOfBounds` unless `index < len()`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, CollectionError> {
        if index >= self.size {
            return Err(self.out_of_bounds(index));
        }
        let removed = self.store.take(index);
        self.store.shift_down(index, self.size);
        self.size -= 1;

        if let Some(target) = self.policy.shrunk(self.size, self.store.capacity()) {
            self.resize(target);
        }

        removed.ok_or(CollectionError::IndexOutOfBounds {
            index,
            len: self.size + 1,
        })
    }

    /// Drops every element and returns to the policy's initial capacity
    pub fn clear(&mut self) {
        self.size = 0;
        self.store = FixedCapacityStore::new(self.policy.initial_capacity);
    }

    /// Returns a lazy iterator over the live elements, in index order
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            array: self,
            index: 0,
        }
    }

    /// Returns an iterator yielding mutable references to the live elements
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            inner: self.store.live_mut(self.size).iter_mut().flatten(),
        }
    }

    /// Returns a new array holding `f` applied to every element, in order
    pub fn map<U, F>(&self, mut f: F) -> GrowableArray<U>
    where
        F: FnMut(&T) -> U,
    {
        let mut mapped = self.empty_like();
        for value in self.iter() {
            mapped.append(f(value));
        }
        mapped
    }
}

impl<T: Clone> GrowableArray<T> {
    /// Returns a copy of the `count` elements starting at `start`
    ///
    /// # Errors
    /// `IndexOutOfBounds` unless `start < len()` and `start + count <= len()`.
    /// A zero `count` still requires a valid `start`.
    pub fn slice(&self, start: usize, count: usize) -> Result<Self, CollectionError> {
        if start >= self.size {
            return Err(self.out_of_bounds(start));
        }
        if self.size - start < count {
            return Err(self.out_of_bounds(start.saturating_add(count)));
        }
        let mut sliced = self.empty_like();
        for value in self.iter().skip(start).take(count) {
            sliced.append(value.clone());
        }
        Ok(sliced)
    }

    /// Returns a new array with the elements for which `predicate` holds
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let mut kept = self.empty_like();
        for value in self.iter() {
            if predicate(value) {
                kept.append(value.clone());
            }
        }
        kept
    }

    /// Folds the elements left to right
    ///
    /// - empty array: returns `initial` untouched
    /// - `initial` is `None`: the first element seeds the fold and `f` is
    ///   applied from the second element on; a single element is returned as is
    /// - `initial` is `Some(seed)`: the fold starts with `f(seed, first)`
    ///
    /// ```rust
    /// use rust_growable_heaps::dynamic_array::GrowableArray;
    ///
    /// let array: GrowableArray<i32> = vec![1, 2, 3].into();
    /// assert_eq!(array.reduce(|acc, v| acc * 10 + v, None), Some(123));
    /// assert_eq!(array.reduce(|acc, v| acc * 10 + v, Some(9)), Some(9123));
    /// assert_eq!(GrowableArray::new().reduce(|a: i32, b| a + b, Some(7)), Some(7));
    /// ```
    pub fn reduce<F>(&self, mut f: F, initial: Option<T>) -> Option<T>
    where
        F: FnMut(T, &T) -> T,
    {
        let mut values = self.iter();
        let seed = match initial {
            Some(seed) => seed,
            None => values.next()?.clone(),
        };
        Some(values.fold(seed, |acc, value| f(acc, value)))
    }
}

impl<T> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for GrowableArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for GrowableArray<T> {}

impl<T: fmt::Debug> fmt::Debug for GrowableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for GrowableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DYN_ARR Size/Cap: {}/{} [", self.size, self.capacity())?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

impl<T> FromIterator<T> for GrowableArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T> Extend<T> for GrowableArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T> From<Vec<T>> for GrowableArray<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

/// Borrowing iterator over a [`GrowableArray`]
///
/// Reads through the array by index on every step, so a clone of the
/// iterator restarts from wherever the original was.
pub struct Iter<'a, T> {
    array: &'a GrowableArray<T>,
    index: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            array: self.array,
            index: self.index,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.array.get(self.index).ok()?;
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.array.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Mutable iterator over a [`GrowableArray`]
pub struct IterMut<'a, T> {
    inner: std::iter::Flatten<std::slice::IterMut<'a, Option<T>>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

/// Owning iterator over a [`GrowableArray`]
pub struct IntoIter<T> {
    inner: std::iter::Flatten<std::vec::IntoIter<Option<T>>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<T> IntoIterator for GrowableArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        // Slots past `size` are always empty, so flattening yields exactly the live prefix
        IntoIter {
            inner: self.store.into_slots().into_iter().flatten(),
        }
    }
}

impl<'a, T> IntoIterator for &'a GrowableArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GrowableArray<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
