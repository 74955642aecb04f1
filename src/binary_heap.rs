//! Binary min-heap layered on [`GrowableArray`]
//!
//! The heap keeps its elements in level order: the node at index `i` has
//! children at `2i + 1` and `2i + 2` and its parent at `(i - 1) / 2`. Because
//! the backing array has no gaps the implicit tree is always complete; the
//! only invariant to maintain is heap order (no node is greater than its
//! children).
//!
//! [`percolate_down`] is shared with [`heapsort`](crate::heapsort::heapsort),
//! which runs it against a shrinking window of a caller-owned array.
//!
//! # Time Complexity
//!
//! | Operation     | Complexity          |
//! |---------------|---------------------|
//! | `insert`      | O(log n) amortized  |
//! | `peek_min`    | O(1)                |
//! | `extract_min` | O(log n) amortized  |
//! | `build_heap`  | O(n)                |
//! | `merge`       | O(n + m)            |
//!
//! # Example
//!
//! ```rust
//! use rust_growable_heaps::binary_heap::BinaryMinHeap;
//! use rust_growable_heaps::dynamic_array::GrowableArray;
//!
//! let source: GrowableArray<i32> = vec![100, 20, 6, 200, 90, 150, 300].into();
//! let mut heap = BinaryMinHeap::new();
//! heap.build_heap(&source);
//!
//! assert_eq!(heap.peek_min(), Ok(&6));
//! assert_eq!(heap.extract_min(), Ok(6));
//! assert_eq!(heap.extract_min(), Ok(20));
//! assert_eq!(heap.size(), 5);
//! ```

use std::fmt;

use tracing::trace;

use crate::dynamic_array::GrowableArray;
use crate::policy::GrowthPolicy;
use crate::traits::{CollectionError, Heap};

/// `array[a] < array[b]`; both indices must be live
fn less<T: Ord>(array: &GrowableArray<T>, a: usize, b: usize) -> bool {
    debug_assert!(
        a < array.len() && b < array.len(),
        "heap comparison outside the live range"
    );
    matches!((array.get(a), array.get(b)), (Ok(x), Ok(y)) if x < y)
}

/// Moves the element at `parent` down until neither child within `boundary`
/// is smaller
///
/// Only indices below `boundary` (clamped to `array.len()`) are treated as part
/// of the heap. When both children are smaller and equal to each other the
/// left child is taken.
pub fn percolate_down<T: Ord>(array: &mut GrowableArray<T>, mut parent: usize, boundary: usize) {
    let boundary = boundary.min(array.len());
    loop {
        let left = 2 * parent + 1;
        if left >= boundary {
            break;
        }
        let right = left + 1;
        let smaller = if right < boundary && less(array, right, left) {
            right
        } else {
            left
        };

        if less(array, smaller, parent) {
            array.swap_live(parent, smaller);
            parent = smaller;
        } else {
            break;
        }
    }
}

/// Moves the element at `index` up while it is strictly smaller than its parent
///
/// An `index` past the live range leaves the array untouched.
pub fn percolate_up<T: Ord>(array: &mut GrowableArray<T>, mut index: usize) {
    if index >= array.len() {
        return;
    }
    while index > 0 {
        let parent = (index - 1) / 2;
        if less(array, index, parent) {
            array.swap_live(index, parent);
            index = parent;
        } else {
            break;
        }
    }
}

/// Restores heap order over the whole array, bottom-up from the last internal node
pub(crate) fn heapify<T: Ord>(array: &mut GrowableArray<T>) {
    let len = array.len();
    for index in (0..len / 2).rev() {
        percolate_down(array, index, len);
    }
}

/// A binary min-heap backed by an exclusively owned [`GrowableArray`]
#[derive(Debug, Clone)]
pub struct BinaryMinHeap<T> {
    /// Heap elements in level order
    backing: GrowableArray<T>,
}

impl<T: Ord> BinaryMinHeap<T> {
    /// Creates an empty heap
    pub fn new() -> Self {
        Self {
            backing: GrowableArray::new(),
        }
    }

    /// Creates an empty heap whose backing array uses `policy`
    pub fn with_policy(policy: GrowthPolicy) -> Result<Self, CollectionError> {
        Ok(Self {
            backing: GrowableArray::with_policy(policy)?,
        })
    }

    /// Adds `value`, percolating it up from the last position
    pub fn insert(&mut self, value: T) {
        self.backing.append(value);
        let last = self.backing.len() - 1;
        percolate_up(&mut self.backing, last);
    }

    /// Returns the smallest element
    ///
    /// # Errors
    /// `EmptyContainer` if the heap is empty.
    pub fn peek_min(&self) -> Result<&T, CollectionError> {
        self.backing
            .get(0)
            .map_err(|_| CollectionError::EmptyContainer)
    }

    /// Removes and returns the smallest element
    ///
    /// The last element takes the root's slot and percolates down.
    ///
    /// # Errors
    /// `EmptyContainer` if the heap is empty.
    pub fn extract_min(&mut self) -> Result<T, CollectionError> {
        if self.backing.is_empty() {
            return Err(CollectionError::EmptyContainer);
        }
        let last = self.backing.len() - 1;
        self.backing.swap_live(0, last);
        let min = self.backing.remove_at(last)?;
        let len = self.backing.len();
        percolate_down(&mut self.backing, 0, len);
        Ok(min)
    }

    /// Replaces the heap's contents with a copy of `source`, then heapifies
    ///
    /// The heap never shares storage with `source`; later writes to either are
    /// invisible to the other.
    pub fn build_heap(&mut self, source: &GrowableArray<T>)
    where
        T: Clone,
    {
        trace!(len = source.len(), "building heap from sequence");
        let mut copy = self.backing.empty_like();
        copy.extend(source.iter().cloned());
        heapify(&mut copy);
        self.backing = copy;
    }

    /// Returns the number of elements
    pub fn size(&self) -> usize {
        self.backing.len()
    }

    /// Returns the number of elements
    pub fn len(&self) -> usize {
        self.backing.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.backing.is_empty()
    }

    /// Drops every element, replacing the backing array with a fresh one
    pub fn clear(&mut self) {
        self.backing = self.backing.empty_like();
    }

    /// Moves every element of `other` into this heap
    ///
    /// Concatenates the backing arrays and rebuilds bottom-up, which is linear
    /// in the combined size rather than `m log(n + m)` for repeated inserts.
    pub fn merge(&mut self, other: Self) {
        trace!(
            len = self.backing.len(),
            other = other.backing.len(),
            "merging heaps"
        );
        self.backing.extend(other.backing);
        heapify(&mut self.backing);
    }

    /// Returns the level-order backing array
    pub fn as_array(&self) -> &GrowableArray<T> {
        &self.backing
    }

    /// Consumes the heap, returning its level-order backing array
    pub fn into_array(self) -> GrowableArray<T> {
        self.backing
    }
}

impl<T: Ord> Default for BinaryMinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> From<GrowableArray<T>> for BinaryMinHeap<T> {
    /// Heapifies an owned array in place; no copy is made
    fn from(mut array: GrowableArray<T>) -> Self {
        heapify(&mut array);
        Self { backing: array }
    }
}

impl<T: Ord> FromIterator<T> for BinaryMinHeap<T> {
    /// Builds the heap by inserting each element in turn
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        for value in iter {
            heap.insert(value);
        }
        heap
    }
}

impl<T: fmt::Display> fmt::Display for BinaryMinHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HEAP [")?;
        for (i, value) in self.backing.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

impl<T: Ord> Heap<T> for BinaryMinHeap<T> {
    fn new() -> Self {
        BinaryMinHeap::new()
    }

    fn is_empty(&self) -> bool {
        self.backing.is_empty()
    }

    fn len(&self) -> usize {
        self.backing.len()
    }

    fn push(&mut self, item: T) {
        self.insert(item);
    }

    fn peek(&self) -> Option<&T> {
        self.peek_min().ok()
    }

    fn pop(&mut self) -> Option<T> {
        self.extract_min().ok()
    }

    fn merge(&mut self, other: Self) {
        BinaryMinHeap::merge(self, other);
    }
}

/// Returns true if no node in `array` is greater than one of its children
pub fn is_heap_ordered<T: Ord>(array: &GrowableArray<T>) -> bool {
    (1..array.len()).all(|child| !less(array, child, (child - 1) / 2))
}
