//! Common traits and the error taxonomy shared by every container
//!
//! - [`CollectionError`]: the failure cases reported by arrays and heaps
//! - [`Heap`]: base trait for min-heaps, shaped after `std::collections::BinaryHeap`
//!
//! The containers also expose inherent methods that report failures through
//! [`CollectionError`]; the [`Heap`] trait is the `Option`-returning view
//! used by generic code.

use std::fmt;

/// Error type for array and heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    /// An index (or index range) fell outside the live elements
    IndexOutOfBounds {
        /// The offending index
        index: usize,
        /// The number of live elements at the time of the call
        len: usize,
    },
    /// A heap was asked for its minimum while holding no elements
    EmptyContainer,
    /// A [`GrowthPolicy`](crate::policy::GrowthPolicy) was rejected
    InvalidPolicy(&'static str),
}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionError::IndexOutOfBounds { index, len } => {
                write!(f, "index {} out of bounds for length {}", index, len)
            }
            CollectionError::EmptyContainer => {
                write!(f, "container is empty")
            }
            CollectionError::InvalidPolicy(reason) => {
                write!(f, "invalid growth policy: {}", reason)
            }
        }
    }
}

impl std::error::Error for CollectionError {}

/// Base trait for min-heap data structures
///
/// This trait provides a simple API similar to Rust's `BinaryHeap`:
/// - `push` inserts an element (returns `()`)
/// - `pop` removes and returns the minimum
/// - `peek` returns the minimum without removing it
///
/// Unlike `BinaryHeap`, which is a max-heap, implementors return the
/// smallest element first. Wrap elements in `std::cmp::Reverse` for max-heap
/// behavior.
///
/// # Example
///
/// ```rust
/// use rust_growable_heaps::Heap;
/// use rust_growable_heaps::binary_heap::BinaryMinHeap;
///
/// let mut heap = BinaryMinHeap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(Heap::peek(&heap), Some(&1));
/// assert_eq!(heap.pop(), Some(1));
/// ```
pub trait Heap<T: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n) amortized (the backing array occasionally resizes).
    fn push(&mut self, item: T);

    /// Returns the minimum element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the minimum element
    ///
    /// # Time Complexity
    /// O(log n) amortized.
    fn pop(&mut self) -> Option<T>;

    /// Merges another heap into this one, consuming the other heap
    fn merge(&mut self, other: Self);
}
