//! In-place heapsort over a [`GrowableArray`]
//!
//! The array is first put in min-heap order with the same bottom-up pass as
//! [`BinaryMinHeap::build_heap`](crate::binary_heap::BinaryMinHeap::build_heap).
//! Then the root (the current minimum) is repeatedly swapped to the end of a
//! shrinking window and the window's root percolated down. Minimums collect at
//! the back, so the result is in non-ascending order.
//!
//! O(n log n) time, O(1) extra space, not stable.

use tracing::trace;

use crate::binary_heap::{heapify, percolate_down};
use crate::dynamic_array::GrowableArray;

/// Sorts `array` in place into non-ascending order
///
/// ```rust
/// use rust_growable_heaps::dynamic_array::GrowableArray;
/// use rust_growable_heaps::heapsort::heapsort;
///
/// let mut array: GrowableArray<i32> = vec![100, 20, 6, 200, 90, 150, 300].into();
/// heapsort(&mut array);
/// assert_eq!(array.to_string(), "DYN_ARR Size/Cap: 7/8 [300, 200, 150, 100, 90, 20, 6]");
/// ```
pub fn heapsort<T: Ord>(array: &mut GrowableArray<T>) {
    trace!(len = array.len(), "heapsort");
    heapify(array);
    for end in (1..array.len()).rev() {
        array.swap_live(0, end);
        percolate_down(array, 0, end);
    }
}
