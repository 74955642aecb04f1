//! Growable Arrays and Binary Heaps for Rust
//!
//! This crate provides a growable array with an explicit, configurable
//! capacity policy, a binary min-heap layered on that array, and algorithms
//! that consume the array's indexed-access contract.
//!
//! # Features
//!
//! - **GrowableArray**: O(1) amortized append (capacity doubles when full), O(n) positional
//!   insert/remove with shrinking once occupancy falls below 25%, slicing, map/filter/reduce
//! - **BinaryMinHeap**: O(log n) insert and extract-min, O(1) peek, O(n) bottom-up build
//! - **Heapsort**: in-place O(n log n) sort into non-ascending order sharing the heap's percolate-down
//! - **Runs**: `chunk` into maximal non-descending runs, `find_mode` of a sorted sequence
//!
//! # Example
//!
//! ```rust
//! use rust_growable_heaps::binary_heap::BinaryMinHeap;
//! use rust_growable_heaps::dynamic_array::GrowableArray;
//! use rust_growable_heaps::heapsort::heapsort;
//!
//! let mut array: GrowableArray<i32> = vec![5, 3, 8, 1, 9, 2].into();
//!
//! let mut heap = BinaryMinHeap::new();
//! heap.build_heap(&array);
//! assert_eq!(heap.extract_min(), Ok(1));
//!
//! heapsort(&mut array);
//! assert_eq!(array.get(0), Ok(&9));
//! ```

pub mod binary_heap;
pub mod dynamic_array;
pub mod heapsort;
pub mod policy;
pub mod runs;
pub mod store;
pub mod traits;

// Re-export the main types for convenience
pub use binary_heap::BinaryMinHeap;
pub use dynamic_array::GrowableArray;
pub use policy::GrowthPolicy;
pub use traits::{CollectionError, Heap};
