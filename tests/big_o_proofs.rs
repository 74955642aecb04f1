//! Big-O complexity checks for array and heap operations
//!
//! This module empirically verifies the amortized and linear-time bounds
//! using the `big-o-test` crate.
//!
//! ## Testing Strategy
//!
//! We use `test_algorithm` to measure batch operations. For batch operations:
//! - O(1) amortized per-element operations appear as O(n) for n operations
//! - O(log n) operations appear as O(n log n) for n operations
//!
//! Note: These are empirical tests, not formal proofs. They detect significant
//! deviations from expected behavior but may not catch subtle issues with
//! specific input patterns.

use big_o_test::{test_algorithm, BigOAlgorithmComplexity};
use rust_growable_heaps::binary_heap::BinaryMinHeap;
use rust_growable_heaps::heapsort::heapsort;
use rust_growable_heaps::GrowableArray;

use ctor::ctor;
use parking_lot::RwLock;
use std::sync::Arc;

/// Sets up the ENV, affecting the Rust's test runner
#[ctor]
fn setup_env() {
    // cause tests to run serially -- this may be replaced by using the `serial_test` crate
    std::env::set_var("RUST_TEST_THREADS", "1");
}

/// n appends, resizes included, are O(n) in total
#[test]
fn test_append_amortized() {
    let array = Arc::new(RwLock::new(GrowableArray::new()));

    test_algorithm(
        "GrowableArray append batch",
        3,
        || {
            *array.write() = GrowableArray::new();
        },
        20_000,
        || {
            let mut a = array.write();
            for i in 0..20_000 {
                a.append(i);
            }
            42
        },
        40_000,
        || {
            let mut a = array.write();
            for i in 0..40_000 {
                a.append(i);
            }
            42
        },
        BigOAlgorithmComplexity::ON,
        BigOAlgorithmComplexity::ON,
    );
}

/// Bottom-up construction is linear, unlike n sequential inserts
#[test]
fn test_build_heap_linear() {
    let heap = Arc::new(RwLock::new(BinaryMinHeap::new()));
    let small: GrowableArray<i32> = (0..20_000).rev().collect();
    let large: GrowableArray<i32> = (0..40_000).rev().collect();

    test_algorithm(
        "BinaryMinHeap build_heap",
        3,
        || {
            heap.write().clear();
        },
        20_000,
        || {
            let mut h = heap.write();
            h.build_heap(&small);
            42
        },
        40_000,
        || {
            let mut h = heap.write();
            h.build_heap(&large);
            42
        },
        BigOAlgorithmComplexity::ON,
        BigOAlgorithmComplexity::ON,
    );
}

/// n extractions are O(n log n)
#[test]
fn test_heapsort_n_log_n() {
    let array = Arc::new(RwLock::new(GrowableArray::new()));

    test_algorithm(
        "heapsort",
        3,
        || {
            *array.write() = GrowableArray::new();
        },
        20_000,
        || {
            let mut a = array.write();
            a.extend(0..20_000);
            heapsort(&mut a);
            42
        },
        40_000,
        || {
            let mut a = array.write();
            a.extend(0..40_000);
            heapsort(&mut a);
            42
        },
        BigOAlgorithmComplexity::ONLogN,
        BigOAlgorithmComplexity::ON,
    );
}
