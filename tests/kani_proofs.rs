//! Kani verification proofs for the array and heap invariants
//!
//! Kani is AWS's model checker for Rust. It can verify properties of Rust code
//! by checking all possible executions up to certain bounds.
//!
//! To run these proofs:
//!   cargo kani --tests

#[cfg(kani)]
use rust_growable_heaps::binary_heap::{is_heap_ordered, BinaryMinHeap};
#[cfg(kani)]
use rust_growable_heaps::GrowableArray;

/// Proof that append increments the length and keeps capacity ahead of it
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(10)]
fn verify_append_len_capacity() {
    let mut array: GrowableArray<u8> = GrowableArray::new();
    let count: usize = kani::any();
    kani::assume(count <= 6);

    for _ in 0..count {
        let before = array.len();
        array.append(kani::any());
        assert!(array.len() == before + 1);
        assert!(array.capacity() >= array.len());
    }
}

/// Proof that insert_at followed by remove_at at the same index is the identity
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(10)]
fn verify_insert_remove_inverse() {
    let mut array: GrowableArray<u8> = GrowableArray::new();
    for _ in 0..4 {
        array.append(kani::any());
    }
    let snapshot = array.clone();

    let index: usize = kani::any();
    kani::assume(index <= 4);
    let value: u8 = kani::any();

    assert!(array.insert_at(index, value).is_ok());
    assert!(array.remove_at(index) == Ok(value));
    assert!(array == snapshot);
}

/// Proof that the heap stays ordered and the root is the minimum after inserts
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_heap_order_after_insert() {
    let mut heap: BinaryMinHeap<u8> = BinaryMinHeap::new();
    let a: u8 = kani::any();
    let b: u8 = kani::any();
    let c: u8 = kani::any();
    let d: u8 = kani::any();

    heap.insert(a);
    heap.insert(b);
    heap.insert(c);
    heap.insert(d);

    assert!(is_heap_ordered(heap.as_array()));
    let min = a.min(b).min(c).min(d);
    assert!(heap.peek_min() == Ok(&min));
}

/// Proof that extract_min returns elements in non-decreasing order
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_extract_min_order() {
    let mut source: GrowableArray<u8> = GrowableArray::new();
    for _ in 0..4 {
        source.append(kani::any());
    }
    let mut heap = BinaryMinHeap::new();
    heap.build_heap(&source);

    let mut last = 0u8;
    while let Ok(value) = heap.extract_min() {
        assert!(value >= last);
        last = value;
    }
    assert!(heap.is_empty());
}
