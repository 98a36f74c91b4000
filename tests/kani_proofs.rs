//! Kani verification proofs for the heap operations
//!
//! Kani is AWS's model checker for Rust. It checks every execution up to the
//! given bounds, so these proofs cover all orderings of small inputs rather
//! than a random sample.
//!
//! To run these proofs:
//!   cargo kani --tests

#[cfg(kani)]
use rust_min_heap::min_heap::MinHeap;
#[cfg(kani)]
use rust_min_heap::{HeapError, IndexedMinHeap};

/// Proof that insert increments the length and keeps the heap order
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_insert_keeps_heap_order() {
    let mut heap: MinHeap<u8> = MinHeap::new();
    for _ in 0..4 {
        let before = heap.len();
        heap.insert(kani::any());
        assert!(heap.len() == before + 1);
        assert!(heap.is_heap());
    }
}

/// Proof that extract_min returns the smallest inserted value
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_extract_min_returns_minimum() {
    let a: u8 = kani::any();
    let b: u8 = kani::any();
    let c: u8 = kani::any();

    let mut heap = MinHeap::new();
    heap.insert(a);
    heap.insert(b);
    heap.insert(c);

    let min = a.min(b).min(c);
    assert!(heap.extract_min() == Ok(min));
    assert!(heap.len() == 2);
    assert!(heap.is_heap());
}

/// Proof that bulk build produces a valid heap for any four values
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_build_produces_heap() {
    let values: [u8; 4] = kani::any();
    let heap = MinHeap::from_vec(values.to_vec());
    assert!(heap.len() == 4);
    assert!(heap.is_heap());
}

/// Proof that extract_min on an empty heap errors and leaves it empty
#[cfg(kani)]
#[kani::proof]
fn verify_extract_min_empty() {
    let mut heap: MinHeap<u8> = MinHeap::new();
    assert!(heap.extract_min() == Err(HeapError::Empty));
    assert!(heap.is_empty());
}

/// Proof that decrease_key either succeeds and keeps the order, or fails
/// without touching the heap
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_decrease_key_atomic() {
    let values: [u8; 4] = kani::any();
    let index: usize = kani::any();
    let new_value: u8 = kani::any();
    kani::assume(index < 6);

    let mut heap = MinHeap::from_vec(values.to_vec());
    let before = heap.clone().into_vec();

    match heap.decrease_key(index, new_value) {
        Ok(()) => {
            assert!(index < 4);
            assert!(new_value <= before[index]);
            assert!(heap.is_heap());
        }
        Err(HeapError::IndexOutOfRange { .. }) => {
            assert!(index >= 4);
            assert!(heap.as_slice() == before.as_slice());
        }
        Err(HeapError::KeyIncreased) => {
            assert!(new_value > before[index]);
            assert!(heap.as_slice() == before.as_slice());
        }
        Err(_) => unreachable!(),
    }
}

/// Proof that merge preserves the total length and empties the source
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_merge_lengths() {
    let left: [u8; 2] = kani::any();
    let right: [u8; 2] = kani::any();

    let mut a = MinHeap::from_vec(left.to_vec());
    let mut b = MinHeap::from_vec(right.to_vec());
    a.merge(&mut b);

    assert!(a.len() == 4);
    assert!(b.is_empty());
    assert!(a.is_heap());
}

/// Proof that a handle follows its element through sifting
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_indexed_handle_tracks_value() {
    let a: u8 = kani::any();
    let b: u8 = kani::any();
    let c: u8 = kani::any();

    let mut heap = IndexedMinHeap::new();
    let ha = heap.insert(a);
    let hb = heap.insert(b);
    heap.insert(c);

    assert!(heap.get(&ha) == Some(&a));
    assert!(heap.get(&hb) == Some(&b));

    if b > 0 {
        assert!(heap.decrease_key(&hb, 0).is_ok());
        assert!(heap.peek() == Some(&0));
        assert!(heap.get(&hb) == Some(&0));
    }
    assert!(heap.is_heap());
}
