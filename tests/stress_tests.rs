//! Stress tests that push the heaps through large operation counts
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases and verify correctness under load.

use rust_min_heap::indexed::IndexedMinHeap;
use rust_min_heap::min_heap::MinHeap;
use rust_min_heap::{DecreaseKeyHeap, Heap};

/// Test massive numbers of inserts and pops
fn test_massive_operations<H: Heap<i32>>() {
    let mut heap = H::new();

    for i in (0..10_000).rev() {
        heap.push(i);
    }
    assert_eq!(heap.len(), 10_000);

    for i in 0..10_000 {
        assert_eq!(heap.pop(), Some(i));
    }
    assert!(heap.is_empty());
}

/// Test alternating insert and pop
fn test_alternating_ops<H: Heap<i32>>() {
    let mut heap = H::new();

    // Two in, one out; the smaller of each pair always leaves first
    for i in 0..2000 {
        heap.push(i * 2 + 1);
        heap.push(i * 2);
        assert_eq!(heap.pop(), Some(i));
    }
    assert_eq!(heap.len(), 2000);
}

/// Test merging many heaps together
fn test_large_merge<H: Heap<i32>>() {
    let mut heap = H::new();

    for batch in 0..50 {
        let mut other = H::new();
        for i in 0..200 {
            other.push(i * 50 + batch);
        }
        heap.merge(&mut other);
        assert!(other.is_empty());
    }
    assert_eq!(heap.len(), 10_000);

    for i in 0..10_000 {
        assert_eq!(heap.pop(), Some(i));
    }
}

/// Test extreme values at the edges of the element range
fn test_large_priorities<H: Heap<i64>>() {
    let mut heap = H::new();

    for i in 0..1000i64 {
        heap.push(i64::MAX - i);
        heap.push(i64::MIN + i);
    }
    for i in 0..1000i64 {
        assert_eq!(heap.pop(), Some(i64::MIN + i));
    }
    assert_eq!(heap.pop(), Some(i64::MAX - 999));
}

/// Test many decrease_key operations
fn test_many_decrease_keys<H: DecreaseKeyHeap<i32>>() {
    let mut heap = H::new();
    let mut handles = Vec::new();

    for i in 0..5000 {
        handles.push(heap.push_with_handle(100_000 + i));
    }

    for (i, handle) in handles.iter().enumerate() {
        assert!(heap.decrease_key(handle, i as i32).is_ok());
    }

    for i in 0..5000 {
        assert_eq!(heap.pop(), Some(i));
    }
}

/// Test rapid-fire mixed operations
fn test_rapid_fire<H: DecreaseKeyHeap<i32>>() {
    let mut heap = H::new();
    let mut handles = Vec::new();

    for i in 0..2000 {
        handles.push(heap.push_with_handle(i));
    }

    // Even values move below every odd value
    for (i, handle) in handles.iter().enumerate().step_by(2) {
        assert!(heap.decrease_key(handle, i as i32 - 10_000).is_ok());
    }

    for i in (0..2000).step_by(2) {
        assert_eq!(heap.pop(), Some(i - 10_000));
    }
    for i in 2000..2500 {
        heap.push(i);
    }

    // Odd values 1..2000 remain, then the late inserts
    assert_eq!(heap.len(), 1500);
    assert_eq!(heap.pop(), Some(1));
}

#[test]
fn test_min_heap_massive() {
    test_massive_operations::<MinHeap<i32>>();
}

#[test]
fn test_min_heap_alternating() {
    test_alternating_ops::<MinHeap<i32>>();
}

#[test]
fn test_min_heap_large_merge() {
    test_large_merge::<MinHeap<i32>>();
}

#[test]
fn test_min_heap_large_priorities() {
    test_large_priorities::<MinHeap<i64>>();
}

#[test]
fn test_indexed_massive() {
    test_massive_operations::<IndexedMinHeap<i32>>();
}

#[test]
fn test_indexed_alternating() {
    test_alternating_ops::<IndexedMinHeap<i32>>();
}

#[test]
fn test_indexed_large_merge() {
    test_large_merge::<IndexedMinHeap<i32>>();
}

#[test]
fn test_indexed_large_priorities() {
    test_large_priorities::<IndexedMinHeap<i64>>();
}

#[test]
fn test_indexed_many_decrease_keys() {
    test_many_decrease_keys::<IndexedMinHeap<i32>>();
}

#[test]
fn test_indexed_rapid_fire() {
    test_rapid_fire::<IndexedMinHeap<i32>>();
}

/// Index-based decrease on the plain heap, always targeting the last slot
#[test]
fn test_min_heap_decrease_tail_repeatedly() {
    let mut heap = MinHeap::from_vec((1000..6000).collect());
    for k in 0..5000 {
        let target = -k;
        let last = heap.len() - 1;
        heap.decrease_key(last, target).unwrap();
        assert_eq!(heap.peek(), Some(&target));
    }
    assert!(heap.is_heap());
}
