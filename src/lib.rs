//! Array-backed binary min-heaps for Rust
//!
//! This crate provides a binary min-heap (priority queue) stored as a flat
//! vector, with the standard operations plus two that most binary heaps leave
//! out:
//!
//! - **decrease_key**: lower an element's value in place in O(log n)
//! - **merge**: absorb another heap in O(n + m) by concatenating and rebuilding
//!
//! # Heaps
//!
//! - [`MinHeap`](min_heap::MinHeap): the plain heap; `decrease_key` addresses an
//!   array position, which any mutation may invalidate
//! - [`IndexedMinHeap`](indexed::IndexedMinHeap): same layout, but every element
//!   gets a stable [`HeapHandle`](indexed::HeapHandle) so `decrease_key` stays
//!   safe across other operations
//!
//! Both are generic over a [`Comparator`](compare::Comparator) (natural `Ord`
//! order by default) and a [`HeapObserver`](observer::HeapObserver) that
//! receives comparison/swap/storage-access events (a no-op by default).
//!
//! # Example
//!
//! ```rust
//! use rust_min_heap::min_heap::MinHeap;
//!
//! let mut a = MinHeap::from_vec(vec![2, 6]);
//! let mut b = MinHeap::from_vec(vec![1, 9]);
//! a.merge(&mut b);
//!
//! assert!(b.is_empty());
//! assert_eq!(a.into_sorted_vec(), vec![1, 2, 6, 9]);
//! ```

pub mod benchmark;
pub mod compare;
pub mod indexed;
pub mod min_heap;
pub mod observer;
mod sift;
pub mod traits;

// Re-export the main types for convenience
pub use compare::{Comparator, NaturalOrder};
pub use indexed::{HeapHandle, IndexedMinHeap};
pub use min_heap::MinHeap;
pub use observer::{HeapObserver, NoopObserver, OperationCounters};
pub use traits::{DecreaseKeyHeap, Handle, Heap, HeapError};
