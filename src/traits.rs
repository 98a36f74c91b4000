//! Common traits for heap data structures
//!
//! This module provides a two-tier trait hierarchy for the heaps in this crate:
//!
//! - [`Heap`]: Base trait for array-backed min-heaps (push, pop, peek, merge)
//! - [`DecreaseKeyHeap`]: Extended trait adding handle-based `decrease_key`
//!
//! The base [`Heap`] trait follows Rust's standard `BinaryHeap` API patterns
//! (minus the max-heap orientation), while [`DecreaseKeyHeap`] adds the
//! operations needed by algorithms such as Dijkstra's shortest path.
//!
//! Both [`MinHeap`](crate::min_heap::MinHeap) and
//! [`IndexedMinHeap`](crate::indexed::IndexedMinHeap) implement [`Heap`]; only
//! the indexed heap hands out stable handles and implements [`DecreaseKeyHeap`].

use std::fmt;

/// Error type for heap operations
///
/// Every failing operation leaves the heap exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The heap holds no elements
    Empty,
    /// The position is outside `0..len`
    IndexOutOfRange {
        /// The rejected position
        index: usize,
        /// The heap length at the time of the call
        len: usize,
    },
    /// The new value compares greater than the value it would replace
    KeyIncreased,
    /// The handle does not refer to an element of this heap: the element was
    /// extracted or merged away, or another heap issued the handle
    InvalidHandle,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Empty => write!(f, "heap is empty"),
            HeapError::IndexOutOfRange { index, len } => {
                write!(f, "index {index} is out of range for heap of length {len}")
            }
            HeapError::KeyIncreased => {
                write!(f, "new value is greater than the current value")
            }
            HeapError::InvalidHandle => {
                write!(f, "handle does not refer to an element of this heap")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// A handle to an element in the heap, used for decrease_key operations
///
/// This is an opaque type that identifies a specific element independently of
/// its current array position.
pub trait Handle: Clone + PartialEq + Eq {}

/// Base trait for min-heap/priority queue data structures
///
/// This trait provides a simple API similar to Rust's `BinaryHeap`:
/// - `push` inserts an element
/// - `pop` removes and returns the minimum
/// - `peek` returns the minimum without removing it
///
/// The ordering comes from the heap's comparator, which for [`Heap::new`] is
/// the comparator type's `Default` (natural `Ord` order unless configured).
///
/// # Example
///
/// ```rust
/// use rust_min_heap::Heap;
/// use rust_min_heap::min_heap::MinHeap;
///
/// let mut heap: MinHeap<i32> = Heap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.pop(), Some(1));
/// ```
pub trait Heap<T> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n) amortized (the backing vector may grow).
    fn push(&mut self, item: T);

    /// Returns the minimum element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the minimum element, or `None` if the heap is empty
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<T>;

    /// Moves every element of `other` into this heap
    ///
    /// `other` is left empty but remains usable.
    ///
    /// # Time Complexity
    /// O(n + m): both heaps are concatenated and rebuilt bottom-up.
    fn merge(&mut self, other: &mut Self);
}

/// Extended heap trait with `decrease_key` support
///
/// This trait extends [`Heap`] with operations that require tracking element handles:
/// - `push_with_handle` returns a handle that can be used with `decrease_key`
/// - `decrease_key` lowers an element's value in place
///
/// # Example
///
/// ```rust
/// use rust_min_heap::{DecreaseKeyHeap, Heap};
/// use rust_min_heap::indexed::IndexedMinHeap;
///
/// let mut heap: IndexedMinHeap<i32> = Heap::new();
/// let handle = heap.push_with_handle(10);
/// heap.push(7);
/// DecreaseKeyHeap::decrease_key(&mut heap, &handle, 5).unwrap();
/// assert_eq!(heap.peek(), Some(&5));
/// ```
pub trait DecreaseKeyHeap<T>: Heap<T> {
    /// The handle type for this heap, used to reference elements for decrease_key
    type Handle: Handle;

    /// Inserts an element, returning a handle to it
    ///
    /// # Time Complexity
    /// O(log n) amortized
    fn push_with_handle(&mut self, item: T) -> Self::Handle;

    /// Lowers the value of the element identified by the handle
    ///
    /// # Errors
    /// - `HeapError::InvalidHandle` if the element is no longer in the heap
    /// - `HeapError::KeyIncreased` if `new_value` compares greater than the
    ///   element's current value
    ///
    /// # Time Complexity
    /// O(log n)
    fn decrease_key(&mut self, handle: &Self::Handle, new_value: T) -> Result<(), HeapError>;
}
