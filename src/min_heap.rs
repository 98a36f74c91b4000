//! Array-backed binary min-heap
//!
//! [`MinHeap`] stores its elements in a single `Vec` laid out as a complete
//! binary tree. Besides the usual insert / extract-min / bulk build it
//! supports two less common operations:
//!
//! - **decrease_key**: lower the value stored at a given array position and
//!   restore heap order by sifting it up
//! - **merge**: move every element of another heap over and rebuild
//!
//! # Time Complexity
//!
//! | Operation      | Complexity         |
//! |----------------|--------------------|
//! | `insert`       | O(log n) amortized |
//! | `extract_min`  | O(log n)           |
//! | `peek`         | O(1)               |
//! | `decrease_key` | O(log n)           |
//! | `merge`        | O(n + m)           |
//! | `from_vec`     | O(n)               |
//!
//! # Positions are not handles
//!
//! The `index` taken by [`MinHeap::decrease_key`] is a position in the
//! current array, and any mutation may move elements around. Re-read the
//! position right before calling it, or use
//! [`IndexedMinHeap`](crate::indexed::IndexedMinHeap), which hands out stable
//! handles instead.
//!
//! # Example
//!
//! ```rust
//! use rust_min_heap::min_heap::MinHeap;
//!
//! let mut heap = MinHeap::from_vec(vec![10, 20, 30]);
//! let pos = heap.iter().position(|&v| v == 30).unwrap();
//! heap.decrease_key(pos, 5).unwrap();
//!
//! assert_eq!(heap.extract_min(), Ok(5));
//! assert_eq!(heap.extract_min(), Ok(10));
//! assert_eq!(heap.extract_min(), Ok(20));
//! assert!(heap.extract_min().is_err());
//! ```

use crate::compare::{Comparator, NaturalOrder};
use crate::observer::{HeapObserver, NoopObserver};
use crate::sift::{self, SiftBuffer};
use crate::traits::{Heap, HeapError};
use log::{debug, trace};
use std::fmt;

/// A binary min-heap over `T`, ordered by `C` and instrumented by `O`
///
/// The element at index 0 is always a minimum under the comparator. For every
/// other index `i`, the element at `i` is not less than the element at
/// `(i - 1) / 2`.
#[derive(Clone)]
pub struct MinHeap<T, C = NaturalOrder, O = NoopObserver> {
    /// The heap data stored in level order
    data: Vec<T>,
    cmp: C,
    observer: O,
}

impl<T: Ord> MinHeap<T> {
    /// Creates an empty heap ordered by `T`'s `Ord` impl
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }

    /// Creates an empty heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        let mut heap = Self::new();
        heap.data.reserve(capacity);
        heap
    }

    /// Builds a heap from an arbitrary vector in O(n)
    pub fn from_vec(vec: Vec<T>) -> Self {
        Self::from_vec_cmp(vec, NaturalOrder)
    }
}

impl<T, C: Comparator<T>> MinHeap<T, C> {
    /// Creates an empty heap ordered by `cmp`
    pub fn with_comparator(cmp: C) -> Self {
        Self::with_observer(cmp, NoopObserver)
    }

    /// Builds a heap ordered by `cmp` from an arbitrary vector in O(n)
    pub fn from_vec_cmp(vec: Vec<T>, cmp: C) -> Self {
        Self::from_vec_with_observer(vec, cmp, NoopObserver)
    }
}

impl<T, C: Comparator<T>, O: HeapObserver> MinHeap<T, C, O> {
    /// Creates an empty heap that reports its work to `observer`
    pub fn with_observer(cmp: C, observer: O) -> Self {
        Self {
            data: Vec::new(),
            cmp,
            observer,
        }
    }

    /// Builds a heap from an arbitrary vector in O(n), reporting to `observer`
    ///
    /// Internal nodes are sifted down from the last one to the root.
    pub fn from_vec_with_observer(vec: Vec<T>, cmp: C, observer: O) -> Self {
        let mut heap = Self {
            data: vec,
            cmp,
            observer,
        };
        heap.rebuild();
        heap
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves capacity for at least `additional` more elements
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Returns the minimum element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Returns the element currently stored at array position `index`
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// The elements in array (level) order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over the elements in array (level) order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// The comparator this heap is ordered by
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// The observer this heap reports to
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Inserts an element
    ///
    /// The element is appended at the tail and sifted up.
    ///
    /// # Time Complexity
    /// O(log n) amortized
    pub fn insert(&mut self, item: T) {
        self.data.push(item);
        self.observer.on_storage_access(1);
        let last = self.data.len() - 1;
        sift::sift_up(self, last);
    }

    /// Removes and returns the minimum element
    ///
    /// The tail element is moved to the root and sifted down.
    ///
    /// # Errors
    /// `HeapError::Empty` if the heap has no elements; the heap is untouched.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn extract_min(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::Empty);
        }

        self.observer.on_storage_access(1);
        if self.data.len() == 1 {
            return self.data.pop().ok_or(HeapError::Empty);
        }

        self.observer.on_storage_access(2);
        let min = self.data.swap_remove(0);
        sift::sift_down(self, 0);
        Ok(min)
    }

    /// Lowers the value at array position `index` to `new_value`
    ///
    /// Setting the same value again is allowed and leaves the heap unchanged.
    ///
    /// # Errors
    /// - `HeapError::IndexOutOfRange` if `index >= len()`
    /// - `HeapError::KeyIncreased` if `new_value` compares greater than the
    ///   current value
    ///
    /// On error, the heap is untouched and `new_value` is dropped.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn decrease_key(&mut self, index: usize, new_value: T) -> Result<(), HeapError> {
        let len = self.data.len();
        let current = self
            .data
            .get(index)
            .ok_or(HeapError::IndexOutOfRange { index, len })?;

        self.observer.on_comparison();
        self.observer.on_storage_access(1);
        if self.cmp.lt(current, &new_value) {
            return Err(HeapError::KeyIncreased);
        }

        self.data[index] = new_value;
        self.observer.on_storage_access(1);
        sift::sift_up(self, index);
        Ok(())
    }

    /// Moves every element of `other` into this heap, leaving `other` empty
    ///
    /// The two arrays are concatenated and the whole heap is rebuilt
    /// bottom-up; any existing structure is discarded. `other` keeps its
    /// comparator, observer and allocation and can be used again.
    ///
    /// # Time Complexity
    /// O(n + m)
    pub fn merge(&mut self, other: &mut Self) {
        if other.data.is_empty() {
            return;
        }

        let moved = other.data.len();
        self.data.append(&mut other.data);
        self.observer.on_storage_access(moved as u64);
        debug!("merging {} elements into heap of {}", moved, self.data.len() - moved);
        self.rebuild();
    }

    /// Removes every element
    pub fn clear(&mut self) {
        trace!("clearing heap of {} elements", self.data.len());
        self.data.clear();
    }

    /// Returns the backing vector in array (level) order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Drains the heap in ascending order
    ///
    /// # Time Complexity
    /// O(n log n)
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(item) = self.extract_min() {
            sorted.push(item);
        }
        sorted
    }

    /// Checks the heap order invariant for every element
    ///
    /// Uses the comparator directly; the observer is not notified.
    pub fn is_heap(&self) -> bool {
        sift::is_heap_by(self.data.len(), |a, b| {
            self.cmp.lt(&self.data[a], &self.data[b])
        })
    }

    fn rebuild(&mut self) {
        if self.data.len() > 1 {
            trace!("heapifying {} elements", self.data.len());
            sift::build(self);
        }
    }
}

impl<T, C: Comparator<T>, O: HeapObserver> SiftBuffer for MinHeap<T, C, O> {
    #[inline]
    fn slots(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        self.observer.on_comparison();
        self.observer.on_storage_access(2);
        self.cmp.lt(&self.data[a], &self.data[b])
    }

    #[inline]
    fn swap_slots(&mut self, a: usize, b: usize) {
        self.observer.on_swap();
        self.observer.on_storage_access(4);
        self.data.swap(a, b);
    }
}

impl<T, C, O> Heap<T> for MinHeap<T, C, O>
where
    C: Comparator<T> + Default,
    O: HeapObserver + Default,
{
    fn new() -> Self {
        Self::with_observer(C::default(), O::default())
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, item: T) {
        self.insert(item);
    }

    fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    fn pop(&mut self) -> Option<T> {
        self.extract_min().ok()
    }

    fn merge(&mut self, other: &mut Self) {
        MinHeap::merge(self, other);
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, C, O> fmt::Debug for MinHeap<T, C, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinHeap")
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

impl<T: Ord> From<Vec<T>> for MinHeap<T> {
    fn from(vec: Vec<T>) -> Self {
        Self::from_vec(vec)
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T, C: Comparator<T>, O: HeapObserver> Extend<T> for MinHeap<T, C, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T, C, O> IntoIterator for MinHeap<T, C, O> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    /// Yields the elements in array (level) order, not sorted order
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, C, O> IntoIterator for &'a MinHeap<T, C, O> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
