//! Indexed binary min-heap with stable handles
//!
//! [`IndexedMinHeap`] has the same array layout and sift rules as
//! [`MinHeap`](crate::min_heap::MinHeap), but every element is also registered
//! in a [`SlotMap`] that maps a [`HeapHandle`] to the element's current array
//! position. Each swap updates both slots' entries, so a handle keeps pointing
//! at the same logical element however much the array is reshuffled.
//!
//! A handle is a generational slotmap key tagged with the id of the heap that
//! issued it. Once its element is extracted, or when it is presented to any
//! other heap, it is rejected with [`HeapError::InvalidHandle`] rather than
//! silently aliasing whatever element sits in the matching slot.
//!
//! # Time Complexity
//!
//! | Operation              | Complexity         |
//! |------------------------|--------------------|
//! | `insert`               | O(log n) amortized |
//! | `extract_min`          | O(log n)           |
//! | `peek`, `get`          | O(1)               |
//! | `decrease_key`         | O(log n)           |
//! | `merge`                | O(n + m)           |
//! | `from_vec_with_handles`| O(n)               |
//!
//! # Example
//!
//! ```rust
//! use rust_min_heap::indexed::IndexedMinHeap;
//!
//! let mut heap = IndexedMinHeap::new();
//! let a = heap.insert(40);
//! let b = heap.insert(10);
//! heap.insert(30);
//!
//! // Handles survive the reshuffling caused by other operations
//! assert_eq!(heap.extract_min(), Ok(10));
//! heap.decrease_key(&a, 5).unwrap();
//! assert_eq!(heap.peek(), Some(&5));
//! assert!(!heap.contains(&b));
//! ```

use crate::compare::{Comparator, NaturalOrder};
use crate::observer::{HeapObserver, NoopObserver};
use crate::sift::{self, SiftBuffer};
use crate::traits::{DecreaseKeyHeap, Handle, Heap, HeapError};
use log::{debug, trace};
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

new_key_type! {
    /// Key of an element in one heap's position map
    struct SlotKey;
}

/// Source of heap ids; every constructed or cloned heap takes the next one
static NEXT_HEAP_ID: AtomicU64 = AtomicU64::new(0);

fn next_heap_id() -> u64 {
    NEXT_HEAP_ID.fetch_add(1, Ordering::Relaxed)
}

/// Stable handle to an element of an [`IndexedMinHeap`]
///
/// Only the heap that issued a handle accepts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeapHandle {
    heap: u64,
    key: SlotKey,
}

impl Handle for HeapHandle {}

/// One array slot: the element and the key that tracks it
#[derive(Clone)]
struct Entry<T> {
    key: SlotKey,
    value: T,
}

/// A binary min-heap whose elements can be addressed by stable handles
///
/// A clone is a separate heap: it gets its own id, so handles issued by the
/// original are not valid on the clone (and vice versa).
pub struct IndexedMinHeap<T, C = NaturalOrder, O = NoopObserver> {
    /// Tag carried by every handle this heap issues
    id: u64,
    /// Heap-ordered slots
    entries: Vec<Entry<T>>,
    /// Key -> current index into `entries`
    positions: SlotMap<SlotKey, usize>,
    cmp: C,
    observer: O,
}

impl<T: Ord> IndexedMinHeap<T> {
    /// Creates an empty heap ordered by `T`'s `Ord` impl
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T, C: Comparator<T>> IndexedMinHeap<T, C> {
    /// Creates an empty heap ordered by `cmp`
    pub fn with_comparator(cmp: C) -> Self {
        Self::with_observer(cmp, NoopObserver)
    }
}

impl<T, C: Comparator<T>, O: HeapObserver> IndexedMinHeap<T, C, O> {
    /// Creates an empty heap that reports its work to `observer`
    pub fn with_observer(cmp: C, observer: O) -> Self {
        Self {
            id: next_heap_id(),
            entries: Vec::new(),
            positions: SlotMap::with_key(),
            cmp,
            observer,
        }
    }

    /// Builds a heap from an arbitrary vector in O(n)
    ///
    /// Returns the heap together with one handle per input value, in input
    /// order.
    pub fn from_vec_with_handles(values: Vec<T>, cmp: C, observer: O) -> (Self, Vec<HeapHandle>) {
        let mut heap = Self::with_observer(cmp, observer);
        heap.entries.reserve(values.len());
        let handles = values
            .into_iter()
            .map(|value| heap.push_entry(value))
            .collect();
        heap.rebuild();
        (heap, handles)
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the minimum element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.entries.first().map(|e| &e.value)
    }

    /// Returns the minimum element and its handle without removing it
    pub fn peek_with_handle(&self) -> Option<(HeapHandle, &T)> {
        self.entries
            .first()
            .map(|e| (self.handle_for(e.key), &e.value))
    }

    /// Returns the element behind `handle`, if it is still in this heap
    pub fn get(&self, handle: &HeapHandle) -> Option<&T> {
        let index = self.position(handle)?;
        Some(&self.entries[index].value)
    }

    /// Returns true if the element behind `handle` is still in this heap
    pub fn contains(&self, handle: &HeapHandle) -> bool {
        self.position(handle).is_some()
    }

    /// Returns the current array position of the element behind `handle`
    ///
    /// `None` if the element was extracted or the handle was issued by
    /// another heap. The position is only meaningful until the next mutation.
    pub fn position(&self, handle: &HeapHandle) -> Option<usize> {
        if handle.heap != self.id {
            return None;
        }
        self.positions.get(handle.key).copied()
    }

    /// Iterates over `(handle, element)` pairs in array (level) order
    pub fn iter(&self) -> impl Iterator<Item = (HeapHandle, &T)> + '_ {
        self.entries
            .iter()
            .map(|e| (self.handle_for(e.key), &e.value))
    }

    /// The comparator this heap is ordered by
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// The observer this heap reports to
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Inserts an element, returning its handle
    ///
    /// # Time Complexity
    /// O(log n) amortized
    pub fn insert(&mut self, value: T) -> HeapHandle {
        let handle = self.push_entry(value);
        self.observer.on_storage_access(1);
        let last = self.entries.len() - 1;
        sift::sift_up(self, last);
        handle
    }

    /// Removes and returns the minimum element
    ///
    /// # Errors
    /// `HeapError::Empty` if the heap has no elements.
    pub fn extract_min(&mut self) -> Result<T, HeapError> {
        self.extract_min_with_handle().map(|(_, value)| value)
    }

    /// Removes the minimum element, returning it with its (now stale) handle
    ///
    /// # Errors
    /// `HeapError::Empty` if the heap has no elements.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn extract_min_with_handle(&mut self) -> Result<(HeapHandle, T), HeapError> {
        if self.entries.is_empty() {
            return Err(HeapError::Empty);
        }

        self.observer.on_storage_access(1);
        let root = if self.entries.len() == 1 {
            self.entries.swap_remove(0)
        } else {
            self.observer.on_storage_access(2);
            let root = self.entries.swap_remove(0);
            self.positions[self.entries[0].key] = 0;
            sift::sift_down(self, 0);
            root
        };

        self.positions.remove(root.key);
        Ok((self.handle_for(root.key), root.value))
    }

    /// Lowers the value of the element behind `handle`
    ///
    /// # Errors
    /// - `HeapError::InvalidHandle` if the element is no longer in the heap,
    ///   or the handle was issued by another heap
    /// - `HeapError::KeyIncreased` if `new_value` compares greater than the
    ///   current value
    ///
    /// On error, the heap is untouched.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn decrease_key(&mut self, handle: &HeapHandle, new_value: T) -> Result<(), HeapError> {
        let index = self
            .position(handle)
            .ok_or(HeapError::InvalidHandle)?;
        self.decrease_key_at(index, new_value)
    }

    /// Lowers the value at array position `index`
    ///
    /// Lower-level escape hatch with the same contract as
    /// [`MinHeap::decrease_key`](crate::min_heap::MinHeap::decrease_key);
    /// prefer [`decrease_key`](Self::decrease_key).
    ///
    /// # Errors
    /// - `HeapError::IndexOutOfRange` if `index >= len()`
    /// - `HeapError::KeyIncreased` if `new_value` compares greater than the
    ///   current value
    pub fn decrease_key_at(&mut self, index: usize, new_value: T) -> Result<(), HeapError> {
        let len = self.entries.len();
        let current = self
            .entries
            .get(index)
            .ok_or(HeapError::IndexOutOfRange { index, len })?;

        self.observer.on_comparison();
        self.observer.on_storage_access(1);
        if self.cmp.lt(&current.value, &new_value) {
            return Err(HeapError::KeyIncreased);
        }

        self.entries[index].value = new_value;
        self.observer.on_storage_access(1);
        sift::sift_up(self, index);
        Ok(())
    }

    /// Moves every element of `other` into this heap, leaving `other` empty
    ///
    /// Like [`MinHeap::merge`](crate::min_heap::MinHeap::merge), the arrays are
    /// concatenated and rebuilt bottom-up. Handles of `other` do not carry
    /// over; the returned map translates each of them to the element's new
    /// handle in `self`.
    ///
    /// # Time Complexity
    /// O(n + m)
    pub fn merge(&mut self, other: &mut Self) -> FxHashMap<HeapHandle, HeapHandle> {
        let mut remap = FxHashMap::default();
        if other.entries.is_empty() {
            return remap;
        }

        let moved = other.entries.len();
        let other_id = other.id;
        remap.reserve(moved);
        self.entries.reserve(moved);
        for entry in other.entries.drain(..) {
            let new_handle = self.push_entry(entry.value);
            remap.insert(HeapHandle { heap: other_id, key: entry.key }, new_handle);
        }
        other.positions.clear();
        self.observer.on_storage_access(moved as u64);

        debug!("merging {} elements into indexed heap of {}", moved, self.entries.len() - moved);
        self.rebuild();
        remap
    }

    /// Removes every element; all outstanding handles become invalid
    pub fn clear(&mut self) {
        trace!("clearing indexed heap of {} elements", self.entries.len());
        self.entries.clear();
        self.positions.clear();
    }

    /// Checks heap order for every element and that every handle maps to the
    /// slot holding it
    ///
    /// Uses the comparator directly; the observer is not notified.
    pub fn is_heap(&self) -> bool {
        let ordered = sift::is_heap_by(self.entries.len(), |a, b| {
            self.cmp.lt(&self.entries[a].value, &self.entries[b].value)
        });
        ordered
            && self.positions.len() == self.entries.len()
            && self
                .entries
                .iter()
                .enumerate()
                .all(|(i, e)| self.positions.get(e.key) == Some(&i))
    }

    /// Appends an entry at the tail without restoring heap order
    fn push_entry(&mut self, value: T) -> HeapHandle {
        let index = self.entries.len();
        let key = self.positions.insert(index);
        self.entries.push(Entry { key, value });
        self.handle_for(key)
    }

    fn handle_for(&self, key: SlotKey) -> HeapHandle {
        HeapHandle { heap: self.id, key }
    }

    fn rebuild(&mut self) {
        if self.entries.len() > 1 {
            trace!("heapifying {} indexed elements", self.entries.len());
            sift::build(self);
        }
    }
}

impl<T, C: Comparator<T>, O: HeapObserver> SiftBuffer for IndexedMinHeap<T, C, O> {
    #[inline]
    fn slots(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        self.observer.on_comparison();
        self.observer.on_storage_access(2);
        self.cmp.lt(&self.entries[a].value, &self.entries[b].value)
    }

    #[inline]
    fn swap_slots(&mut self, a: usize, b: usize) {
        self.observer.on_swap();
        self.observer.on_storage_access(4);
        self.entries.swap(a, b);
        self.positions[self.entries[a].key] = a;
        self.positions[self.entries[b].key] = b;
    }
}

impl<T, C, O> Heap<T> for IndexedMinHeap<T, C, O>
where
    C: Comparator<T> + Default,
    O: HeapObserver + Default,
{
    fn new() -> Self {
        Self::with_observer(C::default(), O::default())
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn push(&mut self, item: T) {
        self.insert(item);
    }

    fn peek(&self) -> Option<&T> {
        self.entries.first().map(|e| &e.value)
    }

    fn pop(&mut self) -> Option<T> {
        self.extract_min().ok()
    }

    fn merge(&mut self, other: &mut Self) {
        IndexedMinHeap::merge(self, other);
    }
}

impl<T, C, O> DecreaseKeyHeap<T> for IndexedMinHeap<T, C, O>
where
    C: Comparator<T> + Default,
    O: HeapObserver + Default,
{
    type Handle = HeapHandle;

    fn push_with_handle(&mut self, item: T) -> HeapHandle {
        self.insert(item)
    }

    fn decrease_key(&mut self, handle: &HeapHandle, new_value: T) -> Result<(), HeapError> {
        IndexedMinHeap::decrease_key(self, handle, new_value)
    }
}

impl<T: Ord> Default for IndexedMinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, C: Clone, O: Clone> Clone for IndexedMinHeap<T, C, O> {
    fn clone(&self) -> Self {
        Self {
            id: next_heap_id(),
            entries: self.entries.clone(),
            positions: self.positions.clone(),
            cmp: self.cmp.clone(),
            observer: self.observer.clone(),
        }
    }
}

impl<T: fmt::Debug, C, O> fmt::Debug for IndexedMinHeap<T, C, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|e| (e.key, &e.value)))
            .finish()
    }
}
