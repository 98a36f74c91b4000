//! Operation observers
//!
//! A heap reports three kinds of events to its observer while it works:
//! comparator calls, element swaps, and element reads/writes on the backing
//! storage. The observer is chosen when the heap is constructed, so heaps in
//! different contexts never share a counter by accident.
//!
//! Observers are purely advisory: a heap behaves identically whichever
//! observer it carries. [`NoopObserver`] is the default and compiles away.
//!
//! # Accounting
//!
//! | Event | comparisons | swaps | storage accesses |
//! |-------|-------------|-------|------------------|
//! | comparator call during a sift | 1 | 0 | 2 |
//! | swap of two slots | 0 | 1 | 4 |
//! | `insert` append | 0 | 0 | 1 |
//! | `extract_min` | 0 | 0 | 1 (+2 when more than one element) |
//! | `decrease_key` validation + overwrite | 1 | 0 | 2 |
//! | `merge` | 0 | 0 | one per moved element |
//!
//! These are the only rules: no other event (entering a sift, the `merge`
//! bookkeeping) is counted, so figures from tools with a different
//! accounting are not directly comparable.
//!
//! # Example
//!
//! ```rust
//! use rust_min_heap::min_heap::MinHeap;
//! use rust_min_heap::observer::OperationCounters;
//! use rust_min_heap::NaturalOrder;
//!
//! let counters = OperationCounters::new();
//! let mut heap = MinHeap::with_observer(NaturalOrder, &counters);
//! heap.insert(2);
//! heap.insert(1);
//!
//! assert_eq!(counters.comparisons(), 1);
//! assert_eq!(counters.swaps(), 1);
//! assert_eq!(counters.storage_accesses(), 8);
//! ```

use std::cell::Cell;
use std::fmt;
use std::ops::Sub;
use std::rc::Rc;

/// Receives instrumentation events from a heap
///
/// All methods are invoked synchronously from inside the heap operation and
/// must not touch the heap. Every method defaults to doing nothing.
pub trait HeapObserver {
    /// One comparator call was made
    #[inline]
    fn on_comparison(&self) {}

    /// Two slots of the backing storage were exchanged
    #[inline]
    fn on_swap(&self) {}

    /// `count` element reads/writes were made on the backing storage
    #[inline]
    fn on_storage_access(&self, count: u64) {
        let _ = count;
    }
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopObserver;

impl HeapObserver for NoopObserver {}

impl<O: HeapObserver + ?Sized> HeapObserver for &O {
    #[inline]
    fn on_comparison(&self) {
        (**self).on_comparison()
    }

    #[inline]
    fn on_swap(&self) {
        (**self).on_swap()
    }

    #[inline]
    fn on_storage_access(&self, count: u64) {
        (**self).on_storage_access(count)
    }
}

impl<O: HeapObserver + ?Sized> HeapObserver for Rc<O> {
    #[inline]
    fn on_comparison(&self) {
        (**self).on_comparison()
    }

    #[inline]
    fn on_swap(&self) {
        (**self).on_swap()
    }

    #[inline]
    fn on_storage_access(&self, count: u64) {
        (**self).on_storage_access(count)
    }
}

/// Counts comparisons, swaps, and storage accesses
///
/// The counters use interior mutability so a single instance can be observed
/// by reference (`&OperationCounters`) or shared through an `Rc` while the
/// caller keeps reading it. Not `Sync`: like the heap itself, it is meant for
/// one thread.
#[derive(Debug, Clone, Default)]
pub struct OperationCounters {
    comparisons: Cell<u64>,
    swaps: Cell<u64>,
    storage_accesses: Cell<u64>,
}

impl OperationCounters {
    /// Creates a set of counters, all at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of comparator calls observed
    pub fn comparisons(&self) -> u64 {
        self.comparisons.get()
    }

    /// Number of swaps observed
    pub fn swaps(&self) -> u64 {
        self.swaps.get()
    }

    /// Number of element reads/writes observed
    pub fn storage_accesses(&self) -> u64 {
        self.storage_accesses.get()
    }

    /// Sets every counter back to zero
    pub fn reset(&self) {
        self.comparisons.set(0);
        self.swaps.set(0);
        self.storage_accesses.set(0);
    }

    /// Copies the current counter values
    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            comparisons: self.comparisons(),
            swaps: self.swaps(),
            storage_accesses: self.storage_accesses(),
        }
    }
}

impl HeapObserver for OperationCounters {
    #[inline]
    fn on_comparison(&self) {
        self.comparisons.set(self.comparisons.get() + 1);
    }

    #[inline]
    fn on_swap(&self) {
        self.swaps.set(self.swaps.get() + 1);
    }

    #[inline]
    fn on_storage_access(&self, count: u64) {
        self.storage_accesses
            .set(self.storage_accesses.get() + count);
    }
}

/// Counter values captured at one point in time
///
/// Subtracting two snapshots yields the work done between them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CounterSnapshot {
    /// Comparator calls
    pub comparisons: u64,
    /// Swaps
    pub swaps: u64,
    /// Element reads/writes
    pub storage_accesses: u64,
}

impl Sub for CounterSnapshot {
    type Output = CounterSnapshot;

    fn sub(self, earlier: CounterSnapshot) -> CounterSnapshot {
        CounterSnapshot {
            comparisons: self.comparisons.saturating_sub(earlier.comparisons),
            swaps: self.swaps.saturating_sub(earlier.swaps),
            storage_accesses: self
                .storage_accesses
                .saturating_sub(earlier.storage_accesses),
        }
    }
}

impl fmt::Display for CounterSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Comparisons={}, Swaps={}, ArrayAccesses={}",
            self.comparisons, self.swaps, self.storage_accesses
        )
    }
}
