//! Sift-up, sift-down, and bottom-up build over an array-backed binary tree
//!
//! For a node at index `i`: parent is `(i - 1) / 2`, children are `2i + 1`
//! and `2i + 2`. Both heap types in this crate drive these routines through
//! [`SiftBuffer`], which is where comparisons and swaps get reported to the
//! observer (and, for the indexed heap, where handle positions get updated).

/// Slot-level access the sift routines need
pub(crate) trait SiftBuffer {
    /// Number of live slots
    fn slots(&self) -> usize;

    /// Returns true if slot `a` is strictly less than slot `b`
    fn less(&self, a: usize, b: usize) -> bool;

    /// Exchanges slots `a` and `b`
    fn swap_slots(&mut self, a: usize, b: usize);
}

#[inline]
pub(crate) fn parent(index: usize) -> usize {
    (index - 1) / 2
}

#[inline]
pub(crate) fn left_child(index: usize) -> usize {
    2 * index + 1
}

#[inline]
pub(crate) fn right_child(index: usize) -> usize {
    2 * index + 2
}

/// Move the slot at `index` toward the root until its parent is not greater
///
/// Returns the slot's final index.
pub(crate) fn sift_up<B: SiftBuffer + ?Sized>(buf: &mut B, mut index: usize) -> usize {
    while index > 0 {
        let p = parent(index);
        if buf.less(index, p) {
            buf.swap_slots(index, p);
            index = p;
        } else {
            break;
        }
    }
    index
}

/// Move the slot at `index` toward the leaves until no child is smaller
///
/// The left child is tested first and the right child only replaces the
/// candidate when strictly smaller, so equal children resolve to the left.
/// Returns the slot's final index.
pub(crate) fn sift_down<B: SiftBuffer + ?Sized>(buf: &mut B, mut index: usize) -> usize {
    let len = buf.slots();
    loop {
        let left = left_child(index);
        let right = right_child(index);
        let mut smallest = index;

        if left < len && buf.less(left, smallest) {
            smallest = left;
        }
        if right < len && buf.less(right, smallest) {
            smallest = right;
        }

        if smallest == index {
            return index;
        }
        buf.swap_slots(index, smallest);
        index = smallest;
    }
}

/// Bottom-up heapify: sift down every internal node, last one first
pub(crate) fn build<B: SiftBuffer + ?Sized>(buf: &mut B) {
    let len = buf.slots();
    for index in (0..len / 2).rev() {
        sift_down(buf, index);
    }
}

/// Checks heap order for every non-root slot
pub(crate) fn is_heap_by<F>(len: usize, mut less: F) -> bool
where
    F: FnMut(usize, usize) -> bool,
{
    (1..len).all(|i| !less(i, parent(i)))
}
