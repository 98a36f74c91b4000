//! Comparators: the total order a heap is built on
//!
//! A heap never inspects its elements at runtime; it only asks its comparator.
//! [`NaturalOrder`] uses the element's `Ord` impl, any
//! `Fn(&T, &T) -> Ordering` closure works as an ad-hoc order, and
//! [`ReverseOrder`] flips an existing order.
//!
//! The comparator must describe a consistent total order. An inconsistent
//! comparator cannot cause memory unsafety, but the heap order it produces is
//! unspecified.
//!
//! # Example
//!
//! ```rust
//! use rust_min_heap::compare::ReverseOrder;
//! use rust_min_heap::min_heap::MinHeap;
//! use rust_min_heap::NaturalOrder;
//!
//! // A max-heap is a min-heap under the reversed order
//! let mut heap = MinHeap::with_comparator(ReverseOrder(NaturalOrder));
//! heap.insert(1);
//! heap.insert(9);
//! heap.insert(4);
//! assert_eq!(heap.extract_min(), Ok(9));
//! ```

use std::cmp::Ordering;

/// A total order over `T`
pub trait Comparator<T: ?Sized> {
    /// Compares two elements
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns true if `a` is strictly less than `b`
    #[inline]
    fn lt(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// Returns true if `a` is less than or equal to `b`
    #[inline]
    fn le(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) != Ordering::Greater
    }
}

/// The element type's own `Ord` order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Flips the wrapped comparator; turns the min-heap into a max-heap
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReverseOrder<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for ReverseOrder<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
