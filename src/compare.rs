//! Ordering strategies for heaps
//!
//! A heap never compares elements directly; it asks its [`Compare`] strategy.
//! Three strategies are provided:
//!
//! - [`NaturalOrder`]: the element type's own `PartialOrd` (the default)
//! - any closure `Fn(&T, &T) -> Ordering`
//! - [`Reversed`]: flips another strategy, turning a min-heap into a max-heap
//!
//! A strategy returns `None` when it cannot order a pair. The heap reports that
//! as [`HeapError::NotComparable`](crate::HeapError::NotComparable) at the
//! comparison where it happens, so construction never fails.
//!
//! # Example
//!
//! ```rust
//! use std::cmp::Ordering;
//! use rust_array_heap::compare::{Compare, NaturalOrder, Reversed};
//!
//! assert_eq!(NaturalOrder.compare(&1, &2), Some(Ordering::Less));
//! assert_eq!(NaturalOrder.reversed().compare(&1, &2), Some(Ordering::Greater));
//! assert_eq!(NaturalOrder.compare(&f64::NAN, &1.0), None);
//!
//! let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
//! assert_eq!(by_len.compare(&"abc", &"z"), Some(Ordering::Greater));
//! assert_eq!(Reversed(by_len).compare(&"abc", &"z"), Some(Ordering::Less));
//! ```

use std::cmp::Ordering;

/// A comparison strategy over `T`
pub trait Compare<T: ?Sized> {
    /// Compares `a` with `b`, or returns `None` if the pair has no defined order
    fn compare(&self, a: &T, b: &T) -> Option<Ordering>;
}

/// Orders elements by their own `PartialOrd` implementation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl NaturalOrder {
    /// Largest-first ordering
    pub const fn reversed(self) -> Reversed<Self> {
        Reversed(self)
    }
}

impl<T: PartialOrd + ?Sized> Compare<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Option<Ordering> {
        a.partial_cmp(b)
    }
}

/// Inverts the wrapped strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<C> Reversed<C> {
    /// Unwraps the original strategy, undoing the reversal
    pub fn into_inner(self) -> C {
        self.0
    }
}

impl<T: ?Sized, C: Compare<T>> Compare<T> for Reversed<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Option<Ordering> {
        self.0.compare(b, a)
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Option<Ordering> {
        Some(self(a, b))
    }
}
