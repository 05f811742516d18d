//! Common traits for heap data structures
//!
//! This module provides the operation surface shared by every heap in the crate:
//!
//! - [`Heap`]: insert, inspect and remove elements, plus size queries
//! - [`HeapError`]: the error returned by every fallible heap operation
//!
//! Unlike `std::collections::BinaryHeap`, the element itself is the priority and
//! the heap is a min-heap: [`Heap::peek`] and [`Heap::extract_min`] return the
//! element that compares smallest under the heap's ordering.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// An absent element (`None`) was passed where an element is required
    InvalidArgument,
    /// The heap has no elements to inspect or remove
    EmptyCollection,
    /// The index does not name a live element
    IndexOutOfRange {
        /// The rejected index
        index: usize,
        /// Number of live elements at the time of the call
        len: usize,
    },
    /// Two elements have no defined order under the heap's ordering
    NotComparable,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::InvalidArgument => write!(f, "element cannot be absent"),
            HeapError::EmptyCollection => write!(f, "priority queue is empty"),
            HeapError::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for heap of length {len}")
            }
            HeapError::NotComparable => {
                write!(f, "elements have no defined order and no comparator orders them")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for priority queues that store their elements directly
///
/// Every operation that can fail returns a [`HeapError`] and leaves the heap
/// exactly as it was before the call.
///
/// # Example
///
/// ```rust
/// use rust_array_heap::Heap;
/// use rust_array_heap::array_heap::ArrayHeap;
///
/// let mut heap = ArrayHeap::<i32>::new();
/// heap.insert(3).unwrap();
/// heap.insert(1).unwrap();
/// heap.insert(2).unwrap();
///
/// assert_eq!(heap.peek(), Ok(&1));
/// assert_eq!(heap.extract_min(), Ok(1));
/// ```
pub trait Heap<T> {
    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// Accepts either a `T` or an `Option<T>`; `None` is rejected with
    /// [`HeapError::InvalidArgument`].
    ///
    /// # Time Complexity
    /// O(log n), plus an O(n) copy when the backing storage grows.
    fn insert<E: Into<Option<T>>>(&mut self, element: E) -> Result<(), HeapError>;

    /// Returns the minimum element without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyCollection`] if the heap is empty.
    fn peek(&self) -> Result<&T, HeapError>;

    /// Removes and returns the minimum element
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyCollection`] if the heap is empty.
    ///
    /// # Time Complexity
    /// O(log n)
    fn extract_min(&mut self) -> Result<T, HeapError>;

    /// Removes and returns the element stored at `index` in heap order
    ///
    /// # Errors
    /// Returns [`HeapError::IndexOutOfRange`] unless `index < len()`.
    ///
    /// # Time Complexity
    /// O(log n)
    fn remove_at(&mut self, index: usize) -> Result<T, HeapError>;

    /// Removes the first element equal to `element`, returning whether one was found
    ///
    /// Equality is `PartialEq`, not the heap's ordering.
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArgument`] if `element` is `None`.
    ///
    /// # Time Complexity
    /// O(n) for the scan, O(log n) for the removal.
    fn remove<'a, E>(&mut self, element: E) -> Result<bool, HeapError>
    where
        T: PartialEq + 'a,
        E: Into<Option<&'a T>>;
}
