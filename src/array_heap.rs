//! Array-backed binary min-heap
//!
//! [`ArrayHeap`] stores its elements in a single `Vec` laid out as an implicit
//! binary tree: the children of index `i` live at `2i + 1` and `2i + 2`, and
//! every parent compares less than or equal to its children under the heap's
//! [`Compare`] strategy.
//!
//! Besides the usual insert / peek / extract-min, the heap removes elements at
//! an arbitrary index (or by value) in O(log n). The element moved into the
//! vacated slot comes from the end of the array, so it may belong either above
//! or below its new position: removal tries sift-down first and falls back to
//! sift-up only when sift-down left the element where it was.
//!
//! # Time Complexity
//!
//! | Operation     | Complexity        |
//! |---------------|-------------------|
//! | `insert`      | O(log n) amortized |
//! | `peek`        | O(1)              |
//! | `extract_min` | O(log n)          |
//! | `remove_at`   | O(log n)          |
//! | `remove`      | O(n)              |
//!
//! # Example
//!
//! ```rust
//! use rust_array_heap::Heap;
//! use rust_array_heap::array_heap::ArrayHeap;
//!
//! let mut heap = ArrayHeap::<i32>::new();
//! heap.insert(10).unwrap();
//! heap.insert(20).unwrap();
//! heap.insert(5).unwrap();
//!
//! assert_eq!(heap.peek(), Ok(&5));
//! assert_eq!(heap.extract_min(), Ok(5));
//! assert_eq!(heap.peek(), Ok(&10));
//! assert_eq!(heap.remove(&20), Ok(true));
//! assert_eq!(heap.len(), 1);
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::compare::{Compare, NaturalOrder};
use crate::traits::{Heap, HeapError};

/// Capacity of a heap built without an explicit capacity
pub const DEFAULT_CAPACITY: usize = 8;

/// A binary min-heap stored in a growable array
///
/// `C` decides the order. The default [`NaturalOrder`] uses the element's own
/// `PartialOrd`; [`with_comparator`](ArrayHeap::with_comparator) takes any
/// closure `Fn(&T, &T) -> Ordering` or other [`Compare`] strategy instead.
///
/// The backing storage starts at the requested capacity and doubles whenever
/// an insert finds it full. It never shrinks.
#[derive(Clone)]
pub struct ArrayHeap<T, C = NaturalOrder> {
    /// Live elements in heap order
    data: Vec<T>,
    cmp: C,
}

impl<T> ArrayHeap<T> {
    /// Creates an empty heap ordered by `T`'s natural order, with [`DEFAULT_CAPACITY`]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty heap ordered by `T`'s natural order
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, NaturalOrder)
    }
}

impl<T, C> ArrayHeap<T, C> {
    /// Creates an empty heap ordered by `cmp`, with [`DEFAULT_CAPACITY`]
    ///
    /// ```rust
    /// use rust_array_heap::Heap;
    /// use rust_array_heap::array_heap::ArrayHeap;
    ///
    /// let mut heap = ArrayHeap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// heap.insert(10).unwrap();
    /// heap.insert(20).unwrap();
    /// assert_eq!(heap.peek(), Ok(&20));
    /// ```
    pub fn with_comparator(cmp: C) -> Self {
        Self::with_capacity_and_comparator(DEFAULT_CAPACITY, cmp)
    }

    /// Creates an empty heap ordered by `cmp` with room for `capacity` elements
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of elements the heap holds before its storage has to grow
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// The ordering strategy this heap was built with
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// The live elements in heap order (not sorted)
    ///
    /// `as_slice()[0]` is the minimum, and every element compares greater than
    /// or equal to the one at `(i - 1) / 2`.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over the elements in heap order (not sorted)
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Drops every element, keeping the allocated capacity
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consumes the heap, returning its storage in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Builds a heap around storage that already satisfies the heap property
    pub(crate) fn from_raw_parts(data: Vec<T>, cmp: C) -> Self {
        Self { data, cmp }
    }

    /// Doubles the storage when it is full
    fn ensure_capacity(&mut self) {
        let capacity = self.data.capacity();
        if self.data.len() == capacity {
            self.data.reserve_exact(capacity.max(1));
            trace!(
                old_capacity = capacity,
                new_capacity = self.data.capacity(),
                "grew heap storage"
            );
        }
    }

    /// Moves the element at `from` up to its ancestor slot `to`, shifting the
    /// elements on the path between them down one level
    fn move_up(&mut self, mut from: usize, to: usize) {
        while from > to {
            let parent = (from - 1) / 2;
            self.data.swap(from, parent);
            from = parent;
        }
    }
}

impl<T, C: Compare<T>> ArrayHeap<T, C> {
    /// Inserts an element, rejecting `None`
    ///
    /// The new element is compared against its would-be ancestors before the
    /// storage is touched, so a failed comparison leaves the heap unchanged.
    ///
    /// # Errors
    /// - [`HeapError::InvalidArgument`] if `element` is `None`
    /// - [`HeapError::NotComparable`] if the element cannot be ordered against
    ///   an ancestor
    pub fn insert<E: Into<Option<T>>>(&mut self, element: E) -> Result<(), HeapError> {
        let Some(element) = element.into() else {
            debug!("rejected insert of an absent element");
            return Err(HeapError::InvalidArgument);
        };

        let slot = self.data.len();
        let target = self.sift_up_target(&element, slot).map_err(|err| {
            debug!(len = slot, error = %err, "rejected insert");
            err
        })?;

        self.ensure_capacity();
        self.data.push(element);
        self.move_up(slot, target);
        Ok(())
    }

    /// Returns the minimum element without removing it
    ///
    /// # Errors
    /// [`HeapError::EmptyCollection`] if the heap is empty.
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::EmptyCollection)
    }

    /// Removes and returns the minimum element
    ///
    /// # Errors
    /// - [`HeapError::EmptyCollection`] if the heap is empty
    /// - [`HeapError::NotComparable`] if restoring the heap needed a comparison
    ///   that has no answer; the heap is left unchanged
    pub fn extract_min(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::EmptyCollection);
        }
        self.remove_at(0)
    }

    /// Removes and returns the element at `index` in heap order
    ///
    /// The last element takes over the vacated slot and is sifted down; if it
    /// stays put it is sifted up instead. At most one of the two moves it.
    ///
    /// # Errors
    /// - [`HeapError::IndexOutOfRange`] unless `index < len()`
    /// - [`HeapError::NotComparable`] as for [`extract_min`](Self::extract_min)
    pub fn remove_at(&mut self, index: usize) -> Result<T, HeapError> {
        let len = self.data.len();
        if index >= len {
            debug!(index, len, "rejected remove_at: index out of range");
            return Err(HeapError::IndexOutOfRange { index, len });
        }

        let removed = self.data.swap_remove(index);
        if index < self.data.len() {
            if let Err(err) = self.restore_at(index) {
                // Undo the swap_remove; the slot it freed is still allocated.
                self.data.push(removed);
                let last = self.data.len() - 1;
                self.data.swap(index, last);
                debug!(index, len, error = %err, "rolled back remove_at");
                return Err(err);
            }
        }
        Ok(removed)
    }

    /// Removes the first element equal to `element`
    ///
    /// Returns `Ok(false)` without touching the heap when nothing matches.
    /// When several elements are equal, which one is removed is unspecified.
    ///
    /// # Errors
    /// - [`HeapError::InvalidArgument`] if `element` is `None`
    /// - [`HeapError::NotComparable`] as for [`remove_at`](Self::remove_at)
    pub fn remove<'a, E>(&mut self, element: E) -> Result<bool, HeapError>
    where
        T: PartialEq + 'a,
        E: Into<Option<&'a T>>,
    {
        let Some(element) = element.into() else {
            debug!("rejected remove of an absent element");
            return Err(HeapError::InvalidArgument);
        };

        match self.data.iter().position(|item| item == element) {
            Some(index) => self.remove_at(index).map(|_| true),
            None => Ok(false),
        }
    }

    /// Consumes the heap, returning its elements from smallest to largest
    ///
    /// # Errors
    /// [`HeapError::NotComparable`] if two elements cannot be ordered.
    pub fn into_sorted_vec(mut self) -> Result<Vec<T>, HeapError> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while !self.data.is_empty() {
            sorted.push(self.extract_min()?);
        }
        Ok(sorted)
    }

    /// Restores the heap property over the whole storage, bottom-up
    ///
    /// On error the storage holds the same elements in an unspecified order.
    pub(crate) fn heapify(&mut self) -> Result<(), HeapError> {
        for index in (0..self.data.len() / 2).rev() {
            self.sift_down(index)?;
        }
        Ok(())
    }

    fn compare(&self, a: &T, b: &T) -> Result<Ordering, HeapError> {
        self.cmp.compare(a, b).ok_or(HeapError::NotComparable)
    }

    /// Repairs the slot at `index` after a foreign element was moved into it
    fn restore_at(&mut self, index: usize) -> Result<(), HeapError> {
        if self.sift_down(index)? == index {
            let target = self.sift_up_target(&self.data[index], index)?;
            self.move_up(index, target);
        }
        Ok(())
    }

    /// Finds where `element` would settle if sifted up from `slot`
    ///
    /// Read-only: the caller moves the element once the target is known.
    fn sift_up_target(&self, element: &T, mut slot: usize) -> Result<usize, HeapError> {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.compare(element, &self.data[parent])? != Ordering::Less {
                break;
            }
            slot = parent;
        }
        Ok(slot)
    }

    /// Moves the element at `start` down to maintain the heap property,
    /// returning the index it settled at
    ///
    /// On error the element is moved back to `start`, leaving the storage as
    /// it was before the call.
    fn sift_down(&mut self, start: usize) -> Result<usize, HeapError> {
        let mut index = start;
        loop {
            match self.sift_down_step(index) {
                Ok(Some(child)) => {
                    self.data.swap(index, child);
                    index = child;
                }
                Ok(None) => return Ok(index),
                Err(err) => {
                    self.move_up(index, start);
                    return Err(err);
                }
            }
        }
    }

    /// The child the element at `index` must swap with, if any
    ///
    /// The smaller child is chosen, the left one on a tie.
    fn sift_down_step(&self, index: usize) -> Result<Option<usize>, HeapError> {
        let len = self.data.len();
        let left = 2 * index + 1;
        if left >= len {
            return Ok(None);
        }

        let right = left + 1;
        let mut smallest = left;
        if right < len && self.compare(&self.data[right], &self.data[left])? == Ordering::Less {
            smallest = right;
        }

        if self.compare(&self.data[smallest], &self.data[index])? == Ordering::Less {
            Ok(Some(smallest))
        } else {
            Ok(None)
        }
    }
}

impl<T, C: Compare<T>> Heap<T> for ArrayHeap<T, C> {
    fn is_empty(&self) -> bool {
        ArrayHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        ArrayHeap::len(self)
    }

    fn insert<E: Into<Option<T>>>(&mut self, element: E) -> Result<(), HeapError> {
        ArrayHeap::insert(self, element)
    }

    fn peek(&self) -> Result<&T, HeapError> {
        ArrayHeap::peek(self)
    }

    fn extract_min(&mut self) -> Result<T, HeapError> {
        ArrayHeap::extract_min(self)
    }

    fn remove_at(&mut self, index: usize) -> Result<T, HeapError> {
        ArrayHeap::remove_at(self, index)
    }

    fn remove<'a, E>(&mut self, element: E) -> Result<bool, HeapError>
    where
        T: PartialEq + 'a,
        E: Into<Option<&'a T>>,
    {
        ArrayHeap::remove(self, element)
    }
}

impl<T, C: Default> Default for ArrayHeap<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: fmt::Debug, C> fmt::Debug for ArrayHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayHeap")
            .field("data", &self.data)
            .field("capacity", &self.data.capacity())
            .finish_non_exhaustive()
    }
}
