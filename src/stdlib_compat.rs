//! Standard library compatibility layer
//!
//! Conversions between [`ArrayHeap`] and std collection types.
//!
//! # Differences from BinaryHeap
//!
//! - **Min-heap vs Max-heap**: `ArrayHeap` is a min-heap, while `BinaryHeap` is a
//!   max-heap. Use [`NaturalOrder::reversed`](crate::compare::NaturalOrder::reversed)
//!   to get max-heap behavior.
//! - **Fallible conversion**: building a heap from a `Vec` compares elements,
//!   and a comparison can fail, so it is `TryFrom` rather than `From`.
//!
//! # Example
//!
//! ```rust
//! use rust_array_heap::array_heap::ArrayHeap;
//!
//! let heap: ArrayHeap<i32> = ArrayHeap::try_from(vec![5, 3, 7]).unwrap();
//! assert_eq!(heap.peek(), Ok(&3));
//!
//! let mut items: Vec<i32> = heap.into();
//! items.sort();
//! assert_eq!(items, vec![3, 5, 7]);
//! ```

use tracing::debug;

use crate::array_heap::{ArrayHeap, DEFAULT_CAPACITY};
use crate::compare::NaturalOrder;
use crate::traits::HeapError;

impl<T: PartialOrd> TryFrom<Vec<T>> for ArrayHeap<T> {
    type Error = HeapError;

    /// Heapifies `items` in place in O(n)
    ///
    /// The storage is grown to at least [`DEFAULT_CAPACITY`] so the result
    /// follows the same doubling schedule as a heap built with `new`.
    fn try_from(mut items: Vec<T>) -> Result<Self, Self::Error> {
        if items.capacity() < DEFAULT_CAPACITY {
            items.reserve_exact(DEFAULT_CAPACITY - items.len());
        }

        let len = items.len();
        let mut heap = ArrayHeap::from_raw_parts(items, NaturalOrder);
        heap.heapify().map_err(|err| {
            debug!(len, error = %err, "rejected heap conversion");
            err
        })?;
        Ok(heap)
    }
}

impl<T, C> From<ArrayHeap<T, C>> for Vec<T> {
    /// Returns the elements in heap order (not sorted)
    fn from(heap: ArrayHeap<T, C>) -> Self {
        heap.into_vec()
    }
}

impl<T, C> IntoIterator for ArrayHeap<T, C> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    /// Iterates in heap order (not sorted)
    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T, C> IntoIterator for &'a ArrayHeap<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
