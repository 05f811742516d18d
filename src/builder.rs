//! Construction-time configuration for heaps.
//!
//! A heap's capacity and ordering are fixed when it is built. [`HeapBuilder`]
//! collects both and hands out as many identically configured heaps as needed.
//!
//! ## Example
//!
//! ```rust
//! use rust_array_heap::builder::HeapBuilder;
//!
//! let builder = HeapBuilder::new().capacity(32).reversed();
//!
//! let mut heap = builder.build::<u32>();
//! heap.insert(3).unwrap();
//! heap.insert(9).unwrap();
//! assert_eq!(heap.peek(), Ok(&9));
//! assert_eq!(heap.capacity(), 32);
//! ```

use crate::array_heap::{ArrayHeap, DEFAULT_CAPACITY};
use crate::compare::{NaturalOrder, Reversed};

/// Builder for [`ArrayHeap`]
#[derive(Debug, Clone, Copy)]
pub struct HeapBuilder<C = NaturalOrder> {
    capacity: usize,
    cmp: C,
}

impl HeapBuilder {
    /// Natural order, [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            cmp: NaturalOrder,
        }
    }
}

impl Default for HeapBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> HeapBuilder<C> {
    /// Sets the initial capacity of built heaps.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Replaces the ordering strategy.
    pub fn comparator<D>(self, cmp: D) -> HeapBuilder<D> {
        HeapBuilder {
            capacity: self.capacity,
            cmp,
        }
    }

    /// Flips the current ordering strategy.
    pub fn reversed(self) -> HeapBuilder<Reversed<C>> {
        HeapBuilder {
            capacity: self.capacity,
            cmp: Reversed(self.cmp),
        }
    }

    /// Initial capacity built heaps start with.
    pub fn initial_capacity(&self) -> usize {
        self.capacity
    }

    /// Builds an empty heap, consuming the builder.
    pub fn into_heap<T>(self) -> ArrayHeap<T, C> {
        ArrayHeap::with_capacity_and_comparator(self.capacity, self.cmp)
    }

    /// Builds an empty heap, keeping the builder for reuse.
    pub fn build<T>(&self) -> ArrayHeap<T, C>
    where
        C: Clone,
    {
        self.clone().into_heap()
    }
}
