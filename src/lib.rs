//! Array-Backed Binary Heap for Rust
//!
//! This crate provides a binary min-heap priority queue stored in a single
//! growable array, ordered either by the element type's natural order or by a
//! comparator supplied at construction.
//!
//! # Features
//!
//! - **Pluggable ordering**: natural order, any `Fn(&T, &T) -> Ordering`, or a reversal of either
//! - **Arbitrary removal**: remove by index or by value in O(log n) after locating the element
//! - **No partial mutation**: every failed operation leaves the heap exactly as it was
//! - **Doubling growth**: storage starts at 8 slots (or a chosen capacity) and doubles when full
//!
//! # Example
//!
//! ```rust
//! use rust_array_heap::array_heap::ArrayHeap;
//! use rust_array_heap::HeapError;
//!
//! let mut heap = ArrayHeap::<i32>::new();
//! heap.insert(10).unwrap();
//! heap.insert(20).unwrap();
//! heap.insert(5).unwrap();
//! heap.insert(30).unwrap();
//!
//! assert_eq!(heap.remove_at(0), Ok(5));
//! assert_eq!(heap.peek(), Ok(&10));
//! assert_eq!(heap.insert(None), Err(HeapError::InvalidArgument));
//! ```

pub mod array_heap;
pub mod builder;
pub mod compare;
pub mod stdlib_compat;
pub mod traits;

// Re-export the main types for convenience
pub use array_heap::{ArrayHeap, DEFAULT_CAPACITY};
pub use compare::{Compare, NaturalOrder, Reversed};
pub use traits::{Heap, HeapError};
