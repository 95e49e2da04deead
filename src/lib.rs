//! Mergeable Heap Data Structures for Rust
//!
//! This crate provides min-heaps whose distinguishing operation is an
//! efficient union: merging two heaps costs O(log n) instead of one insert per
//! element.
//!
//! # Features
//!
//! - **Binomial Heap**: O(log n) worst-case insert, delete-min and merge
//! - **Leftist Heap**: O(log n) worst-case insert, delete-min and merge; O(1) find-min
//! - **Skew Heap**: O(log n) amortized insert, delete-min and merge; O(1) find-min
//!
//! Merging moves nodes from one heap into the other. The donor is consumed
//! (or, with [`MergeableHeap::merge_from`], left empty and reusable); no node
//! is ever shared between two heaps.
//!
//! # Example
//!
//! ```rust
//! use mergeable_heaps::binomial::BinomialHeap;
//! use mergeable_heaps::MergeableHeap;
//!
//! let mut heap = BinomialHeap::new();
//! heap.push(5);
//! heap.push(3);
//! heap.push(8);
//!
//! let mut other = BinomialHeap::singleton(1);
//! other.merge(heap);
//! assert_eq!(other.get_minimum(), Ok(&1));
//! assert_eq!(other.len(), 4);
//! ```

pub mod binomial;
pub mod dynamic;
pub mod leftist;
pub mod meld;
pub mod naive;
pub mod pool;
pub mod skew;
pub mod traits;

// Re-export the main traits for convenience
pub use dynamic::{DynHeap, HeapKind};
pub use pool::HeapPool;
pub use traits::{HeapError, InvariantViolation, MergeableHeap};
