//! Common traits for mergeable heap data structures
//!
//! This module provides the contract shared by every heap in the crate:
//!
//! - [`MergeableHeap`]: the typed contract (insert, find-min, extract-min, merge)
//! - [`HeapError`]: the error taxonomy reported by fallible operations
//! - [`InvariantViolation`]: what `check_invariants` reports when a structure is corrupt
//!
//! The typed contract makes two misuse cases unrepresentable: merging a heap
//! into itself needs two `&mut` borrows of the same value, and merging two
//! different variants does not type-check. Both are still reported as
//! [`HeapError`]s at the dynamic boundaries ([`crate::dynamic`], [`crate::pool`]).

use std::fmt;
use std::mem;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeapError {
    /// The heap holds no elements
    EmptyHeap,
    /// The merge operand is a different heap variant
    WrongHeapType,
    /// The merge operand is the receiver itself
    SelfMerge,
    /// The size of the heap is not tracked (binomial forest)
    RestrictedMethod,
    /// No heap is stored at this index of a pool
    NoSuchHeap(usize),
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::EmptyHeap => write!(f, "heap is empty"),
            HeapError::WrongHeapType => write!(f, "can't merge different types of heaps"),
            HeapError::SelfMerge => write!(f, "can't merge a heap into itself"),
            HeapError::RestrictedMethod => {
                write!(f, "size of this heap is not tracked until it is merged into a sized heap")
            }
            HeapError::NoSuchHeap(index) => write!(f, "no heap at index {}", index),
        }
    }
}

impl std::error::Error for HeapError {}

/// A broken structural invariant, reported by `check_invariants`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A child key is smaller than its parent's key
    HeapOrder,
    /// A variant-specific shape rule does not hold
    Shape(&'static str),
    /// The tracked size differs from the number of reachable nodes
    SizeMismatch { tracked: usize, counted: usize },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantViolation::HeapOrder => write!(f, "child key is less than its parent's key"),
            InvariantViolation::Shape(rule) => write!(f, "shape invariant violated: {}", rule),
            InvariantViolation::SizeMismatch { tracked, counted } => write!(
                f,
                "tracked size {} but {} nodes are reachable",
                tracked, counted
            ),
        }
    }
}

impl std::error::Error for InvariantViolation {}

/// Contract of every mergeable min-heap in this crate
///
/// Keys only need a total order. Equal keys may come out in any order.
///
/// # Example
///
/// ```rust
/// use mergeable_heaps::MergeableHeap;
/// use mergeable_heaps::leftist::LeftistHeap;
///
/// let mut a = LeftistHeap::new();
/// a.push(5);
/// a.push(3);
///
/// let mut b = LeftistHeap::singleton(1);
/// b.merge_from(&mut a);
///
/// assert!(a.is_empty());
/// assert_eq!(b.len(), 3);
/// assert_eq!(b.pop(), Some(1));
/// assert_eq!(b.pop(), Some(3));
/// ```
pub trait MergeableHeap<K: Ord>: Sized {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Creates a heap holding exactly one key
    fn singleton(key: K) -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of keys in the heap
    fn len(&self) -> usize;

    /// Inserts a key
    ///
    /// Tree-based heaps implement this as merging in a singleton heap.
    fn push(&mut self, key: K);

    /// Returns the minimum key without removing it
    fn peek(&self) -> Option<&K>;

    /// Removes and returns the minimum key
    fn pop(&mut self) -> Option<K>;

    /// Merges another heap into this one, consuming the other heap
    ///
    /// # Time Complexity
    /// O(log n) for all tree variants (amortized for skew heaps).
    fn merge(&mut self, other: Self);

    /// Verifies heap order, the variant's shape rules and the size counter
    ///
    /// Walks the whole structure: O(n).
    fn check_invariants(&self) -> Result<(), InvariantViolation>;

    /// Alias of [`push`](Self::push)
    fn insert(&mut self, key: K) {
        self.push(key)
    }

    /// Returns the minimum key, or [`HeapError::EmptyHeap`]
    fn get_minimum(&self) -> Result<&K, HeapError> {
        self.peek().ok_or(HeapError::EmptyHeap)
    }

    /// Removes and returns the minimum key, or [`HeapError::EmptyHeap`]
    ///
    /// On error the heap is left untouched.
    fn extract_minimum(&mut self) -> Result<K, HeapError> {
        self.pop().ok_or(HeapError::EmptyHeap)
    }

    /// Moves every key of `other` into this heap
    ///
    /// `other` is left as a valid empty heap that can be reused.
    fn merge_from(&mut self, other: &mut Self) {
        let donor = mem::replace(other, Self::new());
        self.merge(donor);
    }
}
