//! Reference heap backed by an ordered multiset
//!
//! [`NaiveHeap`] stores keys in a `BTreeSet`, tagging each with an insertion
//! sequence number so that equal keys can coexist. It is the oracle that the
//! tree-based heaps are checked against: every operation is a direct set
//! operation, so its behaviour is easy to trust.

use crate::traits::{InvariantViolation, MergeableHeap};
use std::collections::BTreeSet;

/// Min-heap over an ordered multiset
///
/// # Example
///
/// ```rust
/// use mergeable_heaps::naive::NaiveHeap;
/// use mergeable_heaps::MergeableHeap;
///
/// let mut heap = NaiveHeap::new();
/// heap.push(2);
/// heap.push(2);
/// heap.push(1);
/// assert_eq!(heap.to_sorted_vec(), vec![1, 2, 2]);
/// ```
pub struct NaiveHeap<K> {
    elements: BTreeSet<(K, u64)>,
    next_seq: u64,
}

impl<K> Default for NaiveHeap<K> {
    fn default() -> Self {
        Self {
            elements: BTreeSet::new(),
            next_seq: 0,
        }
    }
}

impl<K: Ord> MergeableHeap<K> for NaiveHeap<K> {
    fn new() -> Self {
        Self::default()
    }

    fn singleton(key: K) -> Self {
        let mut heap = Self::new();
        heap.push(key);
        heap
    }

    fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn len(&self) -> usize {
        self.elements.len()
    }

    fn push(&mut self, key: K) {
        self.elements.insert((key, self.next_seq));
        self.next_seq += 1;
    }

    fn peek(&self) -> Option<&K> {
        self.elements.first().map(|(key, _)| key)
    }

    fn pop(&mut self) -> Option<K> {
        self.elements.pop_first().map(|(key, _)| key)
    }

    fn merge(&mut self, mut other: Self) {
        for (key, _) in std::mem::take(&mut other.elements) {
            self.push(key);
        }
    }

    fn check_invariants(&self) -> Result<(), InvariantViolation> {
        // the set keeps itself ordered; sequence numbers must stay unique
        match self.elements.iter().map(|(_, seq)| *seq).max() {
            Some(seq) if seq >= self.next_seq => Err(InvariantViolation::Shape(
                "sequence number was handed out twice",
            )),
            _ => Ok(()),
        }
    }
}

impl<K: Ord> NaiveHeap<K> {
    /// Returns every key, sorted
    pub fn to_sorted_vec(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.elements.iter().map(|(key, _)| key.clone()).collect()
    }
}
