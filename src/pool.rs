//! Index-addressed collection of heaps
//!
//! A [`HeapPool`] owns any number of heaps of one variant and addresses them
//! by index, the way a driver replaying recorded operations refers to heaps.
//! Because both merge operands are plain indices here, asking to merge a heap
//! into itself is expressible, and is rejected with [`HeapError::SelfMerge`]
//! before anything is touched.

use crate::traits::{HeapError, MergeableHeap};
use log::trace;
use std::marker::PhantomData;
use std::mem;

/// A growable set of heaps addressed by index
///
/// # Example
///
/// ```rust
/// use mergeable_heaps::binomial::BinomialHeap;
/// use mergeable_heaps::{HeapError, HeapPool};
///
/// let mut pool: HeapPool<i32, BinomialHeap<i32>> = HeapPool::new();
/// let a = pool.add_heap(5);
/// let b = pool.add_heap(1);
/// assert_eq!(pool.merge(a, a), Err(HeapError::SelfMerge));
/// pool.merge(b, a).unwrap();
/// assert_eq!(pool.size(b), Ok(2));
/// assert_eq!(pool.size(a), Ok(0));
/// ```
pub struct HeapPool<K, H> {
    heaps: Vec<H>,
    _key: PhantomData<K>,
}

impl<K, H> Default for HeapPool<K, H> {
    fn default() -> Self {
        Self {
            heaps: Vec::new(),
            _key: PhantomData,
        }
    }
}

impl<K: Ord, H: MergeableHeap<K>> HeapPool<K, H> {
    /// Creates an empty pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of heaps in the pool
    pub fn len(&self) -> usize {
        self.heaps.len()
    }

    /// Returns true if the pool holds no heaps
    pub fn is_empty(&self) -> bool {
        self.heaps.is_empty()
    }

    /// Adds a one-key heap and returns its index
    pub fn add_heap(&mut self, key: K) -> usize {
        self.heaps.push(H::singleton(key));
        trace!("pool: added heap {}", self.heaps.len() - 1);
        self.heaps.len() - 1
    }

    /// Adds an empty heap and returns its index
    pub fn add_empty(&mut self) -> usize {
        self.heaps.push(H::new());
        self.heaps.len() - 1
    }

    /// Borrows the heap at `index`
    pub fn get(&self, index: usize) -> Option<&H> {
        self.heaps.get(index)
    }

    pub fn insert(&mut self, index: usize, key: K) -> Result<(), HeapError> {
        self.heap_mut(index)?.push(key);
        Ok(())
    }

    pub fn get_minimum(&self, index: usize) -> Result<&K, HeapError> {
        self.heap(index)?.get_minimum()
    }

    pub fn extract_minimum(&mut self, index: usize) -> Result<K, HeapError> {
        self.heap_mut(index)?.extract_minimum()
    }

    pub fn size(&self, index: usize) -> Result<usize, HeapError> {
        Ok(self.heap(index)?.len())
    }

    /// Moves every key of heap `src` into heap `dst`
    ///
    /// `src` stays in the pool as an empty heap.
    ///
    /// # Errors
    /// - [`HeapError::NoSuchHeap`] if either index is out of range
    /// - [`HeapError::SelfMerge`] if `dst == src`
    pub fn merge(&mut self, dst: usize, src: usize) -> Result<(), HeapError> {
        self.heap(dst)?;
        self.heap(src)?;
        if dst == src {
            trace!("pool: rejected self-merge of heap {}", dst);
            return Err(HeapError::SelfMerge);
        }

        let donor = mem::replace(&mut self.heaps[src], H::new());
        self.heaps[dst].merge(donor);
        trace!("pool: merged heap {} into heap {}", src, dst);
        Ok(())
    }

    fn heap(&self, index: usize) -> Result<&H, HeapError> {
        self.heaps.get(index).ok_or(HeapError::NoSuchHeap(index))
    }

    fn heap_mut(&mut self, index: usize) -> Result<&mut H, HeapError> {
        self.heaps.get_mut(index).ok_or(HeapError::NoSuchHeap(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leftist::LeftistHeap;

    #[test]
    fn test_out_of_range_indices() {
        let mut pool: HeapPool<i32, LeftistHeap<i32>> = HeapPool::new();
        assert!(pool.is_empty());
        assert_eq!(pool.insert(0, 1), Err(HeapError::NoSuchHeap(0)));
        let a = pool.add_heap(3);
        assert_eq!(pool.merge(a, 7), Err(HeapError::NoSuchHeap(7)));
        assert_eq!(pool.merge(9, a), Err(HeapError::NoSuchHeap(9)));
        assert_eq!(pool.size(a), Ok(1));
    }

    #[test]
    fn test_self_merge_leaves_heap_untouched() {
        let mut pool: HeapPool<i32, LeftistHeap<i32>> = HeapPool::new();
        let a = pool.add_heap(4);
        pool.insert(a, 2).unwrap();
        assert_eq!(pool.merge(a, a), Err(HeapError::SelfMerge));
        assert_eq!(pool.size(a), Ok(2));
        assert_eq!(pool.get_minimum(a), Ok(&2));
    }

    #[test]
    fn test_merged_heap_is_reusable() {
        let mut pool: HeapPool<i32, LeftistHeap<i32>> = HeapPool::new();
        let a = pool.add_heap(1);
        let b = pool.add_empty();
        pool.merge(b, a).unwrap();
        assert_eq!(pool.get_minimum(a), Err(HeapError::EmptyHeap));
        pool.insert(a, 9).unwrap();
        assert_eq!(pool.extract_minimum(a), Ok(9));
        assert_eq!(pool.extract_minimum(b), Ok(1));
        assert_eq!(pool.len(), 2);
    }
}
