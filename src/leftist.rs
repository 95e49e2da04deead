//! Leftist Heap implementation
//!
//! A leftist heap is a heap-ordered binary tree where every node satisfies
//! `rank(left) >= rank(right)`. The rank of a node is the length of its
//! rightmost path: `1 + min(rank(left), rank(right))`, with a missing child
//! counting as 0. The right spine of an n-node tree is therefore at most
//! log₂(n + 1) long, which bounds every operation:
//!
//! - O(log n) insert, delete_min and merge (worst-case)
//! - O(1) find_min
//!
//! # Algorithm Overview
//!
//! **Merge(a, b)**:
//! 1. The root with the smaller key becomes the new root
//! 2. Recursively merge its right subtree with the other tree
//! 3. If the left child now has the smaller rank, swap the children
//! 4. Recompute the rank
//!
//! The recursion only follows right spines, so its depth is bounded by
//! `rank(a) + rank(b)`.

use crate::meld::{MeldHeap, MeldNode, Subtree};
use crate::traits::InvariantViolation;
use std::mem;

/// Leftist Heap
///
/// # Example
///
/// ```rust
/// use mergeable_heaps::leftist::LeftistHeap;
/// use mergeable_heaps::MergeableHeap;
///
/// let mut heap = LeftistHeap::new();
/// heap.push(5);
/// heap.push(1);
/// heap.push(3);
/// assert_eq!(heap.pop(), Some(1));
/// assert_eq!(heap.peek(), Some(&3));
/// ```
pub type LeftistHeap<K> = MeldHeap<LeftistNode<K>>;

/// Node of a [`LeftistHeap`]
pub struct LeftistNode<K> {
    key: K,
    left: Subtree<Self>,
    right: Subtree<Self>,
    /// Length of the rightmost path from this node
    rank: usize,
}

fn rank<K>(node: &Subtree<LeftistNode<K>>) -> usize {
    node.as_ref().map_or(0, |node| node.rank)
}

impl<K: Ord> LeftistNode<K> {
    /// Restores `rank(left) >= rank(right)` here and recomputes the rank
    fn update_rank(&mut self) {
        if rank(&self.left) < rank(&self.right) {
            mem::swap(&mut self.left, &mut self.right);
        }
        self.rank = 1 + rank(&self.right);
    }
}

impl<K: Ord> MeldNode for LeftistNode<K> {
    type Key = K;

    fn leaf(key: K) -> Box<Self> {
        Box::new(LeftistNode {
            key,
            left: None,
            right: None,
            rank: 1,
        })
    }

    fn key(&self) -> &K {
        &self.key
    }

    fn meld(a: Subtree<Self>, b: Subtree<Self>) -> Subtree<Self> {
        let (mut a, mut b) = match (a, b) {
            (None, other) | (other, None) => return other,
            (Some(a), Some(b)) => (a, b),
        };
        if b.key < a.key {
            mem::swap(&mut a, &mut b);
        }
        a.right = Self::meld(a.right.take(), Some(b));
        a.update_rank();
        Some(a)
    }

    fn into_parts(self: Box<Self>) -> (K, Subtree<Self>, Subtree<Self>) {
        let node = *self;
        (node.key, node.left, node.right)
    }

    fn take_children(&mut self) -> (Subtree<Self>, Subtree<Self>) {
        self.rank = 1;
        (self.left.take(), self.right.take())
    }

    fn children(&self) -> (Option<&Self>, Option<&Self>) {
        (self.left.as_deref(), self.right.as_deref())
    }

    fn check_node(&self) -> Result<(), InvariantViolation> {
        if rank(&self.left) < rank(&self.right) {
            return Err(InvariantViolation::Shape("rank(left) must be >= rank(right)"));
        }
        if self.rank != 1 + rank(&self.left).min(rank(&self.right)) {
            return Err(InvariantViolation::Shape(
                "rank must be 1 + min(rank(left), rank(right))",
            ));
        }
        Ok(())
    }
}
