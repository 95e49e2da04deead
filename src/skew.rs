//! Skew Heap implementation
//!
//! A skew heap is a self-adjusting heap-ordered binary tree. It stores no
//! balance information at all: every merge swaps the children of each node on
//! the merge path, which keeps the right spines short on average.
//!
//! - O(log n) amortized insert, delete_min and merge
//! - O(1) find_min
//!
//! Individual merges can walk a right spine of length O(n), so the merge
//! descends iteratively instead of recursing.
//!
//! # Algorithm Overview
//!
//! **Merge(a, b)**:
//! 1. The root with the smaller key wins
//! 2. Its right subtree is merged with the other tree
//! 3. Its old left subtree moves to the right, the merge result goes left

use crate::meld::{MeldHeap, MeldNode, Subtree};

/// Skew Heap
///
/// # Example
///
/// ```rust
/// use mergeable_heaps::skew::SkewHeap;
/// use mergeable_heaps::MergeableHeap;
///
/// let mut a = SkewHeap::singleton(4);
/// let mut b = SkewHeap::singleton(2);
/// b.push(9);
/// a.merge(b);
/// assert_eq!(a.len(), 3);
/// assert_eq!(a.pop(), Some(2));
/// ```
pub type SkewHeap<K> = MeldHeap<SkewNode<K>>;

/// Node of a [`SkewHeap`]
pub struct SkewNode<K> {
    key: K,
    left: Subtree<Self>,
    right: Subtree<Self>,
}

impl<K: Ord> MeldNode for SkewNode<K> {
    type Key = K;

    fn leaf(key: K) -> Box<Self> {
        Box::new(SkewNode {
            key,
            left: None,
            right: None,
        })
    }

    fn key(&self) -> &K {
        &self.key
    }

    fn meld(mut a: Subtree<Self>, mut b: Subtree<Self>) -> Subtree<Self> {
        // Walk down the right spines, collecting the winners in order.
        let mut path: Vec<Box<Self>> = Vec::new();
        let tail = loop {
            let (mut winner, other) = match (a, b) {
                (None, rest) | (rest, None) => break rest,
                (Some(x), Some(y)) if y.key < x.key => (y, x),
                (Some(x), Some(y)) => (x, y),
            };
            a = winner.right.take();
            b = Some(other);
            path.push(winner);
        };

        // Link back up, swapping the children of every node on the path.
        let mut merged = tail;
        for mut node in path.into_iter().rev() {
            node.right = node.left.take();
            node.left = merged;
            merged = Some(node);
        }
        merged
    }

    fn into_parts(self: Box<Self>) -> (K, Subtree<Self>, Subtree<Self>) {
        let node = *self;
        (node.key, node.left, node.right)
    }

    fn take_children(&mut self) -> (Subtree<Self>, Subtree<Self>) {
        (self.left.take(), self.right.take())
    }

    fn children(&self) -> (Option<&Self>, Option<&Self>) {
        (self.left.as_deref(), self.right.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::MergeableHeap;
    use std::mem;

    /// Same merge as [`MeldNode::meld`], written recursively
    fn meld_recursive(a: Subtree<SkewNode<i32>>, b: Subtree<SkewNode<i32>>) -> Subtree<SkewNode<i32>> {
        let (mut a, mut b) = match (a, b) {
            (None, other) | (other, None) => return other,
            (Some(a), Some(b)) => (a, b),
        };
        if b.key < a.key {
            mem::swap(&mut a, &mut b);
        }
        let right = a.right.take();
        a.right = a.left.take();
        a.left = meld_recursive(right, Some(b));
        Some(a)
    }

    /// Preorder dump of keys with `None` markers, to compare shapes
    fn shape(node: Option<&SkewNode<i32>>, out: &mut Vec<Option<i32>>) {
        match node {
            None => out.push(None),
            Some(node) => {
                out.push(Some(node.key));
                shape(node.left.as_deref(), out);
                shape(node.right.as_deref(), out);
            }
        }
    }

    type Meld = fn(Subtree<SkewNode<i32>>, Subtree<SkewNode<i32>>) -> Subtree<SkewNode<i32>>;

    fn build(keys: &[i32], meld: Meld) -> Subtree<SkewNode<i32>> {
        keys.iter()
            .fold(None, |root, &key| meld(root, Some(SkewNode::leaf(key))))
    }

    #[test]
    fn test_iterative_meld_matches_recursive_shape() {
        let keys = [15, 3, 9, 27, 1, 8, 8, 20, 4, 11, 2, 30, 6];
        let iterative = build(&keys, SkewNode::meld);
        let recursive = build(&keys, meld_recursive);
        let (mut a, mut b) = (Vec::new(), Vec::new());
        shape(iterative.as_deref(), &mut a);
        shape(recursive.as_deref(), &mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_meld_swaps_children_on_path() {
        // 1 with a single left child 5; melding 3 goes down the (empty) right
        // spine, then the old left child moves right
        let mut root = SkewNode::leaf(1);
        root.left = Some(SkewNode::leaf(5));
        let merged = SkewNode::meld(Some(root), Some(SkewNode::leaf(3))).unwrap();
        assert_eq!(merged.key, 1);
        assert_eq!(merged.left.as_ref().map(|n| n.key), Some(3));
        assert_eq!(merged.right.as_ref().map(|n| n.key), Some(5));
    }

    #[test]
    fn test_long_paths_do_not_overflow() {
        let mut heap = SkewHeap::new();
        for key in (0..200_000).rev() {
            heap.push(key);
        }
        assert_eq!(heap.peek(), Some(&0));
        let mut ascending = SkewHeap::new();
        for key in 0..200_000 {
            ascending.push(key);
        }
        heap.merge(ascending);
        assert_eq!(heap.len(), 400_000);
        assert_eq!(heap.pop(), Some(0));
        assert_eq!(heap.pop(), Some(0));
        assert_eq!(heap.pop(), Some(1));
    }
}
