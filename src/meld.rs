//! Shared wrapper for single-tree mergeable heaps
//!
//! Leftist and skew heaps keep one heap-ordered binary tree and differ only in
//! how two trees are melded. [`MeldHeap`] owns the root and the size counter
//! and delegates every structural change to the node type through
//! [`MeldNode`]:
//!
//! - **Insert**: meld a one-node tree into the root
//! - **Extract-min**: remove the root and meld its two subtrees
//! - **Merge**: meld the other heap's root into ours and take over its size
//!
//! Nodes never call back into the wrapper.

use crate::traits::{InvariantViolation, MergeableHeap};
use std::mem;

/// Owning link to a subtree
pub type Subtree<N> = Option<Box<N>>;

/// A binary tree node that knows how to meld two trees of its own kind
pub trait MeldNode: Sized {
    /// Key type, ordered
    type Key: Ord;

    /// Creates a node without children
    fn leaf(key: Self::Key) -> Box<Self>;

    /// The key stored in this node
    fn key(&self) -> &Self::Key;

    /// Melds two heap-ordered trees into one, taking ownership of both
    ///
    /// A missing operand returns the other one unchanged.
    fn meld(a: Subtree<Self>, b: Subtree<Self>) -> Subtree<Self>;

    /// Dismantles a node into its key and its two subtrees
    fn into_parts(self: Box<Self>) -> (Self::Key, Subtree<Self>, Subtree<Self>);

    /// Detaches both subtrees, leaving the node a leaf
    fn take_children(&mut self) -> (Subtree<Self>, Subtree<Self>);

    /// Borrows both subtrees
    fn children(&self) -> (Option<&Self>, Option<&Self>);

    /// Checks the variant-specific shape rule at this node only
    fn check_node(&self) -> Result<(), InvariantViolation> {
        Ok(())
    }
}

/// A mergeable heap made of one tree of `N` nodes
///
/// See [`LeftistHeap`](crate::leftist::LeftistHeap) and
/// [`SkewHeap`](crate::skew::SkewHeap).
pub struct MeldHeap<N: MeldNode> {
    root: Subtree<N>,
    len: usize,
}

impl<N: MeldNode> Default for MeldHeap<N> {
    fn default() -> Self {
        Self { root: None, len: 0 }
    }
}

impl<N: MeldNode> Drop for MeldHeap<N> {
    fn drop(&mut self) {
        // Free nodes from an explicit stack: paths can be as long as the heap.
        let mut stack: Vec<Box<N>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            let (left, right) = node.take_children();
            stack.extend(left);
            stack.extend(right);
        }
    }
}

impl<N: MeldNode> MergeableHeap<N::Key> for MeldHeap<N> {
    fn new() -> Self {
        Self::default()
    }

    fn singleton(key: N::Key) -> Self {
        Self {
            root: Some(N::leaf(key)),
            len: 1,
        }
    }

    fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn push(&mut self, key: N::Key) {
        self.merge(Self::singleton(key));
    }

    fn peek(&self) -> Option<&N::Key> {
        self.root.as_deref().map(N::key)
    }

    fn pop(&mut self) -> Option<N::Key> {
        let root = self.root.take()?;
        let (key, left, right) = root.into_parts();
        self.root = N::meld(left, right);
        self.len -= 1;

        #[cfg(feature = "debug-invariants")]
        self.assert_invariants();

        Some(key)
    }

    fn merge(&mut self, mut other: Self) {
        let (root, len) = other.detach();
        self.root = N::meld(self.root.take(), root);
        self.len += len;

        #[cfg(feature = "debug-invariants")]
        self.assert_invariants();
    }

    /// Checks heap order, the node shape rule everywhere and the size counter
    fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let mut counted = 0;
        let mut stack: Vec<&N> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            counted += 1;
            node.check_node()?;
            let (left, right) = node.children();
            for child in left.into_iter().chain(right) {
                if child.key() < node.key() {
                    return Err(InvariantViolation::HeapOrder);
                }
                stack.push(child);
            }
        }
        if counted != self.len {
            return Err(InvariantViolation::SizeMismatch {
                tracked: self.len,
                counted,
            });
        }
        Ok(())
    }
}

impl<N: MeldNode> MeldHeap<N> {
    /// Returns every key, sorted
    pub fn to_sorted_vec(&self) -> Vec<N::Key>
    where
        N::Key: Clone,
    {
        let mut keys = Vec::with_capacity(self.len);
        let mut stack: Vec<&N> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            keys.push(node.key().clone());
            let (left, right) = node.children();
            stack.extend(left);
            stack.extend(right);
        }
        keys.sort();
        keys
    }

    /// Takes the tree and size out of the heap without freeing any node
    pub(crate) fn detach(&mut self) -> (Subtree<N>, usize) {
        (self.root.take(), mem::replace(&mut self.len, 0))
    }

    #[cfg(feature = "debug-invariants")]
    fn assert_invariants(&self) {
        if let Err(violation) = self.check_invariants() {
            panic!("heap invariant violated: {}", violation);
        }
    }
}
