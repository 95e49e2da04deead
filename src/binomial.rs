//! Binomial Heap implementation
//!
//! A binomial heap is a forest of binomial trees with:
//! - O(log n) insert, delete_min and merge
//! - O(log n) find_min (linear scan over the roots)
//!
//! # Algorithm Overview
//!
//! **Binomial Tree Bₖ**: Recursively defined:
//! - B₀ is a single node
//! - Bₖ is formed by linking two B_{k-1} trees
//! - Bₖ has exactly 2ᵏ nodes and its root has k children B_{k-1}, ..., B₀
//!
//! The roots form a singly linked list ordered by increasing degree, with at
//! most one tree of each degree. The degrees present are exactly the set bits
//! of the number of keys, so a merge works like binary addition:
//!
//! 1. **List merge**: merge the two root lists by degree
//! 2. **Coalesce**: link roots of equal degree, carrying into the next degree
//! 3. The head of the rebuilt list is the root of minimal degree
//!
//! **Ownership**: every node is owned by exactly one `Box`, either its parent's
//! `child` link or its left neighbour's `sibling` link (or the list head).
//! Merging moves subtrees between owners; nothing is ever shared or copied.
//!
//! # Sized heaps and forests
//!
//! Extracting the minimum splits the children of the minimal root off as a
//! forest of their own. A [`BinomialForest`] has no size counter and therefore
//! no `len`/`is_empty`; it can only be melded, queried for its minimum or turned
//! back into a sized [`BinomialHeap`] with [`BinomialForest::into_sized`].

use crate::traits::{InvariantViolation, MergeableHeap};
use log::trace;
use smallvec::SmallVec;
use std::iter;
use std::mem;

/// Owning link to a node (child or sibling)
type Link<K> = Option<Box<Node<K>>>;

/// Scratch buffer for roots while a root list is rebuilt
type RootBuf<K> = SmallVec<[Box<Node<K>>; 32]>;

/// Internal node structure for binomial heap
///
/// - `child`: head of the child list, degrees `degree - 1` down to 0
/// - `sibling`: right neighbour in the parent's child list or in the root list
/// - `degree`: number of children; the tree rooted here has 2^degree nodes
struct Node<K> {
    key: K,
    degree: usize,
    child: Link<K>,
    sibling: Link<K>,
}

impl<K: Ord> Node<K> {
    fn leaf(key: K) -> Box<Self> {
        Box::new(Node {
            key,
            degree: 0,
            child: None,
            sibling: None,
        })
    }

    /// Links two trees of the same degree into one tree of degree + 1
    ///
    /// The root with the larger key becomes the first child of the other.
    /// On equal keys `self` stays the root.
    fn link(mut self: Box<Self>, mut other: Box<Self>) -> Box<Self> {
        debug_assert_eq!(self.degree, other.degree);
        if other.key < self.key {
            mem::swap(&mut self, &mut other);
        }
        other.sibling = self.child.take();
        self.child = Some(other);
        self.degree += 1;
        self
    }

    /// Number of nodes in the tree rooted here
    fn tree_size(&self) -> usize {
        1 << self.degree
    }

    fn children(&self) -> impl Iterator<Item = &Node<K>> {
        iter::successors(self.child.as_deref(), |node| node.sibling.as_deref())
    }

    /// Checks heap order and binomial shape below this node, returning its size
    fn check_tree(&self) -> Result<usize, InvariantViolation> {
        let mut expected = self.degree;
        let mut count = 1;
        for child in self.children() {
            if expected == 0 {
                return Err(InvariantViolation::Shape("node has more children than its degree"));
            }
            expected -= 1;
            if child.degree != expected {
                return Err(InvariantViolation::Shape(
                    "child degrees must run from degree - 1 down to 0",
                ));
            }
            if child.key < self.key {
                return Err(InvariantViolation::HeapOrder);
            }
            count += child.check_tree()?;
        }
        if expected != 0 {
            return Err(InvariantViolation::Shape("node has fewer children than its degree"));
        }
        Ok(count)
    }
}

/// Merges two root lists, each sorted by increasing degree, into one sorted list
///
/// On equal degrees the root from `a` comes first.
fn merge_root_lists<K>(mut a: Link<K>, mut b: Link<K>) -> Link<K> {
    let mut head = None;
    let mut tail = &mut head;
    loop {
        let from_a = match (&a, &b) {
            (Some(x), Some(y)) => x.degree <= y.degree,
            _ => break,
        };
        let source = if from_a { &mut a } else { &mut b };
        let Some(mut node) = source.take() else { break };
        *source = node.sibling.take();
        tail = &mut tail.insert(node).sibling;
    }
    *tail = a.or(b);
    head
}

/// Links roots of equal degree until every degree occurs at most once
///
/// The input holds at most two roots of any degree. A linked tree is carried
/// into the next degree; when a carry meets two more roots of its degree, the
/// carry stays and the two later roots are linked.
fn coalesce<K: Ord>(mut head: Link<K>) -> Link<K> {
    let mut pending = RootBuf::new();
    while let Some(mut node) = head {
        head = node.sibling.take();
        pending.push(node);
    }
    let merged = pending.len();

    let mut roots = RootBuf::new();
    let mut pending = pending.into_iter().peekable();
    while let Some(node) = pending.next() {
        let third_follows = pending
            .peek()
            .is_some_and(|next| next.degree == node.degree);
        match roots.pop() {
            Some(prev) if prev.degree == node.degree && !third_follows => {
                roots.push(prev.link(node));
            }
            Some(prev) => {
                roots.push(prev);
                roots.push(node);
            }
            None => roots.push(node),
        }
    }
    trace!("binomial coalesce: {} roots -> {}", merged, roots.len());

    let mut head = None;
    for mut root in roots.into_iter().rev() {
        root.sibling = head;
        head = Some(root);
    }
    head
}

/// Reverses a sibling list in place
fn reverse_list<K>(mut head: Link<K>) -> Link<K> {
    let mut reversed = None;
    while let Some(mut node) = head {
        head = node.sibling.take();
        node.sibling = reversed;
        reversed = Some(node);
    }
    reversed
}

/// A binomial forest without a size counter
///
/// This is the heap value produced when the children of a removed root are
/// split off. It supports the structural operations but deliberately has no
/// `len` or `is_empty`; use [`into_sized`](Self::into_sized) to get a
/// [`BinomialHeap`] back.
///
/// # Example
///
/// ```rust
/// use mergeable_heaps::binomial::{BinomialForest, BinomialHeap};
/// use mergeable_heaps::MergeableHeap;
///
/// let mut heap = BinomialHeap::new();
/// for key in [4, 1, 3, 2] {
///     heap.push(key);
/// }
/// let (min, children) = heap.split_min().unwrap();
/// assert_eq!(min, 1);
///
/// let mut forest = BinomialForest::from(heap);
/// forest.meld(children);
/// let heap = forest.into_sized();
/// assert_eq!(heap.len(), 3);
/// assert_eq!(heap.peek(), Some(&2));
/// ```
pub struct BinomialForest<K> {
    /// Root with the minimal degree, `None` for an empty forest
    head: Link<K>,
}

impl<K> Default for BinomialForest<K> {
    fn default() -> Self {
        Self { head: None }
    }
}

impl<K: Ord> BinomialForest<K> {
    /// Creates an empty forest
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a forest holding a single B₀ tree
    pub fn singleton(key: K) -> Self {
        Self {
            head: Some(Node::leaf(key)),
        }
    }

    /// Inserts a key by melding in a singleton forest
    pub fn push(&mut self, key: K) {
        self.meld(Self::singleton(key));
    }

    /// Returns the minimum key by scanning the roots
    pub fn peek(&self) -> Option<&K> {
        self.roots().map(|root| &root.key).min()
    }

    /// Removes and returns the minimum key
    pub fn pop(&mut self) -> Option<K> {
        let (key, children) = self.take_min_root()?;
        self.meld(children);
        Some(key)
    }

    /// Moves every tree of `other` into this forest
    ///
    /// **Time Complexity**: O(log n) worst-case
    pub fn meld(&mut self, other: Self) {
        if other.head.is_none() {
            return;
        }
        let merged = merge_root_lists(self.head.take(), other.head);
        self.head = coalesce(merged);
    }

    /// Degrees of the roots, in list order
    pub fn root_degrees(&self) -> Vec<usize> {
        self.roots().map(|root| root.degree).collect()
    }

    /// Converts the forest into a sized heap
    ///
    /// The size is recovered from the root degrees (a Bₖ tree holds 2ᵏ keys),
    /// so this costs O(log n).
    pub fn into_sized(self) -> BinomialHeap<K> {
        let len = self.node_count();
        BinomialHeap { forest: self, len }
    }

    /// Returns every key, sorted
    pub fn to_sorted_vec(&self) -> Vec<K>
    where
        K: Clone,
    {
        let mut keys = Vec::new();
        let mut stack: Vec<&Node<K>> = self.head.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            keys.push(node.key.clone());
            stack.extend(node.child.as_deref());
            stack.extend(node.sibling.as_deref());
        }
        keys.sort();
        keys
    }

    /// Checks heap order, binomial shape and strictly increasing root degrees
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        self.check_trees().map(|_| ())
    }

    fn roots(&self) -> impl Iterator<Item = &Node<K>> {
        iter::successors(self.head.as_deref(), |node| node.sibling.as_deref())
    }

    fn node_count(&self) -> usize {
        self.roots().map(Node::tree_size).sum()
    }

    fn check_trees(&self) -> Result<usize, InvariantViolation> {
        let mut count = 0;
        let mut previous: Option<usize> = None;
        for root in self.roots() {
            if previous.is_some_and(|degree| degree >= root.degree) {
                return Err(InvariantViolation::Shape(
                    "root degrees must be strictly increasing",
                ));
            }
            previous = Some(root.degree);
            count += root.check_tree()?;
        }
        Ok(count)
    }

    /// Splices the minimal root out of the root list
    ///
    /// Returns its key and its children as a forest. Ties go to the root
    /// closest to the head.
    fn take_min_root(&mut self) -> Option<(K, BinomialForest<K>)> {
        let mut best: Option<(usize, &K)> = None;
        for (position, root) in self.roots().enumerate() {
            let better = match best {
                Some((_, key)) => root.key < *key,
                None => true,
            };
            if better {
                best = Some((position, &root.key));
            }
        }
        let (position, _) = best?;

        let mut cursor = &mut self.head;
        for _ in 0..position {
            cursor = match cursor {
                Some(node) => &mut node.sibling,
                None => return None,
            };
        }
        let mut min = cursor.take()?;
        *cursor = min.sibling.take();

        let Node { key, child, .. } = *min;
        // children are stored by decreasing degree
        let children = BinomialForest {
            head: reverse_list(child),
        };
        Some((key, children))
    }
}

impl<K: Ord> From<BinomialHeap<K>> for BinomialForest<K> {
    /// Forgets the size of a heap
    fn from(heap: BinomialHeap<K>) -> Self {
        heap.forest
    }
}

/// Binomial Heap
///
/// A [`BinomialForest`] plus an exact count of its keys.
///
/// # Example
///
/// ```rust
/// use mergeable_heaps::binomial::BinomialHeap;
/// use mergeable_heaps::MergeableHeap;
///
/// let mut heap = BinomialHeap::new();
/// heap.push(5);
/// heap.push(3);
/// heap.push(8);
/// assert_eq!(heap.peek(), Some(&3));
/// assert_eq!(heap.root_degrees(), vec![0, 1]);
/// ```
pub struct BinomialHeap<K> {
    forest: BinomialForest<K>,
    len: usize,
}

impl<K> Default for BinomialHeap<K> {
    fn default() -> Self {
        Self {
            forest: BinomialForest::default(),
            len: 0,
        }
    }
}

impl<K: Ord> MergeableHeap<K> for BinomialHeap<K> {
    fn new() -> Self {
        Self::default()
    }

    fn singleton(key: K) -> Self {
        Self {
            forest: BinomialForest::singleton(key),
            len: 1,
        }
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn len(&self) -> usize {
        self.len
    }

    /// Inserts a key by merging in a one-key heap
    ///
    /// **Time Complexity**: O(log n) worst-case, like incrementing a binary counter
    fn push(&mut self, key: K) {
        self.merge(Self::singleton(key));
    }

    /// **Time Complexity**: O(log n), linear scan over the roots
    fn peek(&self) -> Option<&K> {
        self.forest.peek()
    }

    /// Removes and returns the minimum element
    ///
    /// **Time Complexity**: O(log n) worst-case
    ///
    /// **Algorithm**:
    /// 1. Find the minimal root by linear scan and splice it out
    /// 2. Its children B_{k-1}, ..., B₀ form a forest
    /// 3. Meld that forest back into the heap
    /// 4. The size drops by exactly one
    fn pop(&mut self) -> Option<K> {
        let (key, children) = self.forest.take_min_root()?;
        self.forest.meld(children);
        self.len -= 1;

        #[cfg(feature = "debug-invariants")]
        self.assert_invariants();

        Some(key)
    }

    /// Merges another heap into this heap
    ///
    /// **Time Complexity**: O(log n) worst-case
    fn merge(&mut self, mut other: Self) {
        let (forest, len) = other.detach();
        self.forest.meld(forest);
        self.len += len;

        #[cfg(feature = "debug-invariants")]
        self.assert_invariants();
    }

    /// Checks the forest invariants and that `len` matches the node count
    fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let counted = self.forest.check_trees()?;
        if counted != self.len {
            return Err(InvariantViolation::SizeMismatch {
                tracked: self.len,
                counted,
            });
        }
        Ok(())
    }
}

impl<K: Ord> BinomialHeap<K> {
    /// Removes the minimal root and returns its key with its children
    ///
    /// The heap keeps every other tree and its size drops by the size of the
    /// removed tree. The children come back as a [`BinomialForest`], which has
    /// to be melded somewhere to be queried for its size again.
    pub fn split_min(&mut self) -> Option<(K, BinomialForest<K>)> {
        let (key, children) = self.forest.take_min_root()?;
        self.len -= 1 + children.node_count();
        Some((key, children))
    }

    /// Degrees of the roots, in list order
    pub fn root_degrees(&self) -> Vec<usize> {
        self.forest.root_degrees()
    }

    /// Returns every key, sorted
    pub fn to_sorted_vec(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.forest.to_sorted_vec()
    }

    /// Takes the forest and size out of the heap, leaving it empty
    pub(crate) fn detach(&mut self) -> (BinomialForest<K>, usize) {
        (mem::take(&mut self.forest), mem::replace(&mut self.len, 0))
    }

    #[cfg(feature = "debug-invariants")]
    fn assert_invariants(&self) {
        if let Err(violation) = self.check_invariants() {
            panic!("binomial heap invariant violated: {}", violation);
        }
    }
}
