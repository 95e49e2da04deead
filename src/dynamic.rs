//! Type-erased heap interface
//!
//! The typed [`MergeableHeap`] contract rejects cross-variant merges at
//! compile time. Code that holds heaps of different variants behind one type
//! (a test harness, a plugin table) uses [`DynHeap`] instead, where the same
//! misuse becomes a reportable [`HeapError`]:
//!
//! - merging two different variants fails with [`HeapError::WrongHeapType`]
//! - asking a [`BinomialForest`] for its size fails with
//!   [`HeapError::RestrictedMethod`]
//!
//! Every failing call returns before anything is mutated.
//!
//! # Example
//!
//! ```rust
//! use mergeable_heaps::binomial::BinomialHeap;
//! use mergeable_heaps::skew::SkewHeap;
//! use mergeable_heaps::{DynHeap, HeapError, MergeableHeap};
//!
//! let mut a: Box<dyn DynHeap<i32>> = Box::new(BinomialHeap::singleton(1));
//! let mut b: Box<dyn DynHeap<i32>> = Box::new(SkewHeap::singleton(2));
//! assert_eq!(a.merge_dyn(&mut *b), Err(HeapError::WrongHeapType));
//! assert_eq!(b.size(), Ok(1));
//! ```

use crate::binomial::{BinomialForest, BinomialHeap};
use crate::leftist::LeftistHeap;
use crate::naive::NaiveHeap;
use crate::skew::SkewHeap;
use crate::traits::{HeapError, MergeableHeap};
use log::debug;
use std::any::Any;
use std::fmt;
use std::mem;

/// Concrete variant behind a [`DynHeap`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeapKind {
    Binomial,
    BinomialForest,
    Leftist,
    Skew,
    Naive,
}

impl fmt::Display for HeapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HeapKind::Binomial => "binomial heap",
            HeapKind::BinomialForest => "binomial forest",
            HeapKind::Leftist => "leftist heap",
            HeapKind::Skew => "skew heap",
            HeapKind::Naive => "naive heap",
        };
        f.write_str(name)
    }
}

/// Object-safe heap contract with runtime variant checks
pub trait DynHeap<K: 'static>: Any {
    /// Which variant this is
    fn kind(&self) -> HeapKind;

    /// Inserts a key
    fn insert(&mut self, key: K);

    /// Returns the minimum key, or [`HeapError::EmptyHeap`]
    fn get_minimum(&self) -> Result<&K, HeapError>;

    /// Removes and returns the minimum key, or [`HeapError::EmptyHeap`]
    fn extract_minimum(&mut self) -> Result<K, HeapError>;

    /// Number of keys, or [`HeapError::RestrictedMethod`] if it is not tracked
    fn size(&self) -> Result<usize, HeapError>;

    /// Whether the heap is empty, or [`HeapError::RestrictedMethod`]
    fn empty(&self) -> Result<bool, HeapError>;

    /// Moves every key of `other` into this heap, leaving `other` empty
    ///
    /// Fails with [`HeapError::WrongHeapType`] unless `other` is the same
    /// concrete type as `self`.
    fn merge_dyn(&mut self, other: &mut dyn DynHeap<K>) -> Result<(), HeapError>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

fn wrong_type(into: HeapKind, from: HeapKind) -> HeapError {
    debug!("rejected merge of a {} into a {}", from, into);
    HeapError::WrongHeapType
}

macro_rules! impl_dyn_heap {
    ($heap:ident, $kind:expr) => {
        impl<K: Ord + 'static> DynHeap<K> for $heap<K> {
            fn kind(&self) -> HeapKind {
                $kind
            }

            fn insert(&mut self, key: K) {
                MergeableHeap::push(self, key);
            }

            fn get_minimum(&self) -> Result<&K, HeapError> {
                MergeableHeap::get_minimum(self)
            }

            fn extract_minimum(&mut self) -> Result<K, HeapError> {
                MergeableHeap::extract_minimum(self)
            }

            fn size(&self) -> Result<usize, HeapError> {
                Ok(MergeableHeap::len(self))
            }

            fn empty(&self) -> Result<bool, HeapError> {
                Ok(MergeableHeap::is_empty(self))
            }

            fn merge_dyn(&mut self, other: &mut dyn DynHeap<K>) -> Result<(), HeapError> {
                let from = other.kind();
                match other.as_any_mut().downcast_mut::<Self>() {
                    Some(donor) => {
                        MergeableHeap::merge_from(self, donor);
                        Ok(())
                    }
                    None => Err(wrong_type($kind, from)),
                }
            }

            fn as_any(&self) -> &dyn Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn Any {
                self
            }
        }
    };
}

impl_dyn_heap!(BinomialHeap, HeapKind::Binomial);
impl_dyn_heap!(LeftistHeap, HeapKind::Leftist);
impl_dyn_heap!(SkewHeap, HeapKind::Skew);
impl_dyn_heap!(NaiveHeap, HeapKind::Naive);

impl<K: Ord + 'static> DynHeap<K> for BinomialForest<K> {
    fn kind(&self) -> HeapKind {
        HeapKind::BinomialForest
    }

    fn insert(&mut self, key: K) {
        self.push(key);
    }

    fn get_minimum(&self) -> Result<&K, HeapError> {
        self.peek().ok_or(HeapError::EmptyHeap)
    }

    fn extract_minimum(&mut self) -> Result<K, HeapError> {
        self.pop().ok_or(HeapError::EmptyHeap)
    }

    fn size(&self) -> Result<usize, HeapError> {
        Err(HeapError::RestrictedMethod)
    }

    fn empty(&self) -> Result<bool, HeapError> {
        Err(HeapError::RestrictedMethod)
    }

    fn merge_dyn(&mut self, other: &mut dyn DynHeap<K>) -> Result<(), HeapError> {
        let from = other.kind();
        match other.as_any_mut().downcast_mut::<Self>() {
            Some(donor) => {
                self.meld(mem::take(donor));
                Ok(())
            }
            None => Err(wrong_type(HeapKind::BinomialForest, from)),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
