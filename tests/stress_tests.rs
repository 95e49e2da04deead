//! Extreme stress tests that really push the heaps to their limits
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases and verify correctness under load.

use mergeable_heaps::binomial::BinomialHeap;
use mergeable_heaps::leftist::LeftistHeap;
use mergeable_heaps::skew::SkewHeap;
use mergeable_heaps::MergeableHeap;

/// Test massive numbers of inserts and pops
fn test_massive_operations<H: MergeableHeap<i32>>() {
    let mut heap = H::new();

    for i in 0..50_000 {
        heap.push((i * 7919) % 50_000);
    }

    assert_eq!(heap.len(), 50_000);
    assert!(heap.check_invariants().is_ok());

    for i in 0..50_000 {
        assert_eq!(heap.pop(), Some(i));
    }

    assert!(heap.is_empty());
}

/// Test alternating insert and pop
fn test_alternating_ops<H: MergeableHeap<i32>>() {
    let mut heap = H::new();

    for i in 0..2000 {
        heap.push(i * 2);
        heap.push(i * 2 + 1);

        let popped = heap.pop();
        assert!(popped.is_some());
    }

    assert_eq!(heap.len(), 2000);
    let mut last = i32::MIN;
    while let Some(key) = heap.pop() {
        assert!(key >= last);
        last = key;
    }
}

/// Test merge with large heaps
fn test_large_merge<H: MergeableHeap<i32>>() {
    let mut heap1 = H::new();
    let mut heap2 = H::new();

    for i in 0..5000 {
        heap1.push(i * 2);
        heap2.push(i * 2 + 1);
    }

    heap1.merge(heap2);

    assert_eq!(heap1.len(), 10_000);
    assert!(heap1.check_invariants().is_ok());

    for i in 0..10_000 {
        assert_eq!(heap1.pop(), Some(i));
    }
}

/// Pairwise tournament of singleton heaps down to one heap
fn test_tournament_merge<H: MergeableHeap<i32>>() {
    let mut round: Vec<H> = (0..4096).rev().map(H::singleton).collect();

    while round.len() > 1 {
        let mut next = Vec::with_capacity(round.len() / 2 + 1);
        let mut heaps = round.into_iter();
        while let Some(mut left) = heaps.next() {
            if let Some(right) = heaps.next() {
                left.merge(right);
            }
            next.push(left);
        }
        round = next;
    }

    let mut winner = round.pop().unwrap();
    assert_eq!(winner.len(), 4096);
    assert!(winner.check_invariants().is_ok());
    for i in 0..4096 {
        assert_eq!(winner.pop(), Some(i));
    }
}

/// Repeatedly hand the whole content back and forth between two heaps
fn test_ping_pong_merge<H: MergeableHeap<i32>>() {
    let mut a = H::new();
    let mut b = H::new();

    for i in 0..1000 {
        a.push(i);
        if i % 2 == 0 {
            b.merge_from(&mut a);
        } else {
            a.merge_from(&mut b);
        }
        assert_eq!(a.len() + b.len(), i as usize + 1);
    }

    a.merge_from(&mut b);
    assert!(b.is_empty());
    for i in 0..1000 {
        assert_eq!(a.pop(), Some(i));
    }
}

/// Test with very large keys
fn test_large_keys<H: MergeableHeap<i64>>() {
    let mut heap = H::new();

    heap.push(1_000_000_000_000);
    heap.push(-1_000_000_000_000);
    heap.push(i64::MAX);
    heap.push(i64::MIN);

    assert_eq!(heap.pop(), Some(i64::MIN));
    assert_eq!(heap.pop(), Some(-1_000_000_000_000));
    assert_eq!(heap.pop(), Some(1_000_000_000_000));
    assert_eq!(heap.pop(), Some(i64::MAX));
}

// Binomial heap stress tests

#[test]
fn test_binomial_massive() {
    test_massive_operations::<BinomialHeap<i32>>();
}

#[test]
fn test_binomial_alternating() {
    test_alternating_ops::<BinomialHeap<i32>>();
}

#[test]
fn test_binomial_large_merge() {
    test_large_merge::<BinomialHeap<i32>>();
}

#[test]
fn test_binomial_tournament() {
    test_tournament_merge::<BinomialHeap<i32>>();
}

#[test]
fn test_binomial_ping_pong() {
    test_ping_pong_merge::<BinomialHeap<i32>>();
}

#[test]
fn test_binomial_large_keys() {
    test_large_keys::<BinomialHeap<i64>>();
}

// Leftist heap stress tests

#[test]
fn test_leftist_massive() {
    test_massive_operations::<LeftistHeap<i32>>();
}

#[test]
fn test_leftist_alternating() {
    test_alternating_ops::<LeftistHeap<i32>>();
}

#[test]
fn test_leftist_large_merge() {
    test_large_merge::<LeftistHeap<i32>>();
}

#[test]
fn test_leftist_tournament() {
    test_tournament_merge::<LeftistHeap<i32>>();
}

#[test]
fn test_leftist_ping_pong() {
    test_ping_pong_merge::<LeftistHeap<i32>>();
}

#[test]
fn test_leftist_large_keys() {
    test_large_keys::<LeftistHeap<i64>>();
}

// Skew heap stress tests

#[test]
fn test_skew_massive() {
    test_massive_operations::<SkewHeap<i32>>();
}

#[test]
fn test_skew_alternating() {
    test_alternating_ops::<SkewHeap<i32>>();
}

#[test]
fn test_skew_large_merge() {
    test_large_merge::<SkewHeap<i32>>();
}

#[test]
fn test_skew_tournament() {
    test_tournament_merge::<SkewHeap<i32>>();
}

#[test]
fn test_skew_ping_pong() {
    test_ping_pong_merge::<SkewHeap<i32>>();
}

#[test]
fn test_skew_large_keys() {
    test_large_keys::<SkewHeap<i64>>();
}
