//! Shrinking back down: removal drains whole levels, and the tree ends as an
//! empty leaf root without ever shrinking past it.

use crate::BTree;
use crate::e2e_tests::helpers::{assert_invariants, contents, init_logging};

#[test]
fn test_remove_until_one_key_remains() {
    init_logging();
    let mut tree = BTree::<u64, 2>::new();
    for key in 1..=7 {
        tree.insert(key);
    }
    assert_eq!(tree.height(), 1);
    for key in [4, 2, 5, 6, 7, 1] {
        assert_eq!(tree.remove(&key), Some(key));
        assert_invariants(&tree);
    }
    // The internal root drained to zero keys along the way and collapsed.
    assert_eq!(contents(&tree), vec![3]);
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.len(), 1);
}

#[test]
fn test_remove_last_key_leaves_empty_leaf_root() {
    init_logging();
    let mut tree = BTree::<u64, 2>::new();
    tree.insert(1);
    assert_eq!(tree.remove(&1), Some(1));
    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);
    assert_invariants(&tree);
    // A leaf root may hold zero keys; nothing shrinks below it.
    assert_eq!(tree.remove(&1), None);
    assert_eq!(tree.height(), 0);
}

#[test]
fn test_remove_absent_keys_is_idempotent() {
    init_logging();
    let mut tree = BTree::<u64, 2>::new();
    for key in 1..=7 {
        tree.insert(key);
    }
    let before = contents(&tree);
    // An absent-key descent may still rebalance nodes on the way down, but
    // the key set must come through untouched.
    assert_eq!(tree.remove(&0), None);
    assert_eq!(tree.remove(&8), None);
    assert_eq!(contents(&tree), before);
    assert_eq!(tree.len(), 7);
    assert_invariants(&tree);
}
