//! Ascending inserts at the minimum viable degree: the root leaf fills at
//! three keys and the fourth insert forces the first split.

use crate::BTree;
use crate::e2e_tests::helpers::{assert_invariants, init_logging};

#[test]
fn test_fourth_insert_splits_the_root() {
    init_logging();
    let mut tree = BTree::<u64, 2>::new();
    for key in 1..=3 {
        tree.insert(key);
        assert_eq!(tree.height(), 0);
        assert_invariants(&tree);
    }
    tree.insert(4);
    assert_eq!(tree.height(), 1);
    assert_eq!(tree.len(), 4);
    assert_invariants(&tree);
}

#[test]
fn test_all_seven_keys_found_after_ascending_inserts() {
    init_logging();
    let mut tree = BTree::<u64, 2>::new();
    for key in 1..=7 {
        tree.insert(key);
        assert_invariants(&tree);
    }
    for key in 1..=7 {
        assert_eq!(tree.get(&key), Some(&key));
    }
    assert_eq!(tree.get(&8), None);
    assert_eq!(tree.len(), 7);
}
