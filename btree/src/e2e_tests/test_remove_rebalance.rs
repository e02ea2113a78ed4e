//! Removal rebalancing: sibling borrows, merges, and the three ways a key
//! held by an internal node leaves the tree.

use crate::BTree;
use crate::e2e_tests::helpers::{assert_invariants, contents, init_logging};

/// Seven ascending keys at degree 2 build a two-level tree whose leaf
/// occupancies stage every rebalancing case below.
fn ascending_tree() -> BTree<u64, 2> {
    let mut tree = BTree::<u64, 2>::new();
    for key in 1..=7 {
        tree.insert(key);
    }
    tree
}

#[test]
fn test_remove_letter_from_wide_tree() {
    init_logging();
    let mut tree = BTree::<char, 3>::new();
    for letter in 'A'..='P' {
        tree.insert(letter);
        assert_invariants(&tree);
    }
    assert_eq!(tree.remove(&'D'), Some('D'));
    assert_invariants(&tree);
    let expected: Vec<char> = ('A'..='P').filter(|&letter| letter != 'D').collect();
    assert_eq!(contents(&tree), expected);
}

#[test]
fn test_remove_key_promotes_successor() {
    init_logging();
    let mut tree = ascending_tree();
    // The left neighbour of 4 sits at minimum; the right one has a spare.
    assert_eq!(tree.remove(&4), Some(4));
    assert_invariants(&tree);
    assert_eq!(contents(&tree), vec![1, 2, 3, 5, 6, 7]);
}

#[test]
fn test_remove_key_promotes_predecessor() {
    init_logging();
    let mut tree = ascending_tree();
    tree.remove(&4);
    tree.remove(&2);
    // 5 is now held in the root with a spare key in its left subtree.
    assert_eq!(tree.remove(&5), Some(5));
    assert_invariants(&tree);
    assert_eq!(contents(&tree), vec![1, 3, 6, 7]);
}

#[test]
fn test_remove_key_merges_minimum_neighbours() {
    init_logging();
    let mut tree = ascending_tree();
    tree.remove(&4);
    // Both neighbours of 2 sit at minimum; they merge around it and the
    // removal recurses into the merged leaf.
    assert_eq!(tree.remove(&2), Some(2));
    assert_invariants(&tree);
    assert_eq!(contents(&tree), vec![1, 3, 5, 6, 7]);
}

#[test]
fn test_descent_borrows_from_right_sibling() {
    init_logging();
    let mut tree = ascending_tree();
    // 3's leaf sits at minimum; only its right sibling has keys to spare.
    assert_eq!(tree.remove(&3), Some(3));
    assert_invariants(&tree);
    assert_eq!(contents(&tree), vec![1, 2, 4, 5, 6, 7]);
}

#[test]
fn test_descent_borrows_from_left_sibling() {
    init_logging();
    let mut tree = ascending_tree();
    tree.remove(&1);
    tree.remove(&5);
    tree.remove(&6);
    // 7's leaf sits at minimum and only its left sibling has spare keys.
    assert_eq!(tree.remove(&7), Some(7));
    assert_invariants(&tree);
    assert_eq!(contents(&tree), vec![2, 3, 4]);
}
