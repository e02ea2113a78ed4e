//! Overwrite semantics: an insert equal to a stored key replaces the stored
//! value without changing the key set.

use crate::BTree;
use crate::e2e_tests::helpers::{assert_invariants, init_logging};
use crate::simulation::Record;

#[test]
fn test_overwrite_replaces_value_in_leaf() {
    init_logging();
    let mut tree = BTree::<Record, 2>::new();
    assert_eq!(tree.insert(Record::new(5, 1)), None);
    let displaced = tree.insert(Record::new(5, 2));
    assert_eq!(displaced.map(|stored| stored.revision), Some(1));
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.get(&Record::probe(5)).map(|stored| stored.revision), Some(2));
}

#[test]
fn test_overwrite_of_promoted_median_keeps_keys_unique() {
    init_logging();
    let mut tree = BTree::<Record, 2>::new();
    for id in 1..=7 {
        tree.insert(Record::new(id, id));
    }
    // Id 6 sits as the median of a full leaf, so this insert splits that
    // leaf on the way down and meets the equal key at the parent instead.
    let displaced = tree.insert(Record::new(6, 99));
    assert_eq!(displaced.map(|stored| stored.revision), Some(6));
    assert_eq!(tree.len(), 7);
    assert_eq!(tree.get(&Record::probe(6)).map(|stored| stored.revision), Some(99));
    assert_invariants(&tree);
}

#[test]
fn test_overwrite_into_full_root_still_replaces() {
    init_logging();
    let mut tree = BTree::<Record, 2>::new();
    for id in 1..=3 {
        tree.insert(Record::new(id, id));
    }
    // The root is full, so the pre-insert split runs even though the key is
    // already stored; the overwrite then lands on the promoted median.
    let displaced = tree.insert(Record::new(2, 42));
    assert_eq!(displaced.map(|stored| stored.revision), Some(2));
    assert_eq!(tree.len(), 3);
    assert_eq!(tree.height(), 1);
    assert_invariants(&tree);
}
