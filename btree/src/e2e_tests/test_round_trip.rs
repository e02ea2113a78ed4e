//! Random round trips: insert a batch of random keys, remove every one of
//! them in a shuffled order, and end with an empty leaf root.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::BTree;
use crate::e2e_tests::helpers::{assert_invariants, init_logging};

fn round_trip<const MIN_DEGREE: usize>(seed: u64, keys: usize) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut tree = BTree::<u64, MIN_DEGREE>::new();
    let mut inserted = Vec::with_capacity(keys);
    while inserted.len() < keys {
        let key = rng.random_range(0..1_000_000);
        if tree.insert(key).is_none() {
            inserted.push(key);
        }
    }
    assert_eq!(tree.len(), keys);
    assert_invariants(&tree);

    inserted.shuffle(&mut rng);
    for (i, key) in inserted.iter().enumerate() {
        assert_eq!(tree.remove(key), Some(*key));
        if i % 64 == 0 {
            assert_invariants(&tree);
        }
    }
    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);
    assert_invariants(&tree);
}

#[test]
fn test_round_trip_minimum_degree() {
    init_logging();
    round_trip::<2>(1, 300);
}

#[test]
fn test_round_trip_degree_three() {
    init_logging();
    round_trip::<3>(2, 300);
}

#[test]
fn test_round_trip_default_degree() {
    init_logging();
    round_trip::<8>(3, 500);
}
