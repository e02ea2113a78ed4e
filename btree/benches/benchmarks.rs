use std::collections::BTreeMap;
use std::hint::black_box;

use btree::BTree;
use criterion::{Criterion, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

const KEYS: u64 = 10_000;

fn shuffled_keys() -> Vec<u64> {
    let mut keys: Vec<u64> = (0..KEYS).collect();
    keys.shuffle(&mut StdRng::seed_from_u64(7));
    keys
}

fn bench_insert(c: &mut Criterion) {
    let keys = shuffled_keys();
    c.bench_function("insert_10k_shuffled", |b| {
        b.iter(|| {
            let mut tree = BTree::<u64, 16>::new();
            for &key in &keys {
                tree.insert(key);
            }
            tree
        });
    });
    c.bench_function("insert_10k_shuffled_std_btreemap", |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for &key in &keys {
                map.insert(key, key);
            }
            map
        });
    });
}

fn bench_search(c: &mut Criterion) {
    let keys = shuffled_keys();
    let mut tree = BTree::<u64, 16>::new();
    for &key in &keys {
        tree.insert(key);
    }
    c.bench_function("search_10k_hits", |b| {
        b.iter(|| {
            for &key in &keys {
                black_box(tree.get(&key));
            }
        });
    });
}

fn bench_remove(c: &mut Criterion) {
    let keys = shuffled_keys();
    c.bench_function("insert_then_remove_10k", |b| {
        b.iter(|| {
            let mut tree = BTree::<u64, 16>::new();
            for &key in &keys {
                tree.insert(key);
            }
            for &key in &keys {
                tree.remove(&key);
            }
            tree
        });
    });
}

criterion_group!(benches, bench_insert, bench_search, bench_remove);
criterion_main!(benches);
