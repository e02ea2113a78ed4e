//! Shared helpers for scenario tests.

use std::sync::Once;

use crate::BTree;
use crate::simulation::{InvariantChecker, tree_contents};

static INIT_LOGGING: Once = Once::new();

/// Route `tracing` output through the test harness once per process, so a
/// failing scenario shows the grow and shrink events leading up to it.
pub fn init_logging() {
    INIT_LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "btree=debug".into()),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Assert that every structural invariant holds for `tree`.
pub fn assert_invariants<K: Ord, const MIN_DEGREE: usize>(tree: &BTree<K, MIN_DEGREE>) {
    let mut checker = InvariantChecker::new();
    checker.check_tree(tree);
    assert!(!checker.has_violations(), "{:?}", checker.violations());
}

/// The stored keys in ascending order, copied out for comparison.
pub fn contents<K: Ord + Clone, const MIN_DEGREE: usize>(tree: &BTree<K, MIN_DEGREE>) -> Vec<K> {
    tree_contents(tree).into_iter().cloned().collect()
}
