//! The tree facade: owns the root and adapts tree height.
//!
//! All key traffic enters through [`BTree`]. The facade's own job is small
//! but load-bearing: before an insertion it splits a full root so the
//! single-pass descent never needs to backtrack, and after a removal it
//! collapses a drained internal root so the tree never carries an empty
//! level. Everything between those two moments is the recursive node
//! machinery in the `node` module.

use std::mem;

use crate::node::{Internal, Node, Root};

/// An in-memory B-tree keyed by `K`'s total order.
///
/// Every node holds between `MIN_DEGREE - 1` and `2 * MIN_DEGREE - 1` keys
/// (the root alone may hold fewer), all leaves sit at the same depth, and
/// every mutation restores both bounds in a single root-to-leaf pass, so the
/// height stays logarithmic in the number of keys.
///
/// Keys are unique under `Ord`: inserting a value equal to a stored one
/// replaces the stored value and returns it. This makes the tree usable as a
/// map by giving `K` an order over only part of its data.
///
/// The comparison must be a consistent strict total order for the lifetime
/// of all stored keys. An inconsistent order does not cause an error or a
/// guaranteed panic; it silently breaks the structure's invariants, which is
/// why it is a documented precondition rather than a checked condition.
///
/// The tree is single-owner and single-threaded: no operation suspends,
/// blocks, or synchronizes, and callers needing shared access must serialize
/// externally.
#[derive(Debug)]
pub struct BTree<K, const MIN_DEGREE: usize = 8> {
    root: Root<K, MIN_DEGREE>,
    len: usize,
    height: usize,
}

impl<K, const MIN_DEGREE: usize> BTree<K, MIN_DEGREE> {
    /// Create an empty tree: a single leaf root holding no keys.
    #[must_use]
    pub fn new() -> Self {
        const {
            assert!(
                MIN_DEGREE >= 2,
                "a B-tree needs a minimum degree of at least 2"
            );
        }
        Self {
            root: Root::default(),
            len: 0,
            height: 0,
        }
    }

    /// Number of keys currently stored.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Distance from the root to every leaf; 0 while the root is itself a
    /// leaf. Grows by one on each root split and falls by one on each root
    /// collapse.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    pub(crate) fn root_node(&self) -> &Node<K, MIN_DEGREE> {
        self.root.as_node()
    }
}

impl<K: Ord, const MIN_DEGREE: usize> BTree<K, MIN_DEGREE> {
    /// Look up the stored value equal to `key`.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&K> {
        self.root.get(key)
    }

    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Insert `value`, or overwrite the stored value equal to it.
    ///
    /// Returns the displaced value when overwriting, `None` when the key is
    /// new.
    pub fn insert(&mut self, value: K) -> Option<K> {
        if !self.root.is_below_max() {
            self.grow();
        }
        let displaced = self.root.insert_below_max(value);
        if displaced.is_none() {
            self.len += 1;
        }
        displaced
    }

    /// Remove and return the stored value equal to `key`; a no-op returning
    /// `None` when no such value exists.
    pub fn remove(&mut self, key: &K) -> Option<K> {
        let removed = self.root.remove(key);
        if removed.is_some() {
            self.len -= 1;
        }
        if !self.root.is_above_min() && self.root.shrink() {
            self.height -= 1;
            tracing::debug!(height = self.height, "internal root drained; collapsed a level");
        }
        removed
    }

    /// Split a full root ahead of an insertion: the former root is demoted
    /// to a child, its upper half moves to a new sibling, and a new internal
    /// root holds the one median key separating the two.
    fn grow(&mut self) {
        let mut former_root = mem::take(&mut self.root).demote();
        let (median, sibling) = former_root.split();
        self.root = Node::Internal(Internal::with_children(former_root, median, sibling)).promote();
        self.height += 1;
        tracing::debug!(height = self.height, "root full; split and grew a level");
    }
}

impl<K, const MIN_DEGREE: usize> Default for BTree<K, MIN_DEGREE> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tree() {
        let tree = BTree::<u64>::new();
        assert_eq!(tree.len(), 0);
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.get(&1), None);
    }

    #[test]
    fn test_insert_and_get() {
        let mut tree = BTree::<u64>::new();
        assert_eq!(tree.insert(3), None);
        assert_eq!(tree.insert(1), None);
        assert_eq!(tree.insert(2), None);
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.get(&1), Some(&1));
        assert_eq!(tree.get(&2), Some(&2));
        assert_eq!(tree.get(&3), Some(&3));
        assert_eq!(tree.get(&4), None);
    }

    #[test]
    fn test_insert_equal_replaces_without_growth() {
        let mut tree = BTree::<u64>::new();
        tree.insert(7);
        assert_eq!(tree.insert(7), Some(7));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_remove_returns_stored_value() {
        let mut tree = BTree::<u64>::new();
        tree.insert(5);
        tree.insert(9);
        assert_eq!(tree.remove(&5), Some(5));
        assert_eq!(tree.len(), 1);
        assert!(!tree.contains(&5));
        assert!(tree.contains(&9));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut tree = BTree::<u64>::new();
        tree.insert(5);
        assert_eq!(tree.remove(&6), None);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_root_split_grows_height() {
        let mut tree = BTree::<u64, 2>::new();
        tree.insert(1);
        tree.insert(2);
        tree.insert(3);
        assert_eq!(tree.height(), 0);
        tree.insert(4);
        assert_eq!(tree.height(), 1);
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn test_default_matches_new() {
        let tree = BTree::<u64, 4>::default();
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
    }
}
