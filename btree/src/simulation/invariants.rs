//! Invariant checking for the tree's structural guarantees.
//!
//! Every guarantee the tree makes is checkable by walking the real node
//! structure: sortedness, uniform leaf depth, per-node occupancy bounds, and
//! the facade's own bookkeeping. The checker records violations instead of
//! panicking so a simulation run can report every broken property of a
//! state, not just the first.

use crate::node::Node;
use crate::tree::BTree;

/// An invariant violation detected while inspecting a tree.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violation.
    pub description: String,
    /// Where in the structure it was found.
    pub context: String,
}

/// Checker for the tree's structural invariants.
#[derive(Debug, Default)]
pub struct InvariantChecker {
    violations: Vec<InvariantViolation>,
}

impl InvariantChecker {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }

    /// Get all violations recorded so far.
    #[must_use]
    pub fn violations(&self) -> &[InvariantViolation] {
        &self.violations
    }

    #[must_use]
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    /// Clear all recorded violations.
    pub fn clear(&mut self) {
        self.violations.clear();
    }

    /// Record a violation detected outside the structural checks, such as a
    /// disagreement with a model.
    pub fn add_violation(&mut self, violation: InvariantViolation) {
        self.violations.push(violation);
    }

    /// Run every structural check against `tree`.
    pub fn check_tree<K: Ord, const MIN_DEGREE: usize>(&mut self, tree: &BTree<K, MIN_DEGREE>) {
        self.check_sorted(tree);
        self.check_balance(tree);
        self.check_occupancy(tree);
        self.check_bookkeeping(tree);
    }

    /// An in-order traversal must yield a strictly increasing key sequence.
    pub fn check_sorted<K: Ord, const MIN_DEGREE: usize>(&mut self, tree: &BTree<K, MIN_DEGREE>) {
        let keys = tree_contents(tree);
        for (i, pair) in keys.windows(2).enumerate() {
            if pair[0] >= pair[1] {
                self.violations.push(InvariantViolation {
                    description: "keys out of order".to_string(),
                    context: format!("in-order positions {i} and {}", i + 1),
                });
            }
        }
    }

    /// Every leaf must sit at the same depth from the root.
    pub fn check_balance<K, const MIN_DEGREE: usize>(&mut self, tree: &BTree<K, MIN_DEGREE>) {
        let mut depths = Vec::new();
        leaf_depths(tree.root_node(), 0, &mut depths);
        let first = depths.first().copied().unwrap_or(0);
        if depths.iter().any(|&depth| depth != first) {
            self.violations.push(InvariantViolation {
                description: "leaves at differing depths".to_string(),
                context: format!("depths range over {:?}", (depths.iter().min(), depths.iter().max())),
            });
        }
    }

    /// Every non-root node holds between `MIN_DEGREE - 1` and
    /// `2 * MIN_DEGREE - 1` keys, every internal node has one more child
    /// than keys, and all children of one parent share a kind.
    pub fn check_occupancy<K, const MIN_DEGREE: usize>(&mut self, tree: &BTree<K, MIN_DEGREE>) {
        self.walk_occupancy(tree.root_node(), 0, true);
    }

    /// The facade's cached length and height must agree with the structure.
    pub fn check_bookkeeping<K, const MIN_DEGREE: usize>(&mut self, tree: &BTree<K, MIN_DEGREE>) {
        let stored = tree_contents(tree).len();
        if stored != tree.len() {
            self.violations.push(InvariantViolation {
                description: "cached len disagrees with stored key count".to_string(),
                context: format!("len {} vs {stored} stored", tree.len()),
            });
        }

        let mut depths = Vec::new();
        leaf_depths(tree.root_node(), 0, &mut depths);
        let measured = depths.first().copied().unwrap_or(0);
        if measured != tree.height() {
            self.violations.push(InvariantViolation {
                description: "cached height disagrees with leaf depth".to_string(),
                context: format!("height {} vs depth {measured}", tree.height()),
            });
        }
    }

    fn walk_occupancy<K, const MIN_DEGREE: usize>(
        &mut self,
        node: &Node<K, MIN_DEGREE>,
        depth: usize,
        is_root: bool,
    ) {
        let keys = node.key_count();
        if keys > 2 * MIN_DEGREE - 1 {
            self.violations.push(InvariantViolation {
                description: "node above maximum occupancy".to_string(),
                context: format!("depth {depth}, {keys} keys"),
            });
        }
        if !is_root && keys < MIN_DEGREE - 1 {
            self.violations.push(InvariantViolation {
                description: "non-root node below minimum occupancy".to_string(),
                context: format!("depth {depth}, {keys} keys"),
            });
        }

        if let Node::Internal(internal) = node {
            if internal.children.len() != keys + 1 {
                self.violations.push(InvariantViolation {
                    description: "child count is not key count plus one".to_string(),
                    context: format!(
                        "depth {depth}, {keys} keys, {} children",
                        internal.children.len()
                    ),
                });
            }
            let leaves = internal
                .children
                .iter()
                .filter(|child| matches!(child, Node::Leaf(_)))
                .count();
            if leaves != 0 && leaves != internal.children.len() {
                self.violations.push(InvariantViolation {
                    description: "siblings of mixed kind".to_string(),
                    context: format!("depth {depth}"),
                });
            }
            for child in internal.children.iter() {
                self.walk_occupancy(child, depth + 1, false);
            }
        }
    }
}

/// Every stored key in ascending order, collected by in-order traversal.
///
/// This is test-harness tooling rather than tree API: iteration is not a
/// feature the tree offers, but sortedness and membership checks need to see
/// what it stores.
#[must_use]
pub fn tree_contents<'tree, K, const MIN_DEGREE: usize>(
    tree: &'tree BTree<K, MIN_DEGREE>,
) -> Vec<&'tree K> {
    let mut keys = Vec::with_capacity(tree.len());
    collect_keys(tree.root_node(), &mut keys);
    keys
}

fn collect_keys<'tree, K, const MIN_DEGREE: usize>(
    node: &'tree Node<K, MIN_DEGREE>,
    out: &mut Vec<&'tree K>,
) {
    match node {
        Node::Leaf(leaf) => out.extend(leaf.keys.iter()),
        Node::Internal(internal) => {
            for (i, child) in internal.children.iter().enumerate() {
                collect_keys(child, out);
                if i < internal.keys.len() {
                    out.push(&internal.keys[i]);
                }
            }
        }
    }
}

fn leaf_depths<K, const MIN_DEGREE: usize>(
    node: &Node<K, MIN_DEGREE>,
    depth: usize,
    out: &mut Vec<usize>,
) {
    match node {
        Node::Leaf(_) => out.push(depth),
        Node::Internal(internal) => {
            for child in internal.children.iter() {
                leaf_depths(child, depth + 1, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_tree_has_no_violations() {
        let mut tree = BTree::<u64, 2>::new();
        for key in 0..64 {
            tree.insert(key);
        }
        let mut checker = InvariantChecker::new();
        checker.check_tree(&tree);
        assert!(!checker.has_violations(), "{:?}", checker.violations());
    }

    #[test]
    fn test_contents_are_sorted_after_random_order_inserts() {
        let mut tree = BTree::<u64, 3>::new();
        for key in [9, 2, 7, 1, 8, 3, 6, 0, 5, 4] {
            tree.insert(key);
        }
        let contents: Vec<u64> = tree_contents(&tree).into_iter().copied().collect();
        assert_eq!(contents, (0..10).collect::<Vec<u64>>());
    }

    #[test]
    fn test_checker_clear_resets_state() {
        let mut checker = InvariantChecker::new();
        checker.add_violation(InvariantViolation {
            description: "test".to_string(),
            context: String::new(),
        });
        assert!(checker.has_violations());
        checker.clear();
        assert!(!checker.has_violations());
    }
}
