//! Simulation harness: a tree and a model map driven in lockstep.
//!
//! The model is `std::collections::BTreeMap`, whose behavior is the
//! ground truth for membership and overwrite semantics. Every operation's
//! result is compared against the model's, the structural invariants are
//! checked at a configurable interval, and the final contents of both sides
//! are compared in full.

use std::collections::BTreeMap;

use super::invariants::{InvariantChecker, InvariantViolation, tree_contents};
use super::op_gen::{OpGenConfig, Operation, OperationGenerator, Record};
use crate::tree::BTree;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// Random seed for reproducibility.
    pub seed: u64,
    /// Number of operations to apply.
    pub operations: u64,
    /// How many operations between structural invariant checks.
    pub check_interval: u64,
    /// Operation mix configuration.
    pub op_config: OpGenConfig,
}

impl SimulatorConfig {
    /// Create a simulator config with the given seed and default mix.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            operations: 1_000,
            check_interval: 16,
            op_config: OpGenConfig::default(),
        }
    }

    #[must_use]
    pub const fn with_operations(mut self, operations: u64) -> Self {
        self.operations = operations;
        self
    }

    #[must_use]
    pub const fn with_check_interval(mut self, check_interval: u64) -> Self {
        self.check_interval = check_interval;
        self
    }

    #[must_use]
    pub fn with_op_config(mut self, op_config: OpGenConfig) -> Self {
        self.op_config = op_config;
        self
    }
}

/// Results from a simulation run.
#[derive(Debug)]
pub struct SimulationResult {
    /// The seed used for this run.
    pub seed: u64,
    /// Number of operations applied.
    pub operations_applied: u64,
    /// Inserts of previously absent ids.
    pub inserts: u64,
    /// Inserts that overwrote a stored record.
    pub overwrites: u64,
    /// Removals that found their target.
    pub removes: u64,
    /// Removals of absent ids (defined no-ops).
    pub misses: u64,
    /// Violations detected, structural or model disagreement.
    pub violations: Vec<InvariantViolation>,
}

impl SimulationResult {
    /// Whether the run completed without any violation.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Drives a [`BTree`] and a model map through one seeded operation stream.
#[derive(Debug)]
pub struct Simulator<const MIN_DEGREE: usize = 8> {
    config: SimulatorConfig,
    generator: OperationGenerator,
    tree: BTree<Record, MIN_DEGREE>,
    model: BTreeMap<u64, u64>,
    checker: InvariantChecker,
}

impl<const MIN_DEGREE: usize> Simulator<MIN_DEGREE> {
    #[must_use]
    pub fn new(config: SimulatorConfig) -> Self {
        let generator = OperationGenerator::new(config.seed, config.op_config.clone());
        Self {
            config,
            generator,
            tree: BTree::new(),
            model: BTreeMap::new(),
            checker: InvariantChecker::new(),
        }
    }

    /// Apply the configured number of operations and report.
    pub fn run(mut self) -> SimulationResult {
        let mut inserts = 0;
        let mut overwrites = 0;
        let mut removes = 0;
        let mut misses = 0;
        let interval = self.config.check_interval.max(1);

        for step in 0..self.config.operations {
            match self.generator.next_operation() {
                Operation::Insert(record) => {
                    let displaced = self.tree.insert(record).map(|stored| stored.revision);
                    let expected = self.model.insert(record.id, record.revision);
                    if displaced == expected {
                        if expected.is_some() {
                            overwrites += 1;
                        } else {
                            inserts += 1;
                        }
                    } else {
                        self.checker.add_violation(InvariantViolation {
                            description: "insert result disagrees with model".to_string(),
                            context: format!("step {step}, id {}", record.id),
                        });
                    }
                }
                Operation::Remove(id) => {
                    let removed = self.tree.remove(&Record::probe(id)).map(|stored| stored.revision);
                    let expected = self.model.remove(&id);
                    if removed == expected {
                        if expected.is_some() {
                            removes += 1;
                        } else {
                            misses += 1;
                        }
                    } else {
                        self.checker.add_violation(InvariantViolation {
                            description: "remove result disagrees with model".to_string(),
                            context: format!("step {step}, id {id}"),
                        });
                    }
                }
                Operation::Lookup(id) => {
                    let found = self.tree.get(&Record::probe(id)).map(|stored| stored.revision);
                    let expected = self.model.get(&id).copied();
                    if found != expected {
                        self.checker.add_violation(InvariantViolation {
                            description: "lookup result disagrees with model".to_string(),
                            context: format!("step {step}, id {id}"),
                        });
                    }
                }
            }

            if self.tree.len() != self.model.len() {
                self.checker.add_violation(InvariantViolation {
                    description: "tree len disagrees with model len".to_string(),
                    context: format!(
                        "step {step}: tree {} vs model {}",
                        self.tree.len(),
                        self.model.len()
                    ),
                });
            }
            if step % interval == 0 {
                self.checker.check_tree(&self.tree);
            }
        }

        self.checker.check_tree(&self.tree);
        let actual: Vec<(u64, u64)> = tree_contents(&self.tree)
            .into_iter()
            .map(|stored| (stored.id, stored.revision))
            .collect();
        let expected: Vec<(u64, u64)> = self
            .model
            .iter()
            .map(|(&id, &revision)| (id, revision))
            .collect();
        if actual != expected {
            self.checker.add_violation(InvariantViolation {
                description: "final contents disagree with model".to_string(),
                context: format!("{} stored vs {} expected", actual.len(), expected.len()),
            });
        }

        SimulationResult {
            seed: self.config.seed,
            operations_applied: self.config.operations,
            inserts,
            overwrites,
            removes,
            misses,
            violations: self.checker.violations().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_seed<const MIN_DEGREE: usize>(seed: u64) -> SimulationResult {
        let config = SimulatorConfig::new(seed).with_operations(2_000);
        let result = Simulator::<MIN_DEGREE>::new(config).run();
        assert!(
            result.passed(),
            "seed {seed} violated invariants: {:?}",
            result.violations
        );
        result
    }

    #[test]
    fn test_minimum_viable_degree() {
        for seed in 1..=5 {
            run_seed::<2>(seed);
        }
    }

    #[test]
    fn test_small_degree() {
        for seed in 1..=5 {
            run_seed::<3>(seed);
        }
    }

    #[test]
    fn test_default_degree() {
        for seed in 1..=5 {
            run_seed::<8>(seed);
        }
    }

    #[test]
    fn test_removal_heavy_mix_shrinks_without_violations() {
        let op_config = OpGenConfig {
            id_pool_size: 32,
            remove_rate: 0.6,
            lookup_rate: 0.1,
        };
        let config = SimulatorConfig::new(99)
            .with_operations(3_000)
            .with_op_config(op_config);
        let result = Simulator::<2>::new(config).run();
        assert!(result.passed(), "{:?}", result.violations);
        assert!(result.removes > 0);
        assert!(result.misses > 0);
    }

    #[test]
    fn test_same_seed_is_reproducible() {
        let first = run_seed::<3>(1234);
        let second = run_seed::<3>(1234);
        assert_eq!(first.inserts, second.inserts);
        assert_eq!(first.overwrites, second.overwrites);
        assert_eq!(first.removes, second.removes);
        assert_eq!(first.misses, second.misses);
    }
}
