//! Deterministic simulation testing for the tree.
//!
//! This module provides tools for exercising the tree with:
//! - Reproducible random operation sequences (all randomness is seeded)
//! - A `std::collections::BTreeMap` model driven in lockstep
//! - Structural invariant checking after every few operations
//!
//! Given the same seed, execution is identical, so any reported violation
//! can be replayed exactly.
//!
//! # Usage
//!
//! ```
//! use btree::simulation::{Simulator, SimulatorConfig};
//!
//! let config = SimulatorConfig::new(12345).with_operations(500);
//! let result = Simulator::<4>::new(config).run();
//!
//! assert!(result.passed());
//! ```

mod invariants;
mod op_gen;
mod simulator;

pub use invariants::{InvariantChecker, InvariantViolation, tree_contents};
pub use op_gen::{OpGenConfig, Operation, OperationGenerator, Record};
pub use simulator::{SimulationResult, Simulator, SimulatorConfig};
