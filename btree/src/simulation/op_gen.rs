//! Reproducible operation-sequence generation.
//!
//! Operations are drawn from a seeded [`StdRng`], so a given seed always
//! produces the same sequence. Keys come from a deliberately small id pool:
//! collisions are what drive overwrites, successful removals, and lookup
//! hits, and a tight pool produces plenty of each.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A key/payload record ordered by `id` alone.
///
/// The revision rides along without taking part in the comparison, so
/// inserting a record whose id is already stored replaces the stored
/// revision. This is the "map keyed by the order" usage the tree supports.
#[derive(Debug, Clone, Copy)]
pub struct Record {
    pub id: u64,
    pub revision: u64,
}

impl Record {
    #[must_use]
    pub const fn new(id: u64, revision: u64) -> Self {
        Self { id, revision }
    }

    /// A lookup or removal probe: ordering ignores the revision, so a probe
    /// compares equal to whatever revision is stored under `id`.
    #[must_use]
    pub const fn probe(id: u64) -> Self {
        Self::new(id, 0)
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Record {}

impl PartialOrd for Record {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Record {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}

/// Configuration for operation generation.
#[derive(Debug, Clone)]
pub struct OpGenConfig {
    /// Size of the id pool; smaller pools produce more overwrites and hits.
    pub id_pool_size: u64,
    /// Probability of generating a removal (0.0 - 1.0).
    pub remove_rate: f64,
    /// Probability of generating a lookup (0.0 - 1.0).
    pub lookup_rate: f64,
}

impl Default for OpGenConfig {
    fn default() -> Self {
        Self {
            id_pool_size: 64,
            remove_rate: 0.3,
            lookup_rate: 0.2,
        }
    }
}

/// A single generated tree operation.
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    /// Insert or overwrite a record.
    Insert(Record),
    /// Remove the record with this id, if present.
    Remove(u64),
    /// Look up the record with this id.
    Lookup(u64),
}

/// Generates a reproducible stream of operations from a seed.
#[derive(Debug)]
pub struct OperationGenerator {
    config: OpGenConfig,
    rng: StdRng,
    revision: u64,
}

impl OperationGenerator {
    #[must_use]
    pub fn new(seed: u64, config: OpGenConfig) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
            revision: 0,
        }
    }

    /// Draw the next operation. Revisions increase monotonically so every
    /// insert carries a distinguishable payload.
    pub fn next_operation(&mut self) -> Operation {
        let id = self.rng.random_range(0..self.config.id_pool_size);
        let roll: f64 = self.rng.random();
        if roll < self.config.remove_rate {
            Operation::Remove(id)
        } else if roll < self.config.remove_rate + self.config.lookup_rate {
            Operation::Lookup(id)
        } else {
            self.revision += 1;
            Operation::Insert(Record::new(id, self.revision))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_ordering_ignores_revision() {
        assert_eq!(Record::new(5, 1), Record::new(5, 99));
        assert!(Record::new(4, 99) < Record::new(5, 1));
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = OperationGenerator::new(42, OpGenConfig::default());
        let mut b = OperationGenerator::new(42, OpGenConfig::default());
        for _ in 0..100 {
            let (x, y) = (a.next_operation(), b.next_operation());
            assert_eq!(format!("{x:?}"), format!("{y:?}"));
        }
    }

    #[test]
    fn test_ids_stay_in_pool() {
        let config = OpGenConfig {
            id_pool_size: 8,
            ..OpGenConfig::default()
        };
        let mut generator = OperationGenerator::new(7, config);
        for _ in 0..200 {
            let id = match generator.next_operation() {
                Operation::Insert(record) => record.id,
                Operation::Remove(id) | Operation::Lookup(id) => id,
            };
            assert!(id < 8);
        }
    }
}
