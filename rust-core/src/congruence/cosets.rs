// Coset enumeration module: Breadth-first search for right-coset representatives
// This module walks words in S, T and T^-1 and keeps one element per coset of the subgroup

use log::debug;
use serde::{Deserialize, Serialize};

use crate::congruence::level::Level;
use crate::congruence::subgroup::CongruenceSubgroup;
use crate::moebius::Moebius;

/// How candidate elements are checked for duplicates during enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DedupStrategy {
    /// Compare against the previous, current and next generation only.
    ///
    /// The coset graph under S, T, T^-1 is undirected (S^-1 = -S and -I lies in every
    /// supported subgroup), so a breadth-first layer only touches its two neighbours.
    #[default]
    SlidingWindow,
    /// Compare against every representative found so far.
    Exhaustive,
}

/// The generators S = (0, -1, 1, 0), T = (1, 1, 0, 1) and T^-1 = (1, -1, 0, 1)
pub fn modular_generators() -> [Moebius; 3] {
    [
        Moebius::inversion(),
        Moebius::translation(1.0),
        Moebius::translation(-1.0),
    ]
}

/// Enumerates right-coset representatives of a congruence subgroup.
///
/// The result always starts with the identity and contains exactly one element of every
/// right coset `H g` of the subgroup `H` in the modular group.
#[derive(Debug, Clone)]
pub struct CosetEnumerator {
    subgroup: CongruenceSubgroup,
    level: Level,
    strategy: DedupStrategy,
}

impl CosetEnumerator {
    /// Create an enumerator using the sliding-window strategy
    pub fn new(subgroup: CongruenceSubgroup, level: Level) -> Self {
        Self {
            subgroup,
            level,
            strategy: DedupStrategy::default(),
        }
    }

    /// Select the dedup strategy (builder pattern)
    pub fn with_strategy(mut self, strategy: DedupStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn subgroup(&self) -> CongruenceSubgroup {
        self.subgroup
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn strategy(&self) -> DedupStrategy {
        self.strategy
    }

    /// Run the breadth-first search.
    ///
    /// Terminates once a whole generation produces no new coset, which happens because
    /// the subgroup has finite index and S, T generate the modular group.
    pub fn enumerate(&self) -> Vec<Moebius> {
        let generators = modular_generators();
        let mut representatives = vec![Moebius::identity()];

        let mut checks: Vec<Moebius>;
        let mut seeds: Vec<Moebius> = Vec::new();
        let mut added: Vec<Moebius> = vec![Moebius::identity()];
        let mut generation = 0usize;

        while !added.is_empty() {
            checks = seeds;
            seeds = added;
            added = Vec::new();

            for s in &seeds {
                for g in &generators {
                    let candidate = s.compose(g);
                    let known = match self.strategy {
                        DedupStrategy::SlidingWindow => {
                            self.contains_coset(&checks, &candidate)
                                || self.contains_coset(&seeds, &candidate)
                                || self.contains_coset(&added, &candidate)
                        }
                        DedupStrategy::Exhaustive => {
                            self.contains_coset(&representatives, &candidate)
                        }
                    };
                    if !known {
                        representatives.push(candidate);
                        added.push(candidate);
                    }
                }
            }

            generation += 1;
            debug!(
                "{}({}) generation {}: {} new, {} total",
                self.subgroup,
                self.level,
                generation,
                added.len(),
                representatives.len()
            );
        }

        representatives
    }

    fn contains_coset(&self, list: &[Moebius], candidate: &Moebius) -> bool {
        self.subgroup
            .find_coset_index(self.level, list, candidate)
            .is_some()
    }
}

/// Right-coset representatives of `subgroup` at `level`, starting with the identity.
///
/// Fails with [`crate::ModularError::InvalidLevel`] for non-positive levels.
pub fn coset_representatives(
    subgroup: CongruenceSubgroup,
    level: i64,
) -> crate::Result<Vec<Moebius>> {
    subgroup.coset_representatives(level)
}

/// Enumerate several levels at once, one rayon task per level.
#[cfg(feature = "parallel")]
pub fn coset_tables(
    subgroup: CongruenceSubgroup,
    levels: &[i64],
) -> Vec<(i64, crate::Result<Vec<Moebius>>)> {
    use rayon::prelude::*;

    levels
        .par_iter()
        .map(|&level| (level, subgroup.coset_representatives(level)))
        .collect()
}
