//! Contains a bounded archive of the best chromosomes seen during the whole run.

#[cfg(test)]
#[path = "../tests/unit/hall_of_fame_test.rs"]
mod hall_of_fame_test;

use crate::fitness::FitnessFunction;
use crate::genetics::Chromosome;
use crate::utils::{Float, Random};
use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// A bounded best-of archive deduplicated by chromosome equality. Members are kept ordered
/// from the best to the worst, and a running fitness sum gives the average in constant time.
pub struct HallOfFame {
    capacity: usize,
    fitness_fn: Arc<dyn FitnessFunction>,
    members: Vec<Arc<Chromosome>>,
    existing: FxHashSet<Arc<Chromosome>>,
    fitness_sum: Float,
}

impl HallOfFame {
    /// Creates a new instance of `HallOfFame`.
    pub fn new(capacity: usize, fitness_fn: Arc<dyn FitnessFunction>) -> Self {
        Self {
            capacity,
            fitness_fn,
            members: Vec::with_capacity(capacity),
            existing: FxHashSet::default(),
            fitness_sum: 0.,
        }
    }

    /// Tries to add an evaluated chromosome. Returns true if it was accepted.
    ///
    /// While the archive is not full, every new chromosome is accepted. Otherwise, it is accepted
    /// only if it is strictly better than the current worst member, which is evicted.
    pub fn add_chromosome(&mut self, chromosome: Arc<Chromosome>) -> bool {
        let Some(fitness) = chromosome.fitness() else {
            return false;
        };

        if self.capacity == 0 || self.existing.contains(&chromosome) {
            return false;
        }

        if self.members.len() >= self.capacity {
            let is_better = self
                .members
                .last()
                .and_then(|worst| worst.fitness())
                .is_none_or(|worst| self.fitness_fn.is_better(fitness, worst));

            if !is_better {
                return false;
            }

            if let Some(evicted) = self.members.pop() {
                self.existing.remove(&evicted);
                self.fitness_sum -= evicted.fitness().unwrap_or_default() as Float;
            }
        }

        let position =
            self.members.partition_point(|member| self.fitness_fn.compare(member, &chromosome) != Ordering::Greater);

        self.fitness_sum += fitness as Float;
        self.existing.insert(chromosome.clone());
        self.members.insert(position, chromosome);

        true
    }

    /// Returns a random member, all members are equally likely.
    pub fn random_chromosome(&self, random: &dyn Random) -> Option<Arc<Chromosome>> {
        if self.members.is_empty() {
            None
        } else {
            self.members.get(random.uniform_index(self.members.len())).cloned()
        }
    }

    /// Returns an average fitness of members.
    pub fn average(&self) -> Option<Float> {
        if self.members.is_empty() { None } else { Some(self.fitness_sum / self.members.len() as Float) }
    }

    /// Returns the best member.
    pub fn best(&self) -> Option<&Arc<Chromosome>> {
        self.members.first()
    }

    /// Returns the worst member.
    pub fn worst(&self) -> Option<&Arc<Chromosome>> {
        self.members.last()
    }

    /// Returns amount of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if archive has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns max amount of members.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates over members from the best to the worst.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Chromosome>> + '_ {
        self.members.iter()
    }
}

impl Display for HallOfFame {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let fitness = self
            .members
            .iter()
            .filter_map(|member| member.fitness())
            .map(|fitness| fitness.to_string())
            .collect::<Vec<_>>()
            .join(",");

        write!(f, "[{fitness}]")
    }
}
