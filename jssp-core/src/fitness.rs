//! Specifies fitness function used to evaluate decoded schedules.

#[cfg(test)]
#[path = "../tests/unit/fitness_test.rs"]
mod fitness_test;

use crate::genetics::Chromosome;
use crate::models::Solution;
use crate::utils::Float;
use std::cmp::Ordering;

/// Specifies fitness value type.
pub type Fitness = u64;

/// Defines how a decoded schedule is scored and which score is better.
pub trait FitnessFunction: Send + Sync {
    /// Calculates fitness of the solution.
    fn fitness(&self, solution: &Solution) -> Fitness;

    /// Returns true if `a` is better than `b`.
    fn is_better(&self, a: Fitness, b: Fitness) -> bool;

    /// Returns true if `a` is better than `b`, used for averaged values.
    fn is_better_float(&self, a: Float, b: Float) -> bool;

    /// Returns a sentinel value used to penalize chromosomes which cannot be decoded.
    fn worst_fitness(&self) -> Fitness;

    /// Orders chromosomes from the best to the worst. Unevaluated chromosomes go last.
    fn compare(&self, a: &Chromosome, b: &Chromosome) -> Ordering {
        match (a.fitness(), b.fitness()) {
            (Some(left), Some(right)) if self.is_better(left, right) => Ordering::Less,
            (Some(left), Some(right)) if self.is_better(right, left) => Ordering::Greater,
            (Some(_), Some(_)) => Ordering::Equal,
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

/// Minimizes makespan: completion time of the last operation across all machines.
#[derive(Clone, Copy, Debug, Default)]
pub struct Makespan;

impl FitnessFunction for Makespan {
    fn fitness(&self, solution: &Solution) -> Fitness {
        solution.makespan()
    }

    fn is_better(&self, a: Fitness, b: Fitness) -> bool {
        a < b
    }

    fn is_better_float(&self, a: Float, b: Float) -> bool {
        a < b
    }

    fn worst_fitness(&self) -> Fitness {
        Fitness::MAX
    }
}
