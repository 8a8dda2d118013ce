#[cfg(test)]
#[path = "../../tests/unit/selection/roulette_test.rs"]
mod roulette_test;

use super::Selection;
use crate::fitness::FitnessFunction;
use crate::genetics::Chromosome;
use crate::models::Time;
use crate::utils::{compare_floats, Float, Random};
use std::sync::Arc;

/// A steepness of the logistic weighting.
const STEEPNESS: Float = 0.01;

/// Fitness proportional selection with logistic weighting of representative values.
///
/// Penalized chromosomes (worst fitness) never take part in sampling. The `aggression` shifts the
/// logistic midpoint: positive values favor the best chromosomes more sharply, negative values
/// flatten the pressure.
pub struct RouletteWheelSelection {
    lower_bound: Float,
    aggression: Float,
    random: Arc<dyn Random + Send + Sync>,
    chromosomes: Vec<Arc<Chromosome>>,
    cumulative_sums: Vec<Float>,
}

impl RouletteWheelSelection {
    /// Creates a new instance of `RouletteWheelSelection`.
    pub fn new(lower_bound: Time, aggression: Float, random: Arc<dyn Random + Send + Sync>) -> Self {
        Self { lower_bound: lower_bound as Float, aggression, random, chromosomes: vec![], cumulative_sums: vec![] }
    }

    /// Returns total weight of the wheel.
    pub fn total_weight(&self) -> Float {
        self.cumulative_sums.last().copied().unwrap_or(0.)
    }

    fn calculate_cumulative_sums(&mut self) {
        let fitness_values =
            self.chromosomes.iter().map(|chromosome| chromosome.fitness().unwrap_or_default() as Float).collect::<Vec<_>>();

        let max = fitness_values.iter().copied().max_by(|a, b| compare_floats(*a, *b)).unwrap_or_default();
        let mean = fitness_values.iter().sum::<Float>() / fitness_values.len().max(1) as Float;

        let lower_bound = self.lower_bound;
        let limit = max - lower_bound;
        let midpoint = if limit > 0. { (mean - lower_bound) / limit } else { 0. };
        let center = limit * (midpoint + self.aggression);

        let mut total = 0.;
        self.cumulative_sums = fitness_values
            .iter()
            .map(|&fitness| {
                let representative = limit - (fitness - lower_bound);
                let weight = 2. / (1. + (-STEEPNESS * (representative - center)).exp());

                total += (representative * weight).max(0.);
                total
            })
            .collect();
    }
}

impl Selection for RouletteWheelSelection {
    fn add_new_population(&mut self, chromosomes: &[Arc<Chromosome>], fitness_fn: &dyn FitnessFunction) {
        let worst = fitness_fn.worst_fitness();
        self.chromosomes = chromosomes
            .iter()
            .filter(|chromosome| chromosome.fitness().is_some_and(|fitness| fitness != worst))
            .cloned()
            .collect();

        if self.chromosomes.is_empty() {
            // nothing to weight: sample uniformly from the whole population
            self.chromosomes = chromosomes.to_vec();
            self.cumulative_sums.clear();
        } else {
            self.calculate_cumulative_sums();
        }
    }

    fn next_chromosome(&mut self) -> Option<Arc<Chromosome>> {
        if self.chromosomes.is_empty() {
            return None;
        }

        let total = self.total_weight();
        let idx = if total > 0. && total.is_finite() {
            let value = self.random.uniform_real(0., total);
            self.cumulative_sums.partition_point(|&sum| sum <= value).min(self.chromosomes.len() - 1)
        } else {
            self.random.uniform_index(self.chromosomes.len())
        };

        Some(self.chromosomes[idx].clone())
    }
}
