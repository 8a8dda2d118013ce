#[cfg(test)]
#[path = "../../tests/unit/selection/sorted_test.rs"]
mod sorted_test;

use super::Selection;
use crate::fitness::FitnessFunction;
use crate::genetics::Chromosome;
use std::sync::Arc;

/// Sorts the population once and cycles through it from the best to the worst.
#[derive(Default)]
pub struct SortedSelection {
    chromosomes: Vec<Arc<Chromosome>>,
    index: usize,
}

impl Selection for SortedSelection {
    fn add_new_population(&mut self, chromosomes: &[Arc<Chromosome>], fitness_fn: &dyn FitnessFunction) {
        self.chromosomes = chromosomes.to_vec();
        self.chromosomes.sort_by(|a, b| fitness_fn.compare(a, b));
        self.index = 0;
    }

    fn next_chromosome(&mut self) -> Option<Arc<Chromosome>> {
        if self.chromosomes.is_empty() {
            return None;
        }

        let chromosome = self.chromosomes[self.index % self.chromosomes.len()].clone();
        self.index = self.index.wrapping_add(1);

        Some(chromosome)
    }
}
