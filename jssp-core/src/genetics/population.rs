#[cfg(test)]
#[path = "../../tests/unit/genetics/population_test.rs"]
mod population_test;

use crate::genetics::Chromosome;
use std::collections::VecDeque;
use std::sync::Arc;

/// A default amount of populations kept in history.
pub const DEFAULT_HISTORY_SIZE: usize = 20;

/// Represents chromosomes of one generation.
#[derive(Clone, Debug)]
pub struct Population {
    /// A generation index.
    pub generation: usize,
    /// Chromosomes of the generation.
    pub chromosomes: Vec<Arc<Chromosome>>,
}

impl Population {
    /// Creates a new population.
    pub fn new(generation: usize, chromosomes: Vec<Arc<Chromosome>>) -> Self {
        Self { generation, chromosomes }
    }

    /// Returns amount of chromosomes.
    pub fn size(&self) -> usize {
        self.chromosomes.len()
    }
}

/// Keeps recent populations. When capacity is set, the oldest population is dropped once
/// the window is exceeded.
#[derive(Debug)]
pub struct PopulationHistory {
    capacity: Option<usize>,
    populations: VecDeque<Population>,
}

impl PopulationHistory {
    /// Creates a new history with given capacity, `None` keeps all populations.
    pub fn new(capacity: Option<usize>) -> Self {
        Self { capacity, populations: VecDeque::new() }
    }

    /// Adds a new population evicting the oldest one if necessary.
    pub fn push(&mut self, population: Population) {
        self.populations.push_back(population);

        if let Some(capacity) = self.capacity {
            while self.populations.len() > capacity.max(1) {
                self.populations.pop_front();
            }
        }
    }

    /// Returns the most recent population.
    pub fn latest(&self) -> Option<&Population> {
        self.populations.back()
    }

    /// Returns the amount of kept populations.
    pub fn len(&self) -> usize {
        self.populations.len()
    }

    /// Returns true if history is empty.
    pub fn is_empty(&self) -> bool {
        self.populations.is_empty()
    }

    /// Iterates over kept populations from the oldest to the newest.
    pub fn iter(&self) -> impl Iterator<Item = &Population> + '_ {
        self.populations.iter()
    }

    /// Returns generation indices of kept populations.
    pub fn generations(&self) -> Vec<usize> {
        self.populations.iter().map(|population| population.generation).collect()
    }
}

impl Default for PopulationHistory {
    fn default() -> Self {
        Self::new(Some(DEFAULT_HISTORY_SIZE))
    }
}
