#[cfg(test)]
#[path = "../../tests/unit/genetics/chromosome_test.rs"]
mod chromosome_test;

use crate::fitness::Fitness;
use crate::genetics::Genome;
use crate::models::Solution;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// Represents a candidate encoding of a full schedule: one genome per machine.
///
/// Equality and hash are defined over the decoded solution when both sides have one, otherwise
/// over genomes: different preference lists can decode into the same schedule.
#[derive(Clone, Debug)]
pub struct Chromosome {
    genomes: Vec<Genome>,
    fitness: Option<Fitness>,
    solution: Option<Solution>,
}

impl Chromosome {
    /// Creates a new unevaluated chromosome.
    pub fn new(genomes: Vec<Genome>) -> Self {
        Self { genomes, fitness: None, solution: None }
    }

    /// Returns genomes, one per machine.
    pub fn genomes(&self) -> &[Genome] {
        self.genomes.as_slice()
    }

    /// Returns mutable genomes. Any cached evaluation is dropped.
    pub fn genomes_mut(&mut self) -> &mut Vec<Genome> {
        self.fitness = None;
        self.solution = None;
        &mut self.genomes
    }

    /// Returns fitness if chromosome was evaluated.
    pub fn fitness(&self) -> Option<Fitness> {
        self.fitness
    }

    /// Returns decoded solution if chromosome was decoded successfully.
    pub fn solution(&self) -> Option<&Solution> {
        self.solution.as_ref()
    }

    /// Sets evaluation result.
    pub fn set_evaluation(&mut self, fitness: Fitness, solution: Option<Solution>) {
        self.fitness = Some(fitness);
        self.solution = solution;
    }

    /// Returns true if chromosome was evaluated, but has no decoded solution.
    pub fn is_penalized(&self) -> bool {
        self.fitness.is_some() && self.solution.is_none()
    }

    /// Checks that every genome is a permutation of `0..nr_jobs`.
    pub fn contains_all_jobs(&self, nr_jobs: usize) -> bool {
        self.genomes.iter().all(|genome| genome.is_permutation_of(nr_jobs))
    }
}

impl PartialEq for Chromosome {
    fn eq(&self, other: &Self) -> bool {
        match (&self.solution, &other.solution) {
            (Some(left), Some(right)) => left == right,
            (None, None) => self.genomes == other.genomes,
            _ => false,
        }
    }
}

impl Eq for Chromosome {}

impl Hash for Chromosome {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.solution {
            Some(solution) => solution.hash(state),
            None => self.genomes.hash(state),
        }
    }
}

impl Display for Chromosome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.genomes.iter().try_for_each(|genome| writeln!(f, "{genome}"))
    }
}
