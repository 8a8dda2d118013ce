#[cfg(test)]
#[path = "../../tests/unit/operators/mutation_test.rs"]
mod mutation_test;

use super::draw_cut_points;
use crate::genetics::{Chromosome, Genome};
use crate::models::JobId;
use crate::utils::{Float, GenericError, Random};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Specifies mutation operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MutationKind {
    /// Exchanges two random positions.
    Swap,
    /// Moves an element from one random position to another.
    Insertion,
    /// Reverses a random sub-sequence.
    Inversion,
}

impl MutationKind {
    /// Returns a mutated copy of the chromosome: each genome is mutated independently with
    /// the given probability. The copy is not evaluated.
    pub fn apply_mutation(&self, chromosome: &Chromosome, probability: Float, random: &dyn Random) -> Chromosome {
        let genomes = chromosome
            .genomes()
            .iter()
            .map(|genome| {
                let mut jobs = genome.jobs().to_vec();
                if random.is_hit(probability) {
                    self.mutate_genome(jobs.as_mut_slice(), random);
                }
                Genome::new(jobs)
            })
            .collect();

        Chromosome::new(genomes)
    }

    /// Mutates a single genome in place.
    pub fn mutate_genome(&self, jobs: &mut [JobId], random: &dyn Random) {
        if jobs.len() < 2 {
            return;
        }

        let max = jobs.len() as i32 - 1;
        match self {
            MutationKind::Swap => {
                let first = random.uniform_int(0, max) as usize;
                let second = random.uniform_int(0, max) as usize;
                jobs.swap(first, second);
            }
            MutationKind::Insertion => {
                let from = random.uniform_int(0, max) as usize;
                let to = random.uniform_int(0, max) as usize;
                insert(jobs, from, to);
            }
            MutationKind::Inversion => {
                let (first, second) = draw_cut_points(jobs.len() - 1, random);
                jobs[first..=second].reverse();
            }
        }
    }
}

/// Removes the element at `from` and reinserts it at `to`, shifting intermediate elements.
pub fn insert(jobs: &mut [JobId], from: usize, to: usize) {
    match from.cmp(&to) {
        std::cmp::Ordering::Less => jobs[from..=to].rotate_left(1),
        std::cmp::Ordering::Greater => jobs[to..=from].rotate_right(1),
        std::cmp::Ordering::Equal => {}
    }
}

impl FromStr for MutationKind {
    type Err = GenericError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "swap" => Ok(MutationKind::Swap),
            "insertion" => Ok(MutationKind::Insertion),
            "inversion" => Ok(MutationKind::Inversion),
            _ => Err(format!("unknown mutation operator: '{value}'").into()),
        }
    }
}

impl Display for MutationKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MutationKind::Swap => "Swap",
            MutationKind::Insertion => "Insertion",
            MutationKind::Inversion => "Inversion",
        };
        write!(f, "{name}")
    }
}
