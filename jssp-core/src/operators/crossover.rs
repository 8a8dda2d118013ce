#[cfg(test)]
#[path = "../../tests/unit/operators/crossover_test.rs"]
mod crossover_test;

use super::{draw_cut_points, has_same_jobs};
use crate::genetics::{Chromosome, Genome};
use crate::models::JobId;
use crate::utils::{GenericError, Random};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Specifies crossover operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CrossoverKind {
    /// Partially mapped crossover.
    Pmx,
    /// Order crossover.
    Ox,
    /// Linear order crossover.
    Lox,
}

impl CrossoverKind {
    /// Creates an offspring recombining each machine genome pair independently.
    /// The offspring is not evaluated.
    pub fn create_offspring(&self, parent1: &Chromosome, parent2: &Chromosome, random: &dyn Random) -> Chromosome {
        let genomes = parent1
            .genomes()
            .iter()
            .enumerate()
            .map(|(idx, genome1)| match parent2.genomes().get(idx) {
                Some(genome2) if !genome1.is_empty() && has_same_jobs(genome1.jobs(), genome2.jobs()) => {
                    Genome::new(self.recombine(genome1.jobs(), genome2.jobs(), random))
                }
                _ => genome1.clone(),
            })
            .collect();

        Chromosome::new(genomes)
    }

    fn recombine(&self, first: &[JobId], second: &[JobId], random: &dyn Random) -> Vec<JobId> {
        let len = first.len();
        match self {
            CrossoverKind::Pmx => {
                let (lo, hi) = draw_cut_points(len - 1, random);
                pmx(first, second, lo, hi)
            }
            CrossoverKind::Ox => {
                // parent roles are picked randomly per genome pair
                let (first, second) = if random.is_head_not_tails() { (first, second) } else { (second, first) };
                let (lo, hi) = draw_cut_points(len - 1, random);
                ox(first, second, lo, hi)
            }
            CrossoverKind::Lox => {
                let (lo, hi) = draw_cut_points(len, random);
                lox(first, second, lo, hi)
            }
        }
    }
}

/// Partially mapped crossover: keeps `parent1[lo..=hi]`, places parent2's values of the slice
/// following the position mapping chain, fills remaining slots from parent2.
pub fn pmx(parent1: &[JobId], parent2: &[JobId], lo: usize, hi: usize) -> Vec<JobId> {
    let len = parent1.len();
    let position_in_p2 = positions(parent2);

    let mut offspring: Vec<Option<JobId>> = vec![None; len];
    let mut copied = vec![false; position_in_p2.len()];
    (lo..=hi).for_each(|idx| {
        offspring[idx] = Some(parent1[idx]);
        copied[parent1[idx]] = true;
    });

    (lo..=hi).filter(|&idx| !copied[parent2[idx]]).for_each(|idx| {
        let value = parent2[idx];
        let mut current = idx;
        loop {
            let target = position_in_p2[parent1[current]];
            if offspring[target].is_none() {
                offspring[target] = Some(value);
                break;
            }
            current = target;
        }
    });

    offspring.into_iter().zip(parent2.iter()).map(|(value, &fallback)| value.unwrap_or(fallback)).collect()
}

/// Order crossover: keeps `parent1[lo..=hi]`, fills positions left of `lo` and then right of `hi`
/// with parent2's values in their order, skipping the copied ones.
pub fn ox(parent1: &[JobId], parent2: &[JobId], lo: usize, hi: usize) -> Vec<JobId> {
    let copied = copied_mask(parent1, lo..hi + 1);
    let mut rest = parent2.iter().copied().filter(|&job| !copied[job]);

    let mut offspring = parent1.to_vec();
    (0..lo).chain(hi + 1..parent1.len()).for_each(|idx| {
        if let Some(job) = rest.next() {
            offspring[idx] = job;
        }
    });

    offspring
}

/// Linear order crossover: keeps `parent1[lo..hi]`, the remaining parent2 values fill the left
/// side with their prefix and the right side with their suffix.
pub fn lox(parent1: &[JobId], parent2: &[JobId], lo: usize, hi: usize) -> Vec<JobId> {
    let copied = copied_mask(parent1, lo..hi);
    let rest: Vec<JobId> = parent2.iter().copied().filter(|&job| !copied[job]).collect();

    let (prefix, suffix) = rest.split_at(lo.min(rest.len()));

    prefix.iter().chain(parent1[lo..hi].iter()).chain(suffix.iter()).copied().collect()
}

fn positions(genome: &[JobId]) -> Vec<usize> {
    let max = genome.iter().copied().max().map_or(0, |max| max + 1);
    let mut positions = vec![0; max];
    genome.iter().enumerate().for_each(|(idx, &job)| positions[job] = idx);

    positions
}

fn copied_mask(parent: &[JobId], range: std::ops::Range<usize>) -> Vec<bool> {
    let max = parent.iter().copied().max().map_or(0, |max| max + 1);
    let mut mask = vec![false; max];
    parent[range].iter().for_each(|&job| mask[job] = true);

    mask
}

impl FromStr for CrossoverKind {
    type Err = GenericError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "pmx" => Ok(CrossoverKind::Pmx),
            "ox" => Ok(CrossoverKind::Ox),
            "lox" => Ok(CrossoverKind::Lox),
            _ => Err(format!("unknown crossover operator: '{value}'").into()),
        }
    }
}

impl Display for CrossoverKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CrossoverKind::Pmx => "PMX",
            CrossoverKind::Ox => "OX",
            CrossoverKind::Lox => "LOX",
        };
        write!(f, "{name}")
    }
}
