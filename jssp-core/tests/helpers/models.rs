use crate::fitness::Fitness;
use crate::genetics::{Chromosome, Genome};
use crate::models::{JobId, Problem, Time};
use std::sync::Arc;

/// Optimal makespan of the ft06 instance.
pub const FT06_OPTIMUM: Time = 55;

/// Two jobs on two machines: job 0 visits machines 1 then 2, job 1 visits machines 2 then 1.
pub fn create_simple_problem() -> Problem {
    Problem::new(vec![vec![3, 2], vec![2, 4]], vec![vec![1, 2], vec![2, 1]], None).unwrap()
}

/// Fisher and Thompson 6x6 instance.
pub fn create_ft06_problem() -> Problem {
    let rows: [[usize; 12]; 6] = [
        [2, 1, 0, 3, 1, 6, 3, 7, 5, 3, 4, 6],
        [1, 8, 2, 5, 4, 10, 5, 10, 0, 10, 3, 4],
        [2, 5, 3, 4, 5, 8, 0, 9, 1, 1, 4, 7],
        [1, 5, 0, 5, 2, 5, 3, 3, 4, 8, 5, 9],
        [2, 9, 1, 3, 4, 5, 5, 4, 0, 3, 3, 1],
        [1, 3, 3, 3, 5, 9, 0, 10, 4, 4, 2, 1],
    ];

    let (machine_sequence, processing_time) = rows
        .iter()
        .map(|row| row.chunks(2).map(|pair| (pair[0] + 1, pair[1] as Time)).unzip::<_, _, Vec<_>, Vec<_>>())
        .unzip();

    Problem::new(processing_time, machine_sequence, Some(FT06_OPTIMUM)).unwrap()
}

pub fn create_chromosome(genomes: Vec<Vec<JobId>>) -> Chromosome {
    Chromosome::new(genomes.into_iter().map(Genome::new).collect())
}

/// Creates a chromosome which has only fitness assigned. Genomes are made distinct by `id`.
pub fn create_chromosome_with_fitness(id: usize, fitness: Fitness) -> Arc<Chromosome> {
    let mut chromosome = create_chromosome(vec![vec![id]]);
    chromosome.set_evaluation(fitness, None);

    Arc::new(chromosome)
}

pub fn create_chromosomes_with_fitness(fitness: &[Fitness]) -> Vec<Arc<Chromosome>> {
    fitness.iter().enumerate().map(|(id, &fitness)| create_chromosome_with_fitness(id, fitness)).collect()
}

pub fn get_fitness(chromosomes: &[Arc<Chromosome>]) -> Vec<Fitness> {
    chromosomes.iter().filter_map(|chromosome| chromosome.fitness()).collect()
}
