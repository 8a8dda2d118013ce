#[cfg(test)]
#[path = "../../tests/unit/representation/decoder_test.rs"]
mod decoder_test;

use super::{DecodeError, Representation};
use crate::genetics::{Chromosome, Genome};
use crate::models::{JobId, Operation, Problem, Solution};
use crate::utils::Random;

/// Encodes a schedule as one preference list per machine. Decoding is a list scheduling with
/// precedence deferral and first-fit insertion.
#[derive(Clone, Copy, Debug, Default)]
pub struct PreferenceListRepresentation;

impl Representation for PreferenceListRepresentation {
    fn create_random(&self, problem: &Problem, random: &dyn Random) -> Chromosome {
        let nr_jobs = problem.nr_jobs();
        let mut genomes = vec![Genome::with_capacity(nr_jobs); problem.nr_machines()];
        let mut next_order = vec![0_usize; nr_jobs];
        let mut available: Vec<JobId> =
            problem.jobs().iter().filter(|job| !job.operations().is_empty()).map(|job| job.id).collect();

        // appending in technological order keeps every prior operation ahead in its genome
        while !available.is_empty() {
            let idx = random.uniform_index(available.len());
            let job = &problem.jobs()[available[idx]];
            let operation = &job.operations()[next_order[job.id]];

            genomes[operation.machine].push(job.id);
            next_order[job.id] += 1;

            if next_order[job.id] == job.operations().len() {
                available.remove(idx);
            }
        }

        Chromosome::new(genomes)
    }

    fn decode(&self, chromosome: &Chromosome, problem: &Problem) -> Result<Solution, DecodeError> {
        let mut queues = create_queues(chromosome, problem)?;

        let nr_machines = problem.nr_machines();
        let mut context = problem.create_decode_context();
        let mut solution = Solution::new(nr_machines);
        let mut skip = vec![0_usize; nr_machines];
        let mut remaining: usize = queues.iter().map(|queue| queue.len()).sum();
        let max_queue = queues.iter().map(|queue| queue.len()).max().unwrap_or(0);
        let mut stalled_passes = 0;
        let mut placed: Vec<&Operation> = Vec::with_capacity(nr_machines);

        while remaining > 0 {
            placed.clear();

            for (machine, queue) in queues.iter_mut().enumerate() {
                if queue.is_empty() {
                    continue;
                }

                if skip[machine] >= queue.len() {
                    skip[machine] = 0;
                }

                let operation = queue[skip[machine]];
                let job = &problem.jobs()[operation.job];

                let earliest = match job.prior(operation) {
                    Some(prior) if !context.is_scheduled(prior.job, prior.order) => {
                        skip[machine] += 1;
                        continue;
                    }
                    Some(prior) => context.beginning(prior.job, prior.order).unwrap_or_default() + prior.duration,
                    None => 0,
                };

                let start = solution.insert_first_fit(operation, earliest);
                context.set_beginning(operation.job, operation.order, start);
                placed.push(operation);

                queue.remove(skip[machine]);
                skip[machine] = 0;
            }

            if placed.is_empty() {
                // every machine has cycled through all its candidates without progress
                stalled_passes += 1;
                if stalled_passes > max_queue {
                    return Err(DecodeError::Deadlock { remaining });
                }
            } else {
                stalled_passes = 0;
                remaining -= placed.len();
                placed.iter().for_each(|operation| context.set_scheduled(operation.job, operation.order));
            }
        }

        Ok(solution)
    }

    fn repair(&self, chromosome: &mut Chromosome, problem: &Problem) -> Result<(), DecodeError> {
        let nr_machines = problem.nr_machines();
        if chromosome.genomes().len() != nr_machines {
            return Err(DecodeError::CannotRepair {
                reason: format!("expected {nr_machines} genomes, got {}", chromosome.genomes().len()),
            });
        }

        let nr_jobs = problem.nr_jobs();
        let visits = |job: JobId, machine: usize| {
            problem.job(job).is_some_and(|job| job.operation_on(machine).is_some())
        };

        chromosome.genomes_mut().iter_mut().enumerate().for_each(|(machine, genome)| {
            let mut seen = vec![false; nr_jobs];
            let mut jobs: Vec<JobId> = genome
                .jobs()
                .iter()
                .copied()
                .filter(|&job| visits(job, machine) && !std::mem::replace(&mut seen[job], true))
                .collect();
            jobs.extend((0..nr_jobs).filter(|&job| !seen[job] && visits(job, machine)));

            *genome = Genome::new(jobs);
        });

        Ok(())
    }
}

/// Validates genomes and maps them to per machine queues of operations.
fn create_queues<'a>(chromosome: &Chromosome, problem: &'a Problem) -> Result<Vec<Vec<&'a Operation>>, DecodeError> {
    let nr_machines = problem.nr_machines();
    if chromosome.genomes().len() != nr_machines {
        return Err(DecodeError::GenomeCount { expected: nr_machines, actual: chromosome.genomes().len() });
    }

    chromosome
        .genomes()
        .iter()
        .enumerate()
        .map(|(machine, genome)| {
            let mut seen = vec![false; problem.nr_jobs()];
            let queue = genome
                .jobs()
                .iter()
                .map(|&job| {
                    let job_ref = problem.job(job).ok_or(DecodeError::UnknownJob { machine, job })?;
                    if std::mem::replace(&mut seen[job], true) {
                        return Err(DecodeError::DuplicateJob { machine, job });
                    }

                    job_ref.operation_on(machine).ok_or(DecodeError::MissingOperation { machine, job })
                })
                .collect::<Result<Vec<_>, _>>()?;

            match problem.jobs().iter().find(|job| !seen[job.id] && job.operation_on(machine).is_some()) {
                Some(job) => Err(DecodeError::Incomplete { machine, job: job.id }),
                None => Ok(queue),
            }
        })
        .collect()
}
