#[cfg(test)]
#[path = "../../tests/unit/evolution/controller_test.rs"]
mod controller_test;

use super::*;
use crate::fitness::{Fitness, FitnessFunction, Makespan};
use crate::genetics::{Chromosome, Population, PopulationHistory};
use crate::hall_of_fame::HallOfFame;
use crate::models::Problem;
use crate::representation::{DecodeError, Representation};
use crate::selection::Selection;
use crate::utils::*;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use std::time::Duration;

/// Specifies why the evolution has stopped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TerminationReason {
    /// All generations were processed.
    Completed,
    /// A composed generation lost some job ids.
    InvariantViolated {
        /// A generation which composed the broken population.
        generation: usize,
    },
    /// The run was cancelled externally.
    Cancelled,
}

impl Display for TerminationReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::Completed => write!(f, "completed"),
            TerminationReason::InvariantViolated { generation } => {
                write!(f, "structural invariant violated after generation {generation}")
            }
            TerminationReason::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Keeps the outcome of the evolution run.
#[derive(Clone, Debug)]
pub struct EvolutionResult {
    /// The best chromosome found, with its decoded solution.
    pub best: Arc<Chromosome>,
    /// Fitness of the best chromosome.
    pub fitness: Fitness,
    /// Amount of evaluated generations.
    pub generations: usize,
    /// Run time excluding paused intervals.
    pub duration: Duration,
    /// Termination reason.
    pub termination: TerminationReason,
    /// Amount of penalized chromosomes over the whole run.
    pub penalized: usize,
}

/// Runs the genetic algorithm: evaluates generations in parallel and composes the next ones
/// from crossover offspring, mutated chromosomes and random fill.
pub struct EvolutionController {
    problem: Arc<Problem>,
    config: EvolutionConfig,
    environment: Arc<Environment>,
    representation: Arc<dyn Representation>,
    fitness_fn: Arc<dyn FitnessFunction>,
    sink: Option<Box<dyn DataSink>>,
    control: RunControl,
    history: PopulationHistory,
}

impl EvolutionController {
    /// Creates a new instance of `EvolutionController`.
    pub fn new(problem: Arc<Problem>, config: EvolutionConfig, environment: Arc<Environment>) -> Self {
        let representation = config.representation.create();
        let history = PopulationHistory::new(config.history_size);

        Self {
            problem,
            config,
            environment,
            representation,
            fitness_fn: Arc::new(Makespan),
            sink: None,
            control: RunControl::default(),
            history,
        }
    }

    /// Sets a custom representation.
    pub fn with_representation(mut self, representation: Arc<dyn Representation>) -> Self {
        self.representation = representation;
        self
    }

    /// Sets a custom fitness function.
    pub fn with_fitness_function(mut self, fitness_fn: Arc<dyn FitnessFunction>) -> Self {
        self.fitness_fn = fitness_fn;
        self
    }

    /// Sets a data sink which receives progress observations.
    pub fn with_sink(mut self, sink: Box<dyn DataSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Sets run control handle.
    pub fn with_control(mut self, control: RunControl) -> Self {
        self.control = control;
        self
    }

    /// Returns a run control handle which can be used from other threads.
    pub fn control(&self) -> RunControl {
        self.control.clone()
    }

    /// Returns recent populations.
    pub fn history(&self) -> &PopulationHistory {
        &self.history
    }

    /// Returns configuration.
    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    /// Runs the evolution until max generations are processed, the structural check fails or
    /// the run is cancelled.
    pub fn run(&mut self) -> GenericResult<EvolutionResult> {
        let timer = Timer::start();
        let mut paused = Duration::ZERO;

        let telemetry = Telemetry::new(self.environment.logger.clone(), self.config.log_best);
        telemetry.log(format!("configured with: {}", self.config).as_str());

        let pool = self.config.max_threads.map(ThreadPool::new).transpose()?;
        let mut hall_of_fame = HallOfFame::new(self.config.hall_of_fame_size, self.fitness_fn.clone());
        let mut selection = self.config.selection.create(
            self.problem.effective_lower_bound(),
            self.config.selection_aggression,
            self.environment.random.clone(),
        );
        self.history = PopulationHistory::new(self.config.history_size);

        self.control.start();

        let (mut chromosomes, init_time) = Timer::measure_duration(|| {
            (0..self.config.population_size)
                .map(|_| self.representation.create_random(&self.problem, self.environment.random.as_ref()))
                .collect::<Vec<_>>()
        });
        telemetry.on_initial(chromosomes.len(), init_time);

        let worst = self.fitness_fn.worst_fitness();
        let mut best: Option<Arc<Chromosome>> = None;
        let mut penalized_total = 0;
        let mut generations = 0;
        let mut termination = TerminationReason::Completed;

        for generation in 0..self.config.max_generations {
            if generation > 0 {
                paused += self.control.wait_if_paused();
                if self.control.is_cancelled() {
                    termination = TerminationReason::Cancelled;
                    break;
                }
            }

            let generation_time = Timer::start();
            let (evaluated, errors) = self.evaluate(chromosomes, pool.as_ref());
            let population = Population::new(generation, evaluated);

            if let Some(error) = errors.first() {
                telemetry.log(format!("generation {generation}: cannot decode chromosome: {error}").as_str());
            }
            penalized_total += errors.len();

            population.chromosomes.iter().filter(|chromosome| !chromosome.is_penalized()).for_each(|chromosome| {
                hall_of_fame.add_chromosome(chromosome.clone());
            });

            let generation_best = population
                .chromosomes
                .iter()
                .min_by(|a, b| self.fitness_fn.compare(a, b))
                .cloned()
                .ok_or_else(|| GenericError::from("population is empty"))?;

            let current = generation_best.fitness().unwrap_or(worst);
            let is_improved =
                best.as_ref().and_then(|best| best.fitness()).is_none_or(|known| self.fitness_fn.is_better(current, known));
            if is_improved {
                best = Some(generation_best);
            }
            let best_fitness = best.as_ref().and_then(|best| best.fitness()).unwrap_or(worst);

            let mean = mean_fitness(&population.chromosomes).unwrap_or(worst as Float);
            let hall_of_fame_average = hall_of_fame.average().unwrap_or(worst as Float);

            if let Some(sink) = self.sink.as_mut() {
                sink.add_data_point(ProgressMetric::BestFitness, generation, best_fitness as Float);
                sink.add_data_point(ProgressMetric::HallOfFameAverage, generation, hall_of_fame_average);
                sink.add_data_point(ProgressMetric::CurrentFitness, generation, current as Float);
                sink.add_data_point(ProgressMetric::CumulativeFitness, generation, mean);
            }

            telemetry.on_generation(
                &GenerationStatistics {
                    generation,
                    best: best_fitness,
                    current,
                    mean,
                    penalized: errors.len(),
                    hall_of_fame: hall_of_fame.len(),
                },
                generation_time,
            );

            generations = generation + 1;
            selection.add_new_population(&population.chromosomes, self.fitness_fn.as_ref());
            self.history.push(population);

            if generations == self.config.max_generations {
                break;
            }

            chromosomes = self.compose(selection.as_mut(), &hall_of_fame);

            if self.config.check_correctness {
                let nr_jobs = self.problem.nr_jobs();
                if !chromosomes.iter().all(|chromosome| chromosome.contains_all_jobs(nr_jobs)) {
                    termination = TerminationReason::InvariantViolated { generation };
                    break;
                }
            }
        }

        self.control.finish();

        let best = best.ok_or_else(|| GenericError::from("no chromosome was evaluated"))?;
        let fitness = best.fitness().unwrap_or(worst);
        let duration = timer.elapsed().saturating_sub(paused);

        telemetry.on_result(generations, fitness, duration, termination.to_string().as_str());

        Ok(EvolutionResult { best, fitness, generations, duration, termination, penalized: penalized_total })
    }

    /// Evaluates chromosomes in parallel. Returns them frozen, with decode errors of penalized ones.
    fn evaluate(
        &self,
        chromosomes: Vec<Chromosome>,
        pool: Option<&ThreadPool>,
    ) -> (Vec<Arc<Chromosome>>, Vec<DecodeError>) {
        let problem = self.problem.as_ref();
        let representation = self.representation.as_ref();
        let fitness_fn = self.fitness_fn.as_ref();

        let evaluate_all = move || {
            parallel_into_collect(chromosomes, |chromosome| {
                evaluate_chromosome(chromosome, problem, representation, fitness_fn)
            })
        };

        let results = match pool {
            Some(pool) => pool.execute(evaluate_all),
            None => evaluate_all(),
        };

        let mut errors = vec![];
        let chromosomes = results
            .into_iter()
            .map(|(chromosome, error)| {
                errors.extend(error);
                Arc::new(chromosome)
            })
            .collect();

        (chromosomes, errors)
    }

    /// Composes the next generation.
    fn compose(&self, selection: &mut dyn Selection, hall_of_fame: &HallOfFame) -> Vec<Chromosome> {
        let random = self.environment.random.as_ref();
        let config = &self.config;
        let mut next = Vec::with_capacity(config.population_size);

        if !config.crossover_operators.is_empty() {
            (0..config.crossover_amount()).for_each(|_| {
                let parents = (
                    select_parent(selection, hall_of_fame, config.hall_of_fame_probability, random),
                    select_parent(selection, hall_of_fame, config.hall_of_fame_probability, random),
                );
                let operator = config.crossover_operators[random.uniform_index(config.crossover_operators.len())];

                if let (Some(parent1), Some(parent2)) = parents {
                    next.push(operator.create_offspring(&parent1, &parent2, random));
                }
            });
        }

        if !config.mutation_operators.is_empty() {
            (0..config.mutation_amount()).for_each(|_| {
                let operator = config.mutation_operators[random.uniform_index(config.mutation_operators.len())];

                if let Some(parent) = selection.next_chromosome() {
                    next.push(operator.apply_mutation(&parent, config.sub_genome_mutation_probability, random));
                }
            });
        }

        next.truncate(config.population_size);
        while next.len() < config.population_size {
            next.push(self.representation.create_random(&self.problem, random));
        }

        next
    }
}

fn select_parent(
    selection: &mut dyn Selection,
    hall_of_fame: &HallOfFame,
    probability: Float,
    random: &(dyn Random + Send + Sync),
) -> Option<Arc<Chromosome>> {
    let from_hall_of_fame = if random.is_hit(probability) { hall_of_fame.random_chromosome(random) } else { None };

    from_hall_of_fame.or_else(|| selection.next_chromosome())
}

/// Decodes and scores the chromosome. If decoding fails, the chromosome is repaired once and
/// decoded again, otherwise it gets the worst fitness.
fn evaluate_chromosome(
    mut chromosome: Chromosome,
    problem: &Problem,
    representation: &dyn Representation,
    fitness_fn: &dyn FitnessFunction,
) -> (Chromosome, Option<DecodeError>) {
    let decoded = representation.decode(&chromosome, problem).or_else(|_| {
        representation.repair(&mut chromosome, problem)?;
        representation.decode(&chromosome, problem)
    });

    match decoded {
        Ok(solution) => {
            let fitness = fitness_fn.fitness(&solution);
            chromosome.set_evaluation(fitness, Some(solution));
            (chromosome, None)
        }
        Err(error) => {
            chromosome.set_evaluation(fitness_fn.worst_fitness(), None);
            (chromosome, Some(error))
        }
    }
}

/// Returns mean fitness of chromosomes which are not penalized.
fn mean_fitness(chromosomes: &[Arc<Chromosome>]) -> Option<Float> {
    let (sum, count) = chromosomes
        .iter()
        .filter(|chromosome| !chromosome.is_penalized())
        .filter_map(|chromosome| chromosome.fitness())
        .fold((0., 0_usize), |(sum, count), fitness| (sum + fitness as Float, count + 1));

    if count > 0 { Some(sum / count as Float) } else { None }
}
