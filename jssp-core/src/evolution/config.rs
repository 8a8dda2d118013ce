#[cfg(test)]
#[path = "../../tests/unit/evolution/config_test.rs"]
mod config_test;

use crate::genetics::DEFAULT_HISTORY_SIZE;
use crate::operators::{CrossoverKind, MutationKind};
use crate::representation::RepresentationKind;
use crate::selection::SelectionKind;
use crate::utils::{round_to, Float, GenericError, GenericResult};
use std::fmt::{Display, Formatter};

/// A precision used to round crossover and mutation fractions.
const FRACTION_PRECISION: Float = 1000.;

/// A configuration which controls evolution execution.
#[derive(Clone, Debug, PartialEq)]
pub struct EvolutionConfig {
    /// Amount of chromosomes in each generation.
    pub population_size: usize,
    /// A share of the next generation created by crossover.
    pub crossover_fraction: Float,
    /// A share of the next generation created by mutation.
    pub mutation_fraction: Float,
    /// A probability of each genome to be mutated.
    pub sub_genome_mutation_probability: Float,
    /// Max amount of chromosomes kept in the hall of fame.
    pub hall_of_fame_size: usize,
    /// A probability of a crossover parent to be taken from the hall of fame.
    pub hall_of_fame_probability: Float,
    /// A roulette wheel selection pressure: 0 is neutral, positive favors the best.
    pub selection_aggression: Float,
    /// Crossover operators to pick from uniformly.
    pub crossover_operators: Vec<CrossoverKind>,
    /// Mutation operators to pick from uniformly.
    pub mutation_operators: Vec<MutationKind>,
    /// A selection strategy.
    pub selection: SelectionKind,
    /// A problem representation.
    pub representation: RepresentationKind,
    /// Amount of generations to run.
    pub max_generations: usize,
    /// Checks after each generation that every genome keeps the full job set.
    pub check_correctness: bool,
    /// Amount of recent populations kept, `None` keeps all of them.
    pub history_size: Option<usize>,
    /// Max amount of threads used for evaluation, `None` uses the global pool.
    pub max_threads: Option<usize>,
    /// Specifies how often (in generations) progress is logged.
    pub log_best: usize,
}

impl EvolutionConfig {
    /// Renormalizes crossover and mutation fractions so that their sum does not exceed one.
    /// Both values are rounded to three decimal places.
    pub fn normalize(&mut self) {
        let sum = (self.crossover_fraction + self.mutation_fraction).max(1.);

        self.crossover_fraction = round_to(self.crossover_fraction / sum, FRACTION_PRECISION);
        self.mutation_fraction = round_to(self.mutation_fraction / sum, FRACTION_PRECISION);
    }

    /// Returns amount of chromosomes created by crossover in each generation.
    pub fn crossover_amount(&self) -> usize {
        (self.population_size as Float * self.crossover_fraction) as usize
    }

    /// Returns amount of chromosomes created by mutation in each generation.
    pub fn mutation_amount(&self) -> usize {
        (self.population_size as Float * self.mutation_fraction) as usize
    }

    fn validate(&self) -> GenericResult<()> {
        let mut errors = vec![];

        if self.population_size == 0 {
            errors.push(GenericError::from("population size should be positive"));
        }

        [
            ("crossover fraction", self.crossover_fraction),
            ("mutation fraction", self.mutation_fraction),
            ("sub genome mutation probability", self.sub_genome_mutation_probability),
            ("hall of fame probability", self.hall_of_fame_probability),
        ]
        .into_iter()
        .filter(|(_, value)| !(0. ..=1.).contains(value))
        .for_each(|(name, value)| errors.push(format!("{name} should be in [0, 1] range, got {value}").into()));

        if !self.selection_aggression.is_finite() {
            errors.push("selection aggression should be a finite number".into());
        }

        if self.hall_of_fame_size == 0 {
            errors.push("hall of fame size should be positive".into());
        }

        if self.max_generations == 0 {
            errors.push("max generations should be positive".into());
        }

        if self.log_best == 0 {
            errors.push("log interval should be positive".into());
        }

        if self.history_size == Some(0) {
            errors.push("history size should be positive".into());
        }

        if self.max_threads == Some(0) {
            errors.push("max threads should be positive".into());
        }

        if errors.is_empty() { Ok(()) } else { Err(GenericError::join_many(&errors, ", ").into()) }
    }
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 200,
            crossover_fraction: 0.4,
            mutation_fraction: 0.3,
            sub_genome_mutation_probability: 0.4,
            hall_of_fame_size: 300,
            hall_of_fame_probability: 0.2,
            selection_aggression: 0.,
            crossover_operators: vec![CrossoverKind::Lox],
            mutation_operators: vec![MutationKind::Inversion],
            selection: SelectionKind::default(),
            representation: RepresentationKind::default(),
            max_generations: 1000,
            check_correctness: false,
            history_size: Some(DEFAULT_HISTORY_SIZE),
            max_threads: None,
            log_best: 100,
        }
    }
}

impl Display for EvolutionConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let join = |names: Vec<String>| names.join(",");

        write!(
            f,
            "Size: {} agg: {} C: {} M: {} P: {} Fame: {} FP: {} Sel: {} CO: [{}] MO: [{}]",
            self.population_size,
            self.selection_aggression,
            self.crossover_fraction,
            self.mutation_fraction,
            self.sub_genome_mutation_probability,
            self.hall_of_fame_size,
            self.hall_of_fame_probability,
            self.selection,
            join(self.crossover_operators.iter().map(|op| op.to_string()).collect()),
            join(self.mutation_operators.iter().map(|op| op.to_string()).collect()),
        )
    }
}

/// Provides configurable way to build evolution configuration using fluent interface style.
#[derive(Default)]
pub struct EvolutionConfigBuilder {
    config: EvolutionConfig,
}

impl EvolutionConfigBuilder {
    /// Sets population size. Default is 200.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.config.population_size = size;
        self
    }

    /// Sets crossover and mutation fractions. Default is 0.4 and 0.3.
    pub fn with_fractions(mut self, crossover: Float, mutation: Float) -> Self {
        self.config.crossover_fraction = crossover;
        self.config.mutation_fraction = mutation;
        self
    }

    /// Sets a probability of each genome to be mutated. Default is 0.4.
    pub fn with_sub_genome_mutation_probability(mut self, probability: Float) -> Self {
        self.config.sub_genome_mutation_probability = probability;
        self
    }

    /// Sets hall of fame size and the probability to take a crossover parent from it.
    /// Default is 300 and 0.2.
    pub fn with_hall_of_fame(mut self, size: usize, probability: Float) -> Self {
        self.config.hall_of_fame_size = size;
        self.config.hall_of_fame_probability = probability;
        self
    }

    /// Sets selection aggression. Default is 0.
    pub fn with_selection_aggression(mut self, aggression: Float) -> Self {
        self.config.selection_aggression = aggression;
        self
    }

    /// Sets crossover operators. Default is LOX.
    pub fn with_crossover_operators(mut self, operators: Vec<CrossoverKind>) -> Self {
        self.config.crossover_operators = operators;
        self
    }

    /// Sets mutation operators. Default is inversion.
    pub fn with_mutation_operators(mut self, operators: Vec<MutationKind>) -> Self {
        self.config.mutation_operators = operators;
        self
    }

    /// Sets selection strategy. Default is roulette wheel.
    pub fn with_selection(mut self, selection: SelectionKind) -> Self {
        self.config.selection = selection;
        self
    }

    /// Sets problem representation. Default is preference list.
    pub fn with_representation(mut self, representation: RepresentationKind) -> Self {
        self.config.representation = representation;
        self
    }

    /// Sets max generations to be run by evolution. Default is 1000.
    pub fn with_max_generations(mut self, limit: usize) -> Self {
        self.config.max_generations = limit;
        self
    }

    /// Enables structural check of every generation. Default is false.
    pub fn with_check_correctness(mut self, check: bool) -> Self {
        self.config.check_correctness = check;
        self
    }

    /// Sets amount of kept populations, `None` keeps all. Default is 20.
    pub fn with_history_size(mut self, size: Option<usize>) -> Self {
        self.config.history_size = size;
        self
    }

    /// Sets max amount of threads used for evaluation. Default is no limit.
    pub fn with_max_threads(mut self, threads: Option<usize>) -> Self {
        self.config.max_threads = threads;
        self
    }

    /// Sets log interval in generations. Default is 100.
    pub fn with_log_best(mut self, interval: usize) -> Self {
        self.config.log_best = interval;
        self
    }

    /// Validates, normalizes and returns the evolution config.
    pub fn build(self) -> GenericResult<EvolutionConfig> {
        let mut config = self.config;
        config.validate()?;
        config.normalize();

        Ok(config)
    }
}
