//! This module allows to configure the genetic algorithm using json file.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

use jssp_core::evolution::DEFAULT_MEAN_WINDOW;
use jssp_core::prelude::*;
use jssp_core::utils::get_cpus;
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::str::FromStr;
use std::sync::Arc;

/// An algorithm configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Specifies population configuration.
    pub population: Option<PopulationConfig>,
    /// Specifies hall of fame configuration.
    pub hall_of_fame: Option<HallOfFameConfig>,
    /// Specifies genetic operators.
    pub operators: Option<OperatorsConfig>,
    /// Specifies algorithm termination configuration.
    pub termination: Option<TerminationConfig>,
    /// Specifies how many generations are kept in memory.
    pub history: Option<HistoryConfig>,
    /// Specifies environment configuration.
    pub environment: Option<EnvironmentConfig>,
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
}

/// A population configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulationConfig {
    /// Amount of chromosomes in each generation.
    pub size: Option<usize>,
    /// A share of generation created by crossover.
    pub crossover_fraction: Option<Float>,
    /// A share of generation created by mutation.
    pub mutation_fraction: Option<Float>,
    /// A probability to mutate each genome of a mutated chromosome.
    pub sub_genome_mutation_probability: Option<Float>,
    /// A selection pressure modifier.
    pub selection_aggression: Option<Float>,
}

/// A hall of fame configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HallOfFameConfig {
    /// Max amount of remembered chromosomes.
    pub size: Option<usize>,
    /// A probability to pick a parent from the hall of fame.
    pub probability: Option<Float>,
}

/// Specifies genetic operators by their names.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorsConfig {
    /// Crossover operators: `pmx`, `ox`, `lox`.
    pub crossover: Option<Vec<String>>,
    /// Mutation operators: `swap`, `insertion`, `inversion`.
    pub mutation: Option<Vec<String>>,
    /// Selection: `roulette` or `sorted`.
    pub selection: Option<String>,
}

/// A termination configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminationConfig {
    /// Max amount of generations.
    pub max_generations: Option<usize>,
}

/// Specifies how many generations are kept in memory.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type")]
pub enum HistoryConfig {
    /// Keeps a sliding window of the latest generations.
    #[serde(rename = "bounded")]
    Bounded {
        /// Amount of kept generations.
        size: usize,
    },
    /// Keeps all generations.
    #[serde(rename = "unbounded")]
    Unbounded,
}

/// An environment configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentConfig {
    /// A seed of the random generator which makes run reproducible.
    pub seed: Option<u64>,
    /// Max amount of threads used to evaluate a generation, capped at amount of logical cpus.
    pub max_threads: Option<usize>,
    /// Specifies whether each composed generation is checked to keep all jobs.
    pub check_correctness: Option<bool>,
}

/// A telemetry configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryConfig {
    /// Specifies logging configuration.
    pub logging: Option<LoggingConfig>,
    /// Specifies progress series configuration.
    pub progress: Option<ProgressConfig>,
}

/// A logging configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Specifies whether logging is enabled.
    pub enabled: bool,
    /// Prints best known fitness every N generations.
    pub log_best: Option<usize>,
}

/// A progress series configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressConfig {
    /// A window of moving mean series.
    pub mean_window: Option<usize>,
}

impl Config {
    /// Returns mutable environment configuration, creating a default one if necessary.
    pub fn environment_mut(&mut self) -> &mut EnvironmentConfig {
        self.environment.get_or_insert_with(Default::default)
    }

    /// Enables logging.
    pub fn enable_logging(&mut self) {
        self.telemetry.get_or_insert_with(Default::default).logging.get_or_insert_with(Default::default).enabled = true;
    }

    /// Sets max amount of generations.
    pub fn set_max_generations(&mut self, max_generations: usize) {
        self.termination.get_or_insert_with(Default::default).max_generations = Some(max_generations);
    }

    /// Returns a window of moving mean series.
    pub fn mean_window(&self) -> usize {
        self.telemetry
            .as_ref()
            .and_then(|telemetry| telemetry.progress.as_ref())
            .and_then(|progress| progress.mean_window)
            .unwrap_or(DEFAULT_MEAN_WINDOW)
    }

    fn is_logging_enabled(&self) -> bool {
        self.telemetry.as_ref().and_then(|telemetry| telemetry.logging.as_ref()).is_some_and(|logging| logging.enabled)
    }
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<Config> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}

/// Creates an evolution config builder from the json config. Unspecified settings keep their
/// default values.
pub fn create_builder_from_config(config: &Config) -> GenericResult<EvolutionConfigBuilder> {
    let defaults = EvolutionConfig::default();
    let mut builder = EvolutionConfigBuilder::default();

    if let Some(population) = &config.population {
        if let Some(size) = population.size {
            builder = builder.with_population_size(size);
        }

        if population.crossover_fraction.is_some() || population.mutation_fraction.is_some() {
            builder = builder.with_fractions(
                population.crossover_fraction.unwrap_or(defaults.crossover_fraction),
                population.mutation_fraction.unwrap_or(defaults.mutation_fraction),
            );
        }

        if let Some(probability) = population.sub_genome_mutation_probability {
            builder = builder.with_sub_genome_mutation_probability(probability);
        }

        if let Some(aggression) = population.selection_aggression {
            builder = builder.with_selection_aggression(aggression);
        }
    }

    if let Some(hall_of_fame) = &config.hall_of_fame {
        builder = builder.with_hall_of_fame(
            hall_of_fame.size.unwrap_or(defaults.hall_of_fame_size),
            hall_of_fame.probability.unwrap_or(defaults.hall_of_fame_probability),
        );
    }

    if let Some(operators) = &config.operators {
        if let Some(names) = &operators.crossover {
            builder = builder.with_crossover_operators(parse_names(names)?);
        }

        if let Some(names) = &operators.mutation {
            builder = builder.with_mutation_operators(parse_names(names)?);
        }

        if let Some(name) = &operators.selection {
            builder = builder.with_selection(name.parse()?);
        }
    }

    if let Some(max_generations) = config.termination.as_ref().and_then(|termination| termination.max_generations) {
        builder = builder.with_max_generations(max_generations);
    }

    match &config.history {
        Some(HistoryConfig::Bounded { size }) => builder = builder.with_history_size(Some(*size)),
        Some(HistoryConfig::Unbounded) => builder = builder.with_history_size(None),
        None => {}
    }

    if let Some(environment) = &config.environment {
        if let Some(threads) = environment.max_threads {
            builder = builder.with_max_threads(Some(threads.min(get_cpus())));
        }

        if let Some(check) = environment.check_correctness {
            builder = builder.with_check_correctness(check);
        }
    }

    if let Some(log_best) =
        config.telemetry.as_ref().and_then(|telemetry| telemetry.logging.as_ref()).and_then(|logging| logging.log_best)
    {
        builder = builder.with_log_best(log_best);
    }

    Ok(builder)
}

/// Creates an environment from the json config: seeded random generator if the seed is set,
/// stdout logger if logging is enabled.
pub fn create_environment_from_config(config: &Config) -> Environment {
    let random: Arc<dyn Random + Send + Sync> =
        match config.environment.as_ref().and_then(|environment| environment.seed) {
            Some(seed) => Arc::new(DefaultRandom::new_with_seed(seed)),
            None => Arc::new(DefaultRandom::default()),
        };

    let logger: InfoLogger =
        if config.is_logging_enabled() { Arc::new(|msg: &str| println!("{msg}")) } else { Environment::silent_logger() };

    Environment::new(random, logger)
}

fn parse_names<T: FromStr<Err = GenericError>>(names: &[String]) -> GenericResult<Vec<T>> {
    names.iter().map(|name| name.parse::<T>()).collect()
}
