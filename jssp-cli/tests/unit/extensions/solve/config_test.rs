use super::*;
use jssp_core::operators::{CrossoverKind, MutationKind};
use jssp_core::selection::SelectionKind;
use std::fs::File;

fn read_config_from_str(json: &str) -> GenericResult<Config> {
    read_config(BufReader::new(json.as_bytes()))
}

fn build_config(config: &Config) -> EvolutionConfig {
    create_builder_from_config(config).and_then(|builder| builder.build()).unwrap()
}

#[test]
fn can_read_full_config() {
    let file = File::open("../data/config.full.json").expect("cannot read config from file");

    let config = read_config(BufReader::new(file)).unwrap();

    let population = config.population.as_ref().expect("no population config");
    assert_eq!(population.size, Some(100));
    assert_eq!(population.selection_aggression, Some(0.1));
    let operators = config.operators.as_ref().expect("no operators config");
    assert_eq!(operators.selection.as_deref(), Some("sorted"));
    assert!(matches!(config.history, Some(HistoryConfig::Bounded { size: 10 })));
    let environment = config.environment.as_ref().expect("no environment config");
    assert_eq!(environment.seed, Some(42));
    assert_eq!(config.mean_window(), 20);

    let evolution = build_config(&config);
    assert_eq!(evolution.population_size, 100);
    assert_eq!(evolution.crossover_fraction, 0.5);
    assert_eq!(evolution.mutation_fraction, 0.3);
    assert_eq!(evolution.sub_genome_mutation_probability, 0.5);
    assert_eq!(evolution.selection_aggression, 0.1);
    assert_eq!(evolution.hall_of_fame_size, 50);
    assert_eq!(evolution.hall_of_fame_probability, 0.25);
    assert_eq!(evolution.crossover_operators, vec![CrossoverKind::Pmx, CrossoverKind::Ox, CrossoverKind::Lox]);
    assert_eq!(
        evolution.mutation_operators,
        vec![MutationKind::Swap, MutationKind::Insertion, MutationKind::Inversion]
    );
    assert_eq!(evolution.selection, SelectionKind::Sorted);
    assert_eq!(evolution.max_generations, 500);
    assert_eq!(evolution.history_size, Some(10));
    assert_eq!(evolution.max_threads, Some(2.min(get_cpus())));
    assert!(evolution.check_correctness);
    assert_eq!(evolution.log_best, 50);
}

#[test]
fn can_use_defaults_for_empty_config() {
    let config = read_config_from_str("{}").unwrap();

    let evolution = build_config(&config);
    let defaults = EvolutionConfig::default();

    assert_eq!(evolution.population_size, defaults.population_size);
    assert_eq!(evolution.crossover_fraction, defaults.crossover_fraction);
    assert_eq!(evolution.mutation_fraction, defaults.mutation_fraction);
    assert_eq!(evolution.crossover_operators, defaults.crossover_operators);
    assert_eq!(evolution.max_generations, defaults.max_generations);
    assert_eq!(evolution.history_size, defaults.history_size);
    assert_eq!(config.mean_window(), DEFAULT_MEAN_WINDOW);
}

#[test]
fn can_keep_default_for_unspecified_fraction() {
    let config = read_config_from_str(r#"{"population": {"mutationFraction": 0.9}}"#).unwrap();

    let evolution = build_config(&config);

    assert!((evolution.crossover_fraction - 0.308).abs() < 1E-6);
    assert!((evolution.mutation_fraction - 0.692).abs() < 1E-6);
}

#[test]
fn can_read_unbounded_history() {
    let config = read_config_from_str(r#"{"history": {"type": "unbounded"}}"#).unwrap();

    assert_eq!(build_config(&config).history_size, None);
}

parameterized_test! {can_reject_invalid_config, (json, expected), {
    can_reject_invalid_config_impl(json, expected);
}}

can_reject_invalid_config! {
    case01_crossover: (r#"{"operators": {"crossover": ["pmx", "abc"]}}"#, "unknown crossover operator: 'abc'"),
    case02_mutation: (r#"{"operators": {"mutation": ["shift"]}}"#, "unknown mutation operator: 'shift'"),
    case03_selection: (r#"{"operators": {"selection": "tournament"}}"#, "unknown selection: 'tournament'"),
    case04_population: (r#"{"population": {"size": 0}}"#, "population size should be positive"),
    case05_history: (r#"{"history": {"type": "bounded", "size": 0}}"#, "history size should be positive"),
}

fn can_reject_invalid_config_impl(json: &str, expected: &str) {
    let config = read_config_from_str(json).unwrap();

    match create_builder_from_config(&config).and_then(|builder| builder.build()) {
        Err(err) => assert!(err.to_string().contains(expected), "unexpected error: {err}"),
        Ok(_) => unreachable!("invalid config is accepted"),
    }
}

#[test]
fn can_reject_malformed_config() {
    let result = read_config_from_str(r#"{"population": {"size": "many"}}"#);

    assert!(result.is_err_and(|err| err.to_string().starts_with("cannot deserialize config")));
}

#[test]
fn can_override_config_values() {
    let mut config = Config::default();

    config.set_max_generations(7);
    config.environment_mut().max_threads = Some(3);
    config.environment_mut().check_correctness = Some(true);
    config.enable_logging();

    let evolution = build_config(&config);
    assert_eq!(evolution.max_generations, 7);
    assert_eq!(evolution.max_threads, Some(3.min(get_cpus())));
    assert!(evolution.check_correctness);
    assert!(config.is_logging_enabled());
}

#[test]
fn can_cap_max_threads_at_cpus() {
    let mut config = Config::default();
    config.environment_mut().max_threads = Some(usize::MAX);

    let evolution = build_config(&config);

    assert_eq!(evolution.max_threads, Some(get_cpus()));
}

#[test]
fn can_create_reproducible_environment_with_seed() {
    let mut config = Config::default();
    config.environment_mut().seed = Some(3);

    let sample = |environment: Environment| (0..10).map(|_| environment.random.uniform_int(0, 1000)).collect::<Vec<_>>();

    assert_eq!(sample(create_environment_from_config(&config)), sample(create_environment_from_config(&config)));
}
