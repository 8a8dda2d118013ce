use super::*;
use crate::helpers::models::*;

fn create_population(generation: usize) -> Population {
    Population::new(generation, create_chromosomes_with_fitness(&[10, 20]))
}

#[test]
fn can_keep_all_populations_without_capacity() {
    let mut history = PopulationHistory::new(None);

    (0..30).for_each(|generation| history.push(create_population(generation)));

    assert_eq!(history.len(), 30);
    assert_eq!(history.iter().next().map(|population| population.generation), Some(0));
}

#[test]
fn can_evict_oldest_population() {
    let mut history = PopulationHistory::new(Some(3));

    (0..5).for_each(|generation| history.push(create_population(generation)));

    assert_eq!(history.generations(), vec![2, 3, 4]);
    assert_eq!(history.latest().map(|population| population.generation), Some(4));
    assert_eq!(history.latest().map(|population| population.size()), Some(2));
}

#[test]
fn can_use_default_capacity() {
    let mut history = PopulationHistory::default();
    assert!(history.is_empty());

    (0..25).for_each(|generation| history.push(create_population(generation)));

    assert_eq!(history.len(), DEFAULT_HISTORY_SIZE);
    assert_eq!(history.generations(), (5..25).collect::<Vec<_>>());
}
