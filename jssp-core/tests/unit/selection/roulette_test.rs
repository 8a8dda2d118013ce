use super::*;
use crate::selection::SelectionKind;
use crate::fitness::Makespan;
use crate::helpers::models::*;
use crate::helpers::utils::{create_seeded_random, FakeRandom};

fn create_selection(lower_bound: Time, aggression: Float, ints: Vec<i32>, reals: Vec<Float>) -> RouletteWheelSelection {
    RouletteWheelSelection::new(lower_bound, aggression, Arc::new(FakeRandom::new(ints, reals)))
}

fn next_fitness(selection: &mut RouletteWheelSelection) -> Option<u64> {
    selection.next_chromosome().and_then(|chromosome| chromosome.fitness())
}

#[test]
fn can_weight_better_chromosomes_higher() {
    let mut selection = create_selection(50, 0., vec![], vec![5., 25., 29.]);
    selection.add_new_population(&create_chromosomes_with_fitness(&[60, 70, 80]), &Makespan);

    // representative values are 20, 10 and 0, the logistic center is 20
    assert!((selection.total_weight() - (20. + 20. / (1. + (0.1 as Float).exp()))).abs() < 1E-9);
    assert_eq!(next_fitness(&mut selection), Some(60));
    assert_eq!(next_fitness(&mut selection), Some(70));
    assert_eq!(next_fitness(&mut selection), Some(70));
}

#[test]
fn can_never_select_worst_when_better_exist() {
    let random = create_seeded_random(11);
    let mut selection = RouletteWheelSelection::new(50, 0., random);
    let mut chromosomes = create_chromosomes_with_fitness(&[60, 70, 80]);
    chromosomes.push(create_chromosome_with_fitness(3, Makespan.worst_fitness()));

    selection.add_new_population(&chromosomes, &Makespan);

    (0..500).for_each(|_| {
        let fitness = next_fitness(&mut selection).unwrap();
        assert!(fitness != Makespan.worst_fitness());
        assert!(fitness != 80);
    });
}

#[test]
fn can_prefer_best_with_higher_aggression() {
    let count_best = |aggression: Float| {
        let mut selection = RouletteWheelSelection::new(0, aggression, create_seeded_random(17));
        selection.add_new_population(&create_chromosomes_with_fitness(&[100, 400, 700, 1000]), &Makespan);
        (0..2000).filter(|_| next_fitness(&mut selection) == Some(100)).count()
    };

    assert!(count_best(2.) > count_best(-2.));
}

#[test]
fn can_fallback_to_uniform_when_weights_are_degenerate() {
    let mut selection = create_selection(50, 0., vec![1, 0], vec![]);
    selection.add_new_population(&create_chromosomes_with_fitness(&[50, 50]), &Makespan);

    assert_eq!(selection.total_weight(), 0.);
    assert_eq!(selection.next_chromosome().map(|chromosome| chromosome.genomes()[0].jobs()[0]), Some(1));
    assert_eq!(selection.next_chromosome().map(|chromosome| chromosome.genomes()[0].jobs()[0]), Some(0));
}

#[test]
fn can_sample_penalized_when_nothing_else_exists() {
    let worst = Makespan.worst_fitness();
    let mut selection = create_selection(50, 0., vec![1], vec![]);
    selection.add_new_population(&create_chromosomes_with_fitness(&[worst, worst]), &Makespan);

    assert_eq!(next_fitness(&mut selection), Some(worst));
}

#[test]
fn can_return_none_for_empty_population() {
    let mut selection = create_selection(0, 0., vec![], vec![]);
    selection.add_new_population(&[], &Makespan);

    assert!(selection.next_chromosome().is_none());
}

#[test]
fn can_create_selection_by_kind() {
    let chromosomes = create_chromosomes_with_fitness(&[30, 10, 20]);
    let mut selection = SelectionKind::Sorted.create(0, 0., create_seeded_random(0));
    selection.add_new_population(&chromosomes, &Makespan);

    assert_eq!(selection.next_chromosome().and_then(|chromosome| chromosome.fitness()), Some(10));
    assert_eq!("roulette".parse::<SelectionKind>(), Ok(SelectionKind::RouletteWheel));
    assert_eq!("Sorted".parse::<SelectionKind>(), Ok(SelectionKind::Sorted));
    assert!("tournament".parse::<SelectionKind>().is_err());
    assert_eq!(SelectionKind::default().to_string(), "RouletteWheel");
}
