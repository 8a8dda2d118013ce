use super::*;
use crate::fitness::Makespan;
use crate::helpers::models::*;

#[test]
fn can_cycle_from_best_to_worst() {
    let mut selection = SortedSelection::default();
    selection.add_new_population(&create_chromosomes_with_fitness(&[30, 10, 20]), &Makespan);

    let selected = (0..4).filter_map(|_| selection.next_chromosome()).collect::<Vec<_>>();

    assert_eq!(get_fitness(&selected), vec![10, 20, 30, 10]);
}

#[test]
fn can_restart_on_new_population() {
    let mut selection = SortedSelection::default();
    selection.add_new_population(&create_chromosomes_with_fitness(&[30, 10]), &Makespan);
    selection.next_chromosome();

    selection.add_new_population(&create_chromosomes_with_fitness(&[5, 1]), &Makespan);

    assert_eq!(selection.next_chromosome().and_then(|chromosome| chromosome.fitness()), Some(1));
}

#[test]
fn can_return_none_for_empty_population() {
    let mut selection = SortedSelection::default();
    selection.add_new_population(&[], &Makespan);

    assert!(selection.next_chromosome().is_none());
}
