use super::*;
use crate::fitness::Makespan;
use crate::helpers::models::*;
use crate::helpers::utils::FakeRandom;

fn create_hall_of_fame(capacity: usize) -> HallOfFame {
    HallOfFame::new(capacity, Arc::new(Makespan))
}

#[test]
fn can_keep_members_sorted() {
    let mut hall_of_fame = create_hall_of_fame(10);

    create_chromosomes_with_fitness(&[30, 10, 20, 10]).into_iter().for_each(|chromosome| {
        assert!(hall_of_fame.add_chromosome(chromosome));
    });

    assert_eq!(hall_of_fame.iter().filter_map(|member| member.fitness()).collect::<Vec<_>>(), vec![10, 10, 20, 30]);
    assert_eq!(hall_of_fame.best().and_then(|member| member.fitness()), Some(10));
    assert_eq!(hall_of_fame.worst().and_then(|member| member.fitness()), Some(30));
    assert_eq!(hall_of_fame.average(), Some(17.5));
    assert_eq!(hall_of_fame.to_string(), "[10,10,20,30]");
}

#[test]
fn can_reject_duplicates_and_unevaluated() {
    let mut hall_of_fame = create_hall_of_fame(10);
    let chromosome = create_chromosome_with_fitness(0, 10);

    assert!(hall_of_fame.add_chromosome(chromosome.clone()));
    assert!(!hall_of_fame.add_chromosome(chromosome));
    assert!(!hall_of_fame.add_chromosome(create_chromosome_with_fitness(0, 10)));
    assert!(!hall_of_fame.add_chromosome(Arc::new(create_chromosome(vec![vec![5]]))));

    assert_eq!(hall_of_fame.len(), 1);
}

#[test]
fn can_evict_worst_member_when_full() {
    let mut hall_of_fame = create_hall_of_fame(3);
    create_chromosomes_with_fitness(&[30, 10, 20]).into_iter().for_each(|chromosome| {
        hall_of_fame.add_chromosome(chromosome);
    });

    assert!(!hall_of_fame.add_chromosome(create_chromosome_with_fitness(10, 30)));
    assert!(!hall_of_fame.add_chromosome(create_chromosome_with_fitness(11, 40)));
    assert!(hall_of_fame.add_chromosome(create_chromosome_with_fitness(12, 15)));

    assert_eq!(hall_of_fame.len(), 3);
    assert_eq!(hall_of_fame.to_string(), "[10,15,20]");
    assert_eq!(hall_of_fame.average(), Some(15.));
}

#[test]
fn can_reject_evicted_chromosome_when_still_worse() {
    let mut hall_of_fame = create_hall_of_fame(1);
    let evicted = create_chromosome_with_fitness(0, 20);

    hall_of_fame.add_chromosome(evicted.clone());
    hall_of_fame.add_chromosome(create_chromosome_with_fitness(1, 10));

    assert!(!hall_of_fame.add_chromosome(evicted));
    assert_eq!(hall_of_fame.to_string(), "[10]");
}

#[test]
fn can_handle_zero_capacity() {
    let mut hall_of_fame = create_hall_of_fame(0);

    assert!(!hall_of_fame.add_chromosome(create_chromosome_with_fitness(0, 1)));
    assert!(hall_of_fame.is_empty());
    assert_eq!(hall_of_fame.average(), None);
    assert_eq!(hall_of_fame.capacity(), 0);
}

#[test]
fn can_keep_best_fitness_monotonic() {
    let mut hall_of_fame = create_hall_of_fame(5);
    let mut previous_best = None;

    [50, 40, 60, 35, 70, 20, 45, 33, 90, 10].iter().enumerate().for_each(|(id, &fitness)| {
        hall_of_fame.add_chromosome(create_chromosome_with_fitness(id, fitness));

        let best = hall_of_fame.best().and_then(|member| member.fitness());
        if let (Some(previous), Some(best)) = (previous_best, best) {
            assert!(best <= previous);
        }
        previous_best = best;
        assert!(hall_of_fame.len() <= 5);
    });

    assert_eq!(hall_of_fame.to_string(), "[10,20,33,35,40]");
}

#[test]
fn can_sample_every_member() {
    let mut hall_of_fame = create_hall_of_fame(3);
    create_chromosomes_with_fitness(&[30, 10, 20]).into_iter().for_each(|chromosome| {
        hall_of_fame.add_chromosome(chromosome);
    });
    let random = FakeRandom::new(vec![0, 1, 2], vec![]);

    let sampled = (0..3)
        .filter_map(|_| hall_of_fame.random_chromosome(&random))
        .filter_map(|chromosome| chromosome.fitness())
        .collect::<Vec<_>>();

    assert_eq!(sampled, vec![10, 20, 30]);
    assert!(create_hall_of_fame(3).random_chromosome(&random).is_none());
}
