use super::*;
use crate::representation::RepresentationKind;
use crate::helpers::models::*;
use crate::helpers::utils::create_seeded_random;

fn decode(genomes: Vec<Vec<JobId>>, problem: &Problem) -> Result<Solution, DecodeError> {
    PreferenceListRepresentation.decode(&create_chromosome(genomes), problem)
}

#[test]
fn can_decode_simple_chromosome() {
    let problem = create_simple_problem();

    let solution = decode(vec![vec![0, 1], vec![1, 0]], &problem).unwrap();

    assert_eq!(solution.check(&problem), Ok(()));
    assert_eq!(solution.makespan(), 7);
    assert_eq!(solution.machine(0).iter().map(|op| (op.job, op.start)).collect::<Vec<_>>(), vec![(0, 0), (1, 3)]);
    assert_eq!(solution.machine(1).iter().map(|op| (op.job, op.start)).collect::<Vec<_>>(), vec![(1, 0), (0, 3)]);
}

#[test]
fn can_defer_operation_with_unscheduled_prior() {
    let problem = create_simple_problem();

    let solution = decode(vec![vec![1, 0], vec![0, 1]], &problem).unwrap();

    assert_eq!(solution.check(&problem), Ok(()));
    assert_eq!(solution.makespan(), 7);
}

#[test]
fn can_not_start_before_prior_operation_ends() {
    // job 1 cannot start on machine 0 until machine 1 has processed it
    let problem = Problem::new(vec![vec![1, 1], vec![5, 1]], vec![vec![1, 2], vec![2, 1]], None).unwrap();

    let solution = decode(vec![vec![1, 0], vec![1, 0]], &problem).unwrap();

    assert_eq!(solution.check(&problem), Ok(()));
    assert_eq!(solution.machine(0).iter().map(|op| (op.job, op.start)).collect::<Vec<_>>(), vec![(0, 0), (1, 5)]);
}

#[test]
fn can_decode_identity_genomes_of_ft06() {
    let problem = create_ft06_problem();
    let identity = (0..problem.nr_jobs()).collect::<Vec<_>>();

    let solution = decode(vec![identity; problem.nr_machines()], &problem).unwrap();

    assert_eq!(solution.check(&problem), Ok(()));
    assert_eq!(solution.operations().count(), problem.total_operations());
    assert!(solution.makespan() >= FT06_OPTIMUM);
}

#[test]
fn can_create_random_feasible_chromosomes() {
    let problem = create_ft06_problem();
    let random = create_seeded_random(3);

    (0..100).for_each(|_| {
        let chromosome = PreferenceListRepresentation.create_random(&problem, random.as_ref());

        assert!(chromosome.contains_all_jobs(problem.nr_jobs()));
        assert_eq!(chromosome.fitness(), None);

        let solution = PreferenceListRepresentation.decode(&chromosome, &problem).unwrap();
        assert_eq!(solution.check(&problem), Ok(()));
        assert!(solution.makespan() >= FT06_OPTIMUM);
    });
}

#[test]
fn can_decode_without_changing_chromosome() {
    let problem = create_ft06_problem();
    let chromosome = PreferenceListRepresentation.create_random(&problem, create_seeded_random(5).as_ref());

    let first = PreferenceListRepresentation.decode(&chromosome, &problem).unwrap();
    let second = PreferenceListRepresentation.decode(&chromosome, &problem).unwrap();

    assert_eq!(first, second);
}

parameterized_test! {can_reject_invalid_genomes, (genomes, expected), {
    can_reject_invalid_genomes_impl(genomes, expected);
}}

can_reject_invalid_genomes! {
    case01_genome_count: (vec![vec![0, 1]], DecodeError::GenomeCount { expected: 2, actual: 1 }),
    case02_unknown_job: (vec![vec![0, 2], vec![1, 0]], DecodeError::UnknownJob { machine: 0, job: 2 }),
    case03_duplicate_job: (vec![vec![0, 1], vec![1, 1]], DecodeError::DuplicateJob { machine: 1, job: 1 }),
    case04_incomplete: (vec![vec![0, 1], vec![0]], DecodeError::Incomplete { machine: 1, job: 1 }),
}

fn can_reject_invalid_genomes_impl(genomes: Vec<Vec<JobId>>, expected: DecodeError) {
    let problem = create_simple_problem();

    let result = decode(genomes, &problem);

    assert_eq!(result, Err(expected));
}

#[test]
fn can_repair_broken_genomes() {
    let problem = create_simple_problem();
    let mut chromosome = create_chromosome(vec![vec![1, 1, 5], vec![]]);
    chromosome.set_evaluation(1, None);

    PreferenceListRepresentation.repair(&mut chromosome, &problem).unwrap();

    assert_eq!(chromosome.genomes()[0].jobs(), &[1, 0]);
    assert_eq!(chromosome.genomes()[1].jobs(), &[0, 1]);
    assert_eq!(chromosome.fitness(), None);
    assert!(PreferenceListRepresentation.decode(&chromosome, &problem).is_ok());
}

#[test]
fn can_keep_valid_genomes_on_repair() {
    let problem = create_simple_problem();
    let mut chromosome = create_chromosome(vec![vec![1, 0], vec![0, 1]]);

    PreferenceListRepresentation.repair(&mut chromosome, &problem).unwrap();

    assert_eq!(chromosome.genomes()[0].jobs(), &[1, 0]);
    assert_eq!(chromosome.genomes()[1].jobs(), &[0, 1]);
}

#[test]
fn can_not_repair_wrong_genome_count() {
    let problem = create_simple_problem();
    let mut chromosome = create_chromosome(vec![vec![0, 1]]);

    let result = PreferenceListRepresentation.repair(&mut chromosome, &problem);

    assert!(matches!(result, Err(DecodeError::CannotRepair { .. })));
}

#[test]
fn can_display_decode_errors() {
    assert_eq!(DecodeError::GenomeCount { expected: 2, actual: 1 }.to_string(), "expected 2 genomes, got 1");
    assert_eq!(DecodeError::Deadlock { remaining: 3 }.to_string(), "cannot schedule remaining 3 operations");
}

#[test]
fn can_create_representation_by_kind() {
    let problem = create_simple_problem();
    let representation = RepresentationKind::default().create();

    let chromosome = representation.create_random(&problem, create_seeded_random(1).as_ref());

    assert!(representation.decode(&chromosome, &problem).is_ok());
    assert_eq!(RepresentationKind::PreferenceList.to_string(), "PreferenceList");
}
