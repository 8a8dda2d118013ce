use super::*;

#[test]
fn can_generate_problem_with_given_sizes() {
    let random = DefaultRandom::new_with_seed(11);

    let problem = generate_problem(4, 3, 9, &random).unwrap();

    assert_eq!(problem.nr_jobs(), 4);
    assert_eq!(problem.nr_machines(), 3);
    assert_eq!(problem.lower_bound(), None);
    problem.machine_sequence().iter().for_each(|machines| {
        let mut machines = machines.clone();
        machines.sort();
        assert_eq!(machines, vec![1, 2, 3]);
    });
    assert!(problem.processing_time().iter().flatten().all(|&duration| (1..=9).contains(&duration)));
}

#[test]
fn can_generate_same_problem_with_same_seed() {
    let generate = || generate_problem(10, 5, 99, &DefaultRandom::new_with_seed(5)).unwrap();

    let (first, second) = (generate(), generate());

    assert_eq!(first.processing_time().to_vec(), second.processing_time().to_vec());
    assert_eq!(first.machine_sequence().to_vec(), second.machine_sequence().to_vec());
}

parameterized_test! {can_reject_invalid_sizes, (jobs_size, machines_size, max_duration), {
    can_reject_invalid_sizes_impl(jobs_size, machines_size, max_duration);
}}

can_reject_invalid_sizes! {
    case01_no_jobs: (0, 3, 10),
    case02_no_machines: (3, 0, 10),
    case03_zero_duration: (3, 3, 0),
    case04_huge_duration: (3, 3, u64::MAX),
}

fn can_reject_invalid_sizes_impl(jobs_size: usize, machines_size: usize, max_duration: Time) {
    let result = generate_problem(jobs_size, machines_size, max_duration, &DefaultRandom::new_with_seed(0));

    assert!(result.is_err());
}
