use super::*;
use serde_json::Value;
use std::sync::Arc;

fn solve_simple_problem() -> (Problem, EvolutionResult) {
    let problem = Problem::new(vec![vec![3, 2], vec![2, 4]], vec![vec![1, 2], vec![2, 1]], None).unwrap();
    let config = EvolutionConfigBuilder::default().with_population_size(10).with_max_generations(2).build().unwrap();
    let environment = Arc::new(Environment::new_with_seed(0, Environment::silent_logger()));

    let result = EvolutionController::new(Arc::new(problem.clone()), config, environment).run().unwrap();

    (problem, result)
}

#[test]
fn can_write_solution_as_json() {
    let (problem, result) = solve_simple_problem();
    let mut buffer = Vec::new();

    write_solution_json(BufWriter::new(&mut buffer), &problem, &result).unwrap();
    let json: Value = serde_json::from_slice(buffer.as_slice()).unwrap();

    assert_eq!(json["fitness"], 7);
    assert_eq!(json["makespan"], 7);
    assert_eq!(json["lowerBound"], 7);
    assert_eq!(json["generations"], 2);
    assert_eq!(json["termination"], "completed");
    assert_eq!(json["penalized"], 0);
    assert_eq!(json["chromosome"].as_array().map(|genomes| genomes.len()), Some(2));

    let machines = json["machines"].as_array().unwrap();
    assert_eq!(machines.len(), 2);
    assert_eq!(machines[0]["machine"], 1);
    assert_eq!(machines[1]["machine"], 2);
    machines.iter().for_each(|machine| {
        let operations = machine["operations"].as_array().unwrap();
        assert_eq!(operations.len(), 2);
        assert!(operations[0]["end"].as_u64() <= operations[1]["start"].as_u64());
    });
}

fn create_progress_log() -> DataLog {
    let mut log = DataLog::new(2);

    [(0, [10., 12., 10., 14.]), (1, [8., 11., 8., 12.])].into_iter().for_each(|(generation, values)| {
        ProgressMetric::all()
            .into_iter()
            .zip(values)
            .for_each(|(metric, value)| log.add_data_point(metric, generation, value));
    });

    log
}

#[test]
fn can_write_progress_as_csv() {
    let log = create_progress_log();
    let mut buffer = Vec::new();

    write_progress_csv(BufWriter::new(&mut buffer), &log).unwrap();

    let mut reader = csv::Reader::from_reader(buffer.as_slice());
    let headers = reader.headers().unwrap().iter().map(|header| header.to_string()).collect::<Vec<_>>();
    let rows = reader
        .records()
        .map(|record| record.unwrap().iter().map(|field| field.parse::<f64>().unwrap()).collect::<Vec<_>>())
        .collect::<Vec<_>>();

    assert_eq!(
        headers,
        vec!["generation", "best", "hall_of_fame", "current", "current_mean", "cumulative", "cumulative_mean"]
    );
    assert_eq!(rows, vec![vec![0., 10., 12., 10., 10., 14., 14.], vec![1., 8., 11., 8., 9., 12., 13.]]);
}

#[test]
fn can_write_nothing_for_empty_progress() {
    let mut buffer = Vec::new();

    write_progress_csv(BufWriter::new(&mut buffer), &DataLog::default()).unwrap();

    assert!(buffer.is_empty());
}
