//! Contains writers of solver output: the best schedule as json and progress series as csv.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/writer_test.rs"]
mod writer_test;

use jssp_core::prelude::*;
use serde::Serialize;
use std::io::{BufWriter, Write};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SolutionRecord {
    fitness: Fitness,
    makespan: Option<Time>,
    lower_bound: Time,
    generations: usize,
    duration_ms: u64,
    termination: String,
    penalized: usize,
    chromosome: Vec<Vec<JobId>>,
    machines: Vec<MachineRecord>,
}

#[derive(Serialize)]
struct MachineRecord {
    machine: MachineId,
    operations: Vec<OperationRecord>,
}

#[derive(Serialize)]
struct OperationRecord {
    job: JobId,
    order: usize,
    start: Time,
    end: Time,
}

#[derive(Serialize)]
struct ProgressRecord {
    generation: usize,
    best: Option<Float>,
    hall_of_fame: Option<Float>,
    current: Option<Float>,
    current_mean: Option<Float>,
    cumulative: Option<Float>,
    cumulative_mean: Option<Float>,
}

/// Writes the evolution result as json. Machines are numbered from 1 and keep operations in
/// the order of their start time.
pub fn write_solution_json<W: Write>(
    mut writer: BufWriter<W>,
    problem: &Problem,
    result: &EvolutionResult,
) -> GenericResult<()> {
    let solution = result.best.solution();

    let record = SolutionRecord {
        fitness: result.fitness,
        makespan: solution.map(|solution| solution.makespan()),
        lower_bound: problem.effective_lower_bound(),
        generations: result.generations,
        duration_ms: result.duration.as_millis() as u64,
        termination: result.termination.to_string(),
        penalized: result.penalized,
        chromosome: result.best.genomes().iter().map(|genome| genome.jobs().to_vec()).collect(),
        machines: solution
            .map(|solution| {
                solution
                    .machines()
                    .iter()
                    .enumerate()
                    .map(|(idx, operations)| MachineRecord {
                        machine: idx + 1,
                        operations: operations
                            .iter()
                            .map(|op| OperationRecord { job: op.job, order: op.order, start: op.start, end: op.end() })
                            .collect(),
                    })
                    .collect()
            })
            .unwrap_or_default(),
    };

    serde_json::to_writer_pretty(&mut writer, &record).map_err(|err| format!("cannot write solution: '{err}'"))?;
    writer.flush()?;

    Ok(())
}

/// Writes progress series as csv, one row per generation.
pub fn write_progress_csv<W: Write>(writer: BufWriter<W>, log: &DataLog) -> GenericResult<()> {
    let value_at = |metric: ProgressMetric, idx: usize| log.series(metric).points().get(idx).map(|point| point.value);
    let mean_at = |metric: ProgressMetric, idx: usize| log.series(metric).mean().get(idx).map(|point| point.value);

    let mut csv_writer = csv::Writer::from_writer(writer);

    for (idx, point) in log.series(ProgressMetric::BestFitness).points().iter().enumerate() {
        csv_writer
            .serialize(ProgressRecord {
                generation: point.generation,
                best: Some(point.value),
                hall_of_fame: value_at(ProgressMetric::HallOfFameAverage, idx),
                current: value_at(ProgressMetric::CurrentFitness, idx),
                current_mean: mean_at(ProgressMetric::CurrentFitness, idx),
                cumulative: value_at(ProgressMetric::CumulativeFitness, idx),
                cumulative_mean: mean_at(ProgressMetric::CumulativeFitness, idx),
            })
            .map_err(|err| format!("cannot write progress: '{err}'"))?;
    }

    csv_writer.flush()?;

    Ok(())
}
