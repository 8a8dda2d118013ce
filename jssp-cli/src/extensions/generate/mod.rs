//! Contains logic to generate random problem instances.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/generate/generate_test.rs"]
mod generate_test;

use jssp_core::prelude::*;
use jssp_core::utils::shuffle;

/// Generates a random problem where every job visits each machine exactly once in a random order.
/// Durations are uniformly distributed in `[1, max_duration]`.
pub fn generate_problem(
    jobs_size: usize,
    machines_size: usize,
    max_duration: Time,
    random: &dyn Random,
) -> GenericResult<Problem> {
    if jobs_size == 0 || machines_size == 0 {
        return Err("jobs size and machines size should be positive".into());
    }

    if max_duration == 0 || max_duration > i32::MAX as Time {
        return Err(format!("max duration should be in [1, {}] range, got {max_duration}", i32::MAX).into());
    }

    let processing_time = (0..jobs_size)
        .map(|_| (0..machines_size).map(|_| random.uniform_int(1, max_duration as i32) as Time).collect())
        .collect();

    let machine_sequence = (0..jobs_size)
        .map(|_| {
            let mut machines = (1..=machines_size).collect::<Vec<_>>();
            shuffle(machines.as_mut_slice(), random);
            machines
        })
        .collect();

    Problem::new(processing_time, machine_sequence, None)
}
