//! A collection of models to represent problem and solution in Job Shop Scheduling domain.

mod problem;
pub use self::problem::*;

mod solution;
pub use self::solution::*;

/// Specifies a job identifier, an index of the job in the problem.
pub type JobId = usize;

/// Specifies a machine identifier, a 0-based machine index.
pub type MachineId = usize;

/// Specifies a time unit used for durations, start times and makespan.
pub type Time = u64;
