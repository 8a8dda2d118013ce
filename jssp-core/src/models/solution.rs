#[cfg(test)]
#[path = "../../tests/unit/models/solution_test.rs"]
mod solution_test;

use crate::models::{JobId, MachineId, Operation, Problem, Time};
use crate::utils::{GenericError, GenericResult};

/// Represents an operation placed on a machine timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScheduledOperation {
    /// A job id.
    pub job: JobId,
    /// A position of the operation in the job's technological sequence.
    pub order: usize,
    /// A machine id.
    pub machine: MachineId,
    /// A start time.
    pub start: Time,
    /// A processing duration.
    pub duration: Time,
}

impl ScheduledOperation {
    /// Returns time when the operation is finished.
    pub fn end(&self) -> Time {
        self.start + self.duration
    }
}

/// Represents a schedule: for every machine, operations ordered by their start time.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Solution {
    machines: Vec<Vec<ScheduledOperation>>,
}

impl Solution {
    /// Creates an empty schedule for the given amount of machines.
    pub fn new(nr_machines: usize) -> Self {
        Self { machines: vec![Vec::new(); nr_machines] }
    }

    /// Returns operations of the given machine ordered by start time.
    pub fn machine(&self, machine: MachineId) -> &[ScheduledOperation] {
        self.machines.get(machine).map(|ops| ops.as_slice()).unwrap_or(&[])
    }

    /// Returns all machine timelines.
    pub fn machines(&self) -> &[Vec<ScheduledOperation>] {
        self.machines.as_slice()
    }

    /// Returns all scheduled operations.
    pub fn operations(&self) -> impl Iterator<Item = &ScheduledOperation> + '_ {
        self.machines.iter().flat_map(|ops| ops.iter())
    }

    /// Returns completion time of the last operation across all machines.
    pub fn makespan(&self) -> Time {
        self.machines.iter().filter_map(|ops| ops.last()).map(|op| op.end()).max().unwrap_or(0)
    }

    /// Inserts the operation on its machine into the earliest gap which can hold its duration
    /// and starts not before `earliest`. If no gap fits, the operation is placed at the tail.
    /// Returns the start time of the inserted operation.
    pub fn insert_first_fit(&mut self, operation: &Operation, earliest: Time) -> Time {
        let timeline = &mut self.machines[operation.machine];

        let mut cursor = 0;
        let mut position = timeline.len();
        for (idx, placed) in timeline.iter().enumerate() {
            let gap_start = cursor.max(earliest);
            if gap_start + operation.duration <= placed.start {
                position = idx;
                break;
            }
            cursor = cursor.max(placed.end());
        }

        let start = cursor.max(earliest);
        timeline.insert(
            position,
            ScheduledOperation {
                job: operation.job,
                order: operation.order,
                machine: operation.machine,
                start,
                duration: operation.duration,
            },
        );

        start
    }

    /// Checks that the schedule is feasible for the given problem: every operation is scheduled
    /// exactly once on its machine, operations on a machine do not overlap and every operation
    /// starts after its prior operation is finished.
    pub fn check(&self, problem: &Problem) -> GenericResult<()> {
        if self.machines.len() != problem.nr_machines() {
            return Err(format!(
                "schedule has {} machines, problem has {}",
                self.machines.len(),
                problem.nr_machines()
            )
            .into());
        }

        let mut starts: Vec<Vec<Option<Time>>> =
            problem.jobs().iter().map(|job| vec![None; job.operations().len()]).collect();

        for (machine, timeline) in self.machines.iter().enumerate() {
            for (idx, op) in timeline.iter().enumerate() {
                let expected = problem
                    .job(op.job)
                    .and_then(|job| job.operations().get(op.order))
                    .ok_or_else(|| GenericError::from(format!("unknown operation {}:{}", op.job, op.order)))?;

                if expected.machine != machine || op.machine != machine || expected.duration != op.duration {
                    return Err(format!("operation {}:{} is placed on a wrong machine {machine}", op.job, op.order).into());
                }

                if idx > 0 && timeline[idx - 1].end() > op.start {
                    return Err(format!("operations overlap on machine {machine} at time {}", op.start).into());
                }

                let slot = &mut starts[op.job][op.order];
                if slot.is_some() {
                    return Err(format!("operation {}:{} is scheduled twice", op.job, op.order).into());
                }
                *slot = Some(op.start);
            }
        }

        problem.jobs().iter().try_for_each(|job| {
            job.operations().iter().try_for_each(|op| -> GenericResult<()> {
                let start = starts[op.job][op.order]
                    .ok_or_else(|| GenericError::from(format!("operation {}:{} is not scheduled", op.job, op.order)))?;

                match job.prior(op) {
                    Some(prior) => {
                        let prior_end = starts[prior.job][prior.order].unwrap_or(Time::MAX).saturating_add(prior.duration);
                        if start < prior_end {
                            return Err(format!(
                                "operation {}:{} starts at {start} before its prior operation ends at {prior_end}",
                                op.job, op.order
                            )
                            .into());
                        }
                        Ok(())
                    }
                    None => Ok(()),
                }
            })
        })
    }
}
