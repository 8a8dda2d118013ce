#[cfg(test)]
#[path = "../../tests/unit/models/problem_test.rs"]
mod problem_test;

use crate::models::{JobId, MachineId, Time};
use crate::utils::{GenericError, GenericResult};

/// Represents a single operation of the job: a processing step on a specific machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Operation {
    /// A job the operation belongs to.
    pub job: JobId,
    /// A position of the operation in the job's technological sequence.
    pub order: usize,
    /// A machine which processes the operation.
    pub machine: MachineId,
    /// A processing duration.
    pub duration: Time,
}

/// Represents a job: an ordered sequence of operations.
#[derive(Clone, Debug)]
pub struct Job {
    /// A job id.
    pub id: JobId,
    operations: Vec<Operation>,
    by_machine: Vec<Option<usize>>,
}

impl Job {
    fn new(id: JobId, operations: Vec<Operation>, nr_machines: usize) -> Self {
        let mut by_machine = vec![None; nr_machines];
        operations.iter().for_each(|op| by_machine[op.machine] = Some(op.order));

        Self { id, operations, by_machine }
    }

    /// Returns operations in technological order.
    pub fn operations(&self) -> &[Operation] {
        self.operations.as_slice()
    }

    /// Returns the operation processed on the given machine.
    pub fn operation_on(&self, machine: MachineId) -> Option<&Operation> {
        self.by_machine.get(machine).copied().flatten().map(|order| &self.operations[order])
    }

    /// Returns the prior operation of the given one, if any.
    pub fn prior(&self, operation: &Operation) -> Option<&Operation> {
        operation.order.checked_sub(1).and_then(|order| self.operations.get(order))
    }

    /// Returns total processing time of the job.
    pub fn total_duration(&self) -> Time {
        self.operations.iter().map(|op| op.duration).sum()
    }
}

/// Represents a scheduling state used by a single decode attempt.
///
/// It is derived from the immutable problem every time, so concurrent decodes never share it.
#[derive(Clone, Debug)]
pub struct DecodeContext {
    scheduled: Vec<Vec<bool>>,
    beginning: Vec<Vec<Option<Time>>>,
}

impl DecodeContext {
    /// Returns true if the operation is scheduled (committed).
    pub fn is_scheduled(&self, job: JobId, order: usize) -> bool {
        self.scheduled[job][order]
    }

    /// Marks operation as scheduled.
    pub fn set_scheduled(&mut self, job: JobId, order: usize) {
        self.scheduled[job][order] = true;
    }

    /// Returns a start time of the operation if it is placed on a machine.
    pub fn beginning(&self, job: JobId, order: usize) -> Option<Time> {
        self.beginning[job][order]
    }

    /// Sets a start time of the operation.
    pub fn set_beginning(&mut self, job: JobId, order: usize, start: Time) {
        self.beginning[job][order] = Some(start);
    }

    /// Returns amount of committed operations.
    pub fn scheduled_count(&self) -> usize {
        self.scheduled.iter().map(|ops| ops.iter().filter(|&&flag| flag).count()).sum()
    }
}

/// Represents a job shop scheduling problem: every job visits every machine exactly once
/// in its own technological order.
#[derive(Clone, Debug)]
pub struct Problem {
    jobs: Vec<Job>,
    nr_machines: usize,
    processing_time: Vec<Vec<Time>>,
    machine_sequence: Vec<Vec<usize>>,
    lower_bound: Option<Time>,
}

impl Problem {
    /// Creates a new problem from processing time and machine sequence tables.
    ///
    /// Both tables are indexed as `[job][k]`, where `k` is the position of the operation in the
    /// job's technological order. Machine sequence values are 1-based machine indices.
    pub fn new(
        processing_time: Vec<Vec<Time>>,
        machine_sequence: Vec<Vec<usize>>,
        lower_bound: Option<Time>,
    ) -> GenericResult<Self> {
        let nr_jobs = processing_time.len();
        if nr_jobs == 0 {
            return Err("problem has no jobs".into());
        }

        if machine_sequence.len() != nr_jobs {
            return Err(format!(
                "dimension mismatch: processing time has {nr_jobs} jobs, machine sequence has {}",
                machine_sequence.len()
            )
            .into());
        }

        let nr_machines = processing_time[0].len();
        if nr_machines == 0 {
            return Err("problem has no machines".into());
        }

        let jobs = processing_time
            .iter()
            .zip(machine_sequence.iter())
            .enumerate()
            .map(|(job, (times, machines))| {
                if times.len() != nr_machines || machines.len() != nr_machines {
                    return Err(GenericError::from(format!(
                        "non-rectangular table: job {job} has {} durations and {} machines, expected {nr_machines}",
                        times.len(),
                        machines.len()
                    )));
                }

                let mut visited = vec![false; nr_machines];
                let operations = times
                    .iter()
                    .zip(machines.iter())
                    .enumerate()
                    .map(|(order, (&duration, &machine))| {
                        if machine == 0 || machine > nr_machines {
                            return Err(GenericError::from(format!(
                                "machine index {machine} of job {job} is out of range 1..={nr_machines}"
                            )));
                        }

                        let machine = machine - 1;
                        if visited[machine] {
                            return Err(GenericError::from(format!(
                                "job {job} visits machine {} more than once",
                                machine + 1
                            )));
                        }
                        visited[machine] = true;

                        Ok(Operation { job, order, machine, duration })
                    })
                    .collect::<GenericResult<Vec<_>>>()?;

                Ok(Job::new(job, operations, nr_machines))
            })
            .collect::<GenericResult<Vec<_>>>()?;

        Ok(Self { jobs, nr_machines, processing_time, machine_sequence, lower_bound })
    }

    /// Returns all jobs.
    pub fn jobs(&self) -> &[Job] {
        self.jobs.as_slice()
    }

    /// Returns a job by its id.
    pub fn job(&self, id: JobId) -> Option<&Job> {
        self.jobs.get(id)
    }

    /// Returns amount of jobs.
    pub fn nr_jobs(&self) -> usize {
        self.jobs.len()
    }

    /// Returns amount of machines.
    pub fn nr_machines(&self) -> usize {
        self.nr_machines
    }

    /// Returns total amount of operations.
    pub fn total_operations(&self) -> usize {
        self.jobs.iter().map(|job| job.operations.len()).sum()
    }

    /// Returns processing time table.
    pub fn processing_time(&self) -> &[Vec<Time>] {
        self.processing_time.as_slice()
    }

    /// Returns machine sequence table with 1-based machine indices.
    pub fn machine_sequence(&self) -> &[Vec<usize>] {
        self.machine_sequence.as_slice()
    }

    /// Returns a known lower bound of makespan, if specified.
    pub fn lower_bound(&self) -> Option<Time> {
        self.lower_bound
    }

    /// Returns a known lower bound or, if it is not specified, a trivial one: the maximum
    /// of machine loads and job lengths.
    pub fn effective_lower_bound(&self) -> Time {
        self.lower_bound.unwrap_or_else(|| {
            let max_job = self.jobs.iter().map(|job| job.total_duration()).max().unwrap_or(0);
            let max_machine = (0..self.nr_machines)
                .map(|machine| {
                    self.jobs.iter().filter_map(|job| job.operation_on(machine)).map(|op| op.duration).sum::<Time>()
                })
                .max()
                .unwrap_or(0);

            max_job.max(max_machine)
        })
    }

    /// Derives a fresh scheduling state for a single decode attempt.
    pub fn create_decode_context(&self) -> DecodeContext {
        DecodeContext {
            scheduled: self.jobs.iter().map(|job| vec![false; job.operations.len()]).collect(),
            beginning: self.jobs.iter().map(|job| vec![None; job.operations.len()]).collect(),
        }
    }
}
