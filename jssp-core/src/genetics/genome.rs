use crate::models::JobId;
use std::fmt::{Display, Formatter};

/// Represents a machine's preference list: the order in which the machine attempts to process jobs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Genome {
    jobs: Vec<JobId>,
}

impl Genome {
    /// Creates a new genome from a list of job ids.
    pub fn new(jobs: Vec<JobId>) -> Self {
        Self { jobs }
    }

    /// Creates an empty genome with reserved capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { jobs: Vec::with_capacity(capacity) }
    }

    /// Returns job ids.
    pub fn jobs(&self) -> &[JobId] {
        self.jobs.as_slice()
    }

    /// Returns mutable job ids.
    pub fn jobs_mut(&mut self) -> &mut Vec<JobId> {
        &mut self.jobs
    }

    /// Appends a job id to the end.
    pub fn push(&mut self, job: JobId) {
        self.jobs.push(job);
    }

    /// Returns genome length.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Returns true if genome has no jobs.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Checks whether genome is a permutation of `0..nr_jobs`.
    pub fn is_permutation_of(&self, nr_jobs: usize) -> bool {
        if self.jobs.len() != nr_jobs {
            return false;
        }

        let mut seen = vec![false; nr_jobs];
        self.jobs.iter().all(|&job| job < nr_jobs && !std::mem::replace(&mut seen[job], true))
    }
}

impl From<Vec<JobId>> for Genome {
    fn from(jobs: Vec<JobId>) -> Self {
        Self::new(jobs)
    }
}

impl Display for Genome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let jobs = self.jobs.iter().map(|job| job.to_string()).collect::<Vec<_>>().join(",");
        write!(f, "[{jobs}]")
    }
}
