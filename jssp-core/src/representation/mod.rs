//! Specifies how schedules are encoded into chromosomes and decoded back.

use crate::genetics::Chromosome;
use crate::models::{JobId, MachineId, Problem, Solution};
use crate::utils::Random;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

mod decoder;
pub use self::decoder::PreferenceListRepresentation;

/// Represents an error which occurs when a chromosome cannot be turned into a feasible schedule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// Amount of genomes differs from amount of machines.
    GenomeCount {
        /// Expected amount of genomes.
        expected: usize,
        /// Actual amount of genomes.
        actual: usize,
    },
    /// A genome refers to a job which does not exist.
    UnknownJob {
        /// A machine of the genome.
        machine: MachineId,
        /// A job id.
        job: JobId,
    },
    /// A genome refers to a job which has no operation on the machine.
    MissingOperation {
        /// A machine of the genome.
        machine: MachineId,
        /// A job id.
        job: JobId,
    },
    /// A genome lists the same job more than once.
    DuplicateJob {
        /// A machine of the genome.
        machine: MachineId,
        /// A job id.
        job: JobId,
    },
    /// A genome does not list a job which has an operation on the machine.
    Incomplete {
        /// A machine of the genome.
        machine: MachineId,
        /// A job id.
        job: JobId,
    },
    /// No operation can be scheduled while some are still remaining.
    Deadlock {
        /// Amount of operations left unscheduled.
        remaining: usize,
    },
    /// A chromosome cannot be repaired.
    CannotRepair {
        /// A reason message.
        reason: String,
    },
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::GenomeCount { expected, actual } => {
                write!(f, "expected {expected} genomes, got {actual}")
            }
            DecodeError::UnknownJob { machine, job } => write!(f, "unknown job {job} on machine {machine}"),
            DecodeError::MissingOperation { machine, job } => {
                write!(f, "job {job} has no operation on machine {machine}")
            }
            DecodeError::DuplicateJob { machine, job } => write!(f, "job {job} is listed twice on machine {machine}"),
            DecodeError::Incomplete { machine, job } => write!(f, "job {job} is not listed on machine {machine}"),
            DecodeError::Deadlock { remaining } => write!(f, "cannot schedule remaining {remaining} operations"),
            DecodeError::CannotRepair { reason } => write!(f, "cannot repair chromosome: {reason}"),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Encodes a problem into chromosomes and decodes chromosomes into feasible schedules.
pub trait Representation: Send + Sync {
    /// Creates a random chromosome which decodes into a feasible schedule.
    fn create_random(&self, problem: &Problem, random: &dyn Random) -> Chromosome;

    /// Decodes chromosome into a schedule.
    fn decode(&self, chromosome: &Chromosome, problem: &Problem) -> Result<Solution, DecodeError>;

    /// Repairs chromosome in place.
    fn repair(&self, chromosome: &mut Chromosome, problem: &Problem) -> Result<(), DecodeError>;
}

/// Specifies available representations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RepresentationKind {
    /// One preference list per machine.
    #[default]
    PreferenceList,
}

impl RepresentationKind {
    /// Creates a representation of the given kind.
    pub fn create(&self) -> Arc<dyn Representation> {
        match self {
            RepresentationKind::PreferenceList => Arc::new(PreferenceListRepresentation),
        }
    }
}

impl Display for RepresentationKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RepresentationKind::PreferenceList => write!(f, "PreferenceList"),
        }
    }
}
