//! This module reimports a common used types.

pub use crate::evolution::DataLog;
pub use crate::evolution::DataSink;
pub use crate::evolution::EvolutionConfig;
pub use crate::evolution::EvolutionConfigBuilder;
pub use crate::evolution::EvolutionController;
pub use crate::evolution::EvolutionResult;
pub use crate::evolution::ProgressMetric;
pub use crate::evolution::RunControl;
pub use crate::evolution::RunState;
pub use crate::evolution::TerminationReason;

pub use crate::fitness::Fitness;
pub use crate::fitness::FitnessFunction;
pub use crate::fitness::Makespan;

pub use crate::genetics::Chromosome;
pub use crate::genetics::Genome;

pub use crate::models::{JobId, MachineId, Time};
pub use crate::models::{Problem, ScheduledOperation, Solution};

pub use crate::operators::CrossoverKind;
pub use crate::operators::MutationKind;

pub use crate::representation::DecodeError;
pub use crate::representation::Representation;
pub use crate::representation::RepresentationKind;

pub use crate::selection::SelectionKind;

pub use crate::utils::compare_floats;
pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::Float;
pub use crate::utils::InfoLogger;
pub use crate::utils::Random;
pub use crate::utils::{GenericError, GenericResult};
