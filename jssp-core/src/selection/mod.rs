//! Contains strategies to sample parents from the current generation.

use crate::fitness::FitnessFunction;
use crate::genetics::Chromosome;
use crate::models::Time;
use crate::utils::{Float, GenericError, Random};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::Arc;

mod roulette;
pub use self::roulette::RouletteWheelSelection;

mod sorted;
pub use self::sorted::SortedSelection;

/// A stateful sampler over the fitness landscape of one generation.
pub trait Selection: Send {
    /// Resets sampling state for a new generation.
    fn add_new_population(&mut self, chromosomes: &[Arc<Chromosome>], fitness_fn: &dyn FitnessFunction);

    /// Draws one chromosome with replacement. Returns `None` only when the population is empty.
    fn next_chromosome(&mut self) -> Option<Arc<Chromosome>>;
}

/// Specifies available selection strategies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectionKind {
    /// Fitness proportional sampling with tunable pressure.
    #[default]
    RouletteWheel,
    /// Round-robin over the population sorted from the best to the worst.
    Sorted,
}

impl SelectionKind {
    /// Creates a selection of the given kind.
    pub fn create(
        &self,
        lower_bound: Time,
        aggression: Float,
        random: Arc<dyn Random + Send + Sync>,
    ) -> Box<dyn Selection> {
        match self {
            SelectionKind::RouletteWheel => Box::new(RouletteWheelSelection::new(lower_bound, aggression, random)),
            SelectionKind::Sorted => Box::new(SortedSelection::default()),
        }
    }
}

impl FromStr for SelectionKind {
    type Err = GenericError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "roulettewheel" | "roulette" => Ok(SelectionKind::RouletteWheel),
            "sorted" => Ok(SelectionKind::Sorted),
            _ => Err(format!("unknown selection: '{value}'").into()),
        }
    }
}

impl Display for SelectionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionKind::RouletteWheel => write!(f, "RouletteWheel"),
            SelectionKind::Sorted => write!(f, "Sorted"),
        }
    }
}
