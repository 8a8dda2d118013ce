//! Core crate contains the main building blocks of a genetic algorithm which solves a
//! ***Job Shop Scheduling Problem*** (JSSP) minimizing makespan.
//!
//! # Overview
//!
//! A schedule is encoded as a [`Chromosome`](genetics::Chromosome): one preference list per machine,
//! which keeps the order in which the machine attempts to process jobs. A decoder turns such a
//! chromosome into a feasible [`Solution`](models::Solution) using list scheduling with precedence
//! deferral and first-fit insertion. Its makespan is the fitness being minimized.
//!
//! The [`EvolutionController`](evolution::EvolutionController) composes generations from crossover
//! offspring (PMX, OX, LOX), mutated offspring (swap, insertion, inversion) and random chromosomes.
//! Parents are drawn either by a [`Selection`](selection::Selection) strategy or from a bounded
//! [`HallOfFame`](hall_of_fame::HallOfFame) of the best chromosomes seen so far.
//!
//! # Examples
//!
//! ```
//! use jssp_core::prelude::*;
//! use std::sync::Arc;
//!
//! // two jobs on two machines, machine sequence values are 1-based
//! let problem = Problem::new(vec![vec![3, 2], vec![2, 4]], vec![vec![1, 2], vec![2, 1]], None)?;
//! let config = EvolutionConfigBuilder::default().with_population_size(10).with_max_generations(5).build()?;
//!
//! let mut controller = EvolutionController::new(Arc::new(problem), config, Arc::new(Environment::default()));
//! let result = controller.run()?;
//!
//! assert_eq!(result.generations, 5);
//! assert!(result.fitness >= 6);
//! # Ok::<(), GenericError>(())
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod evolution;
pub mod fitness;
pub mod genetics;
pub mod hall_of_fame;
pub mod models;
pub mod operators;
pub mod prelude;
pub mod representation;
pub mod selection;
pub mod utils;
