//! A crate which exposes extensions used by the `jssp` command line tool: problem readers and
//! writers, a random instance generator, and solver configuration.
//!
//! # Examples
//!
//! ```
//! use jssp_cli::extensions::import::OrLibProblem;
//! use jssp_core::prelude::*;
//!
//! let problem = "2 2\n0 3 1 2\n1 2 0 4\n".to_string().read_orlib()?;
//!
//! assert_eq!(problem.nr_jobs(), 2);
//! assert_eq!(problem.machine_sequence()[1], vec![2, 1]);
//! # Ok::<(), GenericError>(())
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
mod helpers;

pub mod extensions;
