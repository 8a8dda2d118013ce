//! Contains the genetic representation of a schedule: genomes, chromosomes and populations.

mod chromosome;
pub use self::chromosome::*;

mod genome;
pub use self::genome::*;

mod population;
pub use self::population::*;
