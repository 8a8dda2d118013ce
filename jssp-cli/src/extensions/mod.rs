//! Contains command line extensions.

pub mod generate;
pub mod import;
pub mod solve;
