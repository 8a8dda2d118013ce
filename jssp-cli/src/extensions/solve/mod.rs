//! Contains solver related extensions.

pub mod config;
pub mod interruption;
pub mod writer;
