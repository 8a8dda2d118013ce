//! Contains readers and writers of problem definition formats.

mod json;
pub use self::json::{JsonProblem, serialize_json_problem};

mod orlib;
pub use self::orlib::{OrLibProblem, serialize_orlib_problem};

use jssp_core::prelude::*;
use std::io::{BufReader, Read};

/// Reads a problem in the given format. The `instance` index selects a problem from a
/// multi instance document.
pub fn import_problem<R: Read>(input_format: &str, reader: BufReader<R>, instance: usize) -> GenericResult<Problem> {
    match input_format {
        "json" => reader.read_json(instance),
        "orlib" => reader.read_orlib(),
        _ => Err(format!("unknown format: '{input_format}'").into()),
    }
}
