#[cfg(test)]
#[path = "../../../tests/unit/extensions/import/json_test.rs"]
mod json_test;

use jssp_core::prelude::*;
use serde::Serialize;
use serde_json::{Map, Value};
use std::io::{BufReader, BufWriter, Read, Write};

/// A trait to read a problem from json document which keeps an array of instances.
///
/// Each instance is an object with `processing_time` and `machine_sequence` tables (machine
/// indices are 1-based), optional `nr_jobs` and `nr_machines` dimensions and an optional
/// `lower_bound` of the makespan.
pub trait JsonProblem {
    /// Reads the instance with the given index. The index wraps around the amount of instances.
    fn read_json(self, instance: usize) -> GenericResult<Problem>;
}

impl<R: Read> JsonProblem for BufReader<R> {
    fn read_json(self, instance: usize) -> GenericResult<Problem> {
        let document: Value =
            serde_json::from_reader(self).map_err(|err| format!("malformed problem json: '{err}'"))?;

        read_instance(document, instance)
    }
}

impl JsonProblem for String {
    fn read_json(self, instance: usize) -> GenericResult<Problem> {
        BufReader::new(self.as_bytes()).read_json(instance)
    }
}

/// Serializes problems as json array of instances.
pub fn serialize_json_problem<W: Write>(mut writer: BufWriter<W>, problems: &[Problem]) -> GenericResult<()> {
    let instances = problems
        .iter()
        .map(|problem| JsonInstance {
            nr_jobs: problem.nr_jobs(),
            nr_machines: problem.nr_machines(),
            processing_time: problem.processing_time(),
            machine_sequence: problem.machine_sequence(),
            lower_bound: problem.lower_bound(),
        })
        .collect::<Vec<_>>();

    serde_json::to_writer_pretty(&mut writer, &instances).map_err(|err| format!("cannot write problem json: '{err}'"))?;
    writer.flush()?;

    Ok(())
}

#[derive(Serialize)]
struct JsonInstance<'a> {
    nr_jobs: usize,
    nr_machines: usize,
    processing_time: &'a [Vec<Time>],
    machine_sequence: &'a [Vec<usize>],
    #[serde(skip_serializing_if = "Option::is_none")]
    lower_bound: Option<Time>,
}

fn read_instance(document: Value, instance: usize) -> GenericResult<Problem> {
    let Value::Array(instances) = document else {
        return Err("malformed problem json: expected an array of instances".into());
    };

    if instances.is_empty() {
        return Err("problem json has no instances".into());
    }

    let index = instance % instances.len();
    let object = instances[index].as_object().ok_or_else(|| format!("problem instance {index} is not an object"))?;

    let processing_time = read_table(object, "processing_time")?;
    let machine_sequence = read_table(object, "machine_sequence")?
        .into_iter()
        .map(|row| row.into_iter().map(|machine| machine as usize).collect())
        .collect::<Vec<Vec<_>>>();

    let lower_bound = match object.get("lower_bound") {
        None | Some(Value::Null) => None,
        Some(value) => Some(read_integer(value, "lower_bound")?),
    };

    check_dimension(object, "nr_jobs", processing_time.len())?;
    check_dimension(object, "nr_machines", processing_time.first().map_or(0, |row| row.len()))?;

    Problem::new(processing_time, machine_sequence, lower_bound)
}

fn read_table(object: &Map<String, Value>, key: &str) -> GenericResult<Vec<Vec<u64>>> {
    let rows = object
        .get(key)
        .ok_or_else(|| format!("missing '{key}' property"))?
        .as_array()
        .ok_or_else(|| format!("'{key}' should be an array of arrays"))?;

    rows.iter()
        .map(|row| -> GenericResult<Vec<u64>> {
            let values = row.as_array().ok_or_else(|| format!("'{key}' should be an array of arrays"))?;
            values.iter().map(|value| read_integer(value, key)).collect()
        })
        .collect()
}

fn read_integer(value: &Value, key: &str) -> GenericResult<u64> {
    value.as_u64().ok_or_else(|| format!("unsupported data type in '{key}': {value}").into())
}

fn check_dimension(object: &Map<String, Value>, key: &str, actual: usize) -> GenericResult<()> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(()),
        Some(value) => {
            let declared = read_integer(value, key)?;
            if declared as usize == actual {
                Ok(())
            } else {
                Err(format!("'{key}' is {declared}, but tables define {actual}").into())
            }
        }
    }
}
