#[cfg(test)]
#[path = "../../../tests/unit/extensions/import/orlib_test.rs"]
mod orlib_test;

use jssp_core::prelude::*;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};

/// A trait to read a problem in OR-Library text format.
///
/// The first significant line keeps amount of jobs and machines, each following line describes a
/// job as a sequence of `machine duration` pairs with 0-based machine indices. Lines starting
/// with `#` are comments.
pub trait OrLibProblem {
    /// Reads OR-Library problem.
    fn read_orlib(self) -> GenericResult<Problem>;
}

impl<R: Read> OrLibProblem for BufReader<R> {
    fn read_orlib(self) -> GenericResult<Problem> {
        OrLibReader { buffer: String::new(), reader: self }.read_problem()
    }
}

impl OrLibProblem for String {
    fn read_orlib(self) -> GenericResult<Problem> {
        BufReader::new(self.as_bytes()).read_orlib()
    }
}

/// Writes a problem in OR-Library text format.
pub fn serialize_orlib_problem<W: Write>(mut writer: BufWriter<W>, problem: &Problem) -> GenericResult<()> {
    if let Some(lower_bound) = problem.lower_bound() {
        writeln!(writer, "# lower bound {lower_bound}")?;
    }

    writeln!(writer, "{} {}", problem.nr_jobs(), problem.nr_machines())?;

    for (times, machines) in problem.processing_time().iter().zip(problem.machine_sequence().iter()) {
        let line = machines
            .iter()
            .zip(times.iter())
            .map(|(machine, duration)| format!("{} {duration}", machine - 1))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(writer, "{line}")?;
    }

    writer.flush()?;

    Ok(())
}

struct OrLibReader<R: Read> {
    buffer: String,
    reader: BufReader<R>,
}

impl<R: Read> OrLibReader<R> {
    fn read_problem(&mut self) -> GenericResult<Problem> {
        let (nr_jobs, nr_machines) = self.read_header()?;

        // the header is not trusted to size allocations
        let mut processing_time = Vec::new();
        let mut machine_sequence = Vec::new();

        for job in 0..nr_jobs {
            let (machines, times) = self.read_job(job, nr_machines)?;
            machine_sequence.push(machines);
            processing_time.push(times);
        }

        Problem::new(processing_time, machine_sequence, None)
    }

    fn read_header(&mut self) -> GenericResult<(usize, usize)> {
        let values = self.read_values().map_err(|err| format!("cannot read problem header: {err}"))?;

        match values.as_slice() {
            &[nr_jobs, nr_machines] => Ok((nr_jobs as usize, nr_machines as usize)),
            _ => Err(format!("cannot parse amount of jobs and machines from '{}'", self.buffer.trim()).into()),
        }
    }

    fn read_job(&mut self, job: usize, nr_machines: usize) -> GenericResult<(Vec<usize>, Vec<Time>)> {
        let values = self.read_values().map_err(|err| format!("cannot read job {job}: {err}"))?;

        if values.len() != nr_machines * 2 {
            return Err(format!("job {job} should have {} values, got {}", nr_machines * 2, values.len()).into());
        }

        // machines are 0-based in the text format
        Ok(values.chunks_exact(2).map(|pair| (pair[0] as usize + 1, pair[1])).unzip())
    }

    fn read_values(&mut self) -> GenericResult<Vec<u64>> {
        loop {
            if read_line(&mut self.reader, &mut self.buffer)? == 0 {
                return Err("unexpected end of file".into());
            }

            let line = self.buffer.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            return line
                .split_whitespace()
                .map(|value| {
                    value.parse::<u64>().map_err(|err| GenericError::from(format!("cannot parse '{value}': {err}")))
                })
                .collect();
        }
    }
}

fn read_line<R: Read>(reader: &mut BufReader<R>, buffer: &mut String) -> GenericResult<usize> {
    buffer.clear();
    reader.read_line(buffer).map_err(|err| err.into())
}
