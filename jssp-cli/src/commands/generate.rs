#[cfg(test)]
#[path = "../../tests/unit/commands/generate_test.rs"]
mod generate_test;

use super::*;
use jssp_cli::extensions::generate::generate_problem;
use jssp_cli::extensions::import::{serialize_json_problem, serialize_orlib_problem};
use jssp_core::prelude::*;

const FORMAT_ARG_NAME: &str = "FORMAT";
const JOBS_SIZE_ARG_NAME: &str = "jobs-size";
const MACHINES_SIZE_ARG_NAME: &str = "machines-size";
const MAX_DURATION_ARG_NAME: &str = "max-duration";
const SEED_ARG_NAME: &str = "seed";
const OUT_RESULT_ARG_NAME: &str = "out-result";

const DEFAULT_MAX_DURATION: Time = 99;

pub fn get_generate_app() -> Command {
    Command::new("generate")
        .about("Provides the way to generate random problems for testing")
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies output type")
                .required(true)
                .value_parser(["json", "orlib"])
                .index(1),
        )
        .arg(
            Arg::new(JOBS_SIZE_ARG_NAME)
                .help("Amount of jobs in generated problem")
                .short('j')
                .long(JOBS_SIZE_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(MACHINES_SIZE_ARG_NAME)
                .help("Amount of machines in generated problem")
                .short('m')
                .long(MACHINES_SIZE_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(MAX_DURATION_ARG_NAME)
                .help("Max duration of an operation, default is 99")
                .short('d')
                .long(MAX_DURATION_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(SEED_ARG_NAME)
                .help("Specifies random generator seed to make output reproducible")
                .short('s')
                .long(SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

pub fn run_generate(matches: &ArgMatches) -> Result<(), String> {
    let output_format = matches.get_one::<String>(FORMAT_ARG_NAME).ok_or("output format is not set")?;
    let jobs_size = parse_int_value::<usize>(matches, JOBS_SIZE_ARG_NAME, "jobs size")?.ok_or("jobs size is not set")?;
    let machines_size =
        parse_int_value::<usize>(matches, MACHINES_SIZE_ARG_NAME, "machines size")?.ok_or("machines size is not set")?;
    let max_duration =
        parse_int_value::<Time>(matches, MAX_DURATION_ARG_NAME, "max duration")?.unwrap_or(DEFAULT_MAX_DURATION);
    let random = parse_int_value::<u64>(matches, SEED_ARG_NAME, "seed")?
        .map(DefaultRandom::new_with_seed)
        .unwrap_or_default();

    let problem = generate_problem(jobs_size, machines_size, max_duration, &random)
        .map_err(|err| format!("cannot generate problem: '{err}'"))?;

    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result"));
    let out_buffer = create_write_buffer(out_result);

    match output_format.as_str() {
        "json" => serialize_json_problem(out_buffer, &[problem]),
        "orlib" => serialize_orlib_problem(out_buffer, &problem),
        _ => Err(format!("unknown output format: '{output_format}'").into()),
    }
    .map_err(|err| format!("cannot write {output_format} problem: '{err}'"))
}
