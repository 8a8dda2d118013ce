#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;
use jssp_cli::extensions::import::import_problem;
use jssp_cli::extensions::solve::config::*;
use jssp_cli::extensions::solve::interruption::create_interruption_handler;
use jssp_cli::extensions::solve::writer::{write_progress_csv, write_solution_json};
use jssp_core::prelude::*;
use std::sync::{Arc, Mutex};

const FORMAT_ARG_NAME: &str = "FORMAT";
const PROBLEM_ARG_NAME: &str = "PROBLEM";
const INSTANCE_ARG_NAME: &str = "instance";
const CONFIG_ARG_NAME: &str = "config";
const GENERATIONS_ARG_NAME: &str = "max-generations";
const SEED_ARG_NAME: &str = "seed";
const THREADS_ARG_NAME: &str = "max-threads";
const CHECK_ARG_NAME: &str = "check";
const LOG_ARG_NAME: &str = "log";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const OUT_PROGRESS_ARG_NAME: &str = "out-progress";

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Solves job shop scheduling problem using genetic algorithm")
        // required
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies the problem type")
                .required(true)
                .value_parser(["json", "orlib"])
                .index(1),
        )
        .arg(Arg::new(PROBLEM_ARG_NAME).help("Sets the problem file to use").required(true).index(2))
        // optional
        .arg(
            Arg::new(INSTANCE_ARG_NAME)
                .help("Specifies instance index in the json problem file, wraps around the amount of instances")
                .short('i')
                .long(INSTANCE_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to algorithm configuration file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(GENERATIONS_ARG_NAME)
                .help("Specifies maximum number of generations")
                .short('n')
                .long(GENERATIONS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(SEED_ARG_NAME)
                .help("Specifies random generator seed to make run reproducible")
                .short('s')
                .long(SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(THREADS_ARG_NAME)
                .help("Specifies max amount of threads used to evaluate generations")
                .short('t')
                .long(THREADS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(CHECK_ARG_NAME)
                .help("Checks that each composed generation keeps all jobs")
                .long(CHECK_ARG_NAME)
                .action(ArgAction::SetTrue)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .short('l')
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_PROGRESS_ARG_NAME)
                .help("Specifies path to the csv file for progress series output")
                .short('p')
                .long(OUT_PROGRESS_ARG_NAME)
                .required(false),
        )
}

pub fn run_solve(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    // required
    let problem_format = matches.get_one::<String>(FORMAT_ARG_NAME).ok_or("problem format is not set")?;
    let problem_path = matches.get_one::<String>(PROBLEM_ARG_NAME).ok_or("problem path is not set")?;

    // optional
    let instance = parse_int_value::<usize>(matches, INSTANCE_ARG_NAME, "instance")?.unwrap_or(0);
    let max_generations = parse_int_value::<usize>(matches, GENERATIONS_ARG_NAME, "max generations")?;
    let seed = parse_int_value::<u64>(matches, SEED_ARG_NAME, "seed")?;
    let max_threads = parse_int_value::<usize>(matches, THREADS_ARG_NAME, "max threads")?;
    let is_check_requested = matches.get_flag(CHECK_ARG_NAME);
    let is_logging_requested = matches.get_flag(LOG_ARG_NAME);

    let problem = import_problem(problem_format, BufReader::new(open_file(problem_path, "problem")), instance)
        .map_err(|err| format!("cannot read {problem_format} problem from '{problem_path}': '{err}'"))?;

    let mut config = match matches.get_one::<String>(CONFIG_ARG_NAME) {
        Some(path) => read_config(BufReader::new(open_file(path, "config"))).map_err(|err| err.to_string())?,
        None => Config::default(),
    };

    // command line arguments override config values
    if let Some(max_generations) = max_generations {
        config.set_max_generations(max_generations);
    }
    if let Some(seed) = seed {
        config.environment_mut().seed = Some(seed);
    }
    if let Some(max_threads) = max_threads {
        config.environment_mut().max_threads = Some(max_threads);
    }
    if is_check_requested {
        config.environment_mut().check_correctness = Some(true);
    }
    if is_logging_requested {
        config.enable_logging();
    }

    let evolution_config = create_builder_from_config(&config)
        .and_then(|builder| builder.build())
        .map_err(|err| format!("cannot create algorithm configuration: '{err}'"))?;
    let environment = Arc::new(create_environment_from_config(&config));

    let problem = Arc::new(problem);
    let progress = Arc::new(Mutex::new(DataLog::new(config.mean_window())));

    let mut controller = EvolutionController::new(problem.clone(), evolution_config, environment.clone())
        .with_sink(Box::new(progress.clone()));

    if let Err(err) = create_interruption_handler(controller.control()) {
        (environment.logger)(err.to_string().as_str());
    }

    let result = controller.run().map_err(|err| format!("cannot solve problem: '{err}'"))?;

    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result"));
    write_solution_json(out_writer_func(out_result), problem.as_ref(), &result).map_err(|err| err.to_string())?;

    if let Some(path) = matches.get_one::<String>(OUT_PROGRESS_ARG_NAME) {
        let progress = progress.lock().map_err(|_| "cannot access progress data".to_string())?;
        write_progress_csv(create_write_buffer(Some(create_file(path, "out progress"))), &progress)
            .map_err(|err| err.to_string())?;
    }

    Ok(())
}
