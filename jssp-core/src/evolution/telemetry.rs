//! A module which provides simple logging of the algorithm progress.

use crate::fitness::Fitness;
use crate::utils::{Float, InfoLogger, Timer};
use std::time::Duration;

/// Keeps generation statistics reported to the log.
pub struct GenerationStatistics {
    /// A generation index.
    pub generation: usize,
    /// Best fitness so far.
    pub best: Fitness,
    /// Best fitness of the generation.
    pub current: Fitness,
    /// Mean fitness of the generation.
    pub mean: Float,
    /// Amount of penalized chromosomes in the generation.
    pub penalized: usize,
    /// Amount of hall of fame members.
    pub hall_of_fame: usize,
}

/// Writes information about evolution progress into the log.
pub struct Telemetry {
    time: Timer,
    logger: InfoLogger,
    log_best: usize,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(logger: InfoLogger, log_best: usize) -> Self {
        Self { time: Timer::start(), logger, log_best: log_best.max(1) }
    }

    /// Reports initial population statistics.
    pub fn on_initial(&self, size: usize, duration: Duration) {
        self.log(
            format!("[{}s] created initial population of {size} in {}ms", self.time.elapsed_secs(), duration.as_millis())
                .as_str(),
        );
    }

    /// Reports generation statistics.
    pub fn on_generation(&self, statistics: &GenerationStatistics, generation_time: Timer) {
        if statistics.penalized > 0 {
            self.log(
                format!(
                    "[{}s] generation {}: {} chromosomes penalized",
                    self.time.elapsed_secs(),
                    statistics.generation,
                    statistics.penalized
                )
                .as_str(),
            );
        }

        if statistics.generation % self.log_best != 0 {
            return;
        }

        self.log(
            format!(
                "[{}s] generation {} took {}ms, best: {}, current: {}, mean: {:.2}, hall of fame: {}",
                self.time.elapsed_secs(),
                statistics.generation,
                generation_time.elapsed_millis(),
                statistics.best,
                statistics.current,
                statistics.mean,
                statistics.hall_of_fame
            )
            .as_str(),
        );
    }

    /// Reports final statistics.
    pub fn on_result(&self, generations: usize, best: Fitness, duration: Duration, reason: &str) {
        let secs = duration.as_secs_f64();
        let speed = if secs > 0. { generations as Float / secs } else { 0. };

        self.log(
            format!("[{}s] total generations: {generations}, speed: {speed:.2} gen/sec, termination: {reason}", duration.as_secs())
                .as_str(),
        );
        self.log(format!("\tbest fitness: {best}").as_str());
    }

    /// Writes log message.
    pub fn log(&self, message: &str) {
        (self.logger)(message)
    }
}
