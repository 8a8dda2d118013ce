#[cfg(test)]
#[path = "../../tests/unit/evolution/sink_test.rs"]
mod sink_test;

use crate::utils::Float;
use std::sync::{Arc, Mutex};

/// A default window of the moving mean series.
pub const DEFAULT_MEAN_WINDOW: usize = 40;

/// Specifies progress metrics emitted once per generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProgressMetric {
    /// Best fitness found so far.
    BestFitness,
    /// Average fitness of the hall of fame.
    HallOfFameAverage,
    /// Best fitness of the current generation.
    CurrentFitness,
    /// Mean fitness of the current generation.
    CumulativeFitness,
}

impl ProgressMetric {
    /// Returns all metrics in emission order.
    pub fn all() -> [ProgressMetric; 4] {
        [
            ProgressMetric::BestFitness,
            ProgressMetric::HallOfFameAverage,
            ProgressMetric::CurrentFitness,
            ProgressMetric::CumulativeFitness,
        ]
    }

    /// Returns a human readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ProgressMetric::BestFitness => "Best Fitness",
            ProgressMetric::HallOfFameAverage => "Hall Of Fame",
            ProgressMetric::CurrentFitness => "Current Fitness",
            ProgressMetric::CumulativeFitness => "Cumulative Fitness",
        }
    }

    /// Returns true if a moving mean is kept for the metric.
    pub fn has_mean(&self) -> bool {
        matches!(self, ProgressMetric::CurrentFitness | ProgressMetric::CumulativeFitness)
    }

    fn index(&self) -> usize {
        match self {
            ProgressMetric::BestFitness => 0,
            ProgressMetric::HallOfFameAverage => 1,
            ProgressMetric::CurrentFitness => 2,
            ProgressMetric::CumulativeFitness => 3,
        }
    }
}

/// Receives progress observations. Records of each metric arrive in increasing generation order.
pub trait DataSink: Send {
    /// Adds a data point.
    fn add_data_point(&mut self, metric: ProgressMetric, generation: usize, value: Float);
}

impl<T: DataSink> DataSink for Arc<Mutex<T>> {
    fn add_data_point(&mut self, metric: ProgressMetric, generation: usize, value: Float) {
        let mut sink = self.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        sink.add_data_point(metric, generation, value);
    }
}

/// A single observation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataPoint {
    /// A generation index.
    pub generation: usize,
    /// An observed value.
    pub value: Float,
}

/// Keeps observations of one metric and, optionally, their moving mean.
#[derive(Clone, Debug, Default)]
pub struct DataSeries {
    points: Vec<DataPoint>,
    mean: Vec<DataPoint>,
}

impl DataSeries {
    /// Returns observations.
    pub fn points(&self) -> &[DataPoint] {
        self.points.as_slice()
    }

    /// Returns moving mean observations.
    pub fn mean(&self) -> &[DataPoint] {
        self.mean.as_slice()
    }

    fn add(&mut self, generation: usize, value: Float, window: Option<usize>) {
        self.points.push(DataPoint { generation, value });

        if let Some(window) = window {
            // window values may include the worst fitness sentinel
            let recent = &self.points[self.points.len().saturating_sub(window)..];
            let value = recent.iter().map(|point| point.value).sum::<Float>() / recent.len() as Float;

            self.mean.push(DataPoint { generation, value });
        }
    }
}

/// An in-memory data sink which keeps all progress series.
#[derive(Clone, Debug)]
pub struct DataLog {
    window: usize,
    series: [DataSeries; 4],
}

impl DataLog {
    /// Creates a new instance of `DataLog` with given moving mean window.
    pub fn new(window: usize) -> Self {
        Self { window: window.max(1), series: Default::default() }
    }

    /// Returns series of the metric.
    pub fn series(&self, metric: ProgressMetric) -> &DataSeries {
        &self.series[metric.index()]
    }

    /// Returns the last observed value of the metric.
    pub fn last(&self, metric: ProgressMetric) -> Option<DataPoint> {
        self.series(metric).points.last().copied()
    }
}

impl Default for DataLog {
    fn default() -> Self {
        Self::new(DEFAULT_MEAN_WINDOW)
    }
}

impl DataSink for DataLog {
    fn add_data_point(&mut self, metric: ProgressMetric, generation: usize, value: Float) {
        let window = if metric.has_mean() { Some(self.window) } else { None };
        self.series[metric.index()].add(generation, value, window);
    }
}
