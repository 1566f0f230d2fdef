//! Evaluation Cycle
//!
//! Runs the full pipeline in one pass:
//!
//! ```text
//! ReadingSource -> Thresholds::classify_all -> summarize -> views
//! ```
//!
//! Every call recomputes everything from the readings it is given. Nothing
//! is cached between cycles; the only state a `MonitoringCycle` keeps is its
//! reading source.

use crate::{
    aggregator::{summarize, Summary},
    classifier::{ClassifiedReading, Thresholds},
    errors::MonitorResult,
    readings::{Reading, ReadingSource},
    views::{Distribution, TimeSeries},
};

#[cfg(feature = "serde")]
use crate::{
    config::MonitorConfig,
    readings::ReadingGenerator,
    time::SystemTime,
};

/// Everything one cycle produces for the rendering layer
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    pub classified: Vec<ClassifiedReading>,
    pub summary: Summary,
    pub distribution: Distribution,
    pub time_series: TimeSeries,
}

/// Classify and summarize an existing series.
///
/// Fails with `EmptyInput` when `readings` is empty.
pub fn evaluate(readings: &[Reading], thresholds: &Thresholds) -> MonitorResult<Evaluation> {
    let classified = thresholds.classify_all(readings);
    let summary = summarize(&classified)?;
    let distribution = Distribution::from_counts(&summary.category_counts);
    let time_series = TimeSeries::new(&classified, thresholds);

    Ok(Evaluation {
        classified,
        summary,
        distribution,
        time_series,
    })
}

/// Generator, classifier and aggregator wired together
#[derive(Debug, Clone)]
pub struct MonitoringCycle<S> {
    source: S,
}

impl<S: ReadingSource> MonitoringCycle<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Draw `count` fresh readings and evaluate them.
    ///
    /// Fails with `InvalidCount` when `count` is 0.
    pub fn run(&mut self, count: usize, thresholds: &Thresholds) -> MonitorResult<Evaluation> {
        let readings = self.source.generate(count)?;
        evaluate(&readings, thresholds)
    }
}

#[cfg(feature = "serde")]
impl MonitoringCycle<ReadingGenerator<SystemTime>> {
    /// Wall-clock cycle, seeded when the config carries a seed
    pub fn from_config(config: &MonitorConfig) -> Self {
        let generator = match config.seed {
            Some(seed) => ReadingGenerator::seeded(SystemTime, seed),
            None => ReadingGenerator::system(),
        };
        Self::new(generator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        aggregator::SafetyVerdict,
        classifier::Status,
        errors::MonitorError,
        readings::ReadingGenerator,
        time::FixedTime,
    };

    #[test]
    fn evaluate_known_series() {
        let readings = [
            Reading::new(0, 100.0),
            Reading::new(1, 150.0),
            Reading::new(2, 300.0),
            Reading::new(3, 500.0),
        ];
        let eval = evaluate(&readings, &Thresholds::default()).unwrap();

        assert_eq!(eval.classified.len(), 4);
        assert_eq!(eval.summary.latest_status, Status::Contaminated);
        assert_eq!(eval.summary.latest_value, 500.0);
        assert_eq!(eval.summary.safety_verdict, SafetyVerdict::Unsafe);
        assert_eq!(eval.distribution.slices[0].status, Status::Good);
        assert_eq!(eval.distribution.slices[0].count, 2);
        assert_eq!(eval.time_series.len(), 4);
    }

    #[test]
    fn evaluate_empty_fails() {
        assert_eq!(
            evaluate(&[], &Thresholds::default()),
            Err(MonitorError::EmptyInput)
        );
    }

    #[test]
    fn run_with_zero_count_fails() {
        let mut cycle = MonitoringCycle::new(ReadingGenerator::seeded(FixedTime::new(0), 1));
        assert_eq!(
            cycle.run(0, &Thresholds::default()),
            Err(MonitorError::InvalidCount { count: 0 })
        );
    }

    #[test]
    fn threshold_change_reclassifies_same_readings() {
        let readings = [Reading::new(0, 250.0)];

        let strict = evaluate(&readings, &Thresholds::new(100.0, 200.0)).unwrap();
        let lenient = evaluate(&readings, &Thresholds::new(300.0, 500.0)).unwrap();

        assert_eq!(strict.summary.latest_status, Status::Contaminated);
        assert_eq!(lenient.summary.latest_status, Status::Good);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn from_config_respects_count() {
        let config = MonitorConfig {
            seed: Some(11),
            reading_count: 7,
            ..MonitorConfig::default()
        };
        let mut cycle = MonitoringCycle::from_config(&config);
        let eval = cycle.run(config.reading_count, &config.thresholds).unwrap();
        assert_eq!(eval.summary.category_counts.total(), 7);
    }
}
