//! Core engine for AquaGuard
//!
//! Simulates periodic water-quality sensor readings, classifies each one
//! against two configurable thresholds, and derives the summary views a
//! dashboard displays.
//!
//! Data flows one way:
//!
//! ```text
//! ReadingGenerator -> Thresholds (classify) -> summarize -> views
//! ```
//!
//! Every stage is synchronous and recomputed from scratch per cycle. The
//! generator's clock and rng are injected, so a fixed time and seed give a
//! fully reproducible cycle.
//!
//! ```no_run
//! use aquaguard_core::{MonitoringCycle, ReadingGenerator, Thresholds};
//!
//! let mut cycle = MonitoringCycle::new(ReadingGenerator::system());
//! let evaluation = cycle.run(50, &Thresholds::default())?;
//!
//! println!(
//!     "latest {} -> {:?}",
//!     evaluation.summary.latest_status,
//!     evaluation.summary.safety_verdict
//! );
//! # Ok::<(), aquaguard_core::MonitorError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod logging;

pub mod aggregator;
pub mod classifier;
#[cfg(feature = "serde")]
pub mod config;
pub mod constants;
pub mod cycle;
pub mod errors;
pub mod readings;
pub mod time;
pub mod views;

// Public API
pub use aggregator::{summarize, CategoryCounts, SafetyVerdict, Summary};
pub use classifier::{classify, ClassifiedReading, Status, Thresholds};
#[cfg(feature = "serde")]
pub use config::MonitorConfig;
pub use cycle::{evaluate, Evaluation, MonitoringCycle};
pub use errors::{ConfigError, ConfigResult, MonitorError, MonitorResult};
pub use readings::{Reading, ReadingGenerator, ReadingSource};
pub use views::{Distribution, DistributionSlice, SeriesPoint, TimeSeries};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
