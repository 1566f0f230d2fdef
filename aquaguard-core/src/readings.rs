//! Simulated Sensor Readings
//!
//! ## Overview
//!
//! A `Reading` is one timestamped contamination measurement. The
//! `ReadingGenerator` simulates a sensor that sampled every five minutes up
//! to "now":
//!
//! ```text
//! generation order:  r0 = now, r1 = now - 5m, r2 = now - 10m, ...
//! returned order:    ..., now - 10m, now - 5m, now   (oldest first)
//! ```
//!
//! Each value is drawn independently and uniformly from
//! `[READING_VALUE_MIN, READING_VALUE_MAX]` (inclusive integers).
//!
//! ## Capabilities
//!
//! The generator owns both of its side-effect sources:
//! - a `TimeSource` for the reference instant
//! - a `rand::Rng` for the value draws
//!
//! Swap in `FixedTime` and a seeded rng for reproducible series:
//!
//! ```rust
//! use aquaguard_core::readings::{ReadingGenerator, ReadingSource};
//! use aquaguard_core::time::FixedTime;
//!
//! let mut generator = ReadingGenerator::seeded(FixedTime::new(3_600_000), 7);
//! let readings = generator.generate(4)?;
//!
//! assert_eq!(readings.len(), 4);
//! assert_eq!(readings[3].timestamp, 3_600_000);
//! assert_eq!(readings[0].timestamp, 3_600_000 - 3 * 5 * 60_000);
//! # Ok::<(), aquaguard_core::MonitorError>(())
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{
    constants::{READING_INTERVAL_MS, READING_VALUE_MAX, READING_VALUE_MIN},
    errors::{MonitorError, MonitorResult},
    time::{self, SystemTime, TimeSource, Timestamp},
};

/// Single contamination measurement
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reading {
    /// When the sample was taken (ms since epoch)
    pub timestamp: Timestamp,
    /// Concentration in sensor units, non-negative
    pub value: f32,
}

impl Reading {
    pub const fn new(timestamp: Timestamp, value: f32) -> Self {
        Self { timestamp, value }
    }

    /// Timestamp as a UTC date-time, for axis labels
    pub fn datetime(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        time::to_datetime(self.timestamp)
    }
}

/// Anything that can produce a chronological series of readings.
///
/// Implementations must return exactly `count` readings sorted ascending by
/// timestamp, and reject `count == 0` with `MonitorError::InvalidCount`.
pub trait ReadingSource {
    fn generate(&mut self, count: usize) -> MonitorResult<Vec<Reading>>;
}

/// Uniform random reading simulator
#[derive(Debug, Clone)]
pub struct ReadingGenerator<T = SystemTime, R = StdRng> {
    time: T,
    rng: R,
}

impl ReadingGenerator {
    /// Wall clock and OS-seeded entropy
    pub fn system() -> Self {
        Self::new(SystemTime, StdRng::from_entropy())
    }
}

impl<T: TimeSource> ReadingGenerator<T, StdRng> {
    /// Reproducible value sequence from a fixed seed
    pub fn seeded(time: T, seed: u64) -> Self {
        Self::new(time, StdRng::seed_from_u64(seed))
    }
}

impl<T: TimeSource, R: Rng> ReadingGenerator<T, R> {
    pub fn new(time: T, rng: R) -> Self {
        Self { time, rng }
    }

    /// Mutable access to the clock, e.g. to advance a `FixedTime` between cycles
    pub fn time_mut(&mut self) -> &mut T {
        &mut self.time
    }

    fn draw_value(&mut self) -> f32 {
        self.rng.gen_range(READING_VALUE_MIN..=READING_VALUE_MAX) as f32
    }
}

impl<T: TimeSource, R: Rng> ReadingSource for ReadingGenerator<T, R> {
    fn generate(&mut self, count: usize) -> MonitorResult<Vec<Reading>> {
        if count == 0 {
            return Err(MonitorError::InvalidCount { count });
        }

        let now = self.time.now();
        let mut readings: Vec<Reading> = (0..count as u64)
            .map(|i| {
                // Clocks near the epoch clamp to 0 instead of wrapping
                let timestamp = now.saturating_sub(i.saturating_mul(READING_INTERVAL_MS));
                Reading::new(timestamp, self.draw_value())
            })
            .collect();

        readings.sort_by_key(|r| r.timestamp);

        log_debug!(
            "generated {} readings spanning {}..={}",
            readings.len(),
            readings[0].timestamp,
            now
        );

        Ok(readings)
    }
}
