//! Threshold Classification
//!
//! Maps a contamination value onto one of three tiers using two boundaries.
//! Rules are evaluated in order and the first match wins:
//!
//! ```text
//! value <  good_max      -> Good
//! value <  moderate_max  -> Moderate
//! otherwise              -> Contaminated
//! ```
//!
//! Comparisons are strict: a value sitting exactly on a boundary belongs to
//! the tier above it. `classify(200, 200, 400)` is `Moderate`, and
//! `classify(400, 200, 400)` is `Contaminated`.
//!
//! Classification is total. Negative values are `Good`, values far above
//! `moderate_max` are `Contaminated`, and NaN (which compares false against
//! everything) is `Contaminated`.
//!
//! Thresholds are not validated. With `good_max >= moderate_max` the
//! `Moderate` tier becomes unreachable, but the rules above still apply
//! unchanged.

use core::fmt;

use crate::{
    constants::{DEFAULT_GOOD_MAX, DEFAULT_MODERATE_MAX},
    readings::Reading,
    time::Timestamp,
};

/// Water quality tier of a single reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    Good,
    Moderate,
    Contaminated,
}

impl Status {
    /// All tiers, lowest first
    pub const ALL: [Status; 3] = [Status::Good, Status::Moderate, Status::Contaminated];

    pub const fn name(&self) -> &'static str {
        match self {
            Status::Good => "Good",
            Status::Moderate => "Moderate",
            Status::Contaminated => "Contaminated",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify a single value against two boundaries.
pub fn classify(value: f32, good_max: f32, moderate_max: f32) -> Status {
    if value < good_max {
        Status::Good
    } else if value < moderate_max {
        Status::Moderate
    } else {
        Status::Contaminated
    }
}

/// The two tier boundaries, supplied by the threshold controls
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Thresholds {
    /// Values below this are `Good`
    pub good_max: f32,
    /// Values below this (and not `Good`) are `Moderate`
    pub moderate_max: f32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            good_max: DEFAULT_GOOD_MAX,
            moderate_max: DEFAULT_MODERATE_MAX,
        }
    }
}

impl Thresholds {
    pub const fn new(good_max: f32, moderate_max: f32) -> Self {
        Self { good_max, moderate_max }
    }

    /// `false` when `Moderate` can never be assigned
    pub fn is_ordered(&self) -> bool {
        self.good_max < self.moderate_max
    }

    pub fn classify(&self, value: f32) -> Status {
        classify(value, self.good_max, self.moderate_max)
    }

    /// Classify a whole series, preserving order one-to-one.
    pub fn classify_all(&self, readings: &[Reading]) -> Vec<ClassifiedReading> {
        if !self.is_ordered() {
            log_warn!(
                "good_max {} >= moderate_max {}: Moderate tier is unreachable",
                self.good_max,
                self.moderate_max
            );
        }

        readings
            .iter()
            .map(|&reading| ClassifiedReading::new(reading, self.classify(reading.value)))
            .collect()
    }
}

/// A reading with its tier attached. Rebuilt whenever thresholds change.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassifiedReading {
    pub reading: Reading,
    pub status: Status,
}

impl ClassifiedReading {
    pub const fn new(reading: Reading, status: Status) -> Self {
        Self { reading, status }
    }

    pub const fn timestamp(&self) -> Timestamp {
        self.reading.timestamp
    }

    pub const fn value(&self) -> f32 {
        self.reading.value
    }
}
