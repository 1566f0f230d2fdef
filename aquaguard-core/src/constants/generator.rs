//! Reading Generator Constants
//!
//! Bounds of the simulated contamination sensor. Values are concentrations in
//! arbitrary sensor units (the dashboard plots them as microplastic levels).

/// Smallest value the simulated sensor can report (inclusive).
pub const READING_VALUE_MIN: u32 = 50;

/// Largest value the simulated sensor can report (inclusive).
///
/// Matches the upper end of the threshold controls, so every threshold
/// position splits the simulated range somewhere.
pub const READING_VALUE_MAX: u32 = 600;

/// Number of readings in one evaluation cycle when none is configured.
///
/// 50 readings at 5-minute spacing covers a little over four hours.
pub const DEFAULT_READING_COUNT: usize = 50;
