//! Time-Related Constants
//!
//! Conversion factors and the sampling cadence of the simulated sensor.

// ===== TIME UNIT CONVERSIONS =====

/// Milliseconds per second.
pub const MS_PER_SECOND: u64 = 1000;

/// Seconds per minute.
pub const SECONDS_PER_MINUTE: u64 = 60;

/// Milliseconds per minute.
pub const MS_PER_MINUTE: u64 = MS_PER_SECOND * SECONDS_PER_MINUTE;

// ===== SAMPLING INTERVALS =====

/// Minutes between two consecutive simulated readings.
///
/// Reading `i` (in generation order) is stamped `i * 5` minutes before the
/// instant the series was generated.
pub const READING_INTERVAL_MINUTES: u64 = 5;

/// Spacing between two consecutive simulated readings (milliseconds).
pub const READING_INTERVAL_MS: u64 = READING_INTERVAL_MINUTES * MS_PER_MINUTE;
