//! Classification Threshold Defaults
//!
//! Initial positions of the two threshold controls. The core never validates
//! threshold values; these only seed `Thresholds::default()`.

/// Default upper bound (exclusive) of the `Good` tier.
pub const DEFAULT_GOOD_MAX: f32 = 200.0;

/// Default upper bound (exclusive) of the `Moderate` tier.
///
/// Values at or above this are `Contaminated`.
pub const DEFAULT_MODERATE_MAX: f32 = 400.0;
