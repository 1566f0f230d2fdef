//! Constants for AquaGuard Core
//!
//! Centralized numeric values used by the generator and classifier. Every
//! default that configuration can override lives here.
//!
//! ## Organization
//!
//! - **Generator**: value range and default series length
//! - **Thresholds**: default tier boundaries
//! - **Time**: unit conversions and reading cadence

/// Simulated sensor range and series length.
pub mod generator;

/// Default classification boundaries.
pub mod thresholds;

/// Time-related constants for intervals and conversions.
pub mod time;

pub use generator::{DEFAULT_READING_COUNT, READING_VALUE_MAX, READING_VALUE_MIN};

pub use thresholds::{DEFAULT_GOOD_MAX, DEFAULT_MODERATE_MAX};

pub use time::{MS_PER_MINUTE, MS_PER_SECOND, READING_INTERVAL_MINUTES, READING_INTERVAL_MS};
