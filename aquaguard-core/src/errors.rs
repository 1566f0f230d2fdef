//! Error Types for the Reading Pipeline
//!
//! The core has exactly two failure modes, both caller contract violations:
//!
//! - `InvalidCount`: the generator was asked for zero readings
//! - `EmptyInput`: the aggregator was handed an empty sequence
//!
//! Classification is total and never fails. Nothing here is transient, so
//! callers should not retry; fix the input instead.
//!
//! Configuration loading has its own `ConfigError`, kept apart from
//! `MonitorError` so the pipeline error stays `Copy`.
//!
//! ```rust
//! use aquaguard_core::{summarize, MonitorError};
//!
//! match summarize(&[]) {
//!     Err(MonitorError::EmptyInput) => {} // nothing to report yet
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for pipeline operations
pub type MonitorResult<T> = Result<T, MonitorError>;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Pipeline errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorError {
    /// Generator invoked with a non-positive count
    #[error("Invalid reading count {count}: must be at least 1")]
    InvalidCount {
        /// The count that was requested
        count: usize,
    },

    /// Aggregator invoked with no readings
    #[error("Empty input: cannot summarize zero readings")]
    EmptyInput,
}

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config: {0}")]
    Io(String),

    /// Config text is not valid JSON for `MonitorConfig`
    #[error("Failed to parse config: {0}")]
    Parse(String),
}
