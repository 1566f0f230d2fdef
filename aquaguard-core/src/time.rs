//! Time sources for reading generation
//!
//! Timestamps are milliseconds since the Unix epoch. The generator takes its
//! "now" from a `TimeSource` so tests can pin the clock:
//! - `SystemTime` reads the wall clock
//! - `FixedTime` returns whatever it was set to

use chrono::{DateTime, Utc};

/// Timestamp in milliseconds since the Unix epoch
pub type Timestamp = u64;

/// Source of "now" for the generator
pub trait TimeSource {
    /// Get current timestamp in milliseconds
    fn now(&self) -> Timestamp;
}

/// Wall clock time source
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTime;

impl TimeSource for SystemTime {
    fn now(&self) -> Timestamp {
        use std::time::{SystemTime as StdSystemTime, UNIX_EPOCH};

        StdSystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }
}

/// Fixed time source for testing
#[derive(Debug, Clone)]
pub struct FixedTime {
    timestamp: Timestamp,
}

impl FixedTime {
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    pub fn set(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    pub fn advance(&mut self, ms: u64) {
        self.timestamp += ms;
    }
}

impl TimeSource for FixedTime {
    fn now(&self) -> Timestamp {
        self.timestamp
    }
}

/// Convert a millisecond timestamp to a UTC date-time.
///
/// Returns `None` only for timestamps chrono cannot represent (far beyond
/// year 262143).
pub fn to_datetime(timestamp: Timestamp) -> Option<DateTime<Utc>> {
    let millis = i64::try_from(timestamp).ok()?;
    DateTime::<Utc>::from_timestamp_millis(millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_time_advances() {
        let mut time = FixedTime::new(1000);
        assert_eq!(time.now(), 1000);

        time.advance(500);
        assert_eq!(time.now(), 1500);

        time.set(42);
        assert_eq!(time.now(), 42);
    }

    #[test]
    fn system_time_is_after_2020() {
        // 2020-01-01T00:00:00Z
        assert!(SystemTime.now() > 1_577_836_800_000);
    }

    #[test]
    fn datetime_conversion() {
        let dt = to_datetime(1_700_000_000_000).unwrap();
        assert_eq!(dt.timestamp(), 1_700_000_000);

        assert!(to_datetime(u64::MAX).is_none());
    }
}
