//! Summary Aggregation
//!
//! Collapses a classified series into the headline numbers:
//!
//! - `latest_status`: tier of the last (most recent) reading
//! - `safety_verdict`: `Safe` for `Good`/`Moderate`, `Unsafe` for `Contaminated`
//! - `category_counts`: occurrences per tier, zero-count tiers omitted
//!
//! The aggregator trusts the order it is given. It does no sorting,
//! filtering or windowing; "latest" is simply the last element.
//!
//! ```rust
//! use aquaguard_core::{summarize, ClassifiedReading, Reading, SafetyVerdict, Status};
//!
//! let series: Vec<_> = [Status::Good, Status::Good, Status::Moderate, Status::Contaminated]
//!     .into_iter()
//!     .enumerate()
//!     .map(|(i, s)| ClassifiedReading::new(Reading::new(i as u64, 0.0), s))
//!     .collect();
//!
//! let summary = summarize(&series)?;
//! assert_eq!(summary.latest_status, Status::Contaminated);
//! assert_eq!(summary.safety_verdict, SafetyVerdict::Unsafe);
//! assert_eq!(summary.category_counts.get(Status::Good), 2);
//! # Ok::<(), aquaguard_core::MonitorError>(())
//! ```

use std::collections::BTreeMap;

use crate::{
    classifier::{ClassifiedReading, Status},
    errors::{MonitorError, MonitorResult},
};

/// Binary headline verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SafetyVerdict {
    Safe,
    Unsafe,
}

impl From<Status> for SafetyVerdict {
    fn from(status: Status) -> Self {
        match status {
            Status::Good | Status::Moderate => SafetyVerdict::Safe,
            Status::Contaminated => SafetyVerdict::Unsafe,
        }
    }
}

impl SafetyVerdict {
    pub const fn is_safe(&self) -> bool {
        matches!(self, SafetyVerdict::Safe)
    }
}

/// Occurrences per status.
///
/// Only statuses seen at least once are present; there are no zero entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CategoryCounts(BTreeMap<Status, usize>);

impl CategoryCounts {
    pub fn from_statuses<I: IntoIterator<Item = Status>>(statuses: I) -> Self {
        let mut counts = BTreeMap::new();
        for status in statuses {
            *counts.entry(status).or_insert(0) += 1;
        }
        Self(counts)
    }

    /// Count for `status`, 0 if it never occurred
    pub fn get(&self, status: Status) -> usize {
        self.0.get(&status).copied().unwrap_or(0)
    }

    pub fn contains(&self, status: Status) -> bool {
        self.0.contains_key(&status)
    }

    /// Sum of all counts (the length of the summarized series)
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    /// Number of distinct statuses present
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in status order (Good, Moderate, Contaminated)
    pub fn iter(&self) -> impl Iterator<Item = (Status, usize)> + '_ {
        self.0.iter().map(|(&status, &count)| (status, count))
    }

    /// Entries ordered by descending count, ties in status order
    pub fn by_descending_count(&self) -> Vec<(Status, usize)> {
        let mut entries: Vec<_> = self.iter().collect();
        // Stable sort keeps the status order for ties
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}

/// Headline view of one evaluation cycle
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    pub latest_status: Status,
    /// Raw value of the most recent reading
    pub latest_value: f32,
    pub safety_verdict: SafetyVerdict,
    pub category_counts: CategoryCounts,
}

/// Summarize a chronologically ordered classified series.
pub fn summarize(classified: &[ClassifiedReading]) -> MonitorResult<Summary> {
    let latest = classified.last().ok_or(MonitorError::EmptyInput)?;

    let category_counts = CategoryCounts::from_statuses(classified.iter().map(|c| c.status));

    log_debug!(
        "summarized {} readings: latest {} ({}), counts {:?}",
        classified.len(),
        latest.status,
        latest.value(),
        category_counts
    );

    Ok(Summary {
        latest_status: latest.status,
        latest_value: latest.value(),
        safety_verdict: SafetyVerdict::from(latest.status),
        category_counts,
    })
}
