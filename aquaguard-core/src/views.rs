//! Derived views for the rendering layer
//!
//! Plain data behind the two dashboard charts. Nothing here decides colors,
//! labels or layout.
//!
//! - `Distribution`: per-status slices with percentage shares, largest first
//! - `TimeSeries`: chronological points plus the two threshold levels

use crate::{
    aggregator::CategoryCounts,
    classifier::{ClassifiedReading, Status, Thresholds},
    time::Timestamp,
};

/// One slice of the status distribution
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistributionSlice {
    pub status: Status,
    pub count: usize,
    /// Share of all readings, 0.0..=100.0
    pub share_percent: f32,
}

/// Status distribution ordered by descending count
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Distribution {
    pub slices: Vec<DistributionSlice>,
}

impl Distribution {
    pub fn from_counts(counts: &CategoryCounts) -> Self {
        let total = counts.total();
        if total == 0 {
            return Self::default();
        }

        let slices = counts
            .by_descending_count()
            .into_iter()
            .map(|(status, count)| DistributionSlice {
                status,
                count,
                share_percent: (count as f64 * 100.0 / total as f64) as f32,
            })
            .collect();

        Self { slices }
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    pub fn share_of(&self, status: Status) -> f32 {
        self.slices
            .iter()
            .find(|s| s.status == status)
            .map_or(0.0, |s| s.share_percent)
    }
}

/// One plotted sample
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeriesPoint {
    pub timestamp: Timestamp,
    pub value: f32,
    pub status: Status,
}

impl From<&ClassifiedReading> for SeriesPoint {
    fn from(c: &ClassifiedReading) -> Self {
        Self {
            timestamp: c.timestamp(),
            value: c.value(),
            status: c.status,
        }
    }
}

/// Level-over-time view with threshold reference lines
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeSeries {
    pub points: Vec<SeriesPoint>,
    /// Reference line for the Good/Moderate boundary
    pub good_max: f32,
    /// Reference line for the Moderate/Contaminated boundary
    pub moderate_max: f32,
}

impl TimeSeries {
    pub fn new(classified: &[ClassifiedReading], thresholds: &Thresholds) -> Self {
        Self {
            points: classified.iter().map(SeriesPoint::from).collect(),
            good_max: thresholds.good_max,
            moderate_max: thresholds.moderate_max,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// (min, max) of the plotted values, for axis scaling
    pub fn value_range(&self) -> Option<(f32, f32)> {
        let mut values = self.points.iter().map(|p| p.value);
        let first = values.next()?;
        Some(values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }

    /// (first, last) timestamps
    pub fn time_span(&self) -> Option<(Timestamp, Timestamp)> {
        Some((self.points.first()?.timestamp, self.points.last()?.timestamp))
    }
}
