//! Shared fixtures for integration tests
//!
//! - Deterministic generators (fixed clock, fixed seed)
//! - Hand-built classified series for aggregator scenarios

#![allow(dead_code)]

use aquaguard_core::{
    readings::ReadingGenerator,
    time::{FixedTime, Timestamp},
    ClassifiedReading, Reading, Status,
};
use rand::rngs::StdRng;

/// 2023-11-14T22:13:20Z, far enough from the epoch that 5-minute steps never saturate
pub const TEST_NOW: Timestamp = 1_700_000_000_000;

pub const TEST_SEED: u64 = 42;

/// Generator pinned to `TEST_NOW` with a fixed seed
pub fn deterministic_generator(seed: u64) -> ReadingGenerator<FixedTime, StdRng> {
    ReadingGenerator::seeded(FixedTime::new(TEST_NOW), seed)
}

/// Readings with the given values, one minute apart, oldest first
pub fn readings_from_values(values: &[f32]) -> Vec<Reading> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| Reading::new(TEST_NOW + i as u64 * 60_000, v))
        .collect()
}

/// Classified series carrying the given statuses directly
pub fn series_with_statuses(statuses: &[Status]) -> Vec<ClassifiedReading> {
    statuses
        .iter()
        .enumerate()
        .map(|(i, &s)| ClassifiedReading::new(Reading::new(TEST_NOW + i as u64, 100.0), s))
        .collect()
}
