//! Evaluation Cycle Example
//!
//! Runs one dashboard cycle end to end: simulate readings, classify them
//! against thresholds, and print the data a rendering layer would draw.
//!
//! ## What You'll Learn
//!
//! - Building a cycle from a `MonitorConfig`
//! - Reading the headline summary and distribution
//! - Re-evaluating the same readings after a threshold change
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_evaluation_cycle
//! cargo run --example 01_evaluation_cycle -- path/to/config.json
//! ```

use aquaguard_core::{evaluate, MonitorConfig, MonitoringCycle, Thresholds};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("AquaGuard Evaluation Cycle Example");
    println!("==================================\n");

    let config = match std::env::args().nth(1) {
        Some(path) => MonitorConfig::load(path)?,
        None => MonitorConfig {
            seed: Some(2024),
            ..MonitorConfig::default()
        },
    };

    println!("Thresholds:");
    println!("  good_max:     {}", config.thresholds.good_max);
    println!("  moderate_max: {}", config.thresholds.moderate_max);
    println!("  readings:     {}\n", config.reading_count);

    let mut cycle = MonitoringCycle::from_config(&config);
    let evaluation = cycle.run(config.reading_count, &config.thresholds)?;

    let summary = &evaluation.summary;
    println!(
        "Latest reading: {} -> {} ({:?})",
        summary.latest_value, summary.latest_status, summary.safety_verdict
    );

    println!("\nDistribution:");
    for slice in &evaluation.distribution.slices {
        println!(
            "  {:<13} {:>3} readings  {:>5.1}%",
            slice.status.name(),
            slice.count,
            slice.share_percent
        );
    }

    if let Some((lo, hi)) = evaluation.time_series.value_range() {
        println!("\nValue range over the series: {lo} .. {hi}");
    }

    // Same readings, stricter thresholds: only classification changes
    let readings: Vec<_> = evaluation.classified.iter().map(|c| c.reading).collect();
    let strict = evaluate(&readings, &Thresholds::new(100.0, 250.0))?;
    println!(
        "\nWith thresholds 100/250 the latest reading is {} ({:?})",
        strict.summary.latest_status, strict.summary.safety_verdict
    );

    println!("\nSummary as JSON:");
    println!("{}", serde_json::to_string_pretty(summary)?);

    Ok(())
}
