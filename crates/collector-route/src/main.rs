//! Point Collector - greedy nearest-neighbor route planner.
//!
//! Generates a seeded set of target points around a fixed base, builds a
//! closed tour that always moves to the nearest unvisited point, and writes
//! the tour as an SVG plot (plus an optional JSON report).

use anyhow::{Context, Result};
use collector_common::{init_tracing, Config};
use collector_route::{render, PointCollector, TourReport};

fn main() -> Result<()> {
    // 1. Load config first, the log level comes from it
    let config = Config::from_env().context("Failed to load config from environment")?;

    // 2. Initialize logging
    init_tracing("collector-route", &config.log_level);

    // 3. Generate geometry and build the tour
    let point_count = config.point_count().context("Invalid COLLECTOR_POINT_COUNT")?;
    let mut collector = match config.seed {
        Some(seed) => PointCollector::with_seed(point_count, seed),
        None => PointCollector::new(point_count),
    };
    tracing::info!(
        seed = collector.random_seed(),
        "Collecting {} points",
        point_count
    );

    collector
        .generate_positions()
        .context("Failed to generate positions")?;
    collector
        .collect_points()
        .context("Failed to build tour")?;

    // 4. Hand the tour to the presentation layer
    render::save_plot(
        &config.svg_output,
        collector.positions(),
        collector.connections(),
    )
    .with_context(|| format!("Failed to write plot to {}", config.svg_output))?;

    if let Some(path) = &config.json_output {
        TourReport::from_collector(&collector)
            .save(path)
            .with_context(|| format!("Failed to write report to {}", path))?;
    }

    println!("Random seed used: {}", collector.random_seed());
    println!("Number of operations performed: {}", collector.operation_count());

    Ok(())
}
