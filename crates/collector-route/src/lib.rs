//! Greedy nearest-neighbor route planning over seeded point sets.
//!
//! [`tour::TourBuilder`] holds the traversal, [`collector::PointCollector`]
//! drives one run end to end, and [`render`] / [`export`] turn a finished
//! tour into an SVG plot or a JSON report.

pub mod collector;
pub mod export;
pub mod render;
pub mod tour;

pub use collector::PointCollector;
pub use export::TourReport;
pub use tour::{Connection, TourBuilder};
