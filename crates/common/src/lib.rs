//! Common library for the point collector.
//!
//! This crate provides the shared pieces of the route planner: configuration
//! management, error handling, telemetry setup, and the geometry layer that
//! generates seeded positions and their pairwise distance matrix.

// Configuration management
pub mod config;
pub use config::Config;

// Error handling types
pub mod error;
pub use error::{CollectorError, Result};

// Telemetry and observability
pub mod telemetry;

// Seeded positions and distance matrix
pub mod geometry;
pub use geometry::{Geometry, PositionGenerator};

pub use telemetry::init_tracing;
