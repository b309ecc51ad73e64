//! Lifecycle of a single collection run.
//!
//! [`PointCollector`] owns one seed, the geometry generated from it, and the
//! tour built over that geometry. Generation and collection are separate
//! calls so callers can inspect the positions before a tour exists.

use collector_common::{CollectorError, Geometry, PositionGenerator, Result};
use glam::DVec2;

use crate::tour::{Connection, TourBuilder};

#[derive(Debug)]
pub struct PointCollector {
    point_count: usize,
    random_seed: u64,
    geometry: Option<Geometry>,
    connections: Vec<Connection>,
    operation_count: u64,
    total_distance: f64,
}

impl PointCollector {
    /// Creates a collector with a freshly picked seed.
    pub fn new(point_count: usize) -> Self {
        Self::with_seed(point_count, PositionGenerator::pick_seed())
    }

    /// Creates a collector that will generate from `seed`.
    pub fn with_seed(point_count: usize, random_seed: u64) -> Self {
        Self {
            point_count,
            random_seed,
            geometry: None,
            connections: Vec::new(),
            operation_count: 0,
            total_distance: 0.0,
        }
    }

    /// Generates the base and target positions plus the distance matrix.
    pub fn generate_positions(&mut self) -> Result<()> {
        self.geometry = Some(PositionGenerator::generate(
            self.random_seed,
            self.point_count,
        )?);
        Ok(())
    }

    /// Builds the greedy tour over the generated positions.
    ///
    /// Fails with [`CollectorError::NotInitialized`] when
    /// [`generate_positions`](Self::generate_positions) has not run, and with
    /// [`CollectorError::AlreadyBuilt`] when a tour already exists.
    pub fn collect_points(&mut self) -> Result<()> {
        let geometry = self.geometry.as_ref().ok_or(CollectorError::NotInitialized)?;
        if !self.connections.is_empty() {
            return Err(CollectorError::AlreadyBuilt);
        }

        let mut builder = TourBuilder::new(geometry);
        builder.build()?;

        self.connections = builder.connections().to_vec();
        self.operation_count = builder.operation_count();
        self.total_distance = builder.total_distance();
        Ok(())
    }

    pub fn point_count(&self) -> usize {
        self.point_count
    }

    pub fn random_seed(&self) -> u64 {
        self.random_seed
    }

    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    /// Generated positions, or an empty slice before generation.
    pub fn positions(&self) -> &[DVec2] {
        self.geometry
            .as_ref()
            .map(Geometry::positions)
            .unwrap_or_default()
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn operation_count(&self) -> u64 {
        self.operation_count
    }

    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collecting_before_generating_fails_fast() {
        let mut collector = PointCollector::with_seed(5, 42);
        assert!(matches!(
            collector.collect_points(),
            Err(CollectorError::NotInitialized)
        ));
        assert!(collector.connections().is_empty());
        assert!(collector.positions().is_empty());
    }

    #[test]
    fn zero_points_are_rejected_at_generation() {
        let mut collector = PointCollector::with_seed(0, 42);
        assert!(matches!(
            collector.generate_positions(),
            Err(CollectorError::InvalidPointCount(0))
        ));
        assert!(collector.geometry().is_none());
    }

    #[test]
    fn full_run_exposes_tour_and_counters() {
        let mut collector = PointCollector::with_seed(30, 123_456);
        collector.generate_positions().unwrap();
        collector.collect_points().unwrap();

        assert_eq!(collector.random_seed(), 123_456);
        assert_eq!(collector.positions().len(), 31);
        assert_eq!(collector.connections().len(), 31);
        assert_eq!(collector.operation_count(), 31 * 30);
        assert!(collector.total_distance() > 0.0);
    }

    #[test]
    fn collecting_twice_is_rejected() {
        let mut collector = PointCollector::with_seed(3, 42);
        collector.generate_positions().unwrap();
        collector.collect_points().unwrap();
        assert!(matches!(
            collector.collect_points(),
            Err(CollectorError::AlreadyBuilt)
        ));
        assert_eq!(collector.operation_count(), 12);
    }

    #[test]
    fn same_seed_reproduces_the_same_tour() {
        let run = || {
            let mut collector = PointCollector::with_seed(25, 777_777);
            collector.generate_positions().unwrap();
            collector.collect_points().unwrap();
            collector.connections().to_vec()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn random_seed_is_picked_from_the_seed_range() {
        let collector = PointCollector::new(10);
        assert!(collector_common::geometry::SEED_RANGE.contains(&collector.random_seed()));
    }
}
