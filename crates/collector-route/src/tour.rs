//! Greedy nearest-neighbor tour construction.
//!
//! Starting from the base, the builder repeatedly moves to the closest point
//! that has not been visited yet, then closes the loop back to the base. The
//! scan is a plain left-to-right pass over the distance row, so on exactly
//! equal distances the lowest index wins.

use collector_common::geometry::BASE_INDEX;
use collector_common::{CollectorError, Geometry, Result};

/// A directed tour edge `(from, to)` between position indices.
pub type Connection = (usize, usize);

/// Single-pass tour builder over a borrowed [`Geometry`].
#[derive(Debug)]
pub struct TourBuilder<'a> {
    geometry: &'a Geometry,
    current: usize,
    visited: Vec<bool>,
    visited_count: usize,
    connections: Vec<Connection>,
    operation_count: u64,
    built: bool,
}

impl<'a> TourBuilder<'a> {
    pub fn new(geometry: &'a Geometry) -> Self {
        let mut visited = vec![false; geometry.len()];
        let mut visited_count = 0;
        if let Some(base) = visited.get_mut(BASE_INDEX) {
            *base = true;
            visited_count = 1;
        }

        Self {
            geometry,
            current: BASE_INDEX,
            visited,
            visited_count,
            connections: Vec::with_capacity(geometry.len()),
            operation_count: 0,
            built: false,
        }
    }

    /// Runs the greedy traversal and closes the tour back to the base.
    ///
    /// Every selection step adds the full row width (the total position
    /// count, visited points included) to the operation counter. The closing
    /// edge is free.
    ///
    /// # Errors
    ///
    /// - [`CollectorError::NotInitialized`] if the geometry has no positions.
    /// - [`CollectorError::AlreadyBuilt`] on a second call.
    /// - [`CollectorError::NoCandidate`] if the scan comes up empty while
    ///   points remain unvisited. A dense matrix makes this unreachable, so
    ///   it signals corrupted state rather than a normal outcome.
    pub fn build(&mut self) -> Result<()> {
        if self.geometry.is_empty() {
            return Err(CollectorError::NotInitialized);
        }
        if self.built {
            return Err(CollectorError::AlreadyBuilt);
        }

        let total = self.geometry.len();
        while self.visited_count < total {
            let next = self
                .nearest_unvisited(self.current)
                .ok_or(CollectorError::NoCandidate {
                    current: self.current,
                })?;
            self.operation_count += total as u64;

            tracing::trace!(from = self.current, to = next, "Selected nearest point");
            self.connections.push((self.current, next));
            self.visited[next] = true;
            self.visited_count += 1;
            self.current = next;
        }

        // Connect the last point back to the base
        self.connections.push((self.current, BASE_INDEX));
        self.built = true;

        tracing::info!(
            connections = self.connections.len(),
            operations = self.operation_count,
            "Tour built, length {:.3}",
            self.total_distance()
        );
        Ok(())
    }

    /// Index of the closest unvisited position to `current`.
    ///
    /// Strict `<` keeps the first minimum met in scan order.
    fn nearest_unvisited(&self, current: usize) -> Option<usize> {
        let mut nearest = None;
        let mut min_distance = f64::INFINITY;

        for (i, &d) in self.geometry.row(current).iter().enumerate() {
            if !self.visited[i] && d < min_distance {
                nearest = Some(i);
                min_distance = d;
            }
        }

        nearest
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn operation_count(&self) -> u64 {
        self.operation_count
    }

    pub fn is_visited(&self, index: usize) -> bool {
        self.visited.get(index).copied().unwrap_or(false)
    }

    pub fn visited_count(&self) -> usize {
        self.visited_count
    }

    pub fn is_built(&self) -> bool {
        self.built
    }

    /// Sum of edge lengths over the connection list.
    pub fn total_distance(&self) -> f64 {
        self.connections
            .iter()
            .map(|&(from, to)| self.geometry.distance(from, to))
            .sum()
    }
}
