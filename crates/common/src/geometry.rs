//! Seeded position generation and the pairwise distance matrix.
//!
//! This module produces the immutable geometry a tour is built over: the
//! base at index 0 followed by uniformly drawn target points, plus the dense
//! symmetric Euclidean distance matrix between every pair of positions.

use glam::DVec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{CollectorError, Result};

/// Index of the base in every position set.
pub const BASE_INDEX: usize = 0;

/// Fixed location of the base, the center of the coordinate range.
pub const BASE_POSITION: DVec2 = DVec2::new(50.0, 50.0);

/// Upper (exclusive) bound of each coordinate axis. The lower bound is 0.
pub const COORDINATE_RANGE: f64 = 100.0;

/// Inclusive range reproducibility seeds are drawn from.
pub const SEED_RANGE: std::ops::RangeInclusive<u64> = 100_000..=999_999;

/// Dense, symmetric matrix of Euclidean distances between positions.
///
/// Stored flattened in row-major order. `distance(i, i)` is always zero and
/// `distance(i, j) == distance(j, i)` holds bit for bit, because each pair is
/// computed once and mirrored.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    size: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds the matrix for the given positions.
    pub fn from_positions(positions: &[DVec2]) -> Self {
        let size = positions.len();
        let mut data = vec![0.0; size * size];

        for i in 0..size {
            for j in (i + 1)..size {
                let d = positions[i].distance(positions[j]);
                data[i * size + j] = d;
                data[j * size + i] = d;
            }
        }

        Self { size, data }
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Distance between positions `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        self.row(i)[j]
    }

    /// All distances from position `i`, indexed by the other position.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.size..(i + 1) * self.size]
    }
}

/// Immutable positions plus their distance matrix, tagged with the seed they
/// were generated from.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    seed: u64,
    positions: Vec<DVec2>,
    distances: DistanceMatrix,
}

impl Geometry {
    /// Wraps caller-supplied positions. Index 0 is treated as the base.
    ///
    /// No count validation happens here, so a base-only set is accepted.
    pub fn from_positions(seed: u64, positions: Vec<DVec2>) -> Self {
        let distances = DistanceMatrix::from_positions(&positions);
        Self {
            seed,
            positions,
            distances,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn positions(&self) -> &[DVec2] {
        &self.positions
    }

    /// The base location, if the set is non-empty.
    pub fn base(&self) -> Option<DVec2> {
        self.positions.get(BASE_INDEX).copied()
    }

    /// Total number of positions, base included.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Number of positions excluding the base.
    pub fn target_count(&self) -> usize {
        self.positions.len().saturating_sub(1)
    }

    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    pub fn distance(&self, i: usize, j: usize) -> f64 {
        self.distances.distance(i, j)
    }

    pub fn row(&self, i: usize) -> &[f64] {
        self.distances.row(i)
    }
}

/// Produces reproducible geometry for a tour.
///
/// Picking a seed and generating from it are separate steps: [`pick_seed`]
/// touches the thread-local RNG, while [`generate`] is a pure function of
/// its inputs.
///
/// [`pick_seed`]: PositionGenerator::pick_seed
/// [`generate`]: PositionGenerator::generate
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionGenerator;

impl PositionGenerator {
    /// Draws a fresh reproducibility seed from [`SEED_RANGE`].
    pub fn pick_seed() -> u64 {
        rand::thread_rng().gen_range(SEED_RANGE)
    }

    /// Generates the base plus `count` uniformly drawn targets.
    ///
    /// Each target gets its x coordinate and then its y coordinate from a
    /// `StdRng` seeded with `seed`, both uniform in `[0, COORDINATE_RANGE)`.
    /// The base is prepended at [`BASE_INDEX`].
    ///
    /// # Errors
    ///
    /// Returns [`CollectorError::InvalidPointCount`] when `count` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use collector_common::PositionGenerator;
    ///
    /// let geometry = PositionGenerator::generate(42, 3).unwrap();
    /// assert_eq!(geometry.len(), 4);
    /// assert_eq!(geometry, PositionGenerator::generate(42, 3).unwrap());
    /// ```
    pub fn generate(seed: u64, count: usize) -> Result<Geometry> {
        if count == 0 {
            return Err(CollectorError::InvalidPointCount(0));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let mut positions = Vec::with_capacity(count + 1);
        positions.push(BASE_POSITION);

        for _ in 0..count {
            let x = rng.gen_range(0.0..COORDINATE_RANGE);
            let y = rng.gen_range(0.0..COORDINATE_RANGE);
            positions.push(DVec2::new(x, y));
        }

        tracing::info!(seed, count, "Generated {} positions", positions.len());
        Ok(Geometry::from_positions(seed, positions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_count_is_rejected() {
        let err = PositionGenerator::generate(42, 0).unwrap_err();
        assert!(matches!(err, CollectorError::InvalidPointCount(0)));
    }

    #[test]
    fn base_is_first_and_fixed() {
        let geometry = PositionGenerator::generate(42, 3).unwrap();
        assert_eq!(geometry.len(), 4);
        assert_eq!(geometry.target_count(), 3);
        assert_eq!(geometry.base(), Some(BASE_POSITION));
        assert_eq!(geometry.seed(), 42);
    }

    #[test]
    fn targets_stay_inside_the_coordinate_range() {
        let geometry = PositionGenerator::generate(7, 200).unwrap();
        for p in &geometry.positions()[1..] {
            assert!((0.0..COORDINATE_RANGE).contains(&p.x), "x out of range: {p}");
            assert!((0.0..COORDINATE_RANGE).contains(&p.y), "y out of range: {p}");
        }
    }

    #[test]
    fn different_seeds_give_different_points() {
        let a = PositionGenerator::generate(123_456, 10).unwrap();
        let b = PositionGenerator::generate(654_321, 10).unwrap();
        assert_ne!(a.positions(), b.positions());
    }

    #[test]
    fn picked_seed_is_in_range() {
        for _ in 0..100 {
            assert!(SEED_RANGE.contains(&PositionGenerator::pick_seed()));
        }
    }

    #[test]
    fn matrix_matches_known_geometry() {
        let geometry = Geometry::from_positions(
            0,
            vec![DVec2::new(0.0, 0.0), DVec2::new(3.0, 4.0), DVec2::new(3.0, 0.0)],
        );
        assert_eq!(geometry.distance(0, 1), 5.0);
        assert_eq!(geometry.distance(0, 2), 3.0);
        assert_eq!(geometry.distance(1, 2), 4.0);
        assert_eq!(geometry.row(1), &[5.0, 0.0, 4.0]);
        assert_eq!(geometry.distances().size(), 3);
    }

    #[test]
    fn base_only_geometry_has_a_single_zero_entry() {
        let geometry = Geometry::from_positions(0, vec![BASE_POSITION]);
        assert_eq!(geometry.target_count(), 0);
        assert_eq!(geometry.row(0), &[0.0]);
    }

    proptest! {
        #[test]
        fn prop_generation_is_deterministic(seed in 0u64..u64::MAX, count in 1usize..60) {
            let first = PositionGenerator::generate(seed, count).unwrap();
            let second = PositionGenerator::generate(seed, count).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_matrix_is_symmetric_with_zero_diagonal(seed in 0u64..u64::MAX, count in 1usize..40) {
            let geometry = PositionGenerator::generate(seed, count).unwrap();
            for i in 0..geometry.len() {
                prop_assert_eq!(geometry.distance(i, i), 0.0);
                for j in 0..geometry.len() {
                    prop_assert_eq!(geometry.distance(i, j), geometry.distance(j, i));
                }
            }
        }
    }
}
