//! Spatial hashing for proximity queries.
//!
//! The plane is partitioned into square cells keyed by
//! `(floor(x / cell_size), floor(y / cell_size))`. The grid is rebuilt from
//! scratch every tick in O(n) over the active particles, and proximity
//! tests then run over same-cell pairs only. With the cell size matched to
//! the link distance this reduces the worst-case pairwise cost from O(n²)
//! to near-linear for spatially sparse sets.
//!
//! Pairs that straddle a cell boundary within the link distance are missed.
//! That is an accepted trade-off of the scheme, not a bug; links are a
//! visual garnish and the miss is invisible in practice.

use glam::Vec2;
use std::collections::HashMap;

/// Default cell size, matched to the default link distance.
pub const DEFAULT_CELL_SIZE: f32 = 100.0;

/// Per-tick mapping from grid cell to the particle slots inside it.
#[derive(Debug)]
pub struct SpatialGrid {
    cell_size: f32,
    cells: HashMap<(i32, i32), Vec<usize>>,
}

impl SpatialGrid {
    /// Create a grid with the given cell size.
    ///
    /// `cell_size` should be at least the query radius and must be
    /// positive; [`crate::SimulationConfig`] validates it up front.
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size,
            cells: HashMap::new(),
        }
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Cell coordinate containing `pos`.
    #[inline]
    pub fn cell_of(&self, pos: Vec2) -> (i32, i32) {
        (
            (pos.x / self.cell_size).floor() as i32,
            (pos.y / self.cell_size).floor() as i32,
        )
    }

    /// Rebuild the grid from the given `(slot, position)` pairs.
    ///
    /// Buckets are cleared and refilled rather than dropped, so a
    /// steady-state rebuild does not allocate.
    pub fn rebuild(&mut self, occupants: impl Iterator<Item = (usize, Vec2)>) {
        for bucket in self.cells.values_mut() {
            bucket.clear();
        }
        for (slot, pos) in occupants {
            let cell = self.cell_of(pos);
            self.cells.entry(cell).or_default().push(slot);
        }
    }

    /// Iterate over non-empty cell buckets.
    pub fn buckets(&self) -> impl Iterator<Item = &[usize]> {
        self.cells
            .values()
            .map(|bucket| bucket.as_slice())
            .filter(|bucket| !bucket.is_empty())
    }

    /// Slots currently bucketed in the cell containing `pos`.
    pub fn bucket_at(&self, pos: Vec2) -> &[usize] {
        self.cells
            .get(&self.cell_of(pos))
            .map(|bucket| bucket.as_slice())
            .unwrap_or(&[])
    }

    /// Total bucketed occupants across all cells.
    pub fn len(&self) -> usize {
        self.cells.values().map(|bucket| bucket.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_keying_floors_toward_negative() {
        let grid = SpatialGrid::new(100.0);
        assert_eq!(grid.cell_of(Vec2::new(0.0, 0.0)), (0, 0));
        assert_eq!(grid.cell_of(Vec2::new(99.9, 99.9)), (0, 0));
        assert_eq!(grid.cell_of(Vec2::new(100.0, 250.0)), (1, 2));
        assert_eq!(grid.cell_of(Vec2::new(-0.1, -150.0)), (-1, -2));
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let occupants = vec![
            (0, Vec2::new(10.0, 10.0)),
            (1, Vec2::new(20.0, 30.0)),
            (2, Vec2::new(150.0, 10.0)),
            (3, Vec2::new(150.0, 10.0)),
        ];

        let mut grid = SpatialGrid::new(100.0);
        grid.rebuild(occupants.iter().copied());
        let first: Vec<Vec<usize>> = occupants
            .iter()
            .map(|&(_, pos)| grid.bucket_at(pos).to_vec())
            .collect();

        grid.rebuild(occupants.iter().copied());
        let second: Vec<Vec<usize>> = occupants
            .iter()
            .map(|&(_, pos)| grid.bucket_at(pos).to_vec())
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_rebuild_drops_stale_occupants() {
        let mut grid = SpatialGrid::new(100.0);
        grid.rebuild([(0, Vec2::new(10.0, 10.0))].into_iter());
        assert_eq!(grid.len(), 1);

        grid.rebuild([(1, Vec2::new(500.0, 500.0))].into_iter());
        assert_eq!(grid.len(), 1);
        assert!(grid.bucket_at(Vec2::new(10.0, 10.0)).is_empty());
        assert_eq!(grid.bucket_at(Vec2::new(500.0, 500.0)), &[1]);
    }

    #[test]
    fn test_same_cell_particles_share_a_bucket() {
        let mut grid = SpatialGrid::new(100.0);
        grid.rebuild(
            [
                (7, Vec2::new(110.0, 10.0)),
                (9, Vec2::new(190.0, 90.0)),
                (4, Vec2::new(210.0, 10.0)),
            ]
            .into_iter(),
        );

        assert_eq!(grid.bucket_at(Vec2::new(150.0, 50.0)), &[7, 9]);
        assert_eq!(grid.bucket_at(Vec2::new(250.0, 50.0)), &[4]);
    }
}
