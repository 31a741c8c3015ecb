//! Maze generation

use log::{debug, trace};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::connectivity::ConnectivityTracker;
use crate::grid::{Direction, Grid, Point};

/// Perfect maze generator
pub struct MazeGenerator {
    random: StdRng,
}

/// Counters from one [MazeGenerator::generate] run
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct GenerationStats {
    /// Loop iterations, one random cell pick each
    pub iterations: usize,
    /// Successful merges, equal to the number of walls removed
    pub merges: usize,
}

impl MazeGenerator {
    /// Create generator with a fixed seed, or from OS entropy
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }

    /// Turn `grid` into a perfect maze
    ///
    /// Pick a random cell that may still have a neighbour in another
    /// connectivity group, and try its directions in random order. The
    /// first neighbour that is in bounds, not linked yet and in another
    /// group gets the wall between them removed and the groups merged.
    /// If no direction qualifies, the cell is resolved and dropped from
    /// the candidates. Stop when a single group spans the grid.
    ///
    /// Passages already present in `grid` are kept, so running this on a
    /// finished maze changes nothing.
    pub fn generate(&mut self, grid: &mut Grid) -> GenerationStats {
        let mut tracker = ConnectivityTracker::new(grid);
        let mut stats = GenerationStats::default();

        while !tracker.is_connected() {
            let Some(&cell) = tracker.remaining().choose(&mut self.random) else {
                break;
            };
            stats.iterations += 1;

            if let Some(neighbour) = self.mergeable_neighbour(grid, &tracker, cell) {
                trace!("Removing wall between {cell:?} and {neighbour:?}");
                grid.remove_wall(cell, neighbour);
                tracker.merge(grid, cell, neighbour);
                stats.merges += 1;
            } else {
                tracker.remove_if_resolved(grid, cell);
            }
        }

        debug!(
            "Generated {}x{} maze in {} iterations, {} walls removed",
            grid.height(),
            grid.width(),
            stats.iterations,
            stats.merges
        );
        stats
    }

    /// Random neighbour of `cell` that is not connected to it yet
    fn mergeable_neighbour(
        &mut self,
        grid: &Grid,
        tracker: &ConnectivityTracker,
        cell: Point,
    ) -> Option<Point> {
        let mut directions = Direction::ALL;
        directions.shuffle(&mut self.random);

        let group = tracker.group_of(grid, cell);
        directions.into_iter().find_map(|direction| {
            if grid.has_passage(cell, direction) {
                return None;
            }
            grid.neighbour(cell, direction)
                .filter(|&n| tracker.group_of(grid, n) != group)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::connectivity::ConnectivityTracker;
    use crate::grid::{Grid, Point};
    use crate::maze_generator::MazeGenerator;
    use crate::DIMENSION_MAX;

    fn generated(height: i32, width: i32, seed: u64) -> Grid {
        let mut grid = Grid::new(height, width).unwrap();
        MazeGenerator::new(Some(seed)).generate(&mut grid);
        grid
    }

    #[test]
    fn single_cell_needs_no_work() {
        let mut grid = Grid::square(1).unwrap();
        let stats = MazeGenerator::new(Some(0)).generate(&mut grid);

        assert_eq!(stats.iterations, 0);
        assert_eq!(stats.merges, 0);
        assert_eq!(grid.passage_count(), 0);
    }

    #[test]
    fn seeded_three_by_three() {
        let grid = generated(3, 3, 42);

        assert_eq!(grid.passage_count(), 8);
        for cell in grid.cells() {
            assert_eq!(grid.reachable_from(cell.point()), 9);
        }
    }

    #[test]
    fn default_size_terminates_as_single_component() {
        let mut grid = Grid::square(20).unwrap();
        let stats = MazeGenerator::new(Some(1)).generate(&mut grid);

        assert!(stats.iterations < 20 * 20 * 20);
        assert!(stats.iterations < 2 * 400);
        assert_eq!(stats.merges, 399);
        assert_eq!(grid.reachable_from(Point::new(0, 0)), 400);
        assert!(ConnectivityTracker::new(&grid).is_connected());
    }

    #[test]
    fn every_size_is_a_spanning_tree() {
        for (seed, d) in [1, 2, 3, 5, 8, 13, 21, 34, DIMENSION_MAX as i32]
            .into_iter()
            .enumerate()
        {
            let grid = generated(d, d, seed as u64);
            let cells = grid.len();

            assert_eq!(grid.passage_count(), cells - 1, "dimension {d}");
            assert_eq!(grid.reachable_from(Point::new(0, 0)), cells, "dimension {d}");
        }
    }

    #[test]
    fn rectangular_and_linear_grids() {
        for (height, width) in [(1, 12), (12, 1), (9, 50), (2, 7)] {
            let grid = generated(height, width, 3);
            let cells = grid.len();

            assert_eq!(grid.passage_count(), cells - 1);
            assert_eq!(grid.components().iter().collect::<HashSet<_>>().len(), 1);
        }
    }

    #[test]
    fn regenerating_finished_maze_is_noop() {
        let mut grid = generated(8, 8, 5);
        let before = grid.clone();

        let stats = MazeGenerator::new(Some(6)).generate(&mut grid);

        assert_eq!(stats.iterations, 0);
        assert_eq!(grid, before);
    }

    #[test]
    fn same_seed_same_maze() {
        assert_eq!(generated(10, 15, 99), generated(10, 15, 99));
    }

    #[test]
    fn unseeded_generator_builds_valid_maze() {
        let mut grid = Grid::square(6).unwrap();
        MazeGenerator::new(None).generate(&mut grid);
        assert_eq!(grid.passage_count(), 35);
    }
}
