//! Generate perfect mazes and print them as text
//!
//! A perfect maze is a grid whose passages form a spanning tree: there is
//! exactly one path between any two cells. Generation starts from a fully
//! walled [Grid] and knocks down walls between randomly chosen cells of
//! different connectivity groups until a single group spans the grid.
//!
//! # Examples
//! ## Square maze
//! ```
//! use amazing_maze::{Grid, MazeGenerator};
//!
//! let mut grid = Grid::square(4).unwrap();
//! let mut gen = MazeGenerator::new(Some(7));
//! gen.generate(&mut grid);
//!
//! assert_eq!(grid.passage_count(), 4 * 4 - 1);
//! println!("{grid}");
//! ```
//!
//! ## Single cell
//! ```
//! use amazing_maze::{Grid, MazeGenerator};
//!
//! let mut grid = Grid::square(1).unwrap();
//! MazeGenerator::new(None).generate(&mut grid);
//! assert_eq!(
//!     grid.render(),
//!     "Printing a Maze of 1x1 cells.\n _\n| |\n ‾"
//! );
//! ```

use thiserror::Error;

pub mod connectivity;
pub mod grid;
pub mod maze_generator;
pub mod render;

pub use connectivity::ConnectivityTracker;
pub use grid::{Cell, Direction, Grid, Point};
pub use maze_generator::{GenerationStats, MazeGenerator};

/// Largest accepted grid height or width
pub const DIMENSION_MAX: usize = 50;

/// Errors from maze construction
#[derive(Error, PartialEq, Eq, Clone, Debug)]
pub enum MazeError {
    /// Requested height or width is outside `1..=DIMENSION_MAX`
    #[error("invalid maze dimensions {height}x{width}, both must be in 1..={max}", max = DIMENSION_MAX)]
    InvalidDimension { height: i32, width: i32 },
}
