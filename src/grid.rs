//! Rectangular cell grid and its passages

use std::collections::VecDeque;

use crate::{MazeError, DIMENSION_MAX};

/// Location in the grid
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct Point {
    /// Row, increases downwards
    pub row: usize,
    /// Column, increases to the right
    pub col: usize,
}

impl Point {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Cardinal direction from one cell to its neighbour
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum Direction {
    /// Towards row - 1
    Up,
    /// Towards row + 1
    Down,
    /// Towards col - 1
    Left,
    /// Towards col + 1
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Direction pointing back
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// (delta row, delta column)
    fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// Single maze cell
///
/// A cell does not point to its neighbours. Instead, it records for each
/// direction whether the wall on that side has been removed.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Cell {
    point: Point,
    passages: [bool; 4],
}

impl Cell {
    /// Coordinates of the cell, fixed at grid construction
    pub fn point(&self) -> Point {
        self.point
    }

    /// Is there a passage (no wall) towards `direction`
    pub fn is_open(&self, direction: Direction) -> bool {
        self.passages[direction.slot()]
    }
}

/// Fixed-size rectangular grid of cells
///
/// Cells are stored row-major in a flat vector, index `row * width + col`.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a fully walled grid
    ///
    /// Returns [MazeError::InvalidDimension], if either side is not in
    /// `1..=DIMENSION_MAX`.
    ///
    /// # Examples
    /// ```
    /// use amazing_maze::Grid;
    ///
    /// let grid = Grid::new(9, 50).unwrap();
    /// assert_eq!(grid.passage_count(), 0);
    /// assert!(Grid::new(0, 5).is_err());
    /// ```
    pub fn new(height: i32, width: i32) -> Result<Self, MazeError> {
        let invalid = || MazeError::InvalidDimension { height, width };
        let h = Self::checked_dimension(height).ok_or_else(invalid)?;
        let w = Self::checked_dimension(width).ok_or_else(invalid)?;

        let cells = (0..h)
            .flat_map(|row| (0..w).map(move |col| Point::new(row, col)))
            .map(|point| Cell {
                point,
                passages: [false; 4],
            })
            .collect();

        Ok(Self {
            height: h,
            width: w,
            cells,
        })
    }

    /// Create a fully walled `n` by `n` grid
    pub fn square(n: i32) -> Result<Self, MazeError> {
        Self::new(n, n)
    }

    fn checked_dimension(value: i32) -> Option<usize> {
        usize::try_from(value)
            .ok()
            .filter(|d| (1..=DIMENSION_MAX).contains(d))
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false, a valid grid has at least one cell
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Row-major index of `point`
    pub fn index(&self, point: Point) -> usize {
        debug_assert!(self.contains(point), "{point:?} is outside the grid");
        point.row * self.width + point.col
    }

    /// Inverse of [Self::index]
    pub fn point(&self, index: usize) -> Point {
        Point::new(index / self.width, index % self.width)
    }

    pub fn contains(&self, point: Point) -> bool {
        point.row < self.height && point.col < self.width
    }

    pub fn cell(&self, point: Point) -> &Cell {
        &self.cells[self.index(point)]
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Neighbouring location towards `direction`, if it is inside the grid
    pub fn neighbour(&self, point: Point, direction: Direction) -> Option<Point> {
        let (dr, dc) = direction.offset();
        let row = point.row.checked_add_signed(dr)?;
        let col = point.col.checked_add_signed(dc)?;
        let candidate = Point::new(row, col);
        self.contains(candidate).then_some(candidate)
    }

    /// In-bounds neighbours of `point` with their directions
    pub fn neighbours(&self, point: Point) -> impl Iterator<Item = (Direction, Point)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |d| self.neighbour(point, d).map(|n| (d, n)))
    }

    pub fn has_passage(&self, point: Point, direction: Direction) -> bool {
        self.cell(point).is_open(direction)
    }

    /// Remove the wall between two adjacent cells
    ///
    /// The passage is recorded on both sides.
    ///
    /// # Panics
    /// If `a` and `b` are not exactly one step apart.
    pub fn remove_wall(&mut self, a: Point, b: Point) {
        let direction = Direction::ALL
            .into_iter()
            .find(|&d| self.neighbour(a, d) == Some(b));
        let Some(direction) = direction else {
            panic!("Cannot remove wall between non-adjacent cells {a:?} and {b:?}");
        };

        let (ia, ib) = (self.index(a), self.index(b));
        self.cells[ia].passages[direction.slot()] = true;
        self.cells[ib].passages[direction.opposite().slot()] = true;
    }

    /// Number of removed walls
    pub fn passage_count(&self) -> usize {
        self.cells
            .iter()
            .map(|c| {
                // Count each passage once, from its upper or left end
                usize::from(c.is_open(Direction::Down)) + usize::from(c.is_open(Direction::Right))
            })
            .sum()
    }

    /// Connected components over existing passages
    ///
    /// Each cell gets the smallest row-major index of its component.
    pub fn components(&self) -> Vec<usize> {
        let mut labels: Vec<Option<usize>> = vec![None; self.len()];
        for start in 0..self.len() {
            if labels[start].is_none() {
                for index in self.flood_fill(self.point(start)) {
                    labels[index] = Some(start);
                }
            }
        }
        labels.into_iter().flatten().collect()
    }

    /// Number of cells reachable from `start` through passages,
    /// `start` included
    pub fn reachable_from(&self, start: Point) -> usize {
        self.flood_fill(start).len()
    }

    /// Indices of cells reachable from `start`
    fn flood_fill(&self, start: Point) -> Vec<usize> {
        let mut seen = vec![false; self.len()];
        let mut found = Vec::new();
        let mut queue = VecDeque::from([start]);
        seen[self.index(start)] = true;

        while let Some(point) = queue.pop_front() {
            found.push(self.index(point));
            for (direction, next) in self.neighbours(point) {
                let next_index = self.index(next);
                if self.has_passage(point, direction) && !seen[next_index] {
                    seen[next_index] = true;
                    queue.push_back(next);
                }
            }
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::{Direction, Grid, Point};
    use crate::{MazeError, DIMENSION_MAX};

    const INVALID_DIMENSIONS: [i32; 4] = [DIMENSION_MAX as i32 + 1, 0, -1, -1337];

    #[test]
    fn reject_invalid_dimensions() {
        for d in INVALID_DIMENSIONS {
            assert_eq!(
                Grid::new(d, d),
                Err(MazeError::InvalidDimension {
                    height: d,
                    width: d
                })
            );
            assert!(Grid::new(d, 5).is_err(), "height {d} accepted");
            assert!(Grid::new(5, d).is_err(), "width {d} accepted");
        }
    }

    #[test]
    fn reject_invalid_square_dimensions() {
        for d in INVALID_DIMENSIONS {
            assert!(Grid::square(d).is_err(), "dimension {d} accepted");
        }
    }

    #[test]
    fn accept_boundary_dimensions() {
        let max = DIMENSION_MAX as i32;
        assert!(Grid::square(1).is_ok());
        assert!(Grid::square(max).is_ok());
        assert!(Grid::new(1, max).is_ok());
    }

    #[test]
    fn new_grid_is_fully_walled() {
        let grid = Grid::new(3, 4).unwrap();

        assert_eq!(grid.height(), 3);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.len(), 12);
        assert_eq!(grid.passage_count(), 0);
        for (i, cell) in grid.cells().iter().enumerate() {
            assert_eq!(cell.point(), grid.point(i));
            assert_eq!(grid.index(cell.point()), i);
            assert!(Direction::ALL.iter().all(|&d| !cell.is_open(d)));
        }
    }

    #[test]
    fn neighbours_stay_in_bounds() {
        let grid = Grid::new(2, 3).unwrap();
        let corner = Point::new(0, 0);

        assert_eq!(grid.neighbour(corner, Direction::Up), None);
        assert_eq!(grid.neighbour(corner, Direction::Left), None);
        assert_eq!(grid.neighbour(corner, Direction::Down), Some(Point::new(1, 0)));
        assert_eq!(grid.neighbour(corner, Direction::Right), Some(Point::new(0, 1)));

        let far = Point::new(1, 2);
        assert_eq!(grid.neighbour(far, Direction::Down), None);
        assert_eq!(grid.neighbour(far, Direction::Right), None);
        assert_eq!(grid.neighbours(far).count(), 2);
        assert_eq!(grid.neighbours(Point::new(0, 1)).count(), 3);
    }

    #[test]
    fn remove_wall_links_both_cells() {
        let centre = Point::new(1, 1);
        for direction in Direction::ALL {
            let mut grid = Grid::square(3).unwrap();
            let other = grid.neighbour(centre, direction).unwrap();

            grid.remove_wall(centre, other);

            assert!(grid.has_passage(centre, direction));
            assert!(grid.has_passage(other, direction.opposite()));
            assert_eq!(grid.passage_count(), 1);
        }
    }

    #[test]
    #[should_panic(expected = "non-adjacent")]
    fn remove_wall_rejects_distant_cells() {
        let mut grid = Grid::square(3).unwrap();
        grid.remove_wall(Point::new(0, 0), Point::new(1, 1));
    }

    #[test]
    fn flood_fill_follows_passages() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.remove_wall(Point::new(0, 0), Point::new(0, 1));
        grid.remove_wall(Point::new(0, 1), Point::new(1, 1));

        assert_eq!(grid.reachable_from(Point::new(0, 0)), 3);
        assert_eq!(grid.reachable_from(Point::new(1, 0)), 1);
        assert_eq!(grid.components(), vec![0, 0, 2, 0]);
    }
}
