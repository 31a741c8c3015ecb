//! Text diagram of the maze walls

use std::fmt;

use itertools::Itertools;

use crate::grid::{Direction, Grid};

impl Grid {
    const S_FLOOR: char = '_';
    const S_CEILING: char = '‾';
    const S_SIDE: char = '|';
    const S_OPEN: char = ' ';

    /// Text diagram of the current walls
    ///
    /// The header line is followed by a top border, one line per row and
    /// a bottom border. Inside a row, each cell is drawn as its bottom
    /// wall (`_` or space) and its right wall (`|` or space). The outer
    /// boundary is always drawn as closed.
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn render_row(&self, row: usize) -> String {
        let mut line = String::with_capacity(self.width() * 2 + 1);
        line.push(Self::S_SIDE);
        for cell in &self.cells()[row * self.width()..(row + 1) * self.width()] {
            let point = cell.point();
            // Last row sits on the bottom border line
            line.push(if cell.is_open(Direction::Down) || point.row == self.height() - 1 {
                Self::S_OPEN
            } else {
                Self::S_FLOOR
            });
            line.push(if !cell.is_open(Direction::Right) || point.col == self.width() - 1 {
                Self::S_SIDE
            } else {
                Self::S_OPEN
            });
        }
        line
    }

    fn border(&self, symbol: char) -> String {
        let span = self.width() * 2 - 1;
        std::iter::once(Self::S_OPEN)
            .chain(std::iter::repeat(symbol).take(span))
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Printing a Maze of {}x{} cells.",
            self.height(),
            self.width()
        )?;
        let lines = std::iter::once(self.border(Self::S_FLOOR))
            .chain((0..self.height()).map(|row| self.render_row(row)))
            .chain(std::iter::once(self.border(Self::S_CEILING)));
        write!(f, "{}", lines.format("\n"))
    }
}
