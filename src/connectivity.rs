//! Connectivity groups of maze cells
//!
//! Disjoint-set bookkeeping over the cells of a [Grid]. Every cell carries
//! the id of the group it belongs to; two cells are joined by passages if
//! and only if they share an id. Merging rewrites the higher id to the
//! lower one, so the representative of a group is the smallest id ever
//! assigned to it.

use log::trace;

use crate::grid::{Grid, Point};

/// Group membership and the cells still worth visiting
pub struct ConnectivityTracker {
    /// Group id for each cell, row-major
    groups: Vec<usize>,
    /// Cells that may still have a neighbour in another group
    remaining: Vec<Point>,
    /// Position of each cell in `remaining`, row-major
    slots: Vec<Option<usize>>,
    /// Number of distinct group ids
    group_count: usize,
}

impl ConnectivityTracker {
    /// Build tracker for the current passages of `grid`
    ///
    /// On a fully walled grid every cell is its own group, with id equal
    /// to its row-major index. Cells already joined by passages share the
    /// smallest index of their component.
    pub fn new(grid: &Grid) -> Self {
        let groups = grid.components();
        let group_count = groups.iter().enumerate().filter(|(i, g)| i == *g).count();

        let mut tracker = Self {
            groups,
            remaining: Vec::with_capacity(grid.len()),
            slots: vec![None; grid.len()],
            group_count,
        };
        for cell in grid.cells() {
            let point = cell.point();
            if !tracker.is_resolved(grid, point) {
                tracker.slots[grid.index(point)] = Some(tracker.remaining.len());
                tracker.remaining.push(point);
            }
        }
        tracker
    }

    /// Group id of the cell at `point`
    pub fn group_of(&self, grid: &Grid, point: Point) -> usize {
        self.groups[grid.index(point)]
    }

    /// Cells not yet known to be resolved, in no particular order
    pub fn remaining(&self) -> &[Point] {
        &self.remaining
    }

    pub fn group_count(&self) -> usize {
        self.group_count
    }

    /// Whole grid is a single group
    pub fn is_connected(&self) -> bool {
        self.group_count <= 1
    }

    /// Can no neighbour of `point` be merged with it anymore
    ///
    /// True when every in-bounds neighbour is already in the same group.
    pub fn is_resolved(&self, grid: &Grid, point: Point) -> bool {
        let group = self.group_of(grid, point);
        grid.neighbours(point)
            .all(|(_, n)| self.group_of(grid, n) == group)
    }

    /// Drop `point` from the remaining cells, if it is resolved
    pub fn remove_if_resolved(&mut self, grid: &Grid, point: Point) {
        if !self.is_resolved(grid, point) {
            return;
        }
        let index = grid.index(point);
        if let Some(slot) = self.slots[index].take() {
            self.remaining.swap_remove(slot);
            if let Some(moved) = self.remaining.get(slot) {
                self.slots[grid.index(*moved)] = Some(slot);
            }
            trace!("Cell {point:?} resolved, {} remaining", self.remaining.len());
        }
    }

    /// Join the groups of `a` and `b`, the lower id survives
    ///
    /// Every cell of the higher group is rewritten. Afterwards, rewritten
    /// cells and the neighbourhoods of `a` and `b` are removed from the
    /// remaining cells if they became resolved. Merging two cells of
    /// the same group does nothing.
    pub fn merge(&mut self, grid: &Grid, a: Point, b: Point) {
        let (ga, gb) = (self.group_of(grid, a), self.group_of(grid, b));
        if ga == gb {
            return;
        }
        let (survivor, absorbed) = if ga < gb { (ga, gb) } else { (gb, ga) };

        let mut changed = Vec::new();
        for (index, group) in self.groups.iter_mut().enumerate() {
            if *group == absorbed {
                *group = survivor;
                changed.push(grid.point(index));
            }
        }
        self.group_count -= 1;
        trace!(
            "Merged group {absorbed} into {survivor} ({} cells), {} groups left",
            changed.len(),
            self.group_count
        );

        for point in [a, b] {
            changed.push(point);
            changed.extend(grid.neighbours(point).map(|(_, n)| n));
        }
        for point in changed {
            self.remove_if_resolved(grid, point);
        }
    }
}
