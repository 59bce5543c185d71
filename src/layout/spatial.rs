//! SpatialIndex — grid-bucketed occupancy map for overlap checks.
//!
//! Points are bucketed by `(floor(x / spacing), floor(y / spacing))`. A bucket
//! may hold several distinct points, so exact-point queries scan the bucket.
//!
//! The layout only needs exact-point lookups (`at`, `is_occupied`). The cell
//! queries `in_cell` and `nearby` are for callers inspecting a finished index,
//! e.g. to find every node within a few cells of a point.

use std::collections::HashMap;

use super::types::Point;

/// Integer grid key of a bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub col: i64,
    pub row: i64,
}

#[derive(Debug, Clone)]
pub struct SpatialIndex<T> {
    cells: HashMap<Cell, Vec<(Point, T)>>,
    spacing: f64,
    len: usize,
}

impl<T> SpatialIndex<T> {
    /// Panics unless `spacing` is finite and positive.
    pub fn new(spacing: f64) -> Self {
        assert!(
            spacing.is_finite() && spacing > 0.0,
            "spatial index spacing must be positive, got {spacing}"
        );
        Self {
            cells: HashMap::new(),
            spacing,
            len: 0,
        }
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn cell_of(&self, p: Point) -> Cell {
        Cell {
            col: (p.x / self.spacing).floor() as i64,
            row: (p.y / self.spacing).floor() as i64,
        }
    }

    pub fn insert(&mut self, p: Point, data: T) {
        let cell = self.cell_of(p);
        self.cells.entry(cell).or_default().push((p, data));
        self.len += 1;
    }

    /// Drop the entry for `data` at exactly `p`. Returns whether one was found.
    pub fn remove(&mut self, p: Point, data: &T) -> bool
    where
        T: PartialEq,
    {
        let cell = self.cell_of(p);
        let Some(entries) = self.cells.get_mut(&cell) else {
            return false;
        };
        let Some(pos) = entries.iter().position(|(q, d)| *q == p && d == data) else {
            return false;
        };
        entries.swap_remove(pos);
        if entries.is_empty() {
            self.cells.remove(&cell);
        }
        self.len -= 1;
        true
    }

    /// Occupants sitting exactly on `p`.
    pub fn at(&self, p: Point) -> impl Iterator<Item = &T> {
        self.cells
            .get(&self.cell_of(p))
            .into_iter()
            .flatten()
            .filter(move |(q, _)| *q == p)
            .map(|(_, data)| data)
    }

    pub fn is_occupied(&self, p: Point) -> bool {
        self.at(p).next().is_some()
    }

    /// Everything bucketed into `cell`, whatever its exact point.
    pub fn in_cell(&self, cell: Cell) -> &[(Point, T)] {
        self.cells.get(&cell).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Occupants of all cells within `radius` cells of the cell holding `p`:
    /// a `(2 * radius + 1)` square of cells, scanned column by column.
    /// A negative radius finds nothing.
    pub fn nearby(&self, p: Point, radius: i64) -> Vec<&T> {
        let center = self.cell_of(p);
        let mut found = Vec::new();
        for col in center.col - radius..=center.col + radius {
            for row in center.row - radius..=center.row + radius {
                found.extend(self.in_cell(Cell { col, row }).iter().map(|(_, d)| d));
            }
        }
        found
    }

    /// Number of inserted entries (a point inserted twice counts twice).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_spatial.rs"]
mod tests;
