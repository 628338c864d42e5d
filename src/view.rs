//! Read-only grid snapshots handed to rendering collaborators.

use alloc::vec::Vec;

use crate::coordinate::Coordinate;

/// What a renderer should draw in one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellMark {
    /// Open water on an own board, or an untargeted cell on a tracking board.
    Empty,
    /// An unhit ship segment. Only appears on the owner's view.
    Ship,
    Hit,
    Miss,
}

/// Row-major grid of marks, row 1 first.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardView {
    x_dimension: usize,
    y_dimension: usize,
    cells: Vec<CellMark>,
}

impl BoardView {
    pub(crate) fn build<F>(x_dimension: usize, y_dimension: usize, mut mark: F) -> Self
    where
        F: FnMut(Coordinate) -> CellMark,
    {
        let mut cells = Vec::with_capacity(x_dimension * y_dimension);
        for row in 1..=y_dimension {
            for column in 1..=x_dimension {
                cells.push(mark(Coordinate::new(column, row)));
            }
        }
        BoardView {
            x_dimension,
            y_dimension,
            cells,
        }
    }

    pub fn x_dimension(&self) -> usize {
        self.x_dimension
    }

    pub fn y_dimension(&self) -> usize {
        self.y_dimension
    }

    /// Mark at `target`, `None` when off the grid.
    pub fn mark(&self, target: Coordinate) -> Option<CellMark> {
        if !target.is_within(self.x_dimension, self.y_dimension) {
            return None;
        }
        let (column, row) = target.to_numeric_pair();
        self.cells
            .get((row - 1) * self.x_dimension + (column - 1))
            .copied()
    }

    /// Rows in order, each `x_dimension` marks wide.
    pub fn rows(&self) -> impl Iterator<Item = &[CellMark]> {
        self.cells.chunks(self.x_dimension)
    }

    pub fn count(&self, mark: CellMark) -> usize {
        self.cells.iter().filter(|m| **m == mark).count()
    }
}
