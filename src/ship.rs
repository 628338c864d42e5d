//! Ship definitions and per-ship hit tracking.

use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;

use crate::common::BoardError;
use crate::coordinate::{CellStatus, Coordinate};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Along a row, growing towards higher columns.
    Horizontal,
    /// Along a column, growing towards higher rows.
    Vertical,
}

impl Orientation {
    /// Last cell covered by a ship of `size` starting at `origin`.
    pub fn end(self, origin: Coordinate, size: usize) -> Option<Coordinate> {
        let extent = size.checked_sub(1)?;
        match self {
            Orientation::Horizontal => origin.offset(extent, 0),
            Orientation::Vertical => origin.offset(0, extent),
        }
    }

    /// Cells covered by a ship of `size` starting at `origin`, or `None` if
    /// the ship would run past the largest representable coordinate.
    pub fn cells(self, origin: Coordinate, size: usize) -> Option<Vec<Coordinate>> {
        if size > 0 {
            self.end(origin, size)?;
        }
        (0..size)
            .map(|i| match self {
                Orientation::Horizontal => origin.offset(i, 0),
                Orientation::Vertical => origin.offset(0, i),
            })
            .collect()
    }
}

/// Roster entry: ship name and size.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipDef {
    name: String,
    size: usize,
}

impl ShipDef {
    pub fn new(name: impl Into<String>, size: usize) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

/// A ship in a fleet. Locations are empty until placement assigns them, and
/// never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    def: ShipDef,
    locations: Vec<Coordinate>,
    hits: BTreeSet<Coordinate>,
}

impl Ship {
    pub fn new(def: ShipDef) -> Self {
        Self {
            def,
            locations: Vec::new(),
            hits: BTreeSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        self.def.name()
    }

    pub fn size(&self) -> usize {
        self.def.size()
    }

    pub fn def(&self) -> &ShipDef {
        &self.def
    }

    pub fn locations(&self) -> &[Coordinate] {
        &self.locations
    }

    pub fn is_placed(&self) -> bool {
        !self.locations.is_empty()
    }

    /// Assign the ship's cells. Accepts exactly `size` collinear, contiguous
    /// cells in either direction, once.
    pub fn assign_locations(&mut self, mut locations: Vec<Coordinate>) -> Result<(), BoardError> {
        if self.is_placed() {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        if locations.len() != self.size() {
            return Err(BoardError::InvalidShipLayout);
        }
        locations.sort();
        let first = locations[0];
        let horizontal = locations
            .iter()
            .enumerate()
            .all(|(i, c)| c.row() == first.row() && c.column() == first.column() + i);
        let vertical = locations
            .iter()
            .enumerate()
            .all(|(i, c)| c.column() == first.column() && c.row() == first.row() + i);
        if !(horizontal || vertical) {
            return Err(BoardError::InvalidShipLayout);
        }
        self.locations = locations;
        Ok(())
    }

    pub fn occupies(&self, target: &Coordinate) -> bool {
        self.locations.contains(target)
    }

    /// Mark `target` as hit if the ship occupies it. Hitting the same cell
    /// twice leaves the ship unchanged.
    pub fn register_hit(&mut self, target: Coordinate) -> bool {
        if self.occupies(&target) {
            self.hits.insert(target);
            true
        } else {
            false
        }
    }

    /// Status of one of this ship's cells, `None` if the ship is not there.
    pub fn status_at(&self, target: &Coordinate) -> Option<CellStatus> {
        if !self.occupies(target) {
            None
        } else if self.hits.contains(target) {
            Some(CellStatus::Hit)
        } else {
            Some(CellStatus::Untargeted)
        }
    }

    /// Number of distinct cells hit.
    pub fn hit_count(&self) -> usize {
        self.hits.len()
    }

    /// True iff the ship is placed and every one of its cells is hit.
    pub fn is_sunk(&self) -> bool {
        self.is_placed() && self.locations.iter().all(|c| self.hits.contains(c))
    }
}
