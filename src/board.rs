//! Game board: fleet placement, shot resolution and the record of shots fired
//! against it.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use log::{debug, info};
use rand::Rng;

use crate::common::{BoardError, ShotOutcome, TargetError};
use crate::config::{DuplicateShotPolicy, GameConfig, PlacementMode};
use crate::coordinate::{CellStatus, Coordinate};
use crate::ship::{Orientation, Ship};
use crate::view::{BoardView, CellMark};

/// A shot fired against this board, with its resolved status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetedCoordinate {
    pub target: Coordinate,
    pub status: CellStatus,
}

/// One player's board: the fleet and every shot the opponent has fired at it.
#[derive(Clone)]
pub struct Board {
    x_dimension: usize,
    y_dimension: usize,
    fleet: Vec<Ship>,
    targeted: Vec<TargetedCoordinate>,
    placement: PlacementMode,
    placement_attempts: usize,
    duplicate_shots: DuplicateShotPolicy,
}

impl Board {
    /// Create a board and place the whole roster at random.
    pub fn new<R: Rng>(config: &GameConfig, rng: &mut R) -> Result<Self, BoardError> {
        let mut board = Self::empty(config)?;
        board.place_fleet(rng)?;
        Ok(board)
    }

    /// Create a board with the roster's ships unplaced.
    pub fn empty(config: &GameConfig) -> Result<Self, BoardError> {
        config.validate()?;
        Ok(Board {
            x_dimension: config.x_dimension,
            y_dimension: config.y_dimension,
            fleet: config.roster.iter().cloned().map(Ship::new).collect(),
            targeted: Vec::new(),
            placement: config.placement,
            placement_attempts: config.placement_attempts,
            duplicate_shots: config.duplicate_shots,
        })
    }

    pub fn x_dimension(&self) -> usize {
        self.x_dimension
    }

    pub fn y_dimension(&self) -> usize {
        self.y_dimension
    }

    pub fn fleet(&self) -> &[Ship] {
        &self.fleet
    }

    /// Shots fired at this board, in the order they were fired.
    pub fn targeted_coordinates(&self) -> &[TargetedCoordinate] {
        &self.targeted
    }

    /// Every cell covered by a placed ship.
    pub fn occupied_coordinates(&self) -> Vec<Coordinate> {
        self.fleet
            .iter()
            .flat_map(|ship| ship.locations().iter().copied())
            .collect()
    }

    pub fn is_occupied(&self, target: &Coordinate) -> bool {
        self.fleet.iter().any(|ship| ship.occupies(target))
    }

    pub fn was_targeted(&self, target: &Coordinate) -> bool {
        self.targeted.iter().any(|t| t.target == *target)
    }

    /// Returns `true` when every ship in the fleet is sunk.
    pub fn is_fleet_sunk(&self) -> bool {
        self.fleet.iter().all(Ship::is_sunk)
    }

    /// Place a single ship by index at `origin` extending along `orientation`.
    pub fn place_ship(
        &mut self,
        ship_index: usize,
        origin: Coordinate,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let ship = self.fleet.get(ship_index).ok_or(BoardError::InvalidIndex)?;
        if ship.is_placed() {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        let on_board = |c: &Coordinate| c.is_within(self.x_dimension, self.y_dimension);
        let fits = on_board(&origin)
            && orientation
                .end(origin, ship.size())
                .is_some_and(|end| on_board(&end));
        if !fits {
            return Err(BoardError::ShipOutOfBounds);
        }
        let cells = orientation
            .cells(origin, ship.size())
            .ok_or(BoardError::ShipOutOfBounds)?;
        if cells.iter().any(|c| self.is_occupied(c)) {
            return Err(BoardError::ShipOverlaps);
        }
        self.fleet[ship_index].assign_locations(cells)
    }

    /// Place every ship that is not placed yet at a random free position.
    pub fn place_fleet<R: Rng>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for index in 0..self.fleet.len() {
            if self.fleet[index].is_placed() {
                continue;
            }
            let (origin, orientation) = self.random_placement(rng, index)?;
            self.place_ship(index, origin, orientation)?;
        }
        Ok(())
    }

    /// Returns a random non-overlapping `(origin, orientation)` for `ship_index`.
    ///
    /// Rejection sampling, bounded by the configured attempt budget.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        ship_index: usize,
    ) -> Result<(Coordinate, Orientation), BoardError> {
        let ship = self.fleet.get(ship_index).ok_or(BoardError::InvalidIndex)?;
        let size = ship.size();
        let candidates: &[Orientation] = match self.placement {
            PlacementMode::Mixed => &[Orientation::Horizontal, Orientation::Vertical],
            PlacementMode::HorizontalOnly => &[Orientation::Horizontal],
        };
        // drop orientations the ship cannot fit in at all
        let orientations: Vec<Orientation> = candidates
            .iter()
            .copied()
            .filter(|o| match o {
                Orientation::Horizontal => size <= self.x_dimension,
                Orientation::Vertical => size <= self.y_dimension,
            })
            .collect();
        if orientations.is_empty() {
            return Err(BoardError::PlacementExhausted {
                ship: String::from(ship.name()),
                attempts: 0,
            });
        }

        for attempt in 1..=self.placement_attempts {
            let orientation = orientations[rng.random_range(0..orientations.len())];
            let (max_column, max_row) = match orientation {
                Orientation::Horizontal => (self.x_dimension - size + 1, self.y_dimension),
                Orientation::Vertical => (self.x_dimension, self.y_dimension - size + 1),
            };
            let origin = Coordinate::new(
                rng.random_range(1..=max_column),
                rng.random_range(1..=max_row),
            );
            let fits = orientation
                .cells(origin, size)
                .is_some_and(|cells| !cells.iter().any(|c| self.is_occupied(c)));
            if fits {
                debug!(
                    "placed {} at {} {:?} after {} attempt(s)",
                    ship.name(),
                    origin,
                    orientation,
                    attempt
                );
                return Ok((origin, orientation));
            }
        }
        Err(BoardError::PlacementExhausted {
            ship: String::from(ship.name()),
            attempts: self.placement_attempts,
        })
    }

    /// Check that `target` lies on this board.
    pub fn validate_target(&self, target: Coordinate) -> Result<Coordinate, BoardError> {
        if target.is_within(self.x_dimension, self.y_dimension) {
            Ok(target)
        } else {
            Err(BoardError::InvalidTarget(TargetError::OutOfBounds {
                target,
                x_dimension: self.x_dimension,
                y_dimension: self.y_dimension,
            }))
        }
    }

    /// Parse `A7`-style text into an in-bounds coordinate for this board.
    pub fn parse_target(&self, input: &str) -> Result<Coordinate, BoardError> {
        let target: Coordinate = input.parse()?;
        self.validate_target(target)
    }

    /// Resolve a shot at `target`, recording it and reporting the outcome.
    ///
    /// Nothing is mutated unless the shot is accepted.
    pub fn receive_shot(&mut self, target: Coordinate) -> Result<ShotOutcome, BoardError> {
        let target = self.validate_target(target)?;
        if self.duplicate_shots == DuplicateShotPolicy::Reject && self.was_targeted(&target) {
            return Err(BoardError::DuplicateShot(target));
        }

        let outcome = match self.fleet.iter_mut().find(|ship| ship.occupies(&target)) {
            Some(ship) => {
                let already_sunk = ship.is_sunk();
                ship.register_hit(target);
                // only the shot that sinks the ship reports it
                if ship.is_sunk() && !already_sunk {
                    ShotOutcome::Sunk(String::from(ship.name()))
                } else {
                    ShotOutcome::Hit
                }
            }
            None => ShotOutcome::Miss,
        };
        let status = if outcome.is_hit() {
            CellStatus::Hit
        } else {
            CellStatus::Missed
        };
        self.targeted.push(TargetedCoordinate { target, status });
        info!("shot at {} -> {:?}", target, outcome);
        Ok(outcome)
    }

    /// Current status of any cell on this board.
    pub fn status_at(&self, target: &Coordinate) -> CellStatus {
        self.targeted
            .iter()
            .rev()
            .find(|t| t.target == *target)
            .map_or(CellStatus::Untargeted, |t| t.status)
    }

    /// The owner's view: ship positions plus every hit and miss against them.
    pub fn own_view(&self) -> BoardView {
        BoardView::build(self.x_dimension, self.y_dimension, |c| {
            match (self.status_at(&c), self.is_occupied(&c)) {
                (CellStatus::Hit, _) => CellMark::Hit,
                (CellStatus::Missed, _) => CellMark::Miss,
                (CellStatus::Untargeted, true) => CellMark::Ship,
                (CellStatus::Untargeted, false) => CellMark::Empty,
            }
        })
    }

    /// The opponent's view: only the outcome of shots already fired here.
    pub fn tracking_view(&self) -> BoardView {
        BoardView::build(self.x_dimension, self.y_dimension, |c| match self.status_at(&c) {
            CellStatus::Hit => CellMark::Hit,
            CellStatus::Missed => CellMark::Miss,
            CellStatus::Untargeted => CellMark::Empty,
        })
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  dimensions: {}x{},\n  fleet: {:?},\n  targeted: {:?}\n}}",
            self.x_dimension, self.y_dimension, self.fleet, self.targeted
        )
    }
}
