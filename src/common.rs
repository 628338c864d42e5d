//! Common types for the game engine: shot outcomes and board errors.

use alloc::string::String;
use core::fmt;

use crate::coordinate::Coordinate;

/// Result of a shot resolved against a board.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Shot missed all ships.
    Miss,
    /// Shot hit a ship that is still afloat.
    Hit,
    /// Shot hit a ship and every cell of it is now hit, carrying its name.
    Sunk(String),
}

impl ShotOutcome {
    /// True for `Hit` and `Sunk`.
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

/// Reasons a target was rejected before touching any board state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetError {
    /// Nothing was entered.
    Empty,
    /// First character is not a letter.
    InvalidColumn(char),
    /// A column letter with no row after it.
    MissingRow,
    /// Row part is not a plain decimal number.
    InvalidRow(String),
    /// Well-formed coordinate outside the board.
    OutOfBounds {
        target: Coordinate,
        x_dimension: usize,
        y_dimension: usize,
    },
}

impl fmt::Display for TargetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetError::Empty => write!(f, "empty target - enter a column letter and row number (e.g. A7)"),
            TargetError::InvalidColumn(c) => write!(f, "invalid column '{}' - must be a letter", c),
            TargetError::MissingRow => write!(f, "missing row number after the column letter"),
            TargetError::InvalidRow(row) => write!(f, "invalid row '{}' - must be a number", row),
            TargetError::OutOfBounds {
                target,
                x_dimension,
                y_dimension,
            } => write!(
                f,
                "{} is off the board ({} columns x {} rows)",
                target, x_dimension, y_dimension
            ),
        }
    }
}

/// Errors returned by board and match operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Target text was malformed or out of bounds.
    InvalidTarget(TargetError),
    /// No free position was found for a ship within the attempt budget.
    PlacementExhausted { ship: String, attempts: usize },
    /// Target was already fired at and repeats are rejected.
    DuplicateShot(Coordinate),
    /// Ship index is out of range for the fleet.
    InvalidIndex,
    /// Attempted to place a ship that is already placed.
    ShipAlreadyPlaced,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ship placement leaves the board.
    ShipOutOfBounds,
    /// Locations are not a straight contiguous run of the ship's size.
    InvalidShipLayout,
    /// Game configuration cannot produce a playable match.
    InvalidConfig(&'static str),
}

impl From<TargetError> for BoardError {
    fn from(err: TargetError) -> Self {
        BoardError::InvalidTarget(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidTarget(e) => write!(f, "Invalid target: {}", e),
            BoardError::PlacementExhausted { ship, attempts } => write!(
                f,
                "Unable to place {} after {} attempts - board too small for the roster?",
                ship, attempts
            ),
            BoardError::DuplicateShot(c) => write!(f, "{} has already been targeted", c),
            BoardError::InvalidIndex => write!(f, "Ship index is out of range"),
            BoardError::ShipAlreadyPlaced => write!(f, "Ship is already placed on the board"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::InvalidShipLayout => {
                write!(f, "Ship locations must be a straight, contiguous line of its size")
            }
            BoardError::InvalidConfig(reason) => write!(f, "Invalid configuration: {}", reason),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TargetError {}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
