use alloc::vec::Vec;

use crate::common::BoardError;
use crate::ship::ShipDef;

pub const BOARD_SIZE: usize = 10;
/// Columns are written as a single letter, so boards are at most `Z` wide.
pub const MAX_COLUMNS: usize = 26;
/// Row numbers are drawn two digits wide.
pub const MAX_ROWS: usize = 99;
pub const NUM_SHIPS: usize = 5;
pub const STANDARD_ROSTER: [(&str, usize); NUM_SHIPS] = [
    ("Carrier", 5),
    ("Battleship", 4),
    ("Cruiser", 3),
    ("Submarine", 3),
    ("Destroyer", 2),
];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

pub const DEFAULT_SHOTS_PER_TURN: usize = 1;
pub const DEFAULT_TARGET_RETRIES: usize = 3;
pub const DEFAULT_PLACEMENT_ATTEMPTS: usize = 1_000;

/// The standard five-ship roster.
pub fn standard_roster() -> Vec<ShipDef> {
    STANDARD_ROSTER
        .iter()
        .map(|&(name, size)| ShipDef::new(name, size))
        .collect()
}

/// Orientations available to random fleet placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "kebab-case"))]
pub enum PlacementMode {
    /// Horizontal or vertical, chosen uniformly per attempt.
    #[default]
    Mixed,
    /// Every ship lies along a single row.
    HorizontalOnly,
}

/// What a board does when a coordinate is fired at a second time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "kebab-case"))]
pub enum DuplicateShotPolicy {
    /// Resolve and record the shot again.
    #[default]
    Allow,
    /// Refuse with `BoardError::DuplicateShot`.
    Reject,
}

/// Rules for one match. Both boards share the same dimensions and roster.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(default))]
pub struct GameConfig {
    pub x_dimension: usize,
    pub y_dimension: usize,
    pub roster: Vec<ShipDef>,
    pub shots_per_turn: usize,
    /// Attempts a player gets to enter a valid target before the shot is forfeited.
    pub target_retries: usize,
    pub placement: PlacementMode,
    /// Random samples tried per ship before placement gives up.
    pub placement_attempts: usize,
    pub duplicate_shots: DuplicateShotPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            x_dimension: BOARD_SIZE,
            y_dimension: BOARD_SIZE,
            roster: standard_roster(),
            shots_per_turn: DEFAULT_SHOTS_PER_TURN,
            target_retries: DEFAULT_TARGET_RETRIES,
            placement: PlacementMode::default(),
            placement_attempts: DEFAULT_PLACEMENT_ATTEMPTS,
            duplicate_shots: DuplicateShotPolicy::default(),
        }
    }
}

impl GameConfig {
    /// Check that the configuration can describe a playable match.
    ///
    /// Whether the roster actually fits is only known once placement runs.
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.x_dimension == 0 || self.y_dimension == 0 {
            return Err(BoardError::InvalidConfig("board dimensions must be at least 1"));
        }
        if self.x_dimension > MAX_COLUMNS {
            return Err(BoardError::InvalidConfig("board is limited to 26 columns (A-Z)"));
        }
        if self.y_dimension > MAX_ROWS {
            return Err(BoardError::InvalidConfig("board is limited to 99 rows"));
        }
        if self.roster.is_empty() {
            return Err(BoardError::InvalidConfig("roster must contain at least one ship"));
        }
        if self.roster.iter().any(|def| def.size() == 0) {
            return Err(BoardError::InvalidConfig("ship sizes must be at least 1"));
        }
        if self.shots_per_turn == 0 {
            return Err(BoardError::InvalidConfig("shots_per_turn must be at least 1"));
        }
        if self.target_retries == 0 {
            return Err(BoardError::InvalidConfig("target_retries must be at least 1"));
        }
        if self.placement_attempts == 0 {
            return Err(BoardError::InvalidConfig("placement_attempts must be at least 1"));
        }
        Ok(())
    }

    /// Sum of ship sizes in the roster.
    pub fn total_ship_cells(&self) -> usize {
        self.roster.iter().map(ShipDef::size).sum()
    }
}
