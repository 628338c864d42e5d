//! Commonly used types and utilities for ease of import.

pub use crate::{
    Board, BoardError, Coordinate, GameConfig, MatchOutcome, Player, ScriptedPlayer, ShotOutcome,
    TurnController,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, render_view, CliPlayer};
