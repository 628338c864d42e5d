//! Player trait and a deterministic, script-driven implementation.
//!
//! A player is the engine's input and output collaborator: it is asked for
//! raw target text and told what happened. All validation stays in the core.

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;

use crate::common::{BoardError, ShotOutcome};
use crate::coordinate::Coordinate;
use crate::view::BoardView;

/// Everything a player may look at while choosing a target.
#[derive(Debug, Clone)]
pub struct TurnContext<'a> {
    /// Seat index of the active player (0 or 1).
    pub seat: usize,
    pub player_name: &'a str,
    pub opponent_name: &'a str,
    /// 1-based shot number within the current turn.
    pub shot: usize,
    pub shots_per_turn: usize,
    /// Attempts left for this shot, including the one being requested.
    pub attempts_left: usize,
    /// The player's own board, ships included.
    pub own_board: BoardView,
    /// Shots this player has fired at the opponent and their outcome.
    pub tracking_board: BoardView,
}

/// Interface implemented by different player types.
pub trait Player {
    /// Produce raw target text such as `"B4"`. An `Err` means the player can
    /// no longer take part (e.g. its input closed) and ends the match.
    fn select_target(&mut self, ctx: &TurnContext<'_>) -> anyhow::Result<String>;

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _target: Coordinate, _outcome: &ShotOutcome) {}

    /// Inform the player of an opponent shot against its board.
    fn handle_opponent_shot(&mut self, _target: Coordinate, _outcome: &ShotOutcome) {}

    /// The last target was refused; `attempts_left` more tries remain for this shot.
    fn handle_rejected_target(&mut self, _error: &BoardError, _attempts_left: usize) {}

    /// Every attempt for a shot was invalid; the shot counts as a miss.
    fn handle_forfeit(&mut self) {}

    /// The match is over.
    fn handle_game_over(&mut self, _won: bool) {}
}

impl<P: Player + ?Sized> Player for Box<P> {
    fn select_target(&mut self, ctx: &TurnContext<'_>) -> anyhow::Result<String> {
        (**self).select_target(ctx)
    }

    fn handle_shot_result(&mut self, target: Coordinate, outcome: &ShotOutcome) {
        (**self).handle_shot_result(target, outcome)
    }

    fn handle_opponent_shot(&mut self, target: Coordinate, outcome: &ShotOutcome) {
        (**self).handle_opponent_shot(target, outcome)
    }

    fn handle_rejected_target(&mut self, error: &BoardError, attempts_left: usize) {
        (**self).handle_rejected_target(error, attempts_left)
    }

    fn handle_forfeit(&mut self) {
        (**self).handle_forfeit()
    }

    fn handle_game_over(&mut self, won: bool) {
        (**self).handle_game_over(won)
    }
}

/// Replays a fixed list of target tokens in order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPlayer {
    moves: VecDeque<String>,
    results: Vec<(Coordinate, ShotOutcome)>,
    rejections: usize,
    forfeits: usize,
}

impl ScriptedPlayer {
    pub fn new<I, S>(moves: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            moves: moves.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Tokens not yet consumed.
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }

    /// Outcomes of this player's resolved shots, in order.
    pub fn results(&self) -> &[(Coordinate, ShotOutcome)] {
        &self.results
    }

    pub fn rejections(&self) -> usize {
        self.rejections
    }

    pub fn forfeits(&self) -> usize {
        self.forfeits
    }
}

impl Player for ScriptedPlayer {
    fn select_target(&mut self, ctx: &TurnContext<'_>) -> anyhow::Result<String> {
        self.moves
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("script for {} ran out of moves", ctx.player_name))
    }

    fn handle_shot_result(&mut self, target: Coordinate, outcome: &ShotOutcome) {
        self.results.push((target, outcome.clone()));
    }

    fn handle_rejected_target(&mut self, _error: &BoardError, _attempts_left: usize) {
        self.rejections += 1;
    }

    fn handle_forfeit(&mut self) {
        self.forfeits += 1;
    }
}
