//! Match orchestration: alternating turns, target retries and the win check.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use log::{info, warn};
use rand::Rng;

use crate::board::Board;
use crate::common::{BoardError, ShotOutcome};
use crate::config::GameConfig;
use crate::coordinate::Coordinate;
use crate::player::{Player, TurnContext};

/// Where the match stands between shots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    /// Waiting for the player in this seat to fire.
    AwaitingShot { seat: usize },
    /// The player in this seat sank the opposing fleet.
    GameOver { winner: usize },
}

/// What became of a single shot in a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShotRecord {
    Fired { target: Coordinate, outcome: ShotOutcome },
    /// No valid target within the retry budget; nothing was recorded.
    Forfeited,
}

/// Shots taken by one player in one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub seat: usize,
    pub shots: Vec<ShotRecord>,
}

/// Final result of a finished match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    pub winner: usize,
    pub winner_name: String,
    pub turns: usize,
}

struct Seat<P> {
    name: String,
    player: P,
    board: Board,
}

/// Drives a two-player match to completion.
pub struct TurnController<P: Player = Box<dyn Player>> {
    seats: [Seat<P>; 2],
    shots_per_turn: usize,
    target_retries: usize,
    state: MatchState,
    history: Vec<TurnReport>,
}

impl<P: Player> TurnController<P> {
    /// Build both boards from `config` and seat the players, first player first.
    pub fn setup<R: Rng>(
        config: &GameConfig,
        players: [(String, P); 2],
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        let [(name_a, player_a), (name_b, player_b)] = players;
        let board_a = Board::new(config, rng)?;
        let board_b = Board::new(config, rng)?;
        Self::new(
            config,
            [(name_a, player_a, board_a), (name_b, player_b, board_b)],
        )
    }

    /// Seat players on boards that are already set up.
    pub fn new(config: &GameConfig, seats: [(String, P, Board); 2]) -> Result<Self, BoardError> {
        config.validate()?;
        let seats = seats.map(|(name, player, board)| Seat {
            name,
            player,
            board,
        });
        Ok(Self {
            seats,
            shots_per_turn: config.shots_per_turn,
            target_retries: config.target_retries,
            state: MatchState::AwaitingShot { seat: 0 },
            history: Vec::new(),
        })
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        matches!(self.state, MatchState::GameOver { .. })
    }

    /// Turns played so far, in order.
    pub fn history(&self) -> &[TurnReport] {
        &self.history
    }

    pub fn board(&self, seat: usize) -> &Board {
        &self.seats[seat].board
    }

    pub fn player(&self, seat: usize) -> &P {
        &self.seats[seat].player
    }

    pub fn player_name(&self, seat: usize) -> &str {
        &self.seats[seat].name
    }

    /// Play turns until one fleet is sunk.
    pub fn play(&mut self) -> anyhow::Result<MatchOutcome> {
        loop {
            if let MatchState::GameOver { winner } = self.state {
                return Ok(MatchOutcome {
                    winner,
                    winner_name: self.seats[winner].name.clone(),
                    turns: self.history.len(),
                });
            }
            self.play_turn()?;
        }
    }

    /// Play one turn for the active player and pass control on, or end the
    /// match as soon as the opposing fleet is sunk.
    pub fn play_turn(&mut self) -> anyhow::Result<&TurnReport> {
        let seat = match self.state {
            MatchState::AwaitingShot { seat } => seat,
            MatchState::GameOver { .. } => return Err(anyhow::anyhow!("match is already over")),
        };
        info!("turn {}: {}", self.history.len() + 1, self.seats[seat].name);

        let mut shots = Vec::new();
        for shot in 1..=self.shots_per_turn {
            let record = self.take_shot(seat, shot)?;
            shots.push(record);
            if self.seats[1 - seat].board.is_fleet_sunk() {
                self.state = MatchState::GameOver { winner: seat };
                break;
            }
        }

        match self.state {
            MatchState::GameOver { winner } => {
                info!("{} wins", self.seats[winner].name);
                self.seats[winner].player.handle_game_over(true);
                self.seats[1 - winner].player.handle_game_over(false);
            }
            MatchState::AwaitingShot { .. } => {
                self.state = MatchState::AwaitingShot {
                    seat: (seat + 1) % self.seats.len(),
                };
            }
        }
        self.history.push(TurnReport { seat, shots });
        Ok(&self.history[self.history.len() - 1])
    }

    /// Ask the shooter for a target until one resolves or the retries run out.
    fn take_shot(&mut self, seat: usize, shot: usize) -> anyhow::Result<ShotRecord> {
        let [first, second] = &mut self.seats;
        let (shooter, opponent) = if seat == 0 {
            (first, second)
        } else {
            (second, first)
        };

        let mut attempts_left = self.target_retries;
        while attempts_left > 0 {
            let ctx = TurnContext {
                seat,
                player_name: &shooter.name,
                opponent_name: &opponent.name,
                shot,
                shots_per_turn: self.shots_per_turn,
                attempts_left,
                own_board: shooter.board.own_view(),
                tracking_board: opponent.board.tracking_view(),
            };
            let input = shooter.player.select_target(&ctx)?;

            let resolved = opponent
                .board
                .parse_target(&input)
                .and_then(|target| {
                    opponent
                        .board
                        .receive_shot(target)
                        .map(|outcome| (target, outcome))
                });
            match resolved {
                Ok((target, outcome)) => {
                    shooter.player.handle_shot_result(target, &outcome);
                    opponent.player.handle_opponent_shot(target, &outcome);
                    return Ok(ShotRecord::Fired { target, outcome });
                }
                Err(err @ BoardError::DuplicateShot(_)) => {
                    warn!("{}: {}", shooter.name, err);
                    shooter.player.handle_rejected_target(&err, attempts_left);
                }
                Err(err @ BoardError::InvalidTarget(_)) => {
                    attempts_left -= 1;
                    warn!("{}: {} ({} attempts left)", shooter.name, err, attempts_left);
                    shooter.player.handle_rejected_target(&err, attempts_left);
                }
                Err(err) => return Err(anyhow::anyhow!(err)),
            }
        }

        warn!("{} forfeits shot {} of this turn", shooter.name, shot);
        shooter.player.handle_forfeit();
        Ok(ShotRecord::Forfeited)
    }
}
