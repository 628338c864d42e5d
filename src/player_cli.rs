#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use log::debug;

use crate::common::{BoardError, ShotOutcome};
use crate::coordinate::Coordinate;
use crate::player::{Player, TurnContext};
use crate::view::{BoardView, CellMark};

/// Something the terminal player can read whole lines from.
pub trait LineSource {
    /// Read one line into `buf`; `Ok(0)` means end of input.
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

// `Stdin::read_line` locks per call, so several players can share the terminal.
impl LineSource for io::Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        io::Stdin::read_line(self, buf)
    }
}

impl<T: AsRef<[u8]>> LineSource for io::Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

impl<R: io::Read> LineSource for io::BufReader<R> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Interactive player typing targets into a terminal.
pub struct CliPlayer<R = io::Stdin, W = io::Stdout> {
    input: R,
    output: W,
}

impl CliPlayer {
    /// Player reading from stdin and writing to stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin(), io::stdout())
    }
}

impl<R: LineSource, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// The output sink, e.g. to inspect what was printed.
    pub fn output(&self) -> &W {
        &self.output
    }

    fn say(&mut self, line: std::fmt::Arguments<'_>) {
        if let Err(err) = writeln!(self.output, "{}", line) {
            debug!("dropped player output: {}", err);
        }
    }
}

/// Draw a board view with column letters across the top and row numbers down
/// the side. Ship segments are only drawn on views that contain them.
pub fn render_view<W: Write>(out: &mut W, view: &BoardView) -> io::Result<()> {
    let width = 2 * view.x_dimension() + 4;
    writeln!(out, "    ╔{}╗", "═".repeat(width))?;
    write!(out, "    ║   ")?;
    for column in 1..=view.x_dimension() {
        let letter = Coordinate::new(column, 1).column_letter().unwrap_or('?');
        write!(out, " {}", letter)?;
    }
    writeln!(out, " ║")?;
    writeln!(out, "    ╠{}╣", "═".repeat(width))?;
    for (index, row) in view.rows().enumerate() {
        write!(out, "    ║ {:2}", index + 1)?;
        for mark in row {
            let ch = match mark {
                CellMark::Empty => '.',
                CellMark::Ship => 'S',
                CellMark::Hit => 'X',
                CellMark::Miss => 'o',
            };
            write!(out, " {}", ch)?;
        }
        writeln!(out, " ║")?;
    }
    writeln!(out, "    ╚{}╝", "═".repeat(width))?;
    if view.count(CellMark::Ship) > 0 {
        writeln!(out, "    Legend: S=Ship  X=Hit  o=Miss  .=Water")
    } else {
        writeln!(out, "    Legend: X=Hit  o=Miss  .=Unknown")
    }
}

fn print_targeting_help<W: Write>(out: &mut W, view: &BoardView) -> io::Result<()> {
    let last_column = Coordinate::new(view.x_dimension(), 1)
        .column_letter()
        .unwrap_or('?');
    writeln!(out, "\nFormat: <COLUMN><ROW>, e.g. A5 or B10")?;
    writeln!(out, "Valid columns: A-{}, valid rows: 1-{}", last_column, view.y_dimension())?;
    writeln!(out, "Board symbols: X = hit, o = miss, . = not yet targeted\n")
}

impl<R: LineSource, W: Write> Player for CliPlayer<R, W> {
    fn select_target(&mut self, ctx: &TurnContext<'_>) -> anyhow::Result<String> {
        writeln!(
            self.output,
            "\n{}, it's your turn to strike (shot {}/{}).",
            ctx.player_name, ctx.shot, ctx.shots_per_turn
        )?;
        writeln!(self.output, "Tracking board ({}'s waters):", ctx.opponent_name)?;
        render_view(&mut self.output, &ctx.tracking_board)?;
        writeln!(self.output, "\nYour board:")?;
        render_view(&mut self.output, &ctx.own_board)?;

        loop {
            write!(
                self.output,
                "\nEnter target (e.g. A7, 'help' for help) [{} attempt(s) left]: ",
                ctx.attempts_left
            )?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(anyhow::anyhow!("input closed while waiting for {}", ctx.player_name));
            }
            let line = line.trim();
            if line.eq_ignore_ascii_case("help") {
                print_targeting_help(&mut self.output, &ctx.tracking_board)?;
                continue;
            }
            return Ok(String::from(line));
        }
    }

    fn handle_shot_result(&mut self, target: Coordinate, outcome: &ShotOutcome) {
        match outcome {
            ShotOutcome::Hit => self.say(format_args!("HIT! Your shot at {} struck an enemy ship!", target)),
            ShotOutcome::Miss => self.say(format_args!("Miss. Your shot at {} hit only water.", target)),
            ShotOutcome::Sunk(name) => self.say(format_args!("SUNK! You destroyed the enemy's {}!", name)),
        }
    }

    fn handle_opponent_shot(&mut self, target: Coordinate, outcome: &ShotOutcome) {
        match outcome {
            ShotOutcome::Hit => self.say(format_args!("Enemy hit your ship at {}", target)),
            ShotOutcome::Miss => self.say(format_args!("Enemy missed at {}", target)),
            ShotOutcome::Sunk(name) => self.say(format_args!("Ship lost! Enemy destroyed your {} at {}", name, target)),
        }
    }

    fn handle_rejected_target(&mut self, error: &BoardError, attempts_left: usize) {
        match error {
            BoardError::DuplicateShot(_) => self.say(format_args!("{} - choose another target.", error)),
            _ => self.say(format_args!("{}. {} attempt(s) left.", error, attempts_left)),
        }
    }

    fn handle_forfeit(&mut self) {
        self.say(format_args!("Too many invalid attempts. You miss this shot!"));
    }

    fn handle_game_over(&mut self, won: bool) {
        if won {
            self.say(format_args!("\nVICTORY! You have sunk all enemy ships!"));
        } else {
            self.say(format_args!("\nDEFEAT. All your ships have been destroyed."));
        }
    }
}
