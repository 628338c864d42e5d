#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleships::{
    init_logging, render_view, Board, CliPlayer, DuplicateShotPolicy, GameConfig, PlacementMode,
    TurnController,
};
#[cfg(feature = "std")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a two-player game taking turns at this terminal.
    Play {
        #[arg(long, default_value = "Player 1")]
        player1: String,
        #[arg(long, default_value = "Player 2")]
        player2: String,
        #[command(flatten)]
        rules: RulesArgs,
    },
    /// Print a randomly placed fleet and exit.
    Layout {
        #[command(flatten)]
        rules: RulesArgs,
    },
}

#[derive(Args)]
#[cfg(feature = "std")]
struct RulesArgs {
    #[arg(long, help = "Fix RNG seed for reproducible fleets (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "JSON file with game rules; flags below override it")]
    config: Option<PathBuf>,
    #[arg(long, help = "Square board size (1-26)")]
    size: Option<usize>,
    #[arg(long)]
    shots_per_turn: Option<usize>,
    #[arg(long, help = "Attempts allowed to enter a valid target per shot")]
    retries: Option<usize>,
    #[arg(long, help = "Reject shots at cells that were already targeted")]
    strict: bool,
    #[arg(long, help = "Place ships along rows only")]
    horizontal_only: bool,
}

#[cfg(feature = "std")]
impl RulesArgs {
    fn game_config(&self) -> anyhow::Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)?;
                serde_json::from_str(&text)?
            }
            None => GameConfig::default(),
        };
        if let Some(size) = self.size {
            config.x_dimension = size;
            config.y_dimension = size;
        }
        if let Some(shots) = self.shots_per_turn {
            config.shots_per_turn = shots;
        }
        if let Some(retries) = self.retries {
            config.target_retries = retries;
        }
        if self.strict {
            config.duplicate_shots = DuplicateShotPolicy::Reject;
        }
        if self.horizontal_only {
            config.placement = PlacementMode::HorizontalOnly;
        }
        config.validate().map_err(|e| anyhow::anyhow!(e))?;
        Ok(config)
    }

    fn rng(&self) -> SmallRng {
        if let Some(s) = self.seed {
            println!("Using fixed seed: {} (fleets will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        } else {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            player1,
            player2,
            rules,
        } => {
            let config = rules.game_config()?;
            let mut rng = rules.rng();
            println!("Welcome to Battleships!");
            let mut controller = TurnController::setup(
                &config,
                [
                    (player1, CliPlayer::stdio()),
                    (player2, CliPlayer::stdio()),
                ],
                &mut rng,
            )
            .map_err(|e| anyhow::anyhow!(e))?;
            let outcome = controller.play()?;
            println!(
                "\nGAME OVER: {} wins after {} turns.",
                outcome.winner_name, outcome.turns
            );
        }
        Commands::Layout { rules } => {
            let config = rules.game_config()?;
            let mut rng = rules.rng();
            let board = Board::new(&config, &mut rng).map_err(|e| anyhow::anyhow!(e))?;
            render_view(&mut std::io::stdout(), &board.own_view())?;
            for ship in board.fleet() {
                let cells: Vec<String> = ship.locations().iter().map(|c| c.to_string()).collect();
                println!("      {} ({}): {}", ship.name(), ship.size(), cells.join(" "));
            }
        }
    }
    Ok(())
}
