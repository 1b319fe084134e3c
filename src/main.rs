//! Goban-Rules: Go rules engine.
//!
//! ## Usage
//!
//! - `goban-rules` - Show a demo
//! - `goban-rules gtp` - Start GTP server for GUI integration
//! - `goban-rules demo` - Run the rules demo
//!
//! Logs go to stderr; set `RUST_LOG` or pass `-v` for more.

use anyhow::bail;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use goban_rules::constants::{DEFAULT_SIZE, MAX_SIZE, MIN_SIZE};
use goban_rules::game::Game;
use goban_rules::gtp::GtpEngine;
use goban_rules::position::Position;

/// Goban-Rules: the rules of Go
#[derive(Parser)]
#[command(name = "goban-rules")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board size (defaults to the size selected at build time)
    #[arg(long, global = true, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the GTP (Go Text Protocol) server for use with GUI applications
    Gtp {
        /// Seed for reproducible generated moves
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run a simple demo of the rules
    Demo,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if !(MIN_SIZE..=MAX_SIZE).contains(&cli.size) {
        bail!("board size must be between {MIN_SIZE} and {MAX_SIZE} (got {})", cli.size);
    }

    match cli.command {
        Some(Commands::Gtp { seed }) => {
            let mut engine = match seed {
                Some(seed) => GtpEngine::with_seed(cli.size, seed),
                None => GtpEngine::new(cli.size),
            };
            engine.run()
        }
        Some(Commands::Demo) | None => run_demo(cli.size),
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_demo(size: usize) -> anyhow::Result<()> {
    if size < 3 {
        bail!("the demo needs at least a 3x3 board");
    }
    println!("Goban-Rules: Go rules engine\n");

    let mut game = Game::new(size);

    // Black surrounds a white stone in the corner and captures it
    let script = [(1, 2), (1, 1), (2, 1)];
    for (row, col) in script {
        let color = game.current_color();
        let result = game.try_add_stone(Position::new(row, col));
        match &result {
            Ok(placement) => {
                println!("{color} at ({row},{col}): captured {}", placement.captured.len());
                game.next_turn();
            }
            Err(e) => println!("{color} at ({row},{col}): {e}"),
        }
    }
    println!("{}", game.board());

    // White may not play back into the empty corner: it would be suicide
    let color = game.current_color();
    match game.try_add_stone(Position::new(1, 1)) {
        Ok(_) => println!("{color} at (1,1): accepted"),
        Err(e) => println!("{color} at (1,1): {e}"),
    }
    println!("Turn {}, {} to play", game.turn(), game.current_color());
    println!("{}", game.board());
    Ok(())
}
