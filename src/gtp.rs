//! Go Text Protocol (GTP) front end.
//!
//! GTP is a text-based protocol for communicating with Go-playing programs.
//! This module drives a [`Game`] through GTP version 2, so the rules engine
//! can sit behind graphical interfaces like Sabaki or GoGui.
//!
//! ## Supported Commands
//!
//! - `name` - Return engine name
//! - `version` - Return engine version
//! - `protocol_version` - Return GTP protocol version (2)
//! - `list_commands` - List all supported commands
//! - `known_command <cmd>` - Check if a command is supported
//! - `quit` - Exit the program
//! - `boardsize <size>` - Start a new game on a `size`x`size` board
//! - `clear_board` - Reset the board to empty
//! - `komi <value>` - Accepted and ignored (no scoring)
//! - `play <color> <vertex>` - Play a move for the side to move
//! - `genmove <color>` - Play a random legal move for the side to move
//! - `showboard` - Print the board
//!
//! The game owns the turn order, so `play` and `genmove` refuse a color that
//! is not the one to move.
//!
//! ## Example
//!
//! ```ignore
//! use goban_rules::gtp::GtpEngine;
//! let mut engine = GtpEngine::new(9);
//! engine.run()?;
//! ```

use std::io::{self, BufRead, Write};

use anyhow::{Context, bail};
use tracing::{debug, warn};

use crate::board::Color;
use crate::constants::{MAX_SIZE, MIN_SIZE};
use crate::game::Game;
use crate::position::{parse_coord, str_coord};

/// The list of known GTP commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "clear_board",
    "genmove",
    "known_command",
    "komi",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "showboard",
    "version",
];

/// GTP engine state.
pub struct GtpEngine {
    /// Current game
    game: Game,
    /// Move generator randomness
    rng: fastrand::Rng,
}

impl GtpEngine {
    /// Create a new GTP engine with an empty `size`x`size` board.
    pub fn new(size: usize) -> Self {
        Self::with_rng(size, fastrand::Rng::new())
    }

    /// Create a new GTP engine whose `genmove` choices are reproducible.
    pub fn with_seed(size: usize, seed: u64) -> Self {
        Self::with_rng(size, fastrand::Rng::with_seed(seed))
    }

    fn with_rng(size: usize, rng: fastrand::Rng) -> Self {
        Self {
            game: Game::new(size),
            rng,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run the GTP command loop, reading from stdin and writing to stdout.
    pub fn run(&mut self) -> anyhow::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run the GTP command loop over arbitrary streams.
    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> anyhow::Result<()> {
        for line in input.lines() {
            let line = line.context("failed to read GTP command")?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            // Parse optional command ID
            let (id, command_line) = Self::parse_id(line);

            // Parse command and arguments
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let command = parts[0].to_lowercase();
            let args = &parts[1..];

            let (success, message) = self.execute(&command, args);
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            write!(output, "{prefix}{id_str} {message}\n\n").context("failed to write GTP response")?;
            output.flush().context("failed to flush GTP response")?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let mut chars = trimmed.char_indices();

        // Check if line starts with a digit
        if let Some((_, c)) = chars.next() {
            if c.is_ascii_digit() {
                // Find end of number
                let end = chars
                    .find(|(_, c)| !c.is_ascii_digit())
                    .map(|(i, _)| i)
                    .unwrap_or(trimmed.len());

                if let Ok(id) = trimmed[..end].parse::<u32>() {
                    return (Some(id), trimmed[end..].trim());
                }
            }
        }

        (None, trimmed)
    }

    /// Execute a GTP command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match self.dispatch(command, args) {
            Ok(response) => (true, response),
            Err(e) => {
                debug!(command, "GTP command failed: {e:#}");
                (false, e.to_string())
            }
        }
    }

    fn dispatch(&mut self, command: &str, args: &[&str]) -> anyhow::Result<String> {
        match command {
            "name" => Ok(env!("CARGO_PKG_NAME").to_string()),

            "version" => Ok(env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => Ok("2".to_string()),

            "list_commands" => Ok(KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let cmd = arg(args, 0)?;
                let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                Ok(if known { "true" } else { "false" }.to_string())
            }

            "quit" => Ok(String::new()),

            "boardsize" => {
                let size: usize = arg(args, 0)?.parse().context("invalid size")?;
                if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
                    bail!("unacceptable size");
                }
                self.game = Game::new(size);
                Ok(String::new())
            }

            "clear_board" => {
                self.game.clear();
                Ok(String::new())
            }

            "komi" => {
                let _komi: f32 = arg(args, 0)?.parse().context("invalid komi")?;
                Ok(String::new())
            }

            "play" => {
                let color = parse_color(arg(args, 0)?)?;
                let vertex = arg(args, 1)?;
                self.check_turn(color)?;

                if vertex.eq_ignore_ascii_case("pass") {
                    self.game.next_turn();
                    return Ok(String::new());
                }

                let size = self.game.size();
                let Some(pos) = parse_coord(vertex, size) else {
                    bail!("invalid vertex");
                };
                self.game
                    .try_add_stone(pos)
                    .map_err(|e| anyhow::anyhow!("illegal move: {e}"))?;
                self.game.next_turn();
                Ok(String::new())
            }

            "genmove" => {
                let color = parse_color(arg(args, 0)?)?;
                self.check_turn(color)?;
                Ok(self.genmove())
            }

            "showboard" => Ok(format!("\n{}", self.game.board())),

            _ => bail!("unknown command"),
        }
    }

    fn check_turn(&self, color: Color) -> anyhow::Result<()> {
        let to_move = self.game.current_color();
        if color != to_move {
            bail!("it is {to_move}'s turn");
        }
        Ok(())
    }

    /// Play a uniformly random legal move, or pass if there is none.
    fn genmove(&mut self) -> String {
        let mut candidates = self.game.board().empty_points();
        self.rng.shuffle(&mut candidates);

        let size = self.game.size();
        for pos in candidates {
            if self.game.try_add_stone(pos).is_ok() {
                self.game.next_turn();
                return str_coord(pos, size);
            }
        }

        warn!(color = %self.game.current_color(), "no legal move, passing");
        self.game.next_turn();
        "pass".to_string()
    }
}

fn arg<'a>(args: &[&'a str], i: usize) -> anyhow::Result<&'a str> {
    match args.get(i) {
        Some(&a) => Ok(a),
        None => bail!("missing argument"),
    }
}

fn parse_color(s: &str) -> anyhow::Result<Color> {
    match s.to_lowercase().as_str() {
        "b" | "black" => Ok(Color::Black),
        "w" | "white" => Ok(Color::White),
        _ => bail!("invalid color"),
    }
}
