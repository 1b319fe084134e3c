//! Goban-Rules: the rules of Go as a library.
//!
//! This crate checks move legality, finds chains and their liberties,
//! resolves captures, forbids suicide and tracks whose turn it is. Rendering
//! and input handling are left to the caller, which feeds moves in as
//! [`Position`](position::Position)s and reads the board back.
//!
//! ## Modules
//!
//! - [`constants`] - Board size configuration
//! - [`position`] - Coordinates, neighbors and GTP vertices
//! - [`board`] - Colors, players and the board
//! - [`group`] - Chain and liberty analysis
//! - [`capture`] - Capture resolution
//! - [`rules`] - Move legality
//! - [`game`] - The game object and turn order
//! - [`sync`] - A game shared between threads
//! - [`gtp`] - Go Text Protocol front end
//!
//! ## Example
//!
//! ```
//! use goban_rules::board::Color;
//! use goban_rules::game::Game;
//! use goban_rules::position::Position;
//!
//! let mut game = Game::new(9);
//! assert!(game.add_stone(Position::new(3, 3)));
//! game.next_turn();
//!
//! assert_eq!(game.current_color(), Color::White);
//! assert_eq!(game.find_stone(Position::new(3, 3)), Some(Color::Black));
//! // occupied
//! assert!(!game.add_stone(Position::new(3, 3)));
//! ```

pub mod board;
pub mod capture;
pub mod constants;
pub mod game;
pub mod group;
pub mod gtp;
pub mod position;
pub mod rules;
pub mod sync;
