//! Board size configuration.
//!
//! The default board size is controlled by Cargo features:
//! - `board9x9` (default): 9x9 board
//! - `board13x13`: 13x13 board
//! - `board19x19`: 19x19 board
//!
//! The size of an individual game is still chosen at runtime (see
//! [`Game::new`](crate::game::Game::new)); the feature only picks what the
//! binary starts with when `--size` is not given.
//!
//! ```sh
//! cargo build                                               # 9x9 (default)
//! cargo build --no-default-features --features board19x19  # 19x19
//! ```

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (NxN). Standard Go sizes are 9, 13, or 19.
#[cfg(feature = "board9x9")]
pub const DEFAULT_SIZE: usize = 9;

#[cfg(feature = "board13x13")]
pub const DEFAULT_SIZE: usize = 13;

#[cfg(feature = "board19x19")]
pub const DEFAULT_SIZE: usize = 19;

// Compile-time check: exactly one board size feature must be enabled
#[cfg(any(
    all(feature = "board9x9", feature = "board13x13"),
    all(feature = "board9x9", feature = "board19x19"),
    all(feature = "board13x13", feature = "board19x19"),
))]
compile_error!("Enable only one of 'board9x9', 'board13x13' or 'board19x19'");

#[cfg(not(any(feature = "board9x9", feature = "board13x13", feature = "board19x19")))]
compile_error!("Must enable exactly one board size feature: 'board9x9', 'board13x13' or 'board19x19'");

/// Smallest board the front ends accept.
pub const MIN_SIZE: usize = 1;

/// Largest board the front ends accept. GTP column letters run A..Z without
/// `I`, which addresses 25 columns.
pub const MAX_SIZE: usize = 25;

// =============================================================================
// Display
// =============================================================================

/// Black stone in board diagrams.
pub const BLACK_CHAR: char = 'X';

/// White stone in board diagrams.
pub const WHITE_CHAR: char = 'O';

/// Empty point in board diagrams.
pub const EMPTY_CHAR: char = '.';
