//! Integration tests for goban-rules
//!
//! These drive the public `Game` API the way a front end would: `add_stone`
//! for the side to move, then `next_turn` on success.

use goban_rules::board::Color;
use goban_rules::game::Game;
use goban_rules::position::Position;
use goban_rules::rules::MoveError;

// =============================================================================
// Helper functions for setting up test positions
// =============================================================================

fn p(row: i32, col: i32) -> Position {
    Position::new(row, col)
}

/// Play a sequence of moves, alternating Black and White, asserting each is
/// accepted. `None` passes.
fn setup_game(size: usize, moves: &[Option<(i32, i32)>]) -> Game {
    let mut game = Game::new(size);
    for mv in moves {
        if let Some((row, col)) = *mv {
            assert!(
                game.add_stone(p(row, col)),
                "setup move ({row},{col}) rejected for {}",
                game.current_color()
            );
        }
        game.next_turn();
    }
    game
}

/// Place black stones and white stones, passing for whichever side runs out
/// first. Leaves black to move when both lists have the same length.
fn setpos(size: usize, black: &[(i32, i32)], white: &[(i32, i32)]) -> Game {
    let mut moves = Vec::new();
    let max_len = black.len().max(white.len());
    for i in 0..max_len {
        moves.push(black.get(i).copied());
        moves.push(white.get(i).copied());
    }
    setup_game(size, &moves)
}

fn stone_count(game: &Game) -> usize {
    game.board_iter().into_iter().flatten().flatten().count()
}

// =============================================================================
// Occupancy and bounds
// =============================================================================

#[test]
fn test_occupied_points_always_rejected() {
    let mut game = setpos(9, &[(3, 3), (5, 5), (7, 2)], &[(3, 4), (6, 6), (1, 9)]);
    let before = game.board().clone();
    let occupied: Vec<Position> = before
        .player(Color::Black)
        .stones()
        .chain(before.player(Color::White).stones())
        .collect();

    for _ in 0..2 {
        for &pos in &occupied {
            assert!(!game.add_stone(pos), "{pos} should be occupied");
            assert_eq!(
                game.try_add_stone(pos),
                Err(MoveError::PositionOccupied(pos))
            );
        }
        game.next_turn();
    }
    assert_eq!(game.board(), &before);
}

#[test]
fn test_off_board_points_rejected() {
    let n = 9i32;
    let mut game = Game::new(n as usize);
    let mut outside = Vec::new();
    for k in -1..=n + 2 {
        outside.extend([p(0, k), p(n + 1, k), p(k, 0), p(k, n + 1), p(-5, k)]);
    }

    for pos in outside {
        assert!(!game.add_stone(pos), "{pos} should be off the board");
        assert_eq!(game.try_add_stone(pos), Err(MoveError::OutOfBounds(pos)));
    }
    assert_eq!(stone_count(&game), 0);
    assert_eq!(game.turn(), 1);
}

#[test]
fn test_corners_are_playable() {
    let mut game = Game::new(9);
    for pos in [p(1, 1), p(1, 9), p(9, 1), p(9, 9)] {
        assert!(game.add_stone(pos));
        game.next_turn();
    }
    assert_eq!(stone_count(&game), 4);
}

// =============================================================================
// Suicide
// =============================================================================

#[test]
fn test_suicide_into_surrounded_point() {
    // Four white stones around (5,5); black plays elsewhere in between.
    let mut game = setpos(9, &[(1, 1), (1, 3), (1, 5), (1, 7)], &[(4, 5), (6, 5), (5, 4), (5, 6)]);
    assert_eq!(game.current_color(), Color::Black);
    let before = game.board().clone();

    assert!(!game.add_stone(p(5, 5)));
    assert_eq!(game.try_add_stone(p(5, 5)), Err(MoveError::SuicideMove(p(5, 5))));
    assert_eq!(game.board(), &before);
    assert_eq!(game.find_stone(p(5, 5)), None);
}

#[test]
fn test_suicide_in_corner() {
    // White at (1,2) and (2,1); black (1,1) has no liberty and captures nothing.
    let mut game = setpos(9, &[(9, 9), (8, 8)], &[(1, 2), (2, 1)]);
    assert!(!game.add_stone(p(1, 1)));
    // the same point is fine for white
    game.next_turn();
    assert!(game.add_stone(p(1, 1)));
}

#[test]
fn test_filling_own_last_liberty_is_suicide() {
    // Black chain (1,1)-(1,2) under a white wall; (1,3) is its last liberty
    // once white holds (1,4).
    let mut game = setpos(9, &[(1, 1), (1, 2), (9, 9)], &[(2, 1), (2, 2), (2, 3)]);
    assert!(game.add_stone(p(9, 7)));
    game.next_turn();
    assert!(game.add_stone(p(1, 4)));
    game.next_turn();

    assert_eq!(game.try_add_stone(p(1, 3)), Err(MoveError::SuicideMove(p(1, 3))));
    assert_eq!(game.find_stone(p(1, 1)), Some(Color::Black));
    assert_eq!(game.find_stone(p(1, 2)), Some(Color::Black));
}

// =============================================================================
// Captures
// =============================================================================

#[test]
fn test_capture_enables_otherwise_suicidal_move() {
    // Black (1,2) touches only white stones. The corner stone (1,1) has
    // (1,2) as its last liberty, so it dies and hands black a liberty.
    let mut game = setpos(9, &[(2, 1), (9, 9), (9, 7)], &[(1, 1), (1, 3), (2, 2)]);
    assert_eq!(game.current_color(), Color::Black);

    let placement = game.try_add_stone(p(1, 2)).expect("capturing move is legal");
    assert_eq!(placement.captured.len(), 1);
    assert!(placement.captured.contains(&p(1, 1)));
    assert_eq!(game.find_stone(p(1, 1)), None);
    assert_eq!(game.find_stone(p(1, 2)), Some(Color::Black));
    assert_eq!(game.find_stone(p(1, 3)), Some(Color::White));
    assert_eq!(game.find_stone(p(2, 2)), Some(Color::White));
}

#[test]
fn test_capture_whole_domino() {
    // White domino (5,5)-(5,6) surrounded on all sides but (5,7).
    let mut game = setpos(
        9,
        &[(4, 5), (4, 6), (6, 5), (6, 6), (5, 4)],
        &[(5, 5), (5, 6), (1, 1), (1, 9), (9, 1)],
    );
    assert_eq!(game.current_color(), Color::Black);
    assert!(game.add_stone(p(5, 7)));

    assert_eq!(game.find_stone(p(5, 5)), None);
    assert_eq!(game.find_stone(p(5, 6)), None);
    assert_eq!(game.board().player(Color::White).stone_count(), 3);
}

#[test]
fn test_capture_two_groups_at_once() {
    let mut game = setpos(5, &[(1, 1), (2, 2), (2, 4), (1, 5)], &[(1, 2), (1, 4), (5, 5), (5, 1)]);
    let placement = game.try_add_stone(p(1, 3)).unwrap();
    assert_eq!(placement.captured.len(), 2);
    assert_eq!(game.find_stone(p(1, 2)), None);
    assert_eq!(game.find_stone(p(1, 4)), None);
}

#[test]
fn test_captured_point_can_be_replayed() {
    let mut game = setpos(9, &[(1, 2), (9, 9)], &[(1, 1), (9, 8)]);
    // black captures at (2,1)
    assert!(game.add_stone(p(2, 1)));
    assert_eq!(game.find_stone(p(1, 1)), None);
    game.next_turn();
    // white back into the corner would be suicide
    assert_eq!(game.try_add_stone(p(1, 1)), Err(MoveError::SuicideMove(p(1, 1))));
    game.next_turn();
    // black may fill it
    assert!(game.add_stone(p(1, 1)));
}

#[test]
fn test_large_ring_capture() {
    // White ring around an empty eye at (3,3), black fills the outside and
    // then the eye.
    let white = [(2, 2), (2, 3), (2, 4), (3, 2), (3, 4), (4, 2), (4, 3), (4, 4), (7, 6), (7, 7), (8, 6), (8, 8)];
    let outside = [
        (1, 2), (1, 3), (1, 4), (5, 2), (5, 3), (5, 4),
        (2, 1), (3, 1), (4, 1), (2, 5), (3, 5), (4, 5),
    ];
    let mut game = setpos(9, &outside, &white);

    let placement = game.try_add_stone(p(3, 3)).expect("filling the eye captures the ring");
    assert_eq!(placement.captured.len(), 8);
    assert!(placement.captured.contains(&p(2, 2)));
    assert_eq!(game.board().player(Color::White).stone_count(), 4);
}

// =============================================================================
// Turn order
// =============================================================================

#[test]
fn test_turn_alternation() {
    let mut game = Game::new(9);
    let mut expected = Color::Black;
    for k in 0..20 {
        assert_eq!(game.current_color(), expected);
        // no two of these points touch
        let pos = p(1 + 2 * (k / 5), 1 + 2 * (k % 5));
        assert!(game.add_stone(pos));
        assert_eq!(game.find_stone(pos), Some(expected));
        game.next_turn();
        expected = expected.opposite();
    }
    assert_eq!(game.turn(), 21);
}

#[test]
fn test_rejected_move_never_touches_opponent() {
    let mut game = setpos(9, &[(1, 2), (2, 1)], &[(5, 5), (5, 6)]);
    let black_before = game.board().player(Color::Black).clone();
    let white_before = game.board().player(Color::White).clone();

    // white into black's corner: suicide
    game.next_turn();
    assert_eq!(game.current_color(), Color::White);
    assert!(!game.add_stone(p(1, 1)));
    assert!(!game.add_stone(p(1, 2)));
    assert!(!game.add_stone(p(0, 0)));

    assert_eq!(game.board().player(Color::Black), &black_before);
    assert_eq!(game.board().player(Color::White), &white_before);
    assert_eq!(game.turn(), 6);
}

#[test]
fn test_board_iter_matches_find_stone() {
    let game = setpos(5, &[(1, 1), (3, 3)], &[(2, 4), (5, 5)]);
    let grid = game.board_iter();
    assert_eq!(grid.len(), 5);
    for (i, row) in grid.iter().enumerate() {
        assert_eq!(row.len(), 5);
        for (j, cell) in row.iter().enumerate() {
            assert_eq!(*cell, game.find_stone(p(i as i32 + 1, j as i32 + 1)));
        }
    }
    assert_eq!(grid[0][0], Some(Color::Black));
    assert_eq!(grid[1][3], Some(Color::White));
}
