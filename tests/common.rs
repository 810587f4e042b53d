//! Common test utilities for the noughts test suite.

#![allow(dead_code)]

use noughts::tictactoe::{Board, GameState, Transition};

/// Play squares in order from a fresh game, asserting every mark lands.
pub fn play(squares: &[usize]) -> GameState {
    let mut game = GameState::new();
    play_on(&mut game, squares);
    game
}

/// Play squares in order on an existing game, asserting every mark lands.
pub fn play_on(game: &mut GameState, squares: &[usize]) {
    for &square in squares {
        assert_eq!(
            game.place_mark(square),
            Transition::Applied,
            "expected mark on {square} to be applied"
        );
    }
}

/// Parse a board literal such as `"XO./.X./..O"`.
pub fn board(literal: &str) -> Board {
    Board::from_string(literal).expect("test board literal should parse")
}

/// Check the snapshot invariants: empty start, one new mark per step,
/// marks alternate starting with X.
pub fn assert_history_well_formed(game: &GameState) {
    let snapshots = game.history().snapshots();
    assert_eq!(snapshots[0], Board::new(), "history must start empty");

    for (i, pair) in snapshots.windows(2).enumerate() {
        let changed = pair[0].changed_positions(&pair[1]);
        assert_eq!(changed.len(), 1, "step {} changed {:?}", i + 1, changed);
        let pos = changed[0];
        assert!(pair[0].is_empty(pos), "step {} overwrote a mark", i + 1);
        assert_eq!(
            pair[1].get(pos).to_player(),
            Some(noughts::Player::for_index(i)),
            "step {} placed the wrong mark",
            i + 1
        );
    }
}
