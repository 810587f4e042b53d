//! Winning line analysis for Tic-Tac-Toe

use tracing::instrument;

use super::{Board, Cell, GameOutcome, Player};

/// Winning line indices on the 3x3 board, in scan order
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// First completed line in scan order, with the mark that completed it
    pub fn winning_line(cells: &[Cell; 9]) -> Option<(Player, [usize; 3])> {
        WINNING_LINES.iter().find_map(|&[a, b, c]| {
            let mark = cells[a].to_player()?;
            (cells[a] == cells[b] && cells[a] == cells[c]).then_some((mark, [a, b, c]))
        })
    }
}

/// Classify a board: a win for whoever completed the first line found, a
/// draw when the board is full without a line, `None` while play continues.
#[instrument(level = "trace", skip(board), fields(board = %board.encode()))]
pub fn evaluate_board(board: &Board) -> Option<GameOutcome> {
    if let Some((winner, _)) = LineAnalyzer::winning_line(&board.cells) {
        return Some(GameOutcome::Win(winner));
    }
    board.is_full().then_some(GameOutcome::Draw)
}
