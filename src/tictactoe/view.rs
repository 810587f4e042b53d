//! Read model handed from the game state to renderers

use serde::{Deserialize, Serialize};

use super::{Board, GameOutcome, Player};

/// Everything a renderer needs to draw one frame.
///
/// `is_terminal` mirrors the cached outcome, not a fresh evaluation of
/// `board`; after rewinding onto a finished board it reads `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub board: Board,
    pub message: String,
    pub history_length: usize,
    pub current_index: usize,
    pub is_terminal: bool,
    pub to_move: Player,
    pub outcome: Option<GameOutcome>,
    pub history_labels: Vec<String>,
}

impl GameView {
    /// Label of the selected history entry
    pub fn current_label(&self) -> &str {
        self.history_labels
            .get(self.current_index)
            .map(String::as_str)
            .unwrap_or_default()
    }
}
