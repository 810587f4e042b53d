//! Turn-taking game state over a rewindable history

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::{
    board::{Board, Player},
    history::History,
    lines::evaluate_board,
    view::GameView,
};

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Status line shown once the game has ended
    pub fn message(self) -> String {
        match self {
            GameOutcome::Win(player) => format!("Player {player} Wins! 🎉"),
            GameOutcome::Draw => "It's a Draw!".to_string(),
        }
    }
}

/// A user action forwarded from the view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// A click on square 0-8
    PlaceMark(usize),
    /// A choice from the history selector
    SelectHistory(usize),
    Reset,
}

/// Why an intent left the state untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    SquareOutOfRange,
    SquareOccupied,
    GameOver,
    HistoryOutOfRange,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            IgnoreReason::SquareOutOfRange => "square must be 0-8",
            IgnoreReason::SquareOccupied => "square is already taken",
            IgnoreReason::GameOver => "game is over",
            IgnoreReason::HistoryOutOfRange => "no such history entry",
        };
        f.write_str(text)
    }
}

/// What an intent did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    Applied,
    Ignored(IgnoreReason),
}

impl Transition {
    pub fn is_applied(self) -> bool {
        matches!(self, Transition::Applied)
    }
}

/// Game state for one session: the history, which snapshot is in view, and
/// the outcome cached by the last forward move.
///
/// Whose turn it is never gets stored. It follows from the selected index
/// (see [`Player::for_index`]), so navigating history changes it too.
///
/// # Examples
///
/// ```
/// use noughts::tictactoe::{Cell, GameState};
///
/// let mut game = GameState::new();
/// game.place_mark(0);
/// assert_eq!(game.current_board().get(0), Cell::X);
/// assert_eq!(game.message(), "Player O's turn");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    history: History,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Fresh game: only the empty board, X to move
    pub fn new() -> Self {
        Self {
            history: History::new(),
            outcome: None,
        }
    }

    /// Route an intent to its operation
    pub fn apply(&mut self, intent: Intent) -> Transition {
        match intent {
            Intent::PlaceMark(square) => self.place_mark(square),
            Intent::SelectHistory(index) => self.select_history(index),
            Intent::Reset => self.reset(),
        }
    }

    /// Place the current player's mark on `square` of the viewed board.
    ///
    /// Ignored when the square is out of range or taken, or when the last
    /// forward move ended the game. Otherwise any snapshots after the viewed
    /// one are discarded before the new board is recorded.
    #[instrument(level = "debug", skip(self), fields(index = self.history.cursor()))]
    pub fn place_mark(&mut self, square: usize) -> Transition {
        if square >= 9 {
            debug!(square, "ignoring mark: out of range");
            return Transition::Ignored(IgnoreReason::SquareOutOfRange);
        }
        if self.outcome.is_some() {
            debug!(square, "ignoring mark: game over");
            return Transition::Ignored(IgnoreReason::GameOver);
        }
        let current = *self.history.current();
        if !current.is_empty(square) {
            debug!(square, "ignoring mark: occupied");
            return Transition::Ignored(IgnoreReason::SquareOccupied);
        }

        let player = self.to_move();
        let next = match current.with_mark(square, player) {
            Ok(board) => board,
            Err(_) => return Transition::Ignored(IgnoreReason::SquareOutOfRange),
        };

        let discarded = self.history.record(next);
        if discarded > 0 {
            debug!(discarded, "discarded abandoned continuation");
        }

        self.outcome = evaluate_board(&next);
        match self.outcome {
            Some(outcome) => info!(?outcome, moves = self.history.cursor(), "game over"),
            None => debug!(%player, square, next = %self.to_move(), "mark placed"),
        }

        Transition::Applied
    }

    /// View the snapshot at `index`.
    ///
    /// The cached outcome is cleared and the turn follows the index parity,
    /// even when the selected board is itself finished. A board rewound to
    /// this way accepts marks again on any empty square.
    #[instrument(level = "debug", skip(self))]
    pub fn select_history(&mut self, index: usize) -> Transition {
        if !self.history.select(index) {
            debug!(len = self.history.len(), "ignoring selection: out of range");
            return Transition::Ignored(IgnoreReason::HistoryOutOfRange);
        }
        self.outcome = None;
        debug!(to_move = %self.to_move(), "history selected");
        Transition::Applied
    }

    /// Back to the empty board with X to move
    #[instrument(level = "debug", skip(self))]
    pub fn reset(&mut self) -> Transition {
        self.history.reset();
        self.outcome = None;
        debug!("game reset");
        Transition::Applied
    }

    /// The board currently in view
    pub fn current_board(&self) -> &Board {
        self.history.current()
    }

    /// Index of the board in view
    pub fn current_index(&self) -> usize {
        self.history.cursor()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Outcome cached by the last forward move, cleared by navigation
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Player due to move on the board in view
    pub fn to_move(&self) -> Player {
        Player::for_index(self.history.cursor())
    }

    /// Status line for the view
    pub fn message(&self) -> String {
        match self.outcome {
            Some(outcome) => outcome.message(),
            None => format!("Player {}'s turn", self.to_move()),
        }
    }

    /// Read model handed to renderers
    pub fn view(&self) -> GameView {
        GameView {
            board: *self.current_board(),
            message: self.message(),
            history_length: self.history.len(),
            current_index: self.current_index(),
            is_terminal: self.is_terminal(),
            to_move: self.to_move(),
            outcome: self.outcome,
            history_labels: self.history.labels(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
