//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game;
pub mod history;
pub mod lines;
pub mod view;

pub use board::{Board, Cell, Player};
pub use game::{GameOutcome, GameState, IgnoreReason, Intent, Transition};
pub use history::History;
pub use lines::{LineAnalyzer, WINNING_LINES, evaluate_board};
pub use view::GameView;
