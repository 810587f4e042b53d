//! Tic-tac-toe with a rewindable move history
//!
//! This crate provides:
//! - Board, win/draw evaluation and a linear snapshot history
//! - `GameState`, a reducer over click, history-select and reset intents
//! - A renderer port with text, JSON and in-memory adapters
//! - `Session`, which owns one game and one renderer
//! - The `noughts` command-line front end

pub mod adapters;
pub mod app;
pub mod cli;
pub mod error;
pub mod ports;
pub mod tictactoe;

pub use app::Session;
pub use error::{Error, Result};
pub use tictactoe::{Board, Cell, GameOutcome, GameState, GameView, Intent, Player, Transition};
