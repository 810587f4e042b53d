//! Error types for the noughts crate

use thiserror::Error;

/// Main error type for the noughts crate
///
/// Game operations themselves never fail; these variants cover the edges
/// where text comes in or rendered output goes out.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("position {position} is out of bounds (must be 0-8)")]
    InvalidPosition { position: usize },

    #[error("invalid history: {reason}")]
    InvalidHistory { reason: String },

    #[error("unrecognised command '{input}' (expected a square 0-8, 'goto <n>', or 'reset')")]
    UnknownCommand { input: String },

    #[error("missing {part} in command '{input}'")]
    MissingArgument { part: String, input: String },

    #[error("invalid number '{value}' in command '{input}'")]
    InvalidNumber { value: String, input: String },

    #[error("line {line}: {source}")]
    ScriptLine {
        line: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
