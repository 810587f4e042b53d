//! Parsing typed commands into intents.
//!
//! Accepted lines (case-insensitive, `#` starts a comment):
//!
//! - `4`, `play 4`, `click 4`: place a mark
//! - `goto 2`, `select 2`, `history 2`: view a history entry
//! - `reset`, `new`: start over
//! - `quit`, `exit`, `q`: leave the interactive loop

use crate::{Error, Result, tictactoe::Intent};

/// One parsed input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Intent(Intent),
    Quit,
}

/// Parse one line. Blank lines and comments give `Ok(None)`.
///
/// # Errors
///
/// Returns an error naming the line if the verb is unknown or its argument
/// is missing or not a number.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let content = line.split('#').next().unwrap_or_default().trim();
    if content.is_empty() {
        return Ok(None);
    }

    let lowered = content.to_ascii_lowercase();
    let mut words = lowered.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let argument = words.next();

    let unknown = || Error::UnknownCommand {
        input: content.to_string(),
    };
    if words.next().is_some() {
        return Err(unknown());
    }

    let command = match (verb, argument) {
        ("quit" | "exit" | "q", None) => Command::Quit,
        ("reset" | "new", None) => Command::Intent(Intent::Reset),
        ("play" | "click" | "mark", _) => {
            Command::Intent(Intent::PlaceMark(number(argument, "square", content)?))
        }
        ("goto" | "select" | "history", _) => {
            Command::Intent(Intent::SelectHistory(number(argument, "index", content)?))
        }
        (bare, None) if bare.chars().all(|c| c.is_ascii_digit()) => {
            Command::Intent(Intent::PlaceMark(number(Some(bare), "square", content)?))
        }
        _ => return Err(unknown()),
    };

    Ok(Some(command))
}

fn number(argument: Option<&str>, part: &str, input: &str) -> Result<usize> {
    let value = argument.ok_or_else(|| Error::MissingArgument {
        part: part.to_string(),
        input: input.to_string(),
    })?;
    value.parse().map_err(|_| Error::InvalidNumber {
        value: value.to_string(),
        input: input.to_string(),
    })
}

/// Parse a whole script into intents, stopping at the first `quit`.
///
/// # Errors
///
/// Returns [`Error::ScriptLine`] with the 1-based line number of the first
/// line that fails to parse.
pub fn parse_script(text: &str) -> Result<Vec<Intent>> {
    let mut intents = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let parsed = parse_command(line).map_err(|source| Error::ScriptLine {
            line: i + 1,
            source: Box::new(source),
        })?;
        match parsed {
            Some(Command::Intent(intent)) => intents.push(intent),
            Some(Command::Quit) => break,
            None => {}
        }
    }
    Ok(intents)
}

/// Parse a comma-separated list of squares, e.g. `"0,1,3,4,6"`.
///
/// # Errors
///
/// Returns an error if any entry is not a number.
pub fn parse_move_list(list: &str) -> Result<Vec<Intent>> {
    list.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| number(Some(entry), "square", list).map(Intent::PlaceMark))
        .collect()
}
