//! Linear snapshot history with a movable cursor

use serde::{Deserialize, Serialize};

use super::{Board, Player};

/// Board snapshots from the empty starting board up to the latest move.
///
/// The first snapshot is always the empty board. Recording a new snapshot
/// while an earlier one is selected discards everything after the selection,
/// so there is only ever one line of play.
///
/// Deserializing goes through [`HistoryRecord`] and rejects any record that
/// breaks these rules, so a loaded history can be indexed like a fresh one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HistoryRecord")]
pub struct History {
    snapshots: Vec<Board>,
    cursor: usize,
}

/// Unchecked wire form of a [`History`]
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryRecord {
    pub snapshots: Vec<Board>,
    pub cursor: usize,
}

impl TryFrom<HistoryRecord> for History {
    type Error = crate::Error;

    fn try_from(record: HistoryRecord) -> Result<Self, Self::Error> {
        let invalid = |reason: String| crate::Error::InvalidHistory { reason };

        let first = record
            .snapshots
            .first()
            .ok_or_else(|| invalid("no snapshots".to_string()))?;
        if *first != Board::new() {
            return Err(invalid("first snapshot is not the empty board".to_string()));
        }
        if record.cursor >= record.snapshots.len() {
            return Err(invalid(format!(
                "cursor {} past last snapshot {}",
                record.cursor,
                record.snapshots.len() - 1
            )));
        }

        for (i, pair) in record.snapshots.windows(2).enumerate() {
            let changed = pair[0].changed_positions(&pair[1]);
            let expected = Some(Player::for_index(i));
            let valid = match changed.as_slice() {
                [pos] => pair[0].is_empty(*pos) && pair[1].get(*pos).to_player() == expected,
                _ => false,
            };
            if !valid {
                return Err(invalid(format!(
                    "move {} is not a single {} mark on an empty square",
                    i + 1,
                    Player::for_index(i)
                )));
            }
        }

        Ok(Self {
            snapshots: record.snapshots,
            cursor: record.cursor,
        })
    }
}

impl History {
    /// History holding only the empty starting board
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            cursor: 0,
        }
    }

    /// Number of snapshots, including the starting board
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Never true: the starting board is always present
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the selected snapshot
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The selected snapshot
    pub fn current(&self) -> &Board {
        &self.snapshots[self.cursor]
    }

    /// All snapshots in play order
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Drop any snapshots after the cursor, append `board`, and select it.
    ///
    /// Returns how many snapshots were discarded.
    pub fn record(&mut self, board: Board) -> usize {
        let discarded = self.snapshots.len() - (self.cursor + 1);
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(board);
        self.cursor = self.snapshots.len() - 1;
        discarded
    }

    /// Move the cursor. Returns false, leaving the cursor alone, if `index`
    /// is past the last snapshot.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.snapshots.len() {
            return false;
        }
        self.cursor = index;
        true
    }

    /// Back to the single empty board
    pub fn reset(&mut self) {
        self.snapshots.truncate(1);
        self.snapshots[0] = Board::new();
        self.cursor = 0;
    }

    /// Selector label for a snapshot index
    pub fn label(index: usize) -> String {
        if index == 0 {
            "Game Start".to_string()
        } else {
            format!("Move {index}")
        }
    }

    /// Labels for every recorded snapshot
    pub fn labels(&self) -> Vec<String> {
        (0..self.snapshots.len()).map(Self::label).collect()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
