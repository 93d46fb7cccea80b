use crate::turn::{Author, Turn};
use serde::{Deserialize, Serialize};

/// One `{role, content}` pair of the history sent with each question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub role: Author,
    pub content: String,
}

impl From<&Turn> for HistoryEntry {
    fn from(turn: &Turn) -> Self {
        Self {
            role: turn.author,
            content: turn.text.clone(),
        }
    }
}

/// Append-only record of the turns exchanged in the current session.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    turns: Vec<Turn>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// Whole conversation, oldest first. No windowing.
    pub fn to_history(&self) -> Vec<HistoryEntry> {
        self.turns.iter().map(HistoryEntry::from).collect()
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
