use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Text of the synthetic assistant turn produced when an exchange fails.
pub const ERROR_REPLY: &str = "There was an error";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    User,
    Assistant,
}

impl Author {
    /// Wire role used in the answering service's history.
    pub fn role(self) -> &'static str {
        match self {
            Author::User => "user",
            Author::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.role())
    }
}

/// Time-ordered identifier; v7 UUIDs carry random bits so two turns minted in
/// the same millisecond still differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TurnId(Uuid);

impl TurnId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for TurnId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TurnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub id: TurnId,
    pub text: String,
    pub author: Author,
    /// Display only. Ordering is the log's append order.
    pub created_at: DateTime<Utc>,
}

impl Turn {
    fn new(author: Author, text: String) -> Self {
        Self {
            id: TurnId::new(),
            text,
            author,
            created_at: Utc::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Author::User, text.into())
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Author::Assistant, text.into())
    }

    pub fn error_reply() -> Self {
        Self::assistant(ERROR_REPLY)
    }
}
