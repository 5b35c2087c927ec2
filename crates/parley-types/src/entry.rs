//! Conversation history entries.
//!
//! A [`ChatEntry`] is one line of the single global conversation: either the
//! user's message, the upstream service's reply, or a placeholder recorded
//! when the upstream call failed.

use serde::{Deserialize, Serialize};

use std::fmt;

/// Who produced a history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryRole {
    User,
    Ai,
    Error,
}

impl fmt::Display for EntryRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryRole::User => write!(f, "user"),
            EntryRole::Ai => write!(f, "ai"),
            EntryRole::Error => write!(f, "error"),
        }
    }
}

/// A single immutable record in the conversation log.
///
/// Serializes as `{"role": "user", "text": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatEntry {
    pub role: EntryRole,
    pub text: String,
}

impl ChatEntry {
    pub fn new(role: EntryRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(EntryRole::User, text)
    }

    pub fn ai(text: impl Into<String>) -> Self {
        Self::new(EntryRole::Ai, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(EntryRole::Error, text)
    }
}
