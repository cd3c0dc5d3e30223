//! Conversation data types: validated utterances, bot replies, and the
//! append-only session transcript.

use std::fmt;

use carefind_core::types::HospitalRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ChatError;

// =============================================================================
// Utterance
// =============================================================================

/// A single user message that has passed boundary validation.
///
/// Invariant: trimmed, non-empty, and no longer than the limit it was
/// parsed with. The engine only accepts this type, so blank input never
/// reaches it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Utterance(String);

impl Utterance {
    pub fn parse(raw: &str, max_chars: usize) -> Result<Self, ChatError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if trimmed.chars().count() > max_chars {
            return Err(ChatError::MessageTooLong(max_chars));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_lowercase(&self) -> String {
        self.0.to_lowercase()
    }
}

impl AsRef<str> for Utterance {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Utterance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// BotReply
// =============================================================================

/// The engine's answer to one utterance.
///
/// `hospitals` borrows from the directory in its original insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct BotReply<'a> {
    pub text: &'static str,
    pub hospitals: Vec<&'a HospitalRecord>,
}

impl BotReply<'_> {
    pub fn has_suggestions(&self) -> bool {
        !self.hospitals.is_empty()
    }
}

// =============================================================================
// ChatTurn
// =============================================================================

/// One rendered unit of conversation. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: TurnKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum TurnKind {
    User {
        text: String,
    },
    Bot {
        text: String,
        hospitals: Vec<HospitalRecord>,
    },
    Confirmation {
        text: String,
    },
}

impl ChatTurn {
    fn new(kind: TurnKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            kind,
        }
    }

    pub fn user(utterance: &Utterance) -> Self {
        Self::new(TurnKind::User {
            text: utterance.as_str().to_string(),
        })
    }

    pub fn bot(reply: &BotReply<'_>) -> Self {
        Self::new(TurnKind::Bot {
            text: reply.text.to_string(),
            hospitals: reply.hospitals.iter().map(|h| (*h).clone()).collect(),
        })
    }

    pub fn confirmation(text: String) -> Self {
        Self::new(TurnKind::Confirmation { text })
    }

    pub fn text(&self) -> &str {
        match &self.kind {
            TurnKind::User { text } | TurnKind::Bot { text, .. } | TurnKind::Confirmation { text } => {
                text
            }
        }
    }

    /// Hospitals attached to a bot turn; empty for every other kind.
    pub fn hospitals(&self) -> &[HospitalRecord] {
        match &self.kind {
            TurnKind::Bot { hospitals, .. } => hospitals,
            _ => &[],
        }
    }
}

// =============================================================================
// Transcript
// =============================================================================

/// Append-only record of a session's turns. Lives as long as the session.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    turns: Vec<ChatTurn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn and return a reference to it.
    pub fn push(&mut self, turn: ChatTurn) -> &ChatTurn {
        self.turns.push(turn);
        &self.turns[self.turns.len() - 1]
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn last(&self) -> Option<&ChatTurn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
