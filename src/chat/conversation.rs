//! Conversation store

use crate::llm::LlmMessage;
use chrono::{DateTime, Utc};

/// One user message paired with the reply shown for it
///
/// A turn is only appended once the reply (or its error placeholder) is
/// known, so `bot_reply` is always populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub user_message: String,
    pub bot_reply: String,
    pub created_at: DateTime<Utc>,
}

/// Ordered turns of the current session
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn and return the new length
    pub fn append(
        &mut self,
        user_message: impl Into<String>,
        bot_reply: impl Into<String>,
    ) -> usize {
        self.turns.push(Turn {
            user_message: user_message.into(),
            bot_reply: bot_reply.into(),
            created_at: Utc::now(),
        });
        self.turns.len()
    }

    /// Drop every turn.
    ///
    /// Reactions are keyed by position, so whoever owns the reaction map must
    /// clear it in the same step (see `ChatSession::reset`).
    pub fn reset(&mut self) {
        self.turns.clear();
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    #[allow(dead_code)] // Used in tests
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Index of the most recent turn
    #[allow(dead_code)] // API completeness
    pub fn last_index(&self) -> Option<usize> {
        self.turns.len().checked_sub(1)
    }

    /// Reinterpret the history as alternating user/model messages.
    ///
    /// Empty replies are skipped rather than sent as blank model turns.
    pub fn to_llm_messages(&self) -> Vec<LlmMessage> {
        let mut messages = Vec::with_capacity(self.turns.len() * 2);
        for turn in &self.turns {
            messages.push(LlmMessage::user(turn.user_message.clone()));
            if !turn.bot_reply.is_empty() {
                messages.push(LlmMessage::model(turn.bot_reply.clone()));
            }
        }
        messages
    }
}
