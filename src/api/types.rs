//! API request and response types

use crate::chat::{ChatSession, Reaction, Theme};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to send a chat message
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub text: String,
}

/// Request to react to a turn; no index means the newest turn
#[derive(Debug, Deserialize)]
pub struct ReactionRequest {
    pub reaction: Reaction,
    #[serde(default)]
    pub index: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct ThemeRequest {
    pub theme: Theme,
}

/// One turn as the page renders it
#[derive(Debug, Serialize)]
pub struct TurnView {
    pub index: usize,
    pub user_message: String,
    pub bot_reply: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reaction: Option<Reaction>,
    pub created_at: DateTime<Utc>,
}

/// Snapshot of the session returned after every command
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub turns: Vec<TurnView>,
    pub transcript: String,
    pub theme: Theme,
    pub forward_context: bool,
    pub model: String,
    /// Always empty: the input box is cleared after each command
    pub input: String,
}

impl SessionView {
    pub fn new(session: &ChatSession, model: &str) -> Self {
        let turns = session
            .conversation()
            .turns()
            .iter()
            .enumerate()
            .map(|(index, turn)| TurnView {
                index,
                user_message: turn.user_message.clone(),
                bot_reply: turn.bot_reply.clone(),
                reaction: session.reactions().get(index),
                created_at: turn.created_at,
            })
            .collect();

        Self {
            turns,
            transcript: session.transcript(),
            theme: session.theme(),
            forward_context: session.forward_context(),
            model: model.to_string(),
            input: String::new(),
        }
    }
}

/// Response for export
#[derive(Debug, Serialize)]
pub struct ExportResponse {
    /// `None` when there was nothing to export
    pub path: Option<String>,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
