//! Interaction loop
//!
//! `Idle -> AwaitingReply -> Idle` per submitted message. The await on the
//! model client is the only suspension point, and the caller holds the
//! session exclusively across it, so submissions never interleave.

use super::{render, Conversation, Reaction, ReactionMap, ReactionTarget};
use crate::llm::{LlmErrorKind, LlmMessage, LlmRequest, LlmService};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix of the reply recorded when the model call fails
pub const ERROR_MARKER: &str = "❌ Error:";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Result of one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input, nothing sent
    Ignored,
    Replied { index: usize },
    /// The model call failed; the turn holds the error text
    Failed { index: usize, kind: LlmErrorKind },
}

/// State of the single chat session
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    conversation: Conversation,
    reactions: ReactionMap,
    theme: Theme,
    forward_context: bool,
    /// Path written by the most recent non-empty export in this process
    last_export: Option<PathBuf>,
}

impl ChatSession {
    pub fn new(forward_context: bool) -> Self {
        Self {
            forward_context,
            ..Self::default()
        }
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn reactions(&self) -> &ReactionMap {
        &self.reactions
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn forward_context(&self) -> bool {
        self.forward_context
    }

    /// Where this session last exported to; survives `reset`
    pub fn last_export(&self) -> Option<&Path> {
        self.last_export.as_deref()
    }

    pub(super) fn record_export(&mut self, path: &Path) {
        self.last_export = Some(path.to_path_buf());
    }

    /// Current transcript, recomputed on every call
    pub fn transcript(&self) -> String {
        render(&self.conversation, &self.reactions)
    }

    /// Messages sent to the model for `message`
    pub fn build_request(&self, message: &str) -> LlmRequest {
        let mut messages = if self.forward_context {
            self.conversation.to_llm_messages()
        } else {
            Vec::new()
        };
        messages.push(LlmMessage::user(message));
        LlmRequest::new(messages)
    }

    /// Send `message` to the model and record the turn.
    ///
    /// Model failures become the turn's reply; they are never returned as
    /// errors, so every accepted submission yields exactly one turn.
    pub async fn submit(&mut self, llm: &dyn LlmService, message: &str) -> SubmitOutcome {
        if message.trim().is_empty() {
            tracing::debug!("Ignoring empty message");
            return SubmitOutcome::Ignored;
        }

        let request = self.build_request(message);
        tracing::info!(
            turn = self.conversation.len(),
            context_messages = request.messages.len() - 1,
            "Submitting message"
        );

        match llm.complete(&request).await {
            Ok(response) => {
                let len = self.conversation.append(message, response.text);
                SubmitOutcome::Replied { index: len - 1 }
            }
            Err(e) => {
                tracing::warn!(
                    kind = ?e.kind,
                    error = %e,
                    "Model call failed; recording error reply"
                );
                let len = self
                    .conversation
                    .append(message, format!("{ERROR_MARKER} {e}"));
                SubmitOutcome::Failed {
                    index: len - 1,
                    kind: e.kind,
                }
            }
        }
    }

    /// Clear the conversation and every reaction keyed into it
    pub fn reset(&mut self) {
        tracing::info!(turns = self.conversation.len(), "Resetting conversation");
        self.conversation.reset();
        self.reactions.clear();
    }

    /// Attach a reaction; out-of-range targets are ignored
    pub fn react(&mut self, target: ReactionTarget, reaction: Reaction) -> bool {
        let applied = self
            .reactions
            .set(target, reaction, self.conversation.len());
        if !applied {
            tracing::debug!(
                ?target,
                len = self.conversation.len(),
                "Reaction target out of range"
            );
        }
        applied
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }
}
