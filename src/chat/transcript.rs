//! Transcript rendering
//!
//! The rendered string is both what the history panel shows and exactly
//! what gets exported, so it must stay deterministic: no timestamps, and
//! reactions are looked up by index in an ordered map.

use super::{Conversation, ReactionMap, Turn};

const USER_PREFIX: &str = "👤 ";
const BOT_PREFIX: &str = "🤖 ";
const REACTION_PREFIX: &str = "⭐ Reaction: ";

/// Render one block per turn, newline-joined. Empty conversation renders `""`.
pub fn render(conversation: &Conversation, reactions: &ReactionMap) -> String {
    conversation
        .turns()
        .iter()
        .enumerate()
        .map(|(index, turn)| render_turn(turn, reactions, index))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_turn(turn: &Turn, reactions: &ReactionMap, index: usize) -> String {
    let block = format!(
        "{USER_PREFIX}{}\n{BOT_PREFIX}{}",
        turn.user_message, turn.bot_reply
    );
    match reactions.get(index) {
        Some(reaction) => format!("{block}\n{REACTION_PREFIX}{reaction}"),
        None => block,
    }
}
