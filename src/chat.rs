//! Chat session core
//!
//! Conversation state, per-turn reactions, transcript rendering and export,
//! and the interaction loop that ties them to the model client. Everything
//! here is independent of the HTTP layer.

mod command;
mod conversation;
mod export;
mod reaction;
mod session;
mod transcript;

#[cfg(test)]
mod proptests;
#[cfg(test)]
pub mod testing;

pub use command::{Command, CommandOutcome};
pub use conversation::{Conversation, Turn};
pub use export::{ExportError, ExportWriter, DEFAULT_EXPORT_FILE};
pub use reaction::{Reaction, ReactionMap, ReactionTarget};
pub use session::{ChatSession, SubmitOutcome, Theme, ERROR_MARKER};
pub use transcript::render;
