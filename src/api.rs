//! HTTP API for the chat page
//!
//! Every mutating route turns its JSON body into a [`Command`] and answers
//! with a fresh [`SessionView`].

mod assets;
mod handlers;
mod types;

pub use handlers::create_router;
#[allow(unused_imports)] // Public API re-exports
pub use types::*;

use crate::chat::{ChatSession, Command, CommandOutcome, ExportError, ExportWriter};
use crate::llm::LlmService;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    session: Arc<Mutex<ChatSession>>,
    llm: Arc<dyn LlmService>,
    exporter: Arc<ExportWriter>,
}

impl AppState {
    pub fn new(llm: Arc<dyn LlmService>, exporter: ExportWriter, forward_context: bool) -> Self {
        Self {
            session: Arc::new(Mutex::new(ChatSession::new(forward_context))),
            llm,
            exporter: Arc::new(exporter),
        }
    }

    /// Run a command against the session and snapshot the result.
    ///
    /// The lock is held across the model call, which serializes
    /// submissions.
    pub async fn dispatch(
        &self,
        command: Command,
    ) -> Result<(CommandOutcome, SessionView), ExportError> {
        let mut session = self.session.lock().await;
        let outcome = session
            .dispatch(command, self.llm.as_ref(), &self.exporter)
            .await?;
        Ok((outcome, SessionView::new(&session, self.llm.model_id())))
    }

    pub async fn view(&self) -> SessionView {
        let session = self.session.lock().await;
        SessionView::new(&session, self.llm.model_id())
    }

    /// Contents of this session's last export.
    ///
    /// `None` until the session has exported, even if a file from an
    /// earlier run sits at the export path.
    pub async fn exported_transcript(&self) -> Result<Option<String>, ExportError> {
        let session = self.session.lock().await;
        if session.last_export().is_none() {
            return Ok(None);
        }
        self.exporter.read().await
    }

    pub fn exporter(&self) -> &ExportWriter {
        &self.exporter
    }
}
