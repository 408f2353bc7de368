//! UI events as explicit commands
//!
//! Each user-facing control (send, clear, react, download, theme) becomes a
//! `Command` dispatched to the session, so no transport decides behavior.

use super::session::{ChatSession, SubmitOutcome, Theme};
use super::{ExportError, ExportWriter, Reaction, ReactionTarget};
use crate::llm::LlmService;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Submit { text: String },
    Clear,
    React {
        target: ReactionTarget,
        reaction: Reaction,
    },
    Export,
    SetTheme { theme: Theme },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Submit { .. } => "submit",
            Command::Clear => "clear",
            Command::React { .. } => "react",
            Command::Export => "export",
            Command::SetTheme { .. } => "set_theme",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Submitted(SubmitOutcome),
    Cleared,
    Reacted { applied: bool },
    /// `None` when the transcript was empty and no file was written
    Exported(Option<PathBuf>),
    ThemeChanged(Theme),
}

impl ChatSession {
    /// Apply one command.
    ///
    /// Only export touches the filesystem, so it is the only command that
    /// can fail.
    pub async fn dispatch(
        &mut self,
        command: Command,
        llm: &dyn LlmService,
        exporter: &ExportWriter,
    ) -> Result<CommandOutcome, ExportError> {
        tracing::debug!(command = command.name(), "Dispatching command");

        let outcome = match command {
            Command::Submit { text } => CommandOutcome::Submitted(self.submit(llm, &text).await),
            Command::Clear => {
                self.reset();
                CommandOutcome::Cleared
            }
            Command::React { target, reaction } => CommandOutcome::Reacted {
                applied: self.react(target, reaction),
            },
            Command::Export => {
                let path = exporter.export(&self.transcript()).await?;
                if let Some(path) = &path {
                    self.record_export(path);
                }
                CommandOutcome::Exported(path)
            }
            Command::SetTheme { theme } => {
                self.set_theme(theme);
                CommandOutcome::ThemeChanged(theme)
            }
        };

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::testing::MockLlmClient;
    use crate::chat::DEFAULT_EXPORT_FILE;
    use crate::llm::LlmResponse;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_full_command_sequence() {
        let dir = TempDir::new().unwrap();
        let exporter = ExportWriter::new(dir.path().join(DEFAULT_EXPORT_FILE));
        let llm = MockLlmClient::new("mock");
        llm.queue_response(LlmResponse::from_text("Hello there"));
        let mut session = ChatSession::new(true);

        let outcome = session
            .dispatch(Command::Export, &llm, &exporter)
            .await
            .unwrap();
        assert_eq!(outcome, CommandOutcome::Exported(None));
        assert_eq!(session.last_export(), None);

        let outcome = session
            .dispatch(Command::Submit { text: "Hi".into() }, &llm, &exporter)
            .await
            .unwrap();
        assert_eq!(
            outcome,
            CommandOutcome::Submitted(SubmitOutcome::Replied { index: 0 })
        );

        let outcome = session
            .dispatch(
                Command::React {
                    target: ReactionTarget::Last,
                    reaction: Reaction::Like,
                },
                &llm,
                &exporter,
            )
            .await
            .unwrap();
        assert_eq!(outcome, CommandOutcome::Reacted { applied: true });

        let outcome = session
            .dispatch(Command::Export, &llm, &exporter)
            .await
            .unwrap();
        assert_eq!(
            outcome,
            CommandOutcome::Exported(Some(exporter.path().to_path_buf()))
        );
        assert_eq!(session.last_export(), Some(exporter.path()));
        assert_eq!(
            exporter.read().await.unwrap().as_deref(),
            Some("👤 Hi\n🤖 Hello there\n⭐ Reaction: 👍")
        );

        session
            .dispatch(Command::SetTheme { theme: Theme::Dark }, &llm, &exporter)
            .await
            .unwrap();
        session.dispatch(Command::Clear, &llm, &exporter).await.unwrap();
        assert!(session.conversation().is_empty());
        assert_eq!(session.theme(), Theme::Dark);

        // Clearing does not remove the previous export
        assert!(exporter.read().await.unwrap().is_some());
        assert_eq!(session.last_export(), Some(exporter.path()));
    }
}
