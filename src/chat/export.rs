//! Transcript export to a single fixed-name text file

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

pub const DEFAULT_EXPORT_FILE: &str = "chat_history.txt";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Writes transcripts to one configured path; last export wins.
#[derive(Debug, Clone)]
pub struct ExportWriter {
    path: PathBuf,
}

impl Default for ExportWriter {
    fn default() -> Self {
        Self::new(DEFAULT_EXPORT_FILE)
    }
}

impl ExportWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the export file with `transcript`.
    ///
    /// Returns `Ok(None)` without touching the file when there is nothing
    /// to export.
    pub async fn export(&self, transcript: &str) -> Result<Option<PathBuf>, ExportError> {
        if transcript.trim().is_empty() {
            return Ok(None);
        }

        fs::write(&self.path, transcript)
            .await
            .map_err(|source| ExportError::Write {
                path: self.path.clone(),
                source,
            })?;

        tracing::info!(
            path = %self.path.display(),
            bytes = transcript.len(),
            "Transcript exported"
        );
        Ok(Some(self.path.clone()))
    }

    /// Current contents of the export file, if it exists
    pub async fn read(&self) -> Result<Option<String>, ExportError> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ExportError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// File name offered to browsers on download
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map_or_else(|| DEFAULT_EXPORT_FILE.to_string(), |n| n.to_string_lossy().into_owned())
    }
}
