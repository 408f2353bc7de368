//! Server configuration from environment variables

use crate::chat::DEFAULT_EXPORT_FILE;
use crate::llm::DEFAULT_BASE_URL;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_PORT: u16 = 7860;
const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,
    #[error("Invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub port: u16,
    pub forward_context: bool,
    pub export_path: PathBuf,
    pub request_timeout: Duration,
}

// Hand-written so the key never lands in logs
impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("port", &self.port)
            .field("forward_context", &self.forward_context)
            .field("export_path", &self.export_path)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup("GEMINI_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let port = parse_var(&lookup, "CHAT_PORT", DEFAULT_PORT, |v| v.parse::<u16>().ok())?;
        let forward_context = parse_var(&lookup, "CHAT_FORWARD_CONTEXT", true, parse_bool)?;
        let timeout_secs = parse_var(
            &lookup,
            "CHAT_REQUEST_TIMEOUT_SECS",
            DEFAULT_TIMEOUT_SECS,
            |v| v.parse::<u64>().ok().filter(|s| *s > 0),
        )?;

        Ok(Self {
            api_key,
            model: lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: lookup("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            port,
            forward_context,
            export_path: lookup("CHAT_EXPORT_PATH")
                .map_or_else(|| PathBuf::from(DEFAULT_EXPORT_FILE), PathBuf::from),
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(value) => parse(value.trim()).ok_or(ConfigError::Invalid { var, value }),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
