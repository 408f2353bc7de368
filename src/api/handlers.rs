//! HTTP request handlers

use super::assets::{get_index_html, serve_static};
use super::types::{
    ChatRequest, ErrorResponse, ExportResponse, ReactionRequest, SessionView, ThemeRequest,
};
use super::AppState;
use crate::chat::{Command, CommandOutcome, ExportError};
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Root serves the chat page
        .route("/", get(serve_page))
        .route("/assets/*path", get(serve_static))
        // Session snapshot
        .route("/api/session", get(get_session))
        // Commands
        .route("/api/chat", post(send_chat))
        .route("/api/clear", post(clear_chat))
        .route("/api/reaction", post(add_reaction))
        .route("/api/theme", post(set_theme))
        .route("/api/export", post(export_transcript))
        .route("/api/export/download", get(download_export))
        // Version
        .route("/version", get(get_version))
        .with_state(state)
}

// ============================================================
// Page
// ============================================================

async fn serve_page() -> impl IntoResponse {
    match get_index_html() {
        Some(content) => Html(content).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Html("<h1>404 - chat page not found</h1>".to_string()),
        )
            .into_response(),
    }
}

// ============================================================
// Session
// ============================================================

async fn get_session(State(state): State<AppState>) -> Json<SessionView> {
    Json(state.view().await)
}

async fn send_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<SessionView>, AppError> {
    let (_, view) = state.dispatch(Command::Submit { text: req.text }).await?;
    Ok(Json(view))
}

async fn clear_chat(State(state): State<AppState>) -> Result<Json<SessionView>, AppError> {
    let (_, view) = state.dispatch(Command::Clear).await?;
    Ok(Json(view))
}

async fn add_reaction(
    State(state): State<AppState>,
    Json(req): Json<ReactionRequest>,
) -> Result<Json<SessionView>, AppError> {
    let command = Command::React {
        target: req.index.into(),
        reaction: req.reaction,
    };
    let (_, view) = state.dispatch(command).await?;
    Ok(Json(view))
}

async fn set_theme(
    State(state): State<AppState>,
    Json(req): Json<ThemeRequest>,
) -> Result<Json<SessionView>, AppError> {
    let (_, view) = state.dispatch(Command::SetTheme { theme: req.theme }).await?;
    Ok(Json(view))
}

// ============================================================
// Export
// ============================================================

async fn export_transcript(
    State(state): State<AppState>,
) -> Result<Json<ExportResponse>, AppError> {
    let (outcome, _) = state.dispatch(Command::Export).await?;
    let path = match outcome {
        CommandOutcome::Exported(path) => path.map(|p| p.display().to_string()),
        other => {
            return Err(AppError::Internal(format!(
                "Unexpected outcome for export: {other:?}"
            )))
        }
    };
    Ok(Json(ExportResponse { path }))
}

async fn download_export(State(state): State<AppState>) -> Result<Response, AppError> {
    let content = state
        .exported_transcript()
        .await?
        .ok_or_else(|| AppError::NotFound("Nothing has been exported yet".to_string()))?;

    let disposition = format!(
        "attachment; filename=\"{}\"",
        state.exporter().file_name()
    );
    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        content,
    )
        .into_response())
}

// ============================================================
// Version
// ============================================================

async fn get_version() -> &'static str {
    concat!("gemini-chat ", env!("CARGO_PKG_VERSION"))
}

// ============================================================
// Error Handling
// ============================================================

#[derive(Debug)]
enum AppError {
    NotFound(String),
    Internal(String),
}

impl From<ExportError> for AppError {
    fn from(e: ExportError) -> Self {
        tracing::error!(error = %e, "Export failed");
        AppError::Internal(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
