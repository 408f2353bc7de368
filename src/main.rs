//! Gemini Chat - minimal web chat over the Gemini API
//!
//! Serves a single chat page and a small JSON API. Each message is forwarded
//! to the model (with prior turns as context when enabled) and the reply is
//! appended to an in-memory conversation.

mod api;
mod chat;
mod config;
mod llm;

use api::{create_router, AppState};
use chat::ExportWriter;
use config::AppConfig;
use llm::{GeminiService, LlmService, LoggingService};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gemini_chat=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    // Configuration; a missing API key stops the process here
    let config = AppConfig::from_env().inspect_err(|e| {
        tracing::error!(error = %e, "Refusing to start");
    })?;

    tracing::info!(
        model = %config.model,
        port = config.port,
        forward_context = config.forward_context,
        export_path = %config.export_path.display(),
        "Configuration loaded"
    );

    // Model client lives for the whole process
    let gemini = GeminiService::new(
        config.api_key.clone(),
        &config.model,
        &config.base_url,
        config.request_timeout,
    )?;
    let llm: Arc<dyn LlmService> = Arc::new(LoggingService::new(Arc::new(gemini)));

    // Create application state
    let state = AppState::new(
        llm,
        ExportWriter::new(config.export_path.clone()),
        config.forward_context,
    );

    // Create router
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let compression = CompressionLayer::new()
        .gzip(true)
        .br(true)
        .deflate(true)
        .zstd(true);

    let app = create_router(state)
        .layer(cors)
        .layer(compression)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Gemini chat listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
