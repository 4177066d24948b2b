//! JSON HTTP server for the chat backend.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/api/chat` | Chat message → translated reply |
//! | `POST` | `/api/upload_doc` | Upload a document and make it current |
//! | `POST` | `/api/reset_context` | Clear the current-document reference |
//! | `GET`  | `/health` | Health check (returns version) |
//!
//! # Request Validation
//!
//! Missing required fields and malformed JSON are rejected by the `Json`
//! extractor before a handler runs. Translation failure is the only domain
//! error, and it is returned as a warning string inside a normal `200` reply.
//!
//! # CORS
//!
//! Origins come from `[cors].allowed_origins` in the config. Credentials are
//! allowed, so the layer mirrors the request's methods and headers instead of
//! using wildcards (the CORS protocol forbids `*` alongside credentials).

use axum::{
    extract::State,
    http::HeaderValue,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use anyhow::{Context, Result};

use crate::chat;
use crate::config::{Config, CorsConfig};
use crate::context::ContextStore;
use crate::translate::{GoogleWebTranslator, Translator};

/// Shared application state passed to all route handlers via Axum's `State`
/// extractor. Constructed per server instance; there are no globals.
#[derive(Clone)]
struct AppState {
    store: Arc<ContextStore>,
    translator: Arc<dyn Translator>,
}

/// Starts the HTTP server with the production translator.
///
/// Binds to the address configured in `[server].bind` and runs until the
/// process is terminated.
pub async fn run_server(config: &Config) -> Result<()> {
    let translator: Arc<dyn Translator> = Arc::new(GoogleWebTranslator::new(&config.translation)?);
    run_server_with_translator(config, translator).await
}

/// Starts the HTTP server with a caller-supplied translator.
///
/// Like [`run_server`], but accepts any [`Translator`] implementation.
/// Tests use this to inject pass-through or failing collaborators.
pub async fn run_server_with_translator(
    config: &Config,
    translator: Arc<dyn Translator>,
) -> Result<()> {
    let state = AppState {
        store: Arc::new(ContextStore::new()),
        translator,
    };

    let cors = cors_layer(&config.cors)?;

    let app = Router::new()
        .route("/api/chat", post(handle_chat))
        .route("/api/upload_doc", post(handle_upload_doc))
        .route("/api/reset_context", post(handle_reset_context))
        .route("/health", get(handle_health))
        .layer(cors)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.server.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind))?;

    tracing::info!("chat backend listening on http://{}", config.server.bind);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the CORS layer from the configured origin allow-list.
fn cors_layer(config: &CorsConfig) -> Result<CorsLayer> {
    let mut origins = Vec::with_capacity(config.allowed_origins.len());
    for origin in &config.allowed_origins {
        origins.push(
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin: {}", origin))?,
        );
    }

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

// ============ POST /api/chat ============

/// JSON request body for `POST /api/chat`.
#[derive(Deserialize)]
struct ChatRequest {
    message: String,
    #[serde(default = "default_target_lang")]
    target_lang: String,
}

fn default_target_lang() -> String {
    "english".to_string()
}

/// JSON response body for `POST /api/chat`.
#[derive(Serialize)]
struct ChatResponse {
    message: ChatMessage,
}

#[derive(Serialize)]
struct ChatMessage {
    content: String,
}

/// Handler for `POST /api/chat`.
///
/// Builds the reply from the current document context and the user message.
/// Always returns `200`; translation failures arrive as a warning string in
/// `message.content`.
async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let reply = chat::chat_reply(
        &state.store,
        state.translator.as_ref(),
        &request.message,
        &request.target_lang,
    )
    .await;

    Json(ChatResponse {
        message: ChatMessage {
            content: reply.into_content(),
        },
    })
}

// ============ POST /api/upload_doc ============

/// JSON request body for `POST /api/upload_doc`.
#[derive(Deserialize)]
struct UploadDocRequest {
    filename: String,
    content: String,
}

/// JSON response body for `POST /api/upload_doc`.
#[derive(Serialize)]
struct UploadDocResponse {
    status: String,
    current_doc: String,
}

/// Handler for `POST /api/upload_doc`.
///
/// Stores the document and makes it current. Re-uploading the same filename
/// replaces its content.
async fn handle_upload_doc(
    State(state): State<AppState>,
    Json(request): Json<UploadDocRequest>,
) -> Json<UploadDocResponse> {
    state
        .store
        .set_current_doc(&request.filename, &request.content);

    tracing::info!(doc = %request.filename, "document uploaded");

    Json(UploadDocResponse {
        status: "success".to_string(),
        current_doc: request.filename,
    })
}

// ============ POST /api/reset_context ============

/// JSON response body for `POST /api/reset_context`.
#[derive(Serialize)]
struct ResetResponse {
    status: String,
}

/// Handler for `POST /api/reset_context`.
///
/// Clears the current-document reference. Takes no body (the frontend
/// POSTs without one). Uploaded documents stay in the store.
async fn handle_reset_context(State(state): State<AppState>) -> Json<ResetResponse> {
    state.store.reset();

    Json(ResetResponse {
        status: "context cleared".to_string(),
    })
}

// ============ GET /health ============

/// JSON response body for `GET /health`.
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

/// Handler for `GET /health`.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
