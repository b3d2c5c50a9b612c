//! HTTP surface (axum).
//!
//! One method-agnostic resolve endpoint plus a health probe. This layer owns
//! the mapping from the core error taxonomy to HTTP statuses and the fixed
//! JSON envelope; no error escapes it as anything but a response.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use tglens_core::{
    config::Config,
    errors::Error,
    ports::Directory,
    resolver::Resolver,
    response::{self, ResponseRecord},
};

/// Fixed attribution strings carried in every envelope.
pub const DEVELOPER: &str = "Mr. Sam";
pub const NOT_FOUND_DEVELOPER: &str = "Tofazzal Hossain";

/// Shared application state threaded through all handlers.
///
/// Holds no mutable state; the directory handle is cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<Config>,
    pub directory: Arc<dyn Directory>,
}

/// Start the server and block until it exits.
pub async fn run_server(state: AppState) -> anyhow::Result<()> {
    let addr = format!("{}:{}", state.cfg.bind_addr, state.cfg.port);
    let app = build_router(state);

    info!("tglens listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // The endpoint reads query parameters regardless of verb.
        .route("/api/telegram", get(resolve).post(resolve))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Hosting-environment liveness probe.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "status": "ok" })),
    )
}

#[derive(Deserialize, Default)]
pub struct ResolveQuery {
    pub url: Option<String>,
}

/// GET/POST /api/telegram?url=... — resolve a username or t.me link.
async fn resolve(State(state): State<AppState>, Query(params): Query<ResolveQuery>) -> Response {
    let Some(raw) = params
        .url
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    else {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Please provide a Telegram URL or username in the 'url' parameter",
            DEVELOPER,
        );
    };

    match handle(&state, raw).await {
        Ok(record) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "ok": true,
                "developer": DEVELOPER,
                "result": record,
            })),
        )
            .into_response(),
        Err(Error::Validation(message)) => {
            tracing::warn!(url = raw, "rejected invalid query");
            error_response(StatusCode::BAD_REQUEST, &message, DEVELOPER)
        }
        Err(Error::NotFound) => {
            tracing::warn!(url = raw, "entity not found");
            error_response(
                StatusCode::NOT_FOUND,
                "Telegram entity not found",
                NOT_FOUND_DEVELOPER,
            )
        }
        Err(e) => {
            tracing::error!(error = %e, url = raw, "resolve failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error while fetching Telegram data",
                DEVELOPER,
            )
        }
    }
}

async fn handle(state: &AppState, raw: &str) -> tglens_core::Result<ResponseRecord> {
    let resolver = Resolver::new(state.directory.clone());
    let resolved = resolver.resolve(raw).await?;
    response::assemble(
        resolved,
        state.directory.as_ref(),
        &state.cfg.fallback_photo_url,
    )
    .await
}

fn error_response(status: StatusCode, message: &str, developer: &str) -> Response {
    (
        status,
        Json(serde_json::json!({
            "ok": false,
            "error": message,
            "developer": developer,
        })),
    )
        .into_response()
}
