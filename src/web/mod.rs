// Web server — Axum-based JSON API.
//
// Two routes: POST /check_text runs the moderation pipeline, GET /health
// answers liveness probes. CORS is wide open since the gateway is meant to
// sit behind whatever frontend wants to call it.
//
// Every pipeline failure becomes a JSON error body here; nothing escapes
// as an unhandled fault, and the server keeps serving after any of them.

use std::sync::Arc;

use anyhow::Result;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::model::traits::TextModel;
use crate::moderation::pipeline::{ModerationError, PARSE_FAILURE_MESSAGE};

pub mod handlers;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn TextModel>,
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(model: Arc<dyn TextModel>, bind: &str, port: u16) -> Result<()> {
    let state = AppState { model };

    let app = build_router(state);

    let addr = format!("{bind}:{port}");
    info!("Soot moderation gateway listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Build the router. Public so tests can drive it without binding a socket.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/check_text", post(handlers::check_text))
        .route("/health", get(health))
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Deployment health check — always returns 200 OK.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "status": "ok" })),
    )
}

impl IntoResponse for ModerationError {
    fn into_response(self) -> Response {
        match self {
            ModerationError::EmptyText => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": self.to_string() })),
            )
                .into_response(),
            ModerationError::MalformedReply => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "is_clean": false,
                    "message": PARSE_FAILURE_MESSAGE,
                })),
            )
                .into_response(),
            ModerationError::Provider(e) => {
                error!(error = %e, "Model call failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "error": e.to_string() })),
                )
                    .into_response()
            }
        }
    }
}
