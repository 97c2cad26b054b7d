//! HTTP adapter: maps inbound requests to router calls and results back to
//! JSON responses. All decision logic lives in `routing`.

use crate::config::Config;
use crate::routing::TranslationRouter;
use crate::security;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub struct AppState {
    pub router: TranslationRouter,
    pub config: Config,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(router: TranslationRouter, config: Config) -> Self {
        Self {
            router,
            config,
            started_at: Utc::now(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TranslateRequest {
    #[serde(default)]
    q: String,
    #[serde(default = "default_source")]
    source: String,
    #[serde(default = "default_target")]
    target: String,
}

fn default_source() -> String {
    "en".to_string()
}

fn default_target() -> String {
    "vi".to_string()
}

#[derive(Debug, Serialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

/// Build the application router with CORS, tracing, and all routes.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health))
        .route("/languages", get(languages))
        .route("/metrics", get(metrics))
        .route("/translate", post(translate))
        .fallback(not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

async fn health(State(state): State<Arc<AppState>>) -> Response {
    Json(serde_json::json!({
        "status": "ok",
        "engine": "argos-translate",
        "started_at": state.started_at.to_rfc3339(),
    }))
    .into_response()
}

async fn languages(State(state): State<Arc<AppState>>) -> Response {
    let languages = state.router.routable_pairs().await;
    Json(serde_json::json!({ "languages": languages })).into_response()
}

async fn metrics(State(state): State<Arc<AppState>>) -> Response {
    Json(state.router.report()).into_response()
}

async fn translate(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: String,
) -> Response {
    if let Some(expected) = &state.config.api_key {
        let provided = headers
            .get("x-api-key")
            .and_then(|value| value.to_str().ok())
            .unwrap_or("");
        if !security::constant_time_compare(provided, expected) {
            return error_response(StatusCode::UNAUTHORIZED, "Invalid API key");
        }
    }

    let request: TranslateRequest = match serde_json::from_str(&body) {
        Ok(request) => request,
        Err(_) => return error_response(StatusCode::BAD_REQUEST, "Invalid JSON"),
    };

    if request.q.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "No text provided");
    }

    match state
        .router
        .translate(&request.q, &request.source, &request.target)
        .await
    {
        Ok(translated) => Json(TranslateResponse {
            translated_text: translated,
        })
        .into_response(),
        // Routing and engine failures map to 500; the error kinds carry
        // human-readable messages and leak no internals
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()),
    }
}

async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}
