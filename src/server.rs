//! Axum router and endpoint handlers.
//!
//! Two routes: `POST /transform` runs one prompt-build + model call per
//! request, `GET /health` is the liveness probe. The permissive CORS layer
//! lets the browser extension and local dev pages call the service directly.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;
use tower_http::cors::{Any, CorsLayer};

use crate::ai::client::GeminiClient;
use crate::prompt;

/// Shared application state passed to handlers via axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub client: GeminiClient,
}

/// Request body for POST /transform.
#[derive(Deserialize)]
pub struct TransformRequest {
    pub text: String,
    pub disability_type: String,
    #[serde(default)]
    pub options: HashMap<String, bool>,
}

/// Response body for POST /transform.
#[derive(Serialize, Deserialize)]
pub struct TransformResponse {
    pub text: String,
}

/// Build the full axum router.
pub fn build_router(client: GeminiClient) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/transform", post(transform))
        .route("/health", get(health))
        .with_state(AppState { client })
        .layer(cors)
}

/// POST /transform — Rewrite text for the requested accessibility profile.
///
/// Builds the instruction prompt, awaits the single model call, and returns
/// the rewritten text. Any generation failure collapses to a 500 carrying
/// the failure's description; nothing is retried.
pub async fn transform(
    State(app): State<AppState>,
    Json(req): Json<TransformRequest>,
) -> Result<Json<TransformResponse>, (StatusCode, Json<Value>)> {
    let prompt = prompt::build_prompt(&req.text, &req.disability_type, &req.options);
    log::info!(
        "transform: profile={} flags={} chars={}",
        req.disability_type,
        req.options.len(),
        req.text.len()
    );

    match app.client.generate(&prompt).await {
        Ok(text) => Ok(Json(TransformResponse { text })),
        Err(e) => {
            log::error!("generation failed: {e}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "detail": format!("Model call failed: {e}") })),
            ))
        }
    }
}

/// GET /health — Liveness check, no side effects.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "OK" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_request_deserializes_with_options() {
        let json = r#"{"text":"Hi","disability_type":"adhd","options":{"chunking":true}}"#;
        let req: TransformRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.text, "Hi");
        assert_eq!(req.disability_type, "adhd");
        assert_eq!(req.options.get("chunking"), Some(&true));
    }

    #[test]
    fn transform_request_options_default_to_empty() {
        let json = r#"{"text":"Hi","disability_type":"dyslexia"}"#;
        let req: TransformRequest = serde_json::from_str(json).unwrap();
        assert!(req.options.is_empty());
    }

    #[test]
    fn transform_request_rejects_missing_text() {
        let json = r#"{"disability_type":"dyslexia"}"#;
        assert!(serde_json::from_str::<TransformRequest>(json).is_err());
    }
}
