use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, version and the active response variant.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "subtext-api",
        "variant": state.config.variant.as_str(),
        "credentialConfigured": state.config.gemini_api_key.is_some(),
    }))
}
