//! Axum route handler for the translate endpoint.

use std::time::Instant;

use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::Environment;
use crate::errors::AppError;
use crate::llm_client::LlmError;
use crate::state::AppState;
use crate::translate::models::TranslateRequest;

/// POST /api/translate (also reachable on any unmatched path)
///
/// OPTIONS is acknowledged with an empty 200; every other method is a 405.
pub async fn handle_translate(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Result<Response, AppError> {
    match method {
        Method::OPTIONS => return Ok(StatusCode::OK.into_response()),
        Method::POST => {}
        ref received => {
            return Err(AppError::MethodNotAllowed {
                received: received.clone(),
            })
        }
    }

    let request_id = Uuid::new_v4();
    let env = state.config.environment;
    let variant = state.config.variant;

    let request = TranslateRequest::from_body(&body)?;

    let api_key = state.config.gemini_api_key.as_ref().ok_or_else(|| {
        AppError::Configuration("GEMINI_API_KEY not found in environment variables".to_string())
    })?;

    let prompt = variant.build_prompt(&request.text);
    info!(
        %request_id,
        %method,
        variant = variant.as_str(),
        input_chars = request.text.chars().count(),
        "Translating"
    );

    let started = Instant::now();
    let generated = state
        .llm
        .complete(api_key, &prompt, &state.generation)
        .await
        .map_err(|e| {
            let upstream_status = match &e {
                LlmError::Api { status, .. } => Some(*status),
                _ => None,
            };
            warn!(
                %request_id,
                %method,
                upstream_status,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Provider call failed"
            );
            map_llm_error(e, env)
        })?;

    info!(
        %request_id,
        elapsed_ms = started.elapsed().as_millis() as u64,
        output_chars = generated.chars().count(),
        "Provider call succeeded"
    );

    let body = variant.shape_response(&generated, env)?;
    Ok(Json(body).into_response())
}

/// Maps a provider failure to the caller-facing error category.
fn map_llm_error(err: LlmError, env: Environment) -> AppError {
    match err {
        LlmError::Api { status, message } => match status {
            401 | 403 => AppError::UpstreamAuth { status, message },
            429 => AppError::UpstreamQuota(message),
            _ => AppError::UpstreamService { status, message },
        },
        LlmError::Parse(e) => AppError::UpstreamFormat {
            reason: "provider payload did not decode".to_string(),
            details: env.diagnostic(&e),
        },
        LlmError::EmptyContent => AppError::UpstreamFormat {
            reason: "provider returned no candidate text".to_string(),
            details: None,
        },
        LlmError::Http(e) => AppError::Internal {
            details: env.diagnostic(&e),
            source: e.into(),
        },
    }
}
