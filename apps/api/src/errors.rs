use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

/// Methods the translate endpoint answers with a real result.
pub const ALLOWED_METHODS: &[&str] = &["POST"];

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Method not allowed: {received}")]
    MethodNotAllowed { received: Method },

    #[error("Validation error: {0}")]
    Validation(String),

    /// Server-side misconfiguration. The cause is logged, never returned.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Upstream rejected credentials (status {status}): {message}")]
    UpstreamAuth { status: u16, message: String },

    #[error("Upstream quota exceeded: {0}")]
    UpstreamQuota(String),

    #[error("Upstream service error (status {status}): {message}")]
    UpstreamService { status: u16, message: String },

    #[error("Invalid upstream response: {reason}")]
    UpstreamFormat {
        reason: String,
        details: Option<String>,
    },

    #[error("Internal server error: {source}")]
    Internal {
        source: anyhow::Error,
        details: Option<String>,
    },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::MethodNotAllowed { received } => (
                StatusCode::METHOD_NOT_ALLOWED,
                json!({
                    "error": "Method not allowed",
                    "allowedMethods": ALLOWED_METHODS,
                    "receivedMethod": received.as_str(),
                }),
            ),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::Configuration(cause) => {
                tracing::error!("Configuration error: {cause}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Server configuration error" }),
                )
            }
            AppError::UpstreamAuth { status, message } => {
                tracing::error!("Provider rejected credentials ({status}): {message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Invalid or insufficient API credentials" }),
                )
            }
            AppError::UpstreamQuota(message) => {
                tracing::warn!("Provider quota exceeded: {message}");
                (
                    StatusCode::TOO_MANY_REQUESTS,
                    json!({ "error": "API quota exceeded, please try again later" }),
                )
            }
            AppError::UpstreamService { status, message } => {
                tracing::error!("Provider error ({status}): {message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Upstream AI service error" }),
                )
            }
            AppError::UpstreamFormat { reason, details } => {
                tracing::error!("Invalid upstream response: {reason}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    with_optional(
                        json!({ "error": "Invalid upstream response" }),
                        &[("message", Some(reason)), ("details", details.as_ref())],
                    ),
                )
            }
            AppError::Internal { source, details } => {
                tracing::error!("Internal error: {source:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    with_optional(
                        json!({ "error": "Internal server error" }),
                        &[("details", details.as_ref())],
                    ),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Adds each present field to a JSON object body; absent fields are omitted entirely.
fn with_optional(mut body: Value, fields: &[(&str, Option<&String>)]) -> Value {
    if let Value::Object(map) = &mut body {
        for (key, value) in fields {
            if let Some(value) = value {
                map.insert((*key).to_string(), Value::String((*value).clone()));
            }
        }
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_method_not_allowed_body() {
        let (status, body) = body_json(AppError::MethodNotAllowed {
            received: Method::DELETE,
        })
        .await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["allowedMethods"], json!(["POST"]));
        assert_eq!(body["receivedMethod"], "DELETE");
    }

    #[tokio::test]
    async fn test_configuration_error_hides_cause() {
        let (status, body) =
            body_json(AppError::Configuration("GEMINI_API_KEY is not set".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Server configuration error" }));
    }

    #[tokio::test]
    async fn test_quota_maps_to_429() {
        let (status, _) = body_json(AppError::UpstreamQuota("exhausted".into())).await;
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    }

    #[tokio::test]
    async fn test_upstream_service_does_not_relay_body() {
        let (status, body) = body_json(AppError::UpstreamService {
            status: 503,
            message: "backend overloaded: shard 7".into(),
        })
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.to_string().contains("shard 7"));
    }

    #[tokio::test]
    async fn test_internal_details_omitted_when_absent() {
        let (_, body) = body_json(AppError::Internal {
            source: anyhow::anyhow!("socket closed"),
            details: None,
        })
        .await;
        assert_eq!(body, json!({ "error": "Internal server error" }));
    }

    #[tokio::test]
    async fn test_format_error_carries_details_when_present() {
        let (_, body) = body_json(AppError::UpstreamFormat {
            reason: "no JSON object found".into(),
            details: Some("Here you go!".into()),
        })
        .await;
        assert_eq!(body["message"], "no JSON object found");
        assert_eq!(body["details"], "Here you go!");
    }
}
