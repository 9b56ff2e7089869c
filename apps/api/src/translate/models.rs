use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;

/// Number of reply suggestions the suggestions variant asks for.
pub const SUGGESTION_COUNT: usize = 3;

/// Validated request: `text` is trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateRequest {
    pub text: String,
}

impl TranslateRequest {
    /// Parses a raw body. `text` is checked by hand so that a missing field,
    /// a wrong type and a blank value all surface as the same 400.
    pub fn from_body(body: &[u8]) -> Result<Self, AppError> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|_| AppError::Validation("Request body must be valid JSON".to_string()))?;

        let Value::Object(fields) = value else {
            return Err(AppError::Validation(
                "Request body must be a JSON object".to_string(),
            ));
        };

        match fields.get("text") {
            Some(Value::String(text)) if !text.trim().is_empty() => Ok(Self {
                text: text.trim().to_string(),
            }),
            Some(Value::String(_)) | Some(Value::Null) | None => {
                Err(AppError::Validation("Text is required".to_string()))
            }
            Some(_) => Err(AppError::Validation("Text must be a string".to_string())),
        }
    }
}

/// Simple variant response body.
#[derive(Debug, Serialize)]
pub struct SimpleTranslation {
    pub translation: String,
    pub success: bool,
}

/// Expected shape of the suggestions variant. Used only to check what the
/// provider sent; the parsed object is relayed as-is.
#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct SuggestedTranslation {
    pub translation: String,
    pub suggestions: Vec<SuggestedReply>,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct SuggestedReply {
    pub text: String,
    pub reason: String,
}

impl SuggestedTranslation {
    /// Describes how `value` deviates from the expected shape, if it does.
    pub fn shape_problem(value: &Value) -> Option<String> {
        match serde_json::from_value::<SuggestedTranslation>(value.clone()) {
            Err(e) => Some(e.to_string()),
            Ok(parsed) if parsed.suggestions.len() != SUGGESTION_COUNT => Some(format!(
                "expected {SUGGESTION_COUNT} suggestions, got {}",
                parsed.suggestions.len()
            )),
            Ok(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(body: Value) -> Result<String, AppError> {
        TranslateRequest::from_body(body.to_string().as_bytes()).map(|r| r.text)
    }

    #[test]
    fn test_text_is_trimmed() {
        assert_eq!(parse(json!({"text": "  Gak apa-apa kok \n"})).unwrap(), "Gak apa-apa kok");
    }

    #[test]
    fn test_rejects_missing_empty_and_blank() {
        for body in [
            json!({}),
            json!({"text": ""}),
            json!({"text": "   \t\n"}),
            json!({"text": null}),
        ] {
            assert!(matches!(parse(body), Err(AppError::Validation(_))));
        }
    }

    #[test]
    fn test_rejects_non_string() {
        for body in [json!({"text": 42}), json!({"text": ["a"]}), json!({"text": {"a": 1}})] {
            assert!(matches!(parse(body), Err(AppError::Validation(_))));
        }
    }

    #[test]
    fn test_rejects_malformed_body() {
        assert!(matches!(
            TranslateRequest::from_body(b"text=hello"),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            TranslateRequest::from_body(b"[\"text\"]"),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_shape_problem() {
        let good = json!({
            "translation": "t",
            "suggestions": [
                {"text": "a", "reason": "1"},
                {"text": "b", "reason": "2"},
                {"text": "c", "reason": "3"}
            ]
        });
        assert!(SuggestedTranslation::shape_problem(&good).is_none());

        let short = json!({"translation": "t", "suggestions": [{"text": "a", "reason": "1"}]});
        assert!(SuggestedTranslation::shape_problem(&short)
            .unwrap()
            .contains("expected 3"));

        assert!(SuggestedTranslation::shape_problem(&json!({"translation": "t"})).is_some());
    }
}
