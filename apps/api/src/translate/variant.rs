use serde_json::Value;
use tracing::warn;

use crate::config::Environment;
use crate::errors::AppError;
use crate::llm_client::prompts::{JSON_ONLY_INSTRUCTION, PLAIN_ANSWER_INSTRUCTION};
use crate::translate::extract::first_json_object;
use crate::translate::models::{SimpleTranslation, SuggestedTranslation};
use crate::translate::prompts::{SUGGESTIONS_TASK, TRANSLATION_PREAMBLE_TEMPLATE};

/// Which response the endpoint produces. Owns both the prompt template and
/// the way the provider's text is turned into a response body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseVariant {
    /// `{ translation, success }` from the trimmed provider text.
    #[default]
    Simple,
    /// The provider's JSON object, relayed unchanged.
    Suggestions,
}

impl ResponseVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            ResponseVariant::Simple => "simple",
            ResponseVariant::Suggestions => "suggestions",
        }
    }

    /// Builds the prompt for an already-trimmed input.
    pub fn build_prompt(self, text: &str) -> String {
        let preamble = TRANSLATION_PREAMBLE_TEMPLATE.replace("{text}", text);
        match self {
            ResponseVariant::Simple => format!("{preamble}\n\n{PLAIN_ANSWER_INSTRUCTION}"),
            ResponseVariant::Suggestions => {
                format!("{preamble}\n\n{SUGGESTIONS_TASK}\n\n{JSON_ONLY_INSTRUCTION}")
            }
        }
    }

    /// Turns the provider's generated text into the response body.
    pub fn shape_response(self, generated: &str, env: Environment) -> Result<Value, AppError> {
        match self {
            ResponseVariant::Simple => {
                let body = SimpleTranslation {
                    translation: generated.trim().to_string(),
                    success: true,
                };
                serde_json::to_value(body).map_err(|e| AppError::Internal {
                    details: env.diagnostic(&e),
                    source: e.into(),
                })
            }
            ResponseVariant::Suggestions => {
                let Some(candidate) = first_json_object(generated) else {
                    return Err(AppError::UpstreamFormat {
                        reason: "no JSON object found in generated text".to_string(),
                        details: env.diagnostic(generated),
                    });
                };

                let parsed: Value =
                    serde_json::from_str(candidate).map_err(|e| AppError::UpstreamFormat {
                        reason: format!("generated JSON did not parse: {e}"),
                        details: env.diagnostic(candidate),
                    })?;

                if let Some(problem) = SuggestedTranslation::shape_problem(&parsed) {
                    warn!("Provider JSON deviates from the suggestions shape: {problem}");
                }

                Ok(parsed)
            }
        }
    }
}
