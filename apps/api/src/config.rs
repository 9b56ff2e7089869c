use std::fmt;

use anyhow::{bail, Context, Result};

use crate::translate::ResponseVariant;

/// Application configuration loaded from environment variables.
/// Fails at startup only on malformed values; a missing provider key is
/// reported per request instead.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<ApiKey>,
    pub environment: Environment,
    pub variant: ResponseVariant,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: optional_env("GEMINI_API_KEY").map(ApiKey::new),
            environment: optional_env("APP_ENV")
                .map(|v| Environment::parse(&v))
                .unwrap_or_default(),
            variant: match optional_env("TRANSLATE_VARIANT") {
                Some(v) => parse_variant(&v)?,
                None => ResponseVariant::default(),
            },
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads a variable, treating an empty or whitespace-only value as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_variant(value: &str) -> Result<ResponseVariant> {
    match value.to_ascii_lowercase().as_str() {
        "simple" => Ok(ResponseVariant::Simple),
        "suggestions" => Ok(ResponseVariant::Suggestions),
        other => bail!("TRANSLATE_VARIANT must be 'simple' or 'suggestions', got '{other}'"),
    }
}

/// Provider credential. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Deployment flavour. Only controls how much diagnostic detail error bodies carry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl Environment {
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            _ => Environment::Production,
        }
    }

    pub fn is_development(self) -> bool {
        self == Environment::Development
    }

    /// Returns the detail string in development, `None` otherwise.
    pub fn diagnostic(self, detail: impl fmt::Display) -> Option<String> {
        self.is_development().then(|| detail.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_debug_is_redacted() {
        let key = ApiKey::new("AIza-super-secret");
        let printed = format!("{key:?}");
        assert!(!printed.contains("super-secret"));
        assert_eq!(key.expose(), "AIza-super-secret");
    }

    #[test]
    fn test_environment_parse() {
        assert_eq!(Environment::parse("development"), Environment::Development);
        assert_eq!(Environment::parse("DEV"), Environment::Development);
        assert_eq!(Environment::parse("production"), Environment::Production);
        assert_eq!(Environment::parse("staging"), Environment::Production);
    }

    #[test]
    fn test_diagnostic_only_in_development() {
        assert_eq!(
            Environment::Development.diagnostic("boom"),
            Some("boom".to_string())
        );
        assert_eq!(Environment::Production.diagnostic("boom"), None);
    }

    #[test]
    fn test_parse_variant() {
        assert_eq!(parse_variant("simple").unwrap(), ResponseVariant::Simple);
        assert_eq!(
            parse_variant("Suggestions").unwrap(),
            ResponseVariant::Suggestions
        );
        assert!(parse_variant("verbose").is_err());
    }
}
