use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

/// Whether the service runs with developer diagnostics enabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RuntimeMode {
    Development,
    #[default]
    Production,
}

impl RuntimeMode {
    /// Development mode adds a `stack` diagnostic to 500 responses.
    pub fn is_development(self) -> bool {
        self == RuntimeMode::Development
    }
}

impl FromStr for RuntimeMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(RuntimeMode::Development),
            "production" | "prod" => Ok(RuntimeMode::Production),
            other => Err(anyhow!(
                "APP_ENV must be 'development' or 'production', got '{other}'"
            )),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub port: u16,
    pub rust_log: String,
    pub runtime_mode: RuntimeMode,
    pub llm_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3001".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            runtime_mode: match std::env::var("APP_ENV") {
                Ok(v) => v.parse()?,
                Err(_) => RuntimeMode::default(),
            },
            llm_timeout_secs: std::env::var("LLM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "120".to_string())
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_mode_parses_known_values() {
        assert_eq!(
            "development".parse::<RuntimeMode>().unwrap(),
            RuntimeMode::Development
        );
        assert_eq!(" PROD ".parse::<RuntimeMode>().unwrap(), RuntimeMode::Production);
    }

    #[test]
    fn test_runtime_mode_rejects_unknown_value() {
        let err = "staging".parse::<RuntimeMode>().unwrap_err();
        assert!(err.to_string().contains("staging"));
    }

    #[test]
    fn test_runtime_mode_defaults_to_production() {
        assert!(!RuntimeMode::default().is_development());
    }
}
