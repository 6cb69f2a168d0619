use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default, so an empty environment starts a local gateway.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Ollama-compatible runtime, without the `/api` suffix.
    pub ollama_url: String,
    pub port: u16,
    /// Upper bound on a single chat completion. Local models can be slow.
    pub llm_timeout_secs: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            ollama_url: env_or("OLLAMA_URL", "http://localhost:11434")
                .trim_end_matches('/')
                .to_string(),
            port: env_or("PORT", "8000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            llm_timeout_secs: env_or("LLM_TIMEOUT_SECS", "300")
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
