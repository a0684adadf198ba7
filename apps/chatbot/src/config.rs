use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    /// Background document. Must exist.
    pub knowledge_base_path: PathBuf,
    /// Project data JSON. Tolerated when absent.
    pub project_data_path: PathBuf,
    pub landing_page_path: PathBuf,
    pub gemini_timeout: Option<Duration>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let gemini_timeout = match std::env::var("GEMINI_TIMEOUT_SECS") {
            Ok(raw) => Some(Duration::from_secs(
                raw.parse::<u64>()
                    .context("GEMINI_TIMEOUT_SECS must be a whole number of seconds")?,
            )),
            Err(_) => None,
        };

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            knowledge_base_path: path_env("KNOWLEDGE_BASE_PATH", "knowledge_base.txt"),
            project_data_path: path_env("PROJECT_DATA_PATH", "DB/input2.json"),
            landing_page_path: path_env("LANDING_PAGE_PATH", "templates/index.html"),
            gemini_timeout,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn path_env(key: &str, default: &str) -> PathBuf {
    std::env::var(key)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default))
}
