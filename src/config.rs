// src/config.rs
use std::env;

use anyhow::Result;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash-latest:generateContent";

/// Runtime configuration, loaded once at startup and injected through
/// [`crate::state::AppState`]. The Gemini credential is never inlined in
/// source; it must come from the environment (or a `.env` file).
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub gemini_api_key: String,
    pub gemini_api_url: String,
    /// Key for the `/admin` surface. When unset, admin routes reject everything.
    pub admin_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let gemini_api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| anyhow::anyhow!("GEMINI_API_KEY environment variable not set"))?;

        Ok(Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            gemini_api_key,
            gemini_api_url: env::var("GEMINI_API_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_API_URL.to_string()),
            admin_key: env::var("ADMIN_API_KEY").ok(),
        })
    }
}
