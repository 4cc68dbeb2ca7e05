// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::gemini::GeminiClient;
use crate::services::metrics_manager::MetricsManager;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub gemini: GeminiClient,
    pub metrics: MetricsManager,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let gemini = GeminiClient::new(&config.gemini_api_key, &config.gemini_api_url);
        Self {
            config,
            gemini,
            metrics: MetricsManager::new(),
        }
    }
}
