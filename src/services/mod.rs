pub mod fallback;
pub mod gemini;
pub mod metrics_manager;
