// src/message.rs
use serde::{Deserialize, Deserializer, Serialize};

/// Supported reply languages. Anything the client sends that we don't
/// recognise is treated as English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "ur")]
    Ur,
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(match tag.as_str() {
            "ur" => Language::Ur,
            _ => Language::En,
        })
    }
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ur => "ur",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub language: Language,
    /// Free-form label from the client ("mental_health_support" in practice).
    /// Logged, not interpreted.
    #[serde(default)]
    pub context: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    /// Present when `response` is an offline fallback rather than model output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
