// src/services/gemini.rs
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::message::Language;

const PERSONA_EN: &str = "You are SukoonBot, a compassionate and experienced mental health counselor specifically trained for South Asian communities. You use CBT, DBT, and trauma-informed care techniques. Always respond in English and be culturally sensitive. Keep responses supportive, empathetic, and helpful. Limit responses to 2-3 paragraphs.";

const PERSONA_UR: &str = "آپ ایک ہمدرد اور تجربہ کار ذہنی صحت کے مشیر ہیں جو جنوبی ایشیائی کمیونٹی کے لیے خصوصی طور پر تربیت یافتہ ہیں۔ آپ CBT، DBT، اور trauma-informed care کی تکنیکوں کا استعمال کرتے ہیں۔ ہمیشہ اردو میں جواب دیں اور ثقافتی حساسیت کا خیال رکھیں۔ آپ کا نام سکون بوٹ ہے۔";

const BLOCK_MEDIUM_AND_ABOVE: &str = "BLOCK_MEDIUM_AND_ABOVE";

const SAFETY_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

/// Everything that can go wrong talking to Gemini. The chat route treats all
/// three variants identically (fallback reply, HTTP 200).
#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("request to Gemini failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Gemini API returned status {0}")]
    Status(StatusCode),

    #[error("Gemini response contained no candidate text")]
    EmptyResponse,
}

pub struct GeminiClient {
    client: Client,
    api_key: String,
    api_url: String,
}

impl GeminiClient {
    pub fn new(api_key: &str, api_url: &str) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            api_url: api_url.to_string(),
        }
    }

    /// Single-shot generateContent call: one request, one candidate, no retries.
    pub async fn generate_reply(
        &self,
        message: &str,
        language: Language,
    ) -> Result<String, GeminiError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_prompt(message, language),
                }],
            }],
            generation_config: GenerationConfig::default(),
            safety_settings: SAFETY_CATEGORIES
                .iter()
                .map(|category| SafetySetting {
                    category,
                    threshold: BLOCK_MEDIUM_AND_ABOVE,
                })
                .collect(),
        };

        let url = format!("{}?key={}", self.api_url, self.api_key);
        let response = self.client.post(&url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, %body, "Gemini API returned an error");
            return Err(GeminiError::Status(status));
        }

        let body: GenerateContentResponse = response.json().await?;
        body.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
            .map(|p| p.text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(GeminiError::EmptyResponse)
    }
}

fn build_prompt(message: &str, language: Language) -> String {
    let persona = match language {
        Language::En => PERSONA_EN,
        Language::Ur => PERSONA_UR,
    };
    format!("{persona}\n\nUser message: {message}\n\nPlease provide a supportive and helpful response:")
}

// Wire types for the generateContent REST API (camelCase on the wire).

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
    safety_settings: Vec<SafetySetting>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_k: u32,
    top_p: f32,
    max_output_tokens: u32,
    candidate_count: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 1024,
            candidate_count: 1,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SafetySetting {
    category: &'static str,
    threshold: &'static str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}
