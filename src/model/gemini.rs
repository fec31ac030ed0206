// Google Gemini implementation.
//
// Calls the Generative Language API's generateContent method with a single
// user turn and returns the candidate text. Auth is a ?key= query parameter,
// the REST API's simplest form; no OAuth dance needed for server-side keys.
//
// API docs: https://ai.google.dev/api/generate-content

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::traits::TextModel;

/// Default base URL for the Generative Language API.
pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini text model client.
pub struct GeminiModel {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiModel {
    /// Create a new Gemini client for the given API key and model name.
    ///
    /// `base_url` defaults to `DEFAULT_API_URL` — pass a different URL for
    /// testing or proxies. `timeout` bounds each generateContent call so a
    /// hung provider can't pin a request forever.
    pub fn new(api_key: String, model: String, base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent("soot/0.1")
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            api_key,
        })
    }
}

#[async_trait]
impl TextModel for GeminiModel {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: None,
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .context("Failed to call Gemini API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Gemini API returned {}: {}", status, body);
        }

        let result: GenerateContentResponse = response
            .json()
            .await
            .context("Failed to parse Gemini API response")?;

        let text = completion_text(&result).context("Gemini returned no text candidates")?;

        debug!(
            model = %self.model,
            reply_len = text.len(),
            "Gemini call complete"
        );

        Ok(text)
    }
}

/// Extract the completion from a generateContent response.
///
/// The completion is the concatenation of the first candidate's text parts.
/// Returns None when the response carries no candidates or the first
/// candidate has no text parts (e.g. a safety block).
pub fn completion_text(response: &GenerateContentResponse) -> Option<String> {
    let content = response.candidates.first()?.content.as_ref()?;
    let mut out = String::new();
    let mut saw_text = false;
    for part in &content.parts {
        if let Some(text) = &part.text {
            out.push_str(text);
            saw_text = true;
        }
    }
    saw_text.then_some(out)
}

// --- Gemini API request/response types ---

#[derive(Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}
