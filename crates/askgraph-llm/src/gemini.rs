//! Google Gemini client for text generation.
//!
//! Calls `models/{model}:generateContent` with a single user turn and
//! returns the text of the first candidate.

use std::time::Duration;

use anyhow::{Context, Result};
use askgraph_core::TextGenerator;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default Gemini API URL.
pub const DEFAULT_GEMINI_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default generation model.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Gemini generation client.
#[derive(Clone)]
pub struct GeminiClient {
    base_url: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<OutPart<'a>>,
}

#[derive(Serialize)]
struct OutPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<InPart>,
}

#[derive(Deserialize)]
struct InPart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

impl GeminiClient {
    pub fn new(base_url: &str, model: &str, api_key: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
            client,
        })
    }

    /// Check that the API key can see the configured model.
    ///
    /// `Ok(false)` means the service answered but does not know the model.
    /// Transport failures and other error statuses (a rejected key, say)
    /// are returned as errors.
    pub async fn health_check(&self) -> Result<bool> {
        let response = self.client
            .get(format!("{}/models/{}", self.base_url, self.model))
            .header("x-goog-api-key", &self.api_key)
            .send()
            .await
            .context("Failed to connect to Gemini")?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(false);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Gemini API error ({}): {}", status, body);
        }
        Ok(true)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![OutPart { text: prompt }],
            }],
        };

        let response = self.client
            .post(format!("{}/models/{}:generateContent", self.base_url, self.model))
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to connect to Gemini")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Gemini API error ({}): {}", status, body);
        }

        let result: GenerateResponse = response
            .json()
            .await
            .context("Failed to parse Gemini response")?;

        let text = extract_text(result)?;
        debug!(chars = text.len(), "Gemini generated text");
        Ok(text)
    }

    fn model(&self) -> &str {
        &self.model
    }
}

/// Concatenate the text parts of the first candidate.
fn extract_text(response: GenerateResponse) -> Result<String> {
    let Some(candidate) = response.candidates.into_iter().next() else {
        let reason = response
            .prompt_feedback
            .and_then(|f| f.block_reason)
            .unwrap_or_else(|| "no candidates returned".to_string());
        anyhow::bail!("Gemini returned no answer: {}", reason);
    };

    let text: String = candidate
        .content
        .map(|c| c.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|p| p.text)
        .collect();

    Ok(text)
}
