//! Ollama HTTP client for text generation.
//!
//! Uses the Ollama API at /api/generate with streaming disabled, so each
//! prompt maps to exactly one request and one response body.

use std::time::Duration;

use anyhow::{Context, Result};
use askgraph_core::TextGenerator;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default Ollama API URL.
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

/// Default generation model.
pub const DEFAULT_MODEL: &str = "llama3.1";

/// Ollama generation client.
#[derive(Clone)]
pub struct OllamaClient {
    base_url: String,
    model: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

impl OllamaClient {
    /// Create a new Ollama client with specified URL and model.
    pub fn new(base_url: &str, model: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            client,
        })
    }

    /// Check if the Ollama service is up and the model is pulled.
    pub async fn health_check(&self) -> Result<bool> {
        let response = self.client
            .get(format!("{}/api/tags", self.base_url))
            .send()
            .await
            .context("Failed to connect to Ollama")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Ollama API error ({}): {}", status, body);
        }

        let text = response.text().await.context("Failed to read Ollama model list")?;
        Ok(text.contains(&self.model))
    }
}

#[async_trait]
impl TextGenerator for OllamaClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        let response = self.client
            .post(format!("{}/api/generate", self.base_url))
            .json(&request)
            .send()
            .await
            .context("Failed to connect to Ollama")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Ollama API error ({}): {}", status, body);
        }

        let result: GenerateResponse = response
            .json()
            .await
            .context("Failed to parse Ollama response")?;

        debug!(chars = result.response.len(), "Ollama generated text");
        Ok(result.response)
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::{get, post}, Json, Router};
    use serde_json::{json, Value};

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
        format!("http://{}/", addr)
    }

    #[tokio::test]
    async fn test_generate_posts_prompt() {
        let app = Router::new().route(
            "/api/generate",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["model"], json!("llama3.1"));
                assert_eq!(body["stream"], json!(false));
                Json(json!({ "response": format!("echo: {}", body["prompt"].as_str().unwrap()) }))
            }),
        );
        let url = serve(app).await;
        let client = OllamaClient::new(&url, DEFAULT_MODEL, Duration::from_secs(5)).unwrap();

        let text = client.generate("MATCH").await.unwrap();
        assert_eq!(text, "echo: MATCH");
    }

    #[tokio::test]
    async fn test_generate_error_status() {
        let app = Router::new().route(
            "/api/generate",
            post(|| async { (axum::http::StatusCode::NOT_FOUND, "model 'llama3.1' not found") }),
        );
        let url = serve(app).await;
        let client = OllamaClient::new(&url, DEFAULT_MODEL, Duration::from_secs(5)).unwrap();

        let err = client.generate("hi").await.unwrap_err();
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("not found"));
    }

    #[tokio::test]
    async fn test_health_check_looks_for_model() {
        let app = Router::new().route(
            "/api/tags",
            get(|| async { Json(json!({ "models": [{ "name": "llama3.1:latest" }] })) }),
        );
        let url = serve(app).await;

        let present = OllamaClient::new(&url, "llama3.1", Duration::from_secs(5)).unwrap();
        assert!(present.health_check().await.unwrap());

        let missing = OllamaClient::new(&url, "mistral", Duration::from_secs(5)).unwrap();
        assert!(!missing.health_check().await.unwrap());
    }

    #[tokio::test]
    async fn test_health_check_unreachable_is_error() {
        let client = OllamaClient::new("http://127.0.0.1:1", "llama3.1", Duration::from_secs(5)).unwrap();

        let err = client.health_check().await.unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to connect to Ollama"));
    }
}
