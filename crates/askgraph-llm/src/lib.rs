//! # askgraph llm
//!
//! Text generation clients for askgraph: Google Gemini over its REST API
//! and a local Ollama server.

pub mod gemini;
pub mod ollama;

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use anyhow::Result;
use askgraph_core::{AskError, AskResult, TextGenerator};
use async_trait::async_trait;

pub use gemini::GeminiClient;
pub use ollama::OllamaClient;

/// Which LLM service to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Provider {
    #[default]
    Gemini,
    Ollama,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::Ollama => "ollama",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            Self::Gemini => gemini::DEFAULT_MODEL,
            Self::Ollama => ollama::DEFAULT_MODEL,
        }
    }

    pub fn default_url(&self) -> &'static str {
        match self {
            Self::Gemini => gemini::DEFAULT_GEMINI_URL,
            Self::Ollama => ollama::DEFAULT_OLLAMA_URL,
        }
    }
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gemini" | "google" => Ok(Self::Gemini),
            "ollama" => Ok(Self::Ollama),
            other => Err(format!("unknown LLM provider '{}' (expected gemini or ollama)", other)),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings for building an [`LlmClient`].
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub provider: Provider,
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout: Duration,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: Provider::default(),
            model: None,
            api_key: None,
            base_url: None,
            timeout: Duration::from_secs(60),
        }
    }
}

impl LlmConfig {
    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or_else(|| self.provider.default_model())
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or_else(|| self.provider.default_url())
    }
}

/// The configured text generation backend.
#[derive(Clone)]
pub enum LlmClient {
    Gemini(GeminiClient),
    Ollama(OllamaClient),
}

impl LlmClient {
    /// Build a client, failing when required credentials are missing.
    pub fn from_config(config: &LlmConfig) -> AskResult<Self> {
        let client = match config.provider {
            Provider::Gemini => {
                let api_key = config
                    .api_key
                    .as_deref()
                    .filter(|k| !k.trim().is_empty())
                    .ok_or_else(|| AskError::config("Gemini requires an API key (set GEMINI_API_KEY)"))?;
                GeminiClient::new(config.base_url(), config.model(), api_key, config.timeout)
                    .map(Self::Gemini)
            }
            Provider::Ollama => {
                OllamaClient::new(config.base_url(), config.model(), config.timeout).map(Self::Ollama)
            }
        };

        client.map_err(|e| AskError::config(format!("{:#}", e)))
    }

    pub fn provider(&self) -> Provider {
        match self {
            Self::Gemini(_) => Provider::Gemini,
            Self::Ollama(_) => Provider::Ollama,
        }
    }

    /// Check that the service answers and knows the model.
    pub async fn health_check(&self) -> Result<bool> {
        match self {
            Self::Gemini(client) => client.health_check().await,
            Self::Ollama(client) => client.health_check().await,
        }
    }
}

#[async_trait]
impl TextGenerator for LlmClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        match self {
            Self::Gemini(client) => client.generate(prompt).await,
            Self::Ollama(client) => client.generate(prompt).await,
        }
    }

    fn model(&self) -> &str {
        match self {
            Self::Gemini(client) => client.model(),
            Self::Ollama(client) => client.model(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_parse() {
        assert_eq!("gemini".parse::<Provider>(), Ok(Provider::Gemini));
        assert_eq!(" Ollama ".parse::<Provider>(), Ok(Provider::Ollama));
        assert!("openai".parse::<Provider>().is_err());
    }

    #[test]
    fn test_gemini_requires_key() {
        let config = LlmConfig::default();
        let err = LlmClient::from_config(&config).err().unwrap();
        assert_eq!(err.stage(), "configuration");

        let blank = LlmConfig {
            api_key: Some("   ".to_string()),
            ..LlmConfig::default()
        };
        assert!(LlmClient::from_config(&blank).is_err());
    }

    #[test]
    fn test_defaults_per_provider() {
        let gemini = LlmConfig {
            api_key: Some("key".to_string()),
            ..LlmConfig::default()
        };
        let client = LlmClient::from_config(&gemini).unwrap();
        assert_eq!(client.provider(), Provider::Gemini);
        assert_eq!(client.model(), "gemini-2.5-flash");

        let ollama = LlmConfig {
            provider: Provider::Ollama,
            model: Some("qwen2.5-coder".to_string()),
            ..LlmConfig::default()
        };
        let client = LlmClient::from_config(&ollama).unwrap();
        assert_eq!(client.model(), "qwen2.5-coder");
        assert_eq!(ollama.base_url(), "http://localhost:11434");
    }
}
