//! Natural language summaries of query results.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::backend::{bounded, TextGenerator};
use crate::error::{chain, AskError, AskResult};
use crate::query::model::Question;
use crate::query::prompt;
use crate::result::model::NormalizedValue;

/// Explains query results in one or two lines of prose.
#[derive(Clone)]
pub struct Summarizer {
    llm: Arc<dyn TextGenerator>,
    timeout: Duration,
}

impl Summarizer {
    pub fn new(llm: Arc<dyn TextGenerator>, timeout: Duration) -> Self {
        Self { llm, timeout }
    }

    /// Summarize `result` as an answer to `question`.
    ///
    /// `None` means the query failed; the model is told the result is `null`.
    pub async fn summarize(&self, question: &Question, result: Option<&NormalizedValue>) -> AskResult<String> {
        let rendered = result
            .map(NormalizedValue::render)
            .unwrap_or_else(|| "null".to_string());
        let prompt = prompt::summary_prompt(question.as_str(), &rendered);
        debug!(model = self.llm.model(), has_result = result.is_some(), "Requesting summary");

        let raw = bounded(self.timeout, "LLM request", self.llm.generate(&prompt))
            .await
            .map_err(|e| AskError::Summarization(chain(&e)))?;

        Ok(prompt::clean_response(&raw).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fakes::FakeLlm;
    use serde_json::json;

    #[tokio::test]
    async fn test_summarize_renders_result() {
        let llm = Arc::new(FakeLlm::replying(&["```\nApollo 13 was directed by Ron Howard.\n```"]));
        let summarizer = Summarizer::new(llm.clone(), Duration::from_secs(5));
        let question = Question::parse("Who directed Apollo 13?").unwrap();
        let result = NormalizedValue::Values(vec![json!("Ron Howard")]);

        let summary = summarizer.summarize(&question, Some(&result)).await.unwrap();

        assert_eq!(summary, "Apollo 13 was directed by Ron Howard.");
        assert!(llm.prompts()[0].contains(r#"Database result: "["Ron Howard"]""#));
    }

    #[tokio::test]
    async fn test_summarize_missing_result_renders_null() {
        let llm = Arc::new(FakeLlm::replying(&["Sorry, the query failed."]));
        let summarizer = Summarizer::new(llm.clone(), Duration::from_secs(5));
        let question = Question::parse("Who directed Apollo 13?").unwrap();

        summarizer.summarize(&question, None).await.unwrap();

        assert!(llm.prompts()[0].contains(r#"Database result: "null""#));
    }

    #[tokio::test]
    async fn test_summarize_failure() {
        let llm = Arc::new(FakeLlm::failing("503 Service Unavailable"));
        let summarizer = Summarizer::new(llm, Duration::from_secs(5));
        let question = Question::parse("Who directed Apollo 13?").unwrap();

        let err = summarizer.summarize(&question, None).await.unwrap_err();
        assert_eq!(err, AskError::Summarization("503 Service Unavailable".to_string()));
    }
}
