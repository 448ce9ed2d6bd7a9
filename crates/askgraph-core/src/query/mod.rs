//! Natural language to Cypher translation.

pub mod guard;
pub mod model;
pub mod prompt;

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::backend::{bounded, TextGenerator};
use crate::error::{chain, AskError, AskResult};
use model::{GeneratedQuery, Question};

/// Turns questions into Cypher with one LLM call each.
#[derive(Clone)]
pub struct QueryGenerator {
    llm: Arc<dyn TextGenerator>,
    schema: String,
    timeout: Duration,
}

impl QueryGenerator {
    pub fn new(llm: Arc<dyn TextGenerator>, schema: impl Into<String>, timeout: Duration) -> Self {
        Self {
            llm,
            schema: schema.into(),
            timeout,
        }
    }

    /// Schema description embedded in every prompt.
    pub fn schema(&self) -> &str {
        &self.schema
    }

    /// Translate a question into a Cypher query.
    pub async fn generate(&self, question: &Question) -> AskResult<GeneratedQuery> {
        let prompt = prompt::cypher_prompt(&self.schema, question.as_str());
        debug!(model = self.llm.model(), chars = prompt.len(), "Requesting Cypher");

        let raw = bounded(self.timeout, "LLM request", self.llm.generate(&prompt))
            .await
            .map_err(|e| AskError::Generation(chain(&e)))?;

        let cypher = prompt::strip_language_tag(prompt::clean_response(&raw));
        if cypher.is_empty() {
            return Err(AskError::Generation("model returned no query text".to_string()));
        }

        info!(cypher = %cypher, "Generated Cypher");
        Ok(GeneratedQuery::new(cypher))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fakes::FakeLlm;

    fn generator(llm: &Arc<FakeLlm>) -> QueryGenerator {
        QueryGenerator::new(llm.clone(), prompt::DEFAULT_SCHEMA, Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_generate_strips_fences() {
        let llm = Arc::new(FakeLlm::replying(&["```cypher\nMATCH (p:Person)-[:DIRECTED]->(m:Movie {title: 'Apollo 13'})\nRETURN p.name\n```"]));
        let question = Question::parse("Who directed Apollo 13?").unwrap();

        let query = generator(&llm).generate(&question).await.unwrap();

        assert_eq!(
            query.as_str(),
            "MATCH (p:Person)-[:DIRECTED]->(m:Movie {title: 'Apollo 13'})\nRETURN p.name"
        );
        assert!(!query.as_str().starts_with("```"));
        assert!(!query.as_str().ends_with("```"));
    }

    #[tokio::test]
    async fn test_generate_sends_question_in_prompt() {
        let llm = Arc::new(FakeLlm::replying(&["MATCH (m:Movie) RETURN m.title"]));
        let question = Question::parse("List all movies").unwrap();

        generator(&llm).generate(&question).await.unwrap();

        let prompts = llm.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("User question: \"List all movies\""));
        assert!(prompts[0].contains("(:Movie)-[:IN_GENRE]->(:Genre)"));
    }

    #[tokio::test]
    async fn test_generate_uses_custom_schema() {
        let llm = Arc::new(FakeLlm::replying(&["MATCH (b:Book) RETURN b.title"]));
        let generator = QueryGenerator::new(llm.clone(), "(:Author)-[:WROTE]->(:Book)", Duration::from_secs(5));
        let question = Question::parse("Which books exist?").unwrap();

        generator.generate(&question).await.unwrap();

        let prompt = &llm.prompts()[0];
        assert!(prompt.contains("(:Author)-[:WROTE]->(:Book)"));
        assert!(!prompt.contains("(:Movie)"));
    }

    #[tokio::test]
    async fn test_generate_llm_failure() {
        let llm = Arc::new(FakeLlm::failing("quota exceeded"));
        let question = Question::parse("Who acted in Cast Away?").unwrap();

        let err = generator(&llm).generate(&question).await.unwrap_err();
        assert_eq!(err, AskError::Generation("quota exceeded".to_string()));
    }

    #[tokio::test]
    async fn test_generate_empty_response_is_unusable() {
        let llm = Arc::new(FakeLlm::replying(&["```\n```"]));
        let question = Question::parse("Who acted in Cast Away?").unwrap();

        let err = generator(&llm).generate(&question).await.unwrap_err();
        assert_eq!(err.stage(), "generation");
    }
}
