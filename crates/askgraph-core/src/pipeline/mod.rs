//! Question answering pipeline.
//!
//! One pass per question: generate Cypher, execute it, summarize the
//! result. Stages run strictly in sequence. A failed execution is reported
//! and the summary is still attempted with no result; a failed generation
//! or summary ends the request.

pub mod model;
pub mod observer;

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::backend::{GraphRunner, TextGenerator};
use crate::error::AskResult;
use crate::query::model::Question;
use crate::query::{prompt, QueryGenerator};
use crate::result::QueryExecutor;
use crate::summary::Summarizer;
use model::{AskReport, ExecutionOutcome, Stage};
use observer::PipelineObserver;

/// Default bound on each external call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Settings fixed for the lifetime of a pipeline.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Schema description embedded in the generation prompt.
    pub schema: String,
    /// Refuse generated queries that contain write clauses or non-allow-listed procedure calls.
    pub read_only: bool,
    /// Bound on each LLM or database call.
    pub call_timeout: Duration,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            schema: prompt::DEFAULT_SCHEMA.to_string(),
            read_only: true,
            call_timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// The question to answer pipeline.
#[derive(Clone)]
pub struct Pipeline {
    generator: QueryGenerator,
    executor: QueryExecutor,
    summarizer: Summarizer,
}

impl Pipeline {
    pub fn new(llm: Arc<dyn TextGenerator>, graph: Arc<dyn GraphRunner>, options: PipelineOptions) -> Self {
        Self {
            generator: QueryGenerator::new(llm.clone(), options.schema, options.call_timeout),
            executor: QueryExecutor::new(graph, options.read_only, options.call_timeout),
            summarizer: Summarizer::new(llm, options.call_timeout),
        }
    }

    /// Answer one question.
    ///
    /// Blank input is rejected before any external call and before the
    /// observer hears anything.
    pub async fn ask(&self, raw_question: &str, observer: &mut dyn PipelineObserver) -> AskResult<AskReport> {
        let question = Question::parse(raw_question)?;
        let request_id = Uuid::new_v4().to_string();

        let span = info_span!("ask", request_id = %request_id);
        self.run(request_id, question, observer).instrument(span).await
    }

    async fn run(
        &self,
        request_id: String,
        question: Question,
        observer: &mut dyn PipelineObserver,
    ) -> AskResult<AskReport> {
        let started_at = Utc::now();
        let clock = Instant::now();
        info!(question = %question, "Answering question");

        observer.on_stage(Stage::Generating);
        let query = self.generator.generate(&question).await?;
        observer.on_query(&query);

        observer.on_stage(Stage::Executing);
        let execution = match self.executor.execute(&query).await {
            Ok(value) => {
                observer.on_result(&value);
                ExecutionOutcome::Success { value }
            }
            Err(err) => {
                let error = err.detail();
                warn!(error = %error, "Query execution failed, summarizing without a result");
                observer.on_execution_failed(&error);
                ExecutionOutcome::Failed { error }
            }
        };

        observer.on_stage(Stage::Summarizing);
        let answer = self.summarizer.summarize(&question, execution.value()).await?;
        observer.on_summary(&answer);

        observer.on_stage(Stage::Done);
        let elapsed_ms = clock.elapsed().as_millis() as u64;
        info!(elapsed_ms, "Question answered");

        Ok(AskReport {
            request_id,
            question,
            query,
            execution,
            answer,
            started_at,
            elapsed_ms,
        })
    }
}
