//! In-memory stand-ins for the LLM and graph boundaries.

use std::collections::VecDeque;
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;

use crate::backend::{GraphRunner, TextGenerator};
use crate::result::model::{Record, ResultSet};

/// Replays canned replies in order and records every prompt.
pub struct FakeLlm {
    replies: Mutex<VecDeque<std::result::Result<String, String>>>,
    prompts: Mutex<Vec<String>>,
}

impl FakeLlm {
    pub fn replying(replies: &[&str]) -> Self {
        Self::scripted(replies.iter().map(|r| Ok(r.to_string())).collect())
    }

    pub fn failing(message: &str) -> Self {
        Self::scripted(vec![Err(message.to_string())])
    }

    pub fn scripted(replies: Vec<std::result::Result<String, String>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for FakeLlm {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(reply)) => Ok(reply),
            Some(Err(message)) => Err(anyhow::anyhow!(message)),
            None => Err(anyhow::anyhow!("no scripted reply left")),
        }
    }

    fn model(&self) -> &str {
        "fake"
    }
}

/// Returns a fixed result (or error) and records every query.
pub struct FakeGraph {
    outcome: std::result::Result<ResultSet, String>,
    queries: Mutex<Vec<String>>,
}

impl FakeGraph {
    pub fn returning(rows: Vec<serde_json::Value>) -> Self {
        let rows = rows
            .into_iter()
            .map(|row| match row {
                serde_json::Value::Object(map) => map,
                other => panic!("row must be an object: {}", other),
            })
            .collect::<Vec<Record>>();
        Self {
            outcome: Ok(rows),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.queries.lock().unwrap().len()
    }
}

#[async_trait]
impl GraphRunner for FakeGraph {
    async fn run(&self, cypher: &str) -> Result<ResultSet> {
        self.queries.lock().unwrap().push(cypher.to_string());
        self.outcome.clone().map_err(|message| anyhow::anyhow!(message))
    }
}
