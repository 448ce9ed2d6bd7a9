//! Question and generated query models.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AskError, AskResult};

/// A user question. Never empty.
///
/// Deserializing goes through [`Question::parse`], so a blank question
/// cannot be read back in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Question(String);

impl Question {
    /// Accept a raw question, rejecting empty or whitespace-only input.
    pub fn parse(raw: &str) -> AskResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AskError::EmptyQuestion);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Question {
    type Error = AskError;

    fn try_from(raw: String) -> AskResult<Self> {
        Self::parse(&raw)
    }
}

impl From<Question> for String {
    fn from(question: Question) -> Self {
        question.0
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Cypher text produced by the LLM for one question.
///
/// Not parsed or validated; handed to the database as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeneratedQuery(String);

impl GeneratedQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GeneratedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
