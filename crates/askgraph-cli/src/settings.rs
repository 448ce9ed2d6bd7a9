//! Startup configuration.
//!
//! Every setting is a global flag with an environment variable fallback.
//! Values are read once and turned into the explicit config structs the
//! library crates take; nothing is kept in global state.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use askgraph_core::{AskError, AskResult, Pipeline, PipelineOptions};
use askgraph_graph::{GraphConfig, Neo4jRunner};
use askgraph_llm::{LlmClient, LlmConfig, Provider};
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct Settings {
    /// Neo4j bolt URI
    #[arg(long, env = "NEO4J_URI", global = true)]
    pub neo4j_uri: Option<String>,

    /// Neo4j user name
    #[arg(long, env = "NEO4J_USERNAME", global = true)]
    pub neo4j_username: Option<String>,

    /// Neo4j password
    #[arg(long, env = "NEO4J_PASSWORD", hide_env_values = true, global = true)]
    pub neo4j_password: Option<String>,

    /// Neo4j database name
    #[arg(long, env = "NEO4J_DATABASE", default_value = "neo4j", global = true)]
    pub neo4j_database: String,

    /// LLM provider (gemini, ollama)
    #[arg(long = "llm", env = "ASKGRAPH_LLM_PROVIDER", default_value = "gemini", global = true)]
    pub provider: Provider,

    /// Model identifier (defaults per provider)
    #[arg(long, env = "ASKGRAPH_MODEL", global = true)]
    pub model: Option<String>,

    /// Gemini API key (GOOGLE_API_KEY is also accepted)
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Base URL of the LLM service
    #[arg(long, env = "ASKGRAPH_LLM_URL", global = true)]
    pub llm_url: Option<String>,

    /// Seconds to wait on each LLM or database call
    #[arg(long, env = "ASKGRAPH_TIMEOUT_SECS", default_value_t = 60, global = true)]
    pub timeout_secs: u64,

    /// File with the graph schema description to give the model
    #[arg(long, env = "ASKGRAPH_SCHEMA_FILE", global = true)]
    pub schema_file: Option<PathBuf>,

    /// Run generated queries even when they contain write clauses or procedure calls
    #[arg(long, global = true)]
    pub allow_writes: bool,
}

/// Clients built from [`Settings`].
pub struct Services {
    pub llm: Arc<LlmClient>,
    pub graph: Arc<Neo4jRunner>,
    pub options: PipelineOptions,
}

impl Services {
    pub fn pipeline(&self) -> Pipeline {
        Pipeline::new(self.llm.clone(), self.graph.clone(), self.options.clone())
    }
}

impl Settings {
    /// Validate everything and build the clients. No network calls.
    pub fn services(&self) -> AskResult<Services> {
        let graph = Neo4jRunner::new(self.graph_config()?);
        let llm = LlmClient::from_config(&self.llm_config())?;
        let options = self.pipeline_options()?;

        Ok(Services {
            llm: Arc::new(llm),
            graph: Arc::new(graph),
            options,
        })
    }

    pub fn graph_config(&self) -> AskResult<GraphConfig> {
        let uri = present(&self.neo4j_uri);
        let user = present(&self.neo4j_username);
        let password = present(&self.neo4j_password);

        let missing: Vec<&str> = [
            ("NEO4J_URI", uri.is_none()),
            ("NEO4J_USERNAME", user.is_none()),
            ("NEO4J_PASSWORD", password.is_none()),
        ]
        .iter()
        .filter(|(_, absent)| *absent)
        .map(|(name, _)| *name)
        .collect();

        match (uri, user, password) {
            (Some(uri), Some(user), Some(password)) => Ok(GraphConfig {
                uri,
                user,
                password,
                database: self.neo4j_database.clone(),
            }),
            _ => Err(AskError::config(format!(
                "missing Neo4j credentials: set {}",
                missing.join(", ")
            ))),
        }
    }

    pub fn llm_config(&self) -> LlmConfig {
        let api_key = present(&self.api_key).or_else(|| std::env::var("GOOGLE_API_KEY").ok().filter(|k| !k.trim().is_empty()));

        LlmConfig {
            provider: self.provider,
            model: present(&self.model),
            api_key,
            base_url: present(&self.llm_url),
            timeout: self.timeout(),
        }
    }

    pub fn pipeline_options(&self) -> AskResult<PipelineOptions> {
        if self.timeout_secs == 0 {
            return Err(AskError::config("timeout must be at least one second"));
        }

        let mut options = PipelineOptions {
            read_only: !self.allow_writes,
            call_timeout: self.timeout(),
            ..PipelineOptions::default()
        };

        if let Some(path) = &self.schema_file {
            let schema = std::fs::read_to_string(path).map_err(|e| {
                AskError::config(format!("cannot read schema file {}: {}", path.display(), e))
            })?;
            if schema.trim().is_empty() {
                return Err(AskError::config(format!("schema file {} is empty", path.display())));
            }
            options.schema = schema;
        }

        Ok(options)
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn present(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use askgraph_core::pipeline::DEFAULT_TIMEOUT;
    use std::io::Write;

    fn settings() -> Settings {
        Settings {
            neo4j_uri: Some("neo4j+s://demo.databases.neo4j.io".to_string()),
            neo4j_username: Some("neo4j".to_string()),
            neo4j_password: Some("secret".to_string()),
            neo4j_database: "neo4j".to_string(),
            provider: Provider::Gemini,
            model: None,
            api_key: Some("key".to_string()),
            llm_url: None,
            timeout_secs: 60,
            schema_file: None,
            allow_writes: false,
        }
    }

    #[test]
    fn test_complete_settings_build_services() {
        let services = settings().services().unwrap();
        assert!(services.options.read_only);
        assert_eq!(services.options.call_timeout, DEFAULT_TIMEOUT);
        assert_eq!(services.graph.config().uri, "neo4j+s://demo.databases.neo4j.io");
    }

    #[test]
    fn test_missing_credentials_are_listed() {
        let s = Settings {
            neo4j_uri: None,
            neo4j_password: Some("  ".to_string()),
            ..settings()
        };
        let err = s.graph_config().unwrap_err();
        assert_eq!(
            err,
            AskError::Configuration("missing Neo4j credentials: set NEO4J_URI, NEO4J_PASSWORD".to_string())
        );
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let s = Settings { timeout_secs: 0, ..settings() };
        assert_eq!(s.pipeline_options().unwrap_err().stage(), "configuration");
    }

    #[test]
    fn test_allow_writes_disables_guard() {
        let s = Settings { allow_writes: true, ..settings() };
        assert!(!s.pipeline_options().unwrap().read_only);
    }

    #[test]
    fn test_schema_file_replaces_default() {
        let path = std::env::temp_dir().join(format!("askgraph-schema-{}.txt", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "(:Author)-[:WROTE]->(:Book)").unwrap();

        let s = Settings { schema_file: Some(path.clone()), ..settings() };
        let options = s.pipeline_options().unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(options.schema.trim(), "(:Author)-[:WROTE]->(:Book)");
    }

    #[test]
    fn test_missing_schema_file() {
        let s = Settings {
            schema_file: Some(PathBuf::from("/nonexistent/askgraph/schema.txt")),
            ..settings()
        };
        let err = s.pipeline_options().unwrap_err();
        assert!(err.to_string().contains("cannot read schema file"));
    }
}
