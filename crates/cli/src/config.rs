//! Configuration loading from tiller.toml.

use endpoint::{EndpointConfig, HttpClient, Task};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;

/// Top-level configuration.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Endpoint connection settings.
    pub endpoint: EndpointSection,

    /// Keyword arguments merged into every request.
    #[serde(default)]
    pub model_kwargs: Option<Map<String, Value>>,
}

/// The `[endpoint]` table.
#[derive(Debug, Deserialize)]
pub struct EndpointSection {
    /// Name of the deployed endpoint.
    pub name: String,

    /// Task the endpoint serves ("text-generation" or
    /// "text2text-generation").
    pub task: String,

    /// Base URL of the serving runtime the invocation URL is derived from.
    pub base_url: String,

    /// Optional bearer token sent with every request.
    pub api_token: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(toml: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Build the validated endpoint configuration.
    ///
    /// The task spelling is checked here, so a typo in the file surfaces the
    /// allowed set instead of failing at call time.
    pub fn endpoint_config(&self) -> Result<EndpointConfig, ConfigError> {
        let task: Task = self.endpoint.task.parse()?;
        let mut config = EndpointConfig::new(&self.endpoint.name, task)?;
        if let Some(kwargs) = &self.model_kwargs {
            config = config.with_model_kwargs(kwargs.clone());
        }
        Ok(config)
    }

    /// Build the HTTP client for the configured endpoint.
    pub fn client(&self) -> HttpClient {
        let mut builder = HttpClient::builder(&self.endpoint.base_url, &self.endpoint.name);
        if let Some(token) = &self.endpoint.api_token {
            builder = builder.bearer_token(token);
        }
        builder.build()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error(transparent)]
    Endpoint(#[from] endpoint::Error),
}
