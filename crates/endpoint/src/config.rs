//! Endpoint configuration and task validation.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Tasks a hosted endpoint can serve.
///
/// Both tasks reply with a `generated_text` field; the label mainly records
/// what kind of model sits behind the endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Task {
    #[serde(rename = "text2text-generation")]
    Text2TextGeneration,
    #[serde(rename = "text-generation")]
    TextGeneration,
}

impl Task {
    /// All supported tasks, in canonical order.
    pub const ALL: [Task; 2] = [Task::Text2TextGeneration, Task::TextGeneration];

    /// Canonical wire spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Task::Text2TextGeneration => "text2text-generation",
            Task::TextGeneration => "text-generation",
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Task {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text2text-generation" => Ok(Task::Text2TextGeneration),
            "text-generation" => Ok(Task::TextGeneration),
            other => Err(Error::Config(format!(
                "invalid task {other:?}: supported tasks are {:?}",
                Task::ALL.map(Task::as_str),
            ))),
        }
    }
}

/// Configuration for a hosted text-generation endpoint.
///
/// Immutable once constructed; validation happens in [`EndpointConfig::new`],
/// never at call time.
#[derive(Debug, Clone)]
pub struct EndpointConfig {
    endpoint_name: String,
    task: Task,
    model_kwargs: Option<Map<String, Value>>,
}

impl EndpointConfig {
    /// Validate and build a configuration.
    ///
    /// Fails when the endpoint name is empty or all whitespace.
    pub fn new(endpoint_name: impl Into<String>, task: Task) -> Result<Self> {
        let endpoint_name = endpoint_name.into();
        if endpoint_name.trim().is_empty() {
            return Err(Error::Config("endpoint name must not be empty".into()));
        }
        Ok(Self {
            endpoint_name,
            task,
            model_kwargs: None,
        })
    }

    /// Attach keyword arguments merged into every request body.
    pub fn with_model_kwargs(mut self, kwargs: Map<String, Value>) -> Self {
        self.model_kwargs = Some(kwargs);
        self
    }

    /// Name of the deployed endpoint to invoke.
    pub fn endpoint_name(&self) -> &str {
        &self.endpoint_name
    }

    /// Task the endpoint serves.
    pub fn task(&self) -> Task {
        self.task
    }

    /// Keyword arguments for the model, if any.
    pub fn model_kwargs(&self) -> Option<&Map<String, Value>> {
        self.model_kwargs.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn task_parses_both_valid_spellings() {
        assert_eq!(
            "text2text-generation".parse::<Task>().unwrap(),
            Task::Text2TextGeneration
        );
        assert_eq!(
            "text-generation".parse::<Task>().unwrap(),
            Task::TextGeneration
        );
    }

    #[test]
    fn task_rejects_unknown_spellings() {
        for bad in ["summarization", "TEXT-GENERATION", "", "text generation"] {
            let err = bad.parse::<Task>().unwrap_err();
            match err {
                Error::Config(msg) => {
                    assert!(msg.contains(&format!("{bad:?}")), "message: {msg}");
                    assert!(msg.contains("text2text-generation"), "message: {msg}");
                    assert!(msg.contains("text-generation"), "message: {msg}");
                }
                other => panic!("expected config error, got {other:?}"),
            }
        }
    }

    #[test]
    fn task_display_round_trips() {
        for task in Task::ALL {
            assert_eq!(task.to_string().parse::<Task>().unwrap(), task);
        }
    }

    #[test]
    fn config_rejects_empty_endpoint_name() {
        for name in ["", "   ", "\t\n"] {
            let err = EndpointConfig::new(name, Task::TextGeneration).unwrap_err();
            assert!(matches!(err, Error::Config(_)));
        }
    }

    #[test]
    fn config_holds_kwargs() {
        let kwargs = json!({"temperature": 0.7, "max_new_tokens": 64});
        let config = EndpointConfig::new("my-endpoint", Task::TextGeneration)
            .unwrap()
            .with_model_kwargs(kwargs.as_object().unwrap().clone());

        assert_eq!(config.endpoint_name(), "my-endpoint");
        assert_eq!(config.task(), Task::TextGeneration);
        assert_eq!(
            config.model_kwargs().unwrap().get("max_new_tokens"),
            Some(&json!(64))
        );
    }
}
