//! Endpoint adapter: one prompt in, one normalized string out.

use crate::client::InferenceClient;
use crate::config::EndpointConfig;
use crate::stop::truncate_at_stop;
use crate::{Error, Result};
use serde_json::Value;

/// Adapter around a hosted text-generation endpoint.
///
/// Holds an immutable [`EndpointConfig`] and an injected client for the
/// adapter's lifetime. Each [`generate`](EndpointAdapter::generate) call is
/// independent and issues exactly one outbound request; there is no retry,
/// no timeout, and no mutable state between calls.
pub struct EndpointAdapter<C> {
    config: EndpointConfig,
    client: C,
}

impl<C: InferenceClient> EndpointAdapter<C> {
    /// Create an adapter from a validated config and a ready client.
    pub fn new(config: EndpointConfig, client: C) -> Self {
        Self { config, client }
    }

    /// Create an adapter, obtaining the client from a factory.
    ///
    /// The adapter is unusable without a client, so a factory failure fails
    /// construction as a whole with [`Error::Config`].
    pub fn from_factory<F, E>(config: EndpointConfig, factory: F) -> Result<Self>
    where
        F: FnOnce(&EndpointConfig) -> std::result::Result<C, E>,
        E: std::fmt::Display,
    {
        let client = factory(&config)
            .map_err(|e| Error::Config(format!("failed to build inference client: {e}")))?;
        Ok(Self::new(config, client))
    }

    /// The configuration this adapter was built with.
    pub fn config(&self) -> &EndpointConfig {
        &self.config
    }

    /// Build the request body: `{"inputs": prompt}` merged over the
    /// configured model kwargs. The prompt key wins on collision so a kwarg
    /// can never silently replace it.
    fn build_request(&self, prompt: &str) -> Value {
        let mut body = self.config.model_kwargs().cloned().unwrap_or_default();
        body.insert("inputs".to_string(), Value::String(prompt.to_string()));
        Value::Object(body)
    }

    /// Call the endpoint with `prompt` and normalize the reply to a string.
    ///
    /// When `stop` is a non-empty list, the reply is truncated at the first
    /// occurrence of any stop sequence. Every failure surfaces as
    /// [`Error::Inference`], regardless of whether it came from the client,
    /// an explicit error reply, or a malformed response shape.
    pub async fn generate(&self, prompt: &str, stop: Option<&[String]>) -> Result<String> {
        let request = self.build_request(prompt);

        tracing::debug!(endpoint = %self.config.endpoint_name(), "invoking endpoint");

        let response = self
            .client
            .predict(&request)
            .await
            .map_err(|e| Error::Inference(format!("error raised by inference endpoint: {e}")))?;

        if let Some(err) = response.get("error") {
            let message = match err.as_str() {
                Some(s) => s.to_string(),
                None => err.to_string(),
            };
            return Err(Error::Inference(format!(
                "error raised by inference api: {message}"
            )));
        }

        let text = extract_generated_text(&response)?;

        let text = match stop {
            Some(stop) if !stop.is_empty() => truncate_at_stop(text, stop),
            _ => text,
        };

        Ok(text.to_string())
    }
}

/// Pull `response[0]["generated_text"]` out of a reply.
///
/// The shape is fixed by the remote service, not by this crate, so it is
/// parsed defensively rather than with derived wire structs.
fn extract_generated_text(response: &Value) -> Result<&str> {
    let first = response.get(0).ok_or_else(|| {
        Error::Inference(format!(
            "expected a non-empty array response, got: {response}"
        ))
    })?;
    let text = first.get("generated_text").ok_or_else(|| {
        Error::Inference(format!("response missing \"generated_text\": {first}"))
    })?;
    text.as_str().ok_or_else(|| {
        Error::Inference(format!("\"generated_text\" is not a string: {text}"))
    })
}
