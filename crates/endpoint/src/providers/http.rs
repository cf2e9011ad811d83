//! JSON-over-HTTP inference client.

use crate::client::{ClientError, InferenceClient};
use serde_json::Value;

/// Builder for [`HttpClient`].
#[derive(Debug, Clone)]
pub struct HttpClientBuilder {
    base_url: String,
    endpoint_name: String,
    bearer_token: Option<String>,
}

impl HttpClientBuilder {
    pub fn new(base_url: impl Into<String>, endpoint_name: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            endpoint_name: endpoint_name.into(),
            bearer_token: None,
        }
    }

    /// Send `Authorization: Bearer <token>` with every request.
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    pub fn build(self) -> HttpClient {
        let url = format!(
            "{}/endpoints/{}/invocations",
            self.base_url.trim_end_matches('/'),
            self.endpoint_name
        );
        HttpClient {
            http: reqwest::Client::new(),
            url,
            bearer_token: self.bearer_token,
        }
    }
}

/// HTTP client for a deployed endpoint's invocation URL.
///
/// One POST per call: no retries, no streaming, no connection tuning. The
/// reply body comes back as raw JSON; shape validation belongs to the
/// adapter.
pub struct HttpClient {
    http: reqwest::Client,
    url: String,
    bearer_token: Option<String>,
}

impl HttpClient {
    pub fn builder(
        base_url: impl Into<String>,
        endpoint_name: impl Into<String>,
    ) -> HttpClientBuilder {
        HttpClientBuilder::new(base_url, endpoint_name)
    }

    /// The invocation URL requests are sent to.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl std::fmt::Display for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "http({})", self.url)
    }
}

impl InferenceClient for HttpClient {
    async fn predict(&self, request: &Value) -> Result<Value, ClientError> {
        let mut req = self
            .http
            .post(&self.url)
            .header("content-type", "application/json")
            .header("accept", "application/json");

        if let Some(token) = &self.bearer_token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        tracing::debug!(url = %self.url, "posting inference request");

        let response = req
            .json(request)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Api(format!("{status}: {body}")));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_joins_invocation_url() {
        let client = HttpClient::builder("https://runtime.example.com", "my-endpoint").build();
        assert_eq!(
            client.url(),
            "https://runtime.example.com/endpoints/my-endpoint/invocations"
        );
    }

    #[test]
    fn builder_trims_trailing_slash() {
        let client = HttpClient::builder("https://runtime.example.com/", "my-endpoint").build();
        assert_eq!(
            client.url(),
            "https://runtime.example.com/endpoints/my-endpoint/invocations"
        );
    }

    #[test]
    fn display_shows_url_not_token() {
        let client = HttpClient::builder("https://runtime.example.com", "ep")
            .bearer_token("secret")
            .build();
        let shown = client.to_string();
        assert!(shown.contains("/endpoints/ep/invocations"));
        assert!(!shown.contains("secret"));
    }
}
