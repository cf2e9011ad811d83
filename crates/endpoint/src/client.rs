//! Inference client capability.

use serde_json::Value;
use std::future::Future;
use thiserror::Error;

/// Errors from inference client implementations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A network error occurred while reaching the endpoint.
    #[error("network: {0}")]
    Network(String),

    /// The endpoint replied with a non-success status.
    #[error("endpoint api: {0}")]
    Api(String),

    /// The reply body could not be parsed as JSON.
    #[error("invalid endpoint response: {0}")]
    InvalidResponse(String),
}

/// Trait for hosted-inference clients.
///
/// This is the boundary between the adapter and the transport. The adapter
/// only ever calls `predict`, which keeps it testable with a stub client and
/// free of any SDK-specific types.
pub trait InferenceClient: Send + Sync {
    /// Send one request payload and return the raw JSON reply.
    ///
    /// Implementations must not interpret the reply; shape validation is the
    /// adapter's job.
    fn predict(
        &self,
        request: &Value,
    ) -> impl Future<Output = Result<Value, ClientError>> + Send;
}
