use thiserror::Error;

/// Errors surfaced by the endpoint adapter.
///
/// Every failure is one of exactly two kinds: a setup problem caught at
/// construction, or a call problem. Callers never see the underlying
/// client's native error types.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid or incomplete setup. Fatal to adapter creation.
    #[error("config error: {0}")]
    Config(String),

    /// A generation call failed: transport, an explicit error reply, or a
    /// malformed response shape.
    #[error("inference error: {0}")]
    Inference(String),
}

pub type Result<T> = std::result::Result<T, Error>;
