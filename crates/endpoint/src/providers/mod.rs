//! Inference client implementations.
//!
//! Each provider implements the client trait for a specific transport.

mod http;

pub use http::{HttpClient, HttpClientBuilder};
