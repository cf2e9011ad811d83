//! Hosted text-generation endpoint adapter.
//!
//! This crate talks to a remotely hosted text-generation endpoint through a
//! narrow client capability and normalizes the reply into a plain string.
//!
//! # Overview
//!
//! The crate is organized around these concepts:
//!
//! - **EndpointConfig**: validated endpoint name, task, and optional model
//!   keyword arguments. Invalid configuration fails at construction, never
//!   at call time.
//! - **InferenceClient**: a one-method trait (`predict`) abstracting the
//!   transport to the endpoint; the shipped implementation is an HTTP
//!   client, and tests use stubs.
//! - **EndpointAdapter**: issues one call per `generate` invocation and
//!   translates every failure into a two-kind error taxonomy.
//!
//! # Example
//!
//! ```ignore
//! use endpoint::{EndpointAdapter, EndpointConfig, HttpClient, Task};
//!
//! # async fn example() -> endpoint::Result<()> {
//! let config = EndpointConfig::new("my-endpoint", Task::TextGeneration)?;
//! let client = HttpClient::builder("https://runtime.example.com", "my-endpoint")
//!     .bearer_token("token")
//!     .build();
//!
//! let adapter = EndpointAdapter::new(config, client);
//! let stop = vec!["\n\n".to_string()];
//! let text = adapter.generate("Tell me a joke.", Some(&stop)).await?;
//! println!("{text}");
//! # Ok(())
//! # }
//! ```

mod adapter;
mod client;
mod config;
mod error;
pub mod providers;
mod stop;

pub use adapter::EndpointAdapter;
pub use client::{ClientError, InferenceClient};
pub use config::{EndpointConfig, Task};
pub use error::{Error, Result};
pub use providers::{HttpClient, HttpClientBuilder};
pub use stop::truncate_at_stop;
