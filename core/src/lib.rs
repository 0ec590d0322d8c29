//! Blocking HTTP client for the ENSEK energy/fuel order API.
//!
//! # Overview
//! `ApiClient` wraps a `Transport` with header presets and logged verb
//! methods (`get`, `post`, `put`, `delete`). Every call issues exactly one
//! request and returns the raw `HttpResponse`; asserting on status and body
//! is left to the caller.
//!
//! # Design
//! - Requests and responses are plain data (`HttpRequest`, `HttpResponse`),
//!   so tests can swap the network for a capturing transport.
//! - `UreqTransport` is the real transport. 4xx/5xx are data, not errors.
//! - Configuration is injected through `ClientConfig`, usually built from
//!   the environment with `ClientConfig::from_env`.
//! - Dropping the client disposes its transport.

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::{Headers, HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Transport, UreqTransport};
pub use types::{Credentials, OrderUpdate};
