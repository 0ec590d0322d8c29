//! The seam between `ApiClient` and the network.
//!
//! # Design
//! `ApiClient` never performs I/O itself. It builds an `HttpRequest` and
//! passes it to a `Transport`, which returns whatever the server answered.
//! Non-2xx statuses come back as ordinary responses; only failures that
//! prevent a response (DNS, refused connection, broken stream) are errors.

use tracing::debug;

use crate::error::ApiError;
use crate::http::{Headers, HttpMethod, HttpRequest, HttpResponse};

/// Executes one HTTP round-trip.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;

    /// Release any resources held by the transport. Called once by
    /// `ApiClient::dispose`.
    fn close(&mut self) {}
}

/// Blocking transport backed by a `ureq` agent.
///
/// The agent is configured with `http_status_as_error(false)` so 4xx/5xx
/// responses are returned as data. No timeout is set beyond ureq's defaults.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let url = request.url.as_str();
        let result = match request.method {
            HttpMethod::Get | HttpMethod::Delete => {
                let mut builder = if request.method == HttpMethod::Get {
                    self.agent.get(url)
                } else {
                    self.agent.delete(url)
                };
                for (name, value) in request.headers.iter() {
                    builder = builder.header(name, value);
                }
                builder.call()
            }
            HttpMethod::Post | HttpMethod::Put => {
                let mut builder = if request.method == HttpMethod::Post {
                    self.agent.post(url)
                } else {
                    self.agent.put(url)
                };
                for (name, value) in request.headers.iter() {
                    builder = builder.header(name, value);
                }
                match &request.body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
        };
        let mut response = result?;

        let status = response.status().as_u16();
        let headers: Headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response.body_mut().read_to_string()?;
        debug!(status, bytes = body.len(), "received response");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
