//! Logged HTTP verb methods and header presets for the ENSEK API.
//!
//! # Design
//! `ApiClient` is a one-to-one pass-through: every verb call builds a single
//! `HttpRequest`, logs it, hands it to the transport and returns the
//! response untouched. Status codes are left for the caller to assert on.
//! The client owns its transport; `dispose` (or dropping the client)
//! releases it exactly once.

use serde::Serialize;
use tracing::info;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{
    Headers, HttpMethod, HttpRequest, HttpResponse, ACCEPT, APPLICATION_JSON, AUTHORIZATION,
    CONTENT_TYPE,
};
use crate::transport::{Transport, UreqTransport};

/// Client for the ENSEK API bound to one base URL and bearer token.
pub struct ApiClient<T: Transport = UreqTransport> {
    config: ClientConfig,
    transport: Option<T>,
}

impl ApiClient<UreqTransport> {
    /// Client backed by a real ureq agent.
    pub fn connect(config: ClientConfig) -> Self {
        Self::with_transport(config, UreqTransport::new())
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            config,
            transport: Some(transport),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    // --- header presets ---

    /// `Accept: application/json` only.
    pub fn default_headers(&self) -> Headers {
        Headers::new().with(ACCEPT, APPLICATION_JSON)
    }

    /// Default headers plus `Authorization: Bearer <token>`.
    pub fn authorized_headers(&self) -> Headers {
        self.default_headers().with(AUTHORIZATION, self.bearer())
    }

    /// Default headers plus `Content-Type: application/json`, and the bearer
    /// token when `with_token` is set.
    pub fn json_headers(&self, with_token: bool) -> Headers {
        let mut headers = self.default_headers().with(CONTENT_TYPE, APPLICATION_JSON);
        if with_token {
            headers.insert(AUTHORIZATION, self.bearer());
        }
        headers
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.config.token)
    }

    // --- verbs ---

    pub fn get(&self, path: &str, headers: Option<&Headers>) -> Result<HttpResponse, ApiError> {
        self.send(HttpMethod::Get, path, None, headers)
    }

    pub fn post<P: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &P,
        headers: Option<&Headers>,
    ) -> Result<HttpResponse, ApiError> {
        let body = serde_json::to_string(payload).map_err(ApiError::Serialization)?;
        self.send(HttpMethod::Post, path, Some(body), headers)
    }

    /// POST without a request body.
    pub fn post_empty(&self, path: &str, headers: Option<&Headers>) -> Result<HttpResponse, ApiError> {
        self.send(HttpMethod::Post, path, None, headers)
    }

    pub fn put<P: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &P,
        headers: Option<&Headers>,
    ) -> Result<HttpResponse, ApiError> {
        let body = serde_json::to_string(payload).map_err(ApiError::Serialization)?;
        self.send(HttpMethod::Put, path, Some(body), headers)
    }

    /// PUT without a request body.
    pub fn put_empty(&self, path: &str, headers: Option<&Headers>) -> Result<HttpResponse, ApiError> {
        self.send(HttpMethod::Put, path, None, headers)
    }

    pub fn delete(&self, path: &str, headers: Option<&Headers>) -> Result<HttpResponse, ApiError> {
        self.send(HttpMethod::Delete, path, None, headers)
    }

    /// Write the response body to the diagnostic log.
    pub fn print_response_body(&self, response: &HttpResponse) {
        info!(body = %response.body, "Response body:");
    }

    /// Release the transport. Safe to call more than once.
    pub fn dispose(&mut self) {
        if let Some(mut transport) = self.transport.take() {
            transport.close();
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.transport.is_none()
    }

    fn send(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<String>,
        headers: Option<&Headers>,
    ) -> Result<HttpResponse, ApiError> {
        let transport = self.transport.as_ref().ok_or(ApiError::Disposed)?;
        let url = format!("{}{}", self.config.base_url, path);

        let mut headers = headers.cloned().unwrap_or_else(|| self.default_headers());
        if body.is_some() && !headers.contains(CONTENT_TYPE) {
            headers.insert(CONTENT_TYPE, APPLICATION_JSON);
        }

        match (&body, method) {
            (Some(payload), _) => info!(%method, %url, %payload, "sending request"),
            (None, HttpMethod::Post | HttpMethod::Put) => {
                info!(%method, %url, payload = %"null", "sending request")
            }
            (None, _) => info!(%method, %url, "sending request"),
        }

        let request = HttpRequest {
            method,
            url,
            headers,
            body,
        };
        transport.execute(&request)
    }
}

impl<T: Transport> Drop for ApiClient<T> {
    fn drop(&mut self) {
        self.dispose();
    }
}
