//! Transports that carry requests to the site

use std::time::Duration;

use reqwest::blocking::Client as HttpClient;
use reqwest::header::{HeaderName, HeaderValue};
use tracing::debug;

use super::request::{Method, Page, Request};
use crate::error::{SaveyError, SaveyResult};

/// Sends a request and returns the page reached after redirects
///
/// Implementations must keep cookies across calls on the same instance;
/// that jar is the only place session state lives.
pub trait Transport {
    fn execute(&self, request: Request) -> SaveyResult<Page>;
}

/// Blocking reqwest transport with its own cookie store
pub struct HttpTransport {
    http: HttpClient,
}

impl HttpTransport {
    /// Build a transport with a fresh cookie jar
    pub fn new(timeout: Duration) -> SaveyResult<Self> {
        let http = HttpClient::builder()
            .cookie_store(true)
            .timeout(timeout)
            .build()?;
        Ok(Self { http })
    }
}

impl Transport for HttpTransport {
    fn execute(&self, request: Request) -> SaveyResult<Page> {
        debug!(method = request.method.as_str(), url = %request.url, "sending request");

        let mut builder = match request.method {
            Method::Get => self.http.get(request.url),
            Method::Post => self.http.post(request.url),
        };

        for (name, value) in &request.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| SaveyError::Transport(format!("Invalid header name: {}", e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| SaveyError::Transport(format!("Invalid header value: {}", e)))?;
            builder = builder.header(name, value);
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send()?;
        let url = response.url().clone();
        let status = response.status().as_u16();
        let body = response.text()?;

        debug!(%url, status, bytes = body.len(), "received response");

        Ok(Page { url, status, body })
    }
}
