//! The seam between request shaping and the network.
//!
//! # Design
//! `RocketChatClient` only ever talks to a `Transport`. The default
//! `UreqTransport` performs blocking HTTP with ureq; tests plug in a
//! recording transport instead. Non-2xx statuses are data, not errors: only
//! failures to complete the round-trip surface as `ApiError::Transport`.

use std::fmt;
use std::time::Duration;

use crate::error::{ApiError, Result};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Sends one request and returns the server's answer verbatim.
pub trait Transport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse> {
        (**self).send(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse> {
        (**self).send(request)
    }
}

/// Settings for [`UreqTransport`].
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Upper bound for a whole request, connect to last body byte. `None`
    /// waits indefinitely.
    pub timeout: Option<Duration>,
    pub user_agent: String,
    /// Largest response body accepted, in bytes. `None` reads bodies of any
    /// size, so paged listings with a large `count` come back whole.
    pub max_body: Option<u64>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: concat!("rocketchat-core/", env!("CARGO_PKG_VERSION")).to_string(),
            max_body: None,
        }
    }
}

/// Blocking transport backed by a ureq agent. Sends and expects JSON.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
    user_agent: String,
    max_body: u64,
}

impl UreqTransport {
    pub fn new(config: TransportConfig) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(config.timeout)
            .build()
            .new_agent();
        Self {
            agent,
            user_agent: config.user_agent,
            max_body: config.max_body.unwrap_or(u64::MAX),
        }
    }
}

impl fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UreqTransport")
            .field("user_agent", &self.user_agent)
            .field("max_body", &self.max_body)
            .finish_non_exhaustive()
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(TransportConfig::default())
    }
}

impl Transport for UreqTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let result = match request.method {
            HttpMethod::Get => {
                let mut builder = self
                    .agent
                    .get(&request.url)
                    .header("accept", "application/json")
                    .header("user-agent", self.user_agent.as_str());
                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                builder.call()
            }
            HttpMethod::Post => {
                let mut builder = self
                    .agent
                    .post(&request.url)
                    .header("accept", "application/json")
                    .header("user-agent", self.user_agent.as_str());
                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                match &request.body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
        };
        let mut response = result.map_err(ApiError::transport)?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        // ureq caps bodies at 10 MiB unless told otherwise.
        let body = response
            .body_mut()
            .with_config()
            .limit(self.max_body)
            .read_to_string()
            .map_err(ApiError::transport)?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
