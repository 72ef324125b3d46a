//! Authenticated request construction for the Rocket.Chat REST API.
//!
//! # Design
//! `RocketChatClient` owns the API root, an optional `Session` and a
//! `Transport`. Every operation is split into a `build_*` step that produces
//! an `HttpRequest` (URL, auth headers, JSON body) and a send step that hands
//! it to the transport and returns the response untouched. The only state
//! transition is `login`, which replaces the session on success.

use serde::Serialize;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::endpoint::Endpoint;
use crate::error::{ApiError, Result};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::query::Query;
use crate::session::Session;
use crate::transport::{Transport, TransportConfig, UreqTransport};
use crate::types::LoginResponse;

const API_ROOT: &str = "/api/v1/";

/// Synchronous client for one Rocket.Chat server.
///
/// Not internally synchronized: share it across threads only behind the
/// caller's own lock, since `login` mutates the session.
#[derive(Debug, Clone)]
pub struct RocketChatClient<T = UreqTransport> {
    api_root: String,
    session: Option<Session>,
    transport: T,
}

impl RocketChatClient<UreqTransport> {
    /// Client for `server` (e.g. `https://chat.example.com`) using a default
    /// ureq transport. Does not touch the network.
    pub fn new(server: &str) -> Self {
        Self::with_transport(server, UreqTransport::default())
    }

    pub fn with_config(server: &str, config: TransportConfig) -> Self {
        Self::with_transport(server, UreqTransport::new(config))
    }
}

impl<T: Transport> RocketChatClient<T> {
    pub fn with_transport(server: &str, transport: T) -> Self {
        Self {
            api_root: format!("{}{API_ROOT}", server.trim_end_matches('/')),
            session: None,
            transport,
        }
    }

    /// `<server>/api/v1/`
    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Replace the whole identity, e.g. to restore a saved session or to drop
    /// the current one.
    pub fn set_session(&mut self, session: Option<Session>) {
        self.session = session;
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.api_root)
    }

    pub fn build_get(&self, endpoint: &str, query: &Query) -> HttpRequest {
        let mut url = self.url(endpoint);
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query.encode());
        }
        HttpRequest {
            method: HttpMethod::Get,
            url,
            headers: self.auth_headers(),
            body: None,
        }
    }

    pub fn build_post<B>(&self, endpoint: &str, body: &B) -> Result<HttpRequest>
    where
        B: Serialize + ?Sized,
    {
        let body =
            serde_json::to_string(body).map_err(|e| ApiError::Serialization(e.to_string()))?;
        let mut headers = vec![("content-type".to_string(), "application/json".to_string())];
        headers.extend(self.auth_headers());
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: self.url(endpoint),
            headers,
            body: Some(body),
        })
    }

    /// GET `endpoint` with `query` appended, returning the raw response.
    pub fn get(&self, endpoint: &str, query: &Query) -> Result<HttpResponse> {
        self.execute(self.build_get(endpoint, query))
    }

    /// POST `body` as JSON to `endpoint`, returning the raw response.
    pub fn post<B>(&self, endpoint: &str, body: &B) -> Result<HttpResponse>
    where
        B: Serialize + ?Sized,
    {
        self.execute(self.build_post(endpoint, body)?)
    }

    /// Authenticate with username and password.
    ///
    /// The session is replaced only when the server answers 200 with
    /// `"status": "success"` and both `data.userId` and `data.authToken`.
    /// Any other answer leaves the current session as it was; inspect the
    /// returned response to find out why.
    pub fn login(&mut self, username: &str, password: &str) -> Result<HttpResponse> {
        let body = json!({ "username": username, "password": password });
        let response = self.submit(Endpoint::Login, &body)?;
        match session_from_login(&response) {
            Some(session) => {
                info!(user_id = session.user_id(), "login succeeded");
                self.session = Some(session);
            }
            None => warn!(status = response.status, username, "login rejected"),
        }
        Ok(response)
    }

    pub(crate) fn fetch(&self, endpoint: Endpoint, query: &Query) -> Result<HttpResponse> {
        debug_assert_eq!(endpoint.method(), HttpMethod::Get, "{endpoint:?}");
        self.note_anonymous(&endpoint);
        self.get(&endpoint.path(), query)
    }

    pub(crate) fn submit<B>(&self, endpoint: Endpoint, body: &B) -> Result<HttpResponse>
    where
        B: Serialize + ?Sized,
    {
        debug_assert_eq!(endpoint.method(), HttpMethod::Post, "{endpoint:?}");
        self.note_anonymous(&endpoint);
        self.post(&endpoint.path(), body)
    }

    fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        debug!(
            method = request.method.as_str(),
            url = %request.url,
            authenticated = request.header(crate::session::AUTH_TOKEN_HEADER).is_some(),
            "sending request"
        );
        let response = self.transport.send(&request)?;
        debug!(status = response.status, "received response");
        Ok(response)
    }

    fn auth_headers(&self) -> Vec<(String, String)> {
        self.session
            .as_ref()
            .and_then(Session::auth_headers)
            .map(Vec::from)
            .unwrap_or_default()
    }

    fn note_anonymous(&self, endpoint: &Endpoint) {
        if endpoint.requires_auth() && self.auth_headers().is_empty() {
            debug!(endpoint = %endpoint.path(), "no session; sending anonymously");
        }
    }
}

fn session_from_login(response: &HttpResponse) -> Option<Session> {
    if response.status != 200 {
        return None;
    }
    let parsed: LoginResponse = response.json().ok()?;
    if parsed.status != "success" {
        return None;
    }
    let data = parsed.data?;
    Some(Session::new(data.user_id, data.auth_token))
}
