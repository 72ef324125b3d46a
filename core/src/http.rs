//! HTTP request/response values exchanged with a [`Transport`](crate::Transport).
//!
//! # Design
//! Requests and responses are plain data. The client builds `HttpRequest`
//! values, hands them to a transport, and returns the `HttpResponse` it gets
//! back without interpreting it. Keeping both sides as data makes the request
//! shaping testable without a network.

use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// HTTP method for a request. The Rocket.Chat REST surface covered here only
/// uses GET and POST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// An HTTP request described as plain data.
///
/// Built by `RocketChatClient::build_get` / `build_post`. `url` is absolute
/// and already carries the encoded query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Value of the first header named `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

/// An HTTP response described as plain data.
///
/// Returned verbatim to the caller; the client never checks the status for
/// anything except the login state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Decode the body as JSON into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: body.to_string(),
        }
    }

    #[test]
    fn header_lookup_ignores_case() {
        let resp = response(200, "{}");
        assert_eq!(resp.header("content-type"), Some("application/json"));
        assert_eq!(resp.header("x-missing"), None);
    }

    #[test]
    fn success_covers_2xx_only() {
        assert!(response(200, "").is_success());
        assert!(response(204, "").is_success());
        assert!(!response(301, "").is_success());
        assert!(!response(401, "").is_success());
    }

    #[test]
    fn json_decodes_body() {
        let value: serde_json::Value = response(200, r#"{"success":true}"#).json().unwrap();
        assert_eq!(value["success"], true);
    }

    #[test]
    fn json_reports_bad_body() {
        let err = response(502, "<html>bad gateway</html>")
            .json::<serde_json::Value>()
            .unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }
}
