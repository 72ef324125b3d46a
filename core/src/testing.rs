//! In-memory transport shared by the unit tests.

use std::cell::RefCell;
use std::collections::{BTreeSet, VecDeque};

use serde_json::Value;

use crate::client::RocketChatClient;
use crate::endpoint::Endpoint;
use crate::error::{ApiError, Result};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::Transport;

/// Records every request and answers from a queue of canned responses,
/// falling back to `200 {"success":true}` when the queue is empty.
#[derive(Debug, Default)]
pub(crate) struct RecordingTransport {
    requests: RefCell<Vec<HttpRequest>>,
    // `None` entries fail the call with a transport error.
    replies: RefCell<VecDeque<Option<HttpResponse>>>,
}

impl RecordingTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(&self, status: u16, body: &str) {
        self.replies.borrow_mut().push_back(Some(HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }));
    }

    pub(crate) fn fail_next(&self) {
        self.replies.borrow_mut().push_back(None);
    }

    pub(crate) fn count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub(crate) fn last(&self) -> HttpRequest {
        self.requests
            .borrow()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

impl Transport for RecordingTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse> {
        self.requests.borrow_mut().push(request.clone());
        match self.replies.borrow_mut().pop_front() {
            Some(Some(response)) => Ok(response),
            Some(None) => Err(ApiError::transport(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            ))),
            None => Ok(ok()),
        }
    }
}

pub(crate) fn ok() -> HttpResponse {
    HttpResponse {
        status: 200,
        headers: Vec::new(),
        body: r#"{"success":true}"#.to_string(),
    }
}

pub(crate) fn client() -> RocketChatClient<RecordingTransport> {
    RocketChatClient::with_transport("http://chat.test", RecordingTransport::new())
}

/// Sent body decoded as JSON.
pub(crate) fn body_of(request: &HttpRequest) -> serde_json::Value {
    serde_json::from_str(request.body.as_deref().expect("request has no body"))
        .expect("body is not JSON")
}

/// One wrapper invocation against the recording client.
pub(crate) type Call = fn(&RocketChatClient<RecordingTransport>) -> Result<HttpResponse>;

/// Runs each call on a fresh client and checks the request it sent: the URL
/// (path plus query, relative to the API root) and, for POSTs, the JSON body.
/// A `None` body means the call must be a GET. Returns the paths hit.
pub(crate) fn check_calls(cases: &[(Call, &str, Option<Value>)]) -> BTreeSet<String> {
    let mut hit = BTreeSet::new();
    for (call, target, body) in cases {
        let c = client();
        call(&c).unwrap_or_else(|e| panic!("{target}: {e}"));
        assert_eq!(c.transport().count(), 1, "{target}: one request");
        let req = c.transport().last();
        assert_eq!(req.url, format!("http://chat.test/api/v1/{target}"), "{target}: url");
        match body {
            Some(expected) => {
                assert_eq!(req.method, HttpMethod::Post, "{target}: method");
                assert_eq!(&body_of(&req), expected, "{target}: body");
            }
            None => {
                assert_eq!(req.method, HttpMethod::Get, "{target}: method");
                assert!(req.body.is_none(), "{target}: GET carries no body");
            }
        }
        let path = target.split('?').next().unwrap_or(target);
        assert!(hit.insert(path.to_string()), "{path} hit by two wrappers");
    }
    hit
}

/// Catalog paths starting with `prefix`, e.g. `"groups."`.
pub(crate) fn family_paths(prefix: &str) -> BTreeSet<String> {
    Endpoint::fixed()
        .iter()
        .map(|e| e.path().into_owned())
        .filter(|p| p.starts_with(prefix))
        .collect()
}
