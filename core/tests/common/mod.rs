//! Helpers shared by the core integration tests.

#![allow(dead_code)]

use std::cell::RefCell;

use rocketchat_core::{HttpRequest, HttpResponse, Result, Transport};

/// Start the mock server on a random port in a background thread and return
/// its base URL.
pub fn spawn_mock_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

/// Records requests and answers every one with `200 {"success":true}`.
#[derive(Default)]
pub struct Recorder {
    pub requests: RefCell<Vec<HttpRequest>>,
}

impl Recorder {
    pub fn last(&self) -> HttpRequest {
        self.requests.borrow().last().cloned().unwrap()
    }
}

impl Transport for Recorder {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse> {
        self.requests.borrow_mut().push(request.clone());
        Ok(HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: r#"{"success":true}"#.to_string(),
        })
    }
}
