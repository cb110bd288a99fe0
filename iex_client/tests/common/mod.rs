//! Shared test harness: a canned-response transport and fixture loading.
#![allow(dead_code)]
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

use iex_client::{HttpResponse, IexClient, IexError, Result, Transport};
use url::Url;

pub const BASE_URL: &str = "http://iex.test/1.0";

/// Serves responses keyed by route and records every requested URL.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<HashMap<String, HttpResponse>>,
    requests: Mutex<Vec<Url>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(MockTransport::default())
    }

    /// Answers `route` (e.g. `deep/book`) with `status` and `body`.
    pub fn respond(&self, route: &str, status: u16, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .insert(route.to_string(), HttpResponse::new(status, body));
    }

    pub fn requests(&self) -> Vec<Url> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Url {
        self.requests().last().cloned().expect("no request was sent")
    }

    /// Decoded query pairs of the last request.
    pub fn last_query(&self) -> Vec<(String, String)> {
        self.last_request().query_pairs().into_owned().collect()
    }
}

impl Transport for MockTransport {
    fn fetch(&self, url: &Url) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(url.clone());
        let route = url.path().trim_start_matches("/1.0/").to_string();
        self.responses
            .lock()
            .unwrap()
            .get(&route)
            .cloned()
            .ok_or_else(|| {
                IexError::transport(io::Error::new(
                    io::ErrorKind::ConnectionRefused,
                    format!("no route for {}", route),
                ))
            })
    }
}

pub fn client(mock: &Arc<MockTransport>) -> IexClient<Arc<MockTransport>> {
    init_logger();
    IexClient::with_transport(Arc::clone(mock))
        .with_base_url(BASE_URL)
        .unwrap()
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Loads `tests/fixtures/<name>.json`.
pub fn fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{}.json", env!("CARGO_MANIFEST_DIR"), name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("missing fixture {}: {}", path, e))
}

/// Mock answering `route` with the named fixture.
pub fn serving(route: &str, fixture_name: &str) -> Arc<MockTransport> {
    let mock = MockTransport::new();
    mock.respond(route, 200, &fixture(fixture_name));
    mock
}
