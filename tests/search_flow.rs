// tests/search_flow.rs
//
// Full search state machine against a recording fake client — no sockets.

use std::error::Error;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use homescout::search::client::{HttpResponse, PropertyClient};
use homescout::search::{SearchController, SearchError};

const ADDRESS: &str = "1600 Amphitheatre Parkway, Mountain View, CA 94043";

const PAYLOAD: &str = r#"{
    "address": "1600 Amphitheatre Parkway, Mountain View, CA 94043",
    "details": { "size": "180 m²", "value": 2500000, "last_updated": "2026-08-01T00:00:00Z" },
    "schools": [
        { "name": "Hillview Public", "rating": 4, "distance_km": 1.2, "type": "public" },
        { "name": "St. Mary Academy", "rating": 5, "distance_km": 2.4, "type": "private" }
    ]
}"#;

enum Reply {
    Http(u16, &'static str),
    Transport,
}

struct FakeClient {
    reply: Reply,
    calls: Mutex<Vec<String>>,
}

impl FakeClient {
    fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self { reply, calls: Mutex::new(Vec::new()) })
    }
    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl PropertyClient for FakeClient {
    fn fetch(&self, address: &str) -> Result<HttpResponse, Box<dyn Error>> {
        self.calls.lock().unwrap().push(address.to_string());
        match &self.reply {
            Reply::Http(status, body) => Ok(HttpResponse {
                status: *status,
                body: body.to_string(),
            }),
            Reply::Transport => Err("connection refused".into()),
        }
    }
}

fn controller(client: Arc<FakeClient>) -> SearchController {
    let mut ctrl = SearchController::with_client(client);
    ctrl.set_success_hold(Duration::ZERO);
    ctrl
}

#[test]
fn valid_address_fires_exactly_one_request_and_succeeds() {
    let client = FakeClient::new(Reply::Http(200, PAYLOAD));
    let ctrl = controller(client.clone());

    assert!(ctrl.submit(ADDRESS));
    assert!(ctrl.is_loading());
    ctrl.run_request(ADDRESS);

    assert_eq!(client.calls(), vec![ADDRESS.to_string()]);

    let st = ctrl.snapshot();
    assert!(!st.is_loading);
    assert_eq!(st.progress, 100);
    assert!(st.error.is_none());
    let result = st.result.expect("success should carry a result");
    assert_eq!(result.address, ADDRESS);
    assert_eq!(result.details.size, "180 m²");
}

#[test]
fn best_rated_school_renders_first() {
    let client = FakeClient::new(Reply::Http(200, PAYLOAD));
    let ctrl = controller(client);

    assert!(ctrl.submit(ADDRESS));
    ctrl.run_request(ADDRESS);

    let result = ctrl.snapshot().result.expect("result");
    let ordered = result.schools_by_rating();
    assert_eq!(ordered[0].name, "St. Mary Academy"); // rating 5 before rating 4
    assert_eq!(ordered[1].name, "Hillview Public");
}

#[test]
fn empty_input_is_rejected_without_a_request() {
    let client = FakeClient::new(Reply::Http(200, PAYLOAD));
    let ctrl = controller(client.clone());

    assert!(!ctrl.submit("   "));
    let st = ctrl.snapshot();
    assert!(!st.is_loading);
    assert_eq!(st.error, Some(SearchError::EmptyInput));
    assert!(st.result.is_none());
    assert!(client.calls().is_empty());
}

#[test]
fn malformed_address_is_rejected_without_a_request() {
    let client = FakeClient::new(Reply::Http(200, PAYLOAD));
    let ctrl = controller(client.clone());

    assert!(!ctrl.submit("abc"));
    let st = ctrl.snapshot();
    assert!(!st.is_loading);
    assert!(matches!(st.error, Some(SearchError::MalformedAddress(_))));
    assert!(st.result.is_none());
    assert!(client.calls().is_empty());
}

#[test]
fn http_404_maps_to_not_found() {
    let client = FakeClient::new(Reply::Http(404, "property not found"));
    let ctrl = controller(client);

    assert!(ctrl.submit(ADDRESS));
    ctrl.run_request(ADDRESS);

    let st = ctrl.snapshot();
    assert!(!st.is_loading);
    assert_eq!(st.error, Some(SearchError::NotFound));
    assert!(st.result.is_none());
}

#[test]
fn transport_failure_maps_to_network_failure_and_settles() {
    let client = FakeClient::new(Reply::Transport);
    let ctrl = controller(client);

    assert!(ctrl.submit(ADDRESS));
    ctrl.run_request(ADDRESS);

    let st = ctrl.snapshot();
    assert!(!st.is_loading);
    assert_eq!(st.error, Some(SearchError::NetworkFailure));
    assert!(st.result.is_none());
}

#[test]
fn unparseable_payload_maps_to_generic() {
    let client = FakeClient::new(Reply::Http(200, "<html>definitely not json</html>"));
    let ctrl = controller(client);

    assert!(ctrl.submit(ADDRESS));
    ctrl.run_request(ADDRESS);

    let st = ctrl.snapshot();
    assert!(!st.is_loading);
    assert_eq!(st.error, Some(SearchError::Generic));
    assert!(st.result.is_none());
}

#[test]
fn submission_while_loading_is_dropped() {
    let client = FakeClient::new(Reply::Http(200, PAYLOAD));
    let ctrl = controller(client.clone());

    assert!(ctrl.submit(ADDRESS));
    // second submission arrives before settlement
    assert!(!ctrl.submit("12 Main St, Springfield"));

    ctrl.run_request(ADDRESS);
    assert_eq!(client.calls().len(), 1);
}

#[test]
fn progress_resets_at_the_start_of_the_next_search() {
    let client = FakeClient::new(Reply::Http(200, PAYLOAD));
    let ctrl = controller(client.clone());

    assert!(ctrl.submit(ADDRESS));
    ctrl.run_request(ADDRESS);
    assert_eq!(ctrl.snapshot().progress, 100);

    // new search: progress back to 0, previous result cleared
    assert!(ctrl.submit("12 Main St, Springfield"));
    let st = ctrl.snapshot();
    assert_eq!(st.progress, 0);
    assert!(st.is_loading);
    assert!(st.result.is_none());
    assert!(st.error.is_none());

    ctrl.run_request("12 Main St, Springfield");
    assert_eq!(client.calls().len(), 2);
    assert!(!ctrl.is_loading());
}
