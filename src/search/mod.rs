// src/search/mod.rs
//
// The search state machine: idle → loading → success/error. One shared
// SearchState instance (UI thread reads it, the request worker and the
// progress ticker write it), one request per accepted submission.

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use crate::config::ApiConfig;
use crate::property::PropertyResult;
use crate::validate;

pub mod client;
pub mod error;
pub mod ticker;

pub use client::{HttpPropertyClient, PropertyClient};
pub use error::SearchError;
use ticker::ProgressTicker;

// Synthetic progress cadence. The request gives no real progress signal, so
// the bar creeps in fixed steps and parks below 100 until settlement.
pub const PROGRESS_TICK: Duration = Duration::from_millis(2000);
pub const PROGRESS_STEP: u8 = 20;
pub const PROGRESS_CAP: u8 = 90;

/// How long the full bar stays up after a successful fetch before the UI
/// flips back to idle. Presentational only.
pub const SUCCESS_HOLD: Duration = Duration::from_millis(2000);

#[derive(Clone, Debug, Default)]
pub struct SearchState {
    /// The last submitted address, trimmed.
    pub address: String,
    pub is_loading: bool,
    /// 0..=100. Monotone within one loading episode, reset on the next.
    pub progress: u8,
    pub error: Option<SearchError>,
    pub result: Option<PropertyResult>,
}

impl SearchState {
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(|e| e.to_string())
    }
}

#[derive(Clone)]
pub struct SearchController {
    client: Arc<dyn PropertyClient + Send + Sync>,
    state: Arc<Mutex<SearchState>>,
    success_hold: Duration,
}

impl SearchController {
    pub fn new(config: ApiConfig) -> Self {
        let client = Arc::new(HttpPropertyClient::new(config));
        Self::with_client(client)
    }

    /// Inject a client. Tests use this to drop in a recording fake.
    pub fn with_client(client: Arc<dyn PropertyClient + Send + Sync>) -> Self {
        Self {
            client,
            state: Arc::new(Mutex::new(SearchState::default())),
            success_hold: SUCCESS_HOLD,
        }
    }

    /// The CLI and tests have no bar to hold full; zero skips the delay.
    pub fn set_success_hold(&mut self, hold: Duration) {
        self.success_hold = hold;
    }

    pub fn snapshot(&self) -> SearchState {
        self.state.lock().unwrap().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.lock().unwrap().is_loading
    }

    /// Fire a search on a worker thread. Local validation runs synchronously
    /// here; submissions are serialized, so a search arriving while one is
    /// loading is dropped.
    pub fn search(&self, address: &str) {
        if !self.submit(address) {
            return;
        }
        let ctrl = self.clone();
        let addr = s!(address);
        thread::spawn(move || ctrl.run_request(&addr));
    }

    /// Local checks and the transition into loading. Returns false when no
    /// request should be issued (empty input, malformed address, or a search
    /// already in flight).
    pub fn submit(&self, address: &str) -> bool {
        let mut st = self.state.lock().unwrap();
        if st.is_loading {
            logd!("Search: ignored, one already running");
            return false;
        }

        st.address = s!(address.trim());
        st.result = None;
        st.error = None;
        st.progress = 0;

        if st.address.is_empty() {
            st.error = Some(SearchError::EmptyInput);
            return false;
        }
        let v = validate::validate_address(address);
        if !v.is_valid {
            let msg = v.error.unwrap_or_else(|| s!("Invalid address"));
            logd!("Search: rejected \"{}\": {}", st.address, msg);
            st.error = Some(SearchError::MalformedAddress(msg));
            return false;
        }

        st.is_loading = true;
        logf!("Search: begin \"{}\"", st.address);
        true
    }

    /// The request leg. Runs after a `submit` that returned true; clears
    /// `is_loading` and cancels the ticker on every exit path.
    pub fn run_request(&self, address: &str) {
        let _ticker = ProgressTicker::start(self.state.clone(), PROGRESS_TICK);

        match self.client.fetch(address) {
            Ok(resp) if resp.is_success() => {
                match serde_json::from_str::<PropertyResult>(&resp.body) {
                    Ok(property) => {
                        logf!("Search: OK \"{}\" ({} schools)", address, property.schools.len());
                        {
                            let mut st = self.state.lock().unwrap();
                            st.progress = 100;
                            st.error = None;
                            st.result = Some(property);
                        }
                        if !self.success_hold.is_zero() {
                            thread::sleep(self.success_hold);
                        }
                    }
                    Err(e) => {
                        loge!("Search: bad payload for \"{}\": {}", address, e);
                        self.fail(SearchError::Generic);
                    }
                }
            }
            Ok(resp) => {
                let err = error::classify_response(resp.status, &resp.body);
                loge!("Search: HTTP {} for \"{}\" → {:?}", resp.status, address, err);
                self.fail(err);
            }
            Err(e) => {
                loge!("Search: transport failure for \"{}\": {}", address, e);
                self.fail(SearchError::NetworkFailure);
            }
        }

        {
            let mut st = self.state.lock().unwrap();
            st.is_loading = false;
        }
        // _ticker drops here, outside the lock: stop flag set, thread joined.
    }

    fn fail(&self, err: SearchError) {
        let mut st = self.state.lock().unwrap();
        st.result = None;
        st.error = Some(err);
    }
}
