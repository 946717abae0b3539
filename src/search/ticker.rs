// src/search/ticker.rs

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use super::{SearchState, PROGRESS_CAP, PROGRESS_STEP};

/// Drives the cosmetic progress bar while a request is in flight.
///
/// Owning handle for the ticker thread: dropping it stops the thread and
/// joins it, so no tick can land after the search settles. The controller
/// keeps one of these alive for exactly the span of a request.
pub struct ProgressTicker {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl ProgressTicker {
    pub fn start(state: Arc<Mutex<SearchState>>, every: Duration) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = stop.clone();
        let handle = thread::spawn(move || 'ticks: loop {
            // Sleep in short slices so a drop mid-tick joins promptly
            // instead of stalling settlement by a whole interval.
            let mut slept = Duration::ZERO;
            while slept < every {
                let slice = (every - slept).min(Duration::from_millis(25));
                thread::sleep(slice);
                slept += slice;
                if flag.load(Ordering::Acquire) {
                    break 'ticks;
                }
            }
            let mut st = state.lock().unwrap();
            if st.is_loading && st.progress < PROGRESS_CAP {
                st.progress = (st.progress + PROGRESS_STEP).min(PROGRESS_CAP);
            }
        });
        Self { stop, handle: Some(handle) }
    }
}

impl Drop for ProgressTicker {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Release);
        if let Some(h) = self.handle.take() {
            let _ = h.join();
        }
    }
}
