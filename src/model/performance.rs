//! Performance Model
//!
//! This sub-model tracks operational state: in-flight loads, the
//! per-id processing guard for connection actions, and timing.

use std::collections::HashSet;
use std::time::Instant;

use crate::api::PersonId;

/// Loading indicators and in-flight tracking
#[derive(Clone, Debug)]
pub struct PerformanceModel {
    // ============================================
    // IN-FLIGHT TRACKING
    // ============================================
    /// Ids with an accept/decline/connect call in flight
    pub processing: HashSet<PersonId>,

    /// A `GET /friends` is outstanding
    pub loading_friends: bool,

    /// A refetch was asked for while `loading_friends`; the outstanding
    /// fetch may predate the change, so one more follows it
    pub refetch_pending: bool,

    /// A `GET /colleagues` is outstanding
    pub loading_colleagues: bool,

    /// A remote search is outstanding
    pub searching: bool,

    // ============================================
    // METRICS
    // ============================================
    /// Round-trip time of the last friends load (milliseconds)
    pub last_load_time_ms: Option<u64>,

    /// When the current friends load was sent
    pub load_started: Option<Instant>,

    /// Last time user interacted with UI
    pub last_user_action: Instant,
}

impl PerformanceModel {
    pub fn new() -> Self {
        Self {
            processing: HashSet::new(),
            loading_friends: false,
            refetch_pending: false,
            loading_colleagues: false,
            searching: false,
            last_load_time_ms: None,
            load_started: None,
            last_user_action: Instant::now(),
        }
    }

    /// Mark an id as processing
    ///
    /// Returns `false` when the id is already processing, in which case the
    /// caller must not dispatch another call.
    pub fn begin_processing(&mut self, id: &str) -> bool {
        self.processing.insert(id.to_string())
    }

    /// Return an id to idle (after success or failure)
    pub fn finish_processing(&mut self, id: &str) {
        self.processing.remove(id);
    }

    pub fn is_processing(&self, id: &str) -> bool {
        self.processing.contains(id)
    }

    pub fn start_friends_load(&mut self) {
        self.loading_friends = true;
        self.load_started = Some(Instant::now());
    }

    pub fn finish_friends_load(&mut self) {
        self.loading_friends = false;
        if let Some(started) = self.load_started.take() {
            self.last_load_time_ms = Some(started.elapsed().as_millis() as u64);
        }
    }

    /// Consume the pending-refetch flag
    pub fn take_refetch_pending(&mut self) -> bool {
        std::mem::take(&mut self.refetch_pending)
    }

    pub fn record_user_action(&mut self) {
        self.last_user_action = Instant::now();
    }
}

impl Default for PerformanceModel {
    fn default() -> Self {
        Self::new()
    }
}
