use anyhow::Result;
use std::collections::{HashSet, VecDeque};
use tokio::sync::mpsc;
use tokio::time::{interval, Duration};
use tracing::{debug, warn};

use crate::api::{ConnectionAction, FriendsClient, FriendsData, Person, PersonId, SearchResponse};

/// Priority level for API requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    High,   // User-initiated actions (accept, decline, connect, search)
    Medium, // Fetches the user asked for (startup, manual refresh, tab open)
    Low,    // Periodic background refresh
}

/// Unique identifier for deduplicating requests
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum RequestKey {
    Friends,
    Colleagues,
    Search { query: String },
    Action { id: PersonId },
}

/// API request types
#[derive(Debug, Clone)]
pub enum ApiRequest {
    /// Fetch the aggregate friends payload
    FetchFriends { priority: Priority },

    /// Fetch the colleague directory
    FetchColleagues,

    /// Accept, decline or send a connection request (always high priority)
    ConnectionAction { id: PersonId, action: ConnectionAction },

    /// Remote people search
    Search { query: String },
}

impl ApiRequest {
    /// Extract priority from request
    fn priority(&self) -> Priority {
        match self {
            ApiRequest::FetchFriends { priority } => *priority,
            ApiRequest::FetchColleagues => Priority::Medium,
            ApiRequest::ConnectionAction { .. } | ApiRequest::Search { .. } => Priority::High,
        }
    }

    /// Generate a unique key for deduplication
    ///
    /// Actions are keyed by id alone: accept and decline for the same id
    /// are mutually exclusive.
    fn key(&self) -> RequestKey {
        match self {
            ApiRequest::FetchFriends { .. } => RequestKey::Friends,
            ApiRequest::FetchColleagues => RequestKey::Colleagues,
            ApiRequest::ConnectionAction { id, .. } => RequestKey::Action { id: id.clone() },
            ApiRequest::Search { query } => RequestKey::Search {
                query: query.trim().to_lowercase(),
            },
        }
    }
}

/// API response types
#[derive(Debug)]
pub enum ApiResponse {
    FriendsResult {
        data: Result<FriendsData>,
    },

    ColleaguesResult {
        colleagues: Result<Vec<Person>>,
    },

    ActionResult {
        id: PersonId,
        action: ConnectionAction,
        result: Result<()>,
    },

    SearchResult {
        query: String,
        response: Result<SearchResponse>,
    },
}

/// Internal message for tracking completed requests
pub(crate) enum InternalMessage {
    Completed(RequestKey),
}

/// API service worker that processes requests in the background
pub struct ApiService {
    client: FriendsClient,
    request_queue: VecDeque<(ApiRequest, Priority)>,
    in_flight: HashSet<RequestKey>,
    response_tx: mpsc::UnboundedSender<ApiResponse>,
    completion_tx: mpsc::UnboundedSender<InternalMessage>,
    max_concurrent: usize,
}

impl ApiService {
    pub(crate) fn new(
        client: FriendsClient,
        response_tx: mpsc::UnboundedSender<ApiResponse>,
        completion_tx: mpsc::UnboundedSender<InternalMessage>,
    ) -> Self {
        Self {
            client,
            request_queue: VecDeque::new(),
            in_flight: HashSet::new(),
            response_tx,
            completion_tx,
            max_concurrent: 10, // Limit concurrent API calls
        }
    }

    /// Add a request to the queue
    ///
    /// Returns `false` (and drops the request) when a request with the same
    /// key is already queued or in flight.
    pub(crate) fn enqueue(&mut self, request: ApiRequest) -> bool {
        let key = request.key();
        let queued = self.request_queue.iter().any(|(r, _)| r.key() == key);
        if queued || self.in_flight.contains(&key) {
            debug!("Dropping duplicate request {:?}", key);
            return false;
        }

        let priority = request.priority();

        // Insert based on priority (high priority at front)
        let insert_pos = self
            .request_queue
            .iter()
            .position(|(_, p)| *p > priority)
            .unwrap_or(self.request_queue.len());

        self.request_queue.insert(insert_pos, (request, priority));
        true
    }

    /// Start the next queued request, if under the concurrency cap
    pub(crate) fn process_next(&mut self) {
        if self.in_flight.len() >= self.max_concurrent {
            return; // At capacity, wait for some to complete
        }

        let Some((request, _)) = self.request_queue.pop_front() else {
            return; // Queue is empty
        };

        let key = request.key();
        self.in_flight.insert(key.clone());

        let client = self.client.clone();
        let response_tx = self.response_tx.clone();
        let completion_tx = self.completion_tx.clone();

        // No per-request retries: the app's reconnect loop handles fetches,
        // and actions are never retried
        tokio::spawn(async move {
            let response = Self::execute_request(&client, request).await;

            // Release the key before the app can see the response, so a
            // follow-up request it sends is never mistaken for a duplicate
            let _ = completion_tx.send(InternalMessage::Completed(key.clone()));

            if response_tx.send(response).is_err() {
                debug!("Response receiver dropped, discarding result for {:?}", key);
            }
        });
    }

    pub(crate) fn complete(&mut self, key: &RequestKey) {
        self.in_flight.remove(key);
    }

    /// Execute an API request and return the response
    async fn execute_request(client: &FriendsClient, request: ApiRequest) -> ApiResponse {
        match request {
            ApiRequest::FetchFriends { priority } => {
                debug!("Fetching friends data ({:?} priority)", priority);
                let data = client.get_friends_data().await;
                ApiResponse::FriendsResult { data }
            }

            ApiRequest::FetchColleagues => {
                let colleagues = client.get_colleagues().await;
                ApiResponse::ColleaguesResult { colleagues }
            }

            ApiRequest::ConnectionAction { id, action } => {
                debug!("Dispatching {:?} for {}", action, id);
                let result = client.connection_action(&id, action).await;
                if let Err(e) = &result {
                    warn!("{:?} for {} failed: {:#}", action, id, e);
                }
                ApiResponse::ActionResult { id, action, result }
            }

            ApiRequest::Search { query } => {
                let response = client.search(&query).await;
                ApiResponse::SearchResult { query, response }
            }
        }
    }
}

/// Spawn the API service worker
pub fn spawn_api_service(
    client: FriendsClient,
) -> (
    mpsc::UnboundedSender<ApiRequest>,
    mpsc::UnboundedReceiver<ApiResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ApiRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<ApiResponse>();
    let (completion_tx, mut completion_rx) = mpsc::unbounded_channel::<InternalMessage>();

    tokio::spawn(async move {
        let mut service = ApiService::new(client, response_tx, completion_tx);

        // Ticker for processing queue
        let mut tick = interval(Duration::from_millis(10));

        loop {
            // Completions first: a finished key must be released before a
            // request that arrived after its response is considered
            tokio::select! {
                biased;

                Some(InternalMessage::Completed(key)) = completion_rx.recv() => {
                    service.complete(&key);
                }

                request = request_rx.recv() => match request {
                    Some(request) => {
                        if !service.enqueue(request) {
                            warn!("Request dropped: an identical one is still pending");
                        }
                    }
                    None => {
                        debug!("Request channel closed, stopping API service");
                        break;
                    }
                },

                _ = tick.tick() => {
                    // Start several requests per tick if the queue has items
                    for _ in 0..5 {
                        if service.request_queue.is_empty() {
                            break;
                        }
                        service.process_next();
                    }
                }
            }
        }
    });

    (request_tx, response_rx)
}
