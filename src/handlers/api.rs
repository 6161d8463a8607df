//! API Response Handler
//!
//! Handles responses from the Friends API background service.
//! Processes the friends payload, colleague directory, connection actions
//! and remote search results.

use friendstui::api::ConnectionAction;
use friendstui::logic::errors::{classify_error, format_error_message};
use friendstui::model::ConnectionState;
use friendstui::services::{ApiResponse, Priority};
use friendstui::Tab;
use tracing::{debug, info, warn};

use crate::App;

/// Handle API response from background service
///
/// Response types:
/// - FriendsResult: Aggregate payload (stats, connections, requests, activity)
/// - ColleaguesResult: Colleague directory
/// - ActionResult: Outcome of accept / decline / connect
/// - SearchResult: Remote search hits
pub fn handle_api_response(app: &mut App, response: ApiResponse) {
    match response {
        ApiResponse::FriendsResult { data } => {
            app.model.performance.finish_friends_load();
            let refetch = app.model.performance.take_refetch_pending();

            let data = match data {
                Ok(data) => data,
                Err(error) => {
                    // The reconnect loop fetches again, so a pending refetch
                    // is covered by it
                    warn!("Failed to load friends data: {:#}", error);
                    let message = format_error_message(&error);

                    // While retrying, keep the Connecting state and just
                    // remember why the last attempt failed
                    match &mut app.model.friends.connection_state {
                        ConnectionState::Connecting {
                            attempt,
                            last_error,
                            ..
                        } if *attempt > 0 => {
                            *last_error = Some(message);
                        }
                        state => {
                            *state = ConnectionState::Disconnected {
                                error_type: classify_error(&error),
                                message,
                            };
                        }
                    }
                    return;
                }
            };

            let was_connected = app.model.friends.is_connected();
            let selected_id = app.selected_id();

            debug!(
                "Friends data: {} connections, {} requests, {} suggestions",
                data.connections.len(),
                data.pending_requests.len(),
                data.suggested_connections.len()
            );
            app.model.friends.apply_friends_data(data);
            app.reselect(selected_id);

            if !was_connected {
                info!("Connected to {}", app.base_url);
            }

            if refetch {
                debug!("Payload may predate a change, refetching");
                app.refresh_friends(Priority::Medium);
            }
        }

        ApiResponse::ColleaguesResult { colleagues } => {
            app.model.performance.loading_colleagues = false;

            match colleagues {
                Ok(colleagues) => {
                    debug!("Loaded {} colleagues", colleagues.len());
                    let selected_id = app.selected_id();
                    app.model.friends.colleagues = Some(colleagues);
                    if app.model.current_tab() == Tab::Colleagues {
                        app.reselect(selected_id);
                    }
                }
                Err(error) => {
                    // Left unloaded so the next visit to the tab retries
                    warn!("Failed to load colleagues: {:#}", error);
                    app.model.show_toast(format!(
                        "Error: Failed to load colleagues: {}",
                        format_error_message(&error)
                    ));
                }
            }
        }

        ApiResponse::ActionResult { id, action, result } => {
            let name = app.display_name_for(&id, action);

            // Success and failure both return the id to idle
            app.model.performance.finish_processing(&id);

            match result {
                Ok(()) => {
                    info!("{:?} for {} succeeded", action, id);

                    if app
                        .model
                        .ui
                        .detail_popup
                        .as_ref()
                        .is_some_and(|popup| popup.action_id == id)
                    {
                        app.close_detail();
                    }

                    let message = match (action, name) {
                        (ConnectionAction::Request, Some(name)) => {
                            format!("Connection request sent to {}", name)
                        }
                        (ConnectionAction::Request, None) => "Connection request sent".to_string(),
                        (_, Some(name)) => format!("Connection with {} {}", name, action.past_tense()),
                        (_, None) => format!("Connection {}", action.past_tense()),
                    };
                    app.model.show_toast(message);

                    // Only success triggers the refetch
                    app.refresh_friends(Priority::Medium);
                }
                Err(error) => {
                    warn!("{:?} for {} failed: {:#}", action, id, error);
                    app.model.show_toast(format!(
                        "Error: Failed to {} connection: {}",
                        action.path_segment(),
                        format_error_message(&error)
                    ));
                }
            }
        }

        ApiResponse::SearchResult { query, response } => {
            app.model.performance.searching = false;

            // Ignore answers to a query the user has since edited away from
            if !query.eq_ignore_ascii_case(app.model.ui.remote_query.trim()) {
                debug!("Discarding stale search results for {:?}", query);
                return;
            }

            match response {
                Ok(response) => {
                    debug!("Search {:?}: {} results", query, response.results.len());
                    app.model.friends.search_results = Some((query, response));
                    if app.model.current_tab() == Tab::Search {
                        app.reselect(None);
                    }
                }
                Err(error) => {
                    warn!("Search {:?} failed: {:#}", query, error);
                    app.model.show_toast(format!(
                        "Error: Search failed: {}",
                        format_error_message(&error)
                    ));
                }
            }
        }
    }
}
