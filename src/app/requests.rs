//! Request orchestration methods
//!
//! Everything that talks to the background API worker:
//! - Friends/colleague fetches
//! - Accept / decline / connect dispatch behind the per-id processing guard
//! - Remote search

use crate::App;
use friendstui::api::ConnectionAction;
use friendstui::model::SelectedItem;
use friendstui::services::{ApiRequest, Priority};
use friendstui::{logic, Tab};
use std::time::Instant;
use tracing::{debug, info};

impl App {
    // ===== FETCHES =====

    /// Queue a full `FriendsData` refetch
    ///
    /// While a fetch is already outstanding nothing is sent; unless this is
    /// a background refresh, another fetch is queued once that one lands.
    pub(crate) fn refresh_friends(&mut self, priority: Priority) {
        if self.model.performance.loading_friends {
            if priority != Priority::Low {
                debug!("Friends fetch in progress, refetching after it lands");
                self.model.performance.refetch_pending = true;
            }
            return;
        }

        if self.send_request(ApiRequest::FetchFriends { priority }) {
            self.model.performance.start_friends_load();
        }
    }

    pub(crate) fn refresh_colleagues(&mut self) {
        if self.model.performance.loading_colleagues {
            return;
        }

        if self.send_request(ApiRequest::FetchColleagues) {
            self.model.performance.loading_colleagues = true;
        }
    }

    /// Fetch the directory the first time the Colleagues tab is shown
    pub(crate) fn ensure_colleagues_loaded(&mut self) {
        if self.model.friends.colleagues.is_none() {
            self.refresh_colleagues();
        }
    }

    /// User-triggered reload (`r`), also the retry for the failure banner
    pub(crate) fn manual_refresh(&mut self) {
        info!("Manual refresh");

        // Restart the backoff so a recovering server is picked up promptly
        self.reconnect_delay = logic::retry::INITIAL_RECONNECT_DELAY;
        self.last_reconnect_attempt = Instant::now();
        self.last_periodic_refresh = Instant::now();

        self.refresh_friends(Priority::Medium);
        if self.model.friends.colleagues.is_some()
            || self.model.current_tab() == Tab::Colleagues
        {
            self.refresh_colleagues();
        }
        if self.model.current_tab() == Tab::Search {
            self.run_remote_search();
        }
    }

    // ===== CONNECTION ACTIONS =====

    /// Dispatch an action unless one is already processing for `id`
    ///
    /// Returns whether a request was sent.
    pub(crate) fn dispatch_connection_action(
        &mut self,
        id: String,
        action: ConnectionAction,
    ) -> bool {
        if !self.model.performance.begin_processing(&id) {
            debug!("{:?} for {} ignored: already processing", action, id);
            return false;
        }

        info!("{:?} connection {}", action, id);
        if !self.send_request(ApiRequest::ConnectionAction {
            id: id.clone(),
            action,
        }) {
            self.model.performance.finish_processing(&id);
            return false;
        }
        true
    }

    /// Request id targeted by accept/decline (popup first, then the cursor)
    fn target_request_id(&self) -> Option<String> {
        if self.model.current_tab() != Tab::Requests {
            return None;
        }
        if let Some(popup) = &self.model.ui.detail_popup {
            return Some(popup.action_id.clone());
        }
        match self.model.selected_item()? {
            SelectedItem::Request(request) => Some(request.id),
            SelectedItem::Person(_) => None,
        }
    }

    /// Person targeted by connect
    fn target_person(&self) -> Option<(String, String)> {
        if !matches!(
            self.model.current_tab(),
            Tab::Suggestions | Tab::Colleagues
        ) {
            return None;
        }
        if let Some(popup) = &self.model.ui.detail_popup {
            return Some((popup.action_id.clone(), popup.person.full_name()));
        }
        match self.model.selected_item()? {
            SelectedItem::Person(person) => Some((person.id.clone(), person.full_name())),
            SelectedItem::Request(_) => None,
        }
    }

    pub(crate) fn accept_selected(&mut self) {
        if let Some(id) = self.target_request_id() {
            self.dispatch_connection_action(id, ConnectionAction::Accept);
        }
    }

    pub(crate) fn decline_selected(&mut self) {
        if let Some(id) = self.target_request_id() {
            self.dispatch_connection_action(id, ConnectionAction::Decline);
        }
    }

    pub(crate) fn connect_selected(&mut self) {
        let Some((id, name)) = self.target_person() else {
            return;
        };

        let already_connected = self
            .model
            .friends
            .data
            .connections
            .iter()
            .any(|p| p.id == id);
        if already_connected {
            self.model
                .show_toast(format!("Already connected with {}", name));
            return;
        }

        self.dispatch_connection_action(id, ConnectionAction::Request);
    }

    /// Display name for an action target, looked up before the refetch lands
    pub(crate) fn display_name_for(&self, id: &str, action: ConnectionAction) -> Option<String> {
        let data = &self.model.friends.data;
        match action {
            ConnectionAction::Accept | ConnectionAction::Decline => {
                self.model.friends.get_request(id).map(|r| r.from.full_name())
            }
            ConnectionAction::Request => data
                .suggested_connections
                .iter()
                .chain(self.model.friends.colleagues.iter().flatten())
                .find(|p| p.id == id)
                .map(|p| p.full_name()),
        }
    }

    // ===== REMOTE SEARCH =====

    pub(crate) fn run_remote_search(&mut self) {
        let query = self.model.ui.remote_query.trim().to_string();
        if !logic::ui::is_searchable_query(&query) {
            self.model
                .show_toast("Type at least 2 characters to search".to_string());
            return;
        }

        if self.send_request(ApiRequest::Search { query }) {
            self.model.performance.searching = true;
        }
    }
}
