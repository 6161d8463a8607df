//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models:
//!
//! - **FriendsModel**: Friends API data (connections, requests, colleagues)
//! - **NavigationModel**: Current tab and per-tab selection
//! - **UiModel**: Preferences, filters, popups, toasts
//! - **PerformanceModel**: Processing guard, loading flags, timing
//!
//! No I/O happens here; the binary's `App` owns the client and worker.

pub mod friends;
pub mod navigation;
pub mod performance;
pub mod types;
pub mod ui;

pub use friends::{ConnectionState, FriendsModel};
pub use navigation::NavigationModel;
pub use performance::PerformanceModel;
pub use types::*;
pub use ui::UiModel;

use crate::api::{ConnectionRequest, Person};
use crate::{SortMode, Tab};

/// What the highlighted card on the current tab refers to
#[derive(Clone, Debug, PartialEq)]
pub enum SelectedItem {
    Person(Person),
    Request(ConnectionRequest),
}

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    pub friends: FriendsModel,
    pub navigation: NavigationModel,
    pub ui: UiModel,
    pub performance: PerformanceModel,
}

impl Model {
    pub fn new(vim_mode: bool, initial_tab: Tab, sort_mode: SortMode) -> Self {
        Self {
            friends: FriendsModel::new(),
            navigation: NavigationModel::new(initial_tab),
            ui: UiModel::new(vim_mode, sort_mode),
            performance: PerformanceModel::new(),
        }
    }

    pub fn current_tab(&self) -> Tab {
        self.navigation.current_tab
    }

    /// People currently listed on a person-card tab
    pub fn visible_people(&self, tab: Tab) -> Vec<Person> {
        self.friends.visible_people(
            tab,
            &self.ui.filters,
            self.ui.sort_mode,
            self.ui.sort_reverse,
        )
    }

    pub fn visible_requests(&self) -> Vec<ConnectionRequest> {
        self.friends.visible_requests(&self.ui.filters)
    }

    /// Number of selectable rows on a tab
    pub fn list_len(&self, tab: Tab) -> usize {
        match tab {
            Tab::Connections | Tab::Suggestions | Tab::Colleagues => {
                self.visible_people(tab).len()
            }
            Tab::Requests => self.visible_requests().len(),
            Tab::Activity => self.friends.data.recent_activity.len(),
            Tab::Search => self
                .friends
                .search_results
                .as_ref()
                .map(|(_, response)| response.results.len())
                .unwrap_or(0),
        }
    }

    /// Item under the cursor on the current tab
    pub fn selected_item(&self) -> Option<SelectedItem> {
        let tab = self.current_tab();
        let idx = self.navigation.selected(tab)?;
        match tab {
            Tab::Connections | Tab::Suggestions | Tab::Colleagues => self
                .visible_people(tab)
                .into_iter()
                .nth(idx)
                .map(SelectedItem::Person),
            Tab::Requests => self
                .visible_requests()
                .into_iter()
                .nth(idx)
                .map(SelectedItem::Request),
            Tab::Activity => self
                .friends
                .data
                .recent_activity
                .get(idx)
                .and_then(|item| item.user.clone())
                .map(SelectedItem::Person),
            Tab::Search => None,
        }
    }

    pub fn has_modal(&self) -> bool {
        self.ui.has_modal()
    }

    pub fn record_user_action(&mut self) {
        self.performance.record_user_action();
    }

    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }

    pub fn should_dismiss_toast(&self) -> bool {
        self.ui.should_dismiss_toast()
    }

    pub fn dismiss_toast(&mut self) {
        self.ui.dismiss_toast();
    }
}
