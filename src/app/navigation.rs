//! Navigation orchestration methods
//!
//! Methods for moving around the card lists:
//! - Switching tabs (loading colleagues on first visit)
//! - Moving selection up/down/first/last
//! - Keeping the highlighted card stable across refreshes and filter changes
//! - Opening and closing the detail popup

use crate::App;
use friendstui::model::{DetailPopupState, SelectedItem, VimCommandState};
use friendstui::{logic, Tab};
use tracing::debug;

impl App {
    /// Ids of the rows currently listed on the active tab, in display order
    pub(crate) fn current_ids(&self) -> Vec<String> {
        let tab = self.model.current_tab();
        match tab {
            Tab::Connections | Tab::Suggestions | Tab::Colleagues => self
                .model
                .visible_people(tab)
                .into_iter()
                .map(|p| p.id)
                .collect(),
            Tab::Requests => self
                .model
                .visible_requests()
                .into_iter()
                .map(|r| r.id)
                .collect(),
            Tab::Activity => self
                .model
                .friends
                .data
                .recent_activity
                .iter()
                .map(|item| item.id.clone())
                .collect(),
            Tab::Search => self
                .model
                .friends
                .search_results
                .as_ref()
                .map(|(_, response)| response.results.iter().map(|r| r.id.clone()).collect())
                .unwrap_or_default(),
        }
    }

    /// Id of the highlighted row on the active tab
    pub(crate) fn selected_id(&self) -> Option<String> {
        let idx = self.model.navigation.current_selection()?;
        self.current_ids().into_iter().nth(idx)
    }

    /// Re-point the selection after the visible list changed
    ///
    /// Follows `previous_id` if it is still listed, otherwise clamps the old
    /// index, otherwise falls back to the first row.
    pub(crate) fn reselect(&mut self, previous_id: Option<String>) {
        let tab = self.model.current_tab();
        let ids = self.current_ids();

        let by_id = previous_id
            .as_deref()
            .and_then(|id| logic::navigation::find_index_by_id(ids.iter().map(String::as_str), id));

        let selection = by_id
            .or_else(|| {
                logic::navigation::clamp_selection(self.model.navigation.selected(tab), ids.len())
            })
            .or(if ids.is_empty() { None } else { Some(0) });

        self.model.navigation.set_selected(tab, selection);
    }

    // ===== ITEM SELECTION =====

    pub(crate) fn next_item(&mut self) {
        let tab = self.model.current_tab();
        let len = self.model.list_len(tab);
        let next = logic::navigation::next_selection(self.model.navigation.selected(tab), len);
        self.model.navigation.set_selected(tab, next);
    }

    pub(crate) fn previous_item(&mut self) {
        let tab = self.model.current_tab();
        let len = self.model.list_len(tab);
        let prev = logic::navigation::prev_selection(self.model.navigation.selected(tab), len);
        self.model.navigation.set_selected(tab, prev);
    }

    pub(crate) fn jump_to_first(&mut self) {
        let tab = self.model.current_tab();
        if self.model.list_len(tab) > 0 {
            self.model.navigation.set_selected(tab, Some(0));
        }
    }

    pub(crate) fn jump_to_last(&mut self) {
        let tab = self.model.current_tab();
        let len = self.model.list_len(tab);
        if len > 0 {
            self.model.navigation.set_selected(tab, Some(len - 1));
        }
    }

    // ===== TABS =====

    pub(crate) fn select_tab(&mut self, tab: Tab) {
        if tab == self.model.current_tab() {
            return;
        }

        debug!("Switching to tab {:?}", tab);
        self.model.navigation.current_tab = tab;
        self.model.ui.close_all_modals();
        self.model.ui.vim_command_state = VimCommandState::None;

        if tab == Tab::Colleagues {
            self.ensure_colleagues_loaded();
        }

        self.reselect(None);
    }

    pub(crate) fn next_tab(&mut self) {
        self.select_tab(logic::ui::next_tab(self.model.current_tab()));
    }

    pub(crate) fn previous_tab(&mut self) {
        self.select_tab(logic::ui::prev_tab(self.model.current_tab()));
    }

    // ===== DETAIL POPUP =====

    pub(crate) fn open_detail(&mut self) {
        let popup = match self.model.selected_item() {
            Some(SelectedItem::Person(person)) => DetailPopupState::for_person(person),
            Some(SelectedItem::Request(request)) => DetailPopupState::for_request(&request),
            None => return,
        };
        self.model.ui.detail_popup = Some(popup);
    }

    pub(crate) fn close_detail(&mut self) {
        self.model.ui.detail_popup = None;
    }
}
