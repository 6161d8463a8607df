//! Filter and search functionality
//!
//! Two kinds of narrowing live here:
//! - **Local filters**: search term, department, status, skill and mentorship,
//!   applied to the person-card tabs and the request list
//! - **Remote search**: the query typed on the Search tab, sent to the API
//!
//! Every change keeps the highlighted card when it is still listed.

use crate::App;
use friendstui::api::{Mentorship, PresenceStatus};
use friendstui::logic::search::FilterCriteria;
use friendstui::{logic, Tab};
use tracing::debug;

impl App {
    // ============================================================================
    // HELPER METHODS
    // ============================================================================

    /// Mutate the filter criteria and restore the selection by id
    fn update_filters(&mut self, change: impl FnOnce(&mut FilterCriteria)) {
        let selected_id = self.selected_id();
        change(&mut self.model.ui.filters);
        debug!("Filters now {:?}", self.model.ui.filters);
        self.reselect(selected_id);
    }

    fn filter_label<T: AsRef<str>>(value: Option<T>) -> String {
        value
            .map(|v| v.as_ref().to_string())
            .unwrap_or_else(|| "All".to_string())
    }

    // ============================================================================
    // FILTER CYCLING
    // ============================================================================

    pub(crate) fn cycle_department_filter(&mut self) {
        let options = self
            .model
            .friends
            .department_options(&self.config.departments);
        let next = logic::ui::cycle_option(self.model.ui.filters.department.as_ref(), &options);

        self.model
            .show_toast(format!("Department: {}", Self::filter_label(next.as_ref())));
        self.update_filters(|f| f.department = next);
    }

    pub(crate) fn cycle_status_filter(&mut self) {
        let next = logic::ui::cycle_option(
            self.model.ui.filters.status.as_ref(),
            &PresenceStatus::ALL,
        );

        self.model.show_toast(format!(
            "Status: {}",
            Self::filter_label(next.map(|s| s.as_str()))
        ));
        self.update_filters(|f| f.status = next);
    }

    /// Cycle a single required skill (the criteria accept several; the
    /// keyboard selects one at a time)
    pub(crate) fn cycle_skill_filter(&mut self) {
        let options = self.model.friends.skill_options();
        let next = logic::ui::cycle_option(self.model.ui.filters.skills.first(), &options);

        self.model
            .show_toast(format!("Skill: {}", Self::filter_label(next.as_ref())));
        self.update_filters(|f| f.skills = next.into_iter().collect());
    }

    pub(crate) fn cycle_mentorship_filter(&mut self) {
        let next = logic::ui::cycle_option(
            self.model.ui.filters.mentorship.as_ref(),
            &Mentorship::ALL,
        );

        self.model.show_toast(format!(
            "Mentorship: {}",
            Self::filter_label(next.map(|m| m.as_str()))
        ));
        self.update_filters(|f| f.mentorship = next);
    }

    pub(crate) fn clear_filters(&mut self) {
        if self.model.ui.filters.is_empty() {
            return;
        }
        let selected_id = self.selected_id();
        self.model.ui.clear_filters();
        self.reselect(selected_id);
        self.model.show_toast("Filters cleared".to_string());
    }

    // ============================================================================
    // SEARCH INPUT
    // ============================================================================

    /// Open the search input for the current tab
    pub(crate) fn start_search(&mut self) {
        let tab = self.model.current_tab();
        if !tab.is_filterable() && tab != Tab::Search {
            return;
        }
        self.model.ui.detail_popup = None;
        self.model.ui.search_mode = true;
    }

    pub(crate) fn search_input_char(&mut self, c: char) {
        if self.model.current_tab() == Tab::Search {
            self.model.ui.remote_query.push(c);
        } else {
            self.update_filters(|f| f.search_term.push(c));
        }
    }

    pub(crate) fn search_backspace(&mut self) {
        if self.model.current_tab() == Tab::Search {
            self.model.ui.remote_query.pop();
        } else {
            self.update_filters(|f| {
                f.search_term.pop();
            });
        }
    }

    /// Enter: close the input, keeping the text (runs the remote search on
    /// the Search tab)
    pub(crate) fn accept_search(&mut self) {
        self.model.ui.search_mode = false;
        if self.model.current_tab() == Tab::Search {
            self.run_remote_search();
        }
    }

    /// Esc: close the input and drop the text
    pub(crate) fn cancel_search(&mut self) {
        self.model.ui.search_mode = false;
        self.clear_search_text();
    }

    pub(crate) fn clear_search_text(&mut self) {
        if self.model.current_tab() == Tab::Search {
            self.model.ui.remote_query.clear();
        } else if !self.model.ui.filters.search_term.is_empty() {
            self.update_filters(|f| f.search_term.clear());
        }
    }
}
