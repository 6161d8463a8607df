//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! preferences, filters, search input, popups, and visual state.

use std::time::Instant;

use super::types::{DetailPopupState, VimCommandState};
use crate::logic::search::FilterCriteria;
use crate::SortMode;

/// UI preferences and popups
#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // PREFERENCES
    // ============================================
    /// Current sort mode
    pub sort_mode: SortMode,

    /// Whether sort is reversed
    pub sort_reverse: bool,

    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// Vim command state (for 'gg' double-key)
    pub vim_command_state: VimCommandState,

    // ============================================
    // FILTERS & SEARCH
    // ============================================
    /// Criteria applied to the person-card tabs
    pub filters: FilterCriteria,

    /// Whether search input is active (receiving keystrokes)
    pub search_mode: bool,

    /// Query typed on the Search tab (sent to the API on Enter)
    pub remote_query: String,

    // ============================================
    // DIALOGS & POPUPS
    // ============================================
    /// Person detail popup
    pub detail_popup: Option<DetailPopupState>,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool, sort_mode: SortMode) -> Self {
        Self {
            sort_mode,
            sort_reverse: false,
            vim_mode,
            vim_command_state: VimCommandState::None,
            filters: FilterCriteria::default(),
            search_mode: false,
            remote_query: String::new(),
            detail_popup: None,
            toast_message: None,
            should_quit: false,
        }
    }

    /// Check if any modal dialog is currently showing
    pub fn has_modal(&self) -> bool {
        self.detail_popup.is_some() || self.search_mode
    }

    /// Close all modal dialogs (typed search text is kept)
    pub fn close_all_modals(&mut self) {
        self.detail_popup = None;
        self.search_mode = false;
    }

    /// Reset every filter, including the search term
    pub fn clear_filters(&mut self) {
        self.filters = FilterCriteria::default();
    }

    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    /// Check if toast has been visible long enough
    pub fn should_dismiss_toast(&self) -> bool {
        match &self.toast_message {
            Some((_, shown_at)) => {
                crate::logic::ui::should_dismiss_toast(shown_at.elapsed().as_millis())
            }
            None => false,
        }
    }

    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}

impl Default for UiModel {
    fn default() -> Self {
        Self::new(false, SortMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::PresenceStatus;

    #[test]
    fn test_ui_model_creation() {
        let model = UiModel::new(true, SortMode::Recent);
        assert_eq!(model.sort_mode, SortMode::Recent);
        assert!(!model.sort_reverse);
        assert!(model.vim_mode);
        assert!(model.filters.is_empty());
        assert!(!model.should_quit);
    }

    #[test]
    fn test_close_all_modals_keeps_search_text() {
        let mut model = UiModel::default();
        model.search_mode = true;
        model.filters.search_term = "ann".to_string();
        assert!(model.has_modal());

        model.close_all_modals();
        assert!(!model.has_modal());
        assert_eq!(model.filters.search_term, "ann");
    }

    #[test]
    fn test_clear_filters() {
        let mut model = UiModel::default();
        model.filters.search_term = "ann".to_string();
        model.filters.status = Some(PresenceStatus::Online);

        model.clear_filters();
        assert!(model.filters.is_empty());
    }

    #[test]
    fn test_toast() {
        let mut model = UiModel::default();
        assert!(!model.should_dismiss_toast());

        model.show_toast("Connection accepted".to_string());
        assert!(model.toast_message.is_some());
        assert!(!model.should_dismiss_toast());

        model.dismiss_toast();
        assert!(model.toast_message.is_none());
    }
}
