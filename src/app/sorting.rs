//! Sorting orchestration methods
//!
//! Methods for sorting the person-card tabs:
//! - Multiple sort modes (name, recent, most active, department)
//! - Reversible sorting
//! - Selection preservation across sorts

use crate::App;
use friendstui::logic;

impl App {
    /// Advance to the next sort mode, keeping the highlighted person
    pub(crate) fn cycle_sort_mode(&mut self) {
        let selected_id = self.selected_id();

        self.model.ui.sort_mode = logic::ui::cycle_sort_mode(self.model.ui.sort_mode);
        self.model.ui.sort_reverse = false;

        self.reselect(selected_id);
        self.model
            .show_toast(format!("Sort: {}", self.model.ui.sort_mode.as_str()));
    }

    pub(crate) fn toggle_sort_reverse(&mut self) {
        let selected_id = self.selected_id();

        self.model.ui.sort_reverse = !self.model.ui.sort_reverse;

        self.reselect(selected_id);
    }
}
