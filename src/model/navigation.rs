//! Navigation Model
//!
//! This sub-model contains all state related to navigation:
//! the active tab and the highlighted card on each tab.

use std::collections::HashMap;

use crate::Tab;

/// Navigation state (tab, per-tab selection)
#[derive(Clone, Debug)]
pub struct NavigationModel {
    /// Currently shown tab
    pub current_tab: Tab,

    /// Selected card index per tab
    pub selections: HashMap<Tab, usize>,
}

impl NavigationModel {
    pub fn new(initial_tab: Tab) -> Self {
        Self {
            current_tab: initial_tab,
            selections: HashMap::new(),
        }
    }

    pub fn selected(&self, tab: Tab) -> Option<usize> {
        self.selections.get(&tab).copied()
    }

    pub fn set_selected(&mut self, tab: Tab, index: Option<usize>) {
        match index {
            Some(i) => self.selections.insert(tab, i),
            None => self.selections.remove(&tab),
        };
    }

    /// Selection on the current tab
    pub fn current_selection(&self) -> Option<usize> {
        self.selected(self.current_tab)
    }
}

impl Default for NavigationModel {
    fn default() -> Self {
        Self::new(Tab::default())
    }
}
