//! UI state transition logic
//!
//! Pure functions for cycling tabs, sort modes and filter values.

use crate::{SortMode, Tab};

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u128 = 2500;

/// Cycle to the next sort mode: Name → Recent → Most Active → Department → Name
///
/// # Examples
/// ```
/// use friendstui::SortMode;
/// use friendstui::logic::ui::cycle_sort_mode;
///
/// assert_eq!(cycle_sort_mode(SortMode::Name), SortMode::Recent);
/// assert_eq!(cycle_sort_mode(SortMode::Department), SortMode::Name);
/// ```
pub fn cycle_sort_mode(current: SortMode) -> SortMode {
    match current {
        SortMode::Name => SortMode::Recent,
        SortMode::Recent => SortMode::MostActive,
        SortMode::MostActive => SortMode::Department,
        SortMode::Department => SortMode::Name,
    }
}

/// Tab to the right of `current`, wrapping to the first
pub fn next_tab(current: Tab) -> Tab {
    let idx = (current.index() + 1) % Tab::ALL.len();
    Tab::ALL[idx]
}

/// Tab to the left of `current`, wrapping to the last
pub fn prev_tab(current: Tab) -> Tab {
    let len = Tab::ALL.len();
    let idx = (current.index() + len - 1) % len;
    Tab::ALL[idx]
}

/// Tab for a digit hotkey ('1' is the first tab)
pub fn tab_for_digit(digit: char) -> Option<Tab> {
    let n = digit.to_digit(10)? as usize;
    if n == 0 {
        return None;
    }
    Tab::ALL.get(n - 1).copied()
}

/// Step a filter through its options, with `None` standing for "All"
///
/// The cycle is All → first → … → last → All. A current value that is no
/// longer among the options restarts at All.
///
/// # Examples
/// ```
/// use friendstui::logic::ui::cycle_option;
///
/// let depts = ["Eng", "Sales"];
/// assert_eq!(cycle_option(None, &depts), Some("Eng"));
/// assert_eq!(cycle_option(Some(&"Eng"), &depts), Some("Sales"));
/// assert_eq!(cycle_option(Some(&"Sales"), &depts), None);
/// ```
pub fn cycle_option<T: Clone + PartialEq>(current: Option<&T>, options: &[T]) -> Option<T> {
    match current {
        None => options.first().cloned(),
        Some(value) => {
            let pos = options.iter().position(|o| o == value)?;
            options.get(pos + 1).cloned()
        }
    }
}

/// Check if a toast has been visible long enough to dismiss
pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_DURATION_MS
}

/// Toasts starting with "Error:" render in the error style
pub fn is_error_toast(message: &str) -> bool {
    message.starts_with("Error:")
}

/// Remote search runs only for queries of at least two characters
pub fn is_searchable_query(query: &str) -> bool {
    query.trim().chars().count() >= 2
}
