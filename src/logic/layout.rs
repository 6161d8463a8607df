//! Layout calculation logic
//!
//! Pure functions for sizing the card list and the detail side pane.

/// How the content area is split between the card list and the detail pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSplit {
    /// Percentage of the width given to the card list
    pub list_percent: u16,
    /// Whether the detail pane is drawn next to the list
    pub detail_visible: bool,
}

/// Decide whether the selected person's details fit beside the list
///
/// # Layout Strategy
/// - Below 90 cells only the list is shown
/// - From 90 cells the list takes 60% and details 40%
/// - From 140 cells the list takes half
///
/// # Examples
/// ```
/// use friendstui::logic::layout::calculate_content_split;
///
/// let split = calculate_content_split(80);
/// assert!(!split.detail_visible);
/// assert_eq!(split.list_percent, 100);
///
/// let split = calculate_content_split(120);
/// assert!(split.detail_visible);
/// assert_eq!(split.list_percent, 60);
/// ```
pub fn calculate_content_split(content_width: u16) -> ContentSplit {
    const MIN_SPLIT_WIDTH: u16 = 90;
    const WIDE_WIDTH: u16 = 140;

    if content_width < MIN_SPLIT_WIDTH {
        ContentSplit {
            list_percent: 100,
            detail_visible: false,
        }
    } else if content_width < WIDE_WIDTH {
        ContentSplit {
            list_percent: 60,
            detail_visible: true,
        }
    } else {
        ContentSplit {
            list_percent: 50,
            detail_visible: true,
        }
    }
}
