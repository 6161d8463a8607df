// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (header, tabs, filters, content split)
// - render: Main orchestration function that coordinates all rendering
// - header: Renders top bar (connection state, friends stats, tab summary)
// - tabs: Renders the tab strip with per-tab counts
// - cards: Renders the card list for each tab
// - detail: Renders the selected person's details (side pane and popup)
// - legend: Renders hotkey legend
// - search: Renders the filter bar with search input and match count
// - status_bar: Renders bottom status bar with metrics
// - toast: Renders toast notifications (brief pop-up messages)

pub mod cards;
pub mod detail;
pub mod header;
pub mod layout;
pub mod legend;
pub mod render;
pub mod search;
pub mod status_bar;
pub mod tabs;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
