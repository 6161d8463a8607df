use ratatui::layout::{Constraint, Direction, Layout, Rect};

use friendstui::logic;

/// Layout information for rendering
pub struct LayoutInfo {
    /// Top header area (connection state + stats)
    pub header_area: Rect,
    /// Tab strip
    pub tabs_area: Rect,
    /// Filter bar / search input area (if visible)
    pub filter_area: Option<Rect>,
    /// Card list area
    pub list_area: Rect,
    /// Detail side pane (if the terminal is wide enough)
    pub detail_area: Option<Rect>,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
    /// Bottom status bar area
    pub status_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect, legend_height: u16, filter_visible: bool) -> LayoutInfo {
    let filter_height = if filter_visible { 3 } else { 0 };

    // Header (top) + tabs + filters + content + legend + status bar (bottom)
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),             // Header (2 lines of text plus borders)
            Constraint::Length(3),             // Tab strip
            Constraint::Length(filter_height), // Filter bar (3 lines when visible, 0 when hidden)
            Constraint::Min(3),                // Content area (cards + details)
            Constraint::Length(legend_height), // Legend area (dynamic height, exact fit for wrapped content)
            Constraint::Length(3),             // Status bar
        ])
        .split(terminal_size);

    let content_area = main_chunks[3];
    let split = logic::layout::calculate_content_split(content_area.width);

    let (list_area, detail_area) = if split.detail_visible {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(split.list_percent),
                Constraint::Percentage(100 - split.list_percent),
            ])
            .split(content_area);
        (chunks[0], Some(chunks[1]))
    } else {
        (content_area, None)
    };

    LayoutInfo {
        header_area: main_chunks[0],
        tabs_area: main_chunks[1],
        filter_area: if filter_visible {
            Some(main_chunks[2])
        } else {
            None
        },
        list_area,
        detail_area,
        legend_area: main_chunks[4],
        status_area: main_chunks[5],
    }
}
