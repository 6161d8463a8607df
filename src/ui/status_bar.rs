use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use friendstui::{SortMode, Tab};

/// Everything shown in the bottom status bar
pub struct StatusInfo<'a> {
    pub tab: Tab,
    pub item_count: usize,
    pub source_count: usize,
    pub sort_mode: SortMode,
    pub sort_reverse: bool,
    pub last_load_time_ms: Option<u64>,
    pub processing: usize,
    pub selected_name: Option<&'a str>,
}

/// Build the " | "-separated status text
fn build_status_line(info: &StatusInfo) -> String {
    let mut metrics = Vec::new();

    metrics.push(format!("Tab: {}", info.tab.title()));

    if info.item_count == info.source_count {
        metrics.push(format!("{} items", info.item_count));
    } else {
        metrics.push(format!("{} of {} items", info.item_count, info.source_count));
    }

    // Sorting only applies to person lists
    if matches!(
        info.tab,
        Tab::Connections | Tab::Suggestions | Tab::Colleagues
    ) {
        metrics.push(format!(
            "Sort: {}{}",
            info.sort_mode.as_str(),
            if info.sort_reverse { "↓" } else { "↑" }
        ));
    }

    if let Some(load_time) = info.last_load_time_ms {
        metrics.push(format!("Load: {}ms", load_time));
    }

    if info.processing > 0 {
        metrics.push(format!("Processing: {}", info.processing));
    }

    if let Some(name) = info.selected_name {
        metrics.push(format!("Selected: {}", name));
    }

    metrics.join(" | ")
}

/// Color the labels (before colons) in each " | " part
fn build_status_spans(status_line: &str) -> Vec<Span<'_>> {
    let mut spans = vec![];
    for (idx, part) in status_line.split(" | ").enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" | "));
        }

        if let Some(colon_pos) = part.find(':') {
            let label = &part[..=colon_pos];
            let value = &part[colon_pos + 1..];
            spans.push(Span::styled(label, Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(value));
        } else {
            spans.push(Span::raw(part));
        }
    }
    spans
}

/// Render the bottom status bar
pub fn render_status_bar(f: &mut Frame, area: Rect, info: &StatusInfo) {
    let status_line = build_status_line(info);

    let status_bar = Paragraph::new(Line::from(build_status_spans(&status_line)))
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(status_bar, area);
}
