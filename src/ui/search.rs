//! Filter Bar UI
//!
//! Renders the search input (with match count and blinking cursor) and the
//! active filter values for the current tab.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use friendstui::logic::search::FilterCriteria;

/// Build the block title with the match count
fn build_title(active: bool, has_text: bool, match_count: Option<usize>, vim_mode: bool) -> String {
    let count = match match_count {
        Some(count) => format!(" ({} matches)", count),
        None => String::new(),
    };

    if active {
        format!(" Search{} - Esc to cancel ", count)
    } else if has_text {
        format!(" Search{} - Esc to clear ", count)
    } else {
        let search_key = if vim_mode { "/" } else { "Ctrl-F" };
        format!(" Search ({}){} ", search_key, count)
    }
}

/// Filter values other than the search text, as "Label: value" spans
fn filter_spans(filters: &FilterCriteria) -> Vec<Span<'static>> {
    let label = |text: &'static str| Span::styled(text, Style::default().fg(Color::Yellow));
    let value = |v: Option<&str>| {
        let text = v.unwrap_or("All").to_string();
        match v {
            Some(_) => Span::styled(text, Style::default().fg(Color::Cyan)),
            None => Span::raw(text),
        }
    };

    vec![
        Span::raw("  | "),
        label("Dept: "),
        value(filters.department.as_deref()),
        Span::raw(" | "),
        label("Status: "),
        value(filters.status.map(|s| s.as_str())),
        Span::raw(" | "),
        label("Skill: "),
        value(filters.skills.first().map(String::as_str)),
        Span::raw(" | "),
        label("Mentorship: "),
        value(filters.mentorship.map(|m| m.as_str())),
    ]
}

/// Render the filter bar
///
/// # Arguments
/// - `query`: Text in the input (local search term, or remote query on the Search tab)
/// - `active`: Whether input is actively receiving keystrokes
/// - `match_count`: Number of rows currently listed (None while unknown)
/// - `filters`: Shown next to the input; `None` on the Search tab
pub fn render_filter_bar(
    f: &mut Frame,
    area: Rect,
    query: &str,
    active: bool,
    match_count: Option<usize>,
    filters: Option<&FilterCriteria>,
    vim_mode: bool,
) {
    let title = build_title(active, !query.is_empty(), match_count, vim_mode);
    let border_color = if active { Color::Cyan } else { Color::Gray };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(border_color));

    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);

    let mut spans = if active {
        vec![
            Span::raw("Match: "),
            Span::raw(query.to_string()),
            Span::styled("█", cursor_style), // Blinking cursor
        ]
    } else {
        vec![Span::styled(
            format!("Match: {}", query),
            Style::default().fg(Color::Gray),
        )]
    };

    if let Some(filters) = filters {
        spans.extend(filter_spans(filters));
    }

    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
