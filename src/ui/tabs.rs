use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

use friendstui::Tab;

/// Tab label with its shortcut digit and, once known, its row count
fn tab_label(tab: Tab, count: Option<usize>) -> String {
    match count {
        Some(count) => format!("{} {} ({})", tab.index() + 1, tab.title(), count),
        None => format!("{} {}", tab.index() + 1, tab.title()),
    }
}

/// Render the tab strip
///
/// `counts` is indexed like `Tab::ALL`; `None` means not loaded yet.
pub fn render_tabs(f: &mut Frame, area: Rect, current: Tab, counts: &[Option<usize>]) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|tab| Line::from(tab_label(*tab, counts.get(tab.index()).copied().flatten())))
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL))
        .select(current.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .divider(" │ ");

    f.render_widget(tabs, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_label() {
        assert_eq!(tab_label(Tab::Requests, Some(3)), "2 Requests (3)");
        assert_eq!(tab_label(Tab::Colleagues, None), "4 Colleagues");
    }
}
