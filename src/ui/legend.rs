use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use friendstui::Tab;

/// What the legend needs to know about the current screen
#[derive(Debug, Clone, Copy)]
pub struct LegendContext {
    pub vim_mode: bool,
    pub tab: Tab,
    pub search_mode: bool,
    pub has_search_text: bool,
    pub popup_open: bool,
}

fn key(label: &'static str) -> Span<'static> {
    Span::styled(label, Style::default().fg(Color::Yellow))
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(ctx: LegendContext) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    // Typing into the search box: only the editing keys apply
    if ctx.search_mode {
        let enter_label = if ctx.tab == Tab::Search {
            ":Search  "
        } else {
            ":Apply  "
        };
        hotkey_spans.extend(vec![
            key("Enter"),
            Span::raw(enter_label),
            key("Esc"),
            Span::raw(":Cancel  "),
            key("Backspace"),
            Span::raw(":Delete"),
        ]);
        return hotkey_spans;
    }

    if ctx.popup_open {
        match ctx.tab {
            Tab::Requests => hotkey_spans.extend(vec![
                key("a"),
                Span::raw(":Accept  "),
                key("x"),
                Span::raw(":Decline  "),
            ]),
            Tab::Suggestions | Tab::Colleagues => {
                hotkey_spans.extend(vec![key("c"), Span::raw(":Connect  ")])
            }
            _ => {}
        }
        hotkey_spans.extend(vec![key("Esc"), Span::raw(":Close")]);
        return hotkey_spans;
    }

    // Navigation keys (different for vim mode)
    if ctx.vim_mode {
        hotkey_spans.extend(vec![
            key("j/k"),
            Span::raw(":Nav  "),
            key("gg/G"),
            Span::raw(":First/Last  "),
        ]);
    } else {
        hotkey_spans.extend(vec![
            key("↑/↓"),
            Span::raw(":Nav  "),
            key("Home/End"),
            Span::raw(":First/Last  "),
        ]);
    }

    hotkey_spans.extend(vec![key("Tab/1-6"), Span::raw(":Switch tab  ")]);

    if ctx.tab.is_filterable() || ctx.tab == Tab::Search {
        if ctx.has_search_text {
            hotkey_spans.extend(vec![key("Esc"), Span::raw(":Clear Search  ")]);
        } else {
            let search_key = if ctx.vim_mode { "/" } else { "^F" };
            hotkey_spans.extend(vec![key(search_key), Span::raw(":Search  ")]);
        }
    }

    if ctx.tab.is_filterable() {
        if ctx.tab != Tab::Requests {
            hotkey_spans.extend(vec![
                key("s"),
                Span::raw(":Sort  "),
                key("S"),
                Span::raw(":Reverse  "),
            ]);
        }
        hotkey_spans.extend(vec![
            key("d"),
            Span::raw(":Dept  "),
            key("f"),
            Span::raw(":Status  "),
            key("K"),
            Span::raw(":Skill  "),
            key("m"),
            Span::raw(":Mentorship  "),
            key("C"),
            Span::raw(":Clear filters  "),
        ]);
    }

    // Tab-specific actions
    match ctx.tab {
        Tab::Requests => hotkey_spans.extend(vec![
            key("a"),
            Span::raw(":Accept  "),
            key("x"),
            Span::raw(":Decline  "),
        ]),
        Tab::Suggestions | Tab::Colleagues => {
            hotkey_spans.extend(vec![key("c"), Span::raw(":Connect  ")])
        }
        _ => {}
    }

    if ctx.tab == Tab::Search {
        hotkey_spans.extend(vec![key("Enter"), Span::raw(":Run search  ")]);
    } else {
        hotkey_spans.extend(vec![key("Enter/?"), Span::raw(":Details  ")]);
    }

    // Refresh and quit - always available
    hotkey_spans.extend(vec![
        key("r"),
        Span::raw(":Refresh  "),
        key("q"),
        Span::raw(":Quit"),
    ]);

    hotkey_spans
}

/// Build the legend paragraph (reusable for both rendering and height calculation)
pub fn build_legend_paragraph(ctx: LegendContext) -> Paragraph<'static> {
    let hotkey_line = Line::from(build_hotkey_spans(ctx));

    Paragraph::new(vec![hotkey_line])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(ratatui::widgets::Wrap { trim: false })
}

/// Render the hotkey legend (changes with vim mode, tab and input mode)
pub fn render_legend(f: &mut Frame, area: Rect, ctx: LegendContext) {
    f.render_widget(build_legend_paragraph(ctx), area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(terminal_width: u16, ctx: LegendContext) -> u16 {
    // Count lines WITHOUT block borders
    // (line_count() doesn't account for borders correctly when block is attached)
    let hotkey_line = Line::from(build_hotkey_spans(ctx));
    let paragraph_for_counting =
        Paragraph::new(vec![hotkey_line]).wrap(ratatui::widgets::Wrap { trim: false });

    // Calculate available width (subtract left + right borders)
    let available_width = terminal_width.saturating_sub(2);

    let line_count = paragraph_for_counting.line_count(available_width);

    // Add top + bottom borders, ensure minimum of 3
    (line_count as u16).saturating_add(2).max(3)
}
