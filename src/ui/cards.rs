//! Card Lists
//!
//! One list renderer per item type. All of them draw into a titled block
//! with the shared highlight style and take a temporary `ListState`.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use friendstui::api::{
    ActivityItem, ActivityKind, ConnectionRequest, Person, PresenceStatus, SearchResponse,
};
use friendstui::logic::formatting::{
    format_optional_time, format_score, format_skills, truncate_to_width,
};

const DETAIL_COLOR: Color = Color::Rgb(150, 150, 150); // Medium gray, readable on DarkGray highlight

/// Status dot color
pub fn status_color(person: &Person) -> Color {
    if person.is_online() {
        return Color::Green;
    }
    match person.status {
        PresenceStatus::Online => Color::Green,
        PresenceStatus::Away => Color::Yellow,
        PresenceStatus::Busy => Color::Red,
        PresenceStatus::Offline => Color::DarkGray,
    }
}

fn titled_block(title: String) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
}

fn render_list(f: &mut Frame, area: Rect, items: Vec<ListItem<'static>>, title: String, state: &mut ListState) {
    let list = List::new(items)
        .block(titled_block(title))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, state);
}

/// Centered message for empty, loading and failed lists
pub fn render_placeholder(f: &mut Frame, area: Rect, title: String, message: &str, color: Color) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(color),
    )))
    .block(titled_block(title))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

/// First line of a person card: status dot, initials, name, role, department
fn person_headline(person: &Person, processing: bool, width: usize) -> Line<'static> {
    let mut spans = vec![
        Span::styled("● ", Style::default().fg(status_color(person))),
        Span::styled(
            format!("[{}] ", person.initials()),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            person.full_name(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ];

    let role = match (person.role.is_empty(), person.department.is_empty()) {
        (false, false) => format!("  {} · {}", person.role, person.department),
        (false, true) => format!("  {}", person.role),
        (true, false) => format!("  {}", person.department),
        (true, true) => String::new(),
    };
    if !role.is_empty() {
        // Leave room for the marker and the highlight symbol
        let used = person.full_name().chars().count() + 8;
        spans.push(Span::raw(truncate_to_width(
            &role,
            width.saturating_sub(used),
        )));
    }

    if processing {
        spans.push(Span::styled(" ⏳", Style::default().fg(Color::Yellow)));
    }

    Line::from(spans)
}

fn person_card(
    person: &Person,
    processing: bool,
    width: usize,
    now: DateTime<Utc>,
) -> ListItem<'static> {
    let details = format!(
        "    Score {} · {} msgs · {} mutual · Skills: {} · Active {}",
        format_score(person.collaboration_score),
        person.message_count,
        person.mutual_connections,
        format_skills(&person.skills, 3),
        format_optional_time(person.last_active, now),
    );

    ListItem::new(vec![
        person_headline(person, processing, width),
        Line::from(Span::styled(
            truncate_to_width(&details, width),
            Style::default().fg(DETAIL_COLOR),
        )),
    ])
}

/// Render a list of person cards (Connections, Suggestions, Colleagues)
pub fn render_people(
    f: &mut Frame,
    area: Rect,
    title: String,
    people: &[Person],
    processing: &HashSet<String>,
    state: &mut ListState,
    now: DateTime<Utc>,
) {
    let width = area.width.saturating_sub(4) as usize;
    let items = people
        .iter()
        .map(|p| person_card(p, processing.contains(&p.id), width, now))
        .collect();

    render_list(f, area, items, title, state);
}

/// Render pending connection requests
pub fn render_requests(
    f: &mut Frame,
    area: Rect,
    title: String,
    requests: &[ConnectionRequest],
    processing: &HashSet<String>,
    state: &mut ListState,
    now: DateTime<Utc>,
) {
    let width = area.width.saturating_sub(4) as usize;
    let items = requests
        .iter()
        .map(|request| {
            let mut lines = vec![person_headline(
                &request.from,
                processing.contains(&request.id),
                width,
            )];

            let meta = format!(
                "    {} mutual · sent {}",
                request.mutual_connections,
                format_optional_time(request.timestamp, now)
            );
            lines.push(Line::from(Span::styled(
                meta,
                Style::default().fg(DETAIL_COLOR),
            )));

            if !request.message.is_empty() {
                lines.push(Line::from(Span::styled(
                    truncate_to_width(&format!("    \"{}\"", request.message), width),
                    Style::default()
                        .fg(DETAIL_COLOR)
                        .add_modifier(Modifier::ITALIC),
                )));
            }

            ListItem::new(lines)
        })
        .collect();

    render_list(f, area, items, title, state);
}

fn activity_icon(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Connection => "🤝",
        ActivityKind::Message => "💬",
        ActivityKind::Collaboration => "🛠 ",
        ActivityKind::Achievement => "🏆",
        ActivityKind::Other => "• ",
    }
}

/// Render the recent-activity feed
pub fn render_activity(
    f: &mut Frame,
    area: Rect,
    title: String,
    items: &[ActivityItem],
    state: &mut ListState,
    now: DateTime<Utc>,
) {
    let width = area.width.saturating_sub(4) as usize;
    let list_items = items
        .iter()
        .map(|item| {
            let who = item
                .user
                .as_ref()
                .map(|u| format!("{} ", u.full_name()))
                .unwrap_or_default();

            ListItem::new(vec![
                Line::from(vec![
                    Span::raw(format!("{} ", activity_icon(item.kind))),
                    Span::styled(who, Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(truncate_to_width(&item.description, width.saturating_sub(20))),
                ]),
                Line::from(Span::styled(
                    format!("    {}", format_optional_time(item.timestamp, now)),
                    Style::default().fg(DETAIL_COLOR),
                )),
            ])
        })
        .collect();

    render_list(f, area, list_items, title, state);
}

/// Render remote search hits, followed by the server's suggestions
pub fn render_search_results(
    f: &mut Frame,
    area: Rect,
    title: String,
    response: &SearchResponse,
    state: &mut ListState,
) {
    let width = area.width.saturating_sub(4) as usize;
    let mut items: Vec<ListItem> = response
        .results
        .iter()
        .map(|hit| {
            let mut headline = vec![
                Span::styled(
                    format!("[{}] ", hit.kind),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    hit.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ];
            if let Some(department) = &hit.department {
                headline.push(Span::raw(format!("  {}", department)));
            }

            let mut lines = vec![Line::from(headline)];
            if !hit.subtitle.is_empty() {
                lines.push(Line::from(Span::styled(
                    truncate_to_width(&format!("    {}", hit.subtitle), width),
                    Style::default().fg(DETAIL_COLOR),
                )));
            }
            ListItem::new(lines)
        })
        .collect();

    // Suggestions trail the hits and are not selectable rows
    if !response.suggestions.is_empty() {
        items.push(ListItem::new(Line::from(vec![
            Span::styled("Try: ", Style::default().fg(Color::Yellow)),
            Span::raw(truncate_to_width(
                &response.suggestions.join(", "),
                width.saturating_sub(5),
            )),
        ])));
    }

    render_list(f, area, items, title, state);
}
