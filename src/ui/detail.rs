use chrono::{DateTime, Utc};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use friendstui::api::{Mentorship, Person};
use friendstui::logic::formatting::{format_optional_time, format_score, format_skills};
use friendstui::model::DetailPopupState;

use super::cards::status_color;

fn field(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<14}", label), Style::default().fg(Color::Yellow)),
        Span::raw(value),
    ])
}

fn or_dash(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

/// Lines describing a person (shared by the side pane and the popup)
pub fn build_detail_lines(
    person: &Person,
    request_message: Option<&str>,
    now: DateTime<Utc>,
) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled("● ", Style::default().fg(status_color(person))),
            Span::styled(
                person.full_name(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        field("Role:", or_dash(&person.role)),
        field("Department:", or_dash(&person.department)),
        field("Status:", person.status.as_str().to_string()),
        field("Skills:", format_skills(&person.skills, person.skills.len().max(1))),
        field(
            "Score:",
            format!(
                "{} (history {})",
                format_score(person.collaboration_score),
                format_score(person.collaboration_history)
            ),
        ),
        field("Messages:", person.message_count.to_string()),
        field("Mutual:", person.mutual_connections.to_string()),
        field("Connected:", format_optional_time(person.connection_date, now)),
        field("Last active:", format_optional_time(person.last_active, now)),
    ];

    if person.mentorship != Mentorship::None {
        lines.push(field("Mentorship:", person.mentorship.as_str().to_string()));
    }
    if let Some(email) = &person.email {
        lines.push(field("Email:", email.clone()));
    }
    if let Some(location) = &person.location {
        lines.push(field("Location:", location.clone()));
    }

    if let Some(message) = request_message {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("\"{}\"", message),
            Style::default().add_modifier(Modifier::ITALIC),
        )));
    }

    lines
}

/// Render the details pane next to the card list
pub fn render_detail_pane(
    f: &mut Frame,
    area: Rect,
    person: Option<&Person>,
    request_message: Option<&str>,
    now: DateTime<Utc>,
) {
    let lines = match person {
        Some(person) => build_detail_lines(person, request_message, now),
        None => vec![Line::from(Span::styled(
            "Nothing selected",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let pane = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Details"))
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: false });

    f.render_widget(pane, area);
}

/// Render the centered detail popup
pub fn render_detail_popup(f: &mut Frame, popup: &DetailPopupState, processing: bool, now: DateTime<Utc>) {
    let mut lines = build_detail_lines(&popup.person, popup.request_message.as_deref(), now);
    if processing {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "⏳ Processing...",
            Style::default().fg(Color::Yellow),
        )));
    }

    // Center the popup
    let area = f.area();
    let popup_width = 64.min(area.width);
    let popup_height = (lines.len() as u16 + 2).min(area.height);
    let popup_area = Rect {
        x: (area.width.saturating_sub(popup_width)) / 2,
        y: (area.height.saturating_sub(popup_height)) / 2,
        width: popup_width,
        height: popup_height,
    };

    let popup_widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", popup.person.full_name()))
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(popup_widget, popup_area);
}
