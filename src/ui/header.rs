use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use friendstui::api::FriendsStats;
use friendstui::logic::{self, stats::TeamSummary};
use friendstui::model::ConnectionState;
use friendstui::Tab;

fn label(text: &'static str) -> Span<'static> {
    Span::styled(text, Style::default().fg(Color::Yellow))
}

/// Connection state spans (first line of the header)
fn render_connection_status(state: &ConnectionState) -> Vec<Span<'static>> {
    match state {
        ConnectionState::Connected => {
            vec![Span::styled("🟢 Connected", Style::default().fg(Color::Green))]
        }
        ConnectionState::Connecting {
            attempt,
            last_error,
            next_retry_secs,
        } => {
            let text = if *attempt > 1 {
                format!(
                    "🟡 Connecting (attempt {}, next: {}s)",
                    attempt, next_retry_secs
                )
            } else {
                "🟡 Connecting...".to_string()
            };
            let mut spans = vec![Span::styled(text, Style::default().fg(Color::Yellow))];

            if let Some(err) = last_error {
                spans.push(Span::raw(" | "));
                spans.push(Span::styled(
                    format!("Unable to load friends data: {}", err),
                    Style::default().fg(Color::Yellow),
                ));
            }
            spans
        }
        ConnectionState::Disconnected {
            error_type,
            message,
        } => vec![
            Span::styled(
                format!("🔴 {}", logic::errors::load_failure_banner(error_type, message)),
                Style::default().fg(Color::Red),
            ),
            Span::raw(" | "),
            label("r"),
            Span::raw(": retry"),
        ],
    }
}

/// Backend-supplied counters
fn render_stats(stats: &FriendsStats) -> Vec<Span<'static>> {
    vec![
        Span::raw(" | "),
        label("Connections:"),
        Span::raw(format!(" {}", stats.total_connections)),
        Span::raw(" | "),
        label("Requests:"),
        Span::raw(format!(" {}", stats.new_requests)),
        Span::raw(" | "),
        label("Online:"),
        Span::raw(format!(" {}", stats.online_friends)),
        Span::raw(" | "),
        label("Mutual:"),
        Span::raw(format!(" {}", stats.mutual_connections)),
        Span::raw(" | "),
        label("Growth:"),
        Span::raw(format!(
            " {}",
            logic::formatting::format_growth(stats.weekly_growth)
        )),
    ]
}

/// Derived aggregates for the tab's source list (second line)
fn render_summary(tab: Tab, summary: &TeamSummary) -> Line<'static> {
    Line::from(vec![
        label("Team:"),
        Span::raw(format!(
            " {} {} ({} online)",
            summary.total,
            tab.title().to_lowercase(),
            summary.online
        )),
        Span::raw(" | "),
        label("Avg score:"),
        Span::raw(format!(
            " {}",
            logic::formatting::format_score(summary.average_score)
        )),
        Span::raw(" | "),
        label("Avg history:"),
        Span::raw(format!(
            " {}",
            logic::formatting::format_score(summary.average_history)
        )),
        Span::raw(" | "),
        label("Departments:"),
        Span::raw(format!(" {} active", summary.active_departments)),
    ])
}

/// Render the header at the top of the screen
///
/// Stats are only shown once data has loaded; before that the connection
/// state has the whole line.
pub fn render_header(
    f: &mut Frame,
    area: Rect,
    connection_state: &ConnectionState,
    stats: Option<&FriendsStats>,
    tab: Tab,
    summary: Option<&TeamSummary>,
) {
    let mut first_line = render_connection_status(connection_state);
    if let Some(stats) = stats {
        first_line.extend(render_stats(stats));
    }

    let mut lines = vec![Line::from(first_line)];
    match summary {
        Some(summary) => lines.push(render_summary(tab, summary)),
        None if stats.is_some() => lines.push(Line::from(Span::raw(""))),
        None => lines.push(Line::from(Span::styled(
            "Loading...",
            Style::default().fg(Color::DarkGray),
        ))),
    }

    let header = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Friends & Teams"))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(header, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use friendstui::logic::errors::ErrorType;

    fn text(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_disconnected_shows_banner_and_retry_key() {
        let state = ConnectionState::Disconnected {
            error_type: ErrorType::Timeout,
            message: "Connection timed out".to_string(),
        };
        let rendered = text(&render_connection_status(&state));
        assert!(rendered.starts_with("🔴 Unable to load friends data: Connection timed out"));
        assert!(rendered.ends_with("r: retry"));
    }

    #[test]
    fn test_connecting_shows_attempt_after_first() {
        let first = ConnectionState::Connecting {
            attempt: 1,
            last_error: None,
            next_retry_secs: 10,
        };
        assert_eq!(text(&render_connection_status(&first)), "🟡 Connecting...");

        let later = ConnectionState::Connecting {
            attempt: 3,
            last_error: Some("refused".to_string()),
            next_retry_secs: 40,
        };
        let rendered = text(&render_connection_status(&later));
        assert!(rendered.contains("attempt 3, next: 40s"));
        assert!(rendered.contains("Unable to load friends data: refused"));
    }

    #[test]
    fn test_stats_spans() {
        let stats = FriendsStats {
            total_connections: 12,
            new_requests: 2,
            online_friends: 5,
            mutual_connections: 30,
            weekly_growth: 12.5,
        };
        assert_eq!(
            text(&render_stats(&stats)),
            " | Connections: 12 | Requests: 2 | Online: 5 | Mutual: 30 | Growth: +12.5%"
        );
    }

    #[test]
    fn test_summary_for_empty_list_is_zero() {
        let summary = TeamSummary::from_people(&[], &["HR".to_string()]);
        let line = render_summary(Tab::Colleagues, &summary);
        let rendered = text(&line.spans);
        assert!(rendered.contains("0 colleagues (0 online)"));
        assert!(rendered.contains("Avg score: 0.0"));
        assert!(rendered.contains("0 active"));
    }
}
