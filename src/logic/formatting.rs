//! Formatting and display logic
//!
//! Pure functions for turning timestamps, scores and names into the short
//! strings shown on cards.

use chrono::{DateTime, Utc};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Format the age of a timestamp relative to `now`
///
/// Shows the single most significant unit. Future timestamps (clock skew)
/// read as "just now".
///
/// # Examples
/// ```
/// use chrono::{Duration, Utc};
/// use friendstui::logic::formatting::format_relative_time;
///
/// let now = Utc::now();
/// assert_eq!(format_relative_time(now, now), "just now");
/// assert_eq!(format_relative_time(now - Duration::minutes(5), now), "5m ago");
/// assert_eq!(format_relative_time(now - Duration::hours(3), now), "3h ago");
/// assert_eq!(format_relative_time(now - Duration::days(2), now), "2d ago");
/// ```
pub fn format_relative_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - timestamp).num_seconds();

    if seconds < 60 {
        return "just now".to_string();
    }

    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if days >= 365 {
        format!("{}y ago", days / 365)
    } else if days >= 30 {
        format!("{}mo ago", days / 30)
    } else if days > 0 {
        format!("{}d ago", days)
    } else if hours > 0 {
        format!("{}h ago", hours)
    } else {
        format!("{}m ago", minutes)
    }
}

/// Relative time for an optional timestamp, "never" when absent
pub fn format_optional_time(timestamp: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    match timestamp {
        Some(ts) => format_relative_time(ts, now),
        None => "never".to_string(),
    }
}

/// Format a collaboration score with one decimal place
pub fn format_score(score: f64) -> String {
    if score.is_finite() {
        format!("{:.1}", score)
    } else {
        "0.0".to_string()
    }
}

/// Format weekly growth as a signed percentage, e.g. "+12.5%"
pub fn format_growth(growth: f64) -> String {
    if !growth.is_finite() {
        return "+0.0%".to_string();
    }
    format!("{:+.1}%", growth)
}

/// Truncate to a display width, appending "…" when text was cut
///
/// Width is measured in terminal cells, so wide characters count double.
///
/// # Examples
/// ```
/// use friendstui::logic::formatting::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Engineering", 20), "Engineering");
/// assert_eq!(truncate_to_width("Engineering", 6), "Engin…");
/// assert_eq!(truncate_to_width("Engineering", 0), "");
/// ```
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    // Reserve one cell for the ellipsis
    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Join skills into a short comma-separated line
pub fn format_skills(skills: &[String], max_shown: usize) -> String {
    if skills.is_empty() {
        return "-".to_string();
    }
    let shown: Vec<&str> = skills.iter().take(max_shown).map(String::as_str).collect();
    let hidden = skills.len().saturating_sub(max_shown);
    if hidden > 0 {
        format!("{} +{}", shown.join(", "), hidden)
    } else {
        shown.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_relative_time_units() {
        let now = now();
        assert_eq!(format_relative_time(now - Duration::seconds(59), now), "just now");
        assert_eq!(format_relative_time(now - Duration::seconds(60), now), "1m ago");
        assert_eq!(format_relative_time(now - Duration::minutes(59), now), "59m ago");
        assert_eq!(format_relative_time(now - Duration::hours(23), now), "23h ago");
        assert_eq!(format_relative_time(now - Duration::days(29), now), "29d ago");
        assert_eq!(format_relative_time(now - Duration::days(60), now), "2mo ago");
        assert_eq!(format_relative_time(now - Duration::days(800), now), "2y ago");
    }

    #[test]
    fn test_relative_time_in_future() {
        let now = now();
        assert_eq!(format_relative_time(now + Duration::hours(2), now), "just now");
    }

    #[test]
    fn test_optional_time() {
        assert_eq!(format_optional_time(None, now()), "never");
    }

    #[test]
    fn test_score_and_growth() {
        assert_eq!(format_score(87.24), "87.2");
        assert_eq!(format_score(f64::NAN), "0.0");
        assert_eq!(format_growth(12.5), "+12.5%");
        assert_eq!(format_growth(-3.0), "-3.0%");
        assert_eq!(format_growth(f64::INFINITY), "+0.0%");
    }

    #[test]
    fn test_truncate_wide_characters() {
        // Each CJK character is two cells wide
        assert_eq!(truncate_to_width("日本語テキスト", 5), "日本…");
        assert_eq!(truncate_to_width("abc", 3), "abc");
        assert_eq!(truncate_to_width("abcd", 1), "…");
    }

    #[test]
    fn test_format_skills() {
        let skills = vec!["Rust".to_string(), "SQL".to_string(), "Go".to_string()];
        assert_eq!(format_skills(&skills, 2), "Rust, SQL +1");
        assert_eq!(format_skills(&skills, 5), "Rust, SQL, Go");
        assert_eq!(format_skills(&[], 3), "-");
    }
}
