//! Aggregate statistics over filtered or full people lists
//!
//! Averages over empty lists are 0 (never NaN) and department counts for
//! unrepresented departments are 0.

use friendstui::api::Person;
use friendstui::logic::sorting::sort_people;
use friendstui::logic::stats::{
    active_departments, average, average_collaboration_history, average_collaboration_score,
    department_counts, online_count, TeamSummary,
};
use friendstui::SortMode;

fn person(id: u32, first: &str, dept: &str, status: &str, score: f64, online: bool) -> Person {
    let json = serde_json::json!({
        "id": id,
        "firstName": first,
        "department": dept,
        "status": status,
        "isOnline": online,
        "collaborationScore": score,
        "collaborationHistory": score / 10.0,
        "messageCount": id * 3,
    });
    serde_json::from_value(json).unwrap()
}

fn departments() -> Vec<String> {
    ["Eng", "Sales", "HR"].iter().map(|d| d.to_string()).collect()
}

#[test]
fn test_average_of_empty_list_is_zero() {
    assert_eq!(average(std::iter::empty()), 0.0);
    assert_eq!(average_collaboration_score(&[]), 0.0);
    assert_eq!(average_collaboration_history(&[]), 0.0);
    assert!(!average_collaboration_score(&[]).is_nan());
}

#[test]
fn test_department_count_for_empty_list() {
    let counts = department_counts(&[], &departments());
    assert!(counts.iter().all(|(_, count)| *count == 0));
    assert_eq!(
        counts.iter().find(|(d, _)| d == "HR").map(|(_, c)| *c),
        Some(0)
    );
    assert_eq!(active_departments(&counts), 0);
}

#[test]
fn test_counts_and_online() {
    let people = vec![
        person(1, "Ann", "Eng", "online", 80.0, false),
        person(2, "Bo", "Eng", "away", 60.0, true), // Flag alone counts as online
        person(3, "Cy", "Sales", "offline", 70.0, false),
    ];

    assert_eq!(online_count(&people), 2);

    let counts = department_counts(&people, &departments());
    assert_eq!(
        counts,
        vec![
            ("Eng".to_string(), 2),
            ("Sales".to_string(), 1),
            ("HR".to_string(), 0)
        ]
    );
    assert_eq!(active_departments(&counts), 2);
    assert!((average_collaboration_score(&people) - 70.0).abs() < 1e-9);
}

#[test]
fn test_team_summary() {
    let people = vec![
        person(1, "Ann", "Eng", "online", 90.0, false),
        person(2, "Bo", "HR", "busy", 70.0, false),
    ];

    let summary = TeamSummary::from_people(&people, &departments());
    assert_eq!(summary.total, 2);
    assert_eq!(summary.online, 1);
    assert!((summary.average_score - 80.0).abs() < 1e-9);
    assert!((summary.average_history - 8.0).abs() < 1e-9);
    assert_eq!(summary.active_departments, 2);

    let empty = TeamSummary::from_people(&[], &departments());
    assert_eq!(empty.total, 0);
    assert_eq!(empty.average_score, 0.0);
    assert_eq!(empty.active_departments, 0);
}

#[test]
fn test_sort_by_name_is_idempotent() {
    let mut people = vec![
        person(3, "cy", "Sales", "online", 0.0, false),
        person(1, "Ann", "Eng", "online", 0.0, false),
        person(2, "bo", "Eng", "online", 0.0, false),
        person(4, "Ann", "HR", "online", 0.0, false),
    ];

    sort_people(&mut people, SortMode::Name, false);
    let once: Vec<String> = people.iter().map(|p| p.id.clone()).collect();
    assert_eq!(once, vec!["1", "4", "2", "3"]);

    sort_people(&mut people, SortMode::Name, false);
    let twice: Vec<String> = people.iter().map(|p| p.id.clone()).collect();
    assert_eq!(once, twice);
}

#[test]
fn test_most_active_sort_descends() {
    let mut people = vec![
        person(1, "Ann", "Eng", "online", 0.0, false),
        person(5, "Eli", "Eng", "online", 0.0, false),
        person(3, "Cy", "Eng", "online", 0.0, false),
    ];

    sort_people(&mut people, SortMode::MostActive, false);
    let counts: Vec<u64> = people.iter().map(|p| p.message_count).collect();
    assert_eq!(counts, vec![15, 9, 3]);
}
