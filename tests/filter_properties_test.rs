//! Properties of the person filter
//!
//! Filtering narrows a derived view and never invents, reorders or mutates
//! people:
//! - the result is a subset of the input, in input order
//! - empty criteria return the input unchanged
//! - filtering in two steps equals filtering once with both criteria

use friendstui::api::{Person, PresenceStatus};
use friendstui::logic::search::{filter_people, FilterCriteria};

fn person(id: u32, first: &str, dept: &str, status: &str, skills: &[&str]) -> Person {
    let json = serde_json::json!({
        "id": id,
        "firstName": first,
        "lastName": "Doe",
        "role": "Engineer",
        "department": dept,
        "status": status,
        "skills": skills,
    });
    serde_json::from_value(json).unwrap()
}

fn roster() -> Vec<Person> {
    vec![
        person(1, "Ann", "Eng", "online", &["Rust", "SQL"]),
        person(2, "Bo", "Eng", "away", &["Go"]),
        person(3, "Cy", "Sales", "online", &["Negotiation"]),
        person(4, "Dee", "HR", "busy", &["Rust"]),
        person(5, "Eli", "Sales", "offline", &[]),
    ]
}

fn names(people: &[Person]) -> Vec<&str> {
    people.iter().map(|p| p.first_name.as_str()).collect()
}

fn sample_criteria() -> Vec<FilterCriteria> {
    let mut out = vec![FilterCriteria::default()];
    for term in ["", "an", "DOE", "engineer", "zzz"] {
        for department in [None, Some("Eng"), Some("Sales")] {
            for status in [None, Some(PresenceStatus::Online), Some(PresenceStatus::Away)] {
                out.push(FilterCriteria {
                    search_term: term.to_string(),
                    department: department.map(str::to_string),
                    status,
                    ..Default::default()
                });
            }
        }
    }
    out
}

#[test]
fn test_filter_result_is_ordered_subset() {
    let people = roster();

    for criteria in sample_criteria() {
        let filtered = filter_people(&people, &criteria);

        // Every result is in the source, and source order is kept
        let mut last_pos = None;
        for p in &filtered {
            let pos = people.iter().position(|q| q == p);
            assert!(pos.is_some(), "{} invented by {:?}", p.first_name, criteria);
            assert!(pos > last_pos, "order broken by {:?}", criteria);
            last_pos = pos;
        }
    }
}

#[test]
fn test_empty_criteria_return_input_unchanged() {
    let people = roster();
    let filtered = filter_people(&people, &FilterCriteria::default());
    assert_eq!(filtered, people);

    // "All"-style blanks count as empty too
    let blank = FilterCriteria {
        search_term: "   ".to_string(),
        ..Default::default()
    };
    assert_eq!(filter_people(&people, &blank), people);
}

#[test]
fn test_chained_filters_equal_combined_filter() {
    let people = roster();

    for c1 in sample_criteria() {
        for c2 in [
            FilterCriteria {
                status: Some(PresenceStatus::Online),
                ..Default::default()
            },
            FilterCriteria {
                department: Some("Eng".to_string()),
                ..Default::default()
            },
            FilterCriteria {
                search_term: "a".to_string(),
                ..Default::default()
            },
        ] {
            // Only combine criteria that don't both set the same field
            if (c1.status.is_some() && c2.status.is_some())
                || (c1.department.is_some() && c2.department.is_some())
                || (!c1.search_term.is_empty() && !c2.search_term.is_empty())
            {
                continue;
            }

            let combined = FilterCriteria {
                search_term: if c1.search_term.is_empty() {
                    c2.search_term.clone()
                } else {
                    c1.search_term.clone()
                },
                department: c1.department.clone().or(c2.department.clone()),
                status: c1.status.or(c2.status),
                ..Default::default()
            };

            let chained = filter_people(&filter_people(&people, &c1), &c2);
            assert_eq!(
                chained,
                filter_people(&people, &combined),
                "c1={:?} c2={:?}",
                c1,
                c2
            );
        }
    }
}

#[test]
fn test_department_then_status_example() {
    let people = vec![
        person(1, "Ann", "Eng", "online", &[]),
        person(2, "Bo", "Eng", "away", &[]),
        person(3, "Cy", "Sales", "online", &[]),
    ];

    let eng = filter_people(
        &people,
        &FilterCriteria {
            department: Some("Eng".to_string()),
            ..Default::default()
        },
    );
    assert_eq!(names(&eng), vec!["Ann", "Bo"]);

    let online = filter_people(
        &eng,
        &FilterCriteria {
            status: Some(PresenceStatus::Online),
            ..Default::default()
        },
    );
    assert_eq!(names(&online), vec!["Ann"]);
}

#[test]
fn test_skills_match_any_requested() {
    let people = roster();
    let criteria = FilterCriteria {
        skills: vec!["rust".to_string(), "Go".to_string()],
        ..Default::default()
    };
    assert_eq!(names(&filter_people(&people, &criteria)), vec!["Ann", "Bo", "Dee"]);
}

#[test]
fn test_filtering_never_mutates_source() {
    let people = roster();
    let before = people.clone();

    let _ = filter_people(
        &people,
        &FilterCriteria {
            search_term: "cy".to_string(),
            ..Default::default()
        },
    );
    assert_eq!(people, before);
}

#[test]
fn test_empty_input_yields_empty_output() {
    let criteria = FilterCriteria {
        department: Some("Eng".to_string()),
        ..Default::default()
    };
    assert!(filter_people(&[], &criteria).is_empty());
    assert!(filter_people(&[], &FilterCriteria::default()).is_empty());
}
