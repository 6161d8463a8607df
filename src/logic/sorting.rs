//! Sorting comparison logic
//!
//! Pure functions for comparing people across different sort modes.

use crate::api::Person;
use crate::SortMode;
use std::cmp::Ordering;

fn name_key(person: &Person) -> String {
    format!("{} {}", person.first_name, person.last_name).to_lowercase()
}

/// Secondary ordering shared by every mode: name, then id
fn tie_break(a: &Person, b: &Person) -> Ordering {
    name_key(a)
        .cmp(&name_key(b))
        .then_with(|| a.id.cmp(&b.id))
}

/// Compare two people according to the given sort mode
///
/// # Arguments
/// * `a` - First person
/// * `b` - Second person
/// * `sort_mode` - Which attribute to sort by
/// * `reverse` - Whether to reverse the ordering
///
/// # Returns
/// Ordering indicating relative position (Less, Equal, Greater)
///
/// # Sort Rules
/// - Name and Department compare case-insensitively, by lowercased code
///   points (no locale collation)
/// - Recent puts people without a connection date last
/// - Ties fall back to name, then id, so the order is total
pub fn compare_people(a: &Person, b: &Person, sort_mode: SortMode, reverse: bool) -> Ordering {
    let result = match sort_mode {
        SortMode::Name => tie_break(a, b),
        SortMode::Recent => {
            // Newest first, missing dates at the end
            let primary = match (a.connection_date, b.connection_date) {
                (Some(a_date), Some(b_date)) => b_date.cmp(&a_date),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            };
            primary.then_with(|| tie_break(a, b))
        }
        SortMode::MostActive => b
            .message_count
            .cmp(&a.message_count)
            .then_with(|| tie_break(a, b)),
        SortMode::Department => a
            .department
            .to_lowercase()
            .cmp(&b.department.to_lowercase())
            .then_with(|| tie_break(a, b)),
    };

    if reverse {
        result.reverse()
    } else {
        result
    }
}

/// Sort a list of people in place (stable)
pub fn sort_people(people: &mut [Person], sort_mode: SortMode, reverse: bool) {
    people.sort_by(|a, b| compare_people(a, b, sort_mode, reverse));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Mentorship, PresenceStatus};
    use chrono::{TimeZone, Utc};

    fn make_person(id: &str, first: &str, dept: &str, messages: u64) -> Person {
        Person {
            id: id.to_string(),
            first_name: first.to_string(),
            last_name: String::new(),
            role: String::new(),
            department: dept.to_string(),
            status: PresenceStatus::Offline,
            is_online: false,
            skills: vec![],
            collaboration_score: 0.0,
            collaboration_history: 0.0,
            message_count: messages,
            connection_date: None,
            last_active: None,
            mutual_connections: 0,
            mentorship: Mentorship::None,
            email: None,
            location: None,
        }
    }

    #[test]
    fn test_compare_name_mode() {
        let ann = make_person("1", "ann", "Eng", 0);
        let bo = make_person("2", "Bo", "Eng", 0);

        // Case-insensitive alphabetical
        assert_eq!(compare_people(&ann, &bo, SortMode::Name, false), Ordering::Less);
        assert_eq!(compare_people(&bo, &ann, SortMode::Name, false), Ordering::Greater);
    }

    #[test]
    fn test_compare_name_reverse() {
        let ann = make_person("1", "Ann", "Eng", 0);
        let bo = make_person("2", "Bo", "Eng", 0);

        assert_eq!(compare_people(&ann, &bo, SortMode::Name, true), Ordering::Greater);
    }

    #[test]
    fn test_compare_recent_mode() {
        let mut older = make_person("1", "Old", "Eng", 0);
        older.connection_date = Some(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap());
        let mut newer = make_person("2", "New", "Eng", 0);
        newer.connection_date = Some(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());
        let never = make_person("3", "Never", "Eng", 0);

        // Newest first, missing date last
        assert_eq!(compare_people(&newer, &older, SortMode::Recent, false), Ordering::Less);
        assert_eq!(compare_people(&older, &never, SortMode::Recent, false), Ordering::Less);
        assert_eq!(compare_people(&never, &newer, SortMode::Recent, false), Ordering::Greater);
    }

    #[test]
    fn test_compare_most_active_mode() {
        let quiet = make_person("1", "Quiet", "Eng", 3);
        let chatty = make_person("2", "Chatty", "Eng", 300);

        // Larger message count first
        assert_eq!(compare_people(&chatty, &quiet, SortMode::MostActive, false), Ordering::Less);
        assert_eq!(compare_people(&quiet, &chatty, SortMode::MostActive, false), Ordering::Greater);
    }

    #[test]
    fn test_compare_department_mode() {
        let sales = make_person("1", "Ann", "Sales", 0);
        let eng = make_person("2", "Zed", "engineering", 0);

        assert_eq!(compare_people(&eng, &sales, SortMode::Department, false), Ordering::Less);
    }

    #[test]
    fn test_tie_breaking_by_name_then_id() {
        let a = make_person("1", "Sam", "Eng", 10);
        let b = make_person("2", "Sam", "Eng", 10);

        // Same messages, same name → id decides
        assert_eq!(compare_people(&a, &b, SortMode::MostActive, false), Ordering::Less);
        assert_eq!(compare_people(&b, &a, SortMode::MostActive, false), Ordering::Greater);
        assert_eq!(compare_people(&a, &a, SortMode::Department, false), Ordering::Equal);
    }

    #[test]
    fn test_name_mode_folds_non_ascii_case() {
        let asa = make_person("1", "Åsa", "Eng", 0);
        let ake = make_person("2", "åke", "Eng", 0);

        assert_eq!(
            compare_people(&ake, &asa, SortMode::Name, false),
            Ordering::Less
        );
    }

    #[test]
    fn test_sort_people_is_idempotent() {
        let mut people = vec![
            make_person("3", "Cy", "Sales", 1),
            make_person("1", "ann", "Eng", 5),
            make_person("2", "Bo", "Eng", 5),
        ];
        sort_people(&mut people, SortMode::Name, false);
        let once: Vec<String> = people.iter().map(|p| p.id.clone()).collect();
        assert_eq!(once, vec!["1", "2", "3"]);

        sort_people(&mut people, SortMode::Name, false);
        let twice: Vec<String> = people.iter().map(|p| p.id.clone()).collect();
        assert_eq!(once, twice);
    }
}
