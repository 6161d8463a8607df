//! Aggregate statistics
//!
//! Pure functions deriving header and card statistics from people lists.
//! Every average is guarded: an empty list yields 0, never NaN.

use crate::api::Person;

/// Number of people shown as online (status online or the online flag set)
pub fn online_count(people: &[Person]) -> usize {
    people.iter().filter(|p| p.is_online()).count()
}

/// Count people per department, in the order the departments are given
///
/// # Examples
/// ```
/// use friendstui::logic::stats::department_counts;
///
/// let counts = department_counts(&[], &["HR".to_string()]);
/// assert_eq!(counts, vec![("HR".to_string(), 0)]);
/// ```
pub fn department_counts(people: &[Person], departments: &[String]) -> Vec<(String, usize)> {
    departments
        .iter()
        .map(|department| {
            let count = people
                .iter()
                .filter(|p| &p.department == department)
                .count();
            (department.clone(), count)
        })
        .collect()
}

/// Number of departments with at least one person
pub fn active_departments(counts: &[(String, usize)]) -> usize {
    counts.iter().filter(|(_, count)| *count > 0).count()
}

/// Distinct non-empty departments in first-seen order
pub fn known_departments(people: &[Person]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for person in people {
        if !person.department.is_empty() && !seen.contains(&person.department) {
            seen.push(person.department.clone());
        }
    }
    seen
}

/// Distinct skills in first-seen order (case-insensitive dedup)
pub fn known_skills(people: &[Person]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for skill in people.iter().flat_map(|p| p.skills.iter()) {
        if !skill.is_empty() && !seen.iter().any(|s| s.eq_ignore_ascii_case(skill)) {
            seen.push(skill.clone());
        }
    }
    seen
}

/// Arithmetic mean, 0 for an empty input
///
/// # Examples
/// ```
/// use friendstui::logic::stats::average;
///
/// assert_eq!(average(std::iter::empty()), 0.0);
/// assert_eq!(average([2.0, 4.0]), 3.0);
/// ```
pub fn average<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

pub fn average_collaboration_score(people: &[Person]) -> f64 {
    average(people.iter().map(|p| p.collaboration_score))
}

pub fn average_collaboration_history(people: &[Person]) -> f64 {
    average(people.iter().map(|p| p.collaboration_history))
}

/// Derived figures rendered in the tab header
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TeamSummary {
    pub total: usize,
    pub online: usize,
    pub average_score: f64,
    pub average_history: f64,
    pub active_departments: usize,
}

impl TeamSummary {
    /// Summarize a list against a set of known departments
    ///
    /// When `departments` is empty, the departments present in the list
    /// are used.
    pub fn from_people(people: &[Person], departments: &[String]) -> Self {
        let counts = if departments.is_empty() {
            department_counts(people, &known_departments(people))
        } else {
            department_counts(people, departments)
        };

        Self {
            total: people.len(),
            online: online_count(people),
            average_score: average_collaboration_score(people),
            average_history: average_collaboration_history(people),
            active_departments: active_departments(&counts),
        }
    }
}
