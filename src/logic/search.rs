//! Search Logic
//!
//! Pure functions for filtering people by search text and filter criteria.
//! Plain queries are case-insensitive substring matches; queries containing
//! wildcards use the glob crate.

use crate::api::{ConnectionRequest, Mentorship, Person, PresenceStatus};

/// Which person fields the search text is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchScope {
    /// First name, last name and role
    #[default]
    NameAndRole,
    /// First name, last name, role and department
    WithDepartment,
}

/// User-entered criteria; every active criterion must match
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub search_term: String,
    /// `None` means "All"
    pub department: Option<String>,
    /// `None` means "all"
    pub status: Option<PresenceStatus>,
    /// Empty means any; otherwise at least one must match
    pub skills: Vec<String>,
    pub mentorship: Option<Mentorship>,
    pub scope: SearchScope,
}

impl FilterCriteria {
    /// Whether no criterion narrows the list
    pub fn is_empty(&self) -> bool {
        self.search_term.trim().is_empty()
            && self.department.is_none()
            && self.status.is_none()
            && self.skills.is_empty()
            && self.mentorship.is_none()
    }
}

/// Parse a department filter label ("", "All" and "all" mean no filter)
pub fn parse_department(label: &str) -> Option<String> {
    let trimmed = label.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parse a status filter label ("" and "all" mean no filter)
pub fn parse_status(label: &str) -> Option<PresenceStatus> {
    PresenceStatus::parse(label)
}

/// Match a search query against text
///
/// # Pattern Rules
/// - Plain text is a case-insensitive substring test
/// - "*" and "?" make the query a glob pattern that may match anywhere in
///   the text, like the plain substring test
/// - An invalid glob pattern falls back to the substring test
///
/// # Examples
/// ```
/// use friendstui::logic::search::search_matches;
///
/// assert!(search_matches("ann", "Ann Lee Engineer"));
/// assert!(search_matches("lee eng", "Ann Lee Engineer"));
/// assert!(search_matches("*engineer", "Ann Lee Engineer"));
/// assert!(!search_matches("sales", "Ann Lee Engineer"));
/// ```
pub fn search_matches(query: &str, text: &str) -> bool {
    let query_lower = query.trim().to_lowercase();
    if query_lower.is_empty() {
        return true; // Empty query matches everything
    }

    let text_lower = text.to_lowercase();

    if query_lower.contains(['*', '?']) {
        if let Ok(pattern) = glob::Pattern::new(&format!("*{}*", query_lower)) {
            return pattern.matches(&text_lower);
        }
    }

    text_lower.contains(&query_lower)
}

/// Build the text a person's search term is matched against
pub fn searchable_text(person: &Person, scope: SearchScope) -> String {
    let mut parts = vec![
        person.first_name.as_str(),
        person.last_name.as_str(),
        person.role.as_str(),
    ];
    if scope == SearchScope::WithDepartment {
        parts.push(person.department.as_str());
    }
    parts.join(" ")
}

/// Check one person against every active criterion
pub fn person_matches(person: &Person, criteria: &FilterCriteria) -> bool {
    if !criteria.search_term.trim().is_empty()
        && !search_matches(&criteria.search_term, &searchable_text(person, criteria.scope))
    {
        return false;
    }

    if let Some(department) = &criteria.department {
        if &person.department != department {
            return false;
        }
    }

    if let Some(status) = criteria.status {
        if person.status != status {
            return false;
        }
    }

    if !criteria.skills.is_empty() {
        let has_any = criteria.skills.iter().any(|wanted| {
            person
                .skills
                .iter()
                .any(|skill| skill.to_lowercase() == wanted.to_lowercase())
        });
        if !has_any {
            return false;
        }
    }

    if let Some(mentorship) = criteria.mentorship {
        if person.mentorship != mentorship {
            return false;
        }
    }

    true
}

/// Filter a list of people, preserving source order
///
/// The source slice is never modified; matching people are cloned into the
/// returned view.
pub fn filter_people(people: &[Person], criteria: &FilterCriteria) -> Vec<Person> {
    if criteria.is_empty() {
        return people.to_vec();
    }

    people
        .iter()
        .filter(|person| person_matches(person, criteria))
        .cloned()
        .collect()
}

/// Filter pending requests by their sender
pub fn filter_requests(
    requests: &[ConnectionRequest],
    criteria: &FilterCriteria,
) -> Vec<ConnectionRequest> {
    requests
        .iter()
        .filter(|request| person_matches(&request.from, criteria))
        .cloned()
        .collect()
}
