//! Friends API Model
//!
//! This sub-model holds everything fetched from the Friends API: the
//! aggregate friends payload, the colleague directory, the last remote
//! search and the connection state of the endpoint.

use std::time::Instant;

use crate::api::{ConnectionRequest, FriendsData, Person, SearchResponse};
use crate::logic::errors::ErrorType;
use crate::logic::search::{filter_people, filter_requests, FilterCriteria, SearchScope};
use crate::logic::sorting::sort_people;
use crate::logic::stats::{known_departments, known_skills, TeamSummary};
use crate::{SortMode, Tab};

/// Connection state for the Friends API
#[derive(Clone, Debug, PartialEq)]
pub enum ConnectionState {
    /// Last fetch succeeded
    Connected,
    /// Retrying after a failure (attempt number, last error, next retry delay in seconds)
    Connecting {
        attempt: u32,
        last_error: Option<String>,
        next_retry_secs: u64,
    },
    /// Last fetch failed (with error type and user-friendly message)
    Disconnected {
        error_type: ErrorType,
        message: String,
    },
}

/// Friends API data (external state)
#[derive(Clone, Debug)]
pub struct FriendsModel {
    /// Latest `GET /friends` payload
    pub data: FriendsData,

    /// Whether `data` has been loaded at least once
    pub loaded: bool,

    /// Colleague directory, fetched the first time the Colleagues tab opens
    pub colleagues: Option<Vec<Person>>,

    /// Last remote search (query, response)
    pub search_results: Option<(String, SearchResponse)>,

    /// Connection state to the Friends API
    pub connection_state: ConnectionState,

    /// When `data` was last replaced
    pub last_refresh: Option<Instant>,
}

impl FriendsModel {
    pub fn new() -> Self {
        Self {
            data: FriendsData::default(),
            loaded: false,
            colleagues: None,
            search_results: None,
            connection_state: ConnectionState::Connecting {
                attempt: 0,
                last_error: None,
                next_retry_secs: 5,
            },
            last_refresh: None,
        }
    }

    /// Replace the friends payload after a successful fetch
    pub fn apply_friends_data(&mut self, data: FriendsData) {
        self.data = data;
        self.loaded = true;
        self.connection_state = ConnectionState::Connected;
        self.last_refresh = Some(Instant::now());
    }

    pub fn is_connected(&self) -> bool {
        matches!(self.connection_state, ConnectionState::Connected)
    }

    /// Source list of people for a person-card tab
    ///
    /// Requests, Activity and Search have their own item types and return an
    /// empty slice here.
    pub fn people_for_tab(&self, tab: Tab) -> &[Person] {
        match tab {
            Tab::Connections => &self.data.connections,
            Tab::Suggestions => &self.data.suggested_connections,
            Tab::Colleagues => self.colleagues.as_deref().unwrap_or(&[]),
            Tab::Requests | Tab::Activity | Tab::Search => &[],
        }
    }

    /// Filtered and sorted people for a tab; the source lists are untouched
    ///
    /// The Colleagues tab also matches the search term against departments.
    pub fn visible_people(
        &self,
        tab: Tab,
        criteria: &FilterCriteria,
        sort_mode: SortMode,
        reverse: bool,
    ) -> Vec<Person> {
        let mut people = if tab == Tab::Colleagues {
            let scoped = FilterCriteria {
                scope: SearchScope::WithDepartment,
                ..criteria.clone()
            };
            filter_people(self.people_for_tab(tab), &scoped)
        } else {
            filter_people(self.people_for_tab(tab), criteria)
        };
        sort_people(&mut people, sort_mode, reverse);
        people
    }

    /// Filtered pending requests, in the order the API sent them
    pub fn visible_requests(&self, criteria: &FilterCriteria) -> Vec<ConnectionRequest> {
        filter_requests(&self.data.pending_requests, criteria)
    }

    /// Every person known to the client, for deriving filter options
    fn all_people(&self) -> Vec<Person> {
        let mut people = self.data.connections.clone();
        people.extend(self.data.suggested_connections.iter().cloned());
        people.extend(self.data.pending_requests.iter().map(|r| r.from.clone()));
        if let Some(colleagues) = &self.colleagues {
            people.extend(colleagues.iter().cloned());
        }
        people
    }

    /// Departments offered by the department filter
    pub fn department_options(&self, configured: &[String]) -> Vec<String> {
        if configured.is_empty() {
            known_departments(&self.all_people())
        } else {
            configured.to_vec()
        }
    }

    /// Skills offered by the skill filter
    pub fn skill_options(&self) -> Vec<String> {
        known_skills(&self.all_people())
    }

    /// Header summary for a tab's source list
    pub fn summary_for_tab(&self, tab: Tab, departments: &[String]) -> TeamSummary {
        match tab {
            Tab::Requests => {
                let senders: Vec<Person> = self
                    .data
                    .pending_requests
                    .iter()
                    .map(|r| r.from.clone())
                    .collect();
                TeamSummary::from_people(&senders, departments)
            }
            _ => TeamSummary::from_people(self.people_for_tab(tab), departments),
        }
    }

    /// Find a request by its id
    pub fn get_request(&self, id: &str) -> Option<&ConnectionRequest> {
        self.data.pending_requests.iter().find(|r| r.id == id)
    }
}

impl Default for FriendsModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::PresenceStatus;

    fn sample_data() -> FriendsData {
        let json = r#"{
            "stats": {"totalConnections": 3, "newRequests": 1},
            "connections": [
                {"id": 1, "firstName": "Cy", "lastName": "Z", "department": "Eng", "status": "online"},
                {"id": 2, "firstName": "Ann", "lastName": "A", "department": "Eng", "status": "away"},
                {"id": 3, "firstName": "Bo", "lastName": "B", "department": "Sales", "status": "online", "skills": ["SQL"]}
            ],
            "pendingRequests": [
                {"id": 10, "from": {"id": 4, "firstName": "Dee", "department": "HR"}, "message": "hi"}
            ],
            "suggestedConnections": [
                {"id": 5, "firstName": "Eve", "department": "Eng"}
            ]
        }"#;
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let model = FriendsModel::new();
        assert!(!model.loaded);
        assert!(model.colleagues.is_none());
        assert!(matches!(
            model.connection_state,
            ConnectionState::Connecting { attempt: 0, .. }
        ));
    }

    #[test]
    fn test_apply_friends_data_connects() {
        let mut model = FriendsModel::new();
        model.apply_friends_data(sample_data());

        assert!(model.loaded);
        assert!(model.is_connected());
        assert!(model.last_refresh.is_some());
        assert_eq!(model.data.stats.total_connections, 3);
    }

    #[test]
    fn test_visible_people_filters_and_sorts_without_mutating() {
        let mut model = FriendsModel::new();
        model.apply_friends_data(sample_data());

        let criteria = FilterCriteria {
            department: Some("Eng".to_string()),
            ..Default::default()
        };
        let view = model.visible_people(Tab::Connections, &criteria, SortMode::Name, false);
        let names: Vec<&str> = view.iter().map(|p| p.first_name.as_str()).collect();
        assert_eq!(names, vec!["Ann", "Cy"]);

        // Source order unchanged
        assert_eq!(model.data.connections[0].first_name, "Cy");
    }

    #[test]
    fn test_colleagues_search_includes_department() {
        let mut model = FriendsModel::new();
        model.colleagues = Some(model_people(&[("1", "Ann", "Finance"), ("2", "Bo", "Eng")]));

        let criteria = FilterCriteria {
            search_term: "finance".to_string(),
            ..Default::default()
        };
        let view = model.visible_people(Tab::Colleagues, &criteria, SortMode::Name, false);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].first_name, "Ann");

        // Same term on Connections ignores departments
        model.data.connections = model_people(&[("1", "Ann", "Finance")]);
        assert!(model
            .visible_people(Tab::Connections, &criteria, SortMode::Name, false)
            .is_empty());
    }

    #[test]
    fn test_visible_requests_filter_by_sender() {
        let mut model = FriendsModel::new();
        model.apply_friends_data(sample_data());

        let criteria = FilterCriteria {
            status: Some(PresenceStatus::Online),
            ..Default::default()
        };
        assert!(model.visible_requests(&criteria).is_empty());
        assert_eq!(model.visible_requests(&FilterCriteria::default()).len(), 1);
        assert!(model.get_request("10").is_some());
    }

    #[test]
    fn test_department_and_skill_options() {
        let mut model = FriendsModel::new();
        model.apply_friends_data(sample_data());

        assert_eq!(model.department_options(&[]), vec!["Eng", "Sales", "HR"]);
        let configured = vec!["Legal".to_string()];
        assert_eq!(model.department_options(&configured), configured);
        assert_eq!(model.skill_options(), vec!["SQL"]);
    }

    #[test]
    fn test_summary_for_tab() {
        let mut model = FriendsModel::new();
        model.apply_friends_data(sample_data());

        let summary = model.summary_for_tab(Tab::Connections, &[]);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.online, 2);
        assert_eq!(summary.active_departments, 2);

        assert_eq!(model.summary_for_tab(Tab::Requests, &[]).total, 1);
        assert_eq!(model.summary_for_tab(Tab::Activity, &[]).total, 0);
    }

    fn model_people(entries: &[(&str, &str, &str)]) -> Vec<Person> {
        entries
            .iter()
            .map(|(id, name, dept)| {
                let json = format!(
                    r#"{{"id": "{}", "firstName": "{}", "department": "{}"}}"#,
                    id, name, dept
                );
                serde_json::from_str(&json).unwrap()
            })
            .collect()
    }
}
