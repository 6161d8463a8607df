use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;

/// Identifier of a person or request, normalized to a string at the boundary
pub type PersonId = String;

/// Presence status of a person
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PresenceStatus {
    Online,
    Away,
    Busy,
    #[default]
    Offline,
}

impl PresenceStatus {
    pub const ALL: [PresenceStatus; 4] = [
        PresenceStatus::Online,
        PresenceStatus::Away,
        PresenceStatus::Busy,
        PresenceStatus::Offline,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PresenceStatus::Online => "online",
            PresenceStatus::Away => "away",
            PresenceStatus::Busy => "busy",
            PresenceStatus::Offline => "offline",
        }
    }

    /// Parse a status label; unknown values are `None`
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "online" => Some(PresenceStatus::Online),
            "away" => Some(PresenceStatus::Away),
            "busy" => Some(PresenceStatus::Busy),
            "offline" => Some(PresenceStatus::Offline),
            _ => None,
        }
    }
}

/// Mentorship role advertised by a colleague
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mentorship {
    Mentor,
    Mentee,
    Open,
    #[default]
    None,
}

impl Mentorship {
    pub const ALL: [Mentorship; 4] = [
        Mentorship::Mentor,
        Mentorship::Mentee,
        Mentorship::Open,
        Mentorship::None,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mentorship::Mentor => "mentor",
            Mentorship::Mentee => "mentee",
            Mentorship::Open => "open",
            Mentorship::None => "none",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "mentor" => Some(Mentorship::Mentor),
            "mentee" => Some(Mentorship::Mentee),
            "open" | "both" => Some(Mentorship::Open),
            "none" => Some(Mentorship::None),
            _ => None,
        }
    }
}

/// Kind of entry in the recent-activity feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Connection,
    Message,
    Collaboration,
    Achievement,
    #[default]
    Other,
}

impl ActivityKind {
    fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "connection" | "connected" => ActivityKind::Connection,
            "message" => ActivityKind::Message,
            "collaboration" => ActivityKind::Collaboration,
            "achievement" => ActivityKind::Achievement,
            _ => ActivityKind::Other,
        }
    }
}

/// A directory entry: connection, colleague, suggestion or request sender
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: PersonId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub department: String,
    #[serde(default, deserialize_with = "deserialize_status")]
    pub status: PresenceStatus,
    #[serde(default)]
    pub is_online: bool,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub skills: Vec<String>,
    #[serde(default)]
    pub collaboration_score: f64,
    #[serde(default)]
    pub collaboration_history: f64,
    #[serde(default)]
    pub message_count: u64,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub connection_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub last_active: Option<DateTime<Utc>>,
    #[serde(default)]
    pub mutual_connections: u32,
    #[serde(default, deserialize_with = "deserialize_mentorship")]
    pub mentorship: Mentorship,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl Person {
    pub fn full_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (false, false) => format!("{} {}", self.first_name, self.last_name),
            (false, true) => self.first_name.clone(),
            (true, false) => self.last_name.clone(),
            (true, true) => self.id.clone(),
        }
    }

    /// Two-letter initials for the avatar badge
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .next()
            .into_iter()
            .chain(self.last_name.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    pub fn is_online(&self) -> bool {
        self.status == PresenceStatus::Online || self.is_online
    }
}

/// A pending, one-directional invitation awaiting accept/decline
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionRequest {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: PersonId,
    pub from: Person,
    #[serde(default, deserialize_with = "deserialize_null_default_string")]
    pub message: String,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub mutual_connections: u32,
}

/// Backend-precomputed counters shown in the header
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FriendsStats {
    pub total_connections: u32,
    pub new_requests: u32,
    pub online_friends: u32,
    pub mutual_connections: u32,
    pub weekly_growth: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItem {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: PersonId,
    #[serde(rename = "type", default, deserialize_with = "deserialize_activity_kind")]
    pub kind: ActivityKind,
    #[serde(default)]
    pub user: Option<Person>,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Aggregate root returned by `GET /friends`
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FriendsData {
    #[serde(default)]
    pub stats: FriendsStats,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub connections: Vec<Person>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub pending_requests: Vec<ConnectionRequest>,
    #[serde(
        default,
        alias = "suggestions",
        deserialize_with = "deserialize_null_default"
    )]
    pub suggested_connections: Vec<Person>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub recent_activity: Vec<ActivityItem>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SearchResult {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: PersonId,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub department: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub results: Vec<SearchResult>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ActionResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Mutation performed on a connection or suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionAction {
    Accept,
    Decline,
    Request,
}

impl ConnectionAction {
    pub fn path_segment(&self) -> &'static str {
        match self {
            ConnectionAction::Accept => "accept",
            ConnectionAction::Decline => "decline",
            ConnectionAction::Request => "request",
        }
    }

    pub fn past_tense(&self) -> &'static str {
        match self {
            ConnectionAction::Accept => "accepted",
            ConnectionAction::Decline => "declined",
            ConnectionAction::Request => "sent",
        }
    }
}

/// Typed failures raised by the client (everything else is transport-level)
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("request was rejected: {0}")]
    Rejected(String),
}

/// Helper function to deserialize null as empty vector
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let opt = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

fn deserialize_null_default_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// Parse an RFC 3339 timestamp, treating malformed values as absent
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.and_then(|s| {
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| tracing::debug!("Ignoring malformed timestamp '{}': {}", s, e))
            .ok()
    }))
}

/// Ids arrive as either JSON strings or integers
fn deserialize_id<'de, D>(deserializer: D) -> Result<PersonId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
    })
}

fn deserialize_status<'de, D>(deserializer: D) -> Result<PresenceStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt
        .as_deref()
        .and_then(PresenceStatus::parse)
        .unwrap_or_default())
}

fn deserialize_mentorship<'de, D>(deserializer: D) -> Result<Mentorship, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.as_deref().and_then(Mentorship::parse).unwrap_or_default())
}

fn deserialize_activity_kind<'de, D>(deserializer: D) -> Result<ActivityKind, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.as_deref().map(ActivityKind::parse).unwrap_or_default())
}

#[derive(Clone)]
pub struct FriendsClient {
    base_url: String,
    api_token: Option<String>,
    client: Client,
}

impl FriendsClient {
    pub fn new(base_url: String, api_token: Option<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Turn non-2xx responses into `ApiError::Status`
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        }
        .into())
    }

    pub async fn get_friends_data(&self) -> Result<FriendsData> {
        let url = format!("{}/friends", self.base_url);
        let response = self
            .authorize(self.client.get(&url))
            .send()
            .await
            .context("Failed to fetch friends data")?;

        let data: FriendsData = Self::check_status(response)
            .await?
            .json()
            .await
            .context("Failed to parse friends data")?;

        Ok(data)
    }

    pub async fn get_colleagues(&self) -> Result<Vec<Person>> {
        let url = format!("{}/colleagues", self.base_url);
        let response = self
            .authorize(self.client.get(&url))
            .send()
            .await
            .context("Failed to fetch colleagues")?;

        let colleagues: Option<Vec<Person>> = Self::check_status(response)
            .await?
            .json()
            .await
            .context("Failed to parse colleagues")?;

        Ok(colleagues.unwrap_or_default())
    }

    /// POST an accept/decline/request action for a connection id
    pub async fn connection_action(&self, id: &str, action: ConnectionAction) -> Result<()> {
        let url = format!(
            "{}/connections/{}/{}",
            self.base_url,
            urlencoding::encode(id),
            action.path_segment()
        );
        let response = self
            .authorize(self.client.post(&url))
            .send()
            .await
            .with_context(|| format!("Failed to {} connection {}", action.path_segment(), id))?;

        let result: ActionResponse = Self::check_status(response)
            .await?
            .json()
            .await
            .context("Failed to parse action response")?;

        if !result.success {
            return Err(ApiError::Rejected(
                result
                    .message
                    .unwrap_or_else(|| format!("{} {}", action.path_segment(), id)),
            )
            .into());
        }

        Ok(())
    }

    pub async fn accept_connection(&self, id: &str) -> Result<()> {
        self.connection_action(id, ConnectionAction::Accept).await
    }

    pub async fn decline_connection(&self, id: &str) -> Result<()> {
        self.connection_action(id, ConnectionAction::Decline).await
    }

    pub async fn send_connection_request(&self, id: &str) -> Result<()> {
        self.connection_action(id, ConnectionAction::Request).await
    }

    pub async fn search(&self, query: &str) -> Result<SearchResponse> {
        let url = format!(
            "{}/search?q={}",
            self.base_url,
            urlencoding::encode(query)
        );
        let response = self
            .authorize(self.client.get(&url))
            .send()
            .await
            .context("Failed to search")?;

        Self::check_status(response)
            .await?
            .json()
            .await
            .context("Failed to parse search response")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_defaults_for_missing_fields() {
        let json = r#"{"id": 7, "firstName": "Ann", "lastName": "Lee"}"#;
        let person: Person = serde_json::from_str(json).unwrap();

        assert_eq!(person.id, "7");
        assert_eq!(person.status, PresenceStatus::Offline);
        assert!(person.skills.is_empty());
        assert_eq!(person.collaboration_score, 0.0);
        assert_eq!(person.mentorship, Mentorship::None);
        assert!(person.connection_date.is_none());
    }

    #[test]
    fn test_person_null_skills_and_unknown_status() {
        let json = r#"{
            "id": "u-1",
            "firstName": "Bo",
            "status": "in-a-meeting",
            "skills": null,
            "mentorship": "Mentor"
        }"#;
        let person: Person = serde_json::from_str(json).unwrap();

        assert_eq!(person.status, PresenceStatus::Offline);
        assert!(person.skills.is_empty());
        assert_eq!(person.mentorship, Mentorship::Mentor);
    }

    #[test]
    fn test_person_parses_dates() {
        let json = r#"{
            "id": "1",
            "connectionDate": "2024-03-01T10:00:00Z",
            "lastActive": "2024-03-02T08:30:00+02:00"
        }"#;
        let person: Person = serde_json::from_str(json).unwrap();

        assert_eq!(
            person.connection_date.map(|d| d.to_rfc3339()),
            Some("2024-03-01T10:00:00+00:00".to_string())
        );
        assert!(person.last_active.is_some());
    }

    #[test]
    fn test_malformed_date_is_dropped() {
        let json = r#"{"id": "1", "connectionDate": "last tuesday"}"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert!(person.connection_date.is_none());
    }

    #[test]
    fn test_friends_data_tolerates_missing_lists() {
        let json = r#"{"stats": {"totalConnections": 3}}"#;
        let data: FriendsData = serde_json::from_str(json).unwrap();

        assert_eq!(data.stats.total_connections, 3);
        assert_eq!(data.stats.weekly_growth, 0.0);
        assert!(data.connections.is_empty());
        assert!(data.pending_requests.is_empty());
        assert!(data.recent_activity.is_empty());
    }

    #[test]
    fn test_friends_data_accepts_suggestions_alias() {
        let json = r#"{"suggestions": [{"id": 1, "firstName": "Cy"}]}"#;
        let data: FriendsData = serde_json::from_str(json).unwrap();
        assert_eq!(data.suggested_connections.len(), 1);
    }

    #[test]
    fn test_connection_request_null_message() {
        let json = r#"{
            "id": 5,
            "from": {"id": 9, "firstName": "Dee"},
            "message": null,
            "mutualConnections": 4
        }"#;
        let request: ConnectionRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.id, "5");
        assert_eq!(request.from.first_name, "Dee");
        assert_eq!(request.message, "");
        assert_eq!(request.mutual_connections, 4);
    }

    #[test]
    fn test_activity_kind_normalization() {
        let json = r#"{"id": 1, "type": "Achievement", "description": "Won"}"#;
        let item: ActivityItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.kind, ActivityKind::Achievement);

        let json = r#"{"id": 2, "type": "party"}"#;
        let item: ActivityItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.kind, ActivityKind::Other);
    }

    #[test]
    fn test_initials_and_full_name() {
        let json = r#"{"id": 1, "firstName": "ann", "lastName": "lee"}"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert_eq!(person.initials(), "AL");
        assert_eq!(person.full_name(), "ann lee");

        let json = r#"{"id": "x"}"#;
        let anonymous: Person = serde_json::from_str(json).unwrap();
        assert_eq!(anonymous.full_name(), "x");
        assert_eq!(anonymous.initials(), "");
    }

    #[test]
    fn test_is_online_checks_both_fields() {
        let json = r#"{"id": 1, "status": "away", "isOnline": true}"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert!(person.is_online());

        let json = r#"{"id": 2, "status": "online"}"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert!(person.is_online());

        let json = r#"{"id": 3, "status": "busy"}"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert!(!person.is_online());
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = FriendsClient::new(
            "http://localhost:3000/api/".to_string(),
            None,
            Duration::from_secs(1),
        )
        .unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000/api");
    }

    #[tokio::test]
    async fn test_unreachable_server_returns_error() {
        let client = FriendsClient::new(
            "http://127.0.0.1:1".to_string(),
            None,
            Duration::from_secs(1),
        )
        .unwrap();

        assert!(client.get_friends_data().await.is_err());
        assert!(client.accept_connection("5").await.is_err());
    }
}
