//! Friends & Teams TUI Library
//!
//! Exposes the API client, pure model/logic and the request worker
//! for the binary and for testing

pub mod api;
pub mod config;
pub mod logic;
pub mod model;
pub mod services;

/// Sort mode for people listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    Name,       // Alphabetical by "first last"
    Recent,     // Most recently connected first
    MostActive, // Highest message count first
    Department, // Alphabetical by department, then name
}

impl SortMode {
    pub fn as_str(&self) -> &str {
        match self {
            SortMode::Name => "Name",
            SortMode::Recent => "Recent",
            SortMode::MostActive => "Most Active",
            SortMode::Department => "Department",
        }
    }

    /// Parse a config value such as "name" or "most-active"
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['_', ' '], "-").as_str() {
            "name" | "alphabetical" => Some(SortMode::Name),
            "recent" | "recently-connected" => Some(SortMode::Recent),
            "most-active" | "active" => Some(SortMode::MostActive),
            "department" => Some(SortMode::Department),
            _ => None,
        }
    }
}

/// Top-level tabs of the Friends & Teams screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Connections,
    Requests,
    Suggestions,
    Colleagues,
    Activity,
    Search,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Connections,
        Tab::Requests,
        Tab::Suggestions,
        Tab::Colleagues,
        Tab::Activity,
        Tab::Search,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Connections => "Connections",
            Tab::Requests => "Requests",
            Tab::Suggestions => "Suggestions",
            Tab::Colleagues => "Colleagues",
            Tab::Activity => "Activity",
            Tab::Search => "Search",
        }
    }

    pub fn index(&self) -> usize {
        Tab::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn parse(s: &str) -> Option<Self> {
        Tab::ALL
            .iter()
            .copied()
            .find(|t| t.title().eq_ignore_ascii_case(s.trim()))
    }

    /// Whether the tab lists people that the filter bar applies to
    pub fn is_filterable(&self) -> bool {
        matches!(
            self,
            Tab::Connections | Tab::Requests | Tab::Suggestions | Tab::Colleagues
        )
    }
}
