//! Integration tests for load failure and reconnection
//!
//! These tests verify the complete flow:
//! 1. App starts Connecting with no data
//! 2. The friends fetch fails → Disconnected with a classified error and banner
//! 3. Retries back off exponentially up to the cap
//! 4. A successful fetch marks the model Connected and loaded

use std::time::Duration;

use friendstui::api::{ApiError, FriendsData};
use friendstui::logic::errors::{classify_error, format_error_message, load_failure_banner, ErrorType};
use friendstui::logic::retry::{
    next_reconnect_delay, should_refresh, INITIAL_RECONNECT_DELAY, MAX_RECONNECT_DELAY,
};
use friendstui::model::{ConnectionState, Model};
use friendstui::{SortMode, Tab};

fn new_model() -> Model {
    Model::new(false, Tab::Connections, SortMode::Name)
}

/// Test: A fresh model is connecting and has nothing loaded
#[test]
fn test_initial_state_is_connecting() {
    let model = new_model();
    assert!(matches!(
        model.friends.connection_state,
        ConnectionState::Connecting { attempt: 0, .. }
    ));
    assert!(!model.friends.loaded);
    assert!(!model.friends.is_connected());
}

/// Test: An unauthorized response becomes a banner with a config hint
#[test]
fn test_failed_load_produces_banner() {
    let error = anyhow::Error::new(ApiError::Status {
        status: 401,
        body: "bad token".to_string(),
    })
    .context("Failed to fetch friends data");

    let error_type = classify_error(&error);
    assert_eq!(error_type, ErrorType::Unauthorized);

    let mut model = new_model();
    model.friends.connection_state = ConnectionState::Disconnected {
        error_type: error_type.clone(),
        message: format_error_message(&error),
    };

    let ConnectionState::Disconnected { error_type, message } = &model.friends.connection_state
    else {
        panic!("expected Disconnected");
    };
    let banner = load_failure_banner(error_type, message);
    assert!(banner.starts_with("Unable to load friends data: "));
    assert!(banner.ends_with("(check api_token)"));
}

/// Test: Server errors and refused connections classify distinctly
#[test]
fn test_error_classification() {
    let server = anyhow::Error::new(ApiError::Status {
        status: 503,
        body: String::new(),
    });
    assert_eq!(classify_error(&server), ErrorType::ServerError);

    let rejected = anyhow::Error::new(ApiError::Rejected("already connected".to_string()));
    assert_eq!(classify_error(&rejected), ErrorType::Rejected);

    let refused = anyhow::anyhow!("tcp connect error: Connection refused (os error 111)");
    assert_eq!(classify_error(&refused), ErrorType::ConnectionRefused);
}

/// Test: Backoff doubles from 5s and stays at 60s
#[test]
fn test_backoff_sequence_caps_at_sixty_seconds() {
    let mut delay = INITIAL_RECONNECT_DELAY;
    let mut seen = Vec::new();
    for _ in 0..7 {
        seen.push(delay.as_secs());
        delay = next_reconnect_delay(delay);
    }
    assert_eq!(seen, vec![5, 10, 20, 40, 60, 60, 60]);
    assert_eq!(next_reconnect_delay(MAX_RECONNECT_DELAY), MAX_RECONNECT_DELAY);
}

/// Test: Periodic refresh honours the interval and can be disabled
#[test]
fn test_periodic_refresh_interval() {
    assert!(!should_refresh(Duration::from_secs(59), 60));
    assert!(should_refresh(Duration::from_secs(60), 60));
    assert!(!should_refresh(Duration::from_secs(3600), 0));
}

/// Test: A successful fetch after failures reconnects and loads data
#[test]
fn test_successful_fetch_reconnects() {
    let mut model = new_model();
    model.friends.connection_state = ConnectionState::Connecting {
        attempt: 3,
        last_error: Some("Connection refused".to_string()),
        next_retry_secs: 40,
    };

    let data: FriendsData =
        serde_json::from_str(r#"{"connections": [{"id": 1, "firstName": "Ann"}]}"#).unwrap();
    model.friends.apply_friends_data(data);

    assert!(model.friends.is_connected());
    assert!(model.friends.loaded);
    assert!(model.friends.last_refresh.is_some());
    assert_eq!(model.list_len(Tab::Connections), 1);
}
