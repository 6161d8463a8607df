//! Accept/decline dispatch guard
//!
//! Each request id moves idle → processing → idle. While an id is
//! processing, a second dispatch must not reach the network, and the
//! worker refuses duplicates for the same id as a second layer.

use friendstui::api::{ConnectionAction, FriendsData};
use friendstui::model::{DetailPopupState, Model, SelectedItem};
use friendstui::{SortMode, Tab};

fn loaded_model() -> Model {
    let json = r#"{
        "pendingRequests": [
            {"id": 5, "from": {"id": 50, "firstName": "Ann", "department": "Eng"}, "message": "Hi!"},
            {"id": 6, "from": {"id": 60, "firstName": "Bo", "department": "Sales"}}
        ]
    }"#;
    let data: FriendsData = serde_json::from_str(json).unwrap();
    let mut model = Model::new(false, Tab::Requests, SortMode::Name);
    model.friends.apply_friends_data(data);
    model
}

#[test]
fn test_second_accept_while_processing_is_refused() {
    let mut model = loaded_model();

    // First accept(5) goes out
    assert!(model.performance.begin_processing("5"));
    // accept(5) again while in flight: no second call
    assert!(!model.performance.begin_processing("5"));
    // decline(5) is refused too
    assert!(!model.performance.begin_processing("5"));
    // Another id is independent
    assert!(model.performance.begin_processing("6"));
}

#[test]
fn test_failure_and_success_both_return_to_idle() {
    let mut model = loaded_model();

    assert!(model.performance.begin_processing("5"));
    model.performance.finish_processing("5"); // e.g. the call failed
    assert!(!model.performance.is_processing("5"));

    // A retry by the user is accepted again
    assert!(model.performance.begin_processing("5"));
    model.performance.finish_processing("5");
    assert!(model.performance.processing.is_empty());
}

#[test]
fn test_selected_request_targets_request_id() {
    let mut model = loaded_model();
    model.navigation.set_selected(Tab::Requests, Some(1));

    match model.selected_item() {
        Some(SelectedItem::Request(request)) => {
            assert_eq!(request.id, "6");
            assert_eq!(request.from.id, "60");
        }
        other => panic!("unexpected selection: {:?}", other),
    }
}

#[test]
fn test_popup_from_request_acts_on_request_id() {
    let model = loaded_model();
    let request = model.friends.get_request("5").unwrap();

    let popup = DetailPopupState::for_request(request);
    assert_eq!(popup.action_id, "5");
    assert_eq!(popup.person.first_name, "Ann");
    assert_eq!(popup.request_message.as_deref(), Some("Hi!"));
}

#[test]
fn test_filters_apply_to_request_senders() {
    let mut model = loaded_model();
    model.ui.filters.department = Some("Sales".to_string());

    let visible = model.visible_requests();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "6");
    // The source list is untouched
    assert_eq!(model.friends.data.pending_requests.len(), 2);
}

#[test]
fn test_action_labels() {
    assert_eq!(ConnectionAction::Accept.past_tense(), "accepted");
    assert_eq!(ConnectionAction::Decline.past_tense(), "declined");
    assert_eq!(ConnectionAction::Request.path_segment(), "request");
}

#[tokio::test]
async fn test_worker_reports_failure_for_unreachable_server() {
    use friendstui::api::FriendsClient;
    use friendstui::services::{spawn_api_service, ApiRequest, ApiResponse};

    let client = FriendsClient::new(
        "http://127.0.0.1:1".to_string(),
        None,
        std::time::Duration::from_secs(1),
    )
    .unwrap();
    let (tx, mut rx) = spawn_api_service(client);

    tx.send(ApiRequest::ConnectionAction {
        id: "5".to_string(),
        action: ConnectionAction::Accept,
    })
    .unwrap();

    match rx.recv().await {
        Some(ApiResponse::ActionResult { id, action, result }) => {
            assert_eq!(id, "5");
            assert_eq!(action, ConnectionAction::Accept);
            assert!(result.is_err());
        }
        other => panic!("unexpected response: {:?}", other),
    }
}
