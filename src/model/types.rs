//! Shared types for the Model

use crate::api::{ConnectionRequest, Person};

/// Vim command state for tracking double-key commands like 'gg'
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VimCommandState {
    None,
    WaitingForSecondG, // First 'g' pressed, waiting for second 'g'
}

/// Person detail popup
#[derive(Clone, Debug, PartialEq)]
pub struct DetailPopupState {
    pub person: Person,
    /// Message attached to a pending request, when opened from the Requests tab
    pub request_message: Option<String>,
    /// Id used for actions from inside the popup (request id or person id)
    pub action_id: String,
}

impl DetailPopupState {
    pub fn for_person(person: Person) -> Self {
        let action_id = person.id.clone();
        Self {
            person,
            request_message: None,
            action_id,
        }
    }

    pub fn for_request(request: &ConnectionRequest) -> Self {
        Self {
            person: request.from.clone(),
            request_message: Some(request.message.clone()).filter(|m| !m.is_empty()),
            action_id: request.id.clone(),
        }
    }
}
