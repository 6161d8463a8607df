use anyhow::Error;

use crate::api::ApiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    ConnectionRefused,
    Timeout,
    Unauthorized, // HTTP 401/403
    NotFound,     // HTTP 404
    ServerError,  // HTTP 500+
    Rejected,     // API answered success: false
    NetworkError, // DNS, routing, etc.
    Other,
}

fn classify_status(status: u16) -> ErrorType {
    match status {
        401 | 403 => ErrorType::Unauthorized,
        404 => ErrorType::NotFound,
        500..=599 => ErrorType::ServerError,
        _ => ErrorType::Other,
    }
}

/// Classify an error based on its type and error chain
pub fn classify_error(error: &Error) -> ErrorType {
    // Typed API errors first
    if let Some(api_err) = error.downcast_ref::<ApiError>() {
        return match api_err {
            ApiError::Status { status, .. } => classify_status(*status),
            ApiError::Rejected(_) => ErrorType::Rejected,
        };
    }

    // Check for HTTP status codes (via reqwest error chain)
    if let Some(reqwest_err) = error.downcast_ref::<reqwest::Error>() {
        if reqwest_err.is_timeout() {
            return ErrorType::Timeout;
        }
        if let Some(status) = reqwest_err.status() {
            return classify_status(status.as_u16());
        }
    }

    // Fall back to the full message chain
    let error_msg = format!("{:#}", error).to_lowercase();

    if error_msg.contains("connection refused") {
        return ErrorType::ConnectionRefused;
    }
    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        return ErrorType::Timeout;
    }

    // Network-level errors
    if error_msg.contains("dns")
        || error_msg.contains("network")
        || error_msg.contains("error sending request")
    {
        return ErrorType::NetworkError;
    }

    ErrorType::Other
}

/// Format error message for display - show the root cause
pub fn format_error_message(error: &Error) -> String {
    // Typed API errors carry the most useful text themselves
    if let Some(api_err) = error.downcast_ref::<ApiError>() {
        return api_err.to_string();
    }

    // Walk the error chain to find reqwest::Error (most informative for network errors)
    let mut current: Option<&dyn std::error::Error> = Some(error.as_ref());

    while let Some(err) = current {
        if let Some(reqwest_err) = err.downcast_ref::<reqwest::Error>() {
            return reqwest_err.to_string();
        }
        current = err.source();
    }

    // If no reqwest error found, walk the chain to get the deepest (root cause) error
    let mut source = error.source();
    let mut deepest = error.to_string();

    while let Some(err) = source {
        deepest = err.to_string();
        source = err.source();
    }

    deepest
}

/// Banner text for a failed friends-data load
pub fn load_failure_banner(error_type: &ErrorType, message: &str) -> String {
    let hint = match error_type {
        ErrorType::Unauthorized => " (check api_token)",
        ErrorType::NotFound => " (check base_url)",
        _ => "",
    };
    format!("Unable to load friends data: {}{}", message, hint)
}
