//! Normalized error taxonomy for the hms client.
//!
//! Every failure the SDK surfaces is one of these kinds, and every kind
//! carries a single-sentence `user_message` that callers can display
//! without inspecting status codes. Classification runs in a fixed
//! priority order: explicit message fields in the server's response body,
//! then status-code defaults, then transport defaults, then a generic
//! fallback that preserves the transport error's own text.

use http::StatusCode;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Client-detected bad input, no request was sent.
    #[error("{0}")]
    Validation(String),

    /// Server responded 401 or 403 to a protected call.
    #[error("{message}")]
    AuthenticationRejected { status: StatusCode, message: String },

    /// Server responded 409.
    #[error("{message}")]
    Conflict { message: String },

    /// Server responded 404.
    #[error("{message}")]
    NotFound { message: String },

    /// Server responded 5xx.
    #[error("{message}")]
    ServerFault { status: StatusCode, message: String },

    /// No response received at all.
    #[error("{0}")]
    NetworkUnreachable(String),

    /// The request exceeded its deadline.
    #[error("{0}")]
    Timeout(String),

    /// Anything else, carrying the raw transport or parse message.
    #[error("{0}")]
    Unclassified(String),
}

impl ApiError {
    /// The display message callers show to users.
    pub fn user_message(&self) -> &str {
        match self {
            ApiError::Validation(message)
            | ApiError::NetworkUnreachable(message)
            | ApiError::Timeout(message)
            | ApiError::Unclassified(message) => message,
            ApiError::AuthenticationRejected { message, .. }
            | ApiError::Conflict { message }
            | ApiError::NotFound { message }
            | ApiError::ServerFault { message, .. } => message,
        }
    }

    /// True only for a 401 rejection. 403 is a rejection too, but it does
    /// not destroy the session.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            ApiError::AuthenticationRejected {
                status: StatusCode::UNAUTHORIZED,
                ..
            }
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn timeout() -> Self {
        ApiError::Timeout("Request timed out. The server may be busy.".to_string())
    }

    pub fn network_unreachable() -> Self {
        ApiError::NetworkUnreachable(
            "Cannot connect to server. Please ensure the backend is running.".to_string(),
        )
    }

    pub fn unclassified(message: impl Into<String>) -> Self {
        ApiError::Unclassified(message.into())
    }

    /// Classify a non-2xx response from its status and raw body.
    ///
    /// The body is probed for an explicit server message first; when none
    /// is found the status-code default applies.
    pub fn from_response(status: StatusCode, body: &[u8]) -> Self {
        let message = server_message_from_bytes(body)
            .unwrap_or_else(|| default_status_message(status).to_string());

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                ApiError::AuthenticationRejected { status, message }
            }
            StatusCode::CONFLICT => ApiError::Conflict { message },
            StatusCode::NOT_FOUND => ApiError::NotFound { message },
            _ if status.is_server_error() => ApiError::ServerFault { status, message },
            _ => ApiError::Unclassified(message),
        }
    }
}

/// One probe over a loosely-typed response body.
type MessageExtractor = fn(&Value) -> Option<String>;

/// Probes tried in priority order. The order is a compatibility contract
/// with the backend's assorted error shapes: `message` wins over `error`,
/// which wins over an `errors` array, which wins over a `fieldErrors` map,
/// and a bare string body is the last resort.
const MESSAGE_EXTRACTORS: &[MessageExtractor] = &[
    extract_message_field,
    extract_error_field,
    extract_errors_array,
    extract_field_errors_map,
    extract_string_body,
];

/// Pull a human-readable message out of an arbitrary error body, if any
/// of the known shapes match.
pub fn extract_server_message(body: &Value) -> Option<String> {
    MESSAGE_EXTRACTORS.iter().find_map(|extract| extract(body))
}

fn server_message_from_bytes(body: &[u8]) -> Option<String> {
    if let Ok(value) = serde_json::from_slice::<Value>(body) {
        return extract_server_message(&value);
    }
    // Non-JSON bodies (HTML error pages, plain text) fall back to the
    // raw text when it is short enough to show.
    let text = String::from_utf8_lossy(body);
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.len() > 200 {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn extract_message_field(body: &Value) -> Option<String> {
    body.get("message").and_then(Value::as_str).and_then(non_empty)
}

fn extract_error_field(body: &Value) -> Option<String> {
    body.get("error").and_then(Value::as_str).and_then(non_empty)
}

fn extract_errors_array(body: &Value) -> Option<String> {
    let errors = body.get("errors")?.as_array()?;
    let joined = errors
        .iter()
        .filter_map(Value::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    non_empty(&joined)
}

fn extract_field_errors_map(body: &Value) -> Option<String> {
    let fields = body.get("fieldErrors")?.as_object()?;
    let joined = fields
        .values()
        .filter_map(Value::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    non_empty(&joined)
}

fn extract_string_body(body: &Value) -> Option<String> {
    body.as_str().and_then(non_empty)
}

/// Status-code default messages, used when the body carries nothing usable.
fn default_status_message(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "Invalid request. Please check your input.",
        StatusCode::UNAUTHORIZED => "Invalid credentials. Please try again.",
        StatusCode::FORBIDDEN => "Access denied. You do not have permission.",
        StatusCode::NOT_FOUND => "Service not found. Please check the API gateway.",
        StatusCode::CONFLICT => "This email is already registered.",
        StatusCode::SERVICE_UNAVAILABLE => "Service unavailable. Please try again later.",
        _ if status.is_server_error() => "Server error. Please try again later.",
        _ => "An unexpected error occurred.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn message_field_wins_over_error_field() {
        let body = json!({ "message": "from message", "error": "from error" });
        assert_eq!(extract_server_message(&body).as_deref(), Some("from message"));
    }

    #[test]
    fn errors_array_is_joined() {
        let body = json!({ "errors": ["first", "second"] });
        assert_eq!(
            extract_server_message(&body).as_deref(),
            Some("first, second")
        );
    }

    #[test]
    fn field_errors_values_are_joined() {
        let body = json!({ "fieldErrors": { "email": "Invalid email" } });
        assert_eq!(
            extract_server_message(&body).as_deref(),
            Some("Invalid email")
        );
    }

    #[test]
    fn bare_string_body_is_used() {
        let body = json!("plain failure");
        assert_eq!(extract_server_message(&body).as_deref(), Some("plain failure"));
    }

    #[test]
    fn empty_fields_are_skipped() {
        let body = json!({ "message": "  ", "error": "real error" });
        assert_eq!(extract_server_message(&body).as_deref(), Some("real error"));
    }

    #[test]
    fn unauthorized_maps_to_authentication_rejected() {
        let error = ApiError::from_response(StatusCode::UNAUTHORIZED, b"{}");
        assert!(error.is_unauthorized());
        assert_eq!(error.user_message(), "Invalid credentials. Please try again.");
    }

    #[test]
    fn forbidden_is_rejected_but_not_unauthorized() {
        let error = ApiError::from_response(StatusCode::FORBIDDEN, b"{}");
        assert!(matches!(error, ApiError::AuthenticationRejected { .. }));
        assert!(!error.is_unauthorized());
    }

    #[test]
    fn conflict_uses_duplicate_email_default() {
        let error = ApiError::from_response(StatusCode::CONFLICT, b"");
        assert_eq!(error.user_message(), "This email is already registered.");
    }

    #[test]
    fn server_message_beats_status_default() {
        let body = serde_json::to_vec(&json!({ "message": "Email already in use" })).unwrap();
        let error = ApiError::from_response(StatusCode::CONFLICT, &body);
        assert_eq!(error.user_message(), "Email already in use");
    }

    #[test]
    fn five_hundreds_are_server_faults() {
        let error = ApiError::from_response(StatusCode::BAD_GATEWAY, b"");
        assert!(matches!(error, ApiError::ServerFault { .. }));
        assert_eq!(error.user_message(), "Server error. Please try again later.");
    }

    #[test]
    fn plain_text_body_is_preserved() {
        let error = ApiError::from_response(StatusCode::BAD_REQUEST, b"missing field: email");
        assert_eq!(error.user_message(), "missing field: email");
    }
}
