//! Error Types
//!
//! Failure taxonomy for the sync actions. Validation failures never get
//! this far; the form rejects them before a request is built.

use thiserror::Error;

/// What went wrong talking to the location store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never completed, or the response body was undecodable.
    #[error("Could not reach the location service: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("{}", rejection_text(.status, .message))]
    Rejected {
        status: u16,
        message: Option<String>,
    },
}

impl ApiError {
    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::Transport(err.to_string())
    }

    pub fn rejected(status: u16, body: &str) -> Self {
        Self::Rejected {
            status,
            message: extract_error_message(body),
        }
    }
}

fn rejection_text(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(text) => text.clone(),
        None => format!("The server rejected the request (HTTP {status})."),
    }
}

/// Pull a human-readable message out of an error body. `message` takes
/// precedence over `error`; backends differ on which field they send.
pub fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error"].iter().find_map(|key| {
        value
            .get(key)
            .and_then(serde_json::Value::as_str)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_surfaced_verbatim() {
        let err = ApiError::rejected(500, r#"{"message":"db down"}"#);
        assert_eq!(err.to_string(), "db down");
    }

    #[test]
    fn test_message_field_wins_over_error_field() {
        let body = r#"{"error":"secondary","message":"primary"}"#;
        assert_eq!(extract_error_message(body), Some("primary".to_string()));
    }

    #[test]
    fn test_error_field_is_the_fallback() {
        assert_eq!(
            extract_error_message(r#"{"error":"broken"}"#),
            Some("broken".to_string())
        );
    }

    #[test]
    fn test_generic_text_when_body_unreadable() {
        for body in ["", "plain text", "{}", r#"{"message":""}"#, r#"{"message":7}"#] {
            let err = ApiError::rejected(500, body);
            assert_eq!(err.to_string(), "The server rejected the request (HTTP 500).");
        }
    }

    #[test]
    fn test_repeated_failure_reports_identically() {
        let body = r#"{"message":"location not found"}"#;
        let first = ApiError::rejected(404, body);
        let second = ApiError::rejected(404, body);
        assert_eq!(first, second);
        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn test_transport_failure_display() {
        let err = ApiError::transport("connection refused");
        assert_eq!(
            err.to_string(),
            "Could not reach the location service: connection refused"
        );
    }
}
