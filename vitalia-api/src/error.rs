use reqwest::StatusCode;
use serde::Deserialize;

/// Where a failure originated. Every kind surfaces through the same
/// [`ApiError`] shape; only `Authorization` is ever intercepted (and then only
/// for a single transparent retry).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No response was received at all (connect, DNS, timeout).
    Transport,
    /// A non-2xx response other than an authorization failure.
    Http,
    /// The backend rejected the presented access token.
    Authorization,
    /// The refresh-token exchange itself failed. Terminal for the session.
    Refresh,
}

/// The uniform failure shape surfaced to every caller.
///
/// `error` is always non-empty; `status_code` is absent for transport
/// failures. Callers never see `reqwest::Error` or the response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub kind: ErrorKind,
    pub error: String,
    pub message: Option<String>,
    pub status_code: Option<u16>,
}

impl ApiError {
    pub(crate) fn transport(err: reqwest::Error) -> Self {
        Self {
            kind: ErrorKind::Transport,
            error: err.to_string(),
            message: None,
            status_code: None,
        }
    }

    pub(crate) fn from_status(status: StatusCode, body: &str) -> Self {
        let kind = if status == StatusCode::UNAUTHORIZED {
            ErrorKind::Authorization
        } else {
            ErrorKind::Http
        };
        let (error, message) = parse_error_body(status, body);
        Self {
            kind,
            error,
            message,
            status_code: Some(status.as_u16()),
        }
    }

    pub(crate) fn refresh(error: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Refresh,
            error: error.into(),
            message: None,
            status_code: None,
        }
    }

    pub(crate) fn refresh_status(status: StatusCode, body: &str) -> Self {
        let (error, message) = parse_error_body(status, body);
        Self {
            kind: ErrorKind::Refresh,
            error,
            message,
            status_code: Some(status.as_u16()),
        }
    }

    pub(crate) fn decode(status: StatusCode, err: serde_json::Error) -> Self {
        Self {
            kind: ErrorKind::Http,
            error: format!("Failed to decode response body: {}", err),
            message: None,
            status_code: Some(status.as_u16()),
        }
    }

    pub fn is_authorization(&self) -> bool {
        self.kind == ErrorKind::Authorization
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status_code {
            Some(status) => write!(f, "({}) {}", status, self.error),
            None => f.write_str(&self.error),
        }
    }
}

impl std::error::Error for ApiError {}

/// Failure bodies optionally carry `error` and/or `message` strings; `error`
/// wins, then `message`, then a generic string derived from the status.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

fn parse_error_body(status: StatusCode, body: &str) -> (String, Option<String>) {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or(ErrorBody {
        error: None,
        message: None,
    });

    let message = parsed.message.filter(|m| !m.is_empty());
    let error = parsed
        .error
        .filter(|e| !e.is_empty())
        .or_else(|| message.clone())
        .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));

    (error, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_field_wins_over_message() {
        let err = ApiError::from_status(
            StatusCode::BAD_REQUEST,
            r#"{"error": "Invalid dates", "message": "startDate must be in the future"}"#,
        );
        assert_eq!(err.kind, ErrorKind::Http);
        assert_eq!(err.error, "Invalid dates");
        assert_eq!(
            err.message.as_deref(),
            Some("startDate must be in the future")
        );
        assert_eq!(err.status_code, Some(400));
    }

    #[test]
    fn message_fills_in_for_missing_error() {
        let err = ApiError::from_status(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"message": "guests must be at least 1"}"#,
        );
        assert_eq!(err.error, "guests must be at least 1");
    }

    #[test]
    fn unparseable_body_falls_back_to_generic_error() {
        let err = ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>");
        assert_eq!(err.error, "Request failed with status 500");
        assert_eq!(err.message, None);
    }

    #[test]
    fn unauthorized_is_tagged_as_authorization() {
        let err = ApiError::from_status(StatusCode::UNAUTHORIZED, r#"{"error": "jwt expired"}"#);
        assert!(err.is_authorization());
        assert_eq!(err.status_code, Some(401));
    }
}
