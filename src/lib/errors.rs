use serde::Deserialize;
use thiserror::Error;

/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Request failed ({status}): {}", sanitize_body(.body))]
    Http { status: u16, body: String },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
}

impl AppError {
    /// Returns the `detail` string from an HTTP error body, if the service sent one.
    pub fn detail(&self) -> Option<String> {
        match self {
            AppError::Http { body, .. } => extract_detail(body),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

/// Parses `{"detail": "..."}`. Non-string details (validation arrays) and
/// non-JSON bodies yield `None`.
pub fn extract_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        serde_json::Value::String(detail) if !detail.trim().is_empty() => Some(detail),
        _ => None,
    }
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
pub fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{AppError, extract_detail, sanitize_body};

    #[test]
    fn extract_detail_reads_string_detail() {
        assert_eq!(
            extract_detail(r#"{"detail":"Invalid credentials"}"#),
            Some("Invalid credentials".to_string())
        );
    }

    #[test]
    fn extract_detail_ignores_missing_and_structured_detail() {
        assert_eq!(extract_detail(r#"{"error":"nope"}"#), None);
        assert_eq!(extract_detail(r#"{"detail":[{"loc":["body"]}]}"#), None);
        assert_eq!(extract_detail(r#"{"detail":"  "}"#), None);
        assert_eq!(extract_detail("<html>502 Bad Gateway</html>"), None);
        assert_eq!(extract_detail(""), None);
    }

    #[test]
    fn detail_only_comes_from_http_errors() {
        let http = AppError::Http {
            status: 400,
            body: r#"{"detail":"Code expired"}"#.to_string(),
        };
        assert_eq!(http.detail(), Some("Code expired".to_string()));
        assert_eq!(http.status(), Some(400));

        let network = AppError::Network(r#"{"detail":"Code expired"}"#.to_string());
        assert_eq!(network.detail(), None);
        assert_eq!(network.status(), None);
    }

    #[test]
    fn http_display_is_sanitized() {
        let long = "x".repeat(500);
        let err = AppError::Http {
            status: 500,
            body: format!("  {long}  "),
        };
        let rendered = err.to_string();
        assert!(rendered.starts_with("Request failed (500): "));
        assert_eq!(rendered.len(), "Request failed (500): ".len() + 200);

        let empty = AppError::Http {
            status: 404,
            body: "   ".to_string(),
        };
        assert_eq!(empty.to_string(), "Request failed (404): Request failed.");
    }

    #[test]
    fn sanitize_body_trims() {
        assert_eq!(sanitize_body("  oops \n"), "oops");
    }
}
