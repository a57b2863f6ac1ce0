//! Request and response types for the sign-in API calls. These payloads carry
//! passwords, one-time codes and tokens, so their `Debug` output is redacted and
//! they must never be logged.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Body of `POST /auth/mfa/request`.
#[derive(Clone, Serialize, PartialEq, Eq)]
pub struct MfaChallengeRequest {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for MfaChallengeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MfaChallengeRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Form fields of `POST /auth/token`.
#[derive(Clone, PartialEq, Eq)]
pub struct TokenExchangeRequest {
    pub username: String,
    pub password: String,
    pub mfa_code: String,
}

impl TokenExchangeRequest {
    /// Field pairs in the order the token endpoint expects them.
    pub fn form_fields(&self) -> [(&'static str, &str); 3] {
        [
            ("username", self.username.as_str()),
            ("password", self.password.as_str()),
            ("mfa_code", self.mfa_code.as_str()),
        ]
    }
}

impl fmt::Debug for TokenExchangeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenExchangeRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("mfa_code", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

impl fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn challenge_request_serializes_email_and_password() {
        let request = MfaChallengeRequest {
            email: "ops@example.test".to_string(),
            password: "hunter2".to_string(),
        };

        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"email": "ops@example.test", "password": "hunter2"})
        );
    }

    #[test]
    fn debug_output_never_contains_secrets() {
        let request = TokenExchangeRequest {
            username: "ops@example.test".to_string(),
            password: "hunter2".to_string(),
            mfa_code: "123456".to_string(),
        };
        let rendered = format!("{request:?}");
        assert!(rendered.contains("ops@example.test"));
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("123456"));

        let response: TokenResponse =
            serde_json::from_str(r#"{"access_token":"secret-token","token_type":"bearer"}"#)
                .expect("deserialize");
        assert!(!format!("{response:?}").contains("secret-token"));
    }

    #[test]
    fn token_response_tolerates_missing_token_type() {
        let response: TokenResponse =
            serde_json::from_str(r#"{"access_token":"abc"}"#).expect("deserialize");
        assert_eq!(response.access_token, "abc");
        assert_eq!(response.token_type, None);
    }

    #[test]
    fn form_fields_keep_endpoint_names() {
        let request = TokenExchangeRequest {
            username: "a@b.test".to_string(),
            password: "pw".to_string(),
            mfa_code: "42".to_string(),
        };
        assert_eq!(
            request.form_fields(),
            [("username", "a@b.test"), ("password", "pw"), ("mfa_code", "42")]
        );
    }
}
