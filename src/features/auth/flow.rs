//! Two-step sign-in state machine.
//!
//! The flow never performs I/O itself. [`LoginFlow::submit`] hands back the
//! request the current step needs (or nothing, when a request is already in
//! flight or a required field is blank) and [`LoginFlow::resolve`] applies the
//! result. [`perform`] runs a request against an [`AuthService`]; the login page
//! and the tests both drive the flow through that pair.
//!
//! Credentials live only inside the draft and are dropped once the token is
//! issued. Nothing in this module logs them.

use crate::{
    app_lib::AppError,
    features::auth::{
        token::TokenStore,
        types::{MfaChallengeRequest, TokenExchangeRequest, TokenResponse},
    },
};
use std::fmt;
use thiserror::Error;
use tracing::{debug, info, warn};

pub const MFA_CODE_SENT: &str = "MFA code sent (check logs or email in production).";
pub const LOGIN_SUCCEEDED: &str = "Login successful!";
pub const MFA_REQUEST_FAILED: &str = "MFA request failed";
pub const LOGIN_FAILED: &str = "Login failed";
pub const CREDENTIALS_REQUIRED: &str = "Email and password are required.";
pub const MFA_CODE_REQUIRED: &str = "MFA code is required.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginStep {
    AwaitingCredentials,
    AwaitingMfaCode,
    Authenticated,
}

/// The single failure kind of the flow: a step did not go through.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct AuthStepError {
    message: String,
}

impl AuthStepError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Uses the service-provided `detail` when present, otherwise `fallback`.
    pub fn from_app_error(err: &AppError, fallback: &str) -> Self {
        Self::new(err.detail().unwrap_or_else(|| fallback.to_string()))
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// What the user has typed so far.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CredentialDraft {
    pub email: String,
    pub password: String,
    pub mfa_code: String,
}

impl fmt::Debug for CredentialDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialDraft")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("mfa_code", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthRequest {
    MfaChallenge(MfaChallengeRequest),
    TokenExchange(TokenExchangeRequest),
}

impl AuthRequest {
    /// Message shown when the service gives no `detail`.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            AuthRequest::MfaChallenge(_) => MFA_REQUEST_FAILED,
            AuthRequest::TokenExchange(_) => LOGIN_FAILED,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthResponse {
    ChallengeIssued,
    TokenIssued(TokenResponse),
}

/// Result of applying a response to the flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// No request was outstanding; the response was dropped.
    Ignored,
    /// The step failed and the flow stayed where it was.
    Failed,
    CodeRequested,
    Authenticated,
}

#[derive(Clone, Debug)]
pub struct LoginFlow {
    step: LoginStep,
    draft: CredentialDraft,
    in_flight: bool,
    notice: Option<&'static str>,
    error: Option<AuthStepError>,
}

impl Default for LoginFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginFlow {
    pub fn new() -> Self {
        Self {
            step: LoginStep::AwaitingCredentials,
            draft: CredentialDraft::default(),
            in_flight: false,
            notice: None,
            error: None,
        }
    }

    pub fn step(&self) -> LoginStep {
        self.step
    }

    pub fn draft(&self) -> &CredentialDraft {
        &self.draft
    }

    /// True while a request for the current step is outstanding.
    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    pub fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    pub fn error(&self) -> Option<&AuthStepError> {
        self.error.as_ref()
    }

    pub fn set_email(&mut self, value: String) {
        if self.accepts_credentials() {
            self.draft.email = value;
        }
    }

    pub fn set_password(&mut self, value: String) {
        if self.accepts_credentials() {
            self.draft.password = value;
        }
    }

    pub fn set_mfa_code(&mut self, value: String) {
        if self.step == LoginStep::AwaitingMfaCode && !self.in_flight {
            self.draft.mfa_code = value;
        }
    }

    /// Starts the current step. Returns `None` while busy, once authenticated,
    /// or when a required field is blank (an error is surfaced instead).
    pub fn submit(&mut self) -> Option<AuthRequest> {
        if self.in_flight {
            debug!("sign-in step already in flight; submit suppressed");
            return None;
        }

        let request = match self.step {
            LoginStep::AwaitingCredentials => {
                let email = self.draft.email.trim();
                if email.is_empty() || self.draft.password.trim().is_empty() {
                    self.fail(AuthStepError::new(CREDENTIALS_REQUIRED));
                    return None;
                }
                AuthRequest::MfaChallenge(MfaChallengeRequest {
                    email: email.to_string(),
                    password: self.draft.password.clone(),
                })
            }
            LoginStep::AwaitingMfaCode => {
                let code = self.draft.mfa_code.trim();
                if code.is_empty() {
                    self.fail(AuthStepError::new(MFA_CODE_REQUIRED));
                    return None;
                }
                AuthRequest::TokenExchange(TokenExchangeRequest {
                    username: self.draft.email.trim().to_string(),
                    password: self.draft.password.clone(),
                    mfa_code: code.to_string(),
                })
            }
            LoginStep::Authenticated => return None,
        };

        self.in_flight = true;
        self.notice = None;
        self.error = None;
        Some(request)
    }

    /// Applies the outcome of the outstanding request. On token issue the
    /// token goes to `tokens` and the draft is discarded.
    pub fn resolve(
        &mut self,
        outcome: Result<AuthResponse, AuthStepError>,
        tokens: &impl TokenStore,
    ) -> Transition {
        if !self.in_flight {
            debug!("sign-in response arrived with no request outstanding");
            return Transition::Ignored;
        }
        self.in_flight = false;

        match (self.step, outcome) {
            (LoginStep::AwaitingCredentials, Ok(AuthResponse::ChallengeIssued)) => {
                self.step = LoginStep::AwaitingMfaCode;
                self.draft.mfa_code.clear();
                self.notice = Some(MFA_CODE_SENT);
                Transition::CodeRequested
            }
            (LoginStep::AwaitingMfaCode, Ok(AuthResponse::TokenIssued(response)))
                if !response.access_token.trim().is_empty() =>
            {
                tokens.store(&response.access_token);
                self.step = LoginStep::Authenticated;
                self.draft = CredentialDraft::default();
                self.notice = Some(LOGIN_SUCCEEDED);
                info!("sign-in completed");
                Transition::Authenticated
            }
            (step, Ok(_)) => {
                warn!(?step, "unexpected sign-in response for step");
                self.fail(AuthStepError::new(step_fallback(step)));
                Transition::Failed
            }
            (_, Err(err)) => {
                self.fail(err);
                Transition::Failed
            }
        }
    }

    /// Returns from code entry to credential entry. The email is kept, the
    /// password and code are cleared along with any messages.
    pub fn back(&mut self) -> bool {
        if self.step != LoginStep::AwaitingMfaCode || self.in_flight {
            return false;
        }
        self.step = LoginStep::AwaitingCredentials;
        self.draft.password.clear();
        self.draft.mfa_code.clear();
        self.notice = None;
        self.error = None;
        true
    }

    fn accepts_credentials(&self) -> bool {
        self.step == LoginStep::AwaitingCredentials && !self.in_flight
    }

    fn fail(&mut self, err: AuthStepError) {
        self.notice = None;
        self.error = Some(err);
    }
}

fn step_fallback(step: LoginStep) -> &'static str {
    match step {
        LoginStep::AwaitingCredentials => MFA_REQUEST_FAILED,
        LoginStep::AwaitingMfaCode | LoginStep::Authenticated => LOGIN_FAILED,
    }
}

/// The external authentication service.
#[allow(async_fn_in_trait)]
pub trait AuthService {
    async fn request_mfa(&self, request: &MfaChallengeRequest) -> Result<(), AppError>;

    async fn exchange_token(
        &self,
        request: &TokenExchangeRequest,
    ) -> Result<TokenResponse, AppError>;
}

/// Runs one sign-in request and maps transport failures onto the step error.
pub async fn perform<S: AuthService>(
    service: &S,
    request: &AuthRequest,
) -> Result<AuthResponse, AuthStepError> {
    let result = match request {
        AuthRequest::MfaChallenge(challenge) => {
            debug!("requesting MFA code");
            service
                .request_mfa(challenge)
                .await
                .map(|()| AuthResponse::ChallengeIssued)
        }
        AuthRequest::TokenExchange(exchange) => {
            debug!("exchanging MFA code for access token");
            service
                .exchange_token(exchange)
                .await
                .map(AuthResponse::TokenIssued)
        }
    };

    result.map_err(|err| {
        warn!(status = ?err.status(), "sign-in step failed");
        AuthStepError::from_app_error(&err, request.fallback_message())
    })
}
