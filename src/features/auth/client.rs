//! HTTP implementation of the authentication service. These helpers keep the
//! endpoint paths in one place and never log the payloads they send.

use crate::{
    app_lib::{
        AppError,
        api::{post_form_response, post_json},
    },
    features::auth::{
        flow::AuthService,
        types::{MfaChallengeRequest, TokenExchangeRequest, TokenResponse},
    },
};

const MFA_REQUEST_PATH: &str = "/auth/mfa/request";
const TOKEN_PATH: &str = "/auth/token";

/// Authentication service reached over the configured API base URL.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAuthService;

impl AuthService for HttpAuthService {
    /// Asks the service to issue a one-time code for these credentials.
    async fn request_mfa(&self, request: &MfaChallengeRequest) -> Result<(), AppError> {
        post_json(MFA_REQUEST_PATH, request).await
    }

    /// Exchanges credentials plus the one-time code for an access token.
    /// The token endpoint only accepts form encoding.
    async fn exchange_token(
        &self,
        request: &TokenExchangeRequest,
    ) -> Result<TokenResponse, AppError> {
        post_form_response(TOKEN_PATH, &request.form_fields()).await
    }
}
