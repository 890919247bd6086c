//! Wire types for GitHub's OAuth and REST endpoints

use serde::{Deserialize, Serialize};

/// Successful token exchange response
///
/// Ephemeral: returned to the caller and never persisted by this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    /// Comma-joined list of granted scopes
    #[serde(default)]
    pub scope: Option<String>,
}

/// Authenticated user identity from `GET /user`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub login: String,
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, rename = "type")]
    pub account_type: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
}

/// Result of validating a token against the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessReport {
    pub user: UserInfo,
    /// Scopes granted to the token, read from the `X-OAuth-Scopes` header
    pub scopes: Vec<String>,
}

/// Authorization URL plus the CSRF state bound to it
///
/// The state is handed back to the caller rather than stored on the
/// engine, so one engine can issue any number of concurrent requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorizationUrl {
    pub url: String,
    pub state: String,
}

/// Structured error body from the token endpoint
///
/// GitHub answers 200 OK even for failed exchanges, so responses are
/// checked against this shape before being parsed as a token.
#[derive(Debug, Deserialize)]
pub(crate) struct ProviderErrorBody {
    pub error: String,
    #[serde(default)]
    pub error_description: Option<String>,
}
