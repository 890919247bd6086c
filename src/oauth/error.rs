//! Typed errors for OAuth operations
//!
//! Provides structured error types so callers can distinguish between
//! local misconfiguration, provider rejections, and network failures
//! without string matching.

use thiserror::Error;

/// OAuth operation errors with typed variants
///
/// Enables callers to distinguish between different failure modes:
/// - `Configuration` - missing/invalid credentials or redirect URI; never retried
/// - `StateMismatch` - CSRF state verification failed; the exchange was not sent
/// - `Provider` - GitHub rejected the request (bad code, bad grant, etc.)
/// - `TokenValidation` - the access token was rejected by the API (401/403)
/// - `UnexpectedResponse` - a response that matches no known provider shape
/// - `Network` - connection/timeout; GitHub is unreachable
#[derive(Debug, Error)]
pub enum OAuthError {
    /// Missing or invalid local configuration (credentials, redirect URI, mode)
    ///
    /// Always raised before any network call is attempted.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The state echoed by the callback does not match the expected value
    #[error("state mismatch: callback state does not match the expected value")]
    StateMismatch,

    /// GitHub returned a structured OAuth error (e.g. `bad_verification_code`)
    #[error("provider error: {error}{}", .description.as_deref().map(|d| format!(": {d}")).unwrap_or_default())]
    Provider {
        error: String,
        description: Option<String>,
    },

    /// The access token was rejected by the user endpoint
    #[error("token validation failed: HTTP {0}")]
    TokenValidation(u16),

    /// A response that fits no documented provider shape
    #[error("unexpected response (HTTP {status}): {detail}")]
    UnexpectedResponse { status: u16, detail: String },

    /// Network connectivity issue (connection refused, timeout, DNS)
    #[error("network error: {0}")]
    Network(String),
}

impl OAuthError {
    /// Check if this error means GitHub was unreachable rather than
    /// the request being wrong
    pub fn is_network(&self) -> bool {
        matches!(self, OAuthError::Network(_))
    }

    /// Convert transport-level errors into typed `OAuthError`
    ///
    /// `reqwest` surfaces timeouts and connection failures through the same
    /// error type; split them here so log lines stay actionable. The error
    /// display never includes request bodies, so no secrets can leak through.
    pub fn from_network_error(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            OAuthError::Network(format!("request timed out: {e}"))
        } else if e.is_connect() {
            OAuthError::Network(format!("connection failed: {e}"))
        } else if let Some(status) = e.status() {
            OAuthError::UnexpectedResponse {
                status: status.as_u16(),
                detail: e.to_string(),
            }
        } else {
            OAuthError::Network(e.to_string())
        }
    }
}
