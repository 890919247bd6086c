//! Credential resolution for the OAuth engine
//!
//! Credentials are resolved exactly once at engine construction, with
//! explicit parameters taking precedence over environment variables.
//! The environment is never re-read on later calls.

use super::error::OAuthError;
use std::fmt;

/// Environment variable for the GitHub OAuth app client ID
pub const CLIENT_ID_ENV: &str = "GITHUB_CLIENT_ID";
/// Environment variable for the GitHub OAuth app client secret
pub const CLIENT_SECRET_ENV: &str = "GITHUB_CLIENT_SECRET";
/// Environment variable for the OAuth redirect URI
pub const REDIRECT_URI_ENV: &str = "GITHUB_REDIRECT_URI";
/// Redirect URI used when neither a parameter nor the environment provides one
pub const DEFAULT_REDIRECT_URI: &str = "http://localhost:8080/callback";

/// Resolved, immutable OAuth app credentials
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    client_secret: String,
    pub redirect_uri: String,
}

impl Credentials {
    /// Resolve credentials with precedence: explicit parameter > environment > default
    ///
    /// Only the redirect URI has a default; a missing client ID or secret is
    /// a configuration error surfaced before any network call.
    pub fn resolve(
        client_id: Option<String>,
        client_secret: Option<String>,
        redirect_uri: Option<String>,
    ) -> Result<Self, OAuthError> {
        let client_id = resolve_value(client_id, CLIENT_ID_ENV).ok_or_else(|| {
            OAuthError::Configuration(format!(
                "GitHub client ID is required (pass --client-id or set {CLIENT_ID_ENV})"
            ))
        })?;
        let client_secret = resolve_value(client_secret, CLIENT_SECRET_ENV).ok_or_else(|| {
            OAuthError::Configuration(format!(
                "GitHub client secret is required (pass --client-secret or set {CLIENT_SECRET_ENV})"
            ))
        })?;
        let redirect_uri = resolve_value(redirect_uri, REDIRECT_URI_ENV)
            .unwrap_or_else(|| DEFAULT_REDIRECT_URI.to_string());

        Ok(Self {
            client_id,
            client_secret,
            redirect_uri,
        })
    }

    pub(crate) fn client_secret(&self) -> &str {
        &self.client_secret
    }
}

// The secret must never reach a log line, even through {:?}
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("redirect_uri", &self.redirect_uri)
            .finish()
    }
}

fn resolve_value(explicit: Option<String>, env_key: &str) -> Option<String> {
    explicit
        .filter(|v| !v.is_empty())
        .or_else(|| std::env::var(env_key).ok().filter(|v| !v.is_empty()))
}
