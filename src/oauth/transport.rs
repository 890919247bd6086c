//! Transport-security policy for redirect URIs
//!
//! Decides whether a plain-HTTP redirect URI is acceptable for the
//! configured security mode. HTTPS is always fine; HTTP is fine for
//! localhost; HTTP to anything else is a warning in standard mode and a
//! hard configuration error in secure mode.
//!
//! The decision is a plain value stored on the engine instance. Nothing
//! here touches process-wide state, so two engines with different modes
//! can coexist in one process.

use super::error::OAuthError;
use url::Url;

/// Redirect URI security mode, fixed at engine construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SecurityMode {
    /// HTTP allowed everywhere; non-localhost HTTP produces a warning
    #[default]
    Standard,
    /// HTTPS required for all non-localhost redirect URIs
    Secure,
}

/// Outcome of evaluating a redirect URI against a security mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportDecision {
    /// Whether the token exchange may run over plain HTTP
    pub allow_plaintext: bool,
    /// Warning the caller must surface (non-localhost HTTP in standard mode)
    pub warning: Option<String>,
}

/// Evaluate a redirect URI against the security mode
///
/// Returns `OAuthError::Configuration` when the URI cannot be parsed or
/// when secure mode forbids it.
pub fn evaluate(redirect_uri: &str, mode: SecurityMode) -> Result<TransportDecision, OAuthError> {
    let parsed = Url::parse(redirect_uri).map_err(|e| {
        OAuthError::Configuration(format!("invalid redirect URI '{redirect_uri}': {e}"))
    })?;

    if parsed.scheme() == "https" {
        return Ok(TransportDecision {
            allow_plaintext: false,
            warning: None,
        });
    }

    if is_localhost(&parsed) {
        // Loopback never leaves the machine; plain HTTP is fine in any mode
        return Ok(TransportDecision {
            allow_plaintext: true,
            warning: None,
        });
    }

    match mode {
        SecurityMode::Standard => Ok(TransportDecision {
            allow_plaintext: true,
            warning: Some(format!(
                "redirect URI '{redirect_uri}' uses plain HTTP to a non-localhost address; \
                 the authorization code can be intercepted in transit"
            )),
        }),
        SecurityMode::Secure => Err(OAuthError::Configuration(format!(
            "secure mode requires HTTPS for non-localhost redirect URIs, got '{redirect_uri}'"
        ))),
    }
}

fn is_localhost(url: &Url) -> bool {
    // Url renders IPv6 hosts bracketed
    matches!(
        url.host_str(),
        Some("localhost") | Some("127.0.0.1") | Some("::1") | Some("[::1]")
    )
}
