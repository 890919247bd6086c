//! gh-oauth-helper: GitHub OAuth authorization-code flow helper
//!
//! This library provides:
//! - An OAuth flow engine: authorization URLs with CSRF state, code-for-token
//!   exchange, token validation, and token revocation
//! - A transport-security policy gating plain-HTTP redirect URIs per
//!   security mode
//! - CLI command handlers used by the `gh-oauth` binary

pub mod cli;
pub mod oauth;

pub use oauth::{
    AccessReport, AuthorizationUrl, Endpoints, GitHubOAuth, OAuthError, SecurityMode,
    TokenResponse, TransportDecision, UserInfo,
};
