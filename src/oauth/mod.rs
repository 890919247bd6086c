//! OAuth flow engine and transport-security policy
//!
//! The two pieces that matter: `transport` decides whether a plain-HTTP
//! redirect URI is acceptable for the configured security mode, and
//! `engine` drives the authorization-code flow against GitHub.

mod config;
mod engine;
mod error;
mod transport;
mod types;

pub use config::{
    Credentials, CLIENT_ID_ENV, CLIENT_SECRET_ENV, DEFAULT_REDIRECT_URI, REDIRECT_URI_ENV,
};
pub use engine::{Endpoints, GitHubOAuth, DEFAULT_SCOPES};
pub use error::OAuthError;
pub use transport::{evaluate, SecurityMode, TransportDecision};
pub use types::{AccessReport, AuthorizationUrl, TokenResponse, UserInfo};
