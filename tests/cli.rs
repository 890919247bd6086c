//! Integration tests for CLI commands

#![allow(deprecated)]

use assert_cmd::{assert::OutputAssertExt, cargo::CommandCargoExt};
use predicates::prelude::*;
use std::process::Command;

fn gh_oauth() -> Command {
    let mut cmd = Command::cargo_bin("gh-oauth").unwrap();
    // Keep tests hermetic: never pick up credentials from the host
    cmd.env_remove("GITHUB_CLIENT_ID")
        .env_remove("GITHUB_CLIENT_SECRET")
        .env_remove("GITHUB_REDIRECT_URI");
    cmd
}

#[test]
fn test_main_command_help() {
    let mut cmd = gh_oauth();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("auth"))
        .stdout(predicate::str::contains("token"))
        .stdout(predicate::str::contains("revoke"));
}

#[test]
fn test_auth_command_help() {
    let mut cmd = gh_oauth();
    cmd.arg("auth").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("authorization URL"));
}

#[test]
fn test_auth_requires_credentials() {
    let mut cmd = gh_oauth();
    cmd.arg("auth");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("client ID"));
}

#[test]
fn test_auth_generates_url_with_explicit_credentials() {
    let mut cmd = gh_oauth();
    cmd.arg("auth")
        .arg("--client-id")
        .arg("test-id")
        .arg("--client-secret")
        .arg("test-secret");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Authorization URL"))
        .stdout(predicate::str::contains(
            "https://github.com/login/oauth/authorize?",
        ))
        .stdout(predicate::str::contains("client_id=test-id"))
        .stdout(predicate::str::contains("State"));
}

#[test]
fn test_auth_json_output() {
    let mut cmd = gh_oauth();
    cmd.arg("auth")
        .arg("--json")
        .arg("--client-id")
        .arg("test-id")
        .arg("--client-secret")
        .arg("test-secret")
        .arg("--state")
        .arg("fixed-state");

    let output = cmd.assert().success().get_output().stdout.clone();
    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed["state"], "fixed-state");
    assert!(parsed["authorization_url"]
        .as_str()
        .unwrap()
        .contains("state=fixed-state"));
    assert_eq!(parsed["scopes"][0], "user:email");
    assert_eq!(parsed["scopes"][1], "repo");
}

#[test]
fn test_auth_custom_scopes() {
    let mut cmd = gh_oauth();
    cmd.arg("auth")
        .arg("--json")
        .arg("--client-id")
        .arg("test-id")
        .arg("--client-secret")
        .arg("test-secret")
        .arg("--scopes")
        .arg("read:org")
        .arg("gist");

    let output = cmd.assert().success().get_output().stdout.clone();
    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert!(parsed["authorization_url"]
        .as_str()
        .unwrap()
        .contains("scope=read%3Aorg%20gist"));
}

#[test]
fn test_secure_mode_rejects_remote_http_redirect() {
    let mut cmd = gh_oauth();
    cmd.arg("auth")
        .arg("--client-id")
        .arg("test-id")
        .arg("--client-secret")
        .arg("test-secret")
        .arg("--redirect-uri")
        .arg("http://staging.example.com/callback")
        .arg("--secure");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("HTTPS"));
}

#[test]
fn test_standard_mode_warns_on_remote_http_redirect() {
    let mut cmd = gh_oauth();
    cmd.arg("auth")
        .arg("--client-id")
        .arg("test-id")
        .arg("--client-secret")
        .arg("test-secret")
        .arg("--redirect-uri")
        .arg("http://staging.example.com/callback");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("plain HTTP"));
}

#[test]
fn test_token_requires_code() {
    let mut cmd = gh_oauth();
    cmd.arg("token");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--code"));
}

#[test]
fn test_token_state_mismatch_fails_locally() {
    // Mismatch is detected before any network call, so this is fast and
    // deterministic even without a provider
    let mut cmd = gh_oauth();
    cmd.arg("token")
        .arg("--client-id")
        .arg("test-id")
        .arg("--client-secret")
        .arg("test-secret")
        .arg("--code")
        .arg("some-code")
        .arg("--state")
        .arg("tampered")
        .arg("--expected-state")
        .arg("expected");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("state mismatch"));
}

#[test]
fn test_revoke_requires_token() {
    let mut cmd = gh_oauth();
    cmd.arg("revoke");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--token"));
}
