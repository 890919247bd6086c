//! CLI command handlers for the `gh-oauth` binary
//!
//! Thin shell over the OAuth engine: argument plumbing, colored terminal
//! output, `--json` machine output, and optional browser launching.

use crate::oauth::{GitHubOAuth, SecurityMode};
use anyhow::Result;
use colored::Colorize;
use serde_json::json;

/// Options shared by every subcommand
#[derive(Debug, Clone, Default)]
pub struct CommonOptions {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub redirect_uri: Option<String>,
    pub secure: bool,
    pub json: bool,
    pub verbose: bool,
}

fn print_success(text: &str) {
    println!("{}", format!("✓ {text}").green().bold());
}

fn print_warning(text: &str) {
    println!("{}", format!("⚠ {text}").yellow().bold());
}

fn print_info(text: &str) {
    println!("{}", format!("ℹ {text}").blue());
}

/// Print an error message in red on stderr
pub fn print_error(text: &str) {
    eprintln!("{}", format!("✗ {text}").red().bold());
}

fn build_engine(opts: &CommonOptions) -> Result<GitHubOAuth> {
    let mode = if opts.secure {
        SecurityMode::Secure
    } else {
        SecurityMode::Standard
    };

    if opts.verbose {
        match mode {
            SecurityMode::Secure => print_info("Running in secure mode (HTTPS required)"),
            SecurityMode::Standard => {
                print_info("Running in standard mode (HTTP allowed for localhost)")
            }
        }
    }

    let engine = GitHubOAuth::new(
        opts.client_id.clone(),
        opts.client_secret.clone(),
        opts.redirect_uri.clone(),
        mode,
    )?;

    if let Some(warning) = engine.transport_warning() {
        if !opts.json {
            print_warning(warning);
        }
    }

    Ok(engine)
}

/// `auth` - generate an authorization URL and print it (optionally open it)
pub async fn run_auth(
    opts: &CommonOptions,
    scopes: Vec<String>,
    state: Option<String>,
    open_browser: bool,
) -> Result<()> {
    let engine = build_engine(opts)?;
    let auth = engine.authorization_url(&scopes, state);

    if opts.json {
        let result = json!({
            "authorization_url": auth.url,
            "state": auth.state,
            "scopes": scopes,
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_success("Generated GitHub OAuth authorization URL");
        if opts.verbose {
            print_info(&format!("Scopes requested: {}", scopes.join(", ")));
            print_info(&format!("Redirect URI: {}", engine.redirect_uri()));
            println!();
        }

        println!("{}", "Authorization URL:".cyan().bold());
        println!("{}", auth.url);
        println!();
        println!(
            "{}",
            format!("State (save this for verification): {}", auth.state).yellow()
        );
    }

    if open_browser {
        if !opts.json {
            print_info("Opening authorization URL in browser...");
        }
        if let Err(e) = open::that(&auth.url) {
            tracing::warn!("failed to open browser: {e}");
            if !opts.json {
                print_warning(&format!("Could not open browser: {e}"));
                print_info("Please copy and paste the URL manually");
            }
        } else if !opts.json {
            print_success("Browser opened successfully");
        }
    }

    Ok(())
}

/// `token` - exchange an authorization code for an access token
pub async fn run_token(
    opts: &CommonOptions,
    code: String,
    state: Option<String>,
    expected_state: Option<String>,
) -> Result<()> {
    if opts.verbose {
        print_info("Exchanging authorization code for access token...");
    }

    let engine = build_engine(opts)?;
    let token = engine
        .exchange_code_for_token(&code, state.as_deref(), expected_state.as_deref())
        .await?;

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&token)?);
    } else {
        print_success("Successfully exchanged authorization code for access token");
        if opts.verbose {
            print_info(&format!(
                "Token type: {}",
                token.token_type.as_deref().unwrap_or("N/A")
            ));
            print_info(&format!(
                "Scope: {}",
                token.scope.as_deref().unwrap_or("N/A")
            ));
            println!();
        }

        println!("{}", "Access Token:".cyan().bold());
        println!("{}", token.access_token);
    }

    Ok(())
}

/// `test` - validate an access token and show who it belongs to
pub async fn run_test(opts: &CommonOptions, token: String) -> Result<()> {
    if opts.verbose {
        print_info("Testing access token validity...");
    }

    let engine = build_engine(opts)?;
    let report = engine.test_api_access(&token).await?;

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_success("Token is valid! User information:");
        println!();
        println!("{}", format!("Username: {}", report.user.login).cyan());
        println!("Name: {}", report.user.name.as_deref().unwrap_or("N/A"));
        println!("Email: {}", report.user.email.as_deref().unwrap_or("N/A"));
        println!("User ID: {}", report.user.id);
        println!(
            "Account Type: {}",
            report.user.account_type.as_deref().unwrap_or("N/A")
        );
        if let Some(company) = &report.user.company {
            println!("Company: {company}");
        }
        if !report.scopes.is_empty() {
            println!("Granted scopes: {}", report.scopes.join(", "));
        }
    }

    Ok(())
}

/// `revoke` - revoke an access token
pub async fn run_revoke(opts: &CommonOptions, token: String) -> Result<()> {
    if opts.verbose {
        print_info("Revoking access token...");
    }

    let engine = build_engine(opts)?;
    let revoked = engine.revoke_token(&token).await?;

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&json!({ "revoked": revoked }))?);
    } else if revoked {
        print_success("Token successfully revoked");
    } else {
        print_warning("Failed to revoke token (it may already be invalid)");
    }

    Ok(())
}
