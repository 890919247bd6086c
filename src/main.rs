use clap::{Parser, Subcommand};
use gh_oauth_helper::cli::{self, CommonOptions};
use gh_oauth_helper::oauth::DEFAULT_SCOPES;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "gh-oauth")]
#[command(author, version, about = "GitHub OAuth Helper - Manage GitHub OAuth authentication flows", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// GitHub OAuth app client ID (can also use GITHUB_CLIENT_ID env var)
    #[arg(long, global = true)]
    client_id: Option<String>,

    /// GitHub OAuth app client secret (can also use GITHUB_CLIENT_SECRET env var)
    #[arg(long, global = true)]
    client_secret: Option<String>,

    /// OAuth redirect URI (can also use GITHUB_REDIRECT_URI env var)
    #[arg(long, global = true)]
    redirect_uri: Option<String>,

    /// Require HTTPS for non-localhost redirect URIs
    #[arg(long, global = true)]
    secure: bool,

    /// Output results in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate GitHub OAuth authorization URL
    Auth {
        /// OAuth scopes to request
        #[arg(long, num_args = 1.., default_values_t = DEFAULT_SCOPES.iter().map(ToString::to_string))]
        scopes: Vec<String>,

        /// Custom state parameter (random generated if not provided)
        #[arg(long)]
        state: Option<String>,

        /// Automatically open the authorization URL in browser
        #[arg(long)]
        open: bool,
    },

    /// Exchange authorization code for access token
    Token {
        /// Authorization code from GitHub callback
        #[arg(long)]
        code: String,

        /// State parameter returned by the callback
        #[arg(long)]
        state: Option<String>,

        /// Expected state value saved from the auth step (enables CSRF verification)
        #[arg(long)]
        expected_state: Option<String>,
    },

    /// Test access token validity
    Test {
        /// Access token to test
        #[arg(long)]
        token: String,
    },

    /// Revoke access token
    Revoke {
        /// Access token to revoke
        #[arg(long)]
        token: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "gh_oauth_helper=debug"
    } else {
        "gh_oauth_helper=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let common = CommonOptions {
        client_id: cli.client_id,
        client_secret: cli.client_secret,
        redirect_uri: cli.redirect_uri,
        secure: cli.secure,
        json: cli.json,
        verbose: cli.verbose,
    };

    let result = match cli.command {
        Commands::Auth {
            scopes,
            state,
            open,
        } => cli::run_auth(&common, scopes, state, open).await,
        Commands::Token {
            code,
            state,
            expected_state,
        } => cli::run_token(&common, code, state, expected_state).await,
        Commands::Test { token } => cli::run_test(&common, token).await,
        Commands::Revoke { token } => cli::run_revoke(&common, token).await,
    };

    if let Err(e) = result {
        cli::print_error(&e.to_string());
        std::process::exit(1);
    }
}
