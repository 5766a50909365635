//! Terminal client for ArticleGen.
//!
//! Runs the same login and generation workflow as the web page, without a
//! browser. Useful for checking credentials and API keys from a shell.
//!
//! # Usage
//!
//! ```bash
//! # Check credentials against the identity API
//! cargo run --bin console -- login --phone +911234567890
//!
//! # Log in, then generate an article into a file
//! cargo run --bin console -- generate --phone +911234567890 --title "Cats" --out cats.html
//!
//! # Show effective configuration
//! cargo run --bin console -- config
//! ```
//!
//! # Environment Variables
//!
//! Same as the server (see `articlegen::config`); `.env` is loaded if present.

use articlegen::application::services::{ArticleRequester, SessionAuthenticator};
use articlegen::config::{self, Config};
use articlegen::domain::session::Session;
use articlegen::infrastructure::generation::GeminiClient;
use articlegen::infrastructure::identity::HttpIdentityClient;
use articlegen::utils::mask::{mask_secret, mask_url_credentials};
use articlegen::{AuthError, GenerationError};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Password;
use std::path::PathBuf;
use std::sync::Arc;

/// Command-line client for ArticleGen.
#[derive(Parser)]
#[command(name = "console")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Log in and report the outcome
    Login {
        #[command(flatten)]
        credentials: CredentialArgs,
    },

    /// Log in, then generate an article for a title
    Generate {
        #[command(flatten)]
        credentials: CredentialArgs,

        /// Article title
        #[arg(short, long)]
        title: String,

        /// Write the HTML to this file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Show the effective configuration
    Config,
}

#[derive(clap::Args)]
struct CredentialArgs {
    /// Phone number, e.g. +91XXXXXXXXXX
    #[arg(short, long)]
    phone: String,

    /// Password (prompted for when omitted)
    #[arg(long)]
    password: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    match cli.command {
        Commands::Login { credentials } => {
            login(&config, credentials).await?;
        }
        Commands::Generate {
            credentials,
            title,
            out,
        } => {
            // Same order as the page: generation requires a successful login.
            login(&config, credentials).await?;
            generate(&config, &title, out).await?;
        }
        Commands::Config => show_config(&config),
    }

    Ok(())
}

/// Logs in, prompting for the password if needed.
async fn login(config: &Config, credentials: CredentialArgs) -> Result<Session> {
    let password = match credentials.password {
        Some(p) => p,
        None => Password::new().with_prompt("Password").interact()?,
    };

    let client = HttpIdentityClient::new(&config.identity_api_base, config.login_timeout())
        .context("Failed to build identity API client")?;
    let authenticator = SessionAuthenticator::new(Arc::new(client));

    println!("{}", "🔐 Logging in...".bright_blue().bold());

    match authenticator.login(&credentials.phone, &password).await {
        Ok(session) => {
            println!(
                "{} (token type: {})",
                "✅ Logged in successfully.".green().bold(),
                session.token_type().cyan()
            );
            Ok(session)
        }
        Err(e) => {
            let hint = match &e {
                AuthError::MissingCredentials | AuthError::Validation => {
                    "Check the phone number format, e.g. +91XXXXXXXXXX"
                }
                AuthError::LoginFailed { .. } => "Check your phone number and password",
                AuthError::Network { .. } | AuthError::MalformedResponse { .. } => {
                    "Check IDENTITY_API_BASE and your network connection"
                }
            };
            println!("{} {}", "❌".red(), e.to_string().red());
            println!("   {}", hint.bright_black());
            Err(e.into())
        }
    }
}

/// Generates an article and prints or writes it.
async fn generate(config: &Config, title: &str, out: Option<PathBuf>) -> Result<()> {
    let api_key = config
        .gemini_api_key
        .as_deref()
        .ok_or(GenerationError::ConfigMissing)?;

    let client = GeminiClient::new(api_key, config.gemini_model.as_str(), config.generation_timeout())
        .context("Failed to build Gemini client")?
        .with_base_url(config.gemini_api_base.as_str());
    let requester = ArticleRequester::new(Arc::new(client));

    println!(
        "{} {}",
        "✍️  Generating with".bright_blue().bold(),
        config.gemini_model.cyan()
    );

    let article = requester.generate(title).await.inspect_err(|e| {
        println!("{} {}", "❌".red(), e.to_string().red());
    })?;

    match out {
        Some(path) => {
            std::fs::write(&path, article.as_str())
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                "{} {}",
                "✅ Article written to".green().bold(),
                path.display().to_string().cyan()
            );
        }
        None => {
            println!();
            println!("{}", article.as_str());
        }
    }

    Ok(())
}

/// Prints configuration without secrets.
fn show_config(config: &Config) {
    println!("{}", "⚙️  Configuration".bright_blue().bold());
    println!();
    println!("  {:<22} {}", "Listen".bright_white(), config.listen_addr);
    println!(
        "  {:<22} {}",
        "Identity API".bright_white(),
        mask_url_credentials(&config.identity_api_base)
    );
    println!(
        "  {:<22} {}s",
        "Login timeout".bright_white(),
        config.login_timeout_secs
    );
    println!("  {:<22} {}", "Gemini model".bright_white(), config.gemini_model);
    println!(
        "  {:<22} {}",
        "Gemini API".bright_white(),
        mask_url_credentials(&config.gemini_api_base)
    );

    let key_status = match &config.gemini_api_key {
        Some(key) => format!("set ({})", mask_secret(key)).green(),
        None => "missing (generation disabled)".red(),
    };
    println!("  {:<22} {}", "Gemini API key".bright_white(), key_status);
    println!(
        "  {:<22} {}s",
        "Session idle timeout".bright_white(),
        config.session_idle_timeout_secs
    );
    println!();
}
