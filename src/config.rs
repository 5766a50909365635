//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! Variables may also come from a `.env` file (loaded via `dotenvy` in `main.rs`).
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `IDENTITY_API_BASE` - Identity API root (default: `https://api.corpus.swecha.org`)
//! - `LOGIN_TIMEOUT_SECS` - Login request timeout (default: 15)
//! - `GEMINI_API_KEY` - Gemini API key; generation is disabled without it
//! - `GEMINI_API_KEY_FILE` - File holding the key, read when `GEMINI_API_KEY` is unset
//! - `GEMINI_MODEL` - Model identifier (default: `gemini-1.5-flash`)
//! - `GEMINI_API_BASE` - Gemini API root (default: `https://generativelanguage.googleapis.com/v1beta`)
//! - `GENERATION_TIMEOUT_SECS` - Generation request timeout (default: none)
//! - `SESSION_IDLE_TIMEOUT_SECS` - Idle time before a session is dropped (default: 3600)
//! - `COOKIE_SECURE` - Mark the session cookie `Secure` (default: `false`)

use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::time::Duration;
use url::Url;

use crate::infrastructure::generation::{DEFAULT_GEMINI_API_BASE, DEFAULT_GEMINI_MODEL};
use crate::utils::mask::{mask_secret, mask_url_credentials};

pub const DEFAULT_IDENTITY_API_BASE: &str = "https://api.corpus.swecha.org";

/// Service configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub identity_api_base: String,
    pub login_timeout_secs: u64,
    /// `None` disables the generate action entirely.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub generation_timeout_secs: Option<u64>,
    pub session_idle_timeout_secs: u64,
    pub cookie_secure: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `GEMINI_API_KEY_FILE` is set but cannot be read.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let identity_api_base = env::var("IDENTITY_API_BASE")
            .unwrap_or_else(|_| DEFAULT_IDENTITY_API_BASE.to_string());

        let login_timeout_secs = env::var("LOGIN_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(15);

        let gemini_api_key = Self::load_gemini_api_key()?;

        let gemini_model =
            env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string());

        let gemini_api_base =
            env::var("GEMINI_API_BASE").unwrap_or_else(|_| DEFAULT_GEMINI_API_BASE.to_string());

        let generation_timeout_secs = env::var("GENERATION_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok());

        let session_idle_timeout_secs = env::var("SESSION_IDLE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3600);

        let cookie_secure = env::var("COOKIE_SECURE")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            identity_api_base,
            login_timeout_secs,
            gemini_api_key,
            gemini_model,
            gemini_api_base,
            generation_timeout_secs,
            session_idle_timeout_secs,
            cookie_secure,
        })
    }

    /// Resolves the Gemini API key.
    ///
    /// Priority:
    /// 1. `GEMINI_API_KEY` environment variable
    /// 2. Contents of the file named by `GEMINI_API_KEY_FILE`
    ///
    /// Blank values count as absent.
    fn load_gemini_api_key() -> Result<Option<String>> {
        if let Ok(key) = env::var("GEMINI_API_KEY") {
            let key = key.trim();
            if !key.is_empty() {
                return Ok(Some(key.to_string()));
            }
        }

        let Ok(path) = env::var("GEMINI_API_KEY_FILE") else {
            return Ok(None);
        };

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read GEMINI_API_KEY_FILE '{path}'"))?;
        let key = contents.trim();

        Ok((!key.is_empty()).then(|| key.to_string()))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - an API base is not an http(s) URL
    /// - a timeout is zero
    /// - `gemini_model` is empty
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        validate_http_url("IDENTITY_API_BASE", &self.identity_api_base)?;
        validate_http_url("GEMINI_API_BASE", &self.gemini_api_base)?;

        if self.login_timeout_secs == 0 {
            anyhow::bail!("LOGIN_TIMEOUT_SECS must be greater than 0");
        }

        if self.generation_timeout_secs == Some(0) {
            anyhow::bail!("GENERATION_TIMEOUT_SECS must be greater than 0 when set");
        }

        if self.session_idle_timeout_secs == 0 {
            anyhow::bail!("SESSION_IDLE_TIMEOUT_SECS must be greater than 0");
        }

        if self.gemini_model.trim().is_empty() {
            anyhow::bail!("GEMINI_MODEL must not be empty");
        }

        Ok(())
    }

    /// Returns whether the generate action is available.
    pub fn is_generation_enabled(&self) -> bool {
        self.gemini_api_key.is_some()
    }

    pub fn login_timeout(&self) -> Duration {
        Duration::from_secs(self.login_timeout_secs)
    }

    pub fn generation_timeout(&self) -> Option<Duration> {
        self.generation_timeout_secs.map(Duration::from_secs)
    }

    pub fn session_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.session_idle_timeout_secs)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!(
            "  Identity API: {}",
            mask_url_credentials(&self.identity_api_base)
        );
        tracing::info!("  Login timeout: {}s", self.login_timeout_secs);

        match &self.gemini_api_key {
            Some(key) => tracing::info!(
                "  Generation: enabled (model {}, key {})",
                self.gemini_model,
                mask_secret(key)
            ),
            None => tracing::warn!("  Generation: disabled (GEMINI_API_KEY is missing)"),
        }

        tracing::info!("  Session idle timeout: {}s", self.session_idle_timeout_secs);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

// The key never appears in debug output.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("listen_addr", &self.listen_addr)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .field("identity_api_base", &self.identity_api_base)
            .field("login_timeout_secs", &self.login_timeout_secs)
            .field("gemini_api_key", &self.gemini_api_key.as_deref().map(mask_secret))
            .field("gemini_model", &self.gemini_model)
            .field("gemini_api_base", &self.gemini_api_base)
            .field("generation_timeout_secs", &self.generation_timeout_secs)
            .field("session_idle_timeout_secs", &self.session_idle_timeout_secs)
            .field("cookie_secure", &self.cookie_secure)
            .finish()
    }
}

fn validate_http_url(name: &str, value: &str) -> Result<()> {
    let url = Url::parse(value).with_context(|| format!("{name} is not a valid URL: '{value}'"))?;
    if url.scheme() != "https" && url.scheme() != "http" {
        anyhow::bail!("{name} must use http or https, got '{}'", url.scheme());
    }
    Ok(())
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be read or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
