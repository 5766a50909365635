//! HTTP server initialization and runtime setup.
//!
//! Builds the remote API clients, the session store and its sweeper, and
//! runs the Axum server until Ctrl-C.

use crate::application::services::{ArticleRequester, SessionAuthenticator};
use crate::config::Config;
use crate::domain::repositories::SessionRepository;
use crate::domain::session_sweeper::run_session_sweeper;
use crate::infrastructure::generation::GeminiClient;
use crate::infrastructure::identity::HttpIdentityClient;
use crate::infrastructure::persistence::MemorySessionRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the shared application state from configuration.
///
/// The article service is only created when a Gemini API key is present.
///
/// # Errors
///
/// Returns an error if an HTTP client cannot be built.
pub fn build_state(config: &Config) -> Result<AppState> {
    let identity_client = HttpIdentityClient::new(&config.identity_api_base, config.login_timeout())
        .context("Failed to build identity API client")?;
    tracing::info!("Identity endpoint: {}", identity_client.login_url());
    let auth_service = Arc::new(SessionAuthenticator::new(Arc::new(identity_client)));

    let article_service = match &config.gemini_api_key {
        Some(api_key) => {
            let client = GeminiClient::new(
                api_key.as_str(),
                config.gemini_model.as_str(),
                config.generation_timeout(),
            )
            .context("Failed to build Gemini client")?
            .with_base_url(config.gemini_api_base.as_str());
            tracing::info!("Generation enabled with model {}", client.model());
            Some(Arc::new(ArticleRequester::new(Arc::new(client))))
        }
        None => {
            tracing::warn!("GEMINI_API_KEY is missing; generation disabled");
            None
        }
    };

    let sessions: Arc<dyn SessionRepository> = Arc::new(MemorySessionRepository::new());

    Ok(AppState::new(
        auth_service,
        article_service,
        sessions,
        config.cookie_secure,
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Identity and Gemini clients
/// - In-memory session store
/// - Background session sweeper
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - A client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;

    let sweeper = tokio::spawn(run_session_sweeper(
        state.sessions.clone(),
        config.session_idle_timeout(),
    ));
    tracing::info!("Session sweeper started");

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    sweeper.abort();
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
