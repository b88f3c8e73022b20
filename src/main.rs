//! Newsroom Server — content-management backend for the continental news portal.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use newsroom_api::state::AppState;
use newsroom_auth::password::PasswordHasher;
use newsroom_auth::policy::AccessPolicy;
use newsroom_auth::session::{SessionManager, SessionStore};
use newsroom_core::config::AppConfig;
use newsroom_core::error::AppError;
use newsroom_store::{AccountStore, NewsStore};

#[tokio::main]
async fn main() {
    let env = std::env::var("NEWSROOM_ENV").unwrap_or_else(|_| "development".to_string());
    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Newsroom v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Create the data directory ────────────────────────
    if let Err(e) = tokio::fs::create_dir_all(&config.storage.data_dir).await {
        tracing::error!(
            dir = %config.storage.data_dir.display(),
            "Failed to create data directory: {e}"
        );
    }

    // ── Step 2: Load durable state ────────────────────────────────
    // Load failures are logged inside the stores and are not fatal; the
    // process continues with in-memory defaults.
    tracing::info!("Loading durable state...");
    let news = Arc::new(NewsStore::load(config.storage.news_path()).await);
    let accounts = Arc::new(AccountStore::load(config.storage.accounts_path()).await);
    tracing::info!("Durable state loaded");

    // ── Step 3: Initialize auth system ────────────────────────────
    let password_hasher = Arc::new(PasswordHasher::new());
    let sessions = Arc::new(SessionManager::new(
        Arc::clone(&accounts),
        Arc::clone(&password_hasher),
        SessionStore::new(config.session.ttl_hours),
    ));
    let policy = AccessPolicy::new();

    // ── Step 4: Build and start the HTTP server ───────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let app_state = AppState {
        config: Arc::new(config),
        news: Arc::clone(&news),
        accounts: Arc::clone(&accounts),
        sessions,
        password_hasher,
        policy,
    };
    let app = newsroom_api::router::build_router(app_state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Newsroom server listening on {}", addr);

    let server = axum::serve(listener, app).with_graceful_shutdown(async {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    // ── Step 5: Final best-effort flush ───────────────────────────
    if let Err(e) = news.flush().await {
        tracing::error!("Failed to flush news document on shutdown: {e}");
    }
    if let Err(e) = accounts.flush().await {
        tracing::error!("Failed to flush account table on shutdown: {e}");
    }

    tracing::info!("Newsroom server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
