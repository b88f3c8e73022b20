//! Application state shared across all handlers.

use std::sync::Arc;

use newsroom_auth::password::PasswordHasher;
use newsroom_auth::policy::AccessPolicy;
use newsroom_auth::session::SessionManager;
use newsroom_core::config::AppConfig;
use newsroom_store::{AccountStore, NewsStore};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Partitioned news store.
    pub news: Arc<NewsStore>,
    /// Credential store.
    pub accounts: Arc<AccountStore>,
    /// Session lifecycle manager.
    pub sessions: Arc<SessionManager>,
    /// Password hasher (Argon2id).
    pub password_hasher: Arc<PasswordHasher>,
    /// Role/partition access policy.
    pub policy: AccessPolicy,
}
