//! Session lifecycle manager — login, logout, identity resolution.

use std::sync::Arc;

use newsroom_core::{AppError, AppResult};
use newsroom_entity::{AccountRole, Identity, Session};
use newsroom_store::AccountStore;

use crate::password::PasswordHasher;

use super::store::SessionStore;

/// A syntactically valid Argon2id hash that matches no password.
///
/// Verified against when the submitted identifier is unknown, so that the
/// unknown-identifier path costs the same as a wrong password and the
/// failure response cannot be used to enumerate accounts.
const DUMMY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHRzYWx0c2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The freshly issued session.
    pub session: Session,
    /// Where the client should navigate next, derived from the role.
    pub redirect: String,
}

/// Manages the complete session lifecycle.
#[derive(Debug)]
pub struct SessionManager {
    /// Credential store holding the password hashes.
    accounts: Arc<AccountStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Live sessions.
    sessions: SessionStore,
}

impl SessionManager {
    /// Creates a new session manager.
    pub fn new(accounts: Arc<AccountStore>, hasher: Arc<PasswordHasher>, sessions: SessionStore) -> Self {
        Self {
            accounts,
            hasher,
            sessions,
        }
    }

    /// Verifies credentials and issues a session.
    ///
    /// Both failure paths (unknown identifier, wrong password) return the
    /// same `Unauthorized` error with the same message.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<LoginOutcome> {
        let Some(account) = self.accounts.find(username).await else {
            let _ = self.hasher.verify_password(password, DUMMY_HASH);
            return Err(AppError::unauthorized("Invalid credentials"));
        };

        let verified = match self.hasher.verify_password(password, &account.password_hash) {
            Ok(verified) => verified,
            Err(e) => {
                tracing::error!(account = %account.id, "Password verification failed: {e}");
                false
            }
        };
        if !verified {
            return Err(AppError::unauthorized("Invalid credentials"));
        }

        let session = self.sessions.issue(&account.id, account.role);
        tracing::info!(account = %account.id, role = %account.role, "Login");
        Ok(LoginOutcome {
            redirect: admin_redirect(account.role),
            session,
        })
    }

    /// Destroys the session behind `token`, if any, and returns where the
    /// client should navigate next. Always succeeds.
    pub fn logout(&self, token: Option<&str>) -> String {
        let redirect = token
            .and_then(|t| self.sessions.validate(t))
            .map(|identity| logout_redirect(identity.role))
            .unwrap_or_else(|| "/".to_string());

        if let Some(token) = token {
            if self.sessions.remove(token) {
                tracing::debug!("Session destroyed");
            }
        }
        redirect
    }

    /// Resolves a token into the identity it vouches for.
    pub fn current(&self, token: &str) -> Option<Identity> {
        self.sessions.validate(token)
    }
}

/// The admin surface a freshly logged-in role lands on.
fn admin_redirect(role: AccountRole) -> String {
    match role {
        AccountRole::Editor => "/admin.html".to_string(),
        AccountRole::Region(region) => format!("/{region}/admin.html"),
    }
}

/// The public surface a logged-out role lands on.
fn logout_redirect(role: AccountRole) -> String {
    match role {
        AccountRole::Editor => "/".to_string(),
        AccountRole::Region(region) => format!("/{region}/"),
    }
}
