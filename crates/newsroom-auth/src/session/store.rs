//! In-memory session storage keyed by opaque token.

use base64::Engine;
use chrono::{Duration, Utc};
use dashmap::DashMap;
use rand::RngCore;

use newsroom_entity::{AccountRole, Identity, Session};

/// Generates a fresh 256-bit token, base64url without padding.
fn generate_token() -> String {
    let mut buf = [0u8; 32];
    rand::rng().fill_bytes(&mut buf);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buf)
}

/// Holds every live session, keyed by its token.
///
/// Expiry is fixed from creation and checked passively: an expired entry
/// is dropped the next time its token is presented, and never earlier.
#[derive(Debug)]
pub struct SessionStore {
    sessions: DashMap<String, Session>,
    ttl: Duration,
}

impl SessionStore {
    /// Creates a session store with the given fixed lifetime.
    pub fn new(ttl_hours: u64) -> Self {
        Self {
            sessions: DashMap::new(),
            ttl: Duration::hours(ttl_hours as i64),
        }
    }

    /// Issues a session for an authenticated account.
    pub fn issue(&self, account_id: &str, role: AccountRole) -> Session {
        let now = Utc::now();
        let session = Session {
            token: generate_token(),
            account_id: account_id.to_string(),
            role,
            created_at: now,
            expires_at: now + self.ttl,
        };
        self.sessions.insert(session.token.clone(), session.clone());
        tracing::debug!(account = %account_id, "Session issued");
        session
    }

    /// Resolves a token into an identity, dropping the entry if expired.
    pub fn validate(&self, token: &str) -> Option<Identity> {
        let expired = match self.sessions.get(token) {
            Some(session) if !session.is_expired() => return Some(session.identity()),
            Some(_) => true,
            None => false,
        };
        if expired {
            self.sessions.remove(token);
        }
        None
    }

    /// Removes a session. Returns whether it existed.
    pub fn remove(&self, token: &str) -> bool {
        self.sessions.remove(token).is_some()
    }

    /// Number of live entries, expired or not (expiry is passive).
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no sessions are held.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
