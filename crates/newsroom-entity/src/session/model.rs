//! Server-held session record.

use chrono::{DateTime, Utc};

use crate::account::AccountRole;

/// An authenticated session, held server-side and referenced by the opaque
/// token the client carries in its cookie.
///
/// Lifetime is fixed at creation; there is no sliding renewal.
#[derive(Debug, Clone)]
pub struct Session {
    /// Opaque client-presented token.
    pub token: String,
    /// Identifier of the authenticated account.
    pub account_id: String,
    /// Role at login time.
    pub role: AccountRole,
    /// When the session was issued.
    pub created_at: DateTime<Utc>,
    /// When the session stops being honored.
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Check whether this session has passed its fixed expiry.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// The identity this session vouches for.
    pub fn identity(&self) -> Identity {
        Identity {
            account_id: self.account_id.clone(),
            role: self.role,
        }
    }
}

/// The authenticated identity extracted from a live session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Account identifier.
    pub account_id: String,
    /// Account role.
    pub role: AccountRole,
}
