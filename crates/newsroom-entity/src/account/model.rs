//! Account entity model.

use serde::{Deserialize, Serialize};

use super::role::AccountRole;

/// A registered account, exactly as stored in the account table.
///
/// The password hash is an Argon2id PHC string. It is serialized here only
/// because this struct *is* the durable record; API responses go through
/// [`AccountSummary`], which never carries the hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique login identifier (case-sensitive).
    pub id: String,
    /// One-way password hash.
    pub password_hash: String,
    /// Access role.
    pub role: AccountRole,
}

/// Data for updating an existing account.
///
/// `None` fields leave the stored value untouched. The password arrives
/// here already hashed; deciding whether a submitted password should be
/// re-hashed at all is the caller's concern.
#[derive(Debug, Clone, Default)]
pub struct AccountUpdate {
    /// New login identifier.
    pub id: Option<String>,
    /// New password hash.
    pub password_hash: Option<String>,
    /// New role.
    pub role: Option<AccountRole>,
}

/// The hash-free view of an account returned by the management API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountSummary {
    /// Login identifier.
    pub id: String,
    /// Access role.
    pub role: AccountRole,
}

impl From<&Account> for AccountSummary {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.clone(),
            role: account.role,
        }
    }
}
