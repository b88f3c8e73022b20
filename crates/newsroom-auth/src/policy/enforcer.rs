//! Access policy — decides whether a role may touch a partition.

use newsroom_core::{AppError, AppResult};
use newsroom_entity::{AccountRole, Identity, Region};

/// The single decision point for every gated operation.
///
/// Reads are public and never consult the policy. Every write handler
/// calls exactly one `require_*` method before touching a store; on denial
/// the store is never reached.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessPolicy;

impl AccessPolicy {
    /// Creates the policy.
    pub fn new() -> Self {
        Self
    }

    /// Whether `role` may write to `region`'s content.
    ///
    /// `editor` writes everywhere; a region role writes only to its own
    /// region. No role other than `editor` can write the global partition.
    pub fn can_write(&self, role: AccountRole, region: Region) -> bool {
        match role {
            AccountRole::Editor => true,
            AccountRole::Region(own) => own == region,
        }
    }

    /// Whether `role` may manage accounts.
    pub fn can_manage_accounts(&self, role: AccountRole) -> bool {
        role.is_editor()
    }

    /// Gate a content write: 401 without a session, 403 with the wrong role.
    pub fn require_write(&self, identity: Option<&Identity>, region: Region) -> AppResult<()> {
        match identity {
            None => Err(AppError::unauthorized("Unauthorized")),
            Some(identity) if self.can_write(identity.role, region) => Ok(()),
            Some(_) => Err(AppError::forbidden("Forbidden")),
        }
    }

    /// Gate an account-management operation the same way.
    pub fn require_account_manager(&self, identity: Option<&Identity>) -> AppResult<()> {
        match identity {
            None => Err(AppError::unauthorized("Unauthorized")),
            Some(identity) if self.can_manage_accounts(identity.role) => Ok(()),
            Some(_) => Err(AppError::forbidden("Forbidden")),
        }
    }
}
