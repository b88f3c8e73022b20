//! The account (credential) store.

use std::path::PathBuf;

use tokio::sync::RwLock;

use newsroom_core::{AppError, AppResult};
use newsroom_entity::{Account, AccountSummary, AccountUpdate};

/// In-memory mirror of the flat account table.
///
/// Records are kept in file order. Every mutation rewrites the whole table
/// under the write lock, which also serializes the rename-collision check
/// inside [`AccountStore::update`].
#[derive(Debug)]
pub struct AccountStore {
    accounts: RwLock<Vec<Account>>,
    path: PathBuf,
}

impl AccountStore {
    /// Load the account table from its durable file.
    ///
    /// A missing or unreadable file leaves the store empty; the failure is
    /// logged and the process keeps going.
    pub async fn load(path: PathBuf) -> Self {
        let accounts = match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let mut reader = csv::Reader::from_reader(bytes.as_slice());
                let mut accounts = Vec::new();
                for record in reader.deserialize::<Account>() {
                    match record {
                        Ok(account) => accounts.push(account),
                        Err(e) => {
                            tracing::error!(path = %path.display(), "Skipping bad account row: {e}");
                        }
                    }
                }
                accounts
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                tracing::error!(path = %path.display(), "Failed to read account table: {e}");
                Vec::new()
            }
        };

        if accounts.is_empty() {
            tracing::warn!(path = %path.display(), "No accounts loaded; management API is unreachable until the table is seeded");
        }

        Self {
            accounts: RwLock::new(accounts),
            path,
        }
    }

    /// List every account without its password hash.
    pub async fn list(&self) -> Vec<AccountSummary> {
        let accounts = self.accounts.read().await;
        accounts.iter().map(AccountSummary::from).collect()
    }

    /// Look up one account by identifier (case-sensitive).
    pub async fn find(&self, id: &str) -> Option<Account> {
        let accounts = self.accounts.read().await;
        accounts.iter().find(|a| a.id == id).cloned()
    }

    /// Insert a new account with an already-hashed password.
    pub async fn insert(&self, account: Account) -> AppResult<AccountSummary> {
        let mut accounts = self.accounts.write().await;
        if accounts.iter().any(|a| a.id == account.id) {
            return Err(AppError::conflict("User already exists"));
        }
        let summary = AccountSummary::from(&account);
        accounts.push(account);
        self.persist(&accounts).await;
        tracing::info!(id = %summary.id, role = %summary.role, "Account created");
        Ok(summary)
    }

    /// Apply a partial update to an existing account.
    ///
    /// Renaming onto another account's identifier is a conflict; the check
    /// and the write happen under one lock.
    pub async fn update(&self, original_id: &str, update: AccountUpdate) -> AppResult<AccountSummary> {
        let mut accounts = self.accounts.write().await;
        let index = accounts
            .iter()
            .position(|a| a.id == original_id)
            .ok_or_else(|| AppError::not_found("User not found"))?;

        if let Some(new_id) = &update.id {
            if new_id != original_id && accounts.iter().any(|a| a.id == *new_id) {
                return Err(AppError::conflict("New user ID already in use"));
            }
        }

        let account = &mut accounts[index];
        if let Some(new_id) = update.id {
            account.id = new_id;
        }
        if let Some(role) = update.role {
            account.role = role;
        }
        if let Some(hash) = update.password_hash {
            account.password_hash = hash;
        }
        let summary = AccountSummary::from(&*account);
        self.persist(&accounts).await;
        tracing::info!(id = %summary.id, "Account updated");
        Ok(summary)
    }

    /// Delete an account, refusing self-deletion by the acting session.
    pub async fn delete(&self, id: &str, acting_id: &str) -> AppResult<()> {
        if id == acting_id {
            return Err(AppError::forbidden("Cannot delete your own account"));
        }
        let mut accounts = self.accounts.write().await;
        let before = accounts.len();
        accounts.retain(|a| a.id != id);
        if accounts.len() == before {
            return Err(AppError::not_found("User not found"));
        }
        self.persist(&accounts).await;
        tracing::info!(%id, "Account deleted");
        Ok(())
    }

    /// Write the current table to the durable file.
    pub async fn flush(&self) -> AppResult<()> {
        let accounts = self.accounts.read().await;
        let bytes = Self::to_csv(&accounts)?;
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }

    fn to_csv(accounts: &[Account]) -> AppResult<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for account in accounts {
            writer
                .serialize(account)
                .map_err(|e| AppError::with_source(newsroom_core::ErrorKind::Serialization, "Failed to serialize account row", e))?;
        }
        writer
            .into_inner()
            .map_err(|e| AppError::storage(format!("Failed to finish account table: {e}")))
    }

    /// Rewrite the whole table, logging and swallowing errors.
    async fn persist(&self, accounts: &[Account]) {
        let bytes = match Self::to_csv(accounts) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::error!("Failed to serialize account table: {e}");
                return;
            }
        };
        if let Err(e) = tokio::fs::write(&self.path, bytes).await {
            tracing::error!(path = %self.path.display(), "Failed to persist account table: {e}");
        }
    }
}
