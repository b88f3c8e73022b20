//! Durable storage configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Durable storage configuration.
///
/// The news document and the account table live as flat files under
/// `data_dir`. They are read once at startup and rewritten in full after
/// every mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the durable files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// File name of the multi-partition news document (JSON).
    #[serde(default = "default_news_file")]
    pub news_file: String,
    /// File name of the account table (delimited).
    #[serde(default = "default_accounts_file")]
    pub accounts_file: String,
    /// Directory of static assets served to the browser.
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,
}

impl StorageConfig {
    /// Full path of the news document.
    pub fn news_path(&self) -> PathBuf {
        self.data_dir.join(&self.news_file)
    }

    /// Full path of the account table.
    pub fn accounts_path(&self) -> PathBuf {
        self.data_dir.join(&self.accounts_file)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            news_file: default_news_file(),
            accounts_file: default_accounts_file(),
            public_dir: default_public_dir(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_news_file() -> String {
    "db.json".to_string()
}

fn default_accounts_file() -> String {
    "users.csv".to_string()
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("./public")
}
