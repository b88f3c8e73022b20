//! Session management configuration.

use serde::{Deserialize, Serialize};

/// Session management configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Fixed session lifetime in hours, counted from creation.
    ///
    /// Expiry is passive: checked when a session is presented, never swept.
    #[serde(default = "default_ttl_hours")]
    pub ttl_hours: u64,
    /// Name of the httpOnly session cookie.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_hours: default_ttl_hours(),
            cookie_name: default_cookie_name(),
        }
    }
}

fn default_ttl_hours() -> u64 {
    24
}

fn default_cookie_name() -> String {
    "newsroom_session".to_string()
}
