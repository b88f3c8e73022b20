//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Navigation hint returned by login and logout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectResponse {
    /// Where the client should navigate next.
    pub redirect_to: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}
