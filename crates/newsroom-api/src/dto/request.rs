//! Request DTOs with validation.
//!
//! Fields default rather than reject when absent: the reference clients
//! send sparse bodies, and missing credentials should fail authentication,
//! not deserialization.

use serde::{Deserialize, Serialize};
use validator::Validate;

use newsroom_entity::{NewsDraft, NewsPatch};

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account identifier.
    #[serde(default)]
    pub username: String,
    /// Plaintext password.
    #[serde(default)]
    pub password: String,
}

/// Create account request (editor-only).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAccountRequest {
    /// Account identifier.
    #[serde(default)]
    #[validate(length(min = 1))]
    pub id: String,
    /// Plaintext password, hashed before storage.
    #[serde(default)]
    #[validate(length(min = 1))]
    pub password: String,
    /// Role name: `editor` or a region.
    #[serde(default)]
    #[validate(length(min = 1))]
    pub role: String,
}

/// Update account request (editor-only).
///
/// Absent or empty fields leave the stored value untouched; in particular
/// an empty password never resets the hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAccountRequest {
    /// New account identifier.
    pub id: Option<String>,
    /// New plaintext password.
    pub password: Option<String>,
    /// New role name.
    pub role: Option<String>,
}

/// Create news item request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNewsRequest {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub website_link: Option<String>,
}

impl CreateNewsRequest {
    /// Convert into the store-facing draft.
    pub fn into_draft(self) -> NewsDraft {
        NewsDraft {
            heading: self.heading,
            content: self.content,
            source: self.source,
            category: self.category,
            website_link: self.website_link,
        }
    }
}

/// Partial news update request. `id` and `timestamp` are not accepted
/// here, which is what makes them immutable at the HTTP boundary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNewsRequest {
    pub heading: Option<String>,
    pub content: Option<String>,
    pub source: Option<String>,
    pub category: Option<String>,
    pub website_link: Option<String>,
}

impl UpdateNewsRequest {
    /// Convert into the store-facing patch.
    pub fn into_patch(self) -> NewsPatch {
        NewsPatch {
            heading: self.heading,
            content: self.content,
            source: self.source,
            category: self.category,
            website_link: self.website_link,
        }
    }
}

/// Create category request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    /// Category name.
    #[serde(default)]
    pub category: String,
}
