//! News item entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A published news item.
///
/// `id` and `timestamp` are assigned by the server at creation and are
/// immutable afterwards; every other field is client-provided and mutable
/// via partial update. `category` is a free-form reference into the owning
/// partition's category list and is not validated on write.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    /// Server-assigned identifier.
    pub id: Uuid,
    /// Headline.
    #[serde(default)]
    pub heading: String,
    /// Body text.
    #[serde(default)]
    pub content: String,
    /// Attribution line.
    #[serde(default)]
    pub source: String,
    /// Name of a category in the same partition, or empty.
    #[serde(default)]
    pub category: String,
    /// Optional external link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_link: Option<String>,
    /// Server-assigned creation time.
    pub timestamp: DateTime<Utc>,
}

impl NewsItem {
    /// Shallow-merge a partial update over this item.
    ///
    /// Only fields present in the patch change; `id` and `timestamp` are
    /// not part of the patch type and therefore cannot be touched.
    pub fn apply(&mut self, patch: NewsPatch) {
        if let Some(heading) = patch.heading {
            self.heading = heading;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(source) = patch.source {
            self.source = source;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(website_link) = patch.website_link {
            self.website_link = Some(website_link);
        }
    }
}

/// Client-provided fields of a new news item.
///
/// Every field is optional on the wire; whatever arrives passes through
/// verbatim, matching the portal's lenient ingestion behavior.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsDraft {
    /// Headline.
    #[serde(default)]
    pub heading: String,
    /// Body text.
    #[serde(default)]
    pub content: String,
    /// Attribution line.
    #[serde(default)]
    pub source: String,
    /// Category name, unvalidated.
    #[serde(default)]
    pub category: String,
    /// Optional external link.
    #[serde(default)]
    pub website_link: Option<String>,
}

/// Partial update of a news item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsPatch {
    /// New headline, if provided.
    pub heading: Option<String>,
    /// New body text, if provided.
    pub content: Option<String>,
    /// New attribution, if provided.
    pub source: Option<String>,
    /// New category name, if provided.
    pub category: Option<String>,
    /// New external link, if provided.
    pub website_link: Option<String>,
}
