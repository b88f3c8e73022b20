//! The partitioned news store.

use std::path::PathBuf;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use newsroom_core::{AppError, AppResult};
use newsroom_entity::{NewsDraft, NewsItem, NewsPatch, Region};

use crate::document::NewsDocument;

/// In-memory mirror of the multi-partition news document.
///
/// All mutations run under one write lock that is held across the
/// read-modify-write sequence *and* the snapshot write, so check-then-act
/// races (category in-use checks, merges) cannot interleave and snapshots
/// on disk always reflect a single consistent state.
#[derive(Debug)]
pub struct NewsStore {
    doc: RwLock<NewsDocument>,
    path: PathBuf,
}

impl NewsStore {
    /// Load the store from its durable file.
    ///
    /// A missing or unreadable file is not fatal: the store starts from an
    /// empty document and the failure is logged.
    pub async fn load(path: PathBuf) -> Self {
        let doc = match tokio::fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice::<NewsDocument>(&bytes) {
                Ok(doc) => doc,
                Err(e) => {
                    tracing::error!(path = %path.display(), "Failed to parse news document: {e}");
                    NewsDocument::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => NewsDocument::default(),
            Err(e) => {
                tracing::error!(path = %path.display(), "Failed to read news document: {e}");
                NewsDocument::default()
            }
        };

        Self {
            doc: RwLock::new(doc),
            path,
        }
    }

    /// List a partition's news items, newest first.
    ///
    /// Items with equal timestamps keep their relative insertion order
    /// (stable sort).
    pub async fn list_news(&self, region: Region) -> Vec<NewsItem> {
        let doc = self.doc.read().await;
        let mut items = doc.partition(region).news.clone();
        items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        items
    }

    /// List a partition's categories in insertion order.
    pub async fn list_categories(&self, region: Region) -> Vec<String> {
        let doc = self.doc.read().await;
        doc.partition(region).news_categories.clone()
    }

    /// Create a news item in a partition.
    ///
    /// The server assigns the id and timestamp; every client-provided field
    /// passes through verbatim, including a category name that does not
    /// exist in the partition's category list.
    pub async fn create_news(&self, region: Region, draft: NewsDraft) -> NewsItem {
        let item = NewsItem {
            id: Uuid::new_v4(),
            heading: draft.heading,
            content: draft.content,
            source: draft.source,
            category: draft.category,
            website_link: draft.website_link,
            timestamp: Utc::now(),
        };

        let mut doc = self.doc.write().await;
        doc.partition_mut(region).news.push(item.clone());
        self.persist(&doc).await;
        tracing::debug!(region = %region, id = %item.id, "News item created");
        item
    }

    /// Shallow-merge a partial update over an existing item.
    pub async fn update_news(
        &self,
        region: Region,
        id: Uuid,
        patch: NewsPatch,
    ) -> AppResult<NewsItem> {
        let mut doc = self.doc.write().await;
        let partition = doc.partition_mut(region);
        let item = partition
            .news
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| AppError::not_found("Not found"))?;

        item.apply(patch);
        let updated = item.clone();
        self.persist(&doc).await;
        Ok(updated)
    }

    /// Delete a news item by id.
    pub async fn delete_news(&self, region: Region, id: Uuid) -> AppResult<()> {
        let mut doc = self.doc.write().await;
        let partition = doc.partition_mut(region);
        let before = partition.news.len();
        partition.news.retain(|n| n.id != id);
        if partition.news.len() == before {
            return Err(AppError::not_found("Not found"));
        }
        self.persist(&doc).await;
        tracing::debug!(region = %region, %id, "News item deleted");
        Ok(())
    }

    /// Append a category to a partition, rejecting empties and duplicates.
    ///
    /// Returns the partition's updated category list.
    pub async fn create_category(&self, region: Region, name: String) -> AppResult<Vec<String>> {
        if name.is_empty() {
            return Err(AppError::validation("Invalid category"));
        }

        let mut doc = self.doc.write().await;
        let partition = doc.partition_mut(region);
        if partition.news_categories.contains(&name) {
            return Err(AppError::validation("Invalid category"));
        }
        partition.news_categories.push(name);
        let categories = partition.news_categories.clone();
        self.persist(&doc).await;
        Ok(categories)
    }

    /// Remove a category, refusing while any item in the partition still
    /// references it.
    pub async fn delete_category(&self, region: Region, name: &str) -> AppResult<()> {
        let mut doc = self.doc.write().await;
        let partition = doc.partition_mut(region);

        if partition.news.iter().any(|n| n.category == name) {
            return Err(AppError::in_use("Category is in use"));
        }
        let before = partition.news_categories.len();
        partition.news_categories.retain(|c| c != name);
        if partition.news_categories.len() == before {
            return Err(AppError::not_found("Not found"));
        }
        self.persist(&doc).await;
        tracing::debug!(region = %region, category = name, "Category deleted");
        Ok(())
    }

    /// Write the current state to the durable file.
    ///
    /// Used at shutdown; routine mutations persist on their own.
    pub async fn flush(&self) -> AppResult<()> {
        let doc = self.doc.read().await;
        let bytes = serde_json::to_vec_pretty(&*doc)?;
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }

    /// Snapshot the whole document to disk, logging and swallowing errors.
    ///
    /// Callers hold the write lock, so snapshots never interleave.
    async fn persist(&self, doc: &NewsDocument) {
        let bytes = match serde_json::to_vec_pretty(doc) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::error!("Failed to serialize news document: {e}");
                return;
            }
        };
        if let Err(e) = tokio::fs::write(&self.path, bytes).await {
            tracing::error!(path = %self.path.display(), "Failed to persist news document: {e}");
        }
    }
}
