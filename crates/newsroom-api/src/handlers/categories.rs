//! Category handlers, shared by the global and regional route families.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;

use crate::dto::request::CreateCategoryRequest;
use crate::error::ApiError;
use crate::extractors::{AuthSession, PartitionKey};
use crate::state::AppState;

/// Category path segment (percent-decoded by the router).
#[derive(Debug, Deserialize)]
pub struct CategoryPath {
    category: String,
}

/// GET /api/news-categories and GET /api/{region}/news-categories — public read.
pub async fn list(
    State(state): State<AppState>,
    PartitionKey(region): PartitionKey,
) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(state.news.list_categories(region).await))
}

/// POST /api/news-categories and POST /api/{region}/news-categories
///
/// Returns the partition's updated category list.
pub async fn create(
    State(state): State<AppState>,
    PartitionKey(region): PartitionKey,
    auth: AuthSession,
    Json(req): Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<Vec<String>>), ApiError> {
    state.policy.require_write(auth.identity(), region)?;
    let categories = state.news.create_category(region, req.category).await?;
    Ok((StatusCode::CREATED, Json(categories)))
}

/// DELETE /api/news-categories/{category} and the regional equivalent.
pub async fn remove(
    State(state): State<AppState>,
    PartitionKey(region): PartitionKey,
    auth: AuthSession,
    Path(CategoryPath { category }): Path<CategoryPath>,
) -> Result<StatusCode, ApiError> {
    state.policy.require_write(auth.identity(), region)?;
    state.news.delete_category(region, &category).await?;
    Ok(StatusCode::NO_CONTENT)
}
