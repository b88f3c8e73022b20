//! News CRUD handlers, shared by the global and regional route families.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;
use uuid::Uuid;

use newsroom_core::AppError;
use newsroom_entity::NewsItem;

use crate::dto::request::{CreateNewsRequest, UpdateNewsRequest};
use crate::error::ApiError;
use crate::extractors::{AuthSession, PartitionKey};
use crate::state::AppState;

/// News item path segment. Kept as a string so a malformed id falls out as
/// a plain 404 rather than a parse rejection.
#[derive(Debug, Deserialize)]
pub struct NewsPath {
    id: String,
}

fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| AppError::not_found("Not found").into())
}

/// GET /api/news and GET /api/{region}/news — public read.
pub async fn list(
    State(state): State<AppState>,
    PartitionKey(region): PartitionKey,
) -> Result<Json<Vec<NewsItem>>, ApiError> {
    Ok(Json(state.news.list_news(region).await))
}

/// POST /api/news and POST /api/{region}/news
pub async fn create(
    State(state): State<AppState>,
    PartitionKey(region): PartitionKey,
    auth: AuthSession,
    Json(req): Json<CreateNewsRequest>,
) -> Result<(StatusCode, Json<NewsItem>), ApiError> {
    state.policy.require_write(auth.identity(), region)?;
    let item = state.news.create_news(region, req.into_draft()).await;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/news/{id} and PUT /api/{region}/news/{id}
pub async fn update(
    State(state): State<AppState>,
    PartitionKey(region): PartitionKey,
    auth: AuthSession,
    Path(NewsPath { id }): Path<NewsPath>,
    Json(req): Json<UpdateNewsRequest>,
) -> Result<Json<NewsItem>, ApiError> {
    state.policy.require_write(auth.identity(), region)?;
    let id = parse_id(&id)?;
    let item = state.news.update_news(region, id, req.into_patch()).await?;
    Ok(Json(item))
}

/// DELETE /api/news/{id} and DELETE /api/{region}/news/{id}
pub async fn remove(
    State(state): State<AppState>,
    PartitionKey(region): PartitionKey,
    auth: AuthSession,
    Path(NewsPath { id }): Path<NewsPath>,
) -> Result<StatusCode, ApiError> {
    state.policy.require_write(auth.identity(), region)?;
    let id = parse_id(&id)?;
    state.news.delete_news(region, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
