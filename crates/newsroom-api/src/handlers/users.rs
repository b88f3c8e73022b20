//! Account management handlers (editor-only).

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;
use validator::Validate;

use newsroom_core::AppError;
use newsroom_entity::{Account, AccountRole, AccountSummary, AccountUpdate};

use crate::dto::request::{CreateAccountRequest, UpdateAccountRequest};
use crate::error::ApiError;
use crate::extractors::AuthSession;
use crate::state::AppState;

/// Account identifier path segment (percent-decoded by the router).
#[derive(Debug, Deserialize)]
pub struct UserPath {
    id: String,
}

/// GET /api/users
pub async fn list(
    State(state): State<AppState>,
    auth: AuthSession,
) -> Result<Json<Vec<AccountSummary>>, ApiError> {
    state.policy.require_account_manager(auth.identity())?;
    Ok(Json(state.accounts.list().await))
}

/// POST /api/users
pub async fn create(
    State(state): State<AppState>,
    auth: AuthSession,
    Json(req): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<AccountSummary>), ApiError> {
    state.policy.require_account_manager(auth.identity())?;
    req.validate()
        .map_err(|_| AppError::validation("Missing required fields"))?;
    let role: AccountRole = req.role.parse()?;
    let password_hash = state.password_hasher.hash_password(&req.password)?;

    let summary = state
        .accounts
        .insert(Account {
            id: req.id,
            password_hash,
            role,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(summary)))
}

/// PUT /api/users/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(UserPath { id }): Path<UserPath>,
    Json(req): Json<UpdateAccountRequest>,
) -> Result<Json<AccountSummary>, ApiError> {
    state.policy.require_account_manager(auth.identity())?;

    let role = match req.role.as_deref() {
        None | Some("") => None,
        Some(raw) => Some(raw.parse::<AccountRole>()?),
    };
    // An omitted or empty password leaves the stored hash untouched.
    let password_hash = match req.password.as_deref() {
        None | Some("") => None,
        Some(plaintext) => Some(state.password_hasher.hash_password(plaintext)?),
    };
    let new_id = req.id.filter(|candidate| !candidate.is_empty());

    let summary = state
        .accounts
        .update(
            &id,
            AccountUpdate {
                id: new_id,
                password_hash,
                role,
            },
        )
        .await?;
    Ok(Json(summary))
}

/// DELETE /api/users/{id}
pub async fn remove(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(UserPath { id }): Path<UserPath>,
) -> Result<StatusCode, ApiError> {
    let Some(actor) = auth.identity() else {
        return Err(AppError::unauthorized("Unauthorized").into());
    };
    state.policy.require_account_manager(Some(actor))?;

    state.accounts.delete(&id, &actor.account_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
