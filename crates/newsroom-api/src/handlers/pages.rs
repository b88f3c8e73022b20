//! Protected page-serving routes.
//!
//! Same gate as the write API, expressed at the page level: the admin
//! surfaces are static files that only the matching role gets to fetch.

use std::path::Path as FsPath;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::error::ApiError;
use crate::extractors::{AuthSession, PartitionKey};
use crate::state::AppState;

const FORBIDDEN_PAGE: &str = "<h1>403 Forbidden</h1>";

/// GET /admin.html — the global admin surface. Non-editors are sent back
/// to the front page instead of seeing an error.
pub async fn admin(State(state): State<AppState>, auth: AuthSession) -> Response {
    match auth.identity() {
        Some(identity) if identity.role.is_editor() => {
            serve_page(&state.config.storage.public_dir, "admin.html").await
        }
        _ => Redirect::to("/").into_response(),
    }
}

/// GET /usermanagement.html — editor-only.
pub async fn user_management(State(state): State<AppState>, auth: AuthSession) -> Response {
    match auth.identity() {
        Some(identity) if identity.role.is_editor() => {
            serve_page(&state.config.storage.public_dir, "usermanagement.html").await
        }
        _ => forbidden(),
    }
}

/// GET /{region}/admin.html — the region's own role or an editor.
pub async fn region_admin(
    State(state): State<AppState>,
    PartitionKey(region): PartitionKey,
    auth: AuthSession,
) -> Result<Response, ApiError> {
    let allowed = auth
        .identity()
        .is_some_and(|identity| state.policy.can_write(identity.role, region));

    if !allowed {
        return Ok(forbidden());
    }
    Ok(serve_page(
        &state.config.storage.public_dir,
        &format!("{region}/admin.html"),
    )
    .await)
}

fn forbidden() -> Response {
    (StatusCode::FORBIDDEN, Html(FORBIDDEN_PAGE)).into_response()
}

async fn serve_page(public_dir: &FsPath, relative: &str) -> Response {
    match tokio::fs::read_to_string(public_dir.join(relative)).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!(page = relative, "Failed to read page: {e}");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
