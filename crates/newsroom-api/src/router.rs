//! Route definitions for the newsroom HTTP API.
//!
//! The news/category route family is defined once and mounted twice: bare
//! under `/api` for the global partition and under `/api/{region}` for the
//! continental ones. The `PartitionKey` extractor resolves which partition
//! a request addresses, so no handler is registered per region.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let content_routes = content_routes();

    let api_routes = Router::new()
        .route("/login/admin", post(handlers::auth::login))
        .route("/logout", post(handlers::auth::logout))
        .route("/health", get(handlers::health::health))
        .route(
            "/users",
            get(handlers::users::list).post(handlers::users::create),
        )
        .route(
            "/users/{id}",
            put(handlers::users::update).delete(handlers::users::remove),
        )
        .merge(content_routes.clone())
        .nest("/{region}", content_routes);

    let public_dir = state.config.storage.public_dir.clone();

    Router::new()
        .nest("/api", api_routes)
        .route("/admin.html", get(handlers::pages::admin))
        .route("/usermanagement.html", get(handlers::pages::user_management))
        .route("/{region}/admin.html", get(handlers::pages::region_admin))
        .fallback_service(ServeDir::new(public_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// News + category CRUD for one partition; which partition is decided by
/// where the router is mounted.
fn content_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/news",
            get(handlers::news::list).post(handlers::news::create),
        )
        .route(
            "/news/{id}",
            put(handlers::news::update).delete(handlers::news::remove),
        )
        .route(
            "/news-categories",
            get(handlers::categories::list).post(handlers::categories::create),
        )
        .route(
            "/news-categories/{category}",
            delete(handlers::categories::remove),
        )
}
