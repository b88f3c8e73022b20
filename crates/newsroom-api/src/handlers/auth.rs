//! Auth handlers — login and logout.

use axum::Json;
use axum::extract::State;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::dto::request::LoginRequest;
use crate::dto::response::RedirectResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/login/admin
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<RedirectResponse>), ApiError> {
    let outcome = state.sessions.login(&req.username, &req.password).await?;

    let jar = jar.add(session_cookie(&state, outcome.session.token));
    Ok((
        jar,
        Json(RedirectResponse {
            redirect_to: outcome.redirect,
        }),
    ))
}

/// POST /api/logout
///
/// Always succeeds, session or not; the redirect depends on the role
/// being logged out.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<RedirectResponse>) {
    let token = jar
        .get(&state.config.session.cookie_name)
        .map(|cookie| cookie.value().to_string());
    let redirect = state.sessions.logout(token.as_deref());

    let mut removal = Cookie::new(state.config.session.cookie_name.clone(), "");
    removal.set_path("/");
    (
        jar.remove(removal),
        Json(RedirectResponse {
            redirect_to: redirect,
        }),
    )
}

/// Build the httpOnly session cookie carrying the opaque token.
fn session_cookie(state: &AppState, token: String) -> Cookie<'static> {
    let mut cookie = Cookie::new(state.config.session.cookie_name.clone(), token);
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_path("/");
    cookie.set_max_age(time::Duration::hours(
        state.config.session.ttl_hours as i64,
    ));
    cookie
}
