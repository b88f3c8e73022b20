//! `AuthSession` extractor — resolves the session cookie, if any, into the
//! identity it vouches for.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;

use newsroom_entity::Identity;

use crate::state::AppState;

/// The identity behind the request's session cookie, or `None` for an
/// anonymous, unknown, or expired session.
///
/// Extraction never rejects: reads are public, and the write handlers pass
/// the inner option to the access policy, which turns `None` into a 401.
#[derive(Debug, Clone)]
pub struct AuthSession(pub Option<Identity>);

impl AuthSession {
    /// Returns the authenticated identity, if any.
    pub fn identity(&self) -> Option<&Identity> {
        self.0.as_ref()
    }
}

impl FromRequestParts<AppState> for AuthSession {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let identity = jar
            .get(&state.config.session.cookie_name)
            .and_then(|cookie| state.sessions.current(cookie.value()));
        Ok(AuthSession(identity))
    }
}
