//! `PartitionKey` extractor — resolves the `{region}` path segment.

use std::collections::HashMap;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use newsroom_core::AppError;
use newsroom_entity::Region;

use crate::error::ApiError;
use crate::state::AppState;

/// The partition a route addresses.
///
/// Routes mounted under `/api/{region}` carry the region in the path; the
/// unprefixed route family addresses the global partition. A segment that
/// is not one of the six continental regions is a 404 — `global` has no
/// prefixed routes of its own.
#[derive(Debug, Clone, Copy)]
pub struct PartitionKey(pub Region);

impl FromRequestParts<AppState> for PartitionKey {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // A route family mounted without the `{region}` segment carries no
        // captures at all; both that and an empty capture set mean global.
        let params = match Path::<HashMap<String, String>>::from_request_parts(parts, state).await {
            Ok(Path(params)) => params,
            Err(_) => HashMap::new(),
        };

        match params.get("region") {
            None => Ok(Self(Region::Global)),
            Some(raw) => match raw.parse::<Region>() {
                Ok(Region::Global) | Err(_) => {
                    Err(AppError::not_found("Not found").into())
                }
                Ok(region) => Ok(Self(region)),
            },
        }
    }
}
