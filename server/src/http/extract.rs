//! Request extractors.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use super::{ApiError, AppState};
use crate::persistence::sqlite::Session;

/// Each handler taking a [`Session`] gets its own pooled connection, released
/// when the handler returns.
impl FromRequestParts<AppState> for Session {
    type Rejection = ApiError;

    async fn from_request_parts(_parts: &mut Parts, state: &AppState) -> Result<Self, ApiError> {
        Ok(state.db.session().await?)
    }
}
