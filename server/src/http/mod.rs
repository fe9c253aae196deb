//! HTTP Routes
//!
//! Axum router for the NeuroTrack REST API. Handlers live in [`endpoints`];
//! every response carries hypermedia links built by [`hypermedia`].

mod endpoints;
mod error;
mod extract;
mod hypermedia;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::persistence::sqlite::Database;

pub use error::ApiError;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

/// Create the main application router
///
/// # Routes
///
/// `DailyLogs`, `Scores`, `Predictions` and `Limits` each expose
/// `GET|POST|PUT /api/{Entity}`, `GET /api/{Entity}/search` and
/// `GET|DELETE /api/{Entity}/{id}`.
pub fn router(state: AppState) -> Router {
    endpoints::routes()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
