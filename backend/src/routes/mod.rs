//! Route definitions for the Fertilizer Advisory Service

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/recommend", get(handlers::get_recommendation))
}
