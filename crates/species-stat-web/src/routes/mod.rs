//! HTTP routes for the survey API.

mod api;

pub use api::*;

use crate::AppState;
use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(api::health))
        .route("/api/taxonomy", get(api::get_taxonomy))
        .route("/api/users", post(api::create_user))
        .route("/api/users/:username", get(api::get_user))
        .route("/api/users/:username/userinfo", put(api::put_userinfo))
        .route("/api/users/:username/contacts", post(api::import_contacts))
        .route("/api/users/:username/pending", get(api::get_pending))
        .route("/api/users/:username/responses", post(api::record_responses))
        .route("/api/results/:result_id", get(api::get_result))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
