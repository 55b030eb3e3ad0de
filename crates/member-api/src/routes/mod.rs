//! Route definitions
//!
//! Member and profile routes are mounted under /api.

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::handlers::{health, members, profiles};
use crate::state::AppState;

/// Create the main API router (health routes are separate so they skip rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        // Members
        .route(
            "/members",
            post(members::create_member).get(members::list_members),
        )
        .route(
            "/members/:member_no",
            get(members::get_member).delete(members::delete_member),
        )
        // Profiles
        .route("/members/:member_no/profiles", post(profiles::create_profile))
        .route(
            "/members/:member_no/profiles/:profile_no",
            patch(profiles::update_profile).delete(profiles::delete_profile),
        )
}
