pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::applications::handlers as applications;
use crate::catalog::handlers as catalog;
use crate::profile::handlers as profile;
use crate::recommendation::handlers as recommendation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/recommendations",
            get(recommendation::handle_get_recommendations),
        )
        .route(
            "/api/profile",
            get(profile::handle_get_profile).put(profile::handle_update_profile),
        )
        .route("/api/apply", post(applications::handle_apply))
        .route(
            "/api/applications",
            get(applications::handle_list_applications),
        )
        .route("/api/statistics", get(applications::handle_statistics))
        .route("/api/internship/:id", get(catalog::handle_get_internship))
        .with_state(state)
}
