use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::models::profile::{Profile, ProfileUpdate};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub success: bool,
    pub profile: Profile,
}

/// GET /api/profile
pub async fn handle_get_profile(State(state): State<AppState>) -> Json<ProfileResponse> {
    Json(ProfileResponse {
        success: true,
        profile: state.profile.snapshot().await,
    })
}

/// PUT /api/profile
///
/// Partial update: fields absent from the body keep their current value.
pub async fn handle_update_profile(
    State(state): State<AppState>,
    AppJson(update): AppJson<ProfileUpdate>,
) -> Result<Json<ProfileResponse>, AppError> {
    let profile = state.profile.apply(update).await;
    tracing::info!("Profile updated for '{}'", profile.name);

    Ok(Json(ProfileResponse {
        success: true,
        profile,
    }))
}
