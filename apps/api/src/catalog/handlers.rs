use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::extract::AppPath;
use crate::models::listing::Listing;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct InternshipResponse {
    pub success: bool,
    pub internship: Listing,
}

/// GET /api/internship/:id
///
/// Non-integer ids are rejected with 400 by `AppPath`. Any integer that is
/// not a catalogue id, negative or out of `u32` range included, is a 404.
pub async fn handle_get_internship(
    State(state): State<AppState>,
    AppPath(internship_id): AppPath<i64>,
) -> Result<Json<InternshipResponse>, AppError> {
    let internship = u32::try_from(internship_id)
        .ok()
        .and_then(|id| state.catalog.get(id))
        .cloned()
        .ok_or_else(|| AppError::NotFound("Internship not found".to_string()))?;

    Ok(Json(InternshipResponse {
        success: true,
        internship,
    }))
}
