use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::recommendation::jitter::apply_jitter;
use crate::recommendation::service::Recommendation;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub success: bool,
    pub recommendations: Vec<Recommendation>,
    pub total: usize,
}

/// GET /api/recommendations
///
/// Ranks the catalogue against the stored profile. When `SCORE_JITTER` is on,
/// displayed percentages are perturbed after the order is fixed.
pub async fn handle_get_recommendations(
    State(state): State<AppState>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let mut recommendations = state
        .recommendations
        .recommend(None, state.config.recommendation_count)
        .await;

    if state.config.score_jitter {
        apply_jitter(&mut recommendations, &mut rand::thread_rng());
    }

    tracing::debug!("Serving {} recommendations", recommendations.len());

    Ok(Json(RecommendationsResponse {
        success: true,
        total: recommendations.len(),
        recommendations,
    }))
}
