use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::applications::statistics::{build_statistics, Statistics};
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::models::application::Application;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Only "like" records an application; every other value is a pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeAction {
    Like,
    #[default]
    #[serde(other)]
    Pass,
}

#[derive(Debug, Deserialize)]
pub struct ApplyRequest {
    pub internship_id: i64,
    /// Absent or `null` counts as a pass.
    #[serde(default)]
    pub action: Option<SwipeAction>,
}

#[derive(Debug, Serialize)]
pub struct ApplyResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct ApplicationListResponse {
    pub success: bool,
    pub applications: Vec<Application>,
}

#[derive(Debug, Serialize)]
pub struct StatisticsResponse {
    pub success: bool,
    pub statistics: Statistics,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/apply
///
/// "like" records an application; "pass" is acknowledged and leaves the log alone.
pub async fn handle_apply(
    State(state): State<AppState>,
    AppJson(request): AppJson<ApplyRequest>,
) -> Result<Json<ApplyResponse>, AppError> {
    match request.action.unwrap_or_default() {
        SwipeAction::Like => {
            let application = state.applications.record_like(request.internship_id).await;
            tracing::info!(
                "Application {} recorded for internship {}",
                application.id,
                application.internship_id
            );
            Ok(Json(ApplyResponse {
                success: true,
                message: "Application submitted successfully!".to_string(),
                application_id: Some(application.id),
            }))
        }
        SwipeAction::Pass => {
            tracing::debug!("Internship {} passed", request.internship_id);
            Ok(Json(ApplyResponse {
                success: true,
                message: "Internship passed".to_string(),
                application_id: None,
            }))
        }
    }
}

/// GET /api/applications
pub async fn handle_list_applications(
    State(state): State<AppState>,
) -> Json<ApplicationListResponse> {
    Json(ApplicationListResponse {
        success: true,
        applications: state.applications.list().await,
    })
}

/// GET /api/statistics
pub async fn handle_statistics(State(state): State<AppState>) -> Json<StatisticsResponse> {
    let counts = state.applications.counts().await;
    let statistics = build_statistics(counts, &mut rand::thread_rng());

    Json(StatisticsResponse {
        success: true,
        statistics,
    })
}
