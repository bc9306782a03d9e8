use axum::{extract::State, Json};

use crate::advisor::{build_learning_plan, suggest_career_paths, LearningPlanRequest};
use crate::models::feature::FeatureResponse;
use crate::models::profile::UserProfile;
use crate::state::AppState;

/// POST /api/v1/careers/suggestions
pub async fn handle_career_paths(
    State(state): State<AppState>,
    Json(profile): Json<UserProfile>,
) -> Json<FeatureResponse> {
    Json(suggest_career_paths(&state.gateway, &profile).await)
}

/// POST /api/v1/learning-plans
pub async fn handle_learning_plan(
    State(state): State<AppState>,
    Json(request): Json<LearningPlanRequest>,
) -> Json<FeatureResponse> {
    Json(build_learning_plan(&state.gateway, &request).await)
}
