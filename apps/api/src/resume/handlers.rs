use axum::{extract::State, Json};
use serde::Deserialize;

use crate::models::feature::FeatureResponse;
use crate::resume::review_resume;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ResumeReviewRequest {
    pub resume_text: String,
    pub target_role: String,
}

/// POST /api/v1/resumes/review
pub async fn handle_resume_review(
    State(state): State<AppState>,
    Json(request): Json<ResumeReviewRequest>,
) -> Json<FeatureResponse> {
    Json(review_resume(&state.gateway, &request.resume_text, &request.target_role).await)
}
