use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::catalog::analyzer::{analyze, GapReport};
use crate::catalog::loader::load_catalog_or_empty;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SkillGapRequest {
    /// Comma-separated skill list.
    pub skills: String,
    pub target_role: String,
}

/// POST /api/v1/skills/gap
///
/// Re-reads the dataset on every call; an unreadable dataset means the default skill set.
pub async fn handle_skill_gap(
    State(state): State<AppState>,
    Json(request): Json<SkillGapRequest>,
) -> Json<GapReport> {
    let catalog = load_catalog_or_empty(&state.config.skills_dataset_path);
    let report = analyze(&request.skills, &request.target_role, &catalog);

    info!(
        "Skill gap for '{}': {}% coverage, {} missing",
        report.target_role,
        report.coverage_percent,
        report.missing_skills.len()
    );

    Json(report)
}
