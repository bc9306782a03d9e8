//! Resume review — ATS critique from the LLM, or deterministic tips offline.

pub mod handlers;
pub mod offline;
pub mod prompts;

use tracing::info;

use crate::llm_client::prompts::RESUME_REVIEWER_SYSTEM;
use crate::llm_client::Gateway;
use crate::models::feature::FeatureResponse;

/// Role reviewed against when the request leaves it blank.
pub const DEFAULT_RESUME_ROLE: &str = "Data Analyst";

const REVIEW_TEMPERATURE: f32 = 0.3;

/// Reviews a resume for a target role.
pub async fn review_resume(
    gateway: &Gateway,
    resume_text: &str,
    target_role: &str,
) -> FeatureResponse {
    let target_role = match target_role.trim() {
        "" => DEFAULT_RESUME_ROLE,
        role => role,
    };

    let prompt = prompts::resume_review_prompt(resume_text, target_role);
    let result = gateway
        .ask(RESUME_REVIEWER_SYSTEM, &prompt, REVIEW_TEMPERATURE)
        .await
        .map(|text| text.trim().to_string());

    let response = FeatureResponse::from_gateway("resume review", result, || {
        offline::offline_resume_tips(resume_text, target_role)
    });
    info!(
        "Resume review for '{}' served ({:?})",
        target_role, response.mode
    );
    response
}
