//! Career advisor — career-path suggestions and learning plans.
//!
//! Both features ask the LLM gateway and fall back to fixed offline content
//! when it is unavailable or the call fails.

pub mod handlers;
pub mod offline;
pub mod prompts;

use serde::Deserialize;
use tracing::info;

use crate::llm_client::prompts::CAREER_MENTOR_SYSTEM;
use crate::llm_client::Gateway;
use crate::models::feature::FeatureResponse;
use crate::models::profile::UserProfile;

const ADVISOR_TEMPERATURE: f32 = 0.4;

/// Request body for a learning plan. Absent fields are empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LearningPlanRequest {
    pub skills: String,
    pub interests: String,
    pub duration: String,
    pub target_role: String,
}

/// Suggests career paths for a student profile.
pub async fn suggest_career_paths(gateway: &Gateway, profile: &UserProfile) -> FeatureResponse {
    let prompt = prompts::career_paths_prompt(profile);
    let result = gateway
        .ask(CAREER_MENTOR_SYSTEM, &prompt, ADVISOR_TEMPERATURE)
        .await;

    let response =
        FeatureResponse::from_gateway("career paths", result, offline::offline_career_paths);
    info!("Career paths served ({:?})", response.mode);
    response
}

/// Builds a phased learning plan toward a target role.
pub async fn build_learning_plan(
    gateway: &Gateway,
    request: &LearningPlanRequest,
) -> FeatureResponse {
    let prompt = prompts::learning_plan_prompt(
        &request.skills,
        &request.interests,
        &request.duration,
        &request.target_role,
    );
    let result = gateway
        .ask(CAREER_MENTOR_SYSTEM, &prompt, ADVISOR_TEMPERATURE)
        .await;

    let response =
        FeatureResponse::from_gateway("learning plan", result, offline::offline_learning_plan);
    info!("Learning plan served ({:?})", response.mode);
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::{live_gateway, offline_gateway, StubCompletion};
    use crate::llm_client::Role;
    use crate::models::feature::ContentMode;

    #[tokio::test]
    async fn test_career_paths_offline_without_gateway() {
        let response = suggest_career_paths(&offline_gateway(), &UserProfile::default()).await;
        assert_eq!(response.mode, ContentMode::Offline);
        assert_eq!(response.content, offline::offline_career_paths());
        assert!(response.notice.is_none());
    }

    #[tokio::test]
    async fn test_career_paths_live_sends_mentor_prompt() {
        let stub = StubCompletion::replying("## Data Analyst\n...");
        let profile = UserProfile {
            skills: "python".to_string(),
            ..UserProfile::default()
        };
        let response = suggest_career_paths(&live_gateway(stub.clone()), &profile).await;

        assert_eq!(response.mode, ContentMode::Live);
        assert_eq!(response.content, "## Data Analyst\n...");

        let seen = stub.seen.lock().unwrap();
        assert_eq!(seen[0][0].role, Role::System);
        assert_eq!(seen[0][0].content, CAREER_MENTOR_SYSTEM);
        assert!(seen[0][1].content.contains("- Skills: python"));
    }

    #[tokio::test]
    async fn test_learning_plan_falls_back_on_call_failure() {
        let request = LearningPlanRequest {
            duration: "3 months".to_string(),
            ..LearningPlanRequest::default()
        };
        let response =
            build_learning_plan(&live_gateway(StubCompletion::failing()), &request).await;
        assert_eq!(response.mode, ContentMode::Offline);
        assert_eq!(response.content, offline::offline_learning_plan());
        assert!(response.notice.is_some());
    }
}
