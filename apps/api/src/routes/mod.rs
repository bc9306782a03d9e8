pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::{advisor, catalog, interview, resume};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Career advisor
        .route(
            "/api/v1/careers/suggestions",
            post(advisor::handlers::handle_career_paths),
        )
        .route(
            "/api/v1/learning-plans",
            post(advisor::handlers::handle_learning_plan),
        )
        // Skill gap
        .route("/api/v1/skills/gap", post(catalog::handlers::handle_skill_gap))
        // Resume
        .route(
            "/api/v1/resumes/review",
            post(resume::handlers::handle_resume_review),
        )
        // Mock interview
        .route(
            "/api/v1/interviews",
            post(interview::handlers::handle_start_interview),
        )
        .route(
            "/api/v1/interviews/:id",
            get(interview::handlers::handle_get_transcript)
                .delete(interview::handlers::handle_end_interview),
        )
        .route(
            "/api/v1/interviews/:id/answers",
            post(interview::handlers::handle_answer),
        )
        .with_state(state)
}
