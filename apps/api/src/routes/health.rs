use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service version, LLM availability and the number of open interview sessions.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let llm = if state.gateway.is_available() {
        "available"
    } else {
        "unavailable"
    };

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "pathwise-api",
        "llm": llm,
        "interview_sessions": state.sessions.len().await
    }))
}
