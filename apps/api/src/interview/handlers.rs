use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::{answer_interview, start_interview, ConversationTurn};
use crate::models::feature::ContentMode;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StartInterviewRequest {
    pub target_role: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AnswerRequest {
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct InterviewTurnsResponse {
    pub session_id: Uuid,
    pub target_role: String,
    pub mode: ContentMode,
    pub notice: Option<String>,
    pub turns: Vec<ConversationTurn>,
}

#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    pub session_id: Uuid,
    pub target_role: String,
    pub question_index: usize,
    pub turns: Vec<ConversationTurn>,
}

/// POST /api/v1/interviews
///
/// Opens a session and returns the interviewer's opening turns.
pub async fn handle_start_interview(
    State(state): State<AppState>,
    Json(request): Json<StartInterviewRequest>,
) -> Json<InterviewTurnsResponse> {
    let (session, reply) = start_interview(&state.gateway, &request.target_role).await;
    let target_role = session.target_role.clone();
    let session_id = state.sessions.insert(session).await;

    Json(InterviewTurnsResponse {
        session_id,
        target_role,
        mode: reply.mode,
        notice: reply.notice,
        turns: reply.turns,
    })
}

/// POST /api/v1/interviews/:id/answers
///
/// Appends the answer and returns only the turns this step added.
pub async fn handle_answer(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<AnswerRequest>,
) -> Result<Json<InterviewTurnsResponse>, AppError> {
    let answer = request.answer.trim();
    if answer.is_empty() {
        return Err(AppError::Validation("answer cannot be empty".to_string()));
    }

    let session = state
        .sessions
        .get(session_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Interview session {session_id} not found")))?;

    // Held across the gateway call: turns of one session are appended in order.
    let mut session = session.lock().await;
    let reply = answer_interview(&state.gateway, &mut session, answer).await;

    Ok(Json(InterviewTurnsResponse {
        session_id,
        target_role: session.target_role.clone(),
        mode: reply.mode,
        notice: reply.notice,
        turns: reply.turns,
    }))
}

/// GET /api/v1/interviews/:id
pub async fn handle_get_transcript(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<TranscriptResponse>, AppError> {
    let session = state
        .sessions
        .get(session_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Interview session {session_id} not found")))?;

    let session = session.lock().await;
    Ok(Json(TranscriptResponse {
        session_id,
        target_role: session.target_role.clone(),
        question_index: session.question_index,
        turns: session.transcript().to_vec(),
    }))
}

/// DELETE /api/v1/interviews/:id
///
/// Ends a session before it expires.
pub async fn handle_end_interview(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.remove(session_id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Interview session {session_id} not found")))
    }
}
