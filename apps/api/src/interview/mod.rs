//! Mock interview — a multi-turn conversation held in an explicit session.
//!
//! Flow: start → (answer → feedback + next question)*.
//! Live turns send the whole history to the gateway. Offline turns come from
//! `offline::offline_reply`, which advances `question_index`.

pub mod handlers;
pub mod offline;
pub mod prompts;
pub mod store;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::llm_client::prompts::INTERVIEWER_SYSTEM;
use crate::llm_client::{ChatMessage, Gateway, GatewayFailure};
use crate::models::feature::{fallback_notice, ContentMode};

pub use crate::llm_client::ChatMessage as ConversationTurn;

/// Role interviewed for when the request leaves it blank.
pub const DEFAULT_INTERVIEW_ROLE: &str = "Data Analyst";

const INTERVIEW_TEMPERATURE: f32 = 0.5;

/// System prompt plus opening instruction; never shown in the transcript.
const HIDDEN_TURNS: usize = 2;

/// One candidate's interview. Turns are append-only.
#[derive(Debug, Clone, Serialize)]
pub struct InterviewSession {
    pub id: Uuid,
    pub target_role: String,
    turns: Vec<ConversationTurn>,
    /// Position in the offline question list; only offline replies advance it.
    pub question_index: usize,
    pub created_at: DateTime<Utc>,
}

impl InterviewSession {
    pub fn new(target_role: &str) -> Self {
        let target_role = match target_role.trim() {
            "" => DEFAULT_INTERVIEW_ROLE.to_string(),
            role => role.to_string(),
        };

        let turns = vec![
            ChatMessage::system(INTERVIEWER_SYSTEM),
            ChatMessage::user(prompts::opening_instruction(&target_role)),
        ];

        Self {
            id: Uuid::new_v4(),
            target_role,
            turns,
            question_index: 0,
            created_at: Utc::now(),
        }
    }

    /// Full history, including the hidden system and opening turns.
    pub fn history(&self) -> &[ConversationTurn] {
        &self.turns
    }

    /// Turns the candidate sees: everything after the hidden opening.
    pub fn transcript(&self) -> &[ConversationTurn] {
        &self.turns[HIDDEN_TURNS..]
    }

    fn push(&mut self, turn: ConversationTurn) {
        self.turns.push(turn);
    }
}

/// Turns added by one interview step and how they were produced.
#[derive(Debug, Clone, Serialize)]
pub struct InterviewReply {
    pub mode: ContentMode,
    pub notice: Option<String>,
    pub turns: Vec<ConversationTurn>,
}

/// Creates a session and asks the opening question.
pub async fn start_interview(
    gateway: &Gateway,
    target_role: &str,
) -> (InterviewSession, InterviewReply) {
    let mut session = InterviewSession::new(target_role);

    let result = gateway.chat(session.history(), INTERVIEW_TEMPERATURE).await;

    let reply = match result {
        Ok(text) => live_reply(text),
        Err(failure) => {
            let notice = fallback_notice("interview opening", &failure);
            let (greeting, question) = offline::offline_opening(&session.target_role);
            InterviewReply {
                mode: ContentMode::Offline,
                notice,
                turns: vec![
                    ChatMessage::assistant(greeting),
                    ChatMessage::assistant(question),
                ],
            }
        }
    };

    for turn in &reply.turns {
        session.push(turn.clone());
    }

    info!(
        "Interview {} started for '{}' ({:?})",
        session.id, session.target_role, reply.mode
    );
    (session, reply)
}

/// Records the candidate's answer and appends the interviewer's response.
/// The returned turns include the answer itself.
pub async fn answer_interview(
    gateway: &Gateway,
    session: &mut InterviewSession,
    answer: &str,
) -> InterviewReply {
    let answer_turn = ChatMessage::user(answer);
    session.push(answer_turn.clone());

    let result: Result<String, GatewayFailure> =
        gateway.chat(session.history(), INTERVIEW_TEMPERATURE).await;

    let mut reply = match result {
        Ok(text) => live_reply(text),
        Err(failure) => {
            let notice = fallback_notice("interview", &failure);
            let offline = offline::offline_reply(session.question_index);
            session.question_index = offline.next_index;
            InterviewReply {
                mode: ContentMode::Offline,
                notice,
                turns: vec![
                    ChatMessage::assistant(offline.feedback),
                    ChatMessage::assistant(offline.next_question),
                ],
            }
        }
    };

    for turn in &reply.turns {
        session.push(turn.clone());
    }
    reply.turns.insert(0, answer_turn);

    info!(
        "Interview {}: answer recorded, {} turns total ({:?})",
        session.id,
        session.turns.len(),
        reply.mode
    );
    reply
}

fn live_reply(text: String) -> InterviewReply {
    InterviewReply {
        mode: ContentMode::Live,
        notice: None,
        turns: vec![ChatMessage::assistant(text)],
    }
}
