//! Offline mock interviewer — canned feedback and a fixed question list.
//!
//! The question index only moves forward and clamps on the last question;
//! there is no wraparound.

/// Prefix on offline interviewer turns so the UI can show degraded mode.
pub const OFFLINE_MARKER: &str = "**(Offline mock interviewer)**";

pub const FEEDBACK: &str = "Good structure — try to add a concrete metric next time.";

pub const QUESTIONS: [&str; 4] = [
    "Tell me about yourself.",
    "Why do you want this role?",
    "Describe a challenging project you worked on and how you solved problems.",
    "Explain a technical concept (e.g., normalization) to a non-technical audience.",
];

/// What the offline interviewer says after one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfflineReply {
    pub feedback: String,
    pub next_question: &'static str,
    pub next_index: usize,
}

/// Opening lines for an offline session: a marked greeting, then the first question.
pub fn offline_opening(target_role: &str) -> (String, &'static str) {
    (
        format!("{OFFLINE_MARKER} Let's begin your mock interview for the role: {target_role}."),
        QUESTIONS[0],
    )
}

/// Reply to the answer given at `question_index`.
/// The session owns the history; the canned reply depends only on this index.
/// After N answers from index 0 the question asked is `QUESTIONS[min(N, 3)]`.
pub fn offline_reply(question_index: usize) -> OfflineReply {
    let next_index = question_index.saturating_add(1);
    OfflineReply {
        feedback: format!("{OFFLINE_MARKER} {FEEDBACK}"),
        next_question: QUESTIONS[next_index.min(QUESTIONS.len() - 1)],
        next_index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_answer_asks_second_question() {
        let reply = offline_reply(0);
        assert_eq!(reply.next_question, QUESTIONS[1]);
        assert_eq!(reply.next_index, 1);
        assert!(reply.feedback.starts_with(OFFLINE_MARKER));
        assert!(reply.feedback.ends_with(FEEDBACK));
    }

    #[test]
    fn test_question_index_clamps_on_exhaustion() {
        let mut index = 0;
        for n in 1..=10 {
            let reply = offline_reply(index);
            assert_eq!(reply.next_question, QUESTIONS[n.min(3)], "answer {n}");
            index = reply.next_index;
        }
        assert_eq!(index, 10);
    }

    #[test]
    fn test_huge_index_does_not_overflow() {
        let reply = offline_reply(usize::MAX);
        assert_eq!(reply.next_question, QUESTIONS[3]);
    }

    #[test]
    fn test_opening_is_marked_and_asks_first_question() {
        let (greeting, question) = offline_opening("Data Analyst");
        assert!(greeting.starts_with(OFFLINE_MARKER));
        assert!(greeting.contains("Data Analyst"));
        assert_eq!(question, QUESTIONS[0]);
    }
}
