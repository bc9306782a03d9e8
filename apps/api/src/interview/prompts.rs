// Prompt builder for the opening turn of a mock interview.
// The system prompt lives in llm_client::prompts::INTERVIEWER_SYSTEM.

pub fn opening_instruction(target_role: &str) -> String {
    format!(
        "Start a mock interview for the role: {target_role}. \
         Begin with a friendly greeting and the first HR question."
    )
}
