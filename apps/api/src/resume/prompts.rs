// Prompt builder for ATS resume reviews.

/// Resume review prompt template. Replace: {target_role}, {resume_text}
const RESUME_REVIEW_TEMPLATE: &str = r#"You are an ATS resume optimization expert.

Improve the following resume for the role: **{target_role}**.

### Your Tasks:
1. Provide an ATS optimization checklist.
2. Rewrite:
   - Resume summary
   - Skills section
   - Two bullet points (strong action verbs + metrics)
3. Suggest important keywords for this role.
4. Provide a clean, one-page resume structure.

### Resume:
---
{resume_text}
---

Format everything in clean markdown."#;

pub fn resume_review_prompt(resume_text: &str, target_role: &str) -> String {
    // Role first: resume text may itself contain "{target_role}".
    RESUME_REVIEW_TEMPLATE
        .replace("{target_role}", target_role)
        .replace("{resume_text}", resume_text)
}
