// Prompt builders for career-path suggestions and learning plans.

use crate::models::profile::UserProfile;

/// Role a learning plan targets when the request leaves it blank.
pub const DEFAULT_PLAN_ROLE: &str = "Data Analyst";

/// Career-path prompt template.
/// Replace: {education}, {experience}, {skills}, {interests}
const CAREER_PATHS_TEMPLATE: &str = r#"Profile:
- Education: {education}
- Experience: {experience}
- Skills: {skills}
- Interests: {interests}

Task: Suggest 4–6 high-demand career paths suitable for this profile in India:
- What the role does
- Why it's a good fit
- 3 must-have skills
- Starter projects
- Entry-level salary (INR)
Format in clean markdown."#;

/// Learning-plan prompt template.
/// Replace: {target_role}, {duration}, {skills}, {interests}
const LEARNING_PLAN_TEMPLATE: &str = r#"Create a structured learning plan to become a strong {target_role} in {duration}.
Student's current skills: {skills}
Interests: {interests}

Include:
- Phase-by-phase roadmap
- Weekly outcomes
- Free resources (YouTube, docs, projects)
- 3 portfolio projects with acceptance criteria
- Final checklist

Keep it practical and India-friendly."#;

pub fn career_paths_prompt(profile: &UserProfile) -> String {
    CAREER_PATHS_TEMPLATE
        .replace("{education}", &profile.education)
        .replace("{experience}", &profile.experience)
        .replace("{skills}", &profile.skills)
        .replace("{interests}", &profile.interests)
}

pub fn learning_plan_prompt(
    skills: &str,
    interests: &str,
    duration: &str,
    target_role: &str,
) -> String {
    let target_role = match target_role.trim() {
        "" => DEFAULT_PLAN_ROLE,
        role => role,
    };

    LEARNING_PLAN_TEMPLATE
        .replace("{target_role}", target_role)
        .replace("{duration}", duration)
        .replace("{skills}", skills)
        .replace("{interests}", interests)
}
