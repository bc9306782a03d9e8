// Offline stand-ins for career-path and learning-plan output. Fixed content:
// they signal degraded mode rather than attempt to answer.

pub const CAREER_PATHS_HEADING: &str = "**(Fallback) Career Advisor — offline mode**";
pub const LEARNING_PLAN_HEADING: &str = "**(Fallback) Learning Plan — offline mode**";

const UNAVAILABLE_NOTE: &str =
    "Groq API not available. Showing a sample response so the UI stays usable.";

pub fn offline_career_paths() -> String {
    format!(
        "{CAREER_PATHS_HEADING}\n\n\
         {UNAVAILABLE_NOTE}\n\n\
         - Suggested roles: Data Analyst, ML Engineer, BI Analyst\n\
         - Must-have skills: Python, SQL, Statistics, Excel\n\
         - Beginner projects: Sales dashboard, Kaggle EDA, simple ML model\n\
         - Expected salary: 3L–7L (entry-level, India)\n"
    )
}

pub fn offline_learning_plan() -> String {
    format!(
        "{LEARNING_PLAN_HEADING}\n\n\
         {UNAVAILABLE_NOTE}\n\n\
         - Phase 1 (weeks 1–4): Excel, SQL basics, descriptive statistics\n\
         - Phase 2 (weeks 5–8): Python with pandas, data cleaning, visualization\n\
         - Phase 3 (weeks 9–12): Tableau or Power BI dashboards, a capstone project\n\
         - Portfolio: Sales dashboard, Kaggle EDA notebook, SQL case study\n\
         - Final checklist: resume updated, GitHub portfolio live, 3 projects documented\n"
    )
}
