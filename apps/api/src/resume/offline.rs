//! Offline resume tips — a fixed checklist plus the target-role words the resume lacks.

pub const OFFLINE_TIPS_HEADING: &str = "## Offline Resume Tips (LLM not available)";

const CHECKLIST: [&str; 4] = [
    "- Use strong action verbs (Implemented, Designed, Automated, Delivered).",
    "- Quantify achievements (e.g., 'improved accuracy by 15%').",
    "- Keep bullets short and results-focused.",
    "- Place skills + summary at the top – ATS prefers structured format.",
];

const CLOSING_TIP: &str = "- Keep resume within one page for entry-level roles.";

/// Lowercased target-role words that do not occur anywhere in the resume.
/// Substring match: "data" counts as present inside "database".
pub fn missing_role_keywords(resume_text: &str, target_role: &str) -> Vec<String> {
    let text = resume_text.to_lowercase();
    target_role
        .to_lowercase()
        .split_whitespace()
        .filter(|word| !text.contains(word))
        .map(str::to_string)
        .collect()
}

pub fn offline_resume_tips(resume_text: &str, target_role: &str) -> String {
    let mut tips = vec![OFFLINE_TIPS_HEADING.to_string()];
    tips.extend(CHECKLIST.iter().map(|t| t.to_string()));

    let missing = missing_role_keywords(resume_text, target_role);
    if missing.is_empty() {
        tips.push("- Good: Resume already includes target role keywords.".to_string());
    } else {
        tips.push(format!("- Add keywords for this role: {}", missing.join(", ")));
    }

    tips.push(CLOSING_TIP.to_string());
    tips.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_only_missing_words() {
        let tips = offline_resume_tips("Research Scientist at a lab", "Data Scientist");
        assert!(tips.contains("- Add keywords for this role: data\n"), "{tips}");
    }

    #[test]
    fn test_all_keywords_present() {
        let tips = offline_resume_tips("Worked as a DATA ANALYST intern", "Data Analyst");
        assert!(tips.contains("- Good: Resume already includes target role keywords."));
        assert!(!tips.contains("Add keywords"));
    }

    #[test]
    fn test_substring_counts_as_present() {
        assert!(missing_role_keywords("database administration", "Data Engineer")
            .iter()
            .all(|w| w != "data"));
    }

    #[test]
    fn test_empty_resume_misses_every_word() {
        assert_eq!(
            missing_role_keywords("", "  Machine   Learning Engineer "),
            vec!["machine", "learning", "engineer"]
        );
    }

    #[test]
    fn test_empty_role_needs_no_keywords() {
        let tips = offline_resume_tips("anything", "");
        assert!(tips.contains("- Good:"));
    }

    #[test]
    fn test_layout_is_heading_checklist_keywords_closing() {
        let tips = offline_resume_tips("", "Analyst");
        let lines: Vec<&str> = tips.lines().collect();
        assert_eq!(lines[0], OFFLINE_TIPS_HEADING);
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[5], "- Add keywords for this role: analyst");
        assert_eq!(lines[6], CLOSING_TIP);
    }
}
