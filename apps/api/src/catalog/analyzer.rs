//! Skill-gap analysis — compares a user's skills with what a target role expects.
//!
//! Algorithm:
//! 1. user skills: comma split, trimmed, lowercased, empties dropped → set U
//! 2. role: normalized, `"data analyst"` when blank
//! 3. required R = union of skills over catalog rows whose role matches exactly
//! 4. R empty → `DEFAULT_REQUIRED_SKILLS`
//! 5. have = sorted(R ∩ U), missing = sorted(R − U), coverage = ⌊100·|have|/|R|⌋

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::loader::{normalize, split_skills, SkillCatalogEntry};

/// Role analysed when the caller leaves the target blank.
pub const DEFAULT_TARGET_ROLE: &str = "data analyst";

/// Required skills for any role the catalog does not know.
pub const DEFAULT_REQUIRED_SKILLS: [&str; 8] = [
    "python",
    "sql",
    "statistics",
    "excel",
    "data visualization",
    "tableau",
    "power bi",
    "etl",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapReport {
    pub target_role: String,
    pub have_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub coverage_percent: u32, // 0 – 100, truncated
}

/// Computes the gap report. Pure: depends only on its arguments.
pub fn analyze(
    user_skills_csv: &str,
    target_role: &str,
    catalog: &[SkillCatalogEntry],
) -> GapReport {
    let user: BTreeSet<String> = split_skills(user_skills_csv).into_iter().collect();

    let role = match normalize(target_role) {
        r if r.is_empty() => DEFAULT_TARGET_ROLE.to_string(),
        r => r,
    };

    let mut required: BTreeSet<String> = catalog
        .iter()
        .filter(|entry| entry.role == role)
        .flat_map(|entry| entry.skills.iter().cloned())
        .collect();

    if required.is_empty() {
        required = DEFAULT_REQUIRED_SKILLS.iter().map(|s| s.to_string()).collect();
    }

    // BTreeSet iteration is already sorted.
    let (have_skills, missing_skills): (Vec<String>, Vec<String>) =
        required.iter().cloned().partition(|skill| user.contains(skill));

    let coverage_percent = coverage(have_skills.len(), required.len());

    GapReport {
        target_role: role,
        have_skills,
        missing_skills,
        coverage_percent,
    }
}

/// Integer percentage, truncated toward zero. Zero when nothing is required.
fn coverage(matched: usize, required: usize) -> u32 {
    if required == 0 {
        return 0;
    }
    (matched * 100 / required) as u32
}
