use serde::Deserialize;

/// The student profile behind a career-path request. Absent fields are empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub skills: String,
    pub interests: String,
    pub education: String,
    pub experience: String,
}
