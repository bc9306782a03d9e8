//! Skill catalog loader — reads the role/skills dataset into normalized entries.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read skills dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("skills dataset line {line}: expected at most {expected} fields, saw {found}")]
    TooManyFields {
        line: u64,
        expected: usize,
        found: usize,
    },
}

/// One dataset row: a role and the skills it expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCatalogEntry {
    /// Lowercased and trimmed.
    pub role: String,
    /// Lowercased and trimmed, empties dropped. Not deduplicated.
    pub skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    skills: Option<String>,
}

impl From<CatalogRow> for SkillCatalogEntry {
    fn from(row: CatalogRow) -> Self {
        SkillCatalogEntry {
            role: normalize(row.role.as_deref().unwrap_or_default()),
            skills: split_skills(row.skills.as_deref().unwrap_or_default()),
        }
    }
}

/// Trims and lowercases a free-text value.
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Splits a comma-joined skill list into normalized, non-empty tokens.
pub fn split_skills(cell: &str) -> Vec<String> {
    cell.split(',')
        .map(normalize)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Reads a CSV with `role` and `skills` header columns. Extra header columns are
/// ignored and short rows leave the missing cells empty. A row wider than the
/// header (usually an unquoted skills cell) or any unreadable row fails the load.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<SkillCatalogEntry>, CatalogError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_path(path.as_ref())?;

    let headers = reader.headers()?.clone();
    let mut entries = Vec::new();

    for record in reader.records() {
        let record = record?;
        if record.len() > headers.len() {
            return Err(CatalogError::TooManyFields {
                line: record.position().map(|p| p.line()).unwrap_or_default(),
                expected: headers.len(),
                found: record.len(),
            });
        }
        let row: CatalogRow = record.deserialize(Some(&headers))?;
        entries.push(SkillCatalogEntry::from(row));
    }

    debug!(
        "Loaded {} catalog rows from {}",
        entries.len(),
        path.as_ref().display()
    );
    Ok(entries)
}

/// Same as [`load_catalog`], but an unreadable dataset becomes an empty catalog.
/// Callers then fall back to the default skill set.
pub fn load_catalog_or_empty(path: impl AsRef<Path>) -> Vec<SkillCatalogEntry> {
    match load_catalog(path.as_ref()) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(
                "Skills dataset {} unavailable, using empty catalog: {e}",
                path.as_ref().display()
            );
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_normalizes_role_and_skills() {
        let file = write_csv("role,skills\n  Data Analyst ,\" Python, SQL ,,Excel \"\n");
        let entries = load_catalog(file.path()).unwrap();
        assert_eq!(
            entries,
            vec![SkillCatalogEntry {
                role: "data analyst".to_string(),
                skills: vec!["python".to_string(), "sql".to_string(), "excel".to_string()],
            }]
        );
    }

    #[test]
    fn test_missing_skills_cell_becomes_empty() {
        let file = write_csv("role,skills\nData Analyst,\nData Engineer\n");
        let entries = load_catalog(file.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.skills.is_empty()));
        assert_eq!(entries[1].role, "data engineer");
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let file = write_csv("role,level,skills\nDevOps Engineer,junior,\"linux, docker\"\n");
        let entries = load_catalog(file.path()).unwrap();
        assert_eq!(entries[0].skills, vec!["linux", "docker"]);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(load_catalog("/definitely/not/here.csv").is_err());
    }

    #[test]
    fn test_missing_file_degrades_to_empty() {
        assert!(load_catalog_or_empty("/definitely/not/here.csv").is_empty());
    }

    #[test]
    fn test_malformed_file_degrades_to_empty() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"role,skills\n\xff\xfe,python\n").unwrap();
        file.flush().unwrap();
        assert!(load_catalog_or_empty(file.path()).is_empty());
    }

    #[test]
    fn test_unquoted_skills_cell_fails_the_load() {
        let file = write_csv("role,skills\nData Analyst,python, sql, excel\n");
        let err = load_catalog(file.path()).unwrap_err();
        assert!(
            matches!(
                err,
                CatalogError::TooManyFields {
                    line: 2,
                    expected: 2,
                    found: 4
                }
            ),
            "got {err:?}"
        );
        assert!(load_catalog_or_empty(file.path()).is_empty());
    }

    #[test]
    fn test_wide_row_analysis_uses_default_skills() {
        let file = write_csv("role,skills\nData Analyst,python, sql, excel\n");
        let catalog = load_catalog_or_empty(file.path());
        let report = crate::catalog::analyzer::analyze("python", "data analyst", &catalog);
        // 1 of the 8 default skills, not 1 of 1
        assert_eq!(report.coverage_percent, 12);
        assert_eq!(report.missing_skills.len(), 7);
    }

    #[test]
    fn test_wide_row_after_good_rows_still_fails() {
        let file =
            write_csv("role,skills\nData Engineer,\"spark, sql\"\nData Analyst,python,sql\n");
        assert!(load_catalog(file.path()).is_err());
    }

    #[test]
    fn test_bundled_dataset_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/skills_dataset.csv");
        let entries = load_catalog(path).unwrap();
        assert!(entries.iter().any(|e| e.role == "data analyst"));
        assert!(entries.iter().all(|e| e.role == e.role.trim().to_lowercase()));
    }
}
