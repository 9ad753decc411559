use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Options for dataset verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateOptions {
    /// Fail on any violation.
    pub strict: bool,
    /// Limit the number of examples kept in the report.
    pub max_examples: usize,
    /// Generation timestamp; enables the date window checks when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_of: Option<NaiveDateTime>,
}

impl Default for EvaluateOptions {
    fn default() -> Self {
        Self {
            strict: true,
            max_examples: 20,
            as_of: None,
        }
    }
}

/// Structured violation record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub code: String,
    pub entity: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_index: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
}

/// Rows found for one entity file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityCount {
    pub entity: String,
    pub relative_path: String,
    pub present: bool,
    pub rows: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationReport {
    pub entities: Vec<EntityCount>,
    pub checks_run: u64,
    pub violations_total: u64,
    pub violations_by_code: BTreeMap<String, u64>,
    /// First violations found, capped at `max_examples`.
    pub examples: Vec<Violation>,
}

impl VerificationReport {
    pub fn is_clean(&self) -> bool {
        self.violations_total == 0
    }

    pub fn rows(&self, entity: &str) -> Option<u64> {
        self.entities
            .iter()
            .find(|count| count.entity == entity)
            .map(|count| count.rows)
    }
}

/// Result of a dataset verification.
#[derive(Debug, Clone)]
pub struct EvaluationResult {
    pub dataset_dir: PathBuf,
    pub report: VerificationReport,
}
